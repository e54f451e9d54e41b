//! The message document model and its traversal protocol.
//!
//! A [`Message`] is one translatable unit: an optional identifier plus an
//! ordered sequence of typed [`Fragment`]s. Transformation methods implement
//! [`Visitor`] and rewrite the fragment sequence in place through a
//! [`VisitorContext`] while [`Message::accept`] drives the traversal over a
//! snapshot of the sequence, so mutations never disturb the iteration order
//! of the pass that makes them.

mod context;
mod fragment;
mod message;
mod visitor;

pub use context::VisitorContext;
pub use fragment::{Fragment, FragmentId, VariantForm, VariantFragment, VariantSelector};
pub use message::{FormSpec, Message};
pub use visitor::{Traversal, Visitor};
