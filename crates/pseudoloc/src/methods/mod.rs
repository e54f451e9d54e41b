//! The built-in transformation methods.
//!
//! Each method is a [`Visitor`](crate::model::Visitor) that rewrites the
//! localizable fragments of a message while leaving markup, placeholders,
//! and other opaque structure untouched. Methods are composed into an
//! ordered [`Pipeline`](crate::pipeline::Pipeline) and applied one after
//! another to the same message.

mod accenter;
mod bracket_adder;
mod expander;
mod fake_bidi;
mod html;
mod html_preserver;
mod pig_latin;

pub use accenter::Accenter;
pub use bracket_adder::BracketAdder;
pub use expander::Expander;
pub use fake_bidi::FakeBidi;
pub use html_preserver::HtmlPreserver;
pub use pig_latin::PigLatin;
