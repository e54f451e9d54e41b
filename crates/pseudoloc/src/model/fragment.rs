use std::fmt::{Display, Formatter, Result as FmtResult};

/// Stable identity of a fragment within one [`Message`](super::Message).
///
/// Identities are handed out by the message's arena and are never reused
/// while the message is alive, so a method can hold on to an id across
/// mutations of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentId(pub(super) u32);

impl Display for FragmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

/// One typed piece of a message.
///
/// Fragment order defines the final rendering order. Flattening a message
/// concatenates each leaf's textual representation in traversal order and
/// reproduces the parsed input exactly as long as no method has mutated
/// anything.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Localizable plain text. The only variant transformation methods may
    /// rewrite.
    Text(String),

    /// Opaque pass-through text: markup, entities, brackets, filler.
    Nonlocalizable(String),

    /// A marker for content substituted at runtime, carrying its fixed
    /// textual representation (e.g. `{0}` or `%1$d`). Never split, never
    /// reordered, never rewritten by any method.
    Placeholder(String),

    /// One of several alternative fragment sequences chosen at runtime,
    /// e.g. plural or gender branching.
    Variant(VariantFragment),
}

impl Fragment {
    /// The localizable or pass-through text of a leaf fragment, if this is
    /// one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) | Fragment::Nonlocalizable(text) | Fragment::Placeholder(text) => {
                Some(text)
            }
            Fragment::Variant(_) => None,
        }
    }
}

/// A branching fragment: a selector with its alternative forms.
#[derive(Debug, Clone)]
pub struct VariantFragment {
    pub selector: VariantSelector,
}

/// The selector of a [`VariantFragment`].
///
/// `start` and `end` are the format-assigned textual framing of the whole
/// construct (e.g. the opening and closing tags of a `<plurals>` block);
/// they are empty for formats without any.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    pub start: String,
    pub end: String,
    pub forms: Vec<VariantForm>,
}

/// One alternative within a [`VariantSelector`], itself an ordered fragment
/// sequence.
///
/// Forms hold leaf fragments only; nesting variant fragments inside a form
/// is not supported.
#[derive(Debug, Clone)]
pub struct VariantForm {
    pub name: String,
    pub start: String,
    pub end: String,
    pub(super) fragments: Vec<FragmentId>,
}

impl VariantForm {
    /// The form's current fragment sequence.
    pub fn fragments(&self) -> &[FragmentId] {
        &self.fragments
    }
}
