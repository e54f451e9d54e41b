use std::fmt::{Display, Formatter, Result as FmtResult};

use super::context::VisitorContext;
use super::fragment::{Fragment, FragmentId, VariantForm, VariantFragment, VariantSelector};
use super::visitor::Visitor;

/// Specification of one variant form for [`Message::push_variant`].
#[derive(Debug, Clone, Default)]
pub struct FormSpec {
    pub name: String,
    pub start: String,
    pub end: String,
    pub fragments: Vec<Fragment>,
}

/// One translatable unit: an optional format-assigned identifier plus an
/// ordered sequence of fragments.
///
/// Fragments live in an arena owned by the message and are addressed by
/// stable [`FragmentId`]s; the root sequence (and each variant form's
/// sequence) is an ordered list of ids. Replacing a fragment retires its id
/// without reusing it.
///
/// # Example
///
/// ```
/// use pseudoloc::Message;
///
/// let mut message = Message::empty().with_id("greeting");
/// message.push_text("Hello ");
/// message.push_placeholder("{0}");
/// message.push_text("!");
/// assert_eq!(message.flatten(), "Hello {0}!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Message {
    id: Option<String>,
    arena: Vec<Fragment>,
    root: Vec<FragmentId>,
}

/// Where a fragment currently sits: in the root sequence or inside a
/// reachable variant form.
pub(super) enum Location {
    Root(usize),
    Form {
        variant: usize,
        form: usize,
        position: usize,
    },
}

impl Location {
    pub(super) fn position(&self) -> usize {
        match self {
            Location::Root(position) | Location::Form { position, .. } => *position,
        }
    }
}

impl Message {
    /// A message with no fragments and no identifier.
    pub fn empty() -> Message {
        Message::default()
    }

    /// A message holding `text` as its single localizable fragment.
    pub fn new(text: impl Into<String>) -> Message {
        let mut message = Message::empty();
        message.push_text(text);
        message
    }

    /// Attaches a format-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Message {
        self.id = Some(id.into());
        self
    }

    /// The format-assigned identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Appends a localizable text fragment.
    pub fn push_text(&mut self, text: impl Into<String>) -> FragmentId {
        let id = self.alloc(Fragment::Text(text.into()));
        self.root.push(id);
        id
    }

    /// Appends an opaque pass-through fragment.
    pub fn push_nonlocalizable(&mut self, text: impl Into<String>) -> FragmentId {
        let id = self.alloc(Fragment::Nonlocalizable(text.into()));
        self.root.push(id);
        id
    }

    /// Appends a placeholder with a fixed textual representation.
    pub fn push_placeholder(&mut self, text: impl Into<String>) -> FragmentId {
        let id = self.alloc(Fragment::Placeholder(text.into()));
        self.root.push(id);
        id
    }

    /// Appends a variant fragment built from `forms`.
    ///
    /// # Panics
    ///
    /// Panics if any form contains a [`Fragment::Variant`]; forms hold leaf
    /// fragments only.
    pub fn push_variant(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        forms: impl IntoIterator<Item = FormSpec>,
    ) -> FragmentId {
        let forms = forms
            .into_iter()
            .map(|spec| {
                let fragments = spec
                    .fragments
                    .into_iter()
                    .map(|fragment| {
                        assert!(
                            !matches!(fragment, Fragment::Variant(_)),
                            "variant forms may only contain leaf fragments"
                        );
                        self.alloc(fragment)
                    })
                    .collect();
                VariantForm {
                    name: spec.name,
                    start: spec.start,
                    end: spec.end,
                    fragments,
                }
            })
            .collect();
        let id = self.alloc(Fragment::Variant(VariantFragment {
            selector: VariantSelector {
                start: start.into(),
                end: end.into(),
                forms,
            },
        }));
        self.root.push(id);
        id
    }

    /// The message's current root fragment sequence.
    pub fn root(&self) -> &[FragmentId] {
        &self.root
    }

    /// Looks up a fragment by id.
    ///
    /// Ids remain valid for the lifetime of the message, including for
    /// fragments that have since been removed from every sequence.
    pub fn fragment(&self, id: FragmentId) -> &Fragment {
        &self.arena[id.0 as usize]
    }

    /// Runs one visitor over this message, dispatching each fragment of a
    /// snapshot of the current sequence to the matching visit method.
    ///
    /// Mutations performed through the [`VisitorContext`] apply to the live
    /// sequence immediately but do not change what the current pass visits.
    pub fn accept<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        VisitorContext::new(self).run(visitor);
    }

    /// Concatenates each leaf's textual representation in traversal order.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        for id in &self.root {
            self.flatten_fragment(*id, &mut out);
        }
        out
    }

    fn flatten_fragment(&self, id: FragmentId, out: &mut String) {
        match self.fragment(id) {
            Fragment::Text(text) | Fragment::Nonlocalizable(text) | Fragment::Placeholder(text) => {
                out.push_str(text);
            }
            Fragment::Variant(variant) => {
                out.push_str(&variant.selector.start);
                for form in &variant.selector.forms {
                    out.push_str(&form.start);
                    for child in &form.fragments {
                        self.flatten_fragment(*child, out);
                    }
                    out.push_str(&form.end);
                }
                out.push_str(&variant.selector.end);
            }
        }
    }

    pub(super) fn alloc(&mut self, fragment: Fragment) -> FragmentId {
        let id = FragmentId(u32::try_from(self.arena.len()).expect("fragment arena overflow"));
        self.arena.push(fragment);
        id
    }

    /// Finds the live sequence currently containing `id`: the root sequence
    /// or a form of a variant reachable from it.
    pub(super) fn locate(&self, id: FragmentId) -> Option<Location> {
        if let Some(position) = self.root.iter().position(|f| *f == id) {
            return Some(Location::Root(position));
        }
        for root_id in &self.root {
            let Fragment::Variant(variant) = self.fragment(*root_id) else {
                continue;
            };
            for (form_index, form) in variant.selector.forms.iter().enumerate() {
                if let Some(position) = form.fragments.iter().position(|f| *f == id) {
                    return Some(Location::Form {
                        variant: root_id.0 as usize,
                        form: form_index,
                        position,
                    });
                }
            }
        }
        None
    }

    pub(super) fn sequence_mut(&mut self, location: &Location) -> &mut Vec<FragmentId> {
        match location {
            Location::Root(_) => &mut self.root,
            Location::Form { variant, form, .. } => {
                let Fragment::Variant(fragment) = &mut self.arena[*variant] else {
                    panic!("located form does not belong to a variant fragment");
                };
                &mut fragment.selector.forms[*form].fragments
            }
        }
    }

    pub(super) fn root_mut(&mut self) -> &mut Vec<FragmentId> {
        &mut self.root
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.flatten())
    }
}
