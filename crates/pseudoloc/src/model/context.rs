use super::fragment::{Fragment, FragmentId, VariantFragment};
use super::message::{Location, Message};
use super::visitor::{Traversal, Visitor};

/// Mutation surface handed to visitors while a message is being traversed.
///
/// All sequence manipulation goes through this context; methods never touch
/// the containers directly. Changes apply to the live sequences immediately,
/// while the traversal that is under way keeps following the snapshot it
/// captured, so a stage's own mutations are only observed by the next stage.
///
/// # Panics
///
/// Every operation taking a reference fragment panics if that fragment is
/// not part of any live sequence of the message. A stale reference is a bug
/// in the calling method and is never silently tolerated.
pub struct VisitorContext<'m> {
    message: &'m mut Message,
}

impl<'m> VisitorContext<'m> {
    pub(super) fn new(message: &'m mut Message) -> VisitorContext<'m> {
        VisitorContext { message }
    }

    /// Creates a localizable text fragment, not yet part of any sequence.
    pub fn create_text_fragment(&mut self, text: impl Into<String>) -> FragmentId {
        self.message.alloc(Fragment::Text(text.into()))
    }

    /// Creates an opaque pass-through fragment, not yet part of any sequence.
    pub fn create_nonlocalizable_fragment(&mut self, text: impl Into<String>) -> FragmentId {
        self.message.alloc(Fragment::Nonlocalizable(text.into()))
    }

    /// Inserts `fragment` before `reference`, or at the start of the message
    /// when `reference` is `None`.
    pub fn insert_before(&mut self, reference: Option<FragmentId>, fragment: FragmentId) {
        match reference {
            None => self.message.root_mut().insert(0, fragment),
            Some(reference) => {
                let location = self.require(reference);
                let position = location.position();
                self.message
                    .sequence_mut(&location)
                    .insert(position, fragment);
            }
        }
    }

    /// Inserts `fragment` after `reference`, or at the end of the message
    /// when `reference` is `None`.
    pub fn insert_after(&mut self, reference: Option<FragmentId>, fragment: FragmentId) {
        match reference {
            None => self.message.root_mut().push(fragment),
            Some(reference) => {
                let location = self.require(reference);
                let position = location.position() + 1;
                self.message
                    .sequence_mut(&location)
                    .insert(position, fragment);
            }
        }
    }

    /// Removes `fragment` from its sequence and splices zero or more
    /// replacements into its former position.
    pub fn replace_fragment(
        &mut self,
        fragment: FragmentId,
        replacements: impl IntoIterator<Item = FragmentId>,
    ) {
        let location = self.require(fragment);
        let position = location.position();
        self.message
            .sequence_mut(&location)
            .splice(position..=position, replacements);
    }

    /// The text of a fragment, live (not snapshotted).
    pub fn text(&self, id: FragmentId) -> Option<&str> {
        self.message.fragment(id).text()
    }

    fn require(&self, id: FragmentId) -> Location {
        self.message.locate(id).unwrap_or_else(|| {
            panic!("stale fragment reference {id}: fragment is not part of the message")
        })
    }

    pub(super) fn run<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        if visitor.visit_message(self) == Traversal::Descend {
            let snapshot = self.message.root().to_vec();
            for id in snapshot {
                self.dispatch(visitor, id);
            }
        }
        visitor.end_message(self);
    }

    fn dispatch<V: Visitor + ?Sized>(&mut self, visitor: &mut V, id: FragmentId) {
        // Clone the dispatched fragment so the visitor may freely mutate the
        // live sequences while reading it.
        let fragment = self.message.fragment(id).clone();
        match fragment {
            Fragment::Text(text) => visitor.visit_text_fragment(self, id, &text),
            Fragment::Nonlocalizable(text) => {
                visitor.visit_nonlocalizable_fragment(self, id, &text);
            }
            Fragment::Placeholder(text) => visitor.visit_placeholder(self, id, &text),
            Fragment::Variant(variant) => self.dispatch_variant(visitor, id, &variant),
        }
    }

    fn dispatch_variant<V: Visitor + ?Sized>(
        &mut self,
        visitor: &mut V,
        id: FragmentId,
        variant: &VariantFragment,
    ) {
        if visitor.visit_variant_fragment(self, id) == Traversal::Descend {
            if visitor.visit_selector(self, id, &variant.selector) == Traversal::Descend {
                for (form_index, form) in variant.selector.forms.iter().enumerate() {
                    let descend =
                        visitor.visit_variant_form(self, id, form_index, &form.name)
                            == Traversal::Descend;
                    if descend {
                        for child in form.fragments().to_vec() {
                            self.dispatch(visitor, child);
                        }
                    }
                    visitor.end_variant_form(self, id, form_index);
                }
            }
            visitor.end_selector(self, id);
        }
        visitor.end_variant_fragment(self, id);
    }
}
