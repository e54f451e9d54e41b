use super::context::VisitorContext;
use super::fragment::{FragmentId, VariantSelector};

/// Whether a traversal should descend into the construct just visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Visit the construct's children.
    Descend,
    /// Skip the construct's children; the matching `end_*` call still runs.
    Skip,
}

/// The traversal protocol over a message.
///
/// Every method defaults to an identity traversal: `visit_*` methods on
/// containers return [`Traversal::Descend`], leaf visits and `end_*` calls
/// do nothing. A transformation method overrides only the capabilities it
/// needs.
///
/// Leaf visits receive the fragment's id together with its text as captured
/// when the fragment was dispatched; mutations performed through the context
/// during the visit do not change the `text` argument of later visits in the
/// same pass, since the pass iterates a snapshot.
pub trait Visitor {
    /// Called once before any fragment of the message is visited.
    fn visit_message(&mut self, ctx: &mut VisitorContext<'_>) -> Traversal {
        let _ = ctx;
        Traversal::Descend
    }

    /// Called once after the traversal, whether or not it descended.
    fn end_message(&mut self, ctx: &mut VisitorContext<'_>) {
        let _ = ctx;
    }

    /// Visit a localizable text fragment.
    fn visit_text_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, text: &str) {
        let _ = (ctx, id, text);
    }

    /// Visit an opaque pass-through fragment.
    fn visit_nonlocalizable_fragment(
        &mut self,
        ctx: &mut VisitorContext<'_>,
        id: FragmentId,
        text: &str,
    ) {
        let _ = (ctx, id, text);
    }

    /// Visit a placeholder. Its textual representation is immutable.
    fn visit_placeholder(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, text: &str) {
        let _ = (ctx, id, text);
    }

    /// Visit a variant fragment, before its selector.
    fn visit_variant_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId) -> Traversal {
        let _ = (ctx, id);
        Traversal::Descend
    }

    /// Called after a variant fragment's selector has been visited.
    fn end_variant_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId) {
        let _ = (ctx, id);
    }

    /// Visit a variant fragment's selector, before its forms.
    fn visit_selector(
        &mut self,
        ctx: &mut VisitorContext<'_>,
        variant: FragmentId,
        selector: &VariantSelector,
    ) -> Traversal {
        let _ = (ctx, variant, selector);
        Traversal::Descend
    }

    /// Called after all forms of a selector have been visited.
    fn end_selector(&mut self, ctx: &mut VisitorContext<'_>, variant: FragmentId) {
        let _ = (ctx, variant);
    }

    /// Visit one variant form, before its fragment sequence.
    fn visit_variant_form(
        &mut self,
        ctx: &mut VisitorContext<'_>,
        variant: FragmentId,
        form: usize,
        name: &str,
    ) -> Traversal {
        let _ = (ctx, variant, form, name);
        Traversal::Descend
    }

    /// Called after one variant form's fragment sequence has been visited.
    fn end_variant_form(&mut self, ctx: &mut VisitorContext<'_>, variant: FragmentId, form: usize) {
        let _ = (ctx, variant, form);
    }
}
