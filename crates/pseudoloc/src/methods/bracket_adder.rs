use crate::model::{Traversal, Visitor, VisitorContext};

/// Wraps the entire message in square brackets.
///
/// Concatenating separately translated messages is a localization hazard
/// (word order may need to change across the seam); the brackets make every
/// message boundary visible in the running application. Generally the last
/// method in a pipeline.
pub struct BracketAdder;

impl Visitor for BracketAdder {
    fn visit_message(&mut self, ctx: &mut VisitorContext<'_>) -> Traversal {
        let prefix = ctx.create_nonlocalizable_fragment("[");
        ctx.insert_before(None, prefix);
        // The fragments themselves are left alone.
        Traversal::Skip
    }

    fn end_message(&mut self, ctx: &mut VisitorContext<'_>) {
        let suffix = ctx.create_nonlocalizable_fragment("]");
        ctx.insert_after(None, suffix);
    }
}
