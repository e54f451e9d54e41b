//! Integration tests for HTML preservation.
//!
//! The marking visitor wraps whatever the preserver exposes as localizable
//! in `[loc:...]`, making the split visible in the flattened output.

use pseudoloc::{
    FragmentId, Message, MethodRegistry, Pipeline, Visitor, VisitorContext,
};

/// Marks every localizable text fragment it sees.
struct Marker;

impl Visitor for Marker {
    fn visit_text_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, _text: &str) {
        let open = ctx.create_nonlocalizable_fragment("[loc:");
        ctx.insert_before(Some(id), open);
        let close = ctx.create_nonlocalizable_fragment("]");
        ctx.insert_after(Some(id), close);
    }
}

fn registry() -> MethodRegistry {
    let mut registry = MethodRegistry::default();
    registry.register("mark", |_| Ok(Box::new(Marker)));
    registry
}

fn mark(input: &str) -> String {
    let registry = registry();
    let mut pipeline = Pipeline::builder(&registry)
        .preserve_html(true)
        .method("mark")
        .build()
        .unwrap();
    pipeline.localize_text(input)
}

fn preserve_only(input: &str) -> String {
    let registry = MethodRegistry::default();
    let mut pipeline = Pipeline::builder(&registry)
        .preserve_html(true)
        .build()
        .unwrap();
    pipeline.localize_text(input)
}

#[test]
fn plain_text_is_localizable() {
    assert_eq!(mark("Hello there"), "[loc:Hello there]");
}

#[test]
fn tags_shield_their_contents() {
    assert_eq!(mark("Hello <b>there</b>!"), "[loc:Hello ]<b>[loc:there]</b>[loc:!]");
}

#[test]
fn attributes_off_the_allow_list_are_opaque() {
    assert_eq!(
        mark("Hello <a href=\"http://example.com\">there</a>!"),
        "[loc:Hello ]<a href=\"http://example.com\">[loc:there]</a>[loc:!]"
    );
}

#[test]
fn allow_listed_attribute_values_are_localizable() {
    assert_eq!(
        mark("<input value=\"Submit\">"),
        "<input value=\"[loc:Submit]\">"
    );
    assert_eq!(mark("<img alt='Photo'>"), "<img alt='[loc:Photo]'>");
    assert_eq!(
        mark("<a href=\"x\" title=\"Hint\">go</a>"),
        "<a href=\"x\" title=\"[loc:Hint]\">[loc:go]</a>"
    );
}

#[test]
fn entities_are_opaque() {
    assert_eq!(
        mark("Hello &#64; there &#x2D; &amp;"),
        "[loc:Hello ]&#64;[loc: there ]&#x2D;[loc: ]&amp;"
    );
}

#[test]
fn unclosed_tags_are_not_repaired() {
    assert_eq!(mark("Hello <p>there!"), "[loc:Hello ]<p>[loc:there!]");
    assert_eq!(mark("Hello<br>there!"), "[loc:Hello]<br>[loc:there!]");
}

#[test]
fn nested_tags() {
    assert_eq!(
        mark("a<b><i>b<div class=\"class\">c</div></i>d</b>e"),
        "[loc:a]<b><i>[loc:b]<div class=\"class\">[loc:c]</div></i>[loc:d]</b>[loc:e]"
    );
}

#[test]
fn text_that_merely_resembles_markup_is_left_localizable() {
    assert_eq!(mark("x < y & a > b"), "[loc:x < y & a > b]");
}

#[test]
fn self_closing_tags_are_kept_whole() {
    assert_eq!(mark("Hello<br/>there"), "[loc:Hello]<br/>[loc:there]");
}

#[test]
fn unknown_tags_are_still_tags() {
    assert_eq!(mark("Hello <bork>there</bork>"), "[loc:Hello ]<bork>[loc:there]</bork>");
}

#[test]
fn malformed_markup_is_left_untouched() {
    assert_eq!(mark("Hello <a href="), "[loc:Hello <a href=]");
    assert_eq!(mark("Hello <a href=\"x"), "[loc:Hello <a href=\"x]");
}

#[test]
fn preservation_alone_reconstructs_byte_for_byte() {
    for input in [
        "Hello <a href=\"http://example.com\">there</a>!",
        "a<b ><i x = '1' y>b</i>d</b>e",
        "Hello &#64; there &#x2D; &amp;",
        "<!-- note --><input value=\"Submit\" disabled>",
        "x < y & a > b",
        "Hello <p>there!",
        "Hello <a href=\"x",
    ] {
        assert_eq!(preserve_only(input), input);
    }
}

#[test]
fn structured_messages_only_expose_their_text_fragments() {
    let registry = registry();
    let mut pipeline = Pipeline::builder(&registry)
        .preserve_html(true)
        .method("mark")
        .build()
        .unwrap();
    let mut message = Message::empty();
    message.push_nonlocalizable("<wbr>");
    message.push_text("split <b>me</b>");
    pipeline.localize(&mut message);
    assert_eq!(
        message.flatten(),
        "<wbr>[loc:split ]<b>[loc:me]</b>"
    );
}
