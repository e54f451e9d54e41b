//! Integration tests for the pig latin method.

use pseudoloc::{Message, MethodRegistry, Pipeline};

fn pipeline() -> Pipeline {
    let registry = MethodRegistry::default();
    Pipeline::builder(&registry)
        .method("piglatin")
        .build()
        .unwrap()
}

#[test]
fn every_word_is_rewritten() {
    assert_eq!(pipeline().localize_text("hello world"), "ellohay orldway");
}

#[test]
fn punctuation_and_numbers_pass_through() {
    assert_eq!(pipeline().localize_text("wait, 10 seconds!"), "aitway, 10 econdssay!");
}

#[test]
fn markup_is_untouched() {
    let mut pipeline = pipeline();
    let mut message = Message::empty();
    message.push_text("click ");
    message.push_nonlocalizable("<b>");
    message.push_text("here");
    message.push_nonlocalizable("</b>");
    pipeline.localize(&mut message);
    assert_eq!(message.flatten(), "ickclay <b>erehay</b>");
}
