//! Integration tests for the bidi-simulation method.

use pseudoloc::{Message, MethodRegistry, Pipeline};

fn pipeline() -> Pipeline {
    let registry = MethodRegistry::default();
    Pipeline::builder(&registry)
        .method("fakebidi")
        .build()
        .unwrap()
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(pipeline().localize_text(""), "");
}

#[test]
fn single_letter_is_wrapped() {
    assert_eq!(pipeline().localize_text("a"), "\u{202e}a\u{202c}");
}

#[test]
fn digits_and_punctuation_stay_outside_the_overrides() {
    assert_eq!(
        pipeline().localize_text("Hello 123 Goodbye!"),
        "\u{202e}Hello\u{202c} 123 \u{202e}Goodbye\u{202c}!"
    );
}

#[test]
fn accented_letters_stay_inside_a_run() {
    assert_eq!(
        pipeline().localize_text("Chuck Norris peut diviser par z\u{e9}ro."),
        "\u{202e}Chuck\u{202c} \u{202e}Norris\u{202c} \u{202e}peut\u{202c} \
         \u{202e}diviser\u{202c} \u{202e}par\u{202c} \u{202e}z\u{e9}ro\u{202c}."
    );
}

#[test]
fn markup_fragments_are_never_wrapped() {
    let mut pipeline = pipeline();
    let mut message = Message::empty();
    message.push_nonlocalizable("<a href=\"http://chucknorrisfacts.fr/\"><strong>");
    message.push_text("Chuck Norris");
    message.push_nonlocalizable("</strong>");
    message.push_text(" peut diviser par z\u{e9}ro.");
    message.push_nonlocalizable("</a>");
    pipeline.localize(&mut message);
    assert_eq!(
        message.flatten(),
        "<a href=\"http://chucknorrisfacts.fr/\"><strong>\u{202e}Chuck\u{202c} \
         \u{202e}Norris\u{202c}</strong> \u{202e}peut\u{202c} \u{202e}diviser\u{202c} \
         \u{202e}par\u{202c} \u{202e}z\u{e9}ro\u{202c}.</a>"
    );
}

#[test]
fn wrap_state_resets_per_fragment() {
    let mut pipeline = pipeline();
    let mut message = Message::empty();
    message.push_text("ab");
    message.push_text("cd");
    pipeline.localize(&mut message);
    assert_eq!(
        message.flatten(),
        "\u{202e}ab\u{202c}\u{202e}cd\u{202c}"
    );
}
