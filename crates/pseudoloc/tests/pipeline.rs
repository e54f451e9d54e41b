//! Integration tests for pipeline construction and execution.

use pseudoloc::{
    BuildError, Message, MethodRegistry, Pipeline, VariantRegistry, variant_pipeline,
};

fn preparsed_html() -> Message {
    let mut message = Message::empty();
    message.push_text("Hello ");
    message.push_nonlocalizable("<br>");
    message.push_text(" there");
    message
}

fn run(pipeline: &mut Pipeline, mut message: Message) -> String {
    pipeline.localize(&mut message);
    message.flatten()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn empty_pipeline_is_identity() {
    let registry = MethodRegistry::default();
    let mut pipeline = Pipeline::builder(&registry).build().unwrap();
    assert!(pipeline.is_empty());
    assert_eq!(pipeline.localize_text("Hello <br> there"), "Hello <br> there");
    assert_eq!(pipeline.localize_text(""), "");
}

#[test]
fn identity_pipeline_leaves_structure_alone() {
    let mut pipeline = Pipeline::identity();
    assert_eq!(run(&mut pipeline, preparsed_html()), "Hello <br> there");
}

#[test]
fn unknown_method_fails_to_build() {
    let registry = MethodRegistry::default();
    let error = Pipeline::builder(&registry)
        .method("bogus")
        .build()
        .unwrap_err();
    assert!(matches!(error, BuildError::UnknownMethod { .. }));
    assert!(error.to_string().contains("unknown method 'bogus'"));
}

#[test]
fn misspelled_method_gets_a_suggestion() {
    let registry = MethodRegistry::default();
    let error = Pipeline::builder(&registry)
        .method("expnd")
        .build()
        .unwrap_err();
    insta::assert_snapshot!(error, @"unknown method 'expnd', did you mean expand?");
}

#[test]
fn invalid_option_value_fails_to_build() {
    let registry = MethodRegistry::default();
    let error = Pipeline::builder(&registry)
        .method("expand:threshold=abc")
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        error,
        @"invalid value 'abc' for option 'expand:threshold': expected a non-negative integer"
    );
}

// =============================================================================
// Composite pipelines
// =============================================================================

#[test]
fn composite_on_preparsed_message() {
    let registry = MethodRegistry::default();
    let mut pipeline = Pipeline::builder(&registry)
        .methods(["accents", "expand", "brackets"])
        .build()
        .unwrap();
    assert_eq!(
        run(&mut pipeline, preparsed_html()),
        "[\u{124}\u{e9}\u{13c}\u{13c}\u{f6}\u{2003}<br>\u{2003}\u{163}\u{125}\u{e9}\u{155}\u{e9} one two]"
    );
}

#[test]
fn composite_with_html_preservation_on_raw_text() {
    let registry = MethodRegistry::default();
    let mut pipeline = Pipeline::builder(&registry)
        .preserve_html(true)
        .methods(["accents", "expand", "brackets"])
        .build()
        .unwrap();
    assert_eq!(
        pipeline.localize_text("Hello <br> there"),
        "[\u{124}\u{e9}\u{13c}\u{13c}\u{f6}\u{2003}<br>\u{2003}\u{163}\u{125}\u{e9}\u{155}\u{e9} one two]"
    );
}

#[test]
fn pipeline_is_reusable_without_state_leaks() {
    let registry = MethodRegistry::default();
    let mut pipeline = Pipeline::builder(&registry)
        .methods(["accents", "expand", "brackets"])
        .build()
        .unwrap();
    let first = run(&mut pipeline, preparsed_html());
    let second = run(&mut pipeline, preparsed_html());
    assert_eq!(first, second);
}

// =============================================================================
// Variant tags
// =============================================================================

#[test]
fn variant_lookup_is_case_insensitive() {
    let methods = MethodRegistry::default();
    let variants = VariantRegistry::default();
    let mut pipeline = variant_pipeline(&methods, &variants, "PsACcent", false)
        .unwrap()
        .unwrap();
    assert_eq!(
        run(&mut pipeline, preparsed_html()),
        "[\u{124}\u{e9}\u{13c}\u{13c}\u{f6}\u{2003}<br>\u{2003}\u{163}\u{125}\u{e9}\u{155}\u{e9} one two]"
    );
}

#[test]
fn psbidi_variant_preserves_html() {
    let methods = MethodRegistry::default();
    let variants = VariantRegistry::default();
    let mut pipeline = variant_pipeline(&methods, &variants, "psbidi", true)
        .unwrap()
        .unwrap();
    assert_eq!(
        pipeline.localize_text("Hello <br> there"),
        "\u{202e}Hello\u{202c} <br> \u{202e}there\u{202c}"
    );
}

#[test]
fn unknown_variant_is_none() {
    let methods = MethodRegistry::default();
    let variants = VariantRegistry::default();
    assert!(variant_pipeline(&methods, &variants, "bogus", true).is_none());
}
