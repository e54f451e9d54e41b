use std::mem;

use super::html::{Attribute, HtmlToken, StartTag, lex};
use crate::model::{FragmentId, Visitor, VisitorContext};

/// Shields markup from the rest of the pipeline.
///
/// Each localizable text fragment is tokenized as tag soup and re-split into
/// nonlocalizable markup (tags, entities, comments) and localizable text
/// between them. Values of a small set of attributes that carry user-visible
/// text are exposed as localizable too. Text that fails to tokenize is left
/// untouched; pseudo-localization is best effort and never blocks on
/// malformed input. Generally the first method in a pipeline.
///
/// Absent further mutation, the produced fragments flatten back to the
/// original text byte for byte.
pub struct HtmlPreserver;

impl HtmlPreserver {
    pub fn new() -> HtmlPreserver {
        HtmlPreserver
    }
}

impl Default for HtmlPreserver {
    fn default() -> Self {
        HtmlPreserver::new()
    }
}

impl Visitor for HtmlPreserver {
    fn visit_text_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, text: &str) {
        let Ok(tokens) = lex(text) else {
            return;
        };
        let mut result = Vec::new();
        let mut literal = String::new();
        for token in tokens {
            match token {
                HtmlToken::Text(raw) => literal.push_str(raw),
                HtmlToken::Entity(raw) | HtmlToken::EndTag(raw) | HtmlToken::Comment(raw) => {
                    flush_literal(ctx, &mut literal, &mut result);
                    result.push(ctx.create_nonlocalizable_fragment(raw));
                }
                HtmlToken::StartTag(tag) => {
                    flush_literal(ctx, &mut literal, &mut result);
                    if tag.is_self_closing() {
                        result.push(ctx.create_nonlocalizable_fragment(tag.raw));
                    } else {
                        decompose_start_tag(ctx, &tag, &mut result);
                    }
                }
            }
        }
        flush_literal(ctx, &mut literal, &mut result);
        ctx.replace_fragment(id, result);
    }
}

fn flush_literal(ctx: &mut VisitorContext<'_>, literal: &mut String, result: &mut Vec<FragmentId>) {
    if !literal.is_empty() {
        result.push(ctx.create_text_fragment(mem::take(literal)));
    }
}

/// Splits a start tag into nonlocalizable scaffolding with the values of
/// allow-listed attributes exposed as localizable text. For example,
/// `<input value="Submit">` becomes `<input value="` / `Submit` / `">`.
fn decompose_start_tag(
    ctx: &mut VisitorContext<'_>,
    tag: &StartTag<'_>,
    result: &mut Vec<FragmentId>,
) {
    let mut buf = String::from("<");
    buf.push_str(tag.name);
    for attribute in &tag.attributes {
        buf.push_str(attribute.lead);
        buf.push_str(attribute.name);
        buf.push_str(attribute.assignment);
        match attribute.value {
            Some(value) if is_localizable_attribute(tag.name, attribute) => {
                if let Some(quote) = attribute.quote {
                    buf.push(quote);
                }
                result.push(ctx.create_nonlocalizable_fragment(mem::take(&mut buf)));
                result.push(ctx.create_text_fragment(value));
                if let Some(quote) = attribute.quote {
                    buf.push(quote);
                }
            }
            Some(value) => {
                if let Some(quote) = attribute.quote {
                    buf.push(quote);
                    buf.push_str(value);
                    buf.push(quote);
                } else {
                    buf.push_str(value);
                }
            }
            None => {}
        }
    }
    buf.push_str(tag.tail);
    result.push(ctx.create_nonlocalizable_fragment(buf));
}

/// Attributes whose values are user-visible text. `alt` and `title` qualify
/// on any tag; the rest only on specific elements.
fn is_localizable_attribute(tag: &str, attribute: &Attribute<'_>) -> bool {
    if attribute.value.is_none() {
        return false;
    }
    let name = attribute.name.to_ascii_lowercase();
    if matches!(name.as_str(), "alt" | "title") {
        return true;
    }
    let tag = tag.to_ascii_lowercase();
    matches!(
        (tag.as_str(), name.as_str()),
        ("button", "value") | ("input", "value") | ("option", "label") | ("optgroup", "label")
    )
}
