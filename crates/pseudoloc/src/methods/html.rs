//! Byte-faithful tag-soup lexer backing [`HtmlPreserver`].
//!
//! The lexer splits a string into literal runs, character entities, and
//! tags. Every token carries raw input slices, and concatenating the raw
//! text of all tokens always reproduces the input exactly; nothing is
//! normalized and no token is ever invented. Input that cannot be tokenized
//! (an unterminated tag, say) fails as a whole so the caller can fall back
//! to leaving the text untouched.
//!
//! [`HtmlPreserver`]: super::HtmlPreserver

use winnow::combinator::{alt, delimited, not, opt, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_until, take_while};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum HtmlToken<'i> {
    /// A run of literal characters.
    Text(&'i str),
    /// A character entity: `&name;`, `&#nnn;`, or `&#xHHH;`.
    Entity(&'i str),
    /// A start tag, decomposed attribute by attribute.
    StartTag(StartTag<'i>),
    /// An end tag, kept whole.
    EndTag(&'i str),
    /// A comment, doctype, or processing instruction, kept whole.
    Comment(&'i str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct StartTag<'i> {
    pub raw: &'i str,
    pub name: &'i str,
    pub attributes: Vec<Attribute<'i>>,
    /// Everything between the last attribute and the closing `>`, inclusive.
    pub tail: &'i str,
}

impl StartTag<'_> {
    pub fn is_self_closing(&self) -> bool {
        self.tail.contains('/')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Attribute<'i> {
    /// Whitespace between the previous piece of the tag and the name.
    pub lead: &'i str,
    pub name: &'i str,
    /// The raw assignment (`=` plus surrounding whitespace); empty for bare
    /// attributes.
    pub assignment: &'i str,
    pub quote: Option<char>,
    pub value: Option<&'i str>,
}

/// The input could not be tokenized as tag soup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("markup could not be tokenized past byte {offset}")]
pub(super) struct LexError {
    pub offset: usize,
}

/// Tokenizes `input`, or fails without partial results.
pub(super) fn lex(input: &str) -> Result<Vec<HtmlToken<'_>>, LexError> {
    let mut remaining = input;
    let tokens: Vec<HtmlToken<'_>> = repeat(0.., token)
        .parse_next(&mut remaining)
        .map_err(|_| LexError {
            offset: input.len() - remaining.len(),
        })?;
    if remaining.is_empty() {
        Ok(tokens)
    } else {
        Err(LexError {
            offset: input.len() - remaining.len(),
        })
    }
}

fn token<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    alt((
        text_run,
        entity,
        stray_ampersand,
        comment,
        end_tag,
        start_tag,
        stray_angle,
    ))
    .parse_next(input)
}

fn text_run<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    take_while(1.., |c| c != '<' && c != '&')
        .map(HtmlToken::Text)
        .parse_next(input)
}

fn entity<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    ('&', entity_body, ';')
        .take()
        .map(HtmlToken::Entity)
        .parse_next(input)
}

fn entity_body(input: &mut &str) -> ModalResult<()> {
    alt((
        (
            '#',
            one_of(('x', 'X')),
            take_while(1.., |c: char| c.is_ascii_hexdigit()),
        )
            .void(),
        ('#', take_while(1.., |c: char| c.is_ascii_digit())).void(),
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').void(),
    ))
    .parse_next(input)
}

/// An `&` that does not begin an entity is literal text.
fn stray_ampersand<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    '&'.take().map(HtmlToken::Text).parse_next(input)
}

fn comment<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    alt((
        ("<!--", take_until(0.., "-->"), "-->").take(),
        ("<!", take_until(0.., ">"), '>').take(),
        ("<?", take_until(0.., ">"), '>').take(),
    ))
    .map(HtmlToken::Comment)
    .parse_next(input)
}

fn end_tag<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    ("</", take_until(0.., ">"), '>')
        .take()
        .map(HtmlToken::EndTag)
        .parse_next(input)
}

fn start_tag<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    let parser = (
        '<',
        tag_name,
        repeat(0.., attribute).map(|attributes: Vec<Attribute<'i>>| attributes),
        tag_tail,
    );
    let ((_, name, attributes, tail), raw) = parser.with_taken().parse_next(input)?;
    Ok(HtmlToken::StartTag(StartTag {
        raw,
        name,
        attributes,
        tail,
    }))
}

fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| !c.is_whitespace() && c != '>' && c != '/'),
    )
        .take()
        .parse_next(input)
}

fn tag_tail<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(0.., char::is_whitespace),
        opt('/'),
        take_while(0.., char::is_whitespace),
        '>',
    )
        .take()
        .parse_next(input)
}

fn attribute<'i>(input: &mut &'i str) -> ModalResult<Attribute<'i>> {
    let lead = take_while(0.., char::is_whitespace).parse_next(input)?;
    let name = take_while(1.., attr_name_char).parse_next(input)?;
    let assignment = opt((
        take_while(0.., char::is_whitespace),
        '=',
        take_while(0.., char::is_whitespace),
    )
        .take())
    .parse_next(input)?;
    let Some(assignment) = assignment else {
        return Ok(Attribute {
            lead,
            name,
            assignment: "",
            quote: None,
            value: None,
        });
    };
    let (quote, value) = attr_value(input)?;
    Ok(Attribute {
        lead,
        name,
        assignment,
        quote,
        value: Some(value),
    })
}

fn attr_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\'')
}

fn attr_value<'i>(input: &mut &'i str) -> ModalResult<(Option<char>, &'i str)> {
    let double = delimited('"', take_while(0.., |c: char| c != '"'), '"');
    if let Some(value) = opt(double).parse_next(input)? {
        return Ok((Some('"'), value));
    }
    let single = delimited('\'', take_while(0.., |c: char| c != '\''), '\'');
    if let Some(value) = opt(single).parse_next(input)? {
        return Ok((Some('\''), value));
    }
    let value = take_while(0.., |c: char| !c.is_whitespace() && c != '>').parse_next(input)?;
    Ok((None, value))
}

/// A `<` that does not begin a tag construct is literal text. A `<` that
/// does look like one but fails to parse is a lex error instead, handled by
/// the caller.
fn stray_angle<'i>(input: &mut &'i str) -> ModalResult<HtmlToken<'i>> {
    ('<', not(one_of(('a'..='z', 'A'..='Z', '/', '!', '?'))))
        .take()
        .map(HtmlToken::Text)
        .parse_next(input)
}
