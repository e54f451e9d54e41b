use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::model::{FragmentId, Visitor, VisitorContext};

/// Rewrites every word as pig latin, keeping the output loosely readable
/// while making untranslated strings obvious.
pub struct PigLatin;

impl Visitor for PigLatin {
    fn visit_text_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, text: &str) {
        let mut out = String::with_capacity(text.len() + 16);
        for word in text.split_word_bounds() {
            out.push_str(&pig_latinify(word));
        }
        let replacement = ctx.create_text_fragment(out);
        ctx.replace_fragment(id, [replacement]);
    }
}

/// Rewrites one word: everything from the first vowel on, then the leading
/// consonants, then "ay". Segments without letters pass through unchanged.
pub fn pig_latinify(word: &str) -> Cow<'_, str> {
    if !word.chars().any(char::is_alphabetic) {
        return Cow::Borrowed(word);
    }
    let split = first_vowel(word);
    let mut out = String::with_capacity(word.len() + 2);
    out.push_str(&word[split..]);
    out.push_str(&word[..split]);
    out.push_str("ay");
    Cow::Owned(out)
}

fn first_vowel(word: &str) -> usize {
    for (index, ch) in word.char_indices() {
        if matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
            return index;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_starting_with_consonants() {
        assert_eq!(pig_latinify("hello"), "ellohay");
        assert_eq!(pig_latinify("Strings"), "ingsStray");
    }

    #[test]
    fn words_starting_with_vowels() {
        assert_eq!(pig_latinify("apple"), "appleay");
    }

    #[test]
    fn non_letter_segments_pass_through() {
        assert_eq!(pig_latinify(" "), " ");
        assert_eq!(pig_latinify("123"), "123");
        assert_eq!(pig_latinify("!"), "!");
    }

    #[test]
    fn all_consonant_words_rotate_to_themselves() {
        assert_eq!(pig_latinify("tsk"), "tskay");
    }
}
