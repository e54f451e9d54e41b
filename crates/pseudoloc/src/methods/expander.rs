use std::collections::HashMap;

use crate::model::{FragmentId, Traversal, Visitor, VisitorContext};
use crate::pipeline::BuildError;

/// Default word-count threshold below which a message is considered short.
const DEFAULT_WORD_THRESHOLD: usize = 3;

/// Filler vocabulary, reused cyclically.
const FILLER_WORDS: [&str; 40] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twentyone",
    "twentytwo",
    "twentythree",
    "twentyfour",
    "twentyfive",
    "twentysix",
    "twentyseven",
    "twentyeight",
    "twentynine",
    "thirty",
    "thirtyone",
    "thirtytwo",
    "thirtythree",
    "thirtyfour",
    "thirtyfive",
    "thirtysix",
    "thirtyseven",
    "thirtyeight",
    "thirtynine",
    "forty",
];

/// Lengthens a message by appending filler words, simulating the growth most
/// translations exhibit so truncation bugs surface early.
///
/// Short messages (word count at or below the threshold) grow by about half
/// their codepoint count; longer ones double. The filler is appended as a
/// single nonlocalizable fragment so later methods leave it alone.
pub struct Expander {
    threshold: usize,
    char_count: usize,
    word_count: usize,
}

impl Expander {
    /// An expander with the default threshold.
    pub fn new() -> Expander {
        Expander::with_threshold(DEFAULT_WORD_THRESHOLD)
    }

    /// An expander considering messages of up to `threshold` words short.
    pub fn with_threshold(threshold: usize) -> Expander {
        Expander {
            threshold,
            char_count: 0,
            word_count: 0,
        }
    }

    /// Reads the threshold from the merged option map (`expand:threshold`).
    pub fn from_options(options: &HashMap<String, String>) -> Result<Expander, BuildError> {
        match options.get("expand:threshold") {
            None => Ok(Expander::new()),
            Some(raw) => match raw.parse() {
                Ok(threshold) => Ok(Expander::with_threshold(threshold)),
                Err(_) => Err(BuildError::InvalidOption {
                    option: "expand:threshold".to_string(),
                    value: raw.clone(),
                    message: "expected a non-negative integer".to_string(),
                }),
            },
        }
    }
}

impl Default for Expander {
    fn default() -> Self {
        Expander::new()
    }
}

impl Visitor for Expander {
    fn visit_message(&mut self, _ctx: &mut VisitorContext<'_>) -> Traversal {
        // Counters are per-message; nothing survives into the next call.
        self.char_count = 0;
        self.word_count = 0;
        Traversal::Descend
    }

    fn visit_text_fragment(&mut self, _ctx: &mut VisitorContext<'_>, _id: FragmentId, text: &str) {
        self.char_count += text.chars().count();
        if self.word_count <= self.threshold {
            self.word_count += text.split(' ').filter(|word| !word.is_empty()).count();
        }
    }

    fn end_message(&mut self, ctx: &mut VisitorContext<'_>) {
        let mut budget = if self.word_count <= self.threshold {
            // Short strings grow by about 50%, but always by something.
            (self.char_count + 1).div_ceil(2)
        } else {
            self.char_count
        };
        let mut filler = String::new();
        let mut index = 0;
        while budget > 0 {
            let word = FILLER_WORDS[index % FILLER_WORDS.len()];
            index += 1;
            filler.push(' ');
            filler.push_str(word);
            budget = budget.saturating_sub(word.len() + 1);
        }
        let suffix = ctx.create_nonlocalizable_fragment(filler);
        ctx.insert_after(None, suffix);
    }
}
