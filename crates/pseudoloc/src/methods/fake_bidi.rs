use icu_properties::props::BidiClass;
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed};

use crate::model::{FragmentId, Visitor, VisitorContext};

/// Right-to-left override.
const RLO: char = '\u{202e}';

/// Pop directional formatting.
const PDF: char = '\u{202c}';

/// Simulates a right-to-left locale by wrapping every run of strongly
/// left-to-right codepoints in RLO/PDF overrides.
///
/// Digits, punctuation, and whitespace are never wrapped; letter runs always
/// are. The wrap state resets at the start of every fragment, so no override
/// ever spans markup or placeholders.
pub struct FakeBidi {
    bidi: CodePointMapDataBorrowed<'static, BidiClass>,
}

impl FakeBidi {
    pub fn new() -> FakeBidi {
        FakeBidi {
            bidi: CodePointMapData::<BidiClass>::new(),
        }
    }

    /// Wraps the strong-LTR runs of one string.
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut wrapping = false;
        for ch in text.chars() {
            let needs_wrap = self.bidi.get(ch) == BidiClass::LeftToRight;
            if needs_wrap != wrapping {
                wrapping = needs_wrap;
                out.push(if wrapping { RLO } else { PDF });
            }
            out.push(ch);
        }
        if wrapping {
            out.push(PDF);
        }
        out
    }
}

impl Default for FakeBidi {
    fn default() -> Self {
        FakeBidi::new()
    }
}

impl Visitor for FakeBidi {
    fn visit_text_fragment(&mut self, ctx: &mut VisitorContext<'_>, id: FragmentId, text: &str) {
        let wrapped = self.wrap(text);
        let replacement = ctx.create_text_fragment(wrapped);
        ctx.replace_fragment(id, [replacement]);
    }
}
