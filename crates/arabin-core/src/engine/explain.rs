use serde::Serialize;

use crate::rules::Tier;
use crate::unicode::is_latin;

use super::{TransliterateError, Transliterator};

/// Full diagnostic result for a single input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    /// Trimmed input the offsets refer to.
    pub input: String,
    pub output: String,
    pub segments: Vec<ExplainSegment>,
    /// Latin letters copied through because no rule covers them (e.g. `e`, `o`, `N`).
    pub unmatched_latin: Vec<char>,
}

/// One consumed span of the input and what it produced.
#[derive(Debug, Serialize)]
pub struct ExplainSegment {
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub output: String,
    /// `None` for pass-through characters.
    pub tier: Option<Tier>,
}

impl ExplainSegment {
    pub fn is_passthrough(&self) -> bool {
        self.tier.is_none()
    }
}

impl Transliterator {
    /// Run the scan and record every segment.
    pub fn explain(&self, text: &str) -> Result<ExplainResult, TransliterateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TransliterateError::EmptyInput);
        }

        let mut output = String::new();
        let mut segments = Vec::new();
        let mut unmatched_latin = Vec::new();
        for seg in self.segments(text) {
            let source = &text[seg.start..seg.end];
            let produced = seg.output(text);
            if seg.rule.is_none() {
                unmatched_latin.extend(source.chars().filter(|&c| is_latin(c)));
            }
            output.push_str(produced);
            segments.push(ExplainSegment {
                start: seg.start,
                end: seg.end,
                source: source.to_string(),
                output: produced.to_string(),
                tier: seg.rule.map(|r| r.tier),
            });
        }

        Ok(ExplainResult {
            input: text.to_string(),
            output,
            segments,
            unmatched_latin,
        })
    }
}

/// Explain with the shared built-in engine.
pub fn explain(text: &str) -> Result<ExplainResult, TransliterateError> {
    Transliterator::global().explain(text)
}
