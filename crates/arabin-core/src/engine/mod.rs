//! Maximal-munch transliteration engine.
//!
//! Scans the input once, left to right. At each position the longest rule
//! pattern that matches is applied; a character no rule covers (digits,
//! whitespace, letters outside the alphabet) is copied through unchanged.
//! Unknown input is never an error.

pub mod explain;
mod trie;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::rules::{self, Rule, RuleTable};

pub use explain::{explain, ExplainResult, ExplainSegment};
pub use trie::{RuleTrie, TrieLookupResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    #[error("input text is empty")]
    EmptyInput,
}

/// One step of a scan: either a rule application or a single pass-through character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset of the consumed input.
    pub start: usize,
    pub end: usize,
    pub rule: Option<Rule>,
}

impl Segment {
    /// Text this segment contributes to the output.
    pub fn output<'a>(&self, input: &'a str) -> &'a str {
        match self.rule {
            Some(rule) => rule.replacement,
            None => &input[self.start..self.end],
        }
    }
}

/// Iterator over the segments of one left-to-right scan.
pub struct Segments<'a> {
    trie: &'a RuleTrie,
    text: &'a str,
    pos: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let rest = self.text.get(self.pos..).filter(|r| !r.is_empty())?;
        let start = self.pos;
        let (end, rule) = match self.trie.longest_match(rest) {
            Some(rule) => (start + rule.pattern.len(), Some(rule)),
            None => {
                let width = rest.chars().next().map_or(1, char::len_utf8);
                (start + width, None)
            }
        };
        self.pos = end;
        Some(Segment { start, end, rule })
    }
}

/// Immutable engine state; safe to share across threads.
pub struct Transliterator {
    trie: RuleTrie,
}

impl Transliterator {
    pub fn new(table: &RuleTable) -> Self {
        Self {
            trie: RuleTrie::build(table),
        }
    }

    /// Get or initialize the engine over the built-in rule table.
    pub fn global() -> &'static Transliterator {
        static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
        INSTANCE.get_or_init(|| Transliterator::new(rules::table()))
    }

    pub fn trie(&self) -> &RuleTrie {
        &self.trie
    }

    /// Scan `text` as given (no trimming).
    pub fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments {
            trie: &self.trie,
            text,
            pos: 0,
        }
    }

    /// Transliterate `text` after trimming surrounding whitespace.
    pub fn transliterate(&self, text: &str) -> Result<String, TransliterateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TransliterateError::EmptyInput);
        }
        let char_count = text.chars().count();
        let _span = debug_span!("transliterate", char_count).entered();

        let mut out = String::with_capacity(text.len() * 3);
        let mut matched = 0usize;
        let mut passed = 0usize;
        for seg in self.segments(text) {
            if seg.rule.is_some() {
                matched += 1;
            } else {
                passed += 1;
            }
            out.push_str(seg.output(text));
        }

        debug!(matched, passed, out_len = out.len());
        Ok(out)
    }
}

/// Transliterate with the shared built-in engine.
pub fn transliterate(text: &str) -> Result<String, TransliterateError> {
    Transliterator::global().transliterate(text)
}
