//! Latin-to-Arabic rule table.
//!
//! Rules are grouped into priority tiers. The engine resolves every position
//! by longest pattern, so tiers only document intent and order the listing;
//! rules of equal length never compete because no two rules share a pattern.

mod table;
mod validate;

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::warn;

pub use validate::{validate, RuleTableError};

/// Priority tier of a rule. Lower number = listed (and historically applied) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Idiom = 1,
    Punctuation = 2,
    TaMarbuta = 3,
    Geminate = 4,
    Digraph = 5,
    Consonant = 6,
    Sukun = 7,
    Vowel = 8,
}

impl Tier {
    pub const ALL: [Tier; 8] = [
        Tier::Idiom,
        Tier::Punctuation,
        Tier::TaMarbuta,
        Tier::Geminate,
        Tier::Digraph,
        Tier::Consonant,
        Tier::Sukun,
        Tier::Vowel,
    ];

    pub fn priority(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Idiom => "idiom",
            Tier::Punctuation => "punctuation",
            Tier::TaMarbuta => "ta_marbuta",
            Tier::Geminate => "geminate",
            Tier::Digraph => "digraph",
            Tier::Consonant => "consonant",
            Tier::Sukun => "sukun",
            Tier::Vowel => "vowel",
        }
    }

    /// Parse a tier from its `name()` (case-insensitive, `-` accepted for `_`).
    pub fn from_name(name: &str) -> Option<Tier> {
        let norm = name.trim().to_ascii_lowercase().replace('-', "_");
        Tier::ALL.into_iter().find(|t| t.name() == norm)
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Tier::Idiom => table::IDIOMS,
            Tier::Punctuation => table::PUNCTUATION,
            Tier::TaMarbuta => table::TA_MARBUTA,
            Tier::Geminate => table::GEMINATES,
            Tier::Digraph => table::DIGRAPHS,
            Tier::Consonant => table::CONSONANTS,
            Tier::Sukun => table::SUKUN,
            Tier::Vowel => table::VOWELS,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single literal rewrite: `pattern` (Latin, case-sensitive) → `replacement` (Arabic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub tier: Tier,
}

impl Rule {
    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Build the full rule list, ordered by tier and, within a tier, by declaration.
pub fn build() -> Vec<Rule> {
    Tier::ALL
        .into_iter()
        .flat_map(|tier| {
            tier.entries()
                .iter()
                .map(move |&(pattern, replacement)| Rule {
                    pattern,
                    replacement,
                    tier,
                })
        })
        .collect()
}

/// Immutable, ordered rule collection.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Wrap an ordered rule list. Validation failures are logged; the table is
    /// still usable (a duplicate pattern keeps its first rule).
    pub fn new(rules: Vec<Rule>) -> Self {
        if let Err(e) = validate(&rules) {
            warn!(error = %e, "rule table failed validation");
            debug_assert!(false, "rule table failed validation: {e}");
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn by_tier(&self, tier: Tier) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.tier == tier)
    }

    /// First rule declared for `pattern`.
    pub fn get(&self, pattern: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.pattern == pattern)
    }

    pub fn max_pattern_len(&self) -> usize {
        self.rules.iter().map(Rule::len).max().unwrap_or(0)
    }
}

/// The built-in table, built once per process.
pub fn table() -> &'static RuleTable {
    static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
    INSTANCE.get_or_init(|| RuleTable::new(build()))
}
