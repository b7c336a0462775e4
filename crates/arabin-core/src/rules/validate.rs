use std::collections::HashMap;

use super::{Rule, Tier};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("rule with empty pattern (tier {0})")]
    EmptyPattern(Tier),
    #[error("non-ASCII pattern: {0}")]
    NonAsciiPattern(String),
    #[error("duplicate pattern {pattern:?} in tiers {first} and {second}")]
    DuplicatePattern {
        pattern: String,
        first: Tier,
        second: Tier,
    },
    #[error("replacement for {0:?} contains ASCII text that could match again")]
    LatinReplacement(String),
}

/// Check the invariants the engine relies on.
///
/// Equal-length patterns where one is a prefix of the other are simply equal
/// patterns, so ambiguity reduces to duplicates. Replacements must be free of
/// ASCII so a second pass over the output matches nothing.
pub fn validate(rules: &[Rule]) -> Result<(), RuleTableError> {
    let mut seen: HashMap<&str, Tier> = HashMap::with_capacity(rules.len());
    for rule in rules {
        if rule.pattern.is_empty() {
            return Err(RuleTableError::EmptyPattern(rule.tier));
        }
        if !rule.pattern.is_ascii() {
            return Err(RuleTableError::NonAsciiPattern(rule.pattern.to_string()));
        }
        if rule.replacement.chars().any(|c| c.is_ascii()) {
            return Err(RuleTableError::LatinReplacement(rule.pattern.to_string()));
        }
        if let Some(&first) = seen.get(rule.pattern) {
            return Err(RuleTableError::DuplicatePattern {
                pattern: rule.pattern.to_string(),
                first,
                second: rule.tier,
            });
        }
        seen.insert(rule.pattern, rule.tier);
    }
    Ok(())
}
