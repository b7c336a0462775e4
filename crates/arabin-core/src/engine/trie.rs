use std::collections::BTreeMap;

use lexime_trie::{DoubleArray, TrieSearch};

use crate::rules::{Rule, RuleTable};

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(Rule),
    ExactAndPrefix(Rule),
}

/// Double-array trie over rule patterns; value ids index into `rules`.
pub struct RuleTrie {
    da: DoubleArray<u8>,
    rules: Vec<Rule>,
}

impl RuleTrie {
    pub fn build(table: &RuleTable) -> Self {
        Self::from_rules(table.rules())
    }

    // A repeated pattern keeps its first rule.
    fn from_rules(rules: &[Rule]) -> Self {
        let mut map: BTreeMap<&[u8], Rule> = BTreeMap::new();
        for rule in rules.iter().filter(|r| !r.is_empty()) {
            map.entry(rule.pattern.as_bytes()).or_insert(*rule);
        }
        // BTreeMap is already sorted, as DoubleArray::build requires
        let keys: Vec<&[u8]> = map.keys().copied().collect();
        let rules: Vec<Rule> = map.into_values().collect();
        let da = DoubleArray::<u8>::build(&keys);
        RuleTrie { da, rules }
    }

    /// Classify `pattern` as a whole: complete rule, prefix of longer rules, both, or neither.
    pub fn lookup(&self, pattern: &str) -> TrieLookupResult {
        let pr = self.da.probe(pattern.as_bytes());
        match (pr.value, pr.has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(id), false) => TrieLookupResult::Exact(self.rules[id as usize]),
            (Some(id), true) => TrieLookupResult::ExactAndPrefix(self.rules[id as usize]),
        }
    }

    /// Longest rule whose pattern is a prefix of `input`.
    pub fn longest_match(&self, input: &str) -> Option<Rule> {
        self.da
            .common_prefix_search(input.as_bytes())
            .last()
            .map(|m| self.rules[m.value_id as usize])
    }
}
