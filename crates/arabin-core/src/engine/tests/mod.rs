use super::*;

mod golden;

/// Whole-string substitution, one pass per rule in descending pattern length.
/// Diverges from the scan when a later pass matches across input the scan
/// already consumed as part of another rule (`tsaw`).
fn sequential_chain(text: &str) -> String {
    let mut rules: Vec<Rule> = rules::table().rules().to_vec();
    rules.sort_by_key(|r| std::cmp::Reverse(r.len()));
    let mut out = text.trim().to_string();
    for rule in rules {
        out = out.replace(rule.pattern, rule.replacement);
    }
    out
}

/// Maximal munch by linear search over the rule list at every position.
fn naive_longest_match(text: &str) -> String {
    let rules = rules::table().rules();
    let mut rest = text.trim();
    let mut out = String::new();
    while let Some(c) = rest.chars().next() {
        let best = rules
            .iter()
            .filter(|r| !r.is_empty() && rest.starts_with(r.pattern))
            .max_by_key(|r| r.len());
        match best {
            Some(rule) => {
                out.push_str(rule.replacement);
                rest = &rest[rule.pattern.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}
