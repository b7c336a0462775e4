use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use arabin_core::rules::{self, Rule, RuleTable, Tier};

use super::CliError;

fn parse_tier(name: &str) -> Result<Tier, CliError> {
    Tier::from_name(name).ok_or_else(|| CliError::UnknownTier(name.to_string()))
}

/// Pad by display width; Arabic marks are zero-width and would skew `{:<n}`.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Rules grouped under a header per tier.
pub fn format_rules(table: &RuleTable, only: Option<Tier>) -> String {
    let mut out = String::new();
    for tier in Tier::ALL {
        if only.is_some_and(|t| t != tier) {
            continue;
        }
        let rules: Vec<&Rule> = table.by_tier(tier).collect();
        let _ = writeln!(out, "[{}] {} ({} rules)", tier.priority(), tier, rules.len());
        let width = rules.iter().map(|r| r.pattern.len()).max().unwrap_or(0);
        let shown: Vec<&str> = rules
            .iter()
            .map(|r| {
                if r.replacement.is_empty() {
                    "(deleted)"
                } else {
                    r.replacement
                }
            })
            .collect();
        let out_width = shown.iter().map(|s| s.width()).max().unwrap_or(0);
        for (rule, shown) in rules.iter().zip(&shown) {
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                pad(rule.pattern, width),
                pad(shown, out_width),
                rule.len()
            );
        }
    }
    out
}

pub fn rules_cmd(tier: Option<&str>) {
    let only = tier.map(|name| die!(parse_tier(name), "Error: {}"));
    print!("{}", format_rules(rules::table(), only));
}

pub fn check_cmd() {
    let built = rules::build();
    die!(rules::validate(&built), "Rule table invalid: {}");
    let table = rules::table();
    for tier in Tier::ALL {
        println!("{:<12} {:>4}", tier.name(), table.by_tier(tier).count());
    }
    println!(
        "OK: {} rules, longest pattern {} chars",
        table.len(),
        table.max_pattern_len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_single_tier() {
        let text = format_rules(rules::table(), Some(Tier::Punctuation));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[2] punctuation (4 rules)");
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().any(|l| l.contains("(deleted)")));
        assert!(lines[1].starts_with("  --  "));
    }

    #[test]
    fn format_all_tiers() {
        let text = format_rules(rules::table(), None);
        let headers = text.lines().filter(|l| l.starts_with('[')).count();
        assert_eq!(headers, Tier::ALL.len());
    }

    #[test]
    fn unknown_tier() {
        let err = parse_tier("kanji").unwrap_err();
        assert!(err.to_string().contains("unknown tier 'kanji'"));
        assert_eq!(parse_tier("Geminate").unwrap(), Tier::Geminate);
    }

    #[test]
    fn pad_ignores_combining_marks() {
        // بَّ: one base letter plus two zero-width marks
        assert_eq!(pad("\u{0628}\u{0651}\u{064E}", 3).chars().filter(|&c| c == ' ').count(), 2);
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
