//! Character-level classification for Latin input and Arabic output.

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Arabic block (U+0600..U+06FF) plus the presentation-form blocks, which hold
/// ligatures such as ﷺ (U+FDFA).
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
        || ('\u{FB50}'..='\u{FDFF}').contains(&c)
        || ('\u{FE70}'..='\u{FEFF}').contains(&c)
}

/// Tashkil emitted by the rule table: tanwin, short vowels, shadda, sukun,
/// and the superscript alef.
pub fn is_tashkil(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c) || c == '\u{0670}'
}

/// Drop tashkil, keeping base letters and everything else.
pub fn strip_tashkil(s: &str) -> String {
    s.chars().filter(|&c| !is_tashkil(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert!(is_latin('b'));
        assert!(is_latin('N'));
        assert!(!is_latin('\''));
        assert!(is_arabic('\u{0628}'));
        assert!(is_arabic('\u{FDFA}'));
        assert!(!is_arabic('b'));
        assert!(is_tashkil('\u{0651}'));
        assert!(is_tashkil('\u{0670}'));
        assert!(!is_tashkil('\u{0628}'));
    }

    #[test]
    fn strip_keeps_base_letters() {
        // بَّا → با
        assert_eq!(strip_tashkil("\u{0628}\u{0651}\u{064E}\u{0627}"), "\u{0628}\u{0627}");
        assert_eq!(strip_tashkil("ba 2"), "ba 2");
    }
}
