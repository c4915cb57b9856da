// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Character class used when sizing the guessing pool of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase letter.
    Lower,
    /// Uppercase letter.
    Upper,
    /// Numeric character.
    Digit,
    /// Anything that is not alphanumeric: punctuation, whitespace, emoji.
    Symbol,
    /// Alphanumeric but caseless and not a digit (CJK ideographs, etc.).
    Other,
}

/// Classify a character.
///
/// Letters are classified by case first, so a cased letter is never
/// reported as `Other`.
pub fn char_class(c: char) -> CharClass {
    if is_lower(c) {
        return CharClass::Lower;
    }
    if is_upper(c) {
        return CharClass::Upper;
    }
    if c.is_numeric() {
        return CharClass::Digit;
    }
    if !c.is_alphanumeric() {
        return CharClass::Symbol;
    }
    CharClass::Other
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase yield iterators because
// some characters expand to several characters ('ß' -> "SS"). Mutated words
// must keep their length, so only the first character of the mapping is used.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c) || c == '\u{018F}' // LATIN CAPITAL LETTER SCHWA
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is whitespace for the purpose of trimming
/// input words.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF // BOM left over from some wordlist files
}

/// Trim leading and trailing whitespace from a word.
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CharClass tests --

    #[test]
    fn class_letters() {
        assert_eq!(char_class('a'), CharClass::Lower);
        assert_eq!(char_class('Z'), CharClass::Upper);
        assert_eq!(char_class('\u{00E4}'), CharClass::Lower); // ä
        assert_eq!(char_class('\u{00C4}'), CharClass::Upper); // Ä
    }

    #[test]
    fn class_digits() {
        assert_eq!(char_class('0'), CharClass::Digit);
        assert_eq!(char_class('9'), CharClass::Digit);
    }

    #[test]
    fn class_symbols() {
        assert_eq!(char_class('!'), CharClass::Symbol);
        assert_eq!(char_class('@'), CharClass::Symbol);
        assert_eq!(char_class(' '), CharClass::Symbol);
        assert_eq!(char_class('_'), CharClass::Symbol);
    }

    #[test]
    fn class_caseless_letter() {
        assert_eq!(char_class('\u{6F22}'), CharClass::Other); // 漢
    }

    // -- Case functions --

    #[test]
    fn simple_lower_basic() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('a'), 'a');
        assert_eq!(simple_lower('\u{00D6}'), '\u{00F6}'); // Ö -> ö
        assert_eq!(simple_lower('4'), '4');
    }

    #[test]
    fn simple_upper_basic() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('A'), 'A');
        assert_eq!(simple_upper('\u{00E4}'), '\u{00C4}'); // ä -> Ä
    }

    #[test]
    fn simple_upper_keeps_length() {
        // 'ß' uppercases to "SS"; only the first char is taken
        assert_eq!(simple_upper('\u{00DF}'), 'S');
    }

    #[test]
    fn upper_lower_predicates() {
        assert!(is_upper('A'));
        assert!(is_upper('\u{018F}'));
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));
        assert!(is_lower('a'));
        assert!(!is_lower('A'));
        assert!(!is_lower('!'));
    }

    #[test]
    fn whitespace_chars() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\u{00A0}'));
        assert!(is_whitespace('\u{FEFF}'));
        assert!(!is_whitespace('a'));
    }

    #[test]
    fn trim_word_strips_both_ends() {
        assert_eq!(trim_word("  apple\t"), "apple");
        assert_eq!(trim_word("\u{FEFF}pear\r\n"), "pear");
        assert_eq!(trim_word("   "), "");
        assert_eq!(trim_word("a b"), "a b");
    }
}
