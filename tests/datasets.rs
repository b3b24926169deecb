// Additional integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use echo_dots::morse::{code_for, pattern_for, MORSE_TABLE};
use echo_dots::WORD_BANK;

#[test]
fn morse_table_entries_are_unique_and_valid() {
    let mut seen = HashSet::new();
    for (ch, pattern) in MORSE_TABLE {
        assert!(seen.insert(*ch), "duplicate character '{}' in MORSE_TABLE", ch);
        assert!(!pattern.is_empty(), "empty pattern for '{}'", ch);
        for c in pattern.chars() {
            assert!(c == '.' || c == '-', "invalid char '{}' in pattern for '{}'", c, ch);
        }
    }
}

#[test]
fn morse_table_covers_letters_and_digits() {
    for ch in ('A'..='Z').chain('0'..='9') {
        assert!(pattern_for(ch).is_some(), "no pattern for '{}'", ch);
        assert!(!code_for(ch).is_empty(), "empty code for '{}'", ch);
    }
    assert_eq!(MORSE_TABLE.len(), 36);
}

#[test]
fn digit_patterns_have_five_elements() {
    for ch in '0'..='9' {
        assert_eq!(pattern_for(ch).unwrap().len(), 5, "digit '{}' pattern length", ch);
    }
}

#[test]
fn word_bank_entries_are_unique_uppercase_and_decodable() {
    let mut seen = HashSet::new();
    for word in WORD_BANK {
        assert!(seen.insert(*word), "duplicate word '{}' in WORD_BANK", word);
        assert!(!word.is_empty(), "empty word in WORD_BANK");
        for c in word.chars() {
            assert!(c.is_ascii_uppercase(), "non-uppercase char '{}' in '{}'", c, word);
            assert!(pattern_for(c).is_some(), "unmappable char '{}' in '{}'", c, word);
        }
    }
}
