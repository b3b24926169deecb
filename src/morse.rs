//! Morse alphabet tables and text conversion.
//!
//! A `Code` is the ordered symbol sequence for one character (or, via
//! [`text_to_code`], for a whole phrase with letter/word breaks folded in).
//! The table is static configuration data, nothing here is derived at
//! runtime. Conversion is total: characters without a table entry simply
//! contribute nothing.

/// One playable unit of a Morse code sequence.
///
/// `Break` carries no tone of its own; it marks a letter or word boundary
/// and advances the playback cursor by the inter-symbol gap only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Dot, 150 ms of tone.
    Short,
    /// Dash, 450 ms of tone.
    Long,
    /// Letter/word boundary, silence only.
    Break,
}

/// Symbol sequence for one character or phrase.
pub type Code = Vec<Symbol>;

// -----------------------------------------------------------------------------
// Static alphabet (ITU codes for A-Z and 0-9)
// -----------------------------------------------------------------------------

pub const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."), ('F', "..-."),
    ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."), ('Q', "--.-"), ('R', ".-."),
    ('S', "..."), ('T', "-"), ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
];

/// The quiz alphabet: letters only, in table order.
pub fn letters() -> impl Iterator<Item = char> {
    MORSE_TABLE.iter().map(|&(c, _)| c).filter(|c| c.is_ascii_alphabetic())
}

/// Dot/dash pattern for a character, if it is in the alphabet.
pub fn pattern_for(ch: char) -> Option<&'static str> {
    let up = ch.to_ascii_uppercase();
    MORSE_TABLE.iter().find(|&&(c, _)| c == up).map(|&(_, p)| p)
}

/// Code for one character. Unmapped characters yield an empty code.
pub fn code_for(ch: char) -> Code {
    pattern_for(ch).map(parse_pattern).unwrap_or_default()
}

fn parse_pattern(pattern: &str) -> Code {
    pattern
        .chars()
        .filter_map(|c| match c {
            '.' => Some(Symbol::Short),
            '-' => Some(Symbol::Long),
            _ => None,
        })
        .collect()
}

/// Concatenated code for a phrase.
///
/// Sounded letters are separated by exactly one [`Symbol::Break`]; a space
/// contributes exactly one word break (adjacent breaks collapse); unmapped
/// characters contribute nothing.
pub fn text_to_code(text: &str) -> Code {
    let mut out: Code = Vec::new();
    for ch in text.chars() {
        if ch == ' ' {
            if matches!(out.last(), Some(Symbol::Short | Symbol::Long)) {
                out.push(Symbol::Break);
            }
            continue;
        }
        let letter = code_for(ch);
        if letter.is_empty() {
            continue;
        }
        if matches!(out.last(), Some(Symbol::Short | Symbol::Long)) {
            out.push(Symbol::Break);
        }
        out.extend(letter);
    }
    out
}

/// Display form of a phrase: letter patterns joined by single spaces, a
/// space rendered as "/". Used by the translator screen.
pub fn text_to_pattern(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch == ' ' {
                "/".to_string()
            } else {
                pattern_for(ch).unwrap_or("").to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dot/dash glyph string ("● —") for on-screen symbol display.
pub fn pattern_glyphs(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == '.' { "●" } else { "—" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Break, Long, Short};

    #[test]
    fn code_for_letters_matches_patterns() {
        assert_eq!(code_for('S'), vec![Short, Short, Short]);
        assert_eq!(code_for('o'), vec![Long, Long, Long]);
        assert_eq!(code_for('0'), vec![Long; 5]);
    }

    #[test]
    fn code_for_unmapped_is_empty() {
        assert!(code_for('#').is_empty());
        assert!(code_for('ß').is_empty());
    }

    #[test]
    fn text_to_code_sos() {
        assert_eq!(
            text_to_code("SOS"),
            vec![Short, Short, Short, Break, Long, Long, Long, Break, Short, Short, Short]
        );
    }

    #[test]
    fn text_to_code_single_word_break() {
        // One break between the letters, even though the space and the
        // letter boundary coincide.
        assert_eq!(text_to_code("A B"), vec![Short, Long, Break, Long, Short, Short, Short]);
        assert_eq!(text_to_code("A  B"), text_to_code("A B"));
    }

    #[test]
    fn text_to_code_skips_unmapped() {
        assert_eq!(text_to_code("A#B"), text_to_code("AB"));
    }

    #[test]
    fn text_to_code_lowercase_equals_uppercase() {
        assert_eq!(text_to_code("echo"), text_to_code("ECHO"));
    }

    #[test]
    fn text_to_pattern_mirrors_display_rules() {
        assert_eq!(text_to_pattern("AB"), ".- -...");
        assert_eq!(text_to_pattern("A B"), ".- / -...");
        assert_eq!(text_to_pattern("A#B"), ".-  -...");
    }

    #[test]
    fn glyphs_render_dots_and_dashes() {
        assert_eq!(pattern_glyphs(".-"), "● —");
    }
}
