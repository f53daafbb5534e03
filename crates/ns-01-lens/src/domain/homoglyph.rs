//! Visual lookalike folding.
//!
//! The table is intentionally incomplete: finding the gaps is part of the game.

use super::lens::Lens;

/// Cyrillic and Greek letters that render like ASCII Latin.
const LOOKALIKES: &[(char, char)] = &[
    // Cyrillic lowercase
    ('\u{0430}', 'a'),
    ('\u{0435}', 'e'),
    ('\u{043E}', 'o'),
    ('\u{0440}', 'p'),
    ('\u{0441}', 'c'),
    ('\u{0443}', 'y'),
    ('\u{0445}', 'x'),
    ('\u{0455}', 's'),
    ('\u{0456}', 'i'),
    ('\u{0458}', 'j'),
    // Cyrillic uppercase
    ('\u{0410}', 'A'),
    ('\u{0412}', 'B'),
    ('\u{0415}', 'E'),
    ('\u{041A}', 'K'),
    ('\u{041C}', 'M'),
    ('\u{041D}', 'H'),
    ('\u{041E}', 'O'),
    ('\u{0420}', 'P'),
    ('\u{0421}', 'C'),
    ('\u{0422}', 'T'),
    ('\u{0425}', 'X'),
    // Greek
    ('\u{0391}', 'A'),
    ('\u{0392}', 'B'),
    ('\u{0395}', 'E'),
    ('\u{0397}', 'H'),
    ('\u{0399}', 'I'),
    ('\u{039A}', 'K'),
    ('\u{039C}', 'M'),
    ('\u{039D}', 'N'),
    ('\u{039F}', 'O'),
    ('\u{03A1}', 'P'),
    ('\u{03A4}', 'T'),
    ('\u{03A5}', 'Y'),
    ('\u{03A7}', 'X'),
    ('\u{0396}', 'Z'),
    ('\u{03B1}', 'a'),
    ('\u{03BF}', 'o'),
];

/// ASCII lookalike for `c`, if the table knows one.
pub fn map_homoglyph(c: char) -> Option<char> {
    match c {
        // Fullwidth Latin
        '\u{FF21}'..='\u{FF3A}' => char::from_u32(c as u32 - 0xFF21 + 'A' as u32),
        '\u{FF41}'..='\u{FF5A}' => char::from_u32(c as u32 - 0xFF41 + 'a' as u32),
        _ => LOOKALIKES
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to),
    }
}

/// Maps every known lookalike to ASCII: Cyrillic "а" (U+0430) → Latin "a".
#[derive(Clone, Copy, Debug, Default)]
pub struct Homoglyph;

impl Lens for Homoglyph {
    fn name(&self) -> &'static str {
        "homoglyph"
    }

    fn canonicalize(&self, input: &str) -> Vec<String> {
        vec![input
            .chars()
            .map(|c| map_homoglyph(c).unwrap_or(c))
            .collect()]
    }
}
