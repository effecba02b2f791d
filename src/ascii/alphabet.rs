//! Named alphabets for ASCII rendering.
//!
//! Every alphabet is ordered from darkest (index 0) to brightest (last
//! index). Trailing spaces are significant: they stand for white.

use std::fmt;

use crate::error::AsciiArtError;

/// Hand-tuned 16-level ramp. The default alphabet.
pub const HEURISTIC: &[char] = &[
    '#', '=', '$', '8', 'Z', '7', 'I', '\\', 'O', '?', '+', ':', '-', ',', '.', ' ',
];

/// Short 9-level ramp.
pub const ALTERNATE: &[char] = &['@', '#', '8', '&', 'o', ':', '*', '.', ' '];

/// 13-level ramp from asciifi.
pub const ASCIIFI1: &[char] = &['@', 'G', 'C', 'L', 'f', 't', 'l', 'i', ';', ':', ',', '.', ' '];

/// 18-level ramp from asciifi.
pub const ASCIIFI2: &[char] = &[
    '#', 'W', 'M', 'B', 'R', 'X', 'V', 'Y', 'I', 't', 'i', '+', '=', ';', ':', ',', '.', ' ',
];

/// 25-level ramp from asciifi, with repeated symbols widening each band.
#[rustfmt::skip]
pub const ASCIIFI3: &[char] = &[
    '#', '#', 'X', 'X', 'x', 'x', 'x', '+', '+', '+', '=', '=', '=',
    '-', '-', '-', ';', ';', ',', ',', '.', '.', '.', ' ', ' ',
];

/// Name of the alphabet used when none is requested.
pub const DEFAULT_ALPHABET: &str = "heuristic";

/// Label shown for an alphabet that is not in the catalogue.
pub const UNKNOWN_ALPHABET: &str = "unknown";

/// The catalogue, in the order names are listed to the user.
const CATALOGUE: &[(&str, &[char])] = &[
    ("heuristic", HEURISTIC),
    ("alternate", ALTERNATE),
    ("asciifi1", ASCIIFI1),
    ("asciifi2", ASCIIFI2),
    ("asciifi3", ASCIIFI3),
];

/// An ordered, non-empty run of characters from darkest to brightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [char],
}

impl Alphabet {
    /// Wrap a character sequence. Returns `None` for an empty sequence.
    pub fn new(symbols: &'static [char]) -> Option<Self> {
        if symbols.is_empty() {
            None
        } else {
            Some(Self { symbols })
        }
    }

    /// Look up a catalogue alphabet by name.
    ///
    /// # Errors
    ///
    /// Returns `AsciiArtError::InvalidAlphabetName` when no entry has that
    /// name.
    pub fn from_name(name: &str) -> Result<Self, AsciiArtError> {
        CATALOGUE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, symbols)| Self { symbols: *symbols })
            .ok_or_else(|| AsciiArtError::InvalidAlphabetName {
                name: name.to_string(),
            })
    }

    /// Catalogue name of this alphabet, or `"unknown"` if it is not one of
    /// the catalogue entries.
    pub fn name(&self) -> &'static str {
        CATALOGUE
            .iter()
            .find(|(_, symbols)| *symbols == self.symbols)
            .map(|(key, _)| *key)
            .unwrap_or(UNKNOWN_ALPHABET)
    }

    /// Characters ordered from darkest to brightest.
    pub fn symbols(&self) -> &'static [char] {
        self.symbols
    }

    /// Number of brightness levels. Always at least 1.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: an alphabet holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Character for sample 0.
    pub fn darkest(&self) -> char {
        self.symbols[0]
    }

    /// Character for the brightest sample.
    pub fn brightest(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self { symbols: HEURISTIC }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of all catalogue alphabets, default first.
pub fn alphabet_names() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|(name, _)| *name)
}

/// One-line listing used in usage text.
pub fn recognized_alphabets() -> String {
    format!(
        "Recognized alphabets: {}",
        alphabet_names().collect::<Vec<_>>().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_lengths() {
        assert_eq!(HEURISTIC.len(), 16);
        assert_eq!(ALTERNATE.len(), 9);
        assert_eq!(ASCIIFI1.len(), 13);
        assert_eq!(ASCIIFI2.len(), 18);
        assert_eq!(ASCIIFI3.len(), 25);
    }

    #[test]
    fn test_catalogue_matches_literal_sequences() {
        let literal = |a: &[char]| a.iter().collect::<String>();
        assert_eq!(literal(HEURISTIC), "#=$8Z7I\\O?+:-,. ");
        assert_eq!(literal(ALTERNATE), "@#8&o:*. ");
        assert_eq!(literal(ASCIIFI1), "@GCLftli;:,. ");
        assert_eq!(literal(ASCIIFI2), "#WMBRXVYIti+=;:,. ");
        assert_eq!(literal(ASCIIFI3), "##XXxxx+++===---;;,,...  ");
    }

    #[test]
    fn test_from_name_resolves_every_entry() {
        for name in alphabet_names() {
            let alphabet = Alphabet::from_name(name).unwrap();
            assert_eq!(alphabet.name(), name);
        }
    }

    #[test]
    fn test_from_name_unknown() {
        let result = Alphabet::from_name("wingdings");
        match result {
            Err(AsciiArtError::InvalidAlphabetName { name }) => assert_eq!(name, "wingdings"),
            other => panic!("Expected InvalidAlphabetName, got {:?}", other),
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(Alphabet::from_name("Heuristic").is_err());
    }

    #[test]
    fn test_default_is_heuristic() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.name(), DEFAULT_ALPHABET);
        assert_eq!(alphabet.darkest(), '#');
        assert_eq!(alphabet.brightest(), ' ');
    }

    #[test]
    fn test_reverse_lookup_unknown_sentinel() {
        static CUSTOM: &[char] = &['x', 'o', ' '];
        let alphabet = Alphabet::new(CUSTOM).unwrap();
        assert_eq!(alphabet.name(), UNKNOWN_ALPHABET);
        assert_eq!(alphabet.to_string(), "unknown");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Alphabet::new(&[]).is_none());
    }

    #[test]
    fn test_recognized_alphabets_lists_all() {
        assert_eq!(
            recognized_alphabets(),
            "Recognized alphabets: heuristic, alternate, asciifi1, asciifi2, asciifi3"
        );
    }
}
