//! Combination grammar: eye, mouth, eye
//!
//! A combination is valid when both eyes and the mouth come from the glyph
//! table, and the eyes are either identical or both pairable.

use super::glyphs::GlyphTable;
use std::fmt;

/// One typed entry split into its three positions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Combination {
    pub left: char,
    pub mouth: char,
    pub right: char,
}

impl Combination {
    pub fn new(left: char, mouth: char, right: char) -> Self {
        Combination { left, mouth, right }
    }

    /// Split a string into a combination. `None` unless it is exactly 3 chars.
    pub fn split(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(left), Some(mouth), Some(right), None) => {
                Some(Combination { left, mouth, right })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.mouth, self.right)
    }
}

impl GlyphTable {
    /// Check a combination against this table
    pub fn admits(&self, combo: &Combination) -> bool {
        if !self.is_mouth(combo.mouth) {
            return false;
        }

        let (Some(left), Some(right)) = (self.pairable(combo.left), self.pairable(combo.right))
        else {
            return false;
        };

        // An eye always pairs with itself
        combo.left == combo.right || (left && right)
    }

    /// Validate a raw typed string. Never fails; anything malformed is `false`.
    pub fn is_valid(&self, s: &str) -> bool {
        Combination::split(s)
            .map(|combo| self.admits(&combo))
            .unwrap_or(false)
    }
}

/// Validate against the built-in glyph table
pub fn is_valid(s: &str) -> bool {
    GlyphTable::builtin().is_valid(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_table() -> GlyphTable {
        GlyphTable::new(&[('O', true), ('U', true), ('X', false)], &['w'])
    }

    #[test]
    fn test_same_eye_ignores_pairable_flag() {
        let table = GlyphTable::builtin();
        for (eye, _) in table.eyes() {
            for mouth in table.mouths() {
                let combo = Combination::new(eye, mouth, eye).to_string();
                assert!(table.is_valid(&combo), "{combo} should be valid");
            }
        }
    }

    #[test]
    fn test_different_eyes_need_both_pairable() {
        let table = GlyphTable::builtin();
        let eyes = table.eyes();
        for &(left, left_pairable) in &eyes {
            for &(right, right_pairable) in &eyes {
                if left == right {
                    continue;
                }
                let combo = Combination::new(left, 'w', right).to_string();
                assert_eq!(
                    table.is_valid(&combo),
                    left_pairable && right_pairable,
                    "{combo}"
                );
            }
        }
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        for s in ["", "O", "Ow", "OwOw", "UwU ", " UwU", "OwOwO"] {
            assert!(!is_valid(s), "{s:?}");
        }
    }

    #[test]
    fn test_unknown_glyphs() {
        assert!(!is_valid("awa"));
        assert!(!is_valid("OaO"));
        assert!(!is_valid("Ow3x"));
        assert!(!is_valid("OOO"));
        assert!(!is_valid("wOw"));
        // Multi-byte input is measured in chars, then rejected by the table
        assert!(!is_valid("ÖwÖ"));
        assert!(!is_valid("😀w😀"));
    }

    #[test]
    fn test_builtin_faces() {
        assert!(is_valid("UwU"));
        assert!(is_valid("OwO"));
        assert!(is_valid(">w<"));
        assert!(is_valid("Ow<"));
        assert!(is_valid("XWX"));
        assert!(is_valid("TwT"));
        assert!(is_valid("3w3"));
        assert!(!is_valid("Tw^"));
        assert!(!is_valid("xwX"));
        assert!(!is_valid("uwu_"));
    }

    #[test]
    fn test_scenario_table() {
        let table = scenario_table();
        assert!(table.is_valid("OwO"));
        assert!(table.is_valid("OwU"));
        assert!(table.is_valid("XwX"));
        assert!(!table.is_valid("XwO"));
        assert!(!table.is_valid("Ow3"));
        assert!(!table.is_valid("OWO"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        for s in ["UwU", "XwO", "", "qwq", "Q w"] {
            assert_eq!(is_valid(s), is_valid(s));
        }
    }

    #[test]
    fn test_split() {
        assert_eq!(Combination::split("OwU"), Some(Combination::new('O', 'w', 'U')));
        assert_eq!(Combination::split("Ow"), None);
        assert_eq!(Combination::split("OwUU"), None);
        assert_eq!(Combination::new('^', 'W', '^').to_string(), "^W^");
    }
}
