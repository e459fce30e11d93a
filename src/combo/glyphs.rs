//! Glyph tables: which characters may be eyes, which may be mouths
//!
//! Every eye carries a "pairable" flag. A pairable eye may sit next to any
//! other pairable eye; a non-pairable eye only matches itself.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::LazyLock;

/// Eye glyphs and their pairable flag
const EYES: [(char, bool); 19] = [
    ('O', true),
    ('o', true),
    ('U', true),
    ('u', true),
    ('X', true),
    ('3', false),
    ('Q', false),
    ('>', true),
    ('<', true),
    ('0', true),
    ('~', true),
    ('q', false),
    ('x', false),
    ('.', false),
    (';', false),
    ('*', false),
    ('^', true),
    ('T', false),
    ('`', true),
];

/// Mouth glyphs
const MOUTHS: [char; 2] = ['w', 'W'];

static BUILTIN: LazyLock<GlyphTable> = LazyLock::new(|| GlyphTable::new(&EYES, &MOUTHS));

/// Read-only lookup of eye and mouth alphabets
#[derive(Clone, Debug)]
pub struct GlyphTable {
    eyes: FxHashMap<char, bool>,
    mouths: FxHashSet<char>,
}

impl GlyphTable {
    /// Build a table from eye/flag pairs and a mouth set.
    ///
    /// The two alphabets must be disjoint.
    pub fn new(eyes: &[(char, bool)], mouths: &[char]) -> Self {
        let eyes: FxHashMap<char, bool> = eyes.iter().copied().collect();
        let mouths: FxHashSet<char> = mouths.iter().copied().collect();
        debug_assert!(
            mouths.iter().all(|m| !eyes.contains_key(m)),
            "eye and mouth alphabets overlap"
        );

        GlyphTable { eyes, mouths }
    }

    /// The game's table, initialized on first use and shared afterwards
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN
    }

    pub fn is_mouth(&self, c: char) -> bool {
        self.mouths.contains(&c)
    }

    /// Pairable flag of an eye, `None` when `c` is not an eye at all
    pub fn pairable(&self, c: char) -> Option<bool> {
        self.eyes.get(&c).copied()
    }

    /// All eyes with their flags, sorted by character
    pub fn eyes(&self) -> Vec<(char, bool)> {
        let mut eyes: Vec<(char, bool)> = self.eyes.iter().map(|(&c, &p)| (c, p)).collect();
        eyes.sort_unstable();
        eyes
    }

    /// All mouths, sorted
    pub fn mouths(&self) -> Vec<char> {
        let mut mouths: Vec<char> = self.mouths.iter().copied().collect();
        mouths.sort_unstable();
        mouths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_alphabets() {
        let table = GlyphTable::builtin();
        assert_eq!(table.eyes().len(), 19);
        assert_eq!(table.mouths(), vec!['W', 'w']);

        assert_eq!(table.pairable('O'), Some(true));
        assert_eq!(table.pairable('x'), Some(false));
        assert_eq!(table.pairable('w'), None);
        assert!(table.is_mouth('w'));
        assert!(!table.is_mouth('O'));
    }

    #[test]
    fn test_case_is_significant() {
        let table = GlyphTable::builtin();
        // 'X' and 'x' are separate entries with different flags
        assert_eq!(table.pairable('X'), Some(true));
        assert_eq!(table.pairable('x'), Some(false));
        assert_eq!(table.pairable('Q'), Some(false));
        assert_eq!(table.pairable('q'), Some(false));
        assert_eq!(table.pairable('t'), None);
    }

    #[test]
    fn test_alphabets_are_disjoint() {
        let table = GlyphTable::builtin();
        for mouth in table.mouths() {
            assert_eq!(table.pairable(mouth), None);
        }
    }
}
