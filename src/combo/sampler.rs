//! Random sampling of valid combinations for the guide page

use super::glyphs::GlyphTable;
use super::grammar::Combination;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Draw `attempts` random combinations that the table admits.
///
/// A non-pairable first eye is mirrored; a pairable one gets a random pairable
/// partner. Duplicates collapse, so the result may hold fewer than `attempts`.
pub fn sample_combos<R: Rng + ?Sized>(
    table: &GlyphTable,
    rng: &mut R,
    attempts: usize,
) -> BTreeSet<String> {
    let eyes = table.eyes();
    let mouths = table.mouths();
    let pairable: Vec<char> = eyes
        .iter()
        .filter_map(|&(c, p)| if p { Some(c) } else { None })
        .collect();

    let mut combos = BTreeSet::new();
    if eyes.is_empty() || mouths.is_empty() {
        return combos;
    }

    for _ in 0..attempts {
        let (Some(&(left, left_pairable)), Some(&mouth)) =
            (eyes.choose(rng), mouths.choose(rng))
        else {
            break;
        };

        let right = if left_pairable {
            pairable.choose(rng).copied().unwrap_or(left)
        } else {
            left
        };

        let combo = Combination::new(left, mouth, right);
        debug_assert!(table.admits(&combo));
        combos.insert(combo.to_string());
    }

    combos
}

/// Default number of attempts: one per ordered eye pair
pub fn default_attempts(table: &GlyphTable) -> usize {
    let n = table.eyes().len();
    n * n
}
