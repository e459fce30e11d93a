//! Combo Grammar: glyph tables, validation, and sampling
//!
//! # Components
//! - `glyphs.rs`: Eye and mouth alphabets with pairable flags
//! - `grammar.rs`: The eye-mouth-eye validation rule
//! - `sampler.rs`: Random valid combos for the guide page

pub mod glyphs;
pub mod grammar;
pub mod sampler;

pub use glyphs::GlyphTable;
pub use grammar::{is_valid, Combination};
pub use sampler::{default_attempts, sample_combos};
