//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Line input using crossterm, deadline-aware
//! - `display.rs`: Pages, countdown, judge output, results
//! - `menu.rs`: Main menu choices

pub mod display;
pub mod input;
pub mod menu;
