//! owo-typer: type valid UwU/OwO combos before the countdown runs out
//!
//! The library holds the combo grammar and the scoring engine. The terminal
//! front end lives in the binary.

pub mod combo;
pub mod config;
pub mod error;
pub mod session;

pub use error::{Error, Result};
