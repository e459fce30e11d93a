//! Session Scoring: timed collection, classification, and reports
//!
//! # Components
//! - `scorer.rs`: SessionScorer, classifies entries and finalizes once
//! - `report.rs`: Immutable Report snapshot
//! - `countdown.rs`: Background one-shot countdown timer
//! - `round.rs`: Timer-bounded input loop feeding the scorer

pub mod countdown;
pub mod report;
pub mod round;
pub mod scorer;

pub use countdown::Countdown;
pub use report::Report;
pub use round::{collect, play_round, LineSource, RoundOutcome};
pub use scorer::{Judge, SessionScorer, Verdict};
