//! One timed round: collect lines until the countdown fires, then score

use super::countdown::Countdown;
use super::report::Report;
use super::scorer::{Judge, SessionScorer};
use crate::combo::GlyphTable;
use crate::config::GameSetup;
use serde::{Serialize, Serializer};
use std::time::Duration;
use tracing::info;

/// Where typed lines come from during a round
pub trait LineSource {
    type Error: From<crate::error::Error>;

    /// Return the next submitted line.
    ///
    /// Implementations must check `countdown` while waiting and return
    /// `Ok(None)` once it has expired with nothing left to hand over. A line
    /// that was already being typed may still be returned after expiry.
    fn next_line(&mut self, countdown: &mut Countdown) -> Result<Option<String>, Self::Error>;
}

/// Finished round
#[derive(Clone, Debug, Serialize)]
pub struct RoundOutcome {
    #[serde(flatten)]
    pub report: Report,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}

/// Start the countdown and play a full round
pub fn play_round<S, J>(
    setup: &GameSetup,
    table: &GlyphTable,
    source: &mut S,
    judge: J,
) -> Result<RoundOutcome, S::Error>
where
    S: LineSource,
    J: Judge,
{
    info!(duration_secs = setup.duration_secs(), judge = setup.judge(), "round started");

    let mut countdown = Countdown::start(setup.duration());
    let mut scorer = SessionScorer::with_judge(table, setup.judge().then_some(judge));
    collect(&mut countdown, source, &mut scorer)?;

    let report = scorer.finalize()?;
    let elapsed = countdown.elapsed();
    info!(
        score = report.score(),
        total = report.total(),
        elapsed_ms = elapsed.as_millis() as u64,
        "round finished"
    );

    Ok(RoundOutcome { report, elapsed })
}

/// Feed lines into the scorer until the countdown expires.
///
/// Each line is split on whitespace; every word is one entry.
pub fn collect<S, J>(
    countdown: &mut Countdown,
    source: &mut S,
    scorer: &mut SessionScorer<'_, J>,
) -> Result<(), S::Error>
where
    S: LineSource,
    J: Judge,
{
    while !countdown.is_expired() {
        let Some(line) = source.next_line(countdown)? else {
            break;
        };
        for entry in line.split_whitespace() {
            scorer.classify(entry)?;
        }
    }
    Ok(())
}
