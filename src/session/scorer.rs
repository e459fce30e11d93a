//! Session scoring: classify typed entries, then finalize a report
//!
//! Entries are scored in arrival order. Judge mode only adds a live
//! notification per entry; it never changes what gets counted.

use super::report::Report;
use crate::combo::GlyphTable;
use crate::error::{Error, Result};
use tracing::debug;

/// Outcome of classifying one entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Receives live per-entry feedback while a session is running
pub trait Judge {
    fn judged(&mut self, entry: &str, verdict: Verdict);
}

impl<F: FnMut(&str, Verdict)> Judge for F {
    fn judged(&mut self, entry: &str, verdict: Verdict) {
        self(entry, verdict)
    }
}

/// Accumulates entries for one session
pub struct SessionScorer<'t, J = fn(&str, Verdict)> {
    table: &'t GlyphTable,
    judge: Option<J>,
    all: Vec<String>,
    accepted: Vec<String>,
    rejected: Vec<String>,
    finalized: bool,
}

impl<'t> SessionScorer<'t> {
    /// Scorer without live feedback
    pub fn new(table: &'t GlyphTable) -> Self {
        SessionScorer::with_judge(table, None)
    }
}

impl<'t, J: Judge> SessionScorer<'t, J> {
    /// Scorer that reports each verdict to `judge` when one is given
    pub fn with_judge(table: &'t GlyphTable, judge: Option<J>) -> Self {
        SessionScorer {
            table,
            judge,
            all: Vec::new(),
            accepted: Vec::new(),
            rejected: Vec::new(),
            finalized: false,
        }
    }

    /// Classify one raw entry and record it
    pub fn classify(&mut self, raw: &str) -> Result<Verdict> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }

        self.all.push(raw.to_string());
        let verdict = if self.table.is_valid(raw) {
            self.accepted.push(raw.to_string());
            Verdict::Accepted
        } else {
            self.rejected.push(raw.to_string());
            Verdict::Rejected
        };
        debug!(entry = raw, ?verdict, "classified entry");

        if let Some(judge) = self.judge.as_mut() {
            judge.judged(raw, verdict);
        }

        Ok(verdict)
    }

    /// Entries classified so far
    pub fn total(&self) -> usize {
        self.all.len()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Close the session and compute the score. Only valid once.
    pub fn finalize(&mut self) -> Result<Report> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        self.finalized = true;

        let report = Report::new(
            std::mem::take(&mut self.all),
            std::mem::take(&mut self.accepted),
            std::mem::take(&mut self.rejected),
        );
        debug!(
            score = report.score(),
            correct = report.correct(),
            incorrect = report.incorrect(),
            "session finalized"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_table() -> GlyphTable {
        GlyphTable::new(&[('O', true), ('U', true), ('X', false)], &['w'])
    }

    #[test]
    fn test_scenario() {
        let table = scenario_table();
        let mut scorer = SessionScorer::new(&table);

        assert_eq!(scorer.classify("OwO").unwrap(), Verdict::Accepted);
        assert_eq!(scorer.classify("OwU").unwrap(), Verdict::Accepted);
        assert_eq!(scorer.classify("XwX").unwrap(), Verdict::Accepted);
        assert_eq!(scorer.classify("XwO").unwrap(), Verdict::Rejected);
        assert_eq!(scorer.classify("Ow3").unwrap(), Verdict::Rejected);

        let report = scorer.finalize().unwrap();
        assert_eq!(report.total(), 5);
        assert_eq!(report.correct(), 3);
        assert_eq!(report.incorrect(), 2);
        assert_eq!(report.score(), 60);
        assert_eq!(report.accepted(), ["OwO", "OwU", "XwX"]);
        assert_eq!(report.rejected(), ["XwO", "Ow3"]);
        assert_eq!(report.all(), ["OwO", "OwU", "XwX", "XwO", "Ow3"]);
    }

    #[test]
    fn test_scenario_builtin_table() {
        // 'x' is the built-in non-pairable counterpart of the scenario's 'X'
        let mut scorer = SessionScorer::new(GlyphTable::builtin());
        for entry in ["OwO", "OwU", "xwx", "xwO", "Ow3"] {
            scorer.classify(entry).unwrap();
        }
        let report = scorer.finalize().unwrap();
        assert_eq!((report.correct(), report.incorrect(), report.score()), (3, 2, 60));
    }

    #[test]
    fn test_empty_session() {
        let mut scorer = SessionScorer::new(GlyphTable::builtin());
        let report = scorer.finalize().unwrap();
        assert_eq!(report.score(), 0);
        assert_eq!(report.total(), 0);
        assert!(report.all().is_empty());
    }

    #[test]
    fn test_counts_stay_consistent() {
        let entries = ["UwU", "", "hello", "OwO", "TwT", "Tw^", "UwU", "OwOwO"];
        let mut scorer = SessionScorer::new(GlyphTable::builtin());
        for (n, entry) in entries.iter().enumerate() {
            scorer.classify(entry).unwrap();
            assert_eq!(scorer.total(), n + 1);
        }

        let report = scorer.finalize().unwrap();
        assert_eq!(report.total(), entries.len());
        assert_eq!(report.correct() + report.incorrect(), report.total());
        assert_eq!(
            report.accepted().len() + report.rejected().len(),
            report.all().len()
        );
        // Duplicates are kept
        assert_eq!(report.accepted().iter().filter(|e| *e == "UwU").count(), 2);
    }

    #[test]
    fn test_use_after_finalize() {
        let mut scorer = SessionScorer::new(GlyphTable::builtin());
        scorer.classify("UwU").unwrap();
        scorer.finalize().unwrap();

        assert!(scorer.is_finalized());
        assert_eq!(scorer.classify("OwO"), Err(Error::AlreadyFinalized));
        assert_eq!(scorer.finalize(), Err(Error::AlreadyFinalized));
    }

    #[test]
    fn test_judge_sees_every_entry_in_order() {
        let mut seen = Vec::new();
        {
            let judge = |entry: &str, verdict: Verdict| seen.push((entry.to_string(), verdict));
            let mut scorer = SessionScorer::with_judge(GlyphTable::builtin(), Some(judge));
            scorer.classify("UwU").unwrap();
            scorer.classify("nope").unwrap();
            let report = scorer.finalize().unwrap();
            assert_eq!(report.score(), 50);
        }
        assert_eq!(
            seen,
            vec![
                ("UwU".to_string(), Verdict::Accepted),
                ("nope".to_string(), Verdict::Rejected),
            ]
        );
    }

    #[test]
    fn test_judge_does_not_change_score() {
        let entries = ["UwU", "QwU", ">w<", "x"];
        let silent = |_: &str, _: Verdict| {};
        let mut judged = SessionScorer::with_judge(GlyphTable::builtin(), Some(silent));
        let mut plain = SessionScorer::new(GlyphTable::builtin());
        for entry in entries {
            judged.classify(entry).unwrap();
            plain.classify(entry).unwrap();
        }
        assert_eq!(judged.finalize().unwrap(), plain.finalize().unwrap());
    }
}
