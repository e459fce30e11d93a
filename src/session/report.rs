//! Finalized session report

use serde::Serialize;
use std::fmt;

/// Immutable summary of a completed session
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Percentage of correct entries (0-100, truncated)
    score: u32,
    correct: usize,
    incorrect: usize,
    total: usize,
    /// Every entry, in arrival order
    all: Vec<String>,
    accepted: Vec<String>,
    rejected: Vec<String>,
}

impl Report {
    pub(crate) fn new(all: Vec<String>, accepted: Vec<String>, rejected: Vec<String>) -> Self {
        let correct = accepted.len();
        let incorrect = rejected.len();
        debug_assert_eq!(all.len(), correct + incorrect);

        Report {
            score: percentage(correct, incorrect),
            correct,
            incorrect,
            total: correct + incorrect,
            all,
            accepted,
            rejected,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

/// `100 * correct / (correct + incorrect)`, or 0 for an empty session
fn percentage(correct: usize, incorrect: usize) -> u32 {
    let total = (correct + incorrect) as u64;
    if total == 0 {
        return 0;
    }
    (correct as u64 * 100 / total) as u32
}

fn write_list(f: &mut fmt::Formatter<'_>, entries: &[String]) -> fmt::Result {
    write!(f, "[ ")?;
    for entry in entries {
        write!(f, "{} ", entry)?;
    }
    write!(f, "]")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "W/C/T: {}/{}/{}", self.incorrect, self.correct, self.total)?;
        write!(f, "All_RAW: ")?;
        write_list(f, &self.all)?;
        write!(f, "\nAll_OK: ")?;
        write_list(f, &self.accepted)?;
        write!(f, "\nAll_INVALID: ")?;
        write_list(f, &self.rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 2), 60);
        assert_eq!(percentage(1, 2), 33);
        assert_eq!(percentage(4, 0), 100);
        assert_eq!(percentage(0, 4), 0);
    }

    #[test]
    fn test_display_format() {
        let report = Report::new(
            strings(&["OwO", "abc"]),
            strings(&["OwO"]),
            strings(&["abc"]),
        );
        assert_eq!(
            report.to_string(),
            "Score: 50\nW/C/T: 1/1/2\nAll_RAW: [ OwO abc ]\nAll_OK: [ OwO ]\nAll_INVALID: [ abc ]"
        );
    }

    #[test]
    fn test_json_shape() {
        let report = Report::new(strings(&["UwU"]), strings(&["UwU"]), vec![]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["total"], 1);
        assert_eq!(json["accepted"][0], "UwU");
        assert!(json["rejected"].as_array().unwrap().is_empty());
    }
}
