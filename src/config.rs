//! Game setup: countdown length and judge mode
//!
//! Answers typed at the setup prompts are parsed here so the CLI can
//! re-prompt on anything invalid.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Upper bound of the countdown, in seconds
pub const MAX_DURATION_SECS: u64 = i64::MAX as u64;

const YES: [&str; 5] = ["y", "Y", "yes", "Yes", "YES"];
const NO: [&str; 5] = ["n", "N", "no", "No", "NO"];

/// Settings for one round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSetup {
    duration_secs: u64,
    judge: bool,
}

impl GameSetup {
    pub fn new(duration_secs: u64, judge: bool) -> Result<Self> {
        if !(1..=MAX_DURATION_SECS).contains(&duration_secs) {
            return Err(Error::InvalidDuration(duration_secs.to_string()));
        }
        Ok(GameSetup {
            duration_secs,
            judge,
        })
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Whether live per-entry feedback is on
    pub fn judge(&self) -> bool {
        self.judge
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        GameSetup {
            duration_secs: 1,
            judge: false,
        }
    }
}

impl fmt::Display for GameSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {} sec\nJudge: {}",
            self.duration_secs,
            if self.judge { "Yes" } else { "No" }
        )
    }
}

/// Parse a countdown answer in whole seconds
pub fn parse_duration(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    match trimmed.parse::<u64>() {
        Ok(secs) if (1..=MAX_DURATION_SECS).contains(&secs) => Ok(secs),
        _ => Err(Error::InvalidDuration(trimmed.to_string())),
    }
}

/// Parse a yes/no answer
pub fn parse_answer(input: &str) -> Result<bool> {
    let trimmed = input.trim();
    if YES.contains(&trimmed) {
        Ok(true)
    } else if NO.contains(&trimmed) {
        Ok(false)
    } else {
        Err(Error::InvalidAnswer(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30"), Ok(30));
        assert_eq!(parse_duration(" 5\n"), Ok(5));
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-3").is_err());
        assert!(parse_duration("1.5").is_err());
        assert!(parse_duration("ten").is_err());
        assert!(parse_duration("9223372036854775808").is_err());
        assert_eq!(parse_duration("9223372036854775807"), Ok(MAX_DURATION_SECS));
    }

    #[test]
    fn test_parse_answer() {
        for yes in YES {
            assert_eq!(parse_answer(yes), Ok(true));
        }
        for no in NO {
            assert_eq!(parse_answer(no), Ok(false));
        }
        assert_eq!(
            parse_answer("yEs"),
            Err(Error::InvalidAnswer("yEs".to_string()))
        );
        assert!(parse_answer("").is_err());
    }

    #[test]
    fn test_setup() {
        let setup = GameSetup::new(10, true).unwrap();
        assert_eq!(setup.duration(), Duration::from_secs(10));
        assert!(setup.judge());
        assert_eq!(setup.to_string(), "Time: 10 sec\nJudge: Yes");

        assert!(GameSetup::new(0, false).is_err());
        assert_eq!(GameSetup::default().duration_secs(), 1);
        assert!(!GameSetup::default().judge());
    }
}
