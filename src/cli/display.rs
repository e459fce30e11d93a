//! Terminal display and page rendering
//!
//! Features:
//! - Banner pages with a random face in the header
//! - Pre-round countdown
//! - Live judge verdicts (green OK / red INVALID)
//! - Final results with the partitioned entry lists

use super::menu::MenuChoice;
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use owo_typer::config::GameSetup;
use owo_typer::session::{RoundOutcome, Verdict};
use rand::seq::SliceRandom;
use std::error::Error;
use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

/// Key that moves past the welcome page
pub const CONTINUE_KEY: &str = "k";

const FACES: [&str; 5] = ["UwU", "OwO", ">w<", "Ow<", "XwX"];

const COUNTDOWN: [&str; 4] = ["3! Thwee!", "2! Two!", "1! Onye!", "Go!"];

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Page header: `== <face> Title ==`, bold green
    fn header(&self, title: &str) -> Result<usize, Box<dyn Error>> {
        let mut stdout = stdout();
        let face = FACES.choose(&mut rand::thread_rng()).copied().unwrap_or("OwO");
        let text = format!("{} {}", face, title);

        execute!(
            stdout,
            Print("== "),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Green),
            Print(&text),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print(" ==\n"),
        )?;
        Ok(text.chars().count() + 6)
    }

    fn border(&self, width: usize) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(stdout, Print("=".repeat(width)), Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    fn continue_hint(&self, action: &str) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("Press "),
            SetForegroundColor(Color::Blue),
            Print(format!("[ {} ]", CONTINUE_KEY)),
            ResetColor,
            Print(format!(" {}\n", action)),
        )?;
        Ok(())
    }

    pub fn show_welcome(&self) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        let width = self.header("Welcome!")?;

        execute!(
            stdout,
            Print(format!("\nVersion: {}\n", env!("CARGO_PKG_VERSION"))),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Red),
            Print("!! >w< Best used in a terminal with color support !!\n"),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("Type as many of the following as you can: [owo uwu >w< qwq 3w3 twt ^w^ ...]\n"),
        )?;
        self.continue_hint("to continue!!")?;
        self.border(width)
    }

    pub fn show_menu(&self) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        let width = self.header("Menu")?;

        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print("\nType the choice in the '[]' to enter that task!\n\n"),
            ResetColor,
        )?;
        for choice in MenuChoice::ALL {
            execute!(
                stdout,
                Print("\t"),
                SetForegroundColor(Color::Green),
                Print(format!("[{}]", choice.key())),
                ResetColor,
                Print(format!(" - {}\n", choice.label())),
            )?;
        }
        execute!(stdout, Print("\n"))?;
        self.border(width)
    }

    /// List sample combos
    pub fn show_guide<'a, I>(&self, combos: I) -> Result<(), Box<dyn Error>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut stdout = stdout();
        let width = self.header("Guide")?;

        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print("\nHere are some of the available combos:\n\n"),
            ResetColor,
        )?;
        for combo in combos {
            execute!(stdout, Print(combo), Print(" "))?;
        }
        execute!(stdout, Print("\n\n"))?;
        self.continue_hint("to return to the menu!")?;
        self.border(width)
    }

    /// A setup question in its own page
    pub fn show_question(&self, title: &str, question: &str) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        self.header(title)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print(format!("\n{}\n", question)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Re-prompt after a bad answer
    pub fn show_invalid(&self, message: &str) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Red),
            Print(format!("Invalid! {}\n", message)),
            ResetColor,
        )?;
        Ok(())
    }

    pub fn show_setup(&self, setup: &GameSetup) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(stdout, Print(format!("{}\n", setup)))?;
        Ok(())
    }

    /// "3! Thwee!" ... "Go!", one line per second
    pub fn show_countdown(&self) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        for line in COUNTDOWN {
            execute!(stdout, Print(line), Print("\n"))?;
            thread::sleep(Duration::from_secs(1));
        }
        Ok(())
    }

    /// Live judge output for one entry
    pub fn show_verdict(&self, entry: &str, verdict: Verdict) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        let (label, color) = match verdict {
            Verdict::Accepted => ("OK : ", Color::Green),
            Verdict::Rejected => ("INVALID : ", Color::Red),
        };

        execute!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(color),
            Print(label),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print(format!(" {}\n", entry)),
        )?;
        Ok(())
    }

    pub fn show_time_up(&self) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("End!\n"),
            ResetColor
        )?;
        Ok(())
    }

    /// Final stats page
    pub fn show_results(&self, outcome: &RoundOutcome) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        let report = &outcome.report;
        let score_color = if report.score() > 90 {
            Color::Green
        } else if report.score() > 50 {
            Color::Yellow
        } else {
            Color::Red
        };

        let width = self.header("The End")?;
        execute!(
            stdout,
            Print("Here are your stats:\n"),
            Print("Score: "),
            SetForegroundColor(score_color),
            Print(format!("{}\n", report.score())),
            ResetColor,
            Print(format!("Time: {} ms\n", outcome.elapsed.as_millis())),
            Print(format!(
                "W/C/T: {}/{}/{}\n",
                report.incorrect(),
                report.correct(),
                report.total()
            )),
        )?;

        self.show_entries("All_RAW", Color::White, report.all())?;
        self.show_entries("All_OK", Color::Green, report.accepted())?;
        self.show_entries("All_INVALID", Color::Red, report.rejected())?;
        self.border(width)
    }

    fn show_entries(
        &self,
        label: &str,
        color: Color,
        entries: &[String],
    ) -> Result<(), Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print(format!("{}: ", label)),
            SetForegroundColor(color),
            Print(format!("[ {} ]\n", entries.join(" "))),
            ResetColor,
        )?;
        Ok(())
    }

    pub fn show_goodbye(&self) -> Result<(), Box<dyn Error>> {
        self.header("Bye!")?;
        stdout().flush()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
