//! Line input using crossterm
//!
//! Features:
//! - Raw-mode line editing with echo and backspace
//! - Reads that give up when a deadline passes
//! - Ctrl+C / Escape graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, style::Print};
use owo_typer::session::{Countdown, LineSource};
use std::error::Error;
use std::io::{stdout, Result as IoResult, Write};
use std::time::Duration;

/// Result of reading one line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// Enter was pressed
    Submitted(String),
    /// The stop condition fired; holds whatever was typed so far
    Stopped(String),
    /// Ctrl+C or Escape
    Exit,
}

/// Raw mode for the lifetime of the guard
struct RawMode;

impl RawMode {
    fn enable() -> IoResult<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations, also the stop-check interval
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Convert key event to a printable character
    pub fn key_to_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Read a line, checking `stop` between polls
    pub fn read_line_until<F>(&self, mut stop: F) -> Result<LineEvent, Box<dyn Error>>
    where
        F: FnMut() -> bool,
    {
        let _raw = RawMode::enable()?;
        let mut stdout = stdout();
        let mut buffer = String::new();

        loop {
            if stop() {
                execute!(stdout, Print("\r\n"))?;
                return Ok(LineEvent::Stopped(buffer));
            }

            let Some(key) = self.read_key()? else {
                continue;
            };

            if Self::is_exit(&key) {
                execute!(stdout, Print("\r\n"))?;
                return Ok(LineEvent::Exit);
            }

            match key.code {
                KeyCode::Enter => {
                    execute!(stdout, Print("\r\n"))?;
                    return Ok(LineEvent::Submitted(buffer));
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        execute!(stdout, Print("\x08 \x08"))?;
                    }
                }
                _ => {
                    if let Some(c) = Self::key_to_char(&key) {
                        buffer.push(c);
                        execute!(stdout, Print(c))?;
                    }
                }
            }
            stdout.flush()?;
        }
    }

    /// Blocking line read. `None` when the player asked to exit.
    pub fn read_line(&self) -> Result<Option<String>, Box<dyn Error>> {
        match self.read_line_until(|| false)? {
            LineEvent::Submitted(line) | LineEvent::Stopped(line) => Ok(Some(line)),
            LineEvent::Exit => Ok(None),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Line to score for a read that ended with `event`; `None` ends the round
fn line_after(event: LineEvent) -> Option<String> {
    match event {
        LineEvent::Submitted(line) => Some(line),
        // Keep what was typed when time ran out
        LineEvent::Stopped(partial) if !partial.trim().is_empty() => Some(partial),
        LineEvent::Stopped(_) => None,
        LineEvent::Exit => None,
    }
}

impl LineSource for InputHandler {
    type Error = Box<dyn Error>;

    fn next_line(&mut self, countdown: &mut Countdown) -> Result<Option<String>, Self::Error> {
        let event = self.read_line_until(|| countdown.is_expired())?;
        Ok(line_after(event))
    }
}
