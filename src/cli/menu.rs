//! Main menu choices

use owo_typer::Error;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Guide,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Play, MenuChoice::Guide, MenuChoice::Quit];

    /// Number typed to pick this entry
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Play => 1,
            MenuChoice::Guide => 2,
            MenuChoice::Quit => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Play => "Play the game! ^w^",
            MenuChoice::Guide => "Guide! >wO",
            MenuChoice::Quit => "Quit this program TwT",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|n| MenuChoice::ALL.into_iter().find(|c| c.key() == n))
            .ok_or_else(|| Error::UnknownMenuChoice(trimmed.to_string()))
    }
}
