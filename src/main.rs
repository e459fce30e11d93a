//! owo-typer - type as many valid UwU/OwO combos as you can before time runs out
//!
//! Menu-driven terminal game on top of the `owo_typer` library.

mod cli;

use clap::{Args as ClapArgs, Parser, Subcommand};
use cli::display::{Display, CONTINUE_KEY};
use cli::input::InputHandler;
use cli::menu::MenuChoice;
use owo_typer::combo::{default_attempts, sample_combos, GlyphTable};
use owo_typer::config::{self, GameSetup};
use owo_typer::session::{play_round, RoundOutcome, Verdict};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "owo-typer")]
#[command(about = "Type as many valid UwU/OwO combos as you can before the countdown ends")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging (stderr)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the game (default)
    Play(PlayArgs),
    /// Check whether combos are valid
    Check {
        /// Combos to check
        #[arg(required = true)]
        combos: Vec<String>,
    },
    /// Print a random sample of valid combos
    Combos {
        /// Number of draws (defaults to one per eye pair)
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct PlayArgs {
    /// Countdown length in seconds (skips the prompt)
    #[arg(short, long, value_parser = parse_time_arg)]
    time: Option<u64>,

    /// Live feedback per entry, yes/no (skips the prompt)
    #[arg(short, long, value_parser = parse_judge_arg)]
    judge: Option<bool>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_time_arg(s: &str) -> Result<u64, String> {
    config::parse_duration(s).map_err(|e| e.to_string())
}

fn parse_judge_arg(s: &str) -> Result<bool, String> {
    config::parse_answer(s).map_err(|e| e.to_string())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Ask until `parse` accepts the answer. `None` when the player exits.
fn prompt<T>(
    display: &Display,
    input: &InputHandler,
    parse: fn(&str) -> owo_typer::Result<T>,
) -> Result<Option<T>, Box<dyn Error>> {
    loop {
        let Some(line) = input.read_line()? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => display.show_invalid(&e.to_string())?,
        }
    }
}

/// Fill in whatever the command line left open
fn ask_setup(
    display: &Display,
    input: &InputHandler,
    args: &PlayArgs,
) -> Result<Option<GameSetup>, Box<dyn Error>> {
    let time = match args.time {
        Some(secs) => secs,
        None => {
            display.clear()?;
            display.show_question(
                "Preset Timer",
                "Enter the preset timer countdown (in seconds): ",
            )?;
            match prompt(display, input, config::parse_duration)? {
                Some(secs) => secs,
                None => return Ok(None),
            }
        }
    };

    let judge = match args.judge {
        Some(judge) => judge,
        None => {
            display.clear()?;
            display.show_question(
                "Judge Preset",
                "Do you want to enable the judge?\n\
                 The judge shows you if you typed something wrong or not during the run (y/n): ",
            )?;
            match prompt(display, input, config::parse_answer)? {
                Some(judge) => judge,
                None => return Ok(None),
            }
        }
    };

    Ok(Some(GameSetup::new(time, judge)?))
}

fn run_round(
    display: &Display,
    input: &mut InputHandler,
    setup: &GameSetup,
) -> Result<RoundOutcome, Box<dyn Error>> {
    display.clear()?;
    display.show_setup(setup)?;
    display.show_countdown()?;

    let judge = |entry: &str, verdict: Verdict| {
        if let Err(e) = display.show_verdict(entry, verdict) {
            warn!("could not show verdict: {}", e);
        }
    };
    let outcome = play_round(setup, GlyphTable::builtin(), input, judge)?;

    display.show_time_up()?;
    Ok(outcome)
}

fn interactive(args: PlayArgs) -> Result<(), Box<dyn Error>> {
    let display = Display::new();
    let mut input = InputHandler::new();

    display.clear()?;
    display.show_welcome()?;
    loop {
        match input.read_line()? {
            None => return display.show_goodbye(),
            Some(line) if line.trim().eq_ignore_ascii_case(CONTINUE_KEY) => break,
            Some(_) => display.show_invalid(&format!("Type: {}", CONTINUE_KEY))?,
        }
    }

    loop {
        display.clear()?;
        display.show_menu()?;

        let Some(choice) = prompt(&display, &input, str::parse::<MenuChoice>)? else {
            return display.show_goodbye();
        };
        info!(?choice, "menu choice");

        match choice {
            MenuChoice::Play => {
                let Some(setup) = ask_setup(&display, &input, &args)? else {
                    return display.show_goodbye();
                };
                let outcome = run_round(&display, &mut input, &setup)?;

                display.clear()?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                } else {
                    display.show_results(&outcome)?;
                }
                return Ok(());
            }
            MenuChoice::Guide => {
                let table = GlyphTable::builtin();
                let combos = sample_combos(table, &mut rand::thread_rng(), default_attempts(table));
                display.clear()?;
                display.show_guide(&combos)?;
                if input.read_line()?.is_none() {
                    return display.show_goodbye();
                }
            }
            MenuChoice::Quit => return display.show_goodbye(),
        }
    }
}

fn check(combos: &[String]) {
    let table = GlyphTable::builtin();
    for combo in combos {
        let verdict = if table.is_valid(combo) { "Valid" } else { "Invalid" };
        println!("{} {}", combo, verdict);
    }
}

fn list_combos(count: Option<usize>, seed: Option<u64>) {
    let table = GlyphTable::builtin();
    let attempts = count.unwrap_or_else(|| default_attempts(table));
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let combos: Vec<String> = sample_combos(table, &mut rng, attempts).into_iter().collect();
    println!("{}", combos.join(" "));
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.debug);

    match args.command {
        None => interactive(PlayArgs::default()),
        Some(Command::Play(play)) => interactive(play),
        Some(Command::Check { combos }) => {
            check(&combos);
            Ok(())
        }
        Some(Command::Combos { count, seed }) => {
            list_combos(count, seed);
            Ok(())
        }
    }
}
