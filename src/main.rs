//! Play Shut the Box in a terminal.
//!
//! Reads one command per line from stdin. Type `help` for the list.

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shut_the_box::{EngineConfig, EngineError, GameEngine, GameState, Outcome, Phase, TILE_COUNT};

#[derive(Parser, Debug)]
#[command(name = "shut-the-box", about = "Play Shut the Box in the terminal")]
struct Args {
    /// Seed for the dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds to let the dice settle after a roll
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,

    /// Don't keep a command history
    #[arg(long)]
    no_history: bool,

    /// Log engine transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::default()
            .with_history(!self.no_history)
            .with_settle_delay_ms(self.settle_ms);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Roll,
    /// Flip the tile showing this face value.
    Toggle(usize),
    Accept,
    Concede,
    Restart,
    Hint,
    State,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();

    let command = match verb.as_str() {
        "roll" | "r" => Command::Roll,
        "toggle" | "t" => {
            let arg = words.next().ok_or("toggle needs a tile value")?;
            let value: usize = arg
                .parse()
                .map_err(|_| format!("not a tile value: {arg}"))?;
            if !(1..=TILE_COUNT).contains(&value) {
                return Err(format!("tile values are 1-{TILE_COUNT}"));
            }
            Command::Toggle(value)
        }
        "accept" | "a" => Command::Accept,
        "concede" | "c" => Command::Concede,
        "restart" | "new" => Command::Restart,
        "hint" | "h" => Command::Hint,
        "state" | "s" => Command::State,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "" => return Err("empty command".to_string()),
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

fn render(state: &GameState) -> String {
    let tiles: String = state
        .tiles
        .iter()
        .map(|tile| {
            if tile.is_accepted() {
                "[  ]".to_string()
            } else if tile.is_selected() {
                format!("[{:>2}*", tile.value())
            } else {
                format!("[{:>2}]", tile.value())
            }
        })
        .collect();

    let mut out = format!("{tiles}\n");
    match state.phase() {
        Phase::Start if state.round_number > 1 => {
            out.push_str(&format!("Next round! (round {})", state.round_number))
        }
        Phase::Start => out.push_str("Shut the Box. Type `roll` to begin."),
        Phase::Rolling => out.push_str("Rolling..."),
        Phase::AwaitingSelection => out.push_str(&format!(
            "Rolled {}. Current sum: {}",
            state.round.cubes,
            state.current_sum()
        )),
        Phase::EndedWin | Phase::EndedLoss => match state.outcome() {
            Some(Outcome::Won) => out.push_str("You shut the box! You won."),
            Some(Outcome::Lost { score }) => {
                out.push_str(&format!("You lost with {score} points open."))
            }
            None => {}
        },
    }
    out
}

fn explain(err: &EngineError) -> String {
    match err {
        EngineError::SumMismatch { .. } => "Selection does not match the roll.".to_string(),
        EngineError::TileLocked { index } => format!("Tile {} is already closed.", index + 1),
        other => other.to_string(),
    }
}

const HELP: &str = "\
commands:
  roll | r          throw the dice
  toggle N | t N    select or deselect tile N
  accept | a        close the selected tiles
  concede | c       give up
  restart | new     start a new game
  hint | h          list selections that match the roll
  state | s         print the game state as JSON
  quit | q          leave";

fn run_command(engine: &mut GameEngine, command: Command, out: &mut impl Write) -> Result<()> {
    let result = match command {
        Command::Roll => match engine.roll() {
            Ok(_) => {
                writeln!(out, "{}", render(engine.view()))?;
                out.flush()?;
                thread::sleep(engine.config().settle_delay());
                engine.complete_roll()
            }
            Err(err) => Err(err),
        },
        Command::Toggle(value) => {
            let index = value - 1;
            let on = !engine.view().tile(index).is_some_and(|t| t.is_selected());
            engine.toggle_tile(index, on)
        }
        Command::Accept => engine.accept(),
        Command::Concede => engine.concede(),
        Command::Restart => engine.restart(),
        Command::Hint => {
            let found = engine.candidate_selections();
            if engine.phase() != Phase::AwaitingSelection {
                writeln!(out, "Roll first.")?;
            } else if !engine.selection_possible() {
                writeln!(out, "No selection matches this roll. You can only concede.")?;
            }
            for selection in found {
                let values: Vec<String> = selection.iter().map(|i| (i + 1).to_string()).collect();
                writeln!(out, "  {}", values.join(" + "))?;
            }
            return Ok(());
        }
        Command::State => {
            let json = serde_json::to_string_pretty(&engine.state())?;
            writeln!(out, "{json}")?;
            return Ok(());
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };

    match result {
        Ok(_) => writeln!(out, "{}", render(engine.view()))?,
        Err(err) => writeln!(out, "{}", explain(&err))?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = args.config();
    info!(seed = ?config.seed, settle_ms = config.settle_delay_ms, "starting shut-the-box");
    let mut engine = GameEngine::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", render(engine.view()))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run_command(&mut engine, command, &mut stdout)?,
            Err(msg) => writeln!(stdout, "{msg} (type `help`)")?,
        }
    }

    info!(commands = engine.history().len(), "session ended");
    Ok(())
}
