//! Orchard Sim - Main Binary
//!
//! Thin interactive shell over the game model. It reads one command per
//! line, invokes the matching model operation, and lets the model's
//! report channel render to stdout. No game logic lives here.

use clap::{Parser, Subcommand};
use orchard_sim::{
    core::Season,
    game::{GameLogger, GameState, VerbosityLevel},
    OrchardError, Result,
};
use std::io::{self, BufRead, Write};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "orchard")]
#[command(about = "Orchard Sim - text-driven game-state simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play: one command per line on stdin
    Play {
        /// Starting season (spring/summer/winter; anything else starts unset)
        #[arg(long)]
        season: Option<String>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,
    },
}

/// One parsed shell command
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Grab(String),
    Drop(String),
    Examine(String),
    Use(String),
    Walk(String),
    Fly(i32, i32),
    Grow,
    Shrink,
    Rest,
    Undo,
    Season(String),
    Score(Option<i64>),
    History,
    Dump,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let head = tokens
        .next()
        .ok_or_else(|| OrchardError::InvalidCommand("empty input".to_string()))?;
    let rest: Vec<&str> = tokens.collect();

    let one_arg = |name: &str| -> Result<String> {
        if rest.is_empty() {
            Err(OrchardError::InvalidCommand(format!("{name} needs an argument")))
        } else {
            Ok(rest.join(" "))
        }
    };

    match head.to_lowercase().as_str() {
        "grab" => Ok(Command::Grab(one_arg("grab")?)),
        "drop" => Ok(Command::Drop(one_arg("drop")?)),
        "examine" => Ok(Command::Examine(one_arg("examine")?)),
        "use" => Ok(Command::Use(one_arg("use")?)),
        "walk" => Ok(Command::Walk(one_arg("walk")?)),
        "fly" => {
            let [x, y] = rest.as_slice() else {
                return Err(OrchardError::InvalidCommand(
                    "fly needs two coordinates, e.g. 'fly 3 4'".to_string(),
                ));
            };
            let x = x
                .parse::<i32>()
                .map_err(|e| OrchardError::ParseError(format!("bad x coordinate: {e}")))?;
            let y = y
                .parse::<i32>()
                .map_err(|e| OrchardError::ParseError(format!("bad y coordinate: {e}")))?;
            Ok(Command::Fly(x, y))
        }
        "grow" => Ok(Command::Grow),
        "shrink" => Ok(Command::Shrink),
        "rest" => Ok(Command::Rest),
        "undo" => Ok(Command::Undo),
        "season" => Ok(Command::Season(one_arg("season")?)),
        "score" => match rest.as_slice() {
            [] => Ok(Command::Score(None)),
            [value] => {
                let points = value
                    .parse::<i64>()
                    .map_err(|e| OrchardError::ParseError(format!("bad score: {e}")))?;
                Ok(Command::Score(Some(points)))
            }
            _ => Err(OrchardError::InvalidCommand(
                "score takes at most one value".to_string(),
            )),
        },
        "history" => Ok(Command::History),
        "dump" => Ok(Command::Dump),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(OrchardError::InvalidCommand(format!(
            "unknown command '{other}' (try 'help')"
        ))),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  grab <fruit>      gain experience equal to the name's length (undoable)");
    println!("  drop <fruit>      lose experience equal to the name's length (undoable)");
    println!("  examine <name>    report the fruit count at a location");
    println!("  use <fruit>       spend 2 experience");
    println!("  walk <direction>  forward/backward/left/right");
    println!("  fly <x> <y>       fly to non-negative coordinates");
    println!("  grow              replenish all locations (spring/summer only)");
    println!("  shrink            winter decay across all locations");
    println!("  rest              gain 2 experience (undoable)");
    println!("  undo              reverse the most recent undoable action");
    println!("  season <label>    set the season (unrecognized labels unset it)");
    println!("  score [n]         show, or set, the experience score");
    println!("  history           list recorded actions, oldest first");
    println!("  dump              print the state as JSON");
    println!("  quit              leave the game");
}

fn dispatch(game: &mut GameState, command: Command) -> Result<bool> {
    match command {
        Command::Grab(fruit) => game.grab(&fruit),
        Command::Drop(fruit) => {
            game.drop_fruit(&fruit);
        }
        Command::Examine(name) => game.examine(&name),
        Command::Use(fruit) => game.use_item(&fruit),
        Command::Walk(direction) => {
            game.walk(&direction);
        }
        Command::Fly(x, y) => {
            game.fly(x, y);
        }
        Command::Grow => {
            game.grow();
        }
        Command::Shrink => {
            game.shrink();
        }
        Command::Rest => game.rest(),
        Command::Undo => game.undo(),
        // Unrecognized labels store the unset season; the seasonal
        // operations then silently no-op.
        Command::Season(label) => game.set_season(label.parse::<Season>().ok()),
        Command::Score(None) => println!("{}", game.experience_points()),
        Command::Score(Some(points)) => game.set_experience_points(points),
        Command::History => {
            for entry in game.history.entries() {
                println!("{entry:?}");
            }
            println!("{} recorded action(s)", game.history.len());
        }
        Command::Dump => println!("{}", serde_json::to_string_pretty(&*game)?),
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn run_play(season: Option<String>, verbosity: VerbosityLevel) -> Result<()> {
    let mut game = GameState::with_logger(GameLogger::with_verbosity(verbosity));
    if let Some(label) = season {
        game.set_season(label.parse::<Season>().ok());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if !dispatch(&mut game, command)? {
                    break;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { season, verbosity } => run_play(season, verbosity.into())?,
    }

    Ok(())
}
