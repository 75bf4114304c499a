use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkers_engine::ai::{Agent, RandomAgent};
use checkers_engine::config::{AgentKind, AppConfig};
use checkers_engine::game::{Coord, Game, GameOutcome, Move, Phase, TurnEvent};

/// Play checkers in the terminal, one cell click per line.
#[derive(Parser)]
#[command(name = "checkers", about = "Play checkers against a person or a random agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "checkers.toml")]
    config: PathBuf,

    /// Override who plays the first side
    #[arg(long, value_enum)]
    first: Option<AgentKind>,

    /// Override who plays the second side
    #[arg(long, value_enum)]
    second: Option<AgentKind>,

    /// Override the random agent seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(first) = cli.first {
        config.play.first = first;
    }
    if let Some(second) = cli.second {
        config.play.second = second;
    }
    if let Some(seed) = cli.seed {
        config.play.seed = Some(seed);
    }

    let mut random = match config.play.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = config.new_game();

    print_help();
    loop {
        println!();
        print!("{}", game.board());
        println!("{}", status(&game));

        if let Phase::GameOver(_) = game.phase() {
            break;
        }

        if config.play.agent_for(game.active_side()) == AgentKind::Random {
            let mv = random
                .select_move(&game)
                .context("random agent found no move in a live game")?;
            let (next, report) = game.submit(&mv).context("random agent move refused")?;
            println!("{} plays {}", game.active_side().name(), report.mv);
            game = next;
            continue;
        }

        print!("> ");
        io::stdout().flush().context("flushing stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            "n" | "new" => game = config.new_game(),
            "m" | "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(Move::to_string).collect();
                println!("legal: {}", moves.join(" "));
            }
            _ => game = handle_input(game, input),
        }
    }

    Ok(())
}

/// Apply a typed cell click or full move; on failure report and keep the game.
fn handle_input(game: Game, input: &str) -> Game {
    if let Ok(mv) = input.parse::<Move>() {
        return match game.submit(&mv) {
            Ok((next, report)) => {
                println!("{} plays {}", report.side.name(), report.mv);
                next
            }
            Err(err) => {
                println!("illegal move: {err}");
                game.deselect()
            }
        };
    }

    let cell = match input.parse::<Coord>() {
        Ok(cell) => cell,
        Err(err) => {
            println!("{err}");
            return game;
        }
    };

    match game.click(cell) {
        Ok((next, event)) => {
            match event {
                TurnEvent::Selected(c) | TurnEvent::Reselected(c) => println!("selected {c}"),
                TurnEvent::Deselected => println!("selection cleared"),
                TurnEvent::Moved(report) => {
                    println!("{} plays {}", report.side.name(), report.mv)
                }
            }
            next
        }
        Err(err) => {
            println!("{err}");
            game
        }
    }
}

fn status(game: &Game) -> String {
    match game.phase() {
        Phase::GameOver(GameOutcome::Winner(side)) => format!("Game over: {} wins", side.name()),
        Phase::GameOver(GameOutcome::Draw) => "Game over: draw".to_string(),
        Phase::AwaitingSelection => format!("{} to move", game.active_side().name()),
        Phase::AwaitingDestination(cell) => {
            format!("{} to move, {cell} selected", game.active_side().name())
        }
        Phase::ChainCapture(cell) => {
            format!("{} must keep jumping from {cell}", game.active_side().name())
        }
    }
}

fn print_help() {
    println!("Enter a cell as 'row,col' to select or move, or a full move as 'row,col row,col'.");
    println!("Commands: m moves | n new game | h help | q quit");
}
