use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkers_engine::ai::RandomAgent;
use checkers_engine::config::AppConfig;
use checkers_engine::game::{GameOutcome, Side};
use checkers_engine::play::{play_game, replay, GameEnd};

/// Play headless random-vs-random checkers games.
#[derive(Parser)]
#[command(name = "selfplay", about = "Play headless random checkers games")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "checkers.toml")]
    config: PathBuf,

    /// Base seed; game i uses seeds derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Override the per-game ply cap
    #[arg(long)]
    max_plies: Option<usize>,

    /// Print each game record as a JSON line
    #[arg(long)]
    json: bool,
}

#[derive(Default)]
struct Tally {
    first: usize,
    second: usize,
    draws: usize,
    unfinished: usize,
    plies: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(max_plies) = cli.max_plies {
        config.play.max_plies = max_plies;
    }
    if let Some(seed) = cli.seed {
        config.play.seed = Some(seed);
    }
    config.validate().context("validating config")?;

    let mut tally = Tally::default();
    for index in 0..cli.games {
        let (mut first, mut second) = match config.play.seeds_for_game(index) {
            Some((a, b)) => (RandomAgent::seeded(a), RandomAgent::seeded(b)),
            None => (RandomAgent::new(), RandomAgent::new()),
        };

        let record = play_game(&mut first, &mut second, config.new_game(), config.play.max_plies);

        // Every recorded game must replay to the same position.
        let replayed = replay(&record.moves, config.new_game())
            .with_context(|| format!("replaying game {index}"))?;
        anyhow::ensure!(
            replayed == record.final_game,
            "game {index} replayed to a different position"
        );

        if cli.json {
            println!("{}", serde_json::to_string(&record).context("serializing record")?);
        }

        tally.plies += record.moves.len();
        match record.end {
            GameEnd::Finished {
                outcome: GameOutcome::Winner(Side::First),
            } => tally.first += 1,
            GameEnd::Finished {
                outcome: GameOutcome::Winner(Side::Second),
            } => tally.second += 1,
            GameEnd::Finished {
                outcome: GameOutcome::Draw,
            } => tally.draws += 1,
            _ => tally.unfinished += 1,
        }
    }

    if !cli.json {
        println!("-------------------------------------------");
        println!("Games played:  {}", cli.games);
        println!("{} wins:    {}", Side::First.name(), tally.first);
        println!("{} wins:      {}", Side::Second.name(), tally.second);
        println!("Draws:         {}", tally.draws);
        println!("Unfinished:    {}", tally.unfinished);
        if cli.games > 0 {
            println!(
                "Average plies: {:.1}",
                tally.plies as f64 / cli.games as f64
            );
        }
    }

    Ok(())
}
