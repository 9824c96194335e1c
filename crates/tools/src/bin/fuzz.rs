use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Game, GameConfig, InputJournal};
use tools::{RunSummary, WanderBot, check_invariants, load_config, save_journal};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Seed for the input bot; defaults to the map seed
    #[arg(long)]
    bot_seed: Option<u64>,
    #[arg(short, long, default_value_t = 10_000)]
    frames: u64,
    /// Optional TOML file overriding the default run parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the driven inputs here as a replayable journal
    #[arg(short, long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    println!("Starting fuzz harness on seed {} for {} frames...", args.seed, args.frames);
    let mut game = Game::with_config(args.seed, config.clone())?;
    let mut journal = InputJournal::new(args.seed, config);
    let mut bot = WanderBot::new(args.bot_seed.unwrap_or(args.seed));

    let mut summary = RunSummary::default();
    for frame in 0..args.frames {
        let input = bot.next_input(&game);
        journal.record(input);
        game.frame(input);
        check_invariants(&game).with_context(|| format!("Invariant failed at frame {frame}"))?;
        summary.absorb(&game.drain_log());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    println!("Snapshot Hash: {}", game.snapshot_hash());

    if let Some(path) = &args.record {
        save_journal(path, &journal)?;
        println!("Journal written to {}", path.display());
    }
    println!("Fuzzing completed successfully.");
    Ok(())
}
