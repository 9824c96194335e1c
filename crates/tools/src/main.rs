use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{ReplayResult, replay::replay_to_end};
use tools::load_journal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal = load_journal(&args.journal)?;
    let result: ReplayResult = replay_to_end(&journal)
        .with_context(|| format!("Replay failed for {}", args.journal.display()))?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Final Frame: {}", result.final_frame);
    println!("Status: {:?}", result.final_status);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
