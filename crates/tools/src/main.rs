use anyhow::{Context, Result};
use clap::Parser;
use game_core::{ContentPack, InputJournal, ReplayResult, replay::replay_to_end};
use std::{fs, io};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    let content = ContentPack::default();

    let result: ReplayResult = replay_to_end(&content, &journal)
        .with_context(|| format!("Replay of {} failed", args.journal))?;

    println!("Replay complete.");
    println!("Inputs: {} ({} refused)", result.applied_inputs, result.refused_inputs);
    println!("Outcome: {:?}", result.final_outcome);
    println!("Room: {}", result.final_room);
    println!("Health: {}", result.final_player_health);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
