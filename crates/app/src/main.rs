use std::io;
use std::path::PathBuf;

use adventure::app_loop::{AppState, SessionEnd};
use adventure::config::AppConfig;
use adventure::format_snapshot_hash;
use adventure::recording::write_journal_atomic;
use adventure_core::{ContentPack, Game, InputJournal};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file; defaults to the per-user config location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the session's commands as a JSON journal when it ends
    #[arg(short, long)]
    record: Option<PathBuf>,
}

fn load_config(explicit: Option<PathBuf>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return AppConfig::load(&path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()));
    }
    match AppConfig::get_default_path() {
        Some(path) => AppConfig::load_or_default(&path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = load_config(args.config)?;
    adventure::init_tracing(config.log_filter.as_deref());

    let content = ContentPack::default();
    let mut game = Game::new(&content, config.player).wrap_err("Failed to set up the game")?;
    let mut app = AppState::new(InputJournal::new(&content, config.player));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = app.run(&mut game, stdin.lock(), &mut stdout.lock())?;
    info!(?end, turns = game.turns(), "session ended");

    if let Some(path) = args.record {
        write_journal_atomic(&app.journal, &path)
            .wrap_err_with(|| format!("Failed to write journal: {}", path.display()))?;
    }

    if matches!(end, SessionEnd::Finished(_)) {
        info!(snapshot = %format_snapshot_hash(game.snapshot_hash()), "final state");
    }
    Ok(())
}
