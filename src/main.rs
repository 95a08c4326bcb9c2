//! Binary entrypoint for the Victory Road CLI.
//!
//! Commands:
//! - `play [--lives <n>]` - play a session, restoring saved lives if present
//! - `init` - create a starter `config.toml`
//! - `status` - print the saved lives for the configured traveler
//! - `reset` - delete the configured traveler's save
//!
//! See the library crate docs for module-level details: `victory_road::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};

use victory_road::config::Config;
use victory_road::errors::GameError;
use victory_road::game::intro::{narrator_name, print_intro};
use victory_road::game::{GameSession, RngChance, SessionSummary, StdConsole};
use victory_road::storage::TravelerStore;

#[derive(Parser)]
#[command(name = "victory-road")]
#[command(about = "A text adventure through Victory Road")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Victory Road
    Play {
        /// Starting lives when the traveler has no save (overrides config)
        #[arg(short, long)]
        lives: Option<u32>,
    },
    /// Write a default configuration file
    Init,
    /// Show the saved lives for the configured traveler
    Status,
    /// Delete the configured traveler's save
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose, log::LevelFilter::Info);
            info!("Writing default configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Play { lives } => {
            // keep the narrative readable unless asked for more
            let config = load_config(&cli.config, cli.verbose, log::LevelFilter::Warn).await?;
            info!("Starting Victory Road v{}", env!("CARGO_PKG_VERSION"));
            let narrator = narrator_name(&config.intro).await;
            let initial_lives = lives.unwrap_or(config.game.initial_lives);
            let session_config = config.clone();
            let outcome = tokio::task::spawn_blocking(move || {
                play_session(&session_config, &narrator, initial_lives)
            })
            .await
            .map_err(|e| GameError::Internal(format!("session task failed: {}", e)))
            .and_then(|r| r);

            match outcome {
                Ok(summary) => {
                    info!(
                        "Finished in {} with {} lives (victory: {})",
                        summary.room, summary.lives, summary.victory
                    );
                }
                Err(e) => {
                    error!("session aborted: {}", e);
                    if e.is_storage() {
                        println!("Storage error: {}", e);
                    } else {
                        println!("Game could not start, an error has occurred: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }
        Commands::Status => {
            let config = load_config(&cli.config, cli.verbose, log::LevelFilter::Info).await?;
            let store = TravelerStore::open(&config.storage.data_dir)?;
            match store.get_record(&config.game.traveler_name)? {
                Some(record) => println!(
                    "{}: {} lives (saved {})",
                    record.name,
                    record.lives,
                    record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
                ),
                None => println!("{}: no save yet", config.game.traveler_name),
            }
            println!("Save file: {}", store.path().display());
            store.close()?;
        }
        Commands::Reset => {
            let config = load_config(&cli.config, cli.verbose, log::LevelFilter::Info).await?;
            let store = TravelerStore::open(&config.storage.data_dir)?;
            if store.delete(&config.game.traveler_name)? {
                println!("Save for {} deleted.", config.game.traveler_name);
            } else {
                println!("{} has no save to delete.", config.game.traveler_name);
            }
            store.close()?;
        }
    }

    Ok(())
}

async fn load_config(path: &str, verbosity: u8, fallback: log::LevelFilter) -> Result<Config> {
    let config = Config::load_or_default(path).await?;
    init_logging(&Some(config.clone()), verbosity, fallback);
    Ok(config)
}

/// Open the store, play one session on the terminal, and release the store.
/// The store is dropped (and flushed) on every error path.
fn play_session(
    config: &Config,
    narrator: &str,
    initial_lives: u32,
) -> Result<SessionSummary, GameError> {
    let store = TravelerStore::open(&config.storage.data_dir)?;
    let mut console = StdConsole::stdio();
    print_intro(&mut console, narrator)?;
    let mut session = GameSession::new(
        &config.game.traveler_name,
        initial_lives,
        store,
        console,
        RngChance::from_entropy(),
    );
    let summary = session.play()?;
    session.close()?;
    Ok(summary)
}

/// CLI verbosity wins, then the configured level, then the command's default.
fn base_level(
    configured: Option<log::LevelFilter>,
    verbosity: u8,
    fallback: log::LevelFilter,
) -> log::LevelFilter {
    match verbosity {
        0 => configured.unwrap_or(fallback),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8, fallback: log::LevelFilter) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    let configured = config.as_ref().and_then(|c| c.logging.level_filter());
    builder.filter_level(base_level(configured, verbosity, fallback));
    // Narrative owns stdout; logs go to stderr
    builder.target(env_logger::Target::Stderr);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(ref file) = log_file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Echo to the console only when a person is watching stderr
            let is_tty = atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
    }

    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
