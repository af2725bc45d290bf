use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use americano::calculate::player_statistics;
use americano::config::TournamentConfig;
use americano::models::{update_score, MatchScore};
use americano::report::render_summary;
use americano::schedule;
use americano::storage::{
    clear_snapshot, load_snapshot, save_matches, save_snapshot, StorageConfig,
};

#[derive(Parser)]
#[command(name = "americano")]
#[command(about = "Americano padel tournament scheduler")]
#[command(version)]
struct Cli {
    /// Data directory for the tournament snapshot
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the match schedule from a tournament config file
    Generate {
        /// Path to the tournament TOML file
        #[arg(long, default_value = "./tournament.toml")]
        config: PathBuf,

        /// Print the schedule without saving a snapshot
        #[arg(long)]
        dry_run: bool,
    },

    /// Enter the score of one match
    Score {
        /// Global match number
        #[arg(long = "match")]
        number: u32,

        /// Points for side 1
        side1: u32,

        /// Points for side 2
        side2: u32,
    },

    /// Print ranked player standings
    Standings,

    /// Print the shareable text summary
    Summary,

    /// Remove the stored snapshot
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage = StorageConfig::new(cli.data_dir);

    match cli.command {
        Commands::Generate { config, dry_run } => {
            let config = TournamentConfig::from_file(&config)
                .with_context(|| format!("loading tournament config from {}", config.display()))?;
            let matches = schedule::generate(&config)?;

            if !dry_run {
                // Best-effort: the generated schedule stays usable even if
                // the snapshot cannot be written.
                if let Err(e) = save_snapshot(&storage, &config, &matches) {
                    warn!("Failed to save snapshot: {}", e);
                }
            }

            print!("{}", render_summary(&matches));
        }

        Commands::Score {
            number,
            side1,
            side2,
        } => {
            let (_, mut matches) = load_snapshot(&storage)?;
            update_score(&mut matches, number, MatchScore { side1, side2 })?;
            save_matches(&storage, &matches)?;
            println!("Match {}: {}:{}", number, side1, side2);
        }

        Commands::Standings => {
            let (config, matches) = load_snapshot(&storage)?;
            let standings = player_statistics(&matches, &config.players);

            println!(
                "{:<4} {:<20} {:>6} {:>6} {:>6} {:>8} {:>6}",
                "#", "Player", "Played", "Won", "For", "Against", "Diff"
            );
            for (rank, stats) in standings.iter().enumerate() {
                println!(
                    "{:<4} {:<20} {:>6} {:>6} {:>6} {:>8} {:>6}",
                    rank + 1,
                    stats.player.name,
                    stats.matches_played,
                    stats.matches_won,
                    stats.points_for,
                    stats.points_against,
                    stats.difference
                );
            }
        }

        Commands::Summary => {
            let (_, matches) = load_snapshot(&storage)?;
            print!("{}", render_summary(&matches));
        }

        Commands::Clear => {
            clear_snapshot(&storage)?;
            println!("Snapshot cleared");
        }
    }

    Ok(())
}
