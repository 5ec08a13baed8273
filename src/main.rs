//! Skillreroll - Entry Point
//!
//! Command line front end: loads game data, sets up logging and a seeded
//! RNG, then runs tickets against a session.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use skillreroll::data::{export_default_data, DEFAULT_DATA_DIR};
use skillreroll::engine::{TicketOptions, TicketType};
use skillreroll::entities::{Player, PositionTag};
use skillreroll::report::{format_change, format_odds, format_player, format_stats, Locale};
use skillreroll::session::{BatchOutcome, Session, SkillChange};
use skillreroll::DataManager;

#[derive(Debug, Parser)]
#[command(name = "skillreroll", version, about = "Simulate skill change tickets")]
struct Cli {
    /// Seed for reproducible runs (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory holding skills.ron and probabilities.ron
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Write the log to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Label language (en, zh-tw)
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply tickets to a fresh player
    Roll {
        /// Roster slot, e.g. sp1, cl, b4, sub2
        #[arg(long, default_value = "sp1")]
        position: PositionTag,

        /// Create the player from a legend card
        #[arg(long)]
        legend: bool,

        /// Tickets to apply in order (repeatable)
        #[arg(long = "ticket", default_value = "premium")]
        tickets: Vec<TicketType>,

        /// Slot for protect and choice tickets (0-2)
        #[arg(long)]
        slot: Option<usize>,

        /// Apply each ticket this many times
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Show legend and level-sum odds for a ticket
    Odds {
        #[arg(long, default_value = "premium")]
        ticket: TicketType,
    },
    /// Write the built-in data files for editing
    ExportData {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        dir: PathBuf,
    },
}

#[derive(Serialize)]
struct RollReport<'a> {
    seed: u64,
    changes: Vec<SkillChange>,
    batches: Vec<BatchOutcome>,
    player: &'a Player,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    );
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_data(data_dir: Option<&PathBuf>) -> Result<DataManager> {
    match data_dir {
        Some(dir) => DataManager::load_from(dir)
            .with_context(|| format!("failed to load game data from {}", dir.display())),
        None => Ok(DataManager::discover()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    log::info!("Starting Skillreroll v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Roll { position, legend, tickets, slot, times } => {
            let data = load_data(cli.data_dir.as_ref())?;
            let seed = cli.seed.unwrap_or_else(rand::random);
            log::info!("Using seed {}", seed);

            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = Session::new(data.catalog, data.probabilities);
            session.select(*position, *legend);

            let options = TicketOptions { protected_slot: *slot };
            let cancel = AtomicBool::new(false);
            let mut changes = Vec::new();
            let mut batches = Vec::new();

            for ticket in tickets {
                if *times <= 1 {
                    let change = session
                        .apply(*position, *ticket, options, &mut rng)
                        .with_context(|| format!("{} ticket failed", ticket))?;
                    changes.push(change);
                } else {
                    let outcome = session
                        .simulate_batch(*position, *ticket, options, *times, &cancel, &mut rng)
                        .with_context(|| format!("{} batch failed", ticket))?;
                    batches.push(outcome);
                }
            }

            let player = session
                .player(*position)
                .context("selected player disappeared from the session")?;

            if cli.json {
                let report = RollReport { seed, changes, batches, player };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for change in &changes {
                    print!("{}", format_change(change, cli.locale));
                }
                for outcome in &batches {
                    println!("Ran {} of {} tickets", outcome.completed, outcome.requested);
                }
                print!("{}", format_player(player, cli.locale));
                print!("{}", format_stats(&player.stats, cli.locale));
            }
        }
        Command::Odds { ticket } => {
            let data = load_data(cli.data_dir.as_ref())?;
            if cli.json {
                let sums = if *ticket == TicketType::Premium {
                    data.probabilities.level_sum_distribution_premium()?
                } else {
                    data.probabilities.level_sum_distribution_default()?
                };
                println!("{}", serde_json::to_string_pretty(&sums)?);
            } else {
                print!("{}", format_odds(&data.probabilities, *ticket, cli.locale)?);
            }
        }
        Command::ExportData { dir } => {
            export_default_data(dir)
                .with_context(|| format!("failed to export data to {}", dir.display()))?;
            println!("Wrote default data to {}", dir.display());
        }
    }

    log::info!("Skillreroll finished");
    Ok(())
}
