//! Wum+ - hunt the Wumpus, dodge the pits, befriend the Supmuw.
//!
//! - `wumplus play` - play from the keyboard
//! - `wumplus agent` - watch the knowledge-base agent play

mod human;
mod journal;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wumpus_core::rng::AGENT_STREAM;
use wumpus_core::{Policy, SplitMix64, WorldView};
use wumpus_kb::KnowledgeAgent;
use wumpus_world::{Game, GameOutcome, Session, WorldConfig};

use crate::human::HumanPolicy;
use crate::journal::Journal;

#[derive(Parser)]
#[command(name = "wumplus")]
#[command(about = "Hunt the Wumpus, by hand or by knowledge base", version)]
struct Cli {
    /// World configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the map and the agent's exploration (defaults to the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Append every turn as a JSON line to this file
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play from the keyboard
    Play,

    /// Let the knowledge-base agent play
    Agent {
        /// Print the knowledge base to stderr when the game ends
        #[arg(long)]
        dump_kb: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("Wum+ - Hunt the Wumpus");
        println!();
        println!("Usage: wumplus [OPTIONS] <COMMAND>");
        println!();
        println!("Commands:");
        println!("  play   Play from the keyboard");
        println!("  agent  Let the knowledge-base agent play");
        println!();
        println!("Run 'wumplus --help' for more information.");
        return Ok(());
    };

    let config = WorldConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load world configuration")?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, size = config.size, "Starting game");

    let game = Game::from_config(&config, seed).context("Failed to build the world")?;
    render::banner(&config);

    match command {
        Commands::Play => {
            let stdin = std::io::stdin();
            let player = HumanPolicy::new(stdin.lock(), std::io::stdout());
            play(game, player, seed, cli.journal.as_deref(), false)?;
        }
        Commands::Agent { dump_kb } => {
            let agent = KnowledgeAgent::new(game.bounds(), SplitMix64::for_stream(seed, AGENT_STREAM))
                .with_arrows(config.arrows);
            let agent = play(game, agent, seed, cli.journal.as_deref(), true)?;
            if dump_kb {
                eprintln!("Knowledge Base Dump");
                for (i, fact) in agent.dump_facts().iter().enumerate() {
                    eprintln!("{:4}: {}", i + 1, fact);
                }
            }
        }
    }
    Ok(())
}

/// Run one game to the end and hand the player back.
fn play<P: Policy>(
    game: Game,
    player: P,
    seed: u64,
    journal: Option<&Path>,
    echo_actions: bool,
) -> Result<P> {
    let mut journal = journal.map(|path| Journal::open(path, seed)).transpose()?;
    let mut journal_error = None;

    let mut session = Session::new(game, player);
    if echo_actions {
        render::map(session.game());
    }
    render::status(session.game(), session.percepts());

    let outcome: GameOutcome = session.run_with(|game, turn| {
        if echo_actions {
            println!("agent_input: {}", turn.action.command());
        }
        render::narrate(game, turn);
        if let Some(journal) = journal.as_mut() {
            if let Err(err) = journal.record(game, turn) {
                tracing::warn!(error = %err, "journal write failed");
                journal_error.get_or_insert(err);
            }
        }
        if !game.is_over() {
            if echo_actions {
                render::map(game);
            }
            render::status(game, turn.report.percepts);
        }
    });

    render::final_analysis(session.game(), outcome);
    if let Some(err) = journal_error {
        return Err(err);
    }
    let (_, player) = session.into_parts();
    Ok(player)
}

fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
