//! Game client for the 5x5 line game
//!
//! Connects to the game server, registers a player and answers every move
//! request with the engine's choice.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use grid5::client::{GameSession, TcpTransport};
use grid5::search::DEFAULT_CAPACITY;
use grid5::{AIEngine, EngineConfig, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address
    ip: String,

    /// Server port
    port: u16,

    /// Player number assigned by the server (1 plays X, 2 plays O)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    player: u8,

    /// Nickname sent to the server (truncated to 9 characters)
    nickname: String,

    /// Search depth in plies
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    depth: u8,

    /// Maximum transposition table entries
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    cache_capacity: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = EngineConfig {
        depth: args.depth,
        cache_capacity: args.cache_capacity,
        ..EngineConfig::default()
    };
    let engine = AIEngine::new(config, Stone::for_player(args.player));

    log::info!("Connecting to {}:{}...", args.ip, args.port);
    let transport = TcpTransport::connect((args.ip.as_str(), args.port))
        .with_context(|| format!("failed to connect to {}:{}", args.ip, args.port))?;
    log::info!("Connected to server.");

    let mut session = GameSession::new(transport, engine, args.player, args.nickname);
    session.run().context("game session failed")?;

    log::info!("Disconnected.");
    Ok(())
}
