//! minimax-chess
//!
//! Runs the minimax engine as a UCI engine (default) or as a console opponent.

mod play;
mod uci;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_core::{Color, Position};
use clap::{Parser, Subcommand, ValueEnum};
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "minimax-chess", version, about = "Fixed-depth alpha-beta chess engine")]
struct Cli {
    /// TOML file with `depth`, `jitter` and `seed`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long, global = true)]
    depth: Option<u8>,

    /// Leaf evaluation noise bound (0 disables it)
    #[arg(long, global = true)]
    jitter: Option<i32>,

    /// Seed for the evaluation noise
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Speak UCI on stdin/stdout
    Uci,
    /// Play a game against the engine in the terminal
    Play {
        /// Side the engine plays
        #[arg(long, value_enum, default_value_t = Side::Black)]
        engine_color: Side,

        /// Starting position (defaults to the standard start)
        #[arg(long)]
        fen: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn engine_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(jitter) = cli.jitter {
        config.jitter = jitter;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("invalid engine configuration")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = engine_config(&cli)?;
    info!(?config, "engine configured");
    let mut engine = MinimaxEngine::with_config(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => uci::run(&mut engine, stdin.lock(), stdout.lock()),
        Command::Play { engine_color, fen } => {
            let pos = match fen {
                Some(fen) => Position::from_fen(&fen)?,
                None => Position::startpos(),
            };
            play::run(&mut engine, engine_color.into(), pos, stdin.lock(), stdout.lock())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["minimax-chess", "--depth", "3", "--seed", "9", "play"]);
        let config = engine_config(&cli).unwrap();
        assert_eq!(config.depth, 3);
        assert_eq!(config.jitter, 10);
        assert_eq!(config.seed, Some(9));
        assert!(matches!(
            cli.command,
            Some(Command::Play {
                engine_color: Side::Black,
                fen: None
            })
        ));
    }

    #[test]
    fn invalid_override_is_an_error() {
        let cli = Cli::parse_from(["minimax-chess", "--depth", "0"]);
        assert!(engine_config(&cli).is_err());
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["minimax-chess", "--jitter", "100000000"]);
        assert!(engine_config(&cli).is_err());
    }
}
