//! Dots and boxes engine
//!
//! `dots play` (the default) speaks the turn protocol on stdin/stdout.
//! `dots gui` opens the desktop board.

use std::io::{self, BufWriter};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use dots::engine::DEFAULT_DEPTH;
use dots::protocol::Session;
use dots::search::DEFAULT_ENDGAME_THRESHOLD;
use dots::ui::DotsApp;
use dots::{AIEngine, EngineConfig, EvalWeights};

#[derive(Debug, Parser)]
#[command(name = "dots", version, about = "Dots and boxes engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    engine: EngineArgs,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer turns on stdin with moves on stdout
    Play,
    /// Open the desktop board
    Gui,
}

#[derive(Debug, Args)]
struct EngineArgs {
    /// Alpha-beta depth in plies
    #[arg(long, global = true, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Switch to the greedy scan below this many open lines
    #[arg(long, global = true, default_value_t = DEFAULT_ENDGAME_THRESHOLD)]
    endgame_threshold: usize,

    /// Weight per box of net score
    #[arg(long, global = true, default_value_t = EvalWeights::DEFAULT_SCORE)]
    weight_score: i32,

    /// Penalty per three-sided box
    #[arg(long, global = true, default_value_t = EvalWeights::DEFAULT_THREE_SIDES)]
    weight_three: i32,

    /// Bonus per two-sided box
    #[arg(long, global = true, default_value_t = EvalWeights::DEFAULT_TWO_SIDES)]
    weight_two: i32,

    /// Evaluate net score and three-sided boxes only
    #[arg(long, global = true, conflicts_with_all = ["weight_three", "weight_two"])]
    score_only: bool,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        let weights = if self.score_only {
            EvalWeights {
                score: self.weight_score,
                ..EvalWeights::score_only()
            }
        } else {
            EvalWeights {
                score: self.weight_score,
                three_sides: self.weight_three,
                two_sides: self.weight_two,
                ..EvalWeights::default()
            }
        };
        EngineConfig {
            depth: self.depth,
            endgame_threshold: self.endgame_threshold,
            weights,
        }
    }
}

/// Logs go to stderr; stdout carries moves
fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter {level:?}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .map_err(|err| anyhow!("tracing already initialized: {err}"))?;

    Ok(())
}

fn play(config: EngineConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let mut session = Session::new(stdin, stdout, AIEngine::with_config(config));
    session.run().context("protocol session failed")?;
    info!(turns = session.turns(), "done");
    Ok(())
}

fn gui(config: EngineConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Dots and Boxes"),
        ..Default::default()
    };

    eframe::run_native(
        "Dots and Boxes",
        options,
        Box::new(move |cc| Ok(Box::new(DotsApp::new(cc, config)?))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli.engine.config();
    info!(?config, "engine configured");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(config),
        Command::Gui => gui(config),
    }
}
