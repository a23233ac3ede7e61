//! Gomoku with Minimax and Alpha-Beta AI
//!
//! Runs the desktop GUI by default; `play` starts a console game against the
//! AI and `duel` pits Minimax against Alpha-Beta.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use gomoku::config::{validate_board_size, DEFAULT_DEPTH};
use gomoku::console::ConsoleGame;
use gomoku::duel::{Duel, DuelOutcome};
use gomoku::ui::GomokuApp;
use gomoku::{AIEngine, Algorithm, EngineConfig, Stone, DEFAULT_BOARD_SIZE};

#[derive(Debug, Parser)]
#[command(name = "gomoku")]
#[command(about = "Gomoku against a Minimax / Alpha-Beta AI")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Gui,
    /// Play against the AI in the terminal
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = Algorithm::AlphaBeta)]
        algorithm: Algorithm,
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: i8,
        /// Play White and let the AI open
        #[arg(long)]
        white: bool,
    },
    /// Minimax (Black) against Alpha-Beta (White)
    Duel {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        minimax_depth: i8,
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        alphabeta_depth: i8,
        /// Stop after this many stones
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn run_gui() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku - Minimax vs Alpha-Beta"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("GUI failed: {err}"))
}

fn run_play(size: usize, algorithm: Algorithm, depth: i8, white: bool) -> Result<()> {
    let size = validate_board_size(size)?;
    let config = EngineConfig::new(algorithm, depth);
    config.validate()?;

    let human = if white { Stone::White } else { Stone::Black };
    info!(size, %algorithm, depth, ?human, "starting console game");

    let mut game = ConsoleGame::new(size, AIEngine::with_config(config), human);
    game.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_duel(duel: Duel) -> Result<()> {
    validate_board_size(duel.size)?;
    EngineConfig::new(Algorithm::Minimax, duel.minimax_depth).validate()?;
    EngineConfig::new(Algorithm::AlphaBeta, duel.alphabeta_depth).validate()?;

    println!(
        "Minimax (X, depth {}) vs Alpha-Beta (O, depth {}) on {}x{}",
        duel.minimax_depth, duel.alphabeta_depth, duel.size, duel.size
    );
    let report = duel.run_with(|board, result| {
        if let Some(pos) = result.best_move {
            println!(
                "{} plays {} {} in {} ms ({} nodes)",
                result.algorithm,
                pos.row + 1,
                pos.col + 1,
                result.time_ms,
                result.nodes
            );
        }
        print!("{board}");
    });

    match report.outcome {
        DuelOutcome::Won { algorithm, stone } => println!("{algorithm} ({}) wins after {} moves", stone.symbol(), report.moves),
        DuelOutcome::Draw => println!("Draw after {} moves", report.moves),
        DuelOutcome::MoveLimit => println!("Stopped at the move limit ({} moves)", report.moves),
        DuelOutcome::Stalled => println!("Stopped after {} moves: an engine had no move", report.moves),
    }
    if let Some(avg) = report.minimax_average() {
        println!("Minimax average:    {:.1} ms", avg.as_secs_f64() * 1000.0);
    }
    if let Some(avg) = report.alphabeta_average() {
        println!("Alpha-Beta average: {:.1} ms", avg.as_secs_f64() * 1000.0);
    }
    if let Some(speedup) = report.speedup() {
        println!("Alpha-Beta speedup: {speedup:.2}x");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(),
        Command::Play {
            size,
            algorithm,
            depth,
            white,
        } => run_play(size, algorithm, depth, white),
        Command::Duel {
            size,
            minimax_depth,
            alphabeta_depth,
            max_moves,
        } => run_duel(Duel {
            size,
            minimax_depth,
            alphabeta_depth,
            max_moves,
            ..Duel::default()
        }),
    }
}
