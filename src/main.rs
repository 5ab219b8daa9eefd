use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plum_minimax::config::GameConfig;
use plum_minimax::engines::engine_minimax::MinimaxEngine;
use plum_minimax::engines::engine_random::RandomEngine;
use plum_minimax::engines::engine_trait::Engine;
use plum_minimax::errors::{ChessErrors, ChessResult};
use plum_minimax::game_state::chess_types::*;
use plum_minimax::game_state::game_session::{
    ClickOutcome, EngineTurn, GameMode, GameSession, GameStatus, MoveKind,
};
use plum_minimax::move_generation::perft::{perft_divide, perft_legal};
use plum_minimax::search::minimax::search_best_move;
use plum_minimax::utils::algebraic::{algebraic_to_square, parse_coordinate_move};
use plum_minimax::utils::fen_generator::generate_fen;
use plum_minimax::utils::fen_parser::{parse_fen, FenPosition};

#[derive(Parser)]
#[command(name = "plum_minimax", version, about = "Minimax chess engine")]
struct Cli {
    /// TOML game configuration; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal game. Enter squares such as `e2` then `e4`, or
    /// a whole move such as `e2e4`.
    Play {
        #[arg(long)]
        fen: Option<String>,
    },
    /// Engine against engine from the opening.
    Selfplay {
        #[arg(long, default_value_t = 40)]
        plies: u32,
        /// Let a random mover play white instead of the minimax engine.
        #[arg(long)]
        random_white: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count leaf nodes of the legal move tree.
    Perft {
        #[arg(long, default_value_t = 3)]
        depth: u8,
        #[arg(long)]
        fen: Option<String>,
        /// Print per-move subtotals.
        #[arg(long)]
        divide: bool,
    },
    /// Search a position and print the chosen move.
    Best {
        fen: String,
        #[arg(long)]
        depth: Option<u32>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    info!(?config, "configuration loaded");

    match cli.command {
        Command::Play { fen } => play(&config, fen.as_deref()),
        Command::Selfplay {
            plies,
            random_white,
            seed,
        } => selfplay(&config, plies, random_white, seed),
        Command::Perft { depth, fen, divide } => perft(depth, fen.as_deref(), divide),
        Command::Best { fen, depth } => best(&config, &fen, depth),
    }
}

fn starting_position(fen: Option<&str>) -> ChessResult<FenPosition> {
    match fen {
        Some(fen) => parse_fen(fen),
        None => Ok(FenPosition {
            board: Board::starting_position(),
            side_to_move: Color::White,
        }),
    }
}

fn describe_status(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Check(color) => Some(format!("{color} is in check")),
        GameStatus::Checkmate { winner } => Some(format!("checkmate, {winner} wins")),
        GameStatus::KingMissing => Some("a king is missing, game over".to_owned()),
    }
}

fn play(config: &GameConfig, fen: Option<&str>) -> ChessResult<()> {
    let position = starting_position(fen)?;
    let mut session = GameSession::from_board(position.board, position.side_to_move, config.game_mode());
    let mut engine = MinimaxEngine::new(config.search_depth, config.search);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(message) = describe_status(session.status()) {
            println!("{message}");
        }
        if session.status().is_over() {
            return Ok(());
        }

        if session.is_computer_turn() {
            match session.play_engine_move(&mut engine)? {
                EngineTurn::Moved(applied) => println!("computer plays {}", applied.mv),
                EngineTurn::NoMoveAvailable => {
                    println!("computer has no legal move");
                    return Ok(());
                }
            }
            continue;
        }

        println!("{}", session.board());
        print!("{} to move> ", session.turn());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "fen" => {
                println!("{}", generate_fen(session.board(), session.turn()));
                continue;
            }
            _ => {}
        }

        if input.len() > 2 {
            match parse_coordinate_move(input) {
                Ok(mv) => play_coordinate_move(&mut session, mv),
                Err(err) => println!("{err}"),
            }
            continue;
        }

        match algebraic_to_square(input) {
            Ok(square) => report_click(session.handle_click(square), square),
            Err(err) => println!("{err}"),
        }
    }
}

/// A full `e2e4` entry is the two clicks it stands for.
fn play_coordinate_move(session: &mut GameSession, mv: ChessMove) {
    match session.handle_click(mv.from) {
        ClickOutcome::Selected { .. } => report_click(session.handle_click(mv.to), mv.to),
        outcome => report_click(outcome, mv.from),
    }
}

fn report_click(outcome: ClickOutcome, square: Square) {
    match outcome {
        ClickOutcome::Ignored => println!("nothing to select on {square}"),
        ClickOutcome::Deselected => println!("{square} is not a legal destination, selection cleared"),
        ClickOutcome::Selected { square, destinations } => {
            let targets: Vec<String> = destinations.iter().map(ToString::to_string).collect();
            println!("{square} can move to {}", targets.join(" "));
        }
        ClickOutcome::Moved(applied) => {
            let verb = match applied.kind {
                MoveKind::Quiet => "moves",
                MoveKind::Capture => "captures",
            };
            println!("{} {verb} to {}", applied.mv.from, applied.mv.to);
        }
    }
}

fn selfplay(config: &GameConfig, plies: u32, random_white: bool, seed: Option<u64>) -> ChessResult<()> {
    let mut white: Box<dyn Engine> = if random_white {
        match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        }
    } else {
        Box::new(MinimaxEngine::new(config.search_depth, config.search))
    };
    let mut black = MinimaxEngine::new(config.search_depth, config.search);

    let mut session = GameSession::new(GameMode::PlayerVsPlayer);

    for ply in 0..plies {
        let engine: &mut dyn Engine = match session.turn() {
            Color::White => white.as_mut(),
            Color::Black => &mut black,
        };
        let name = engine.name().to_owned();

        match session.play_engine_move(engine)? {
            EngineTurn::Moved(applied) => {
                println!("{:>3}. {} ({name}) {}", ply + 1, session.turn().opposite(), applied.mv);
                if let Some(message) = describe_status(applied.status) {
                    println!("     {message}");
                }
            }
            EngineTurn::NoMoveAvailable => {
                println!("{} has no legal move", session.turn());
                break;
            }
        }

        if session.status().is_over() {
            break;
        }
    }

    println!("{}", session.board());
    println!("{}", generate_fen(session.board(), session.turn()));
    Ok(())
}

fn perft(depth: u8, fen: Option<&str>, divide: bool) -> ChessResult<()> {
    let position = starting_position(fen)?;

    if divide {
        for (mv, nodes) in perft_divide(&position.board, position.side_to_move, depth) {
            println!("{mv}: {nodes}");
        }
    }

    let counts = perft_legal(&position.board, position.side_to_move, depth);
    println!(
        "depth {depth}: nodes {} captures {} promotions {} checks {} checkmates {}",
        counts.nodes, counts.captures, counts.promotions, counts.checks, counts.checkmates
    );
    Ok(())
}

fn best(config: &GameConfig, fen: &str, depth: Option<u32>) -> ChessResult<()> {
    let position = parse_fen(fen)?;
    let depth = depth.unwrap_or(config.search_depth);
    let outcome = search_best_move(&position.board, position.side_to_move, depth, config.search);

    match (outcome.best_move, outcome.best_score) {
        (Some(mv), Some(score)) => {
            println!("bestmove {mv} score {score} nodes {}", outcome.nodes);
            Ok(())
        }
        _ => Err(ChessErrors::NoLegalMoves),
    }
}
