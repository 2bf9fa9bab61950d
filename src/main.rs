//! Kazan-Rust: a Mangala engine for the console.
//!
//! The binary is a thin driver over the library's game and search
//! operations.
//!
//! ## Usage
//!
//! - `kazan-rust` - Show a demo move
//! - `kazan-rust play` - Play against the engine on the console
//! - `kazan-rust bench` - Run an engine-vs-greedy match and tally results

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use kazan_rust::constants::{DEFAULT_MAX_DEPTH, KAZAN_A, KAZAN_B};
use kazan_rust::game::{Game, Side, apply_move, is_terminal, legal_moves, sweep};
use kazan_rust::ordering::greedy_move;
use kazan_rust::search::Engine;

/// Kazan-Rust: a Mangala engine
#[derive(Parser)]
#[command(name = "kazan-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine (you are side A)
    Play {
        /// Search depth in passed turns
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: i32,
    },
    /// Play the engine against the greedy baseline and tally the results
    Bench {
        /// Number of games
        #[arg(long, default_value_t = 20)]
        games: u32,
        /// Search depth in passed turns
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: i32,
    },
    /// Show one searched move on a fresh board
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { depth }) => play(depth),
        Some(Commands::Bench { games, depth }) => bench(games, depth),
        Some(Commands::Demo) | None => demo(),
    }
}

fn demo() -> anyhow::Result<()> {
    println!("Kazan-Rust: Mangala engine\n");
    let game = Game::new();
    println!("{game}\n");

    let mut engine = Engine::new(DEFAULT_MAX_DEPTH);
    let pit = engine.best_move(&game)?;
    println!("engine would open with pit {pit}");
    Ok(())
}

fn play(depth: i32) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut game = Game::new();
    let mut engine = Engine::new(depth);

    println!("You are side A (bottom row, pits 0-5). Enter a pit index to move.");

    while !is_terminal(&game) {
        println!("\n{game}");
        let moves = legal_moves(&game);
        if moves.is_empty() {
            println!("side {} has no legal move; the game ends here", game.turn);
            break;
        }

        if game.turn == Side::A {
            print!("your move {moves:?}: ");
            io::stdout().flush()?;
            let Some(line) = stdin.lock().lines().next() else {
                break;
            };
            let line = line.context("reading your move")?;
            let pit: usize = match line.trim().parse() {
                Ok(pit) => pit,
                Err(_) => {
                    println!("enter one of the pit indices {moves:?}");
                    continue;
                }
            };
            match apply_move(&mut game, pit) {
                Ok(outcome) if outcome.retained() => println!("you move again"),
                Ok(_) => {}
                Err(err) => println!("{err}"),
            }
        } else {
            let pit = engine.best_move(&game)?;
            let outcome = apply_move(&mut game, pit)?;
            if outcome.retained() {
                println!("engine plays pit {pit} and moves again");
            } else {
                println!("engine plays pit {pit}");
            }
        }
    }

    sweep(&mut game);
    println!("\n{game}");
    let (you, engine_score) = (game.board[KAZAN_A], game.board[KAZAN_B]);
    println!("\nfinal score - you: {you}, engine: {engine_score}");
    match you.cmp(&engine_score) {
        std::cmp::Ordering::Greater => println!("you win!"),
        std::cmp::Ordering::Less => println!("the engine wins"),
        std::cmp::Ordering::Equal => println!("draw"),
    }
    Ok(())
}

fn bench(games: u32, depth: i32) -> anyhow::Result<()> {
    let mut engine_wins = 0u32;
    let mut greedy_wins = 0u32;
    let mut draws = 0u32;

    for round in 0..games {
        let mut game = Game::new();
        let mut engine = Engine::with_seed(depth, u64::from(round));

        let mut plies = 0;
        while !is_terminal(&game) && plies < kazan_rust::constants::MAX_PLAYOUT_MOVES {
            plies += 1;
            let pit = match game.turn {
                Side::A => match engine.best_move(&game) {
                    Ok(pit) => pit,
                    Err(_) => break,
                },
                Side::B => match greedy_move(&game) {
                    Some(pit) => pit,
                    None => break,
                },
            };
            apply_move(&mut game, pit)?;
        }
        sweep(&mut game);

        match game.board[KAZAN_A].cmp(&game.board[KAZAN_B]) {
            std::cmp::Ordering::Greater => engine_wins += 1,
            std::cmp::Ordering::Less => greedy_wins += 1,
            std::cmp::Ordering::Equal => draws += 1,
        }
    }

    println!("Results over {games} games (depth {depth}):");
    println!("engine wins: {engine_wins}");
    println!("greedy wins: {greedy_wins}");
    println!("draws: {draws}");
    Ok(())
}
