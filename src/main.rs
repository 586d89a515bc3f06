//! Terminal front-end for playing Omok against the agent
//!
//! Reads human moves as `col row` pairs from stdin, relays them to the
//! game loop and prints the board and turn status after every move.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use omok::{Game, Outcome, Pos, Stone, BOARD_SIZE, DEFAULT_OPENING_MOVES};

#[derive(Parser, Debug)]
#[command(name = "omok", about = "Five-in-a-row against a heuristic agent")]
struct Args {
    /// Number of opening agent moves biased toward the board center
    /// (0 disables the opening bias)
    #[arg(long, default_value_t = DEFAULT_OPENING_MOVES)]
    opening_moves: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut game = Game::with_opening_moves(args.opening_moves);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are H, the agent is A. Enter moves as: col row (0-14)");
    print_board(game.board());

    while !game.is_over() {
        print!("your move> ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            println!("input closed, game abandoned");
            return Ok(());
        };
        let line = line.context("reading move")?;

        let Some((col, row)) = parse_coords(&line) else {
            println!("enter two numbers, e.g. `7 7`");
            continue;
        };

        match game.human_move(row, col) {
            Ok(_) => {}
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
        print_board(game.board());
        if game.is_over() {
            break;
        }

        println!("agent's turn...");
        if let Some(reply) = game.agent_move()? {
            println!("agent plays col {} row {}", reply.pos.col, reply.pos.row);
            print_board(game.board());
        }
    }

    match game.outcome() {
        Some(Outcome::HumanWin) => println!("congratulations, you win!"),
        Some(Outcome::AgentWin) => println!("the agent wins."),
        Some(Outcome::Draw) => println!("the board is full: draw."),
        None => {}
    }
    Ok(())
}

/// Parse `col row` from a line of input
fn parse_coords(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let col = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((col, row))
}

fn print_board(board: &omok::Board) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{c:>2}");
    }
    println!();
    for r in 0..BOARD_SIZE as u8 {
        print!("{r:>2} ");
        for c in 0..BOARD_SIZE as u8 {
            let ch = match board.get(Pos::new(r, c)) {
                Stone::Empty => '.',
                Stone::Human => 'H',
                Stone::Agent => 'A',
            };
            print!(" {ch}");
        }
        println!();
    }
}
