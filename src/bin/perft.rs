//! Perft runner to validate move generation against known node counts.

use std::env;
use std::process::exit;
use std::time::Instant;

use chess_core::{Board, Color};

fn main() {
    let args: Vec<String> = env::args().collect();

    let max_depth: u32 = match args.get(1) {
        Some(arg) => match arg.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("usage: perft [depth] [layout] [side]");
                exit(1);
            }
        },
        None => 4,
    };

    let mut board = match args.get(2) {
        Some(layout) => match Board::from_layout(layout) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("bad layout: {err}");
                exit(1);
            }
        },
        None => Board::new(),
    };

    let side = match args.get(3).map(String::as_str) {
        Some("black") => Color::Black,
        Some("white") | None => Color::White,
        Some(other) => {
            eprintln!("bad side '{other}', expected white or black");
            exit(1);
        }
    };

    println!("perft from {}", board.to_layout());
    for depth in 1..=max_depth {
        let start = Instant::now();
        let nodes = board.perft(depth, side);
        let elapsed = start.elapsed().as_millis();
        println!("perft({depth}) = {nodes} ({elapsed} ms)");
    }

    if args.get(2).is_none() {
        println!("\nExpected for the starting position:");
        println!("perft(1) = 20");
        println!("perft(2) = 400");
        println!("perft(3) = 8902");
        println!("perft(4) = 197281");
        println!("perft(5) = 4865609");
    }
}
