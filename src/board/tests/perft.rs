//! Perft node counts against published reference values.

use std::time::Instant;

use crate::board::{Board, Color, Move, Square};

struct TestPosition {
    name: &'static str,
    layout: &'static str,
    side: Color,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        layout: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Color::White,
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    TestPosition {
        name: "Kiwipete",
        layout: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side: Color::White,
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    TestPosition {
        name: "Position 3",
        layout: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side: Color::White,
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 4",
        layout: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        side: Color::White,
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
    TestPosition {
        name: "Position 5",
        layout: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        side: Color::White,
        depths: &[(1, 44), (2, 1486), (3, 62379)],
    },
    TestPosition {
        name: "Position 6 (Win at Chess)",
        layout: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
        side: Color::White,
        depths: &[(1, 46), (2, 2079), (3, 89890)],
    },
    TestPosition {
        name: "Promotion",
        layout: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N",
        side: Color::Black,
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        layout: "r3k2r/8/8/8/8/8/8/R3K2R",
        side: Color::White,
        depths: &[(1, 26), (2, 568), (3, 13744)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let mut board = Board::from_layout(position.layout).unwrap();

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(depth, position.side);
            let duration = start.elapsed();

            println!("  Depth {depth}: {nodes} nodes in {duration:?}");

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

/// The reference en-passant position carries a live capture window, which
/// a bare layout cannot express; reach it by playing 1. e4 d5 2. e5 f5.
#[test]
fn test_perft_en_passant_position() {
    let mut board = Board::new();
    let mut side = Color::White;
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "e5"), ("f7", "f5")] {
        let mv = find_move(&mut board, side, from, to);
        board.make_move(&mv);
        side = side.opponent();
    }

    assert_eq!(board.to_layout(), "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR");
    assert_eq!(board.en_passant_target(), Some(Square(5, 5)));

    for (depth, expected) in [(1, 31), (2, 707), (3, 21637)] {
        assert_eq!(board.perft(depth, Color::White), expected);
    }
}

#[test]
fn test_perft_leaves_board_unchanged() {
    let mut board = Board::new();
    let before = board.clone();
    board.perft(3, Color::White);
    assert_eq!(board, before);
}

fn find_move(board: &mut Board, side: Color, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    board
        .legal_moves(side)
        .iter()
        .find(|m| m.from == from && m.to == to)
        .copied()
        .unwrap_or_else(|| panic!("no legal move {from}{to}"))
}
