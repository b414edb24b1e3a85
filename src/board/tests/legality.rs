//! The legality filter: self-check, castling constraints, and the
//! en-passant window.

use crate::board::{Board, Color, Move, Square};

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

#[test]
fn test_start_position_has_twenty_moves_each() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_pinned_knight_cannot_move() {
    // black rook on e8 pins the knight against the king
    let mut board = Board::from_layout("4r2k/8/8/8/8/8/4N3/4K3").unwrap();
    let knight = Square(1, 4);
    assert!(!board.pseudo_moves_from(knight, true).is_empty());
    assert!(board.moves_from(knight).is_empty());
}

#[test]
fn test_no_legal_move_leaves_own_king_in_check() {
    let layout = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
    for color in Color::BOTH {
        let mut board = Board::from_layout(layout).unwrap();
        let moves = board.legal_moves(color);
        assert!(!moves.is_empty());
        for m in moves.iter() {
            let undo = board.make_move(m);
            assert!(!board.is_in_check(color), "{m} leaves {color} in check");
            board.unmake_move(m, undo);
        }
    }
}

#[test]
fn test_both_castles_available_on_open_back_rank() {
    let mut board = Board::from_layout("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    for color in Color::BOTH {
        let castles: Vec<Move> = board
            .legal_moves(color)
            .iter()
            .filter(|m| m.is_castling)
            .copied()
            .collect();
        assert_eq!(castles.len(), 2);
        let back = if color == Color::White { 0 } else { 7 };
        assert!(castles.iter().any(|m| m.to == Square(back, 6)));
        assert!(castles.iter().any(|m| m.to == Square(back, 2)));
    }
}

#[test]
fn test_castling_refused_while_in_check() {
    // white queen on e4 checks the black king down the open e-file
    let mut board = Board::from_layout("r3k2r/8/8/8/4Q3/8/8/R3K2R").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).iter().all(|m| !m.is_castling));
}

#[test]
fn test_castling_refused_through_attacked_square() {
    // black rook on f8 covers the king's transit square f1
    let mut board = Board::from_layout("5rk1/8/8/8/8/8/8/4K2R").unwrap();
    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| !m.is_castling));
    // the plain king step onto f1 is just as illegal
    assert!(moves
        .iter()
        .all(|m| !(m.from == Square(0, 4) && m.to == Square(0, 5))));
}

#[test]
fn test_castling_refused_into_attacked_square() {
    // black rook on g8 covers the king's destination g1 but not f1
    let mut board = Board::from_layout("k5r1/8/8/8/8/8/8/4K2R").unwrap();
    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| !m.is_castling));
    assert!(moves
        .iter()
        .any(|m| m.from == Square(0, 4) && m.to == Square(0, 5)));
}

#[test]
fn test_rook_trip_forfeits_kingside_castle_only() {
    let mut board = Board::from_layout("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    for (from, to) in [("h1", "h2"), ("h2", "h1")] {
        let mv = find_move(&mut board, Color::White, from, to);
        board.make_move(&mv);
    }
    // the rook is back home but the right is gone for good
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));
    let castles: Vec<Move> = board
        .legal_moves(Color::White)
        .iter()
        .filter(|m| m.is_castling)
        .copied()
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, Square(0, 2));
}

#[test]
fn test_king_move_forfeits_both_castles() {
    let mut board = Board::from_layout("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    for (from, to) in [("e1", "e2"), ("e2", "e1")] {
        let mv = find_move(&mut board, Color::White, from, to);
        board.make_move(&mv);
    }
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.legal_moves(Color::White).iter().all(|m| !m.is_castling));
    // black's rights are untouched
    assert!(board.castling_rights().has(Color::Black, true));
}

#[test]
fn test_capturing_a_rook_takes_its_right() {
    // black bishop on f3 takes the h1 rook
    let mut board = Board::from_layout("4k3/8/8/8/8/5b2/8/R3K2R").unwrap();
    let capture = find_move(&mut board, Color::Black, "f3", "h1");
    board.make_move(&capture);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));
}

#[test]
fn test_en_passant_window_lasts_one_ply() {
    let mut board = Board::new();

    let mv = find_move(&mut board, Color::White, "e2", "e4");
    board.make_move(&mv);
    assert_eq!(board.en_passant_target(), Some(Square(2, 4)));

    let mv = find_move(&mut board, Color::Black, "a7", "a6");
    board.make_move(&mv);
    assert_eq!(board.en_passant_target(), None);

    let mv = find_move(&mut board, Color::White, "e4", "e5");
    board.make_move(&mv);
    let mv = find_move(&mut board, Color::Black, "d7", "d5");
    board.make_move(&mv);
    assert_eq!(board.en_passant_target(), Some(Square(5, 3)));

    // the capture is on the table right now
    let pawn = Square(4, 4);
    assert!(board
        .moves_from(pawn)
        .iter()
        .any(|m| m.is_en_passant && m.to == Square(5, 3)));

    // any other move closes the window
    let mv = find_move(&mut board, Color::White, "h2", "h3");
    board.make_move(&mv);
    assert_eq!(board.en_passant_target(), None);
    assert!(board.moves_from(pawn).iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_moves_from_empty_square_is_empty() {
    let mut board = Board::new();
    assert!(board.moves_from(Square(3, 3)).is_empty());
    assert!(board.pseudo_moves_from(Square(4, 7), true).is_empty());
}
