//! Move search: negamax with alpha-beta over material and piece-square
//! scoring, plus the uniformly-random fallback the session controller uses
//! when a search comes back empty.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::state::GameState;
use crate::types::{Color, Move, PieceKind};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

const MATE_SCORE: i32 = 100_000;
const INFINITY: i32 = 1_000_000;

/// Piece-square tables in centipawns, from White's perspective with index 0
/// on a1. Black uses the vertically mirrored index.
const PAWN_PST: [i16; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    5, 10, 10, -20, -20, 10, 10, 5, //
    5, -5, -10, 0, 0, -10, -5, 5, //
    0, 0, 0, 20, 20, 0, 0, 0, //
    5, 5, 10, 25, 25, 10, 5, 5, //
    10, 10, 20, 30, 30, 20, 10, 10, //
    50, 50, 50, 50, 50, 50, 50, 50, //
    0, 0, 0, 0, 0, 0, 0, 0,
];

const KNIGHT_PST: [i16; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, //
    -40, -20, 0, 5, 5, 0, -20, -40, //
    -30, 5, 10, 15, 15, 10, 5, -30, //
    -30, 0, 15, 20, 20, 15, 0, -30, //
    -30, 5, 15, 20, 20, 15, 5, -30, //
    -30, 0, 10, 15, 15, 10, 0, -30, //
    -40, -20, 0, 0, 0, 0, -20, -40, //
    -50, -40, -30, -30, -30, -30, -40, -50,
];

const BISHOP_PST: [i16; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, //
    -10, 5, 0, 0, 0, 0, 5, -10, //
    -10, 10, 10, 10, 10, 10, 10, -10, //
    -10, 0, 10, 10, 10, 10, 0, -10, //
    -10, 5, 5, 10, 10, 5, 5, -10, //
    -10, 0, 5, 10, 10, 5, 0, -10, //
    -10, 0, 0, 0, 0, 0, 0, -10, //
    -20, -10, -10, -10, -10, -10, -10, -20,
];

const ROOK_PST: [i16; 64] = [
    0, 0, 0, 5, 5, 0, 0, 0, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    5, 10, 10, 10, 10, 10, 10, 5, //
    0, 0, 0, 0, 0, 0, 0, 0,
];

const QUEEN_PST: [i16; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, //
    -10, 0, 0, 0, 0, 0, 0, -10, //
    -10, 5, 5, 5, 5, 5, 0, -10, //
    0, 0, 5, 5, 5, 5, 0, -5, //
    -5, 0, 5, 5, 5, 5, 0, -5, //
    -10, 0, 5, 5, 5, 5, 0, -10, //
    -10, 0, 0, 0, 0, 0, 0, -10, //
    -20, -10, -10, -5, -5, -10, -10, -20,
];

const KING_PST: [i16; 64] = [
    20, 30, 10, 0, 0, 10, 30, 20, //
    20, 20, 0, 0, 0, 0, 20, 20, //
    -10, -20, -20, -20, -20, -20, -20, -10, //
    -20, -30, -30, -40, -40, -30, -30, -20, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30,
];

fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

fn pst(kind: PieceKind) -> &'static [i16; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => &KING_PST,
    }
}

/// Static evaluation in centipawns; positive favors White.
fn evaluate(state: &GameState) -> i32 {
    let mut score = 0;
    for row in 0..8usize {
        for col in 0..8usize {
            let Some(piece) = state.board[row][col] else {
                continue;
            };
            let table = pst(piece.kind);
            let (sign, index) = match piece.color {
                Color::White => (1, (7 - row) * 8 + col),
                Color::Black => (-1, row * 8 + col),
            };
            score += sign * (piece_value(piece.kind) + table[index] as i32);
        }
    }
    score
}

fn side_sign(state: &GameState) -> i32 {
    if state.white_to_move {
        1
    } else {
        -1
    }
}

/// Picks the best reply for the side to move on `state`, searching `depth`
/// plies. Returns `None` when handed no legal moves. The caller passes a
/// snapshot; the function clones its own scratch state and never touches the
/// original.
pub fn find_best_move(state: &GameState, legal: &[Move], depth: u8) -> Option<Move> {
    if legal.is_empty() {
        return None;
    }
    let mut scratch = state.clone();
    let mut ordered = legal.to_vec();
    // Captures first makes the alpha-beta window tighten early.
    ordered.sort_by_key(|mv| {
        std::cmp::Reverse(mv.captured.map(|p| piece_value(p.kind)).unwrap_or(0))
    });

    let mut best = None;
    let mut alpha = -INFINITY;
    for mv in ordered {
        scratch.apply_move(&mv);
        let replies = scratch.valid_moves();
        let score = -negamax(&mut scratch, &replies, depth.saturating_sub(1), -INFINITY, -alpha);
        scratch.undo_move();
        if score > alpha {
            alpha = score;
            best = Some(mv);
        }
    }
    best.or_else(|| legal.first().cloned())
}

fn negamax(state: &mut GameState, moves: &[Move], depth: u8, mut alpha: i32, beta: i32) -> i32 {
    if moves.is_empty() {
        return if state.in_check(state.side_to_move()) {
            // Prefer the faster mate: deeper remaining depth means it was
            // found earlier in the line.
            -(MATE_SCORE + depth as i32)
        } else {
            0
        };
    }
    if depth == 0 {
        return side_sign(state) * evaluate(state);
    }

    for mv in moves {
        state.apply_move(mv);
        let replies = state.valid_moves();
        let score = -negamax(state, &replies, depth - 1, -beta, -alpha);
        state.undo_move();
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }
    alpha
}

/// Uniformly random choice from the legal list. `None` only when the list is
/// empty.
pub fn find_random_move<R: Rng + ?Sized>(legal: &[Move], rng: &mut R) -> Option<Move> {
    legal.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn empty_move_list_yields_none() {
        let state = GameState::new();
        assert_eq!(find_best_move(&state, &[], DEFAULT_DEPTH), None);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(find_random_move(&[], &mut rng), None);
    }

    #[test]
    fn random_move_comes_from_the_list() {
        let mut state = GameState::new();
        let legal = state.valid_moves();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let mv = find_random_move(&legal, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn search_takes_the_hanging_queen() {
        let mut state = GameState::new();
        state.board = [[None; 8]; 8];
        state.board[7][4] = Some(Piece::new(Color::White, PieceKind::King));
        state.board[0][4] = Some(Piece::new(Color::Black, PieceKind::King));
        state.board[7][0] = Some(Piece::new(Color::White, PieceKind::Rook));
        state.board[3][0] = Some(Piece::new(Color::Black, PieceKind::Queen));
        state.white_king = sq(7, 4);
        state.black_king = sq(0, 4);

        let legal = state.valid_moves();
        let best = find_best_move(&state, &legal, 2).unwrap();
        assert_eq!(best.to, sq(3, 0), "expected Rxa5, got {best}");
    }

    #[test]
    fn search_finds_mate_in_one() {
        let mut state = GameState::new();
        state.board = [[None; 8]; 8];
        state.board[0][7] = Some(Piece::new(Color::Black, PieceKind::King));
        state.board[7][4] = Some(Piece::new(Color::White, PieceKind::King));
        state.board[1][0] = Some(Piece::new(Color::White, PieceKind::Rook));
        state.board[7][1] = Some(Piece::new(Color::White, PieceKind::Rook));
        state.black_king = sq(0, 7);
        state.white_king = sq(7, 4);

        let legal = state.valid_moves();
        let best = find_best_move(&state, &legal, 2).unwrap();
        state.apply_move(&best);
        assert!(state.valid_moves().is_empty());
        assert!(state.checkmate, "search should deliver mate, got {best}");
    }

    #[test]
    fn search_leaves_the_snapshot_untouched() {
        let mut state = GameState::new();
        let legal = state.valid_moves();
        let before = state.clone();
        find_best_move(&state, &legal, 2);
        assert_eq!(state.board, before.board);
        assert_eq!(state.move_log.len(), before.move_log.len());
    }
}
