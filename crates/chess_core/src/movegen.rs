//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece, then filtered for king safety
//! by applying each candidate, testing for check, and undoing it. Castling is
//! generated separately with the usual occupancy and through-check tests.

use crate::state::GameState;
use crate::types::{Color, Move, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl GameState {
    /// Every legal move for the side to move. Sets the `checkmate` /
    /// `stalemate` flags when the list comes back empty.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move();
        let mut candidates = self.pseudo_moves(color);
        self.castle_moves(color, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.apply_move(&mv);
            let safe = !self.in_check(color);
            self.undo_move();
            if safe {
                legal.push(mv);
            }
        }

        self.checkmate = false;
        self.stalemate = false;
        if legal.is_empty() {
            if self.in_check(color) {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        }
        legal
    }

    /// True when `color`'s king is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked(self.king_square(color), color.opposite())
    }

    fn pseudo_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for row in 0..8u8 {
            for col in 0..8u8 {
                let from = Square::new(row, col);
                let Some(piece) = self.piece_at(from) else {
                    continue;
                };
                if piece.color != color {
                    continue;
                }
                match piece.kind {
                    PieceKind::Pawn => self.pawn_moves(from, piece, &mut moves),
                    PieceKind::Knight => self.step_moves(from, piece, &KNIGHT_OFFSETS, &mut moves),
                    PieceKind::King => self.step_moves(from, piece, &KING_OFFSETS, &mut moves),
                    PieceKind::Rook => self.sliding_moves(from, piece, &ROOK_DIRS, &mut moves),
                    PieceKind::Bishop => self.sliding_moves(from, piece, &BISHOP_DIRS, &mut moves),
                    PieceKind::Queen => {
                        self.sliding_moves(from, piece, &ROOK_DIRS, &mut moves);
                        self.sliding_moves(from, piece, &BISHOP_DIRS, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        let (dir, start_row): (i8, u8) = match piece.color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        if let Some(one) = from.offset(dir, 0) {
            if self.piece_at(one).is_none() {
                moves.push(pawn_move(from, one, piece, None));
                if from.row == start_row {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(pawn_move(from, two, piece, None));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some(other) if other.color != piece.color => {
                    moves.push(pawn_move(from, target, piece, Some(other)));
                }
                None if Some(target) == self.en_passant => {
                    let mut mv = Move::new(
                        from,
                        target,
                        piece,
                        Some(Piece::new(piece.color.opposite(), PieceKind::Pawn)),
                    );
                    mv.en_passant = true;
                    moves.push(mv);
                }
                _ => {}
            }
        }
    }

    fn step_moves(&self, from: Square, piece: Piece, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some(other) if other.color == piece.color => {}
                other => moves.push(Move::new(from, to, piece, other)),
            }
        }
    }

    fn sliding_moves(&self, from: Square, piece: Piece, dirs: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dr, dc) in dirs {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::new(from, to, piece, None));
                        current = to;
                    }
                    Some(other) => {
                        if other.color != piece.color {
                            moves.push(Move::new(from, to, piece, Some(other)));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn castle_moves(&self, color: Color, moves: &mut Vec<Move>) {
        if self.in_check(color) {
            return;
        }
        let row = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        let enemy = color.opposite();
        let (king_side, queen_side) = match color {
            Color::White => (self.rights.white_king_side, self.rights.white_queen_side),
            Color::Black => (self.rights.black_king_side, self.rights.black_queen_side),
        };
        let king = Piece::new(color, PieceKind::King);
        let rook = Piece::new(color, PieceKind::Rook);

        // Rights alone are not enough for positions set up by hand: the king
        // and the castling rook must actually be on their home squares.
        if self.piece_at(Square::new(row, 4)) != Some(king) {
            return;
        }

        if king_side
            && self.piece_at(Square::new(row, 7)) == Some(rook)
            && self.piece_at(Square::new(row, 5)).is_none()
            && self.piece_at(Square::new(row, 6)).is_none()
            && !self.square_attacked(Square::new(row, 5), enemy)
            && !self.square_attacked(Square::new(row, 6), enemy)
        {
            let mut mv = Move::new(Square::new(row, 4), Square::new(row, 6), king, None);
            mv.castle = true;
            moves.push(mv);
        }
        if queen_side
            && self.piece_at(Square::new(row, 0)) == Some(rook)
            && self.piece_at(Square::new(row, 1)).is_none()
            && self.piece_at(Square::new(row, 2)).is_none()
            && self.piece_at(Square::new(row, 3)).is_none()
            && !self.square_attacked(Square::new(row, 2), enemy)
            && !self.square_attacked(Square::new(row, 3), enemy)
        {
            let mut mv = Move::new(Square::new(row, 4), Square::new(row, 2), king, None);
            mv.castle = true;
            moves.push(mv);
        }
    }

    /// True when any piece of `by` attacks `sq`. Works by scanning outward
    /// from the square rather than generating the attacker's moves.
    pub fn square_attacked(&self, sq: Square, by: Color) -> bool {
        // Pawns attack one step diagonally toward their movement direction.
        let pawn_row: i8 = match by {
            Color::White => 1,
            Color::Black => -1,
        };
        for dc in [-1, 1] {
            if let Some(from) = sq.offset(pawn_row, dc) {
                if self.piece_at(from) == Some(Piece::new(by, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(dr, dc) {
                if self.piece_at(from) == Some(Piece::new(by, PieceKind::Knight)) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &KING_OFFSETS {
            if let Some(from) = sq.offset(dr, dc) {
                if self.piece_at(from) == Some(Piece::new(by, PieceKind::King)) {
                    return true;
                }
            }
        }

        for (dirs, line_kind) in [(&ROOK_DIRS, PieceKind::Rook), (&BISHOP_DIRS, PieceKind::Bishop)] {
            for &(dr, dc) in dirs {
                let mut current = sq;
                while let Some(from) = current.offset(dr, dc) {
                    match self.piece_at(from) {
                        None => current = from,
                        Some(piece) => {
                            if piece.color == by
                                && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
                            {
                                return true;
                            }
                            break;
                        }
                    }
                }
            }
        }

        false
    }
}

fn pawn_move(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
    let mut mv = Move::new(from, to, piece, captured);
    if to.row == 0 || to.row == 7 {
        mv.promotion = Some(PieceKind::Queen);
    }
    mv
}

#[cfg(test)]
mod tests {
    use crate::state::GameState;
    use crate::types::{Color, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn twenty_moves_from_the_start() {
        let mut state = GameState::new();
        assert_eq!(state.valid_moves().len(), 20);
        assert!(!state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn knights_have_two_moves_from_the_start() {
        let mut state = GameState::new();
        let knight_moves = state
            .valid_moves()
            .into_iter()
            .filter(|m| m.from == sq(7, 1))
            .count();
        assert_eq!(knight_moves, 2);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut state = GameState::new();
        // 1. f3 e5 2. g4 Qh4#
        for (from, to) in [
            (sq(6, 5), sq(5, 5)),
            (sq(1, 4), sq(3, 4)),
            (sq(6, 6), sq(4, 6)),
            (sq(0, 3), sq(4, 7)),
        ] {
            let mv = state
                .valid_moves()
                .into_iter()
                .find(|m| m.from == from && m.to == to)
                .expect("scripted move should be legal");
            state.apply_move(&mv);
        }
        assert!(state.valid_moves().is_empty());
        assert!(state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn bare_kings_with_cornered_king_is_stalemate() {
        let mut state = GameState::new();
        state.board = [[None; 8]; 8];
        // Black king on a8, boxed in by the white queen on c7; White king far away.
        state.board[0][0] = Some(Piece::new(Color::Black, PieceKind::King));
        state.board[1][2] = Some(Piece::new(Color::White, PieceKind::Queen));
        state.board[7][7] = Some(Piece::new(Color::White, PieceKind::King));
        state.black_king = sq(0, 0);
        state.white_king = sq(7, 7);
        state.white_to_move = false;

        assert!(state.valid_moves().is_empty());
        assert!(state.stalemate);
        assert!(!state.checkmate);
    }

    #[test]
    fn pinned_piece_cannot_move() {
        let mut state = GameState::new();
        state.board = [[None; 8]; 8];
        state.board[7][4] = Some(Piece::new(Color::White, PieceKind::King));
        state.board[5][4] = Some(Piece::new(Color::White, PieceKind::Rook));
        state.board[0][4] = Some(Piece::new(Color::Black, PieceKind::Queen));
        state.board[0][0] = Some(Piece::new(Color::Black, PieceKind::King));
        state.white_king = sq(7, 4);
        state.black_king = sq(0, 0);

        let moves = state.valid_moves();
        // The rook may slide along the e-file but never off it.
        assert!(moves
            .iter()
            .filter(|m| m.from == sq(5, 4))
            .all(|m| m.to.col == 4));
    }

    #[test]
    fn en_passant_target_expires_after_one_move() {
        let mut state = GameState::new();
        let double = state
            .valid_moves()
            .into_iter()
            .find(|m| m.from == sq(6, 4) && m.to == sq(4, 4))
            .unwrap();
        state.apply_move(&double);
        assert!(state.en_passant.is_some());

        let reply = state
            .valid_moves()
            .into_iter()
            .find(|m| m.from == sq(1, 0) && m.to == sq(2, 0))
            .unwrap();
        state.apply_move(&reply);
        assert!(state.en_passant.is_none());
    }

    #[test]
    fn castling_blocked_through_attacked_square() {
        let mut state = GameState::new();
        state.board[7][5] = None;
        state.board[7][6] = None;
        // Open the f-file: a black rook eyeing f1 stops the king from
        // passing through it.
        state.board[1][5] = None;
        state.board[6][5] = None;
        state.board[0][5] = Some(Piece::new(Color::Black, PieceKind::Rook));

        assert!(!state.valid_moves().iter().any(|m| m.castle));
    }
}
