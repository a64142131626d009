//! Game state with make/unmake move semantics.
//!
//! `GameState` is the single source of truth the session controller mutates.
//! Undo restores every piece of derived state (castling rights, en-passant
//! target, king squares, side to move) from per-move snapshot stacks, so a
//! search worker can run make/test/unmake loops on a cloned state without any
//! drift.

use crate::error::{ChessError, ChessResult};
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Which castles are still available to each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }
}

/// Full game state: board, side to move, move log, and the snapshot stacks
/// that make [`GameState::undo_move`] exact.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: [[Option<Piece>; 8]; 8],
    pub white_to_move: bool,
    pub move_log: Vec<Move>,
    pub checkmate: bool,
    pub stalemate: bool,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    rights_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[7][col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            board[1][col] = Some(Piece::new(Color::Black, Pawn));
            board[6][col] = Some(Piece::new(Color::White, Pawn));
        }

        Self {
            board,
            white_to_move: true,
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            rights: CastlingRights::default(),
            en_passant: None,
            rights_log: Vec::new(),
            en_passant_log: Vec::new(),
        }
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = piece;
    }

    pub(crate) fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Builds a candidate move from two squares against the current board,
    /// the way the two-click selector does. Returns `None` when the origin
    /// square is empty. Pawns reaching the far rank auto-promote to a queen.
    pub fn build_move(&self, from: Square, to: Square) -> Option<Move> {
        let moved = self.piece_at(from)?;
        let mut mv = Move::new(from, to, moved, self.piece_at(to));
        if moved.kind == PieceKind::Pawn && (to.row == 0 || to.row == 7) {
            mv.promotion = Some(PieceKind::Queen);
        }
        Some(mv)
    }

    /// Applies a move assumed to come from the legal-move list.
    pub fn apply_move(&mut self, mv: &Move) {
        self.rights_log.push(self.rights);
        self.en_passant_log.push(self.en_passant);

        self.set_piece(mv.from, None);
        let placed = match mv.promotion {
            Some(kind) => Piece::new(mv.moved.color, kind),
            None => mv.moved,
        };
        self.set_piece(mv.to, Some(placed));

        if mv.en_passant {
            // The captured pawn sits beside the origin, not on the target.
            self.set_piece(Square::new(mv.from.row, mv.to.col), None);
        }

        if mv.castle {
            let row = mv.from.row;
            if mv.to.col == 6 {
                let rook = self.piece_at(Square::new(row, 7));
                self.set_piece(Square::new(row, 7), None);
                self.set_piece(Square::new(row, 5), rook);
            } else {
                let rook = self.piece_at(Square::new(row, 0));
                self.set_piece(Square::new(row, 0), None);
                self.set_piece(Square::new(row, 3), rook);
            }
        }

        if mv.moved.kind == PieceKind::King {
            match mv.moved.color {
                Color::White => self.white_king = mv.to,
                Color::Black => self.black_king = mv.to,
            }
        }

        // Double pawn push opens an en-passant target on the skipped square.
        self.en_passant = if mv.moved.kind == PieceKind::Pawn
            && (mv.from.row as i8 - mv.to.row as i8).abs() == 2
        {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        self.update_castling_rights(mv);

        self.move_log.push(mv.clone());
        self.white_to_move = !self.white_to_move;
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        match (mv.moved.kind, mv.moved.color) {
            (PieceKind::King, Color::White) => {
                self.rights.white_king_side = false;
                self.rights.white_queen_side = false;
            }
            (PieceKind::King, Color::Black) => {
                self.rights.black_king_side = false;
                self.rights.black_queen_side = false;
            }
            _ => {}
        }
        for sq in [mv.from, mv.to] {
            match (sq.row, sq.col) {
                (7, 0) => self.rights.white_queen_side = false,
                (7, 7) => self.rights.white_king_side = false,
                (0, 0) => self.rights.black_queen_side = false,
                (0, 7) => self.rights.black_king_side = false,
                _ => {}
            }
        }
    }

    /// Reverts the last applied move. A no-op on an empty log.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.set_piece(mv.from, Some(mv.moved));
        if mv.en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(Square::new(mv.from.row, mv.to.col), mv.captured);
        } else {
            self.set_piece(mv.to, mv.captured);
        }

        if mv.castle {
            let row = mv.from.row;
            if mv.to.col == 6 {
                let rook = self.piece_at(Square::new(row, 5));
                self.set_piece(Square::new(row, 5), None);
                self.set_piece(Square::new(row, 7), rook);
            } else {
                let rook = self.piece_at(Square::new(row, 3));
                self.set_piece(Square::new(row, 3), None);
                self.set_piece(Square::new(row, 0), rook);
            }
        }

        if mv.moved.kind == PieceKind::King {
            match mv.moved.color {
                Color::White => self.white_king = mv.from,
                Color::Black => self.black_king = mv.from,
            }
        }

        self.rights = self.rights_log.pop().unwrap_or_default();
        self.en_passant = self.en_passant_log.pop().unwrap_or(None);
        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }

    /// Checked apply: validates that (from, to) names a currently legal move
    /// before committing it.
    pub fn try_apply(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        if from.row > 7 || from.col > 7 {
            return Err(ChessError::OutOfRange {
                row: from.row,
                col: from.col,
            });
        }
        let candidate = self
            .build_move(from, to)
            .ok_or(ChessError::NoPieceAt { square: from })?;
        let legal = self.valid_moves();
        match legal.into_iter().find(|m| *m == candidate) {
            Some(mv) => {
                self.apply_move(&mv);
                Ok(mv)
            }
            None => Err(ChessError::IllegalMove {
                notation: candidate.notation(),
            }),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}
