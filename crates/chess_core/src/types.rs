//! Core value types: squares, pieces, and moves.
//!
//! Board orientation follows the screen layout of the GUI: row 0 is Black's
//! back rank (rank 8), row 7 is White's back rank (rank 1). Columns run
//! a-file (0) to h-file (7), left to right.

use std::fmt;

/// Side to move / piece ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece on the board. Board cells are `Option<Piece>`, `None` being empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// One cell of the 8x8 grid, addressed by (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Constructs a square; panics in debug builds when out of range.
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square out of range: ({row}, {col})");
        Self { row, col }
    }

    /// The square shifted by (dr, dc), or `None` when it leaves the grid.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Algebraic name, e.g. `e4`. Row 0 is rank 8.
    pub fn notation(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// A move with its capture and special-rule metadata.
///
/// Equality deliberately ignores the derived fields: two moves are equal when
/// they share origin, destination, and promotion choice. That is the identity
/// the selector uses to match a two-click candidate against the legal list.
#[derive(Clone, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castle: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square, moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            en_passant: false,
            castle: false,
            promotion: None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Origin-destination notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from.notation(), self.to.notation())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_notation_maps_rows_to_ranks() {
        assert_eq!(Square::new(7, 0).notation(), "a1");
        assert_eq!(Square::new(0, 7).notation(), "h8");
        assert_eq!(Square::new(4, 4).notation(), "e4");
    }

    #[test]
    fn square_offset_stays_on_grid() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, -1), None);
        assert_eq!(sq.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
    }

    #[test]
    fn move_equality_ignores_capture_metadata() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let a = Move::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
        let mut b = a.clone();
        b.captured = Some(Piece::new(Color::Black, PieceKind::Knight));
        assert_eq!(a, b);
    }

    #[test]
    fn move_equality_distinguishes_promotion() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mut a = Move::new(Square::new(1, 0), Square::new(0, 0), pawn, None);
        let mut b = a.clone();
        a.promotion = Some(PieceKind::Queen);
        b.promotion = Some(PieceKind::Knight);
        assert_ne!(a, b);
    }

    #[test]
    fn move_notation_concatenates_squares() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
        assert_eq!(mv.notation(), "e2e4");
    }
}
