//! Frame-based move animation.
//!
//! A committed move is animated as `(|Δrow| + |Δcol|) * FRAMES_PER_SQUARE`
//! interpolation steps (inclusive of both endpoints, so `frame_count + 1`
//! drawn positions). Manhattan distance ties duration to travel: a diagonal
//! of length n takes as long as an orthogonal slide of length n.
//!
//! The animation is synchronous with respect to game-state progression: the
//! session stays in `TurnState::Animating` until the last frame has been
//! drawn. The app keeps rendering every frame; only the *next* move's input
//! is deferred.

use bevy::prelude::*;
use chess_core::{Color, Move, Square};

/// Interpolation steps per square of Manhattan distance.
pub const FRAMES_PER_SQUARE: u32 = 8;

/// Animation frame rate, deliberately faster than the logical input cadence.
pub const ANIMATION_FPS: f32 = 60.0;

/// One drawn step: the fractional board position of the moving piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub row: f32,
    pub col: f32,
}

/// The in-flight animation for the one committed move. Present as a resource
/// exactly while the session is in `TurnState::Animating`.
#[derive(Resource, Debug)]
pub struct MoveAnimation {
    pub mv: Move,
    frame: u32,
    frame_count: u32,
    pub timer: Timer,
}

impl MoveAnimation {
    pub fn new(mv: Move) -> Self {
        let dr = (mv.to.row as i32 - mv.from.row as i32).unsigned_abs();
        let dc = (mv.to.col as i32 - mv.from.col as i32).unsigned_abs();
        Self {
            mv,
            frame: 0,
            frame_count: (dr + dc) * FRAMES_PER_SQUARE,
            timer: Timer::from_seconds(1.0 / ANIMATION_FPS, TimerMode::Repeating),
        }
    }

    /// Number of positions drawn over the animation's lifetime.
    pub fn total_frames(&self) -> u32 {
        self.frame_count + 1
    }

    pub fn finished(&self) -> bool {
        self.frame >= self.frame_count
    }

    /// Steps to the next frame; saturates at the final one.
    pub fn advance(&mut self) {
        if self.frame < self.frame_count {
            self.frame += 1;
        }
    }

    pub fn current(&self) -> AnimationFrame {
        self.frame_at(self.frame)
    }

    fn frame_at(&self, frame: u32) -> AnimationFrame {
        if self.frame_count == 0 {
            return AnimationFrame {
                row: self.mv.to.row as f32,
                col: self.mv.to.col as f32,
            };
        }
        let t = frame as f32 / self.frame_count as f32;
        AnimationFrame {
            row: self.mv.from.row as f32 + (self.mv.to.row as f32 - self.mv.from.row as f32) * t,
            col: self.mv.from.col as f32 + (self.mv.to.col as f32 - self.mv.from.col as f32) * t,
        }
    }

    /// The full frame sequence, start and end inclusive.
    pub fn frames(&self) -> impl Iterator<Item = AnimationFrame> + '_ {
        (0..=self.frame_count).map(|f| self.frame_at(f))
    }

    /// Where the captured piece keeps being drawn until the mover arrives.
    /// Under en passant the victim is not on the destination square: it sits
    /// one row toward its own side of the board.
    pub fn captured_square(&self) -> Option<Square> {
        let captured = self.mv.captured?;
        if self.mv.en_passant {
            let row = match captured.color {
                Color::Black => self.mv.to.row + 1,
                Color::White => self.mv.to.row - 1,
            };
            Some(Square::new(row, self.mv.to.col))
        } else {
            Some(self.mv.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(
            Square::new(from.0, from.1),
            Square::new(to.0, to.1),
            Piece::new(Color::White, PieceKind::Queen),
            None,
        )
    }

    #[test]
    fn frame_count_uses_manhattan_distance() {
        // (0,0) -> (3,4): (3 + 4) * 8 + 1 = 57 drawn positions.
        let anim = MoveAnimation::new(mv((0, 0), (3, 4)));
        assert_eq!(anim.total_frames(), 57);
        assert_eq!(anim.frames().count(), 57);

        // (0,0) -> (2,0): 2 * 8 + 1 = 17.
        let anim = MoveAnimation::new(mv((0, 0), (2, 0)));
        assert_eq!(anim.total_frames(), 17);
        assert_eq!(anim.frames().count(), 17);
    }

    #[test]
    fn frames_interpolate_start_to_end_inclusive() {
        let anim = MoveAnimation::new(mv((0, 0), (3, 4)));
        let frames: Vec<_> = anim.frames().collect();
        assert_eq!(frames[0], AnimationFrame { row: 0.0, col: 0.0 });
        let last = frames.last().unwrap();
        assert_eq!((last.row, last.col), (3.0, 4.0));
        // Monotone progress along both axes.
        for pair in frames.windows(2) {
            assert!(pair[1].row >= pair[0].row);
            assert!(pair[1].col >= pair[0].col);
        }
    }

    #[test]
    fn advance_saturates_at_the_final_frame() {
        let mut anim = MoveAnimation::new(mv((0, 0), (1, 0)));
        assert!(!anim.finished());
        for _ in 0..100 {
            anim.advance();
        }
        assert!(anim.finished());
        assert_eq!(anim.current(), AnimationFrame { row: 1.0, col: 0.0 });
    }

    #[test]
    fn captured_piece_draws_on_its_true_square() {
        let mut capture = mv((4, 4), (3, 3));
        capture.captured = Some(Piece::new(Color::Black, PieceKind::Knight));
        let anim = MoveAnimation::new(capture);
        assert_eq!(anim.captured_square(), Some(Square::new(3, 3)));
    }

    #[test]
    fn en_passant_corrects_the_captured_square() {
        // White pawn takes en passant onto (2,3); the black pawn sits on (3,3).
        let mut ep = Move::new(
            Square::new(3, 4),
            Square::new(2, 3),
            Piece::new(Color::White, PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
        );
        ep.en_passant = true;
        let anim = MoveAnimation::new(ep);
        assert_eq!(anim.captured_square(), Some(Square::new(3, 3)));
    }
}
