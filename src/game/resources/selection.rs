//! The two-click move builder.
//!
//! Clicks arrive one square at a time; two of them name a candidate move.
//! Legality is adjudicated against the session's legal-move list, and the
//! matching *legal* entry is what gets committed, so the committed move
//! carries authentic capture and special-rule metadata rather than whatever
//! the raw click pair implied.

use bevy::prelude::*;
use chess_core::{GameState, Move, Square};

/// Result of feeding one click into the selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorOutcome {
    /// The click was recorded; another is needed to name a move.
    AwaitingSecondClick,
    /// Two clicks matched a legal move; commit this one.
    MoveCandidate(Move),
    /// The click cleared the pending selection.
    SelectionCleared,
}

/// Pending click state for the human side.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub clicks: Vec<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
        self.clicks.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Feeds one click into the state machine. `square` is `None` for clicks
    /// outside the playable grid, which clear any pending selection.
    ///
    /// A repeated click on the selected square toggles the selection off. A
    /// second click naming an illegal pair keeps only that second click, so
    /// the user can start a fresh selection from it immediately.
    pub fn on_square_clicked(
        &mut self,
        square: Option<Square>,
        state: &GameState,
        legal: &[Move],
    ) -> SelectorOutcome {
        let Some(square) = square else {
            self.clear();
            return SelectorOutcome::SelectionCleared;
        };

        if self.selected == Some(square) {
            self.clear();
            return SelectorOutcome::SelectionCleared;
        }

        self.selected = Some(square);
        self.clicks.push(square);
        if self.clicks.len() < 2 {
            return SelectorOutcome::AwaitingSecondClick;
        }

        let candidate = state.build_move(self.clicks[0], self.clicks[1]);
        let matched = candidate
            .as_ref()
            .and_then(|c| legal.iter().find(|m| *m == c))
            .cloned();

        match matched {
            Some(mv) => {
                self.clear();
                SelectorOutcome::MoveCandidate(mv)
            }
            None => {
                self.clicks = vec![square];
                self.selected = Some(square);
                SelectorOutcome::AwaitingSecondClick
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::GameState;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn setup() -> (Selection, GameState, Vec<Move>) {
        let mut state = GameState::new();
        let legal = state.valid_moves();
        (Selection::default(), state, legal)
    }

    #[test]
    fn repeated_click_toggles_off() {
        let (mut selection, state, legal) = setup();
        assert_eq!(
            selection.on_square_clicked(Some(sq(6, 4)), &state, &legal),
            SelectorOutcome::AwaitingSecondClick
        );
        assert_eq!(
            selection.on_square_clicked(Some(sq(6, 4)), &state, &legal),
            SelectorOutcome::SelectionCleared
        );
        assert!(selection.clicks.is_empty());
        assert!(!selection.is_selected());
    }

    #[test]
    fn legal_pair_yields_the_legal_entry() {
        let (mut selection, state, legal) = setup();
        selection.on_square_clicked(Some(sq(6, 4)), &state, &legal);
        let outcome = selection.on_square_clicked(Some(sq(4, 4)), &state, &legal);
        let SelectorOutcome::MoveCandidate(mv) = outcome else {
            panic!("expected a move candidate, got {outcome:?}");
        };
        assert!(legal.contains(&mv));
        assert_eq!(mv.from, sq(6, 4));
        assert_eq!(mv.to, sq(4, 4));
        assert!(selection.clicks.is_empty(), "selection clears on acceptance");
    }

    #[test]
    fn illegal_pair_keeps_only_the_second_click() {
        let (mut selection, state, legal) = setup();
        selection.on_square_clicked(Some(sq(6, 4)), &state, &legal);
        // e2 to e6 is not a pawn move.
        let outcome = selection.on_square_clicked(Some(sq(2, 4)), &state, &legal);
        assert_eq!(outcome, SelectorOutcome::AwaitingSecondClick);
        assert_eq!(selection.clicks, vec![sq(2, 4)]);
        assert_eq!(selection.selected, Some(sq(2, 4)));
    }

    #[test]
    fn outside_click_clears_everything() {
        let (mut selection, state, legal) = setup();
        selection.on_square_clicked(Some(sq(6, 4)), &state, &legal);
        assert_eq!(
            selection.on_square_clicked(None, &state, &legal),
            SelectorOutcome::SelectionCleared
        );
        assert!(selection.clicks.is_empty());
    }

    #[test]
    fn empty_origin_behaves_like_an_illegal_pair() {
        let (mut selection, state, legal) = setup();
        selection.on_square_clicked(Some(sq(4, 4)), &state, &legal);
        let outcome = selection.on_square_clicked(Some(sq(3, 4)), &state, &legal);
        assert_eq!(outcome, SelectorOutcome::AwaitingSecondClick);
        assert_eq!(selection.clicks, vec![sq(3, 4)]);
    }
}
