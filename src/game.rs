//! Multi-seat game: one board per seat, a turn cursor that skips finished
//! boards, and winner resolution over grand totals.

use rand::Rng;

use crate::actors::TurnActor;
use crate::board::Board;
use crate::turn::{TurnController, TurnError, TurnOutcome};

/// One player's seat: a display name and the board they fill.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    board: Board,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// A game over any number of seats. Turns rotate in seat order; seats whose
/// board is complete are skipped, so uneven column layouts still terminate.
///
/// ```
/// use yamb_rs::actors::GreedyActor;
/// use yamb_rs::board::Board;
/// use yamb_rs::column::ColumnKind;
/// use yamb_rs::dice::seeded_rng;
/// use yamb_rs::game::Game;
///
/// let mut game = Game::new(&["ana", "ivo"], || Board::new(&[ColumnKind::Free]));
/// let mut rng = seeded_rng(5);
/// let mut actor = GreedyActor::new();
/// while !game.is_over() {
///     game.advance(&mut actor, &mut rng).unwrap();
/// }
/// assert!(!game.winners().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Seat>,
    controller: TurnController,
    current: usize,
}

impl Game {
    /// A game where every seat plays the classic four-column board.
    pub fn standard(names: &[&str]) -> Self {
        Self::new(names, Board::standard)
    }

    /// A game with a caller-chosen board layout, built once per seat.
    pub fn new<F: FnMut() -> Board>(names: &[&str], mut board: F) -> Self {
        let seats =
            names.iter().map(|&n| Seat { name: n.to_string(), board: board() }).collect();
        Self { seats, controller: TurnController::default(), current: 0 }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Index of the seat to play next.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Every board complete.
    pub fn is_over(&self) -> bool {
        self.seats.iter().all(|s| s.board.is_complete())
    }

    /// Play one turn for the current seat, then move the cursor to the next
    /// seat whose board still has open slots.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        actor: &mut dyn TurnActor,
        rng: &mut R,
    ) -> Result<TurnOutcome, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        // With uneven layouts the cursor can rest on a finished board.
        if self.seats[self.current].board.is_complete() {
            self.current = self.next_open_from(self.current);
        }
        let seat = &mut self.seats[self.current];
        let outcome = self.controller.play_turn(&mut seat.board, actor, rng)?;
        self.current = self.next_open_from(self.current);
        Ok(outcome)
    }

    /// Seat indices holding the maximal grand total. Empty until the game
    /// is over; ties produce more than one index.
    pub fn winners(&self) -> Vec<usize> {
        if !self.is_over() {
            return Vec::new();
        }
        let totals: Vec<i32> =
            self.seats.iter().filter_map(|s| s.board.grand_total()).collect();
        let Some(&best) = totals.iter().max() else {
            return Vec::new();
        };
        totals
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == best)
            .map(|(i, _)| i)
            .collect()
    }

    fn next_open_from(&self, from: usize) -> usize {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| !self.seats[i].board.is_complete())
            .unwrap_or(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::GreedyActor;
    use crate::column::ColumnKind;
    use crate::dice::seeded_rng;
    use crate::slots::Slot;

    #[test]
    fn turns_rotate_in_seat_order() {
        let mut game = Game::standard(&["a", "b", "c"]);
        let mut rng = seeded_rng(8);
        let mut actor = GreedyActor::new();
        assert_eq!(game.current(), 0);
        game.advance(&mut actor, &mut rng).unwrap();
        assert_eq!(game.current(), 1);
        game.advance(&mut actor, &mut rng).unwrap();
        assert_eq!(game.current(), 2);
        game.advance(&mut actor, &mut rng).unwrap();
        assert_eq!(game.current(), 0);
    }

    #[test]
    fn completed_seats_are_skipped() {
        // Boards of different sizes: the single-column seat finishes first
        // and is skipped for the rest of the game.
        let mut layouts =
            vec![vec![ColumnKind::Free], vec![ColumnKind::Free, ColumnKind::Free]].into_iter();
        let mut game = Game::new(&["short", "long"], || {
            Board::new(&layouts.next().unwrap_or_else(|| vec![ColumnKind::Free]))
        });
        let mut rng = seeded_rng(14);
        let mut actor = GreedyActor::new();
        while !game.is_over() {
            game.advance(&mut actor, &mut rng).unwrap();
            if game.seats()[0].board().is_complete() && !game.is_over() {
                assert_eq!(game.current(), 1);
            }
        }
        assert!(game.seats().iter().all(|s| s.board().is_complete()));
    }

    #[test]
    fn advance_after_the_end_is_an_error() {
        let mut game = Game::new(&["solo"], || Board::new(&[ColumnKind::Free]));
        let mut rng = seeded_rng(3);
        let mut actor = GreedyActor::new();
        while !game.is_over() {
            game.advance(&mut actor, &mut rng).unwrap();
        }
        assert!(matches!(game.advance(&mut actor, &mut rng), Err(TurnError::GameOver)));
    }

    #[test]
    fn equal_totals_tie_for_the_win() {
        let completed = {
            let mut b = Board::new(&[ColumnKind::Free]);
            for &slot in &Slot::FILLABLE {
                b.fill(0, slot, &[2, 2, 3, 3, 4]).unwrap();
            }
            b
        };
        let game = Game {
            seats: vec![
                Seat { name: "a".to_string(), board: completed.clone() },
                Seat { name: "b".to_string(), board: completed },
            ],
            controller: TurnController::default(),
            current: 0,
        };
        assert!(game.is_over());
        assert_eq!(game.winners(), vec![0, 1]);
    }

    #[test]
    fn winners_are_empty_until_over_then_maximal() {
        let mut game = Game::new(&["a", "b"], || Board::new(&[ColumnKind::Free]));
        assert!(game.winners().is_empty());
        let mut rng = seeded_rng(77);
        let mut actor = GreedyActor::new();
        while !game.is_over() {
            game.advance(&mut actor, &mut rng).unwrap();
        }
        let winners = game.winners();
        assert!(!winners.is_empty());
        let best = game.seats()[winners[0]].board().grand_total().unwrap();
        for (i, seat) in game.seats().iter().enumerate() {
            let total = seat.board().grand_total().unwrap();
            if winners.contains(&i) {
                assert_eq!(total, best);
            } else {
                assert!(total < best);
            }
        }
    }
}
