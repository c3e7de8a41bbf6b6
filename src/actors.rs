//! The actor seam: the engine never blocks on input, it asks a [`TurnActor`]
//! and validates the answer. Ships a scripted actor for tests and a greedy
//! baseline that can play whole games.

use crate::board::Board;
use crate::column::RequirementSpec;
use crate::dice::DiceSet;
use crate::scoring;
use crate::slots::Slot;

use std::collections::VecDeque;

/// Decision source for one turn. Implementations answer three kinds of
/// request; invalid answers are rejected by the controller and re-requested,
/// never applied.
pub trait TurnActor {
    /// Which die positions (1-indexed) to reroll. Empty means stop rolling.
    fn request_reroll(&mut self, dice: &DiceSet, board: &Board) -> Vec<usize>;

    /// A column demands an announcement. Return the slot to announce, or
    /// None to decline (leaving that column untouchable this turn).
    fn request_announcement(
        &mut self,
        column: usize,
        spec: &RequirementSpec,
        dice: &DiceSet,
        board: &Board,
    ) -> Option<Slot>;

    /// Pick the (column, slot) to fill from the candidate set. Called only
    /// when more than one candidate remains.
    fn request_choice(
        &mut self,
        candidates: &[(usize, Slot)],
        dice: &DiceSet,
        board: &Board,
    ) -> (usize, Slot);
}

/// Replays queued responses in order; past the script it stops rolling,
/// declines announcements and takes the first candidate.
///
/// ```
/// use yamb_rs::actors::ScriptedActor;
/// use yamb_rs::slots::Slot;
///
/// let actor = ScriptedActor::new()
///     .reroll(vec![1, 2])
///     .announce(Slot::Max)
///     .choose(3, Slot::Max);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedActor {
    rerolls: VecDeque<Vec<usize>>,
    announcements: VecDeque<Option<Slot>>,
    choices: VecDeque<(usize, Slot)>,
}

impl ScriptedActor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reroll answer.
    pub fn reroll(mut self, positions: Vec<usize>) -> Self {
        self.rerolls.push_back(positions);
        self
    }

    /// Queue an announcement answer.
    pub fn announce(mut self, slot: Slot) -> Self {
        self.announcements.push_back(Some(slot));
        self
    }

    /// Queue an announcement decline.
    pub fn decline(mut self) -> Self {
        self.announcements.push_back(None);
        self
    }

    /// Queue a fill choice.
    pub fn choose(mut self, column: usize, slot: Slot) -> Self {
        self.choices.push_back((column, slot));
        self
    }
}

impl TurnActor for ScriptedActor {
    fn request_reroll(&mut self, _dice: &DiceSet, _board: &Board) -> Vec<usize> {
        self.rerolls.pop_front().unwrap_or_default()
    }

    fn request_announcement(
        &mut self,
        _column: usize,
        _spec: &RequirementSpec,
        _dice: &DiceSet,
        _board: &Board,
    ) -> Option<Slot> {
        self.announcements.pop_front().flatten()
    }

    fn request_choice(
        &mut self,
        candidates: &[(usize, Slot)],
        _dice: &DiceSet,
        _board: &Board,
    ) -> (usize, Slot) {
        match self.choices.pop_front() {
            Some(choice) => choice,
            None => candidates[0],
        }
    }
}

/// Keeps the first roll and fills the highest-scoring candidate. Announces
/// only when no other column offers a slot, so it can always finish a board.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyActor;

impl GreedyActor {
    pub fn new() -> Self {
        Self
    }

    fn best_unfilled_in_column(board: &Board, column: usize, dice: &DiceSet) -> Option<Slot> {
        let col = board.column(column).ok()?;
        let values = dice.values();
        Slot::FILLABLE
            .iter()
            .copied()
            .filter(|&s| col.get(s).is_none())
            .max_by_key(|&s| scoring::score(s, &values))
    }
}

impl TurnActor for GreedyActor {
    fn request_reroll(&mut self, _dice: &DiceSet, _board: &Board) -> Vec<usize> {
        Vec::new()
    }

    fn request_announcement(
        &mut self,
        column: usize,
        _spec: &RequirementSpec,
        dice: &DiceSet,
        board: &Board,
    ) -> Option<Slot> {
        // Announce only when nothing else is fillable; otherwise keep the
        // gated column for later.
        let others_open = board
            .jointly_available()
            .iter()
            .any(|&(i, _)| i != column && !board.column(i).map(|c| c.kind().is_hand()).unwrap_or(false));
        if others_open {
            return None;
        }
        Self::best_unfilled_in_column(board, column, dice)
    }

    fn request_choice(
        &mut self,
        candidates: &[(usize, Slot)],
        dice: &DiceSet,
        _board: &Board,
    ) -> (usize, Slot) {
        let values = dice.values();
        candidates
            .iter()
            .copied()
            .max_by_key(|&(_, s)| scoring::score(s, &values))
            .unwrap_or(candidates[0])
    }
}
