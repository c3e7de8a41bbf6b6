//! One turn: an initial roll, up to two rerolls, announcement gates, and a
//! single fill. [`Turn`] is the validated step API over a borrowed board;
//! [`TurnController`] drives it against a [`TurnActor`], re-requesting
//! invalid answers instead of applying them.

use rand::Rng;

use crate::actors::TurnActor;
use crate::board::Board;
use crate::column::{ColumnError, RequirementSpec};
use crate::dice::{DiceError, DiceSet};
use crate::slots::Slot;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnError {
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error(transparent)]
    Column(#[from] ColumnError),
    #[error("actor kept answering with invalid responses")]
    ActorDefected,
    #[error("board is already complete")]
    BoardComplete,
    #[error("game is already over")]
    GameOver,
}

/// What a finished turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub column: usize,
    pub slot: Slot,
    pub score: i32,
    pub rolls: u8,
}

/// An in-flight turn over one board. Construction takes the mandatory
/// initial roll; every later step validates before mutating, so a failed
/// call leaves the turn where it was.
///
/// ```
/// use yamb_rs::board::Board;
/// use yamb_rs::dice::seeded_rng;
/// use yamb_rs::slots::Slot;
/// use yamb_rs::turn::Turn;
///
/// let mut board = Board::standard();
/// let mut rng = seeded_rng(7);
/// let mut turn = Turn::begin(&mut board, &mut rng).unwrap();
/// assert_eq!(turn.rolls(), 1);
/// turn.reroll(&[1, 2, 3], &mut rng).unwrap();
/// let outcome = turn.fill(0, Slot::One).unwrap();
/// assert_eq!(outcome.rolls, 2);
/// ```
#[derive(Debug)]
pub struct Turn<'b> {
    board: &'b mut Board,
    dice: DiceSet,
    // Turn-local capture; committed to the board only when the fill lands,
    // so an abandoned turn leaves no trace.
    announced: Option<(usize, Slot)>,
}

impl<'b> Turn<'b> {
    /// Start a turn on an incomplete board and take the initial roll.
    pub fn begin<R: Rng + ?Sized>(board: &'b mut Board, rng: &mut R) -> Result<Self, TurnError> {
        if board.is_complete() {
            return Err(TurnError::BoardComplete);
        }
        let mut dice = DiceSet::new();
        dice.roll_initial(rng);
        Ok(Self { board, dice, announced: None })
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn rolls(&self) -> u8 {
        self.dice.rolls()
    }

    /// The column this turn announced into, if any.
    pub fn locked_column(&self) -> Option<usize> {
        self.announced.map(|(column, _)| column)
    }

    /// Announcement gates standing open at the current roll count. The
    /// column this turn already announced into is excluded.
    pub fn requirements(&self) -> Vec<(usize, RequirementSpec)> {
        self.board
            .requirements(self.dice.rolls())
            .into_iter()
            .filter(|&(i, _)| self.locked_column() != Some(i))
            .collect()
    }

    /// Announce a slot into a gated column, locking this turn's fill to it.
    /// Rejected before the column's gate roll has been reached. The
    /// announcement stays turn-local until the fill commits it, so dropping
    /// the turn discards it.
    pub fn announce(&mut self, column: usize, slot: Slot) -> Result<(), TurnError> {
        if self.announced.is_some() {
            return Err(ColumnError::InvalidAnnouncement(slot).into());
        }
        let col = self.board.column(column)?;
        match col.kind().announcement_gate() {
            Some(gate) if gate <= self.dice.rolls() => {}
            _ => return Err(ColumnError::InvalidAnnouncement(slot).into()),
        }
        if col.announcement().is_some() || !slot.is_fillable() || col.get(slot).is_some() {
            return Err(ColumnError::InvalidAnnouncement(slot).into());
        }
        self.announced = Some((column, slot));
        Ok(())
    }

    /// Whether another roll is both allowed and useful: the roll budget has
    /// room and some fillable target would survive it. With only Hand
    /// columns left the turn must end on the first roll.
    pub fn can_reroll(&self) -> bool {
        if !self.dice.can_reroll() {
            return false;
        }
        if self.announced.is_some() {
            return true;
        }
        let rolls = self.dice.rolls();
        self.board.columns().iter().any(|col| {
            if col.is_complete() {
                return false;
            }
            match col.kind().announcement_gate() {
                Some(gate) => col.announcement().is_some() || gate > rolls,
                None => !col.kind().is_hand() && !col.available_slots().is_empty(),
            }
        })
    }

    /// Reroll the named positions (1-indexed).
    pub fn reroll<R: Rng + ?Sized>(
        &mut self,
        positions: &[usize],
        rng: &mut R,
    ) -> Result<[u8; 5], TurnError> {
        if !self.can_reroll() {
            return Err(DiceError::RollsExhausted(self.dice.rolls()).into());
        }
        Ok(self.dice.reroll(positions, rng)?)
    }

    /// Every (column, slot) this turn may fill right now. A standing
    /// announcement restricts the set to its column; Hand columns drop out
    /// once a second roll was taken.
    pub fn candidates(&self) -> Vec<(usize, Slot)> {
        if let Some(announced) = self.announced {
            return vec![announced];
        }
        let rolls = self.dice.rolls();
        self.board
            .jointly_available()
            .into_iter()
            .filter(|&(i, _)| {
                let hand = self
                    .board
                    .column(i)
                    .map(|c| c.kind().is_hand())
                    .unwrap_or(false);
                !(hand && rolls > 1)
            })
            .collect()
    }

    /// An announcement gate that only opens at a later roll count, on a
    /// column that still has work left.
    fn has_unreached_gate(&self) -> bool {
        let rolls = self.dice.rolls();
        self.board.columns().iter().any(|c| {
            !c.is_complete()
                && c.announcement().is_none()
                && c.kind().announcement_gate().map(|g| g > rolls).unwrap_or(false)
        })
    }

    /// Fill a candidate and end the turn. Commits this turn's announcement
    /// to the column just long enough to route the fill, then clears
    /// announcements board-wide. A rejected fill leaves the turn open for
    /// another attempt.
    pub fn fill(&mut self, column: usize, slot: Slot) -> Result<TurnOutcome, TurnError> {
        let col = self.board.column(column)?;
        if slot.is_fillable() && col.get(slot).is_some() {
            return Err(ColumnError::SlotAlreadyFilled(slot).into());
        }
        if !self.candidates().contains(&(column, slot)) {
            return Err(ColumnError::SlotNotAvailable(slot).into());
        }
        if let Some((announced_col, announced_slot)) = self.announced {
            self.board.announce(announced_col, announced_slot)?;
        }
        let result = self.board.fill(column, slot, &self.dice.values());
        self.board.clear_announcements();
        Ok(TurnOutcome { column, slot, score: result?, rolls: self.dice.rolls() })
    }
}

/// Drives one turn against an actor. Invalid responses are re-requested up
/// to a retry budget; a persistently broken actor surfaces as
/// [`TurnError::ActorDefected`] rather than a hang or a corrupted board.
#[derive(Debug, Clone, Copy)]
pub struct TurnController {
    retry_limit: u32,
}

impl Default for TurnController {
    fn default() -> Self {
        Self { retry_limit: 8 }
    }
}

impl TurnController {
    pub fn new(retry_limit: u32) -> Self {
        Self { retry_limit }
    }

    /// Play one full turn: roll, offer announcement gates, reroll while the
    /// actor wants to and the board allows it, then fill exactly one slot.
    pub fn play_turn<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        actor: &mut dyn TurnActor,
        rng: &mut R,
    ) -> Result<TurnOutcome, TurnError> {
        let mut turn = Turn::begin(board, rng)?;

        loop {
            self.offer_announcements(&mut turn, actor)?;
            if !turn.can_reroll() {
                break;
            }
            let mut retries = 0;
            loop {
                let positions = actor.request_reroll(turn.dice(), turn.board());
                if positions.is_empty() {
                    if turn.candidates().is_empty() && turn.has_unreached_gate() {
                        // Nothing is fillable until a later announcement
                        // gate opens. Stand pat: consume the roll without
                        // touching any die.
                        turn.reroll(&[], rng)?;
                        break;
                    }
                    return self.finish(turn, actor);
                }
                match turn.reroll(&positions, rng) {
                    Ok(_) => break,
                    Err(_) => {
                        retries += 1;
                        if retries > self.retry_limit {
                            return Err(TurnError::ActorDefected);
                        }
                    }
                }
            }
        }

        self.finish(turn, actor)
    }

    /// After rolling stops: resolve a stranded announcement gate if the
    /// candidate set is empty, then fill.
    fn finish(
        &self,
        mut turn: Turn<'_>,
        actor: &mut dyn TurnActor,
    ) -> Result<TurnOutcome, TurnError> {
        if turn.candidates().is_empty() {
            self.force_announcement(&mut turn, actor)?;
        }
        let candidates = turn.candidates();
        if candidates.is_empty() {
            return Err(TurnError::ActorDefected);
        }
        let (column, slot) = if candidates.len() == 1 {
            candidates[0]
        } else {
            let mut retries = 0;
            loop {
                let choice = actor.request_choice(&candidates, turn.dice(), turn.board());
                if candidates.contains(&choice) {
                    break choice;
                }
                retries += 1;
                if retries > self.retry_limit {
                    return Err(TurnError::ActorDefected);
                }
            }
        };
        turn.fill(column, slot)
    }

    /// Offer each open gate to the actor. Declining is allowed; a successful
    /// announcement locks the turn, so further gates stop being offered.
    fn offer_announcements(
        &self,
        turn: &mut Turn<'_>,
        actor: &mut dyn TurnActor,
    ) -> Result<(), TurnError> {
        for (column, spec) in turn.requirements() {
            if turn.locked_column().is_some() {
                break;
            }
            let mut retries = 0;
            loop {
                let Some(slot) = actor.request_announcement(column, &spec, turn.dice(), turn.board())
                else {
                    break;
                };
                match turn.announce(column, slot) {
                    Ok(()) => break,
                    Err(_) => {
                        retries += 1;
                        if retries > self.retry_limit {
                            return Err(TurnError::ActorDefected);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Every fill target left needs an announcement the actor declined at
    /// the gate. Re-offer those columns; the actor must commit to one.
    fn force_announcement(
        &self,
        turn: &mut Turn<'_>,
        actor: &mut dyn TurnActor,
    ) -> Result<(), TurnError> {
        let gated: Vec<usize> = turn
            .board()
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                !c.is_complete()
                    && c.kind().announcement_gate().is_some()
                    && c.announcement().is_none()
            })
            .map(|(i, _)| i)
            .collect();

        let mut retries = 0;
        loop {
            for &column in &gated {
                let spec = RequirementSpec::AnnouncementRequired;
                if let Some(slot) =
                    actor.request_announcement(column, &spec, turn.dice(), turn.board())
                {
                    if turn.announce(column, slot).is_ok() {
                        return Ok(());
                    }
                }
            }
            retries += 1;
            if retries > self.retry_limit {
                return Err(TurnError::ActorDefected);
            }
        }
    }
}
