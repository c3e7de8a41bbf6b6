//! A single table column: 13 fillable slot cells, a fill-order discipline
//! decided by the column kind, and announcement bookkeeping for the kinds
//! that gate on it. Derived slots are recomputed on read, never stored.

use std::fmt;

use crate::scoring::{self, NUMBERS_BONUS, NUMBERS_BONUS_THRESHOLD};
use crate::slots::Slot;

/// Fill-order discipline of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Top to bottom: only the first unfilled slot is available.
    Down,
    /// Bottom to top: only the last unfilled slot is available.
    Up,
    /// Converging from both ends.
    UpDown,
    /// Any unfilled slot.
    Free,
    /// Any unfilled slot, but it must be announced after the first roll.
    Announced,
    /// Any unfilled slot, and the turn ends after the first roll.
    Hand,
    /// Like Announced, with the announcement made after the second roll.
    LateAnnounce,
}

impl ColumnKind {
    /// The roll count after which this kind demands an announcement,
    /// if it demands one at all.
    pub const fn announcement_gate(self) -> Option<u8> {
        match self {
            ColumnKind::Announced => Some(1),
            ColumnKind::LateAnnounce => Some(2),
            _ => None,
        }
    }

    /// Whether filling this column forbids rerolls (first roll only).
    pub const fn is_hand(self) -> bool {
        matches!(self, ColumnKind::Hand)
    }

    pub const fn label(self) -> &'static str {
        match self {
            ColumnKind::Down => "Down",
            ColumnKind::Up => "Up",
            ColumnKind::UpDown => "Up-Down",
            ColumnKind::Free => "Free",
            ColumnKind::Announced => "Announced",
            ColumnKind::Hand => "Hand",
            ColumnKind::LateAnnounce => "Late Announce",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a column demands from the player before it can be filled this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequirementSpec {
    /// Name the slot now; the column accepts only that slot afterwards.
    AnnouncementRequired,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColumnError {
    #[error("slot {0} is already filled")]
    SlotAlreadyFilled(Slot),
    #[error("slot {0} is not available in this column")]
    SlotNotAvailable(Slot),
    #[error("cannot announce slot {0}")]
    InvalidAnnouncement(Slot),
    #[error("no column at index {0}")]
    NoSuchColumn(usize),
}

/// One column of the yamb table.
///
/// Failed operations leave the column untouched; a filled cell is never
/// reassigned.
///
/// ```
/// use yamb_rs::column::{Column, ColumnKind};
/// use yamb_rs::slots::Slot;
///
/// let mut col = Column::new(ColumnKind::Down);
/// assert_eq!(col.available_slots(), vec![Slot::One]);
/// col.fill(Slot::One, &[1, 1, 1, 2, 3]).unwrap();
/// assert_eq!(col.get(Slot::One), Some(3));
/// assert_eq!(col.available_slots(), vec![Slot::Two]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    kind: ColumnKind,
    scores: [Option<i32>; Slot::FILLABLE.len()],
    announcement: Option<Slot>,
}

impl Column {
    pub fn new(kind: ColumnKind) -> Self {
        Self { kind, scores: [None; Slot::FILLABLE.len()], announcement: None }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// The standing announcement, if any.
    pub fn announcement(&self) -> Option<Slot> {
        self.announcement
    }

    /// Slots this column accepts right now, per its fill-order discipline.
    ///
    /// Announce-gated kinds offer nothing until an announcement stands.
    pub fn available_slots(&self) -> Vec<Slot> {
        match self.kind {
            ColumnKind::Down => self.first_unfilled().into_iter().collect(),
            ColumnKind::Up => self.last_unfilled().into_iter().collect(),
            ColumnKind::UpDown => {
                let mut slots: Vec<Slot> = self.first_unfilled().into_iter().collect();
                if let Some(last) = self.last_unfilled() {
                    if !slots.contains(&last) {
                        slots.push(last);
                    }
                }
                slots
            }
            ColumnKind::Free | ColumnKind::Hand => self.unfilled().collect(),
            ColumnKind::Announced | ColumnKind::LateAnnounce => {
                self.announcement.into_iter().collect()
            }
        }
    }

    /// What this column demands given how many rolls the turn has taken.
    ///
    /// Announce-gated kinds demand a slot from their gate roll onward,
    /// while unannounced and incomplete.
    pub fn requirement(&self, rolls_so_far: u8) -> Option<RequirementSpec> {
        if self.announcement.is_some() || self.is_complete() {
            return None;
        }
        match self.kind.announcement_gate() {
            Some(gate) if gate <= rolls_so_far => Some(RequirementSpec::AnnouncementRequired),
            _ => None,
        }
    }

    /// Record an announcement, locking future fills to the named slot.
    pub fn announce(&mut self, slot: Slot) -> Result<(), ColumnError> {
        if self.kind.announcement_gate().is_none()
            || self.announcement.is_some()
            || !slot.is_fillable()
            || self.get(slot).is_some()
        {
            return Err(ColumnError::InvalidAnnouncement(slot));
        }
        self.announcement = Some(slot);
        Ok(())
    }

    /// Drop a standing announcement. Called at turn end when the announced
    /// slot was not the one filled.
    pub fn clear_announcement(&mut self) {
        self.announcement = None;
    }

    /// Score the dice into a slot. The slot must be unfilled and offered by
    /// [`Column::available_slots`]. Clears any standing announcement.
    pub fn fill(&mut self, slot: Slot, dice: &[u8; 5]) -> Result<i32, ColumnError> {
        let Some(idx) = slot.fillable_index() else {
            return Err(ColumnError::SlotNotAvailable(slot));
        };
        if self.scores[idx].is_some() {
            return Err(ColumnError::SlotAlreadyFilled(slot));
        }
        if !self.available_slots().contains(&slot) {
            return Err(ColumnError::SlotNotAvailable(slot));
        }
        let value = scoring::score(slot, dice);
        self.scores[idx] = Some(value);
        self.announcement = None;
        Ok(value)
    }

    /// Whether all 13 fillable slots are assigned. Complete columns accept
    /// no further fills.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Unified read over fillable and derived slots.
    pub fn get(&self, slot: Slot) -> Option<i32> {
        match slot {
            Slot::NumbersSum => self.numbers_sum(),
            Slot::SumsDifference => self.sums_difference(),
            Slot::CollectionsSum => self.collections_sum(),
            Slot::Total => self.total(),
            _ => slot.fillable_index().and_then(|i| self.scores[i]),
        }
    }

    /// Sum of ONE..SIX, plus the bonus once it reaches the threshold.
    /// None until all six number slots are filled.
    pub fn numbers_sum(&self) -> Option<i32> {
        let sum = self.group_sum(&Slot::NUMBERS)?;
        Some(if sum >= NUMBERS_BONUS_THRESHOLD { sum + NUMBERS_BONUS } else { sum })
    }

    /// ONE * (MAX - MIN). None until ONE, MAX and MIN are all filled.
    /// This is the one slot value that can be negative.
    pub fn sums_difference(&self) -> Option<i32> {
        let one = self.get(Slot::One)?;
        let max = self.get(Slot::Max)?;
        let min = self.get(Slot::Min)?;
        Some(one * (max - min))
    }

    /// Sum of the five collection slots. None until all five are filled.
    pub fn collections_sum(&self) -> Option<i32> {
        self.group_sum(&Slot::COLLECTIONS)
    }

    /// Column total: the three partials summed. None until the column is
    /// complete.
    pub fn total(&self) -> Option<i32> {
        Some(self.numbers_sum()? + self.sums_difference()? + self.collections_sum()?)
    }

    fn group_sum(&self, group: &[Slot]) -> Option<i32> {
        group.iter().map(|&s| self.get(s)).sum()
    }

    fn unfilled(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::FILLABLE
            .iter()
            .enumerate()
            .filter(|(i, _)| self.scores[*i].is_none())
            .map(|(_, &s)| s)
    }

    fn first_unfilled(&self) -> Option<Slot> {
        self.unfilled().next()
    }

    fn last_unfilled(&self) -> Option<Slot> {
        self.unfilled().last()
    }
}
