//! A player's board: an ordered set of columns filled over the course of a
//! game. The board routes fills and announcements by column index and owns
//! the cross-column reads the turn layer works from.

use crate::column::{Column, ColumnError, ColumnKind, RequirementSpec};
use crate::slots::Slot;

/// The columns one player fills. Column count and kinds are fixed at
/// construction.
///
/// ```
/// use yamb_rs::board::Board;
/// use yamb_rs::column::ColumnKind;
/// use yamb_rs::slots::Slot;
///
/// let mut board = Board::standard();
/// assert_eq!(board.columns().len(), 4);
/// board.fill(0, Slot::One, &[1, 1, 2, 3, 4]).unwrap();
/// assert_eq!(board.column(0).unwrap().get(Slot::One), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// The classic four-column layout: Down, Up, Free, Announced.
    pub fn standard() -> Self {
        Self::new(&[ColumnKind::Down, ColumnKind::Up, ColumnKind::Free, ColumnKind::Announced])
    }

    /// A board with the given column kinds, in table order. Duplicates are
    /// allowed; rule variants add Hand, UpDown or LateAnnounce columns.
    /// An empty layout is degenerate: the board is complete from the start
    /// and its grand total is 0.
    pub fn new(kinds: &[ColumnKind]) -> Self {
        Self { columns: kinds.iter().map(|&k| Column::new(k)).collect() }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Result<&Column, ColumnError> {
        self.columns.get(index).ok_or(ColumnError::NoSuchColumn(index))
    }

    fn column_mut(&mut self, index: usize) -> Result<&mut Column, ColumnError> {
        self.columns.get_mut(index).ok_or(ColumnError::NoSuchColumn(index))
    }

    /// Every (column index, slot) pair a fill could target right now,
    /// before any turn-level restrictions.
    pub fn jointly_available(&self) -> Vec<(usize, Slot)> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(i, c)| c.available_slots().into_iter().map(move |s| (i, s)))
            .collect()
    }

    /// Columns demanding something at this roll count, as
    /// (column index, requirement) pairs.
    pub fn requirements(&self, rolls_so_far: u8) -> Vec<(usize, RequirementSpec)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.requirement(rolls_so_far).map(|r| (i, r)))
            .collect()
    }

    pub fn announce(&mut self, column: usize, slot: Slot) -> Result<(), ColumnError> {
        self.column_mut(column)?.announce(slot)
    }

    /// Drop every standing announcement. Called between turns.
    pub fn clear_announcements(&mut self) {
        for col in &mut self.columns {
            col.clear_announcement();
        }
    }

    pub fn fill(&mut self, column: usize, slot: Slot, dice: &[u8; 5]) -> Result<i32, ColumnError> {
        self.column_mut(column)?.fill(slot, dice)
    }

    /// Whether every column is complete. A complete board takes no more
    /// turns.
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(Column::is_complete)
    }

    /// Sum of all column totals. None until the board is complete.
    pub fn grand_total(&self) -> Option<i32> {
        self.columns.iter().map(Column::total).sum()
    }
}
