use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of dice in a yamb turn.
pub const DICE_COUNT: usize = 5;

/// Maximum rolls per turn (one initial roll plus up to two rerolls).
pub const MAX_ROLLS: u8 = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiceError {
    #[error("die position {0} is out of range [1, 5]")]
    InvalidPosition(usize),
    #[error("roll count exhausted at {0}")]
    RollsExhausted(u8),
    #[error("dice have not been rolled yet")]
    NotRolled,
}

/// Five six-sided dice with advisory held flags and a bounded roll count.
///
/// Positions are 1-indexed throughout, matching how yamb tables and prompts
/// number the dice. Held flags are bookkeeping for callers (a UI, a bot);
/// the engine accepts any reroll subset regardless of them.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use yamb_rs::dice::DiceSet;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut dice = DiceSet::new();
/// dice.roll_initial(&mut rng);
/// assert_eq!(dice.rolls(), 1);
/// assert!(dice.values().iter().all(|&v| (1..=6).contains(&v)));
///
/// dice.reroll(&[1, 2], &mut rng).unwrap();
/// assert_eq!(dice.rolls(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    values: [u8; DICE_COUNT],
    held: [bool; DICE_COUNT],
    rolls: u8,
}

impl DiceSet {
    /// A fresh, unrolled set. Values read 0 until the initial roll.
    pub fn new() -> Self {
        Self { values: [0; DICE_COUNT], held: [false; DICE_COUNT], rolls: 0 }
    }

    /// Current die values in position order.
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.values
    }

    /// Rolls taken so far this turn (0 before the initial roll).
    pub fn rolls(&self) -> u8 {
        self.rolls
    }

    /// Whether the bounded roll budget still allows a reroll.
    pub fn can_reroll(&self) -> bool {
        self.rolls >= 1 && self.rolls < MAX_ROLLS
    }

    /// Roll all five dice, starting (or restarting) a turn's roll sequence.
    pub fn roll_initial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [u8; DICE_COUNT] {
        for v in &mut self.values {
            *v = rng.random_range(1..=6);
        }
        self.held = [false; DICE_COUNT];
        self.rolls = 1;
        self.values
    }

    /// Reroll exactly the named positions, leaving the rest untouched.
    ///
    /// Fails without mutating state if any position is out of [1, 5], if the
    /// roll budget is already spent, or before the initial roll.
    pub fn reroll<R: Rng + ?Sized>(
        &mut self,
        positions: &[usize],
        rng: &mut R,
    ) -> Result<[u8; DICE_COUNT], DiceError> {
        if self.rolls == 0 {
            return Err(DiceError::NotRolled);
        }
        if self.rolls >= MAX_ROLLS {
            return Err(DiceError::RollsExhausted(self.rolls));
        }
        for &pos in positions {
            if pos < 1 || pos > DICE_COUNT {
                return Err(DiceError::InvalidPosition(pos));
            }
        }
        for &pos in positions {
            self.values[pos - 1] = rng.random_range(1..=6);
        }
        self.rolls += 1;
        Ok(self.values)
    }

    /// Mark a die as held. Advisory only; rerolls are not restricted by it.
    pub fn hold(&mut self, position: usize) -> Result<(), DiceError> {
        let flag = self.flag_mut(position)?;
        *flag = true;
        Ok(())
    }

    /// Clear a die's held flag.
    pub fn release(&mut self, position: usize) -> Result<(), DiceError> {
        let flag = self.flag_mut(position)?;
        *flag = false;
        Ok(())
    }

    /// Held flags in position order.
    pub fn held(&self) -> [bool; DICE_COUNT] {
        self.held
    }

    /// 1-indexed positions of dice not currently held.
    pub fn free_positions(&self) -> Vec<usize> {
        (1..=DICE_COUNT).filter(|&p| !self.held[p - 1]).collect()
    }

    fn flag_mut(&mut self, position: usize) -> Result<&mut bool, DiceError> {
        if position < 1 || position > DICE_COUNT {
            return Err(DiceError::InvalidPosition(position));
        }
        Ok(&mut self.held[position - 1])
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A seeded RNG for reproducible dice sequences.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rolls_are_reproducible() {
        let mut d1 = DiceSet::new();
        let mut d2 = DiceSet::new();
        d1.roll_initial(&mut seeded_rng(42));
        d2.roll_initial(&mut seeded_rng(42));
        assert_eq!(d1.values(), d2.values());
    }

    #[test]
    fn reroll_touches_only_named_positions() {
        let mut rng = seeded_rng(7);
        let mut dice = DiceSet::new();
        dice.roll_initial(&mut rng);
        let before = dice.values();
        dice.reroll(&[2, 4], &mut rng).unwrap();
        let after = dice.values();
        assert_eq!(before[0], after[0]);
        assert_eq!(before[2], after[2]);
        assert_eq!(before[4], after[4]);
        assert_eq!(dice.rolls(), 2);
    }

    #[test]
    fn reroll_requires_an_initial_roll() {
        let mut dice = DiceSet::new();
        let err = dice.reroll(&[1], &mut seeded_rng(0)).unwrap_err();
        assert!(matches!(err, DiceError::NotRolled));
        assert_eq!(dice.rolls(), 0);
    }

    #[test]
    fn roll_budget_is_three() {
        let mut rng = seeded_rng(3);
        let mut dice = DiceSet::new();
        dice.roll_initial(&mut rng);
        dice.reroll(&[1], &mut rng).unwrap();
        dice.reroll(&[1], &mut rng).unwrap();
        let err = dice.reroll(&[1], &mut rng).unwrap_err();
        assert!(matches!(err, DiceError::RollsExhausted(3)));
        assert_eq!(dice.rolls(), 3);
    }

    #[test]
    fn out_of_range_position_is_rejected_before_mutation() {
        let mut rng = seeded_rng(11);
        let mut dice = DiceSet::new();
        dice.roll_initial(&mut rng);
        let before = dice.values();
        let err = dice.reroll(&[1, 6], &mut rng).unwrap_err();
        assert!(matches!(err, DiceError::InvalidPosition(6)));
        assert_eq!(dice.values(), before);
        assert_eq!(dice.rolls(), 1);
    }

    #[test]
    fn held_flags_are_advisory() {
        let mut rng = seeded_rng(5);
        let mut dice = DiceSet::new();
        dice.roll_initial(&mut rng);
        dice.hold(1).unwrap();
        assert_eq!(dice.free_positions(), vec![2, 3, 4, 5]);
        // Rerolling a held die is still accepted.
        assert!(dice.reroll(&[1], &mut rng).is_ok());
        dice.release(1).unwrap();
        assert_eq!(dice.free_positions().len(), 5);
        assert!(matches!(dice.hold(0), Err(DiceError::InvalidPosition(0))));
    }
}
