use std::fmt;
use std::str::FromStr;

/// One scoring category in a yamb column, in table order.
///
/// Thirteen slots are *fillable* (chosen by the player and scored from a dice
/// outcome); the remaining four are *derived* (recomputed from the fillable
/// slots of the same column, never chosen directly).
///
/// ```
/// use yamb_rs::slots::Slot;
///
/// assert!(Slot::Yamb.is_fillable());
/// assert!(Slot::Total.is_derived());
/// assert_eq!(Slot::FILLABLE.len(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Slot {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    NumbersSum = 7,
    Max = 8,
    Min = 9,
    SumsDifference = 10,
    TwoPairs = 11,
    Straight = 12,
    FullHouse = 13,
    Carriage = 14,
    Yamb = 15,
    CollectionsSum = 16,
    Total = 17,
}

impl Slot {
    /// All 17 slots in table order.
    pub const ALL: [Slot; 17] = [
        Slot::One,
        Slot::Two,
        Slot::Three,
        Slot::Four,
        Slot::Five,
        Slot::Six,
        Slot::NumbersSum,
        Slot::Max,
        Slot::Min,
        Slot::SumsDifference,
        Slot::TwoPairs,
        Slot::Straight,
        Slot::FullHouse,
        Slot::Carriage,
        Slot::Yamb,
        Slot::CollectionsSum,
        Slot::Total,
    ];

    /// The 13 player-fillable slots in table (fill) order.
    pub const FILLABLE: [Slot; 13] = [
        Slot::One,
        Slot::Two,
        Slot::Three,
        Slot::Four,
        Slot::Five,
        Slot::Six,
        Slot::Max,
        Slot::Min,
        Slot::TwoPairs,
        Slot::Straight,
        Slot::FullHouse,
        Slot::Carriage,
        Slot::Yamb,
    ];

    /// Number slots ONE through SIX.
    pub const NUMBERS: [Slot; 6] =
        [Slot::One, Slot::Two, Slot::Three, Slot::Four, Slot::Five, Slot::Six];

    /// Sum slots MAX and MIN.
    pub const SUMS: [Slot; 2] = [Slot::Max, Slot::Min];

    /// Collection slots TWO_PAIRS through YAMB.
    pub const COLLECTIONS: [Slot; 5] =
        [Slot::TwoPairs, Slot::Straight, Slot::FullHouse, Slot::Carriage, Slot::Yamb];

    /// Derived slots, recomputed from fillable slots and never chosen.
    pub const DERIVED: [Slot; 4] =
        [Slot::NumbersSum, Slot::SumsDifference, Slot::CollectionsSum, Slot::Total];

    pub const fn is_fillable(self) -> bool {
        !self.is_derived()
    }

    pub const fn is_derived(self) -> bool {
        matches!(
            self,
            Slot::NumbersSum | Slot::SumsDifference | Slot::CollectionsSum | Slot::Total
        )
    }

    /// Face value for number slots (ONE → 1, ..., SIX → 6).
    pub const fn face_value(self) -> Option<u8> {
        match self {
            Slot::One | Slot::Two | Slot::Three | Slot::Four | Slot::Five | Slot::Six => {
                Some(self as u8)
            }
            _ => None,
        }
    }

    /// Position of a fillable slot within [`Slot::FILLABLE`].
    pub(crate) fn fillable_index(self) -> Option<usize> {
        Slot::FILLABLE.iter().position(|&s| s == self)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Slot::One => "One",
            Slot::Two => "Two",
            Slot::Three => "Three",
            Slot::Four => "Four",
            Slot::Five => "Five",
            Slot::Six => "Six",
            Slot::NumbersSum => "Numbers Sum",
            Slot::Max => "Max",
            Slot::Min => "Min",
            Slot::SumsDifference => "Sums Difference",
            Slot::TwoPairs => "Two Pairs",
            Slot::Straight => "Straight",
            Slot::FullHouse => "Full House",
            Slot::Carriage => "Carriage",
            Slot::Yamb => "Yamb",
            Slot::CollectionsSum => "Collections Sum",
            Slot::Total => "Total",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlotParseError {
    #[error("invalid slot: '{0}'")]
    Invalid(String),
}

impl FromStr for Slot {
    type Err = SlotParseError;

    /// Parse a slot name case-insensitively; spaces and underscores are
    /// interchangeable ("two pairs", "TWO_PAIRS").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String =
            s.trim().chars().map(|c| if c == '_' { ' ' } else { c.to_ascii_lowercase() }).collect();
        let slot = match key.as_str() {
            "one" => Slot::One,
            "two" => Slot::Two,
            "three" => Slot::Three,
            "four" => Slot::Four,
            "five" => Slot::Five,
            "six" => Slot::Six,
            "numbers sum" => Slot::NumbersSum,
            "max" => Slot::Max,
            "min" => Slot::Min,
            "sums difference" => Slot::SumsDifference,
            "two pairs" => Slot::TwoPairs,
            "straight" => Slot::Straight,
            "full house" => Slot::FullHouse,
            "carriage" => Slot::Carriage,
            "yamb" => Slot::Yamb,
            "collections sum" => Slot::CollectionsSum,
            "total" => Slot::Total,
            _ => return Err(SlotParseError::Invalid(s.to_string())),
        };
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_partition_the_table() {
        assert_eq!(Slot::ALL.len(), 17);
        assert_eq!(Slot::FILLABLE.len() + Slot::DERIVED.len(), Slot::ALL.len());
        for s in Slot::FILLABLE {
            assert!(s.is_fillable());
        }
        for s in Slot::DERIVED {
            assert!(s.is_derived());
        }
        // Numbers, sums and collections partition the fillable slots.
        let mut regrouped: Vec<Slot> = Slot::NUMBERS
            .iter()
            .chain(Slot::SUMS.iter())
            .chain(Slot::COLLECTIONS.iter())
            .copied()
            .collect();
        regrouped.sort();
        assert_eq!(regrouped.as_slice(), &Slot::FILLABLE);
    }

    #[test]
    fn fillable_order_matches_the_table() {
        assert_eq!(Slot::FILLABLE[0], Slot::One);
        assert_eq!(Slot::FILLABLE[6], Slot::Max);
        assert_eq!(Slot::FILLABLE[12], Slot::Yamb);
        let mut sorted = Slot::FILLABLE;
        sorted.sort();
        assert_eq!(sorted, Slot::FILLABLE, "fillable slots are listed in table order");
    }

    #[test]
    fn face_values_match_number_slots() {
        assert_eq!(Slot::One.face_value(), Some(1));
        assert_eq!(Slot::Six.face_value(), Some(6));
        assert_eq!(Slot::Max.face_value(), None);
    }

    #[test]
    fn display_and_from_str() {
        assert_eq!(Slot::TwoPairs.to_string(), "Two Pairs");
        assert_eq!(Slot::from_str("two_pairs").unwrap(), Slot::TwoPairs);
        assert_eq!(Slot::from_str("YAMB").unwrap(), Slot::Yamb);
        assert_eq!(Slot::from_str("Numbers Sum").unwrap(), Slot::NumbersSum);
        assert!(Slot::from_str("seven").is_err());
    }
}
