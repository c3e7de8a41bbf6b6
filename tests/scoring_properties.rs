//! Property tests over the scoring rules and column arithmetic.

use proptest::prelude::*;

use yamb_rs::column::{Column, ColumnKind};
use yamb_rs::scoring::score;
use yamb_rs::slots::Slot;

fn dice() -> impl Strategy<Value = [u8; 5]> {
    proptest::array::uniform5(1u8..=6)
}

proptest! {
    /// Scoring looks only at the multiset of faces, never at positions.
    #[test]
    fn score_is_order_invariant(d in dice()) {
        let mut sorted = d;
        sorted.sort_unstable();
        for slot in Slot::ALL {
            prop_assert_eq!(score(slot, &d), score(slot, &sorted));
        }
    }

    /// Every fillable score from dice is non-negative and bounded by the
    /// best yamb.
    #[test]
    fn fillable_scores_are_bounded(d in dice()) {
        for slot in Slot::FILLABLE {
            let s = score(slot, &d);
            prop_assert!((0..=80).contains(&s));
        }
    }

    /// MAX and MIN always equal the plain sum of the dice.
    #[test]
    fn max_min_equal_the_sum(d in dice()) {
        let sum: i32 = d.iter().map(|&v| i32::from(v)).sum();
        prop_assert_eq!(score(Slot::Max, &d), sum);
        prop_assert_eq!(score(Slot::Min, &d), sum);
    }

    /// A yamb always contains a carriage of the same face.
    #[test]
    fn yamb_implies_carriage(d in dice()) {
        if score(Slot::Yamb, &d) > 0 {
            let face = i32::from(d[0]);
            prop_assert_eq!(score(Slot::Carriage, &d), 4 * face + 40);
            prop_assert_eq!(score(Slot::Yamb, &d), 5 * face + 50);
        }
    }

    /// Number slots sum exactly the matching faces.
    #[test]
    fn number_scores_decompose_the_dice(d in dice()) {
        let numbers: i32 = Slot::NUMBERS.iter().map(|&s| score(s, &d)).sum();
        let sum: i32 = d.iter().map(|&v| i32::from(v)).sum();
        prop_assert_eq!(numbers, sum);
    }

    /// Filling a free column from any 13 rolls yields a total equal to its
    /// three partials, and the total only appears at completion.
    #[test]
    fn column_total_is_the_sum_of_partials(rolls in proptest::collection::vec(dice(), 13)) {
        let mut col = Column::new(ColumnKind::Free);
        for (i, d) in rolls.iter().enumerate() {
            prop_assert_eq!(col.total(), None);
            col.fill(Slot::FILLABLE[i], d).unwrap();
        }
        prop_assert!(col.is_complete());
        let parts = col.numbers_sum().unwrap()
            + col.sums_difference().unwrap()
            + col.collections_sum().unwrap();
        prop_assert_eq!(col.total(), Some(parts));
    }
}
