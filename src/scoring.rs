//! Pure scoring rules: a 5-die outcome mapped to a score for each fillable
//! slot. No side effects and no failure modes; dice that do not match a
//! combination slot simply score 0.

use crate::slots::Slot;

/// Bonus awarded on top of the paired dice for TWO_PAIRS.
pub const TWO_PAIRS_BONUS: i32 = 10;
/// Score for the low straight {1,2,3,4,5}.
pub const SMALL_STRAIGHT_SCORE: i32 = 35;
/// Score for the high straight {2,3,4,5,6}.
pub const LARGE_STRAIGHT_SCORE: i32 = 45;
/// Bonus awarded on top of all five dice for FULL_HOUSE.
pub const FULL_HOUSE_BONUS: i32 = 30;
/// Bonus awarded on top of the four matching dice for CARRIAGE.
pub const CARRIAGE_BONUS: i32 = 40;
/// Bonus awarded on top of all five dice for YAMB.
pub const YAMB_BONUS: i32 = 50;
/// NUMBERS_SUM earns this bonus once the six number slots sum to 60 or more.
pub const NUMBERS_BONUS: i32 = 30;
/// NUMBERS_SUM threshold for the bonus.
pub const NUMBERS_BONUS_THRESHOLD: i32 = 60;

/// Occurrences of each face in a dice outcome, indexed by face value.
/// Index 0 is unused; values outside [1, 6] are ignored.
fn face_counts(dice: &[u8; 5]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &d in dice {
        if (1..=6).contains(&d) {
            counts[d as usize] += 1;
        }
    }
    counts
}

fn dice_sum(dice: &[u8; 5]) -> i32 {
    dice.iter().map(|&d| i32::from(d)).sum()
}

/// Score a dice outcome for one slot.
///
/// Only the 13 fillable slots score from dice; the derived slots
/// (NUMBERS_SUM, SUMS_DIFFERENCE, COLLECTIONS_SUM, TOTAL) are computed from
/// filled column values (see [`crate::column::Column`]) and score 0 here.
///
/// ```
/// use yamb_rs::scoring::score;
/// use yamb_rs::slots::Slot;
///
/// assert_eq!(score(Slot::One, &[1, 1, 2, 3, 4]), 2);
/// assert_eq!(score(Slot::Straight, &[5, 3, 1, 4, 2]), 35);
/// assert_eq!(score(Slot::Yamb, &[6, 6, 6, 6, 6]), 80);
/// assert_eq!(score(Slot::FullHouse, &[6, 6, 6, 6, 6]), 0);
/// ```
pub fn score(slot: Slot, dice: &[u8; 5]) -> i32 {
    let counts = face_counts(dice);
    match slot {
        Slot::One | Slot::Two | Slot::Three | Slot::Four | Slot::Five | Slot::Six => {
            // face_value is Some for every number slot
            let face = slot.face_value().unwrap_or(0) as usize;
            i32::from(counts[face]) * face as i32
        }
        // MAX and MIN share the formula; the distinction is which slot the
        // player names, not how it is scored.
        Slot::Max | Slot::Min => dice_sum(dice),
        Slot::TwoPairs => {
            let pairs: Vec<i32> =
                (1..=6).rev().filter(|&f| counts[f as usize] >= 2).map(i32::from).collect();
            if pairs.len() >= 2 {
                2 * (pairs[0] + pairs[1]) + TWO_PAIRS_BONUS
            } else {
                0
            }
        }
        Slot::Straight => {
            let mut sorted = *dice;
            sorted.sort_unstable();
            match sorted {
                [1, 2, 3, 4, 5] => SMALL_STRAIGHT_SCORE,
                [2, 3, 4, 5, 6] => LARGE_STRAIGHT_SCORE,
                _ => 0,
            }
        }
        Slot::FullHouse => {
            let triple = (1..=6).find(|&f| counts[f as usize] == 3);
            let pair = (1..=6).find(|&f| counts[f as usize] == 2);
            match (triple, pair) {
                (Some(_), Some(_)) => dice_sum(dice) + FULL_HOUSE_BONUS,
                _ => 0,
            }
        }
        Slot::Carriage => match (1..=6).find(|&f| counts[f as usize] >= 4) {
            Some(f) => 4 * i32::from(f) + CARRIAGE_BONUS,
            None => 0,
        },
        Slot::Yamb => match (1..=6).find(|&f| counts[f as usize] == 5) {
            Some(f) => 5 * i32::from(f) + YAMB_BONUS,
            None => 0,
        },
        Slot::NumbersSum | Slot::SumsDifference | Slot::CollectionsSum | Slot::Total => 0,
    }
}

/// Score a dice outcome for every fillable slot, in table order.
pub fn score_all(dice: &[u8; 5]) -> [(Slot, i32); 13] {
    let mut out = [(Slot::One, 0); 13];
    for (i, &slot) in Slot::FILLABLE.iter().enumerate() {
        out[i] = (slot, score(slot, dice));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_slots_sum_matching_faces() {
        let dice = [1, 1, 2, 3, 4];
        assert_eq!(score(Slot::One, &dice), 2);
        assert_eq!(score(Slot::Two, &dice), 2);
        assert_eq!(score(Slot::Five, &dice), 0);
    }

    #[test]
    fn max_and_min_are_the_plain_sum() {
        let dice = [6, 5, 4, 3, 1];
        assert_eq!(score(Slot::Max, &dice), 19);
        assert_eq!(score(Slot::Min, &dice), 19);
    }

    #[test]
    fn two_pairs_needs_two_distinct_values() {
        assert_eq!(score(Slot::TwoPairs, &[2, 2, 5, 5, 1]), 2 * (5 + 2) + 10);
        // Full house contains two pairs.
        assert_eq!(score(Slot::TwoPairs, &[3, 3, 3, 6, 6]), 2 * (6 + 3) + 10);
        // Four of a kind is a single value, not two pairs.
        assert_eq!(score(Slot::TwoPairs, &[4, 4, 4, 4, 1]), 0);
        assert_eq!(score(Slot::TwoPairs, &[1, 1, 2, 3, 4]), 0);
    }

    #[test]
    fn straights_are_exact_sets() {
        assert_eq!(score(Slot::Straight, &[1, 2, 3, 4, 5]), 35);
        assert_eq!(score(Slot::Straight, &[2, 3, 4, 5, 6]), 45);
        assert_eq!(score(Slot::Straight, &[1, 2, 3, 4, 6]), 0);
        assert_eq!(score(Slot::Straight, &[1, 1, 2, 3, 4]), 0);
    }

    #[test]
    fn full_house_is_exactly_three_plus_two() {
        assert_eq!(score(Slot::FullHouse, &[2, 2, 2, 6, 6]), 18 + 30);
        assert_eq!(score(Slot::FullHouse, &[6, 6, 6, 6, 6]), 0);
        assert_eq!(score(Slot::FullHouse, &[2, 2, 2, 2, 6]), 0);
    }

    #[test]
    fn carriage_counts_four_matching_dice() {
        assert_eq!(score(Slot::Carriage, &[6, 6, 6, 6, 2]), 4 * 6 + 40);
        // Five of a kind still contains a carriage.
        assert_eq!(score(Slot::Carriage, &[6, 6, 6, 6, 6]), 4 * 6 + 40);
        assert_eq!(score(Slot::Carriage, &[6, 6, 6, 2, 2]), 0);
    }

    #[test]
    fn yamb_requires_all_five_equal() {
        assert_eq!(score(Slot::Yamb, &[6, 6, 6, 6, 6]), 5 * 6 + 50);
        assert_eq!(score(Slot::Yamb, &[1, 1, 1, 1, 1]), 5 + 50);
        assert_eq!(score(Slot::Yamb, &[1, 1, 1, 1, 2]), 0);
    }

    #[test]
    fn derived_slots_score_zero_from_dice() {
        for slot in Slot::DERIVED {
            assert_eq!(score(slot, &[6, 6, 6, 6, 6]), 0);
        }
    }

    #[test]
    fn score_all_covers_the_fillable_table() {
        let scored = score_all(&[1, 2, 3, 4, 5]);
        assert_eq!(scored.len(), 13);
        assert_eq!(scored[0], (Slot::One, 1));
        let straight = scored.iter().find(|(s, _)| *s == Slot::Straight).unwrap();
        assert_eq!(straight.1, 35);
    }
}
