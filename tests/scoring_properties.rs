//! Exhaustive checks of the scoring engine over every roll of up to six dice

use farkle_rs::core::{DieFace, FaceCounts};
use farkle_rs::scoring::{
    enumerate_combinations, is_bust, max_score, validate_selection, SelectionError,
};
use similar_asserts::assert_eq;

fn faces(values: &[u8]) -> Vec<DieFace> {
    values.iter().map(|&v| DieFace::new(v)).collect()
}

/// Every multiset of 1..=6 faces, as sorted face lists
fn all_rolls() -> Vec<Vec<DieFace>> {
    fn extend(current: &mut Vec<u8>, min_face: u8, out: &mut Vec<Vec<DieFace>>) {
        if !current.is_empty() {
            out.push(faces(current));
        }
        if current.len() == 6 {
            return;
        }
        for face in min_face..=6 {
            current.push(face);
            extend(current, face, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), 1, &mut out);
    out
}

#[test]
fn test_roll_count() {
    // C(11,5) - 1 non-empty multisets of size <= 6 over 6 faces
    assert_eq!(all_rolls().len(), 923);
}

#[test]
fn test_bust_iff_no_combinations() {
    for roll in all_rolls() {
        assert_eq!(
            is_bust(&roll),
            enumerate_combinations(&roll).is_empty(),
            "roll {roll:?}"
        );
    }
}

#[test]
fn test_bust_means_no_ones_fives_or_triples() {
    for roll in all_rolls() {
        let counts = FaceCounts::from_faces(&roll);
        let scorable = counts[DieFace::new(1)] > 0
            || counts[DieFace::new(5)] > 0
            || counts.iter().any(|(_, n)| n >= 3);
        assert_eq!(is_bust(&roll), !scorable, "roll {roll:?}");
    }
}

#[test]
fn test_enumeration_is_idempotent_and_order_free() {
    for roll in all_rolls() {
        let first = enumerate_combinations(&roll);
        assert_eq!(first, enumerate_combinations(&roll));

        let mut reversed = roll.clone();
        reversed.reverse();
        assert_eq!(first, enumerate_combinations(&reversed), "roll {roll:?}");
    }
}

#[test]
fn test_rows_sorted_and_positive() {
    for roll in all_rolls() {
        let combos = enumerate_combinations(&roll);
        assert!(combos.iter().all(|c| c.points > 0), "roll {roll:?}");
        assert!(
            combos.windows(2).all(|w| w[0].points >= w[1].points),
            "roll {roll:?}"
        );
    }
}

#[test]
fn test_combinations_never_overlap() {
    for roll in all_rolls() {
        let mut used = FaceCounts::new();
        for combo in enumerate_combinations(&roll) {
            for &face in &combo.faces_consumed {
                used.add(face, 1);
            }
        }
        assert!(FaceCounts::from_faces(&roll).contains(&used), "roll {roll:?}");
    }
}

#[test]
fn test_each_combination_is_a_valid_selection() {
    for roll in all_rolls() {
        for combo in enumerate_combinations(&roll) {
            let scored = validate_selection(&roll, &combo.faces_consumed)
                .unwrap_or_else(|e| panic!("{combo} from {roll:?}: {e}"));
            assert_eq!(scored.points, combo.points, "{combo} from {roll:?}");
        }
    }
}

#[test]
fn test_all_scoring_dice_together_score_max() {
    for roll in all_rolls().into_iter().filter(|r| !is_bust(r)) {
        let scoring: Vec<DieFace> = enumerate_combinations(&roll)
            .into_iter()
            .flat_map(|c| c.faces_consumed)
            .collect();
        let scored = validate_selection(&roll, &scoring).unwrap();
        assert_eq!(scored.points, max_score(&roll), "roll {roll:?}");
    }
}

#[test]
fn test_selection_valid_iff_fully_claimed() {
    for roll in all_rolls() {
        // every sub-multiset of the roll
        let counts = FaceCounts::from_faces(&roll);
        for chosen in all_rolls() {
            let chosen_counts = FaceCounts::from_faces(&chosen);
            let result = validate_selection(&roll, &chosen);
            if !counts.contains(&chosen_counts) {
                assert_eq!(result.unwrap_err(), SelectionError::ExceedsAvailable);
                continue;
            }
            let claimed: usize = enumerate_combinations(&chosen)
                .iter()
                .map(|c| c.dice_count())
                .sum();
            assert_eq!(
                result.is_ok(),
                claimed == chosen.len(),
                "chosen {chosen:?} from {roll:?}"
            );
        }
    }
}

#[test]
fn test_better_dice_score_more() {
    let single_one = max_score(&faces(&[1]));
    let triple_ones = max_score(&faces(&[1, 1, 1]));
    let four_ones = max_score(&faces(&[1, 1, 1, 1]));
    assert!(triple_ones >= single_one);
    assert!(four_ones >= triple_ones);

    for face in 1..=6u8 {
        let mut previous = 0;
        for count in 3..=6 {
            let score = max_score(&vec![DieFace::new(face); count]);
            assert!(score > previous, "{count} x {face}");
            previous = score;
        }
    }
}

#[test]
fn test_reference_scenarios() {
    let labels = |values: &[u8]| -> Vec<(String, u32)> {
        enumerate_combinations(&faces(values))
            .into_iter()
            .map(|c| (c.label(), c.points))
            .collect()
    };

    assert_eq!(labels(&[1, 2, 3, 4, 5, 6]), vec![("full straight".to_string(), 1500)]);
    assert_eq!(labels(&[2, 2, 3, 3, 4, 4]), Vec::<(String, u32)>::new());
    assert_eq!(labels(&[5, 5, 5, 2, 3, 4]), vec![("three 5s".to_string(), 500)]);
    assert_eq!(labels(&[1, 1, 1, 1, 2, 3]), vec![("4 1s".to_string(), 2000)]);
    assert!(is_bust(&faces(&[6, 6, 3, 4, 4, 2])));

    assert_eq!(
        validate_selection(&faces(&[1, 1, 1, 1, 2, 3]), &faces(&[1, 1, 1, 1]))
            .unwrap()
            .points,
        2000
    );
}
