use super::*;

use proptest::prelude::*;

fn answer_all(catalog: &Catalog, value: i64) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for item in catalog.items() {
        answers.insert(item.id.clone(), value);
    }
    answers
}

/// Direct items at `direct`, reverse items at `reverse`.
fn answer_keyed(catalog: &Catalog, direct: i64, reverse: i64) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for item in catalog.items() {
        answers.insert(item.id.clone(), if item.reverse { reverse } else { direct });
    }
    answers
}

#[test]
fn test_reverse_symmetry() {
    for v in 1..=5i64 {
        assert_eq!(reverse_value(v) + v, 6);
        assert_eq!(reverse_value(reverse_value(v)), v);
    }
}

#[test]
fn test_neutral_baseline_all_missing() {
    let catalog = Catalog::builtin();
    let out = compute_scores(&catalog, &AnswerSet::new(), OutOfRangePolicy::Reject).unwrap();
    for (_, score) in out.scores.iter() {
        assert_eq!(score, 50.0);
    }
    assert_eq!(out.audit.answered, 0);
    assert_eq!(out.audit.defaulted, 50);
}

#[test]
fn test_all_neutral_answers_match_baseline() {
    let catalog = Catalog::builtin();
    let answers = answer_all(&catalog, 3);
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    for (_, score) in out.scores.iter() {
        assert_eq!(score, 50.0);
    }
    assert_eq!(out.audit.answered, 50);
    assert_eq!(out.audit.defaulted, 0);
}

#[test]
fn test_extremes() {
    let catalog = Catalog::builtin();

    let maximal = answer_keyed(&catalog, 5, 1);
    let out = compute_scores(&catalog, &maximal, OutOfRangePolicy::Reject).unwrap();
    for (_, score) in out.scores.iter() {
        assert_eq!(score, 100.0);
    }

    let minimal = answer_keyed(&catalog, 1, 5);
    let out = compute_scores(&catalog, &minimal, OutOfRangePolicy::Reject).unwrap();
    for (_, score) in out.scores.iter() {
        assert_eq!(score, 0.0);
    }
}

#[test]
fn test_partial_answers_default_to_neutral() {
    let catalog = Catalog::builtin();
    let mut answers = AnswerSet::new();
    answers.insert("O1", 5);
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    // O: one 5 and nine neutral 3s -> mean 3.2 -> 55.0
    assert_eq!(out.scores.get(Dimension::Openness), 55.0);
    assert_eq!(out.scores.get(Dimension::Extraversion), 50.0);
    assert_eq!(out.audit.answered, 1);
    assert_eq!(out.audit.defaulted, 49);
}

#[test]
fn test_reverse_item_pulls_score_down() {
    let catalog = Catalog::builtin();
    let mut answers = AnswerSet::new();
    answers.insert("O6", 5); // reverse-keyed: contributes 1
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    assert_eq!(out.scores.get(Dimension::Openness), 45.0);
}

#[test]
fn test_out_of_range_rejected_by_default() {
    let catalog = Catalog::builtin();
    let mut answers = AnswerSet::new();
    answers.insert("C2", 9);
    let err = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap_err();
    let ScoreError::OutOfRange { id, value } = err;
    assert_eq!(id, "C2");
    assert_eq!(value, 9);
}

#[test]
fn test_out_of_range_clamp() {
    let catalog = Catalog::builtin();
    let mut high = AnswerSet::new();
    high.insert("C2", 9);
    let mut low = AnswerSet::new();
    low.insert("C2", -3);

    let out_high = compute_scores(&catalog, &high, OutOfRangePolicy::Clamp).unwrap();
    let out_low = compute_scores(&catalog, &low, OutOfRangePolicy::Clamp).unwrap();

    let mut five = AnswerSet::new();
    five.insert("C2", 5);
    let expect_high = compute_scores(&catalog, &five, OutOfRangePolicy::Reject).unwrap();
    assert_eq!(out_high.scores, expect_high.scores);
    assert_eq!(out_high.audit.adjusted, 1);

    let mut one = AnswerSet::new();
    one.insert("C2", 1);
    let expect_low = compute_scores(&catalog, &one, OutOfRangePolicy::Reject).unwrap();
    assert_eq!(out_low.scores, expect_low.scores);
}

#[test]
fn test_out_of_range_neutral() {
    let catalog = Catalog::builtin();
    let mut answers = AnswerSet::new();
    answers.insert("C2", 42);
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Neutral).unwrap();
    for (_, score) in out.scores.iter() {
        assert_eq!(score, 50.0);
    }
    assert_eq!(out.audit.adjusted, 1);
}

#[test]
fn test_unknown_ids_ignored_and_counted() {
    let catalog = Catalog::builtin();
    let mut answers = AnswerSet::new();
    answers.insert("Z99", 5);
    answers.insert("O1", 4);
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    assert_eq!(out.audit.ignored, 1);
    assert_eq!(out.audit.answered, 1);
    // Unknown id contributes nothing to any dimension.
    assert_eq!(out.scores.get(Dimension::Conscientiousness), 50.0);
}

#[test]
fn test_idempotence_bits() {
    let catalog = Catalog::builtin();
    let answers = answer_keyed(&catalog, 4, 2);
    let a = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    let b = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    for (x, y) in a.scores.values().iter().zip(b.scores.values()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(a.audit, b.audit);
}

#[test]
fn test_monotonicity_exhaustive() {
    let catalog = Catalog::builtin();
    for item in catalog.items() {
        for v in 1..5i64 {
            let mut lower = AnswerSet::new();
            lower.insert(item.id.clone(), v);
            let mut higher = AnswerSet::new();
            higher.insert(item.id.clone(), v + 1);
            let low = compute_scores(&catalog, &lower, OutOfRangePolicy::Reject).unwrap();
            let high = compute_scores(&catalog, &higher, OutOfRangePolicy::Reject).unwrap();
            let low_score = low.scores.get(item.dimension);
            let high_score = high.scores.get(item.dimension);
            if item.reverse {
                assert!(
                    high_score <= low_score,
                    "raising reverse item {} increased the score",
                    item.id
                );
            } else {
                assert!(
                    high_score >= low_score,
                    "raising direct item {} decreased the score",
                    item.id
                );
            }
        }
    }
}

#[test]
fn test_non_canonical_catalog_still_averages() {
    let items = vec![
        crate::catalog::CatalogItem {
            id: "O1".to_string(),
            dimension: Dimension::Openness,
            reverse: false,
            text: String::new(),
        },
        crate::catalog::CatalogItem {
            id: "C1".to_string(),
            dimension: Dimension::Conscientiousness,
            reverse: false,
            text: String::new(),
        },
        crate::catalog::CatalogItem {
            id: "E1".to_string(),
            dimension: Dimension::Extraversion,
            reverse: false,
            text: String::new(),
        },
        crate::catalog::CatalogItem {
            id: "A1".to_string(),
            dimension: Dimension::Agreeableness,
            reverse: false,
            text: String::new(),
        },
        crate::catalog::CatalogItem {
            id: "N1".to_string(),
            dimension: Dimension::EmotionalStability,
            reverse: true,
            text: String::new(),
        },
    ];
    let catalog = Catalog::from_items(items).unwrap();
    let mut answers = AnswerSet::new();
    answers.insert("O1", 5);
    answers.insert("N1", 5);
    let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
    assert_eq!(out.scores.get(Dimension::Openness), 100.0);
    assert_eq!(out.scores.get(Dimension::EmotionalStability), 0.0);
    assert_eq!(out.scores.get(Dimension::Extraversion), 50.0);
}

proptest! {
    #[test]
    fn prop_scores_in_range(values in proptest::collection::vec(1i64..=5, 50)) {
        let catalog = Catalog::builtin();
        let mut answers = AnswerSet::new();
        for (item, v) in catalog.items().iter().zip(values) {
            answers.insert(item.id.clone(), v);
        }
        let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
        for (_, score) in out.scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn prop_sparse_answers_in_range(
        picks in proptest::collection::btree_map(0usize..50, 1i64..=5, 0..50)
    ) {
        let catalog = Catalog::builtin();
        let mut answers = AnswerSet::new();
        for (idx, v) in picks {
            answers.insert(catalog.items()[idx].id.clone(), v);
        }
        let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Reject).unwrap();
        for (_, score) in out.scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn prop_clamp_never_fails(values in proptest::collection::vec(-10i64..=10, 50)) {
        let catalog = Catalog::builtin();
        let mut answers = AnswerSet::new();
        for (item, v) in catalog.items().iter().zip(values) {
            answers.insert(item.id.clone(), v);
        }
        let out = compute_scores(&catalog, &answers, OutOfRangePolicy::Clamp).unwrap();
        for (_, score) in out.scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
