// Ranker properties over generated item lists

use crate::common::sample_posts;
use condense::core::ranker::{rank, ItemRanker};
use condense::SourceItem;

/// Deterministic mix of scores, ties and derivative items
fn generated(n: usize) -> Vec<SourceItem> {
    (0..n)
        .map(|i| {
            let score = ((i * 37) % 11) as f64;
            let text = format!("item-{i}");
            if i % 4 == 1 {
                SourceItem::derivative(text, score)
            } else {
                SourceItem::new(text, score)
            }
        })
        .collect()
}

#[test]
fn test_output_length_is_min_of_limit_and_kept() {
    for n in [0, 1, 5, 12, 40] {
        for limit in [0, 1, 3, 10, 100] {
            for exclude in [true, false] {
                let items = generated(n);
                let eligible = items
                    .iter()
                    .filter(|i| !(exclude && i.is_derivative))
                    .count();

                let ranked = rank(items, exclude, limit).unwrap();
                assert_eq!(ranked.len(), limit.min(eligible));
            }
        }
    }
}

#[test]
fn test_output_sorted_descending() {
    let ranked = rank(generated(40), false, 40).unwrap();
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_no_derivative_when_excluded() {
    let ranked = rank(generated(40), true, 40).unwrap();
    assert!(ranked.iter().all(|item| !item.is_derivative));
}

#[test]
fn test_ties_follow_input_order() {
    let ranked = rank(generated(40), true, 40).unwrap();
    for pair in ranked.windows(2) {
        if pair[0].score == pair[1].score {
            let a: usize = pair[0].text["item-".len()..].parse().unwrap();
            let b: usize = pair[1].text["item-".len()..].parse().unwrap();
            assert!(a < b);
        }
    }
}

#[test]
fn test_scenario_three_posts() {
    let ranked = ItemRanker::new(2, true).rank(sample_posts()).unwrap();
    let texts: Vec<&str> = ranked.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a"]);
}
