// Splitter properties over a spread of corpora and parameters

use crate::common::reconstruct;
use condense::core::splitter::{split, WindowSplitter};

fn corpora() -> Vec<String> {
    vec![
        String::new(),
        "a".to_string(),
        "AAAAABBBBBCCCCCDDDDD".to_string(),
        "The quick brown fox jumps over the lazy dog.\n\nIt was not amused. ".repeat(7),
        "中文测试字符串 with mixed 🦀 emoji 🎉 and accents: héllo wörld. ".repeat(5),
        "x".repeat(257),
        "line one\nline two\n\nparagraph two\nand more words here\n".repeat(4),
    ]
}

fn params() -> Vec<(usize, usize)> {
    vec![(1, 0), (3, 1), (7, 0), (10, 2), (16, 15), (32, 8), (100, 50), (1000, 10)]
}

#[test]
fn test_chunks_reconstruct_corpus() {
    for corpus in corpora() {
        for (max, overlap) in params() {
            let chunks = split(&corpus, max, overlap).unwrap();
            assert_eq!(
                reconstruct(&chunks, overlap),
                corpus,
                "max={max} overlap={overlap}"
            );
        }
    }
}

#[test]
fn test_snapped_chunks_reconstruct_corpus() {
    for corpus in corpora() {
        for (max, overlap) in params() {
            for window in [1, 5, max.saturating_sub(1)] {
                let splitter = WindowSplitter::new(max, overlap)
                    .unwrap()
                    .with_boundary_window(window);
                let chunks = splitter.split(&corpus);
                assert_eq!(reconstruct(&chunks, overlap), corpus);
            }
        }
    }
}

#[test]
fn test_chunk_invariants() {
    for corpus in corpora() {
        let total = corpus.chars().count();
        for (max, overlap) in params() {
            let splitter = WindowSplitter::new(max, overlap)
                .unwrap()
                .with_boundary_window(max / 2);
            let chunks = splitter.split(&corpus);

            if total == 0 {
                assert!(chunks.is_empty());
                continue;
            }

            assert_eq!(chunks[0].start, 0);
            assert_eq!(chunks.last().unwrap().end, total);

            for chunk in &chunks {
                assert!(chunk.char_len() <= max);
                assert!(chunk.char_len() > 0);
                assert_eq!(chunk.content.chars().count(), chunk.char_len());
                assert_eq!(&corpus[chunk.byte_start..chunk.byte_end], chunk.content);
            }
            for pair in chunks.windows(2) {
                assert_eq!(pair[1].start, pair[0].end - overlap);
                assert_eq!(pair[1].index, pair[0].index + 1);
            }
        }
    }
}

#[test]
fn test_zero_overlap_lengths_sum_to_corpus() {
    for corpus in corpora() {
        for max in [1, 4, 9, 64] {
            let chunks = split(&corpus, max, 0).unwrap();
            let sum: usize = chunks.iter().map(|c| c.char_len()).sum();
            assert_eq!(sum, corpus.chars().count());
            for pair in chunks.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }
}

#[test]
fn test_short_corpus_is_one_chunk() {
    let corpus = "fits in one window";
    let chunks = split(corpus, corpus.chars().count(), 3).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, corpus);
}

#[test]
fn test_split_twice_is_identical() {
    for corpus in corpora() {
        let splitter = WindowSplitter::new(32, 8).unwrap().with_boundary_window(12);
        assert_eq!(splitter.split(&corpus), splitter.split(&corpus));
    }
}

#[test]
fn test_scenario_twenty_chars() {
    let chunks = split("AAAAABBBBBCCCCCDDDDD", 10, 2).unwrap();
    let spans: Vec<(usize, usize)> = chunks.iter().map(|c| (c.start, c.end)).collect();
    assert_eq!(spans, vec![(0, 10), (8, 18), (16, 20)]);
}

#[test]
fn test_invalid_parameters() {
    assert!(split("abc", 0, 0).unwrap_err().is_configuration());
    assert!(split("abc", 5, 5).unwrap_err().is_configuration());
    assert!(split("abc", 5, 9).unwrap_err().is_configuration());
}
