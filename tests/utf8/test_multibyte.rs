// Multi-byte text through the splitter and the pipeline

use std::sync::Arc;

use crate::common::{reconstruct, small_options, TestSources};
use condense::core::aggregator::SourceKind;
use condense::core::processor::transform_fn;
use condense::core::splitter::WindowSplitter;
use condense::sources::load_text;
use condense::{Pipeline, SourceInput};

const MIXED: &str = "Hello 世界! 🦀 Rust 🎉 は素晴らしい。\n\nΚαλημέρα κόσμε, ça va? 👨‍👩‍👧 family.";

#[test]
fn test_every_window_is_valid_utf8() {
    for max in 1..=12 {
        for overlap in 0..max {
            for window in [0, max / 2] {
                let splitter = WindowSplitter::new(max, overlap)
                    .unwrap()
                    .with_boundary_window(window);
                for chunk in splitter.windows(MIXED) {
                    assert!(MIXED.is_char_boundary(chunk.byte_start));
                    assert!(MIXED.is_char_boundary(chunk.byte_end));
                    assert!(chunk.content.chars().count() <= max);
                }
            }
        }
    }
}

#[test]
fn test_emoji_only_corpus() {
    let corpus = "🦀".repeat(25);
    let splitter = WindowSplitter::new(10, 3).unwrap();
    let chunks = splitter.split(&corpus);

    assert_eq!(chunks[0].content, "🦀".repeat(10));
    assert_eq!(chunks[0].byte_end, 40);
    assert_eq!(reconstruct(&chunks, 3), corpus);
}

#[tokio::test]
async fn test_pipeline_over_multibyte_file() {
    let sources = TestSources::new();
    let path = sources.write("page.txt", &MIXED.repeat(3));
    let text = load_text(&path).unwrap();

    let pipeline = Pipeline::new(small_options(16, 0)).unwrap();
    let output = pipeline
        .run(
            vec![SourceInput::Text {
                kind: SourceKind::Web,
                text,
            }],
            Arc::new(transform_fn(|t: &str| Ok(t.to_string()))),
        )
        .await
        .unwrap();

    // Zero overlap and identity transform: joining only adds separators
    let expected_chars = MIXED.repeat(3).chars().count() + output.stats.chunks - 1;
    assert_eq!(output.text.chars().count(), expected_chars);
}
