// Tests for the rank command

use crate::common::{test_config, TestSources};
use condense::cli::commands::rank::{execute, RankArgs};
use condense::cli::OutputFormat;
use condense::CondenseError;

#[tokio::test]
async fn test_rank_posts_json() {
    let sources = TestSources::standard();
    let args = RankArgs {
        file: sources.path("posts.json"),
        limit: Some(2),
        include_derivative: false,
    };

    let result = execute(args, &test_config(), OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rank_jsonl_human() {
    let sources = TestSources::new();
    let file = sources.write(
        "comments.jsonl",
        "{\"text\": \"first\", \"score\": 1}\n\n{\"text\": \"second\", \"favorite_count\": 4}\n",
    );
    let args = RankArgs {
        file,
        limit: None,
        include_derivative: true,
    };

    let result = execute(args, &test_config(), OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rank_rejects_record_without_score() {
    let sources = TestSources::new();
    let file = sources.write("bad.jsonl", "{\"text\": \"x\"}\n");
    let args = RankArgs {
        file,
        limit: None,
        include_derivative: false,
    };

    let err = execute(args, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    let err = err.downcast_ref::<CondenseError>().unwrap();
    assert!(err.is_validation());
}
