// Tests for the split command

use crate::common::{test_config, TestSources};
use condense::cli::commands::split::{execute, SplitArgs};
use condense::cli::OutputFormat;
use condense::CondenseError;

fn args(file: std::path::PathBuf) -> SplitArgs {
    SplitArgs {
        file,
        max_chunk_size: None,
        overlap: None,
        boundary_window: None,
        content: false,
    }
}

#[tokio::test]
async fn test_split_with_config_defaults() {
    let sources = TestSources::new();
    let file = sources.write("notes.txt", &"word ".repeat(40));

    let result = execute(args(file), &test_config(), OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_split_json_with_content() {
    let sources = TestSources::new();
    let file = sources.write("notes.txt", "AAAAABBBBBCCCCCDDDDD");

    let split = SplitArgs {
        max_chunk_size: Some(10),
        overlap: Some(2),
        boundary_window: Some(0),
        content: true,
        ..args(file)
    };
    let result = execute(split, &test_config(), OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_split_invalid_overlap() {
    let sources = TestSources::new();
    let file = sources.write("notes.txt", "text");

    let split = SplitArgs {
        overlap: Some(40),
        ..args(file)
    };
    let err = execute(split, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    let err = err.downcast_ref::<CondenseError>().unwrap();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_split_missing_file() {
    let sources = TestSources::new();
    let result = execute(
        args(sources.path("absent.txt")),
        &test_config(),
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_split_and_run_window_alike() {
    use condense::cli::commands::run::RunArgs;
    use condense::core::splitter::WindowSplitter;
    use condense::Pipeline;

    let mut config = test_config();
    config.chunking.boundary_window = 500;
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu ".repeat(3);

    // What `split` builds for --max-chunk-size 30
    let splitter = WindowSplitter::new(30, config.chunking.overlap)
        .unwrap()
        .with_boundary_window(config.chunking.boundary_window);

    // What `run` builds for the same flag
    let run_args = RunArgs {
        max_chunk_size: Some(30),
        ..RunArgs::default()
    };
    let pipeline = Pipeline::new(run_args.options(&config)).unwrap();

    assert_eq!(splitter.boundary_window(), 29);
    assert_eq!(splitter.split(&text), pipeline.splitter().split(&text));

    let sources = TestSources::new();
    let file = sources.write("notes.txt", &text);
    let split = SplitArgs {
        max_chunk_size: Some(30),
        ..args(file)
    };
    assert!(execute(split, &config, OutputFormat::Human).await.is_ok());
}
