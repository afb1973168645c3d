// Tests for the run command

use crate::common::{test_config, TestSources};
use condense::cli::commands::run::{execute, RunArgs};
use condense::cli::OutputFormat;
use condense::core::prompt::OutputKind;
use condense::{CondenseError, Pipeline};

fn condense_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a CondenseError {
    err.downcast_ref::<CondenseError>()
        .expect("expected a CondenseError")
}

#[tokio::test]
async fn test_run_dry_run_all_sources() {
    let sources = TestSources::standard();
    let args = RunArgs {
        posts: Some(sources.path("posts.json")),
        web: Some(sources.path("page.txt")),
        transcript: Some(sources.path("transcript.json")),
        dry_run: true,
        ..RunArgs::default()
    };

    let result = execute(args, &test_config(), OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_run_without_transform_is_config_error() {
    let sources = TestSources::standard();
    let args = RunArgs {
        web: Some(sources.path("page.txt")),
        ..RunArgs::default()
    };

    let err = execute(args, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(condense_error(err.as_ref()).is_configuration());
}

#[tokio::test]
async fn test_run_rejects_overlap_at_chunk_size() {
    let sources = TestSources::standard();
    let args = RunArgs {
        web: Some(sources.path("page.txt")),
        max_chunk_size: Some(10),
        overlap: Some(10),
        dry_run: true,
        ..RunArgs::default()
    };

    let err = execute(args, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(condense_error(err.as_ref()).is_configuration());
}

#[tokio::test]
async fn test_run_without_sources_fails() {
    let args = RunArgs {
        dry_run: true,
        ..RunArgs::default()
    };

    let err = execute(args, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(matches!(
        condense_error(err.as_ref()),
        CondenseError::SourceError(_)
    ));
}

#[test]
fn test_options_clamp_boundary_window() {
    let mut config = test_config();
    config.chunking.boundary_window = 500;
    let args = RunArgs {
        max_chunk_size: Some(30),
        include_derivative: true,
        ..RunArgs::default()
    };

    let options = args.options(&config);
    assert_eq!(options.max_chunk_size, 30);
    assert!(!options.exclude_derivative);

    let pipeline = Pipeline::new(options).unwrap();
    assert_eq!(pipeline.splitter().boundary_window(), 29);
}

#[test]
fn test_transform_prefers_cli_command() {
    let mut config = test_config();
    config.transform.command = Some(vec!["does-not-run".to_string()]);
    config.transform.output_kind = OutputKind::Presentation;
    let args = RunArgs {
        command: vec!["cat".to_string()],
        no_prompt: true,
        ..RunArgs::default()
    };

    assert!(args.transform(&config).is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_through_cat() {
    let sources = TestSources::standard();
    let args = RunArgs {
        posts: Some(sources.path("posts.json")),
        transcript: Some(sources.path("transcript.json")),
        concurrency: Some(3),
        no_prompt: true,
        command: vec!["cat".to_string()],
        ..RunArgs::default()
    };

    let result = execute(args, &test_config(), OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_failing_command_reports_chunk() {
    let sources = TestSources::standard();
    let args = RunArgs {
        web: Some(sources.path("page.txt")),
        no_prompt: true,
        command: vec!["sh".to_string(), "-c".to_string(), "exit 7".to_string()],
        ..RunArgs::default()
    };

    let err = execute(args, &test_config(), OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(condense_error(err.as_ref()).chunk_index(), Some(0));
}
