// Tests for configuration loading and the show-config command

use crate::common::{test_config, TestSources};
use condense::cli::commands::config::{execute, ConfigArgs};
use condense::cli::OutputFormat;
use condense::core::config::Config;
use condense::core::xdg::XdgDirs;
use serial_test::serial;
use std::env;

#[tokio::test]
async fn test_show_config_formats() {
    let config = test_config();
    assert!(execute(ConfigArgs::default(), &config, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute(ConfigArgs::default(), &config, OutputFormat::Json)
        .await
        .is_ok());
    assert!(execute(ConfigArgs { toml: true }, &config, OutputFormat::Human)
        .await
        .is_ok());
}

#[test]
fn test_toml_output_parses_back() {
    let config = test_config();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.chunking.max_chunk_size, 40);
    assert_eq!(parsed.processing.concurrency, 2);
}

#[test]
#[serial]
fn test_load_from_xdg_dir_with_env_override() {
    let sources = TestSources::new();
    sources.write(
        "config.toml",
        "[chunking]\nmax_chunk_size = 500\noverlap = 50\n\n[ranking]\nlimit = 3\n",
    );

    env::remove_var("CONDENSE_CONFIG");
    env::set_var("CONDENSE_OVERLAP", "25");

    let xdg = XdgDirs::with_config_dir(sources.root().to_path_buf());
    let config = Config::load_with_xdg(&xdg);

    env::remove_var("CONDENSE_OVERLAP");

    let config = config.unwrap();
    assert_eq!(config.chunking.max_chunk_size, 500);
    assert_eq!(config.chunking.overlap, 25);
    assert_eq!(config.ranking.limit, 3);
}

#[test]
#[serial]
fn test_load_rejects_invalid_file() {
    let sources = TestSources::new();
    sources.write(
        "config.toml",
        "[chunking]\nmax_chunk_size = 10\noverlap = 10\n",
    );

    env::remove_var("CONDENSE_CONFIG");
    let xdg = XdgDirs::with_config_dir(sources.root().to_path_buf());
    let err = Config::load_with_xdg(&xdg).unwrap_err();
    assert!(err.is_configuration());
}
