//! Tests for CLI argument parsing and exit codes.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use fonts_check::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};
use fonts_check::{LogFormat, LogLevel, OutputFormat};
use tempfile::NamedTempFile;

// main.rs is not importable, so this mirrors its argument definitions
#[derive(Debug, clap::Parser)]
#[command(name = "fonts_check")]
struct TestCli {
    file: PathBuf,
    #[arg(long)]
    home_url: String,
    #[arg(long)]
    captured_url: Option<String>,
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout_seconds: u64,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    #[arg(long)]
    verify_tls: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[test]
fn test_defaults() {
    let cli = TestCli::try_parse_from([
        "fonts_check",
        "page.html",
        "--home-url",
        "https://example.com",
    ])
    .unwrap();

    assert_eq!(cli.file, PathBuf::from("page.html"));
    assert_eq!(cli.home_url, "https://example.com");
    assert_eq!(cli.captured_url, None);
    assert_eq!(cli.timeout_seconds, 20);
    assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);
    assert!(!cli.verify_tls);
    assert_eq!(cli.format, OutputFormat::Plain);
    assert!(matches!(cli.log_level, LogLevel::Warn));
    assert!(matches!(cli.log_format, LogFormat::Plain));
}

#[test]
fn test_all_options() {
    let cli = TestCli::try_parse_from([
        "fonts_check",
        "-",
        "--home-url",
        "https://example.com",
        "--captured-url",
        "https://example.com/blog/",
        "--timeout-seconds",
        "5",
        "--user-agent",
        "custom/1.0",
        "--verify-tls",
        "--format",
        "json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.file.as_os_str(), "-");
    assert_eq!(cli.captured_url.as_deref(), Some("https://example.com/blog/"));
    assert_eq!(cli.timeout_seconds, 5);
    assert_eq!(cli.user_agent, "custom/1.0");
    assert!(cli.verify_tls);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.log_level, LogLevel::Debug));
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_format_rejected() {
    let result = TestCli::try_parse_from([
        "fonts_check",
        "page.html",
        "--home-url",
        "https://example.com",
        "--format",
        "xml",
    ]);
    assert!(result.is_err());
}

fn write_html(html: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(html.as_bytes())
        .expect("Failed to write HTML");
    file.flush().expect("Failed to flush file");
    file
}

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fonts_check"))
        .args(args)
        .env_remove("FONTS_CHECK_HOME_URL")
        .output()
        .expect("Failed to run fonts_check")
}

// The pages below link no same-domain stylesheets, so no request is made.

#[test]
fn test_exit_code_clean_page() {
    let file = write_html("<html><head><title>Plain</title></head></html>");
    let path = file.path().to_string_lossy().to_string();

    let output = run_binary(&[&path, "--home-url", "https://example.com"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("No Google Fonts detected!"));
}

#[test]
fn test_exit_code_fonts_found_json() {
    let file = write_html(
        r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#,
    );
    let path = file.path().to_string_lossy().to_string();

    let output = run_binary(&[&path, "--home-url", "example.com", "--format", "json"]);

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["found"], true);
    assert_eq!(value["references"][0]["type"], "html_link");
    assert_eq!(value["references"][0]["url"], "https://fonts.gstatic.com");
}

#[test]
fn test_non_utf8_page_still_scanned() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"<title>Caf\xe9</title>")
        .expect("Failed to write HTML");
    file.write_all(br#"<link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Roboto">"#)
        .expect("Failed to write HTML");
    file.flush().expect("Failed to flush file");
    let path = file.path().to_string_lossy().to_string();

    let output = run_binary(&[&path, "--home-url", "https://example.com", "--format", "json"]);

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["references"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["references"][0]["type"], "html_link");
    assert_eq!(
        value["references"][0]["url"],
        "https://fonts.googleapis.com/css?family=Roboto"
    );
}

#[test]
fn test_exit_code_invalid_home_url() {
    let file = write_html("<html></html>");
    let path = file.path().to_string_lossy().to_string();

    let output = run_binary(&[&path, "--home-url", "ftp://example.com"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exit_code_missing_file() {
    let output = run_binary(&[
        "/nonexistent/fonts_check/page.html",
        "--home-url",
        "https://example.com",
    ]);

    assert_eq!(output.status.code(), Some(1));
}
