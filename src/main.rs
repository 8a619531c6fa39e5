//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `fonts_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Report output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use fonts_check::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, HOME_URL_ENV};
use fonts_check::initialization::init_logger_with;
use fonts_check::{
    check_captured, normalize_home_url, report, run_check, CaptureCache, CapturedPage,
    CheckResult, Config, HttpFetcher, LogFormat, LogLevel, OutputFormat,
};

/// Exit code when at least one Google Fonts reference was found.
const EXIT_FOUND: i32 = 2;

/// Checks a page for Google Fonts dependencies.
#[derive(Debug, Parser)]
#[command(name = "fonts_check", version, about)]
struct Cli {
    /// HTML file to check, or `-` to read from stdin
    file: PathBuf,

    /// Site home URL; only stylesheets on this host are fetched
    #[arg(long, env = HOME_URL_ENV)]
    home_url: String,

    /// Treat the input as a real-browser capture of this page
    #[arg(long)]
    captured_url: Option<String>,

    /// Per-stylesheet fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Verify TLS certificates when fetching stylesheets
    #[arg(long)]
    verify_tls: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            verify_tls: self.verify_tls,
        }
    }
}

/// Reads the page as bytes. Invalid UTF-8 (Latin-1 saves and the like) is
/// replaced rather than rejected.
fn read_input(file: &PathBuf) -> Result<String> {
    let bytes = if file.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read HTML from stdin")?;
        bytes
    } else {
        std::fs::read(file)
            .with_context(|| format!("Failed to read HTML file {}", file.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn check(cli: &Cli, config: &Config, home_url: &str) -> Result<CheckResult> {
    let html = read_input(&cli.file)?;
    let fetcher = HttpFetcher::new(config).context("Failed to initialize HTTP client")?;

    let result = match &cli.captured_url {
        Some(captured_url) => {
            let cache = CaptureCache::default();
            cache.store(CapturedPage::new(html, captured_url.clone()));
            check_captured(&cache, home_url, &fetcher)?
        }
        None => run_check(&html, home_url, &fetcher)?,
    };
    Ok(result)
}

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so FONTS_CHECK_HOME_URL can be set per project
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(home_url) = normalize_home_url(&cli.home_url) else {
        eprintln!("fonts_check error: invalid home URL '{}'", cli.home_url);
        process::exit(1);
    };

    match check(&cli, &config, &home_url) {
        Ok(result) => {
            match cli.format {
                OutputFormat::Plain => print!("{}", report::render_plain(&result, &home_url)),
                OutputFormat::Json => println!(
                    "{}",
                    report::render_json(&result).context("Failed to serialize report")?
                ),
            }
            if result.found {
                process::exit(EXIT_FOUND);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("fonts_check error: {:#}", e);
            process::exit(1);
        }
    }
}
