// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, RUST_LOG controls the level)
// 2. Parse command-line arguments into a MonitorConfig
// 3. Run the report against the real Search Console client
// 4. Exit with proper code (0 = report printed, 2 = fatal error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod auth;    // src/auth/ - service-account authentication
mod cli;     // src/cli.rs - command-line parsing
mod config;  // src/config.rs - the run's configuration
mod error;   // src/error.rs - typed errors
mod inspect; // src/inspect/ - URL Inspection API client
mod report;  // src/report.rs - the report generator

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::MonitorConfig;
use env_logger::Env;
use inspect::SearchConsoleClient;
use report::ReportFormat;

use anyhow::Result;
use std::io::Write;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with the report on stdout
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            report::FATAL_EXIT_CODE
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = report printed (whatever the verdicts)
//   Ok(2) = fatal error, already printed
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = MonitorConfig::from(&cli);
    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    log::debug!("Running with {:?}", config);

    let api_base = cli.api_base.clone();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = report::run(
        &config,
        move |credentials| async move { SearchConsoleClient::connect(&credentials, &api_base).await },
        format,
        &mut out,
    )
    .await;

    out.flush()?;
    Ok(code)
}
