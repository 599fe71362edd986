// src/report.rs
// =============================================================================
// The report generator.
//
// What happens here:
// 1. Check that the credential file exists, then the configuration
// 2. Connect (authenticate) once through the given connector
// 3. Inspect every page in order, one request at a time
// 4. Print a coloured status line per page, with details for non-PASS pages
//
// A failed page only produces a warning; a fatal error ends the run with a
// single message.
// =============================================================================

use crate::config::{display_page, MonitorConfig};
use crate::error::MonitorError;
use crate::inspect::{IndexInspector, InspectionRequest, InspectionResult, Verdict, BODY_MARKER};
use serde::Serialize;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Longest error summary shown in a warning line
const MAX_ERROR_SUMMARY: usize = 120;

/// Exit code of a run that ended on a fatal error
pub const FATAL_EXIT_CODE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Coloured lines, printed as each page completes
    Text,
    /// One JSON array printed after the last page
    Json,
}

/// Outcome for a single page
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectionResult>,
    /// Warning text when the inspection failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs the whole report and returns the process exit code
///
/// `connect` receives the credential path and is only called once the file
/// is known to exist.
pub async fn run<C, Fut, I, W>(
    config: &MonitorConfig,
    connect: C,
    format: ReportFormat,
    out: &mut W,
) -> i32
where
    C: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<I, MonitorError>>,
    I: IndexInspector,
    W: Write,
{
    match generate(config, connect, format, out).await {
        Ok(reports) => {
            let warnings = reports.iter().filter(|r| r.error.is_some()).count();
            log::info!("Inspected {} page(s), {} warning(s)", reports.len(), warnings);
            0
        }
        Err(e) => {
            debug_assert!(e.is_fatal());
            if let Err(write_err) = render_fatal(&e, out) {
                log::error!("could not print fatal error '{}': {}", e, write_err);
            }
            FATAL_EXIT_CODE
        }
    }
}

/// Produces the report, returning the per-page outcomes
///
/// Errors returned here are fatal; per-page failures are part of the Ok value.
pub async fn generate<C, Fut, I, W>(
    config: &MonitorConfig,
    connect: C,
    format: ReportFormat,
    out: &mut W,
) -> Result<Vec<PageReport>, MonitorError>
where
    C: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<I, MonitorError>>,
    I: IndexInspector,
    W: Write,
{
    check_credentials(config)?;
    config.validate()?;

    let inspector = connect(config.credentials_path.clone()).await?;

    if format == ReportFormat::Text {
        write_banner(config, out)?;
    }

    let mut reports = Vec::with_capacity(config.pages.len());

    for page in &config.pages {
        let request = InspectionRequest {
            inspection_url: config.page_url(page),
            site_url: config.site_url.clone(),
            language_code: config.language_code.clone(),
        };

        // Any error from a single request is a warning, never a reason to stop
        let report = match inspector.inspect(&request).await {
            Ok(result) => {
                if format == ReportFormat::Text {
                    write_status(page, &result, out)?;
                }
                PageReport {
                    page: page.clone(),
                    url: request.inspection_url,
                    result: Some(result),
                    error: None,
                }
            }
            Err(e) => {
                debug_assert!(!e.is_fatal(), "inspector returned a fatal error: {}", e);
                log::debug!("inspection of '{}' failed: {}", request.inspection_url, e);
                let summary = summarize_error(&failure_reason(&e));
                if format == ReportFormat::Text {
                    write_warning(page, &summary, out)?;
                }
                PageReport {
                    page: page.clone(),
                    url: request.inspection_url,
                    result: None,
                    error: Some(summary),
                }
            }
        };

        reports.push(report);
    }

    if format == ReportFormat::Json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| MonitorError::Output(e.into()))?;
        writeln!(out, "{}", json)?;
    }

    Ok(reports)
}

/// The only precondition checked before authenticating
pub fn check_credentials(config: &MonitorConfig) -> Result<(), MonitorError> {
    if config.credentials_path.exists() {
        Ok(())
    } else {
        Err(MonitorError::CredentialsMissing {
            path: config.credentials_path.clone(),
        })
    }
}

fn write_banner<W: Write>(config: &MonitorConfig, out: &mut W) -> Result<(), MonitorError> {
    let today = chrono::Local::now().date_naive();
    writeln!(out)?;
    writeln!(out, "[INDEX SENTRY] --- INDEXING REPORT: {} ---", today)?;
    writeln!(out, "Target: {}", config.site_url)?;
    writeln!(out)?;
    Ok(())
}

fn write_status<W: Write>(
    page: &str,
    result: &InspectionResult,
    out: &mut W,
) -> Result<(), MonitorError> {
    let color = match result.verdict {
        Verdict::Pass => GREEN,
        _ => RED,
    };
    writeln!(out, "{}● [{}]{} {}", color, result.verdict, RESET, display_page(page))?;

    if !result.verdict.is_pass() {
        writeln!(out, "  └─ State: {}", result.coverage_state)?;
        if let Some(last_crawl) = &result.last_crawl_time {
            writeln!(out, "  └─ Last crawl: {}", last_crawl)?;
        }
    }
    Ok(())
}

fn write_warning<W: Write>(page: &str, summary: &str, out: &mut W) -> Result<(), MonitorError> {
    writeln!(
        out,
        "{}[WARN]{} Error on {}: {}...",
        YELLOW,
        RESET,
        display_page(page),
        summary
    )?;
    Ok(())
}

/// Prints the single message of a fatal error
pub fn render_fatal<W: Write>(error: &MonitorError, out: &mut W) -> std::io::Result<()> {
    match error {
        MonitorError::CredentialsMissing { path } => {
            writeln!(
                out,
                "{}[CRITICAL ERROR]{} Credential file '{}' is missing.",
                RED,
                RESET,
                path.display()
            )?;
            writeln!(
                out,
                "Action required: place the service-account JSON key at that path."
            )
        }
        other => writeln!(out, "{}[FATAL]{} Global error: {}", RED, RESET, other),
    }
}

fn failure_reason(error: &MonitorError) -> String {
    match error {
        MonitorError::InspectionFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

// Keeps the part before the echoed response body, first line only
fn summarize_error(text: &str) -> String {
    let head = text.split(BODY_MARKER).next().unwrap_or(text);
    let head = head.lines().next().unwrap_or("").trim_end();
    head.chars().take(MAX_ERROR_SUMMARY).collect()
}
