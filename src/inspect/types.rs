// src/inspect/types.rs
// =============================================================================
// Request and response shapes of the URL Inspection API (v1).
//
// Only the index status part of the response is modelled. Every field is
// optional on the wire; missing values get report defaults when converted
// into an InspectionResult.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /v1/urlInspection/index:inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRequest {
    pub inspection_url: String,
    pub site_url: String,
    pub language_code: String,
}

/// Indexing outcome reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Indexed
    Pass,
    /// Reserved, no longer used by the API
    Partial,
    /// Not indexed, or indexed with errors
    Fail,
    /// Excluded from the index on purpose (noindex, redirect, ...)
    Neutral,
    VerdictUnspecified,
    /// Missing or unrecognised value
    #[serde(other)]
    Unknown,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Partial => "PARTIAL",
            Verdict::Fail => "FAIL",
            Verdict::Neutral => "NEUTRAL",
            Verdict::VerdictUnspecified => "VERDICT_UNSPECIFIED",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectUrlIndexResponse {
    pub inspection_result: Option<UrlInspectionResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlInspectionResult {
    pub index_status_result: Option<IndexStatusResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatusResult {
    pub verdict: Option<Verdict>,
    pub coverage_state: Option<String>,
    pub last_crawl_time: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// The indexing status of one page, as printed in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionResult {
    pub verdict: Verdict,
    pub coverage_state: String,
    /// None when the page was never crawled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_crawl_time: Option<String>,
}

pub const DEFAULT_COVERAGE_STATE: &str = "not indexed";

impl From<InspectUrlIndexResponse> for InspectionResult {
    fn from(response: InspectUrlIndexResponse) -> Self {
        let status = response
            .inspection_result
            .and_then(|r| r.index_status_result)
            .unwrap_or_default();

        InspectionResult {
            verdict: status.verdict.unwrap_or(Verdict::Unknown),
            coverage_state: status
                .coverage_state
                .unwrap_or_else(|| DEFAULT_COVERAGE_STATE.to_string()),
            last_crawl_time: status.last_crawl_time,
        }
    }
}
