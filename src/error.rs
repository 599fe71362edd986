// src/error.rs
// =============================================================================
// Typed errors for the whole tool.
//
// There are two severities:
// - fatal: the run stops (missing credentials, bad config, auth failure)
// - warning: one page could not be inspected, the run continues
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error from the attributes
// - From impls: let the ? operator convert library errors for us
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    /// The service-account key file does not exist
    #[error("credential file '{}' is missing", path.display())]
    CredentialsMissing { path: PathBuf },

    /// The key file exists but could not be read or parsed
    #[error("invalid credential file: {0}")]
    CredentialsInvalid(String),

    /// Token exchange failed (revoked key, network failure, ...)
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A single inspection request failed
    #[error("inspection of '{page}' failed: {reason}")]
    InspectionFailed { page: String, reason: String },

    /// Writing the report itself failed
    #[error("could not write report: {0}")]
    Output(#[from] io::Error),
}

impl MonitorError {
    /// True when the error ends the run; only a single page failure does not
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MonitorError::InspectionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_page_failures_are_warnings() {
        let fatal = vec![
            MonitorError::CredentialsMissing {
                path: PathBuf::from("credentials.json"),
            },
            MonitorError::CredentialsInvalid("bad json".to_string()),
            MonitorError::AuthFailed("invalid_grant".to_string()),
            MonitorError::InvalidConfig("site URL".to_string()),
            MonitorError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
        ];
        for error in &fatal {
            assert!(error.is_fatal(), "{} should be fatal", error);
        }

        let page = MonitorError::InspectionFailed {
            page: "https://example.com/blog/a".to_string(),
            reason: "HTTP 500".to_string(),
        };
        assert!(!page.is_fatal());
    }

    #[test]
    fn test_inspection_failure_message() {
        let page = MonitorError::InspectionFailed {
            page: "https://example.com/blog/a".to_string(),
            reason: "HTTP 500".to_string(),
        };
        assert_eq!(
            page.to_string(),
            "inspection of 'https://example.com/blog/a' failed: HTTP 500"
        );
    }

    #[test]
    fn test_missing_message_names_path() {
        let missing = MonitorError::CredentialsMissing {
            path: PathBuf::from("keys/sa.json"),
        };
        assert_eq!(missing.to_string(), "credential file 'keys/sa.json' is missing");
    }
}
