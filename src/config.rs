// src/config.rs
// =============================================================================
// The configuration of one monitoring run.
//
// Everything the report needs is carried in MonitorConfig and passed in
// explicitly, so tests can build their own fixtures.
// =============================================================================

use crate::error::MonitorError;
use std::path::PathBuf;
use url::Url;

/// Root URL of the monitored site (with `www`, matching what is indexed)
pub const DEFAULT_SITE_URL: &str = "https://www.ghostmeta.online/";

/// Service-account key looked up in the working directory
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";

/// Locale sent with each inspection request
pub const DEFAULT_LANGUAGE_CODE: &str = "fr-FR";

/// Pages watched by default; the empty string is the home page
pub const DEFAULT_PAGES: &[&str] = &[
    "",
    "blog/vinted-securite-photo-guide",
    "blog/supprimer-exif-iphone-android",
    "blog/comprendre-donnees-exif-gps",
    "blog/nettoyage-photo-local-vs-cloud",
    "blog/ghostmeta-manifeste-confidentialite",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub site_url: String,
    /// Relative paths, inspected and printed in this order
    pub pages: Vec<String>,
    pub credentials_path: PathBuf,
    pub language_code: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            site_url: DEFAULT_SITE_URL.to_string(),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}

impl MonitorConfig {
    /// Checks that the site URL can be used as a prefix for page paths
    pub fn validate(&self) -> Result<(), MonitorError> {
        let parsed = Url::parse(&self.site_url).map_err(|e| {
            MonitorError::InvalidConfig(format!("site URL '{}': {}", self.site_url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MonitorError::InvalidConfig(format!(
                "site URL must use http or https: {}",
                self.site_url
            )));
        }

        // Pages are appended verbatim, so the root needs its trailing slash
        if !self.site_url.ends_with('/') {
            return Err(MonitorError::InvalidConfig(format!(
                "site URL must end with '/': {}",
                self.site_url
            )));
        }

        if self.language_code.trim().is_empty() {
            return Err(MonitorError::InvalidConfig(
                "language code cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Fully-qualified URL of a page: plain concatenation with the site URL
    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.site_url, page)
    }
}

/// How a page is named in the report; the root page shows as "/"
pub fn display_page(page: &str) -> &str {
    if page.is_empty() {
        "/"
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MonitorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.pages[0], "");
    }

    #[test]
    fn test_page_url_concatenates() {
        let config = MonitorConfig::default();
        assert_eq!(config.page_url(""), "https://www.ghostmeta.online/");
        assert_eq!(
            config.page_url("blog/comprendre-donnees-exif-gps"),
            "https://www.ghostmeta.online/blog/comprendre-donnees-exif-gps"
        );
    }

    #[test]
    fn test_reject_missing_trailing_slash() {
        let config = MonitorConfig {
            site_url: "https://example.com/blog".to_string(),
            ..MonitorConfig::default()
        };
        assert!(matches!(config.validate(), Err(MonitorError::InvalidConfig(_))));
    }

    #[test]
    fn test_reject_non_http_scheme() {
        let config = MonitorConfig {
            site_url: "ftp://example.com/".to_string(),
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_display_root_page() {
        assert_eq!(display_page(""), "/");
        assert_eq!(display_page("blog/a"), "blog/a");
    }
}
