// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every argument has a default, so `index-sentry` with no arguments checks
// the built-in site with ./credentials.json. The flags only exist to point
// the same report at another site, key file or page list.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct
// - From: converting the parsed arguments into our MonitorConfig
// =============================================================================

use crate::config::{
    MonitorConfig, DEFAULT_CREDENTIALS_FILE, DEFAULT_LANGUAGE_CODE, DEFAULT_PAGES,
    DEFAULT_SITE_URL,
};
use crate::inspect::DEFAULT_API_BASE;
use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "index-sentry",
    version = "0.1.0",
    about = "Report the search-index status of a site's pages",
    long_about = "index-sentry asks the Search Console URL Inspection API about a fixed list of pages \
                  and prints one coloured status line per page. Non-indexed pages get their coverage \
                  state and last crawl time."
)]
pub struct Cli {
    /// Root URL of the site, as registered in Search Console (must end with '/')
    #[arg(long, default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Path to the service-account JSON key
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub credentials: PathBuf,

    /// Locale used for the messages returned by the API
    #[arg(long, default_value = DEFAULT_LANGUAGE_CODE)]
    pub language: String,

    /// Page path relative to the site URL (repeatable; "" is the home page)
    ///
    /// When given, replaces the built-in page list.
    #[arg(long = "page")]
    pub pages: Vec<String>,

    /// Output results in JSON format instead of coloured lines
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Base URL of the Search Console API
    #[arg(long, default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,
}

impl From<&Cli> for MonitorConfig {
    fn from(cli: &Cli) -> Self {
        let pages = if cli.pages.is_empty() {
            DEFAULT_PAGES.iter().map(|p| p.to_string()).collect()
        } else {
            cli.pages.clone()
        };

        MonitorConfig {
            site_url: cli.site_url.clone(),
            pages,
            credentials_path: cli.credentials.clone(),
            language_code: cli.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::parse_from(["index-sentry"]);
        let config = MonitorConfig::from(&cli);
        assert_eq!(config, MonitorConfig::default());
        assert!(!cli.json);
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_pages_replace_default_list() {
        let cli = Cli::parse_from([
            "index-sentry",
            "--site-url",
            "https://example.com/",
            "--page",
            "",
            "--page",
            "blog/a",
        ]);
        let config = MonitorConfig::from(&cli);
        assert_eq!(config.site_url, "https://example.com/");
        assert_eq!(config.pages, vec!["".to_string(), "blog/a".to_string()]);
    }

    #[test]
    fn test_credentials_and_language() {
        let cli = Cli::parse_from([
            "index-sentry",
            "--credentials",
            "/etc/keys/sa.json",
            "--language",
            "en-US",
            "--json",
        ]);
        let config = MonitorConfig::from(&cli);
        assert_eq!(config.credentials_path, PathBuf::from("/etc/keys/sa.json"));
        assert_eq!(config.language_code, "en-US");
        assert!(cli.json);
    }
}
