// src/config/options.rs

use std::path::PathBuf;

use super::consts::{CALENDAR_URL, MAX_SCROLL_ROUNDS, SETTLE_DELAY_MS};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Calendar URL; also the base for event detail links.
    pub url: String,
    pub settle_delay_ms: u64,
    pub max_scroll_rounds: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: CALENDAR_URL.to_string(),
            settle_delay_ms: SETTLE_DELAY_MS,
            max_scroll_rounds: MAX_SCROLL_ROUNDS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Output file, or directory hint for the dated default name.
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            include_headers: true,
        }
    }
}
