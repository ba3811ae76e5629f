// src/error.rs

use thiserror::Error;

/// Driver failures are whatever the automation backend produces.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a scrape run.
///
/// Row-level structural mismatches are deliberately *not* here: decorative
/// rows are expected, so they surface as tagged skips in the extraction
/// result instead of failing the run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// No table on the rendered page carries the calendar id attribute.
    #[error("calendar table not found in rendered page")]
    TableNotFound,

    /// The scroll loop hit its round cap while the page was still growing.
    #[error("page did not stabilize after {rounds} scroll rounds")]
    DidNotStabilize { rounds: usize },

    #[error("page driver: {0}")]
    Driver(#[source] DriverError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
