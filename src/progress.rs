// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends (CLI today) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A `<tr>` was rejected as a data row, with its tagged reason.
    fn row_skipped(&mut self, _index: usize, _reason: &crate::records::SkipReason) {}

    /// Extraction finished: kept records vs skipped rows.
    fn finish(&mut self, _kept: usize, _skipped: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
