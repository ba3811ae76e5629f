// src/scroll.rs
//! Stabilization scroll loop: keep triggering content growth until two
//! consecutive height measurements, one settle delay apart, agree.

use std::{thread, time::Duration};

use tracing::debug;

use crate::driver::PageDriver;
use crate::error::{ScrapeError, ScrapeResult};

/// Outcome of a successful stabilization run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stabilization {
    /// Measurement pairs taken. A page that never grows needs exactly one;
    /// a page that grows for N scroll triggers needs N + 1.
    pub pairs: usize,
    pub final_height: u64,
}

/// Scroll `driver` to its bottom until the content height stops growing.
///
/// The settle delay only needs to be long enough for async content to render
/// after a scroll; it is a tunable heuristic, not a correctness bound.
/// `max_rounds` caps the loop so an ever-growing or oscillating page surfaces
/// as [`ScrapeError::DidNotStabilize`] instead of hanging the run.
pub fn stabilize<D>(driver: &mut D, settle: Duration, max_rounds: usize) -> ScrapeResult<Stabilization>
where
    D: PageDriver + ?Sized,
{
    let mut height = driver.content_height().map_err(ScrapeError::Driver)?;
    let mut pairs = 0usize;

    while pairs < max_rounds {
        driver.scroll_to_bottom().map_err(ScrapeError::Driver)?;
        if !settle.is_zero() {
            thread::sleep(settle);
        }
        let grown = driver.content_height().map_err(ScrapeError::Driver)?;
        pairs += 1;

        if grown == height {
            debug!(pairs, height = grown, "content height stable");
            return Ok(Stabilization {
                pairs,
                final_height: grown,
            });
        }
        debug!(pairs, from = height, to = grown, "content still growing");
        height = grown;
    }

    Err(ScrapeError::DidNotStabilize { rounds: max_rounds })
}
