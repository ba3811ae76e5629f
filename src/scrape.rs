// src/scrape.rs
//! Run orchestration: drive the page to a stable snapshot, then hand the
//! HTML to the calendar spec and report per-row outcomes.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::options::ScrapeOptions;
use crate::driver::PageDriver;
use crate::error::{ScrapeError, ScrapeResult};
use crate::progress::Progress;
use crate::scroll;
use crate::specs::calendar::{self, Extraction};

/// Drive `driver` through the full acquisition sequence and extract the
/// calendar: navigate → dismiss overlays → weekly view → stabilize →
/// snapshot → parse. The driver is closed once the snapshot is captured.
pub fn collect_calendar<D>(
    driver: &mut D,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeResult<Extraction>
where
    D: PageDriver + ?Sized,
{
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading calendar page…");
    }
    info!(url = %opts.url, "navigating");
    driver.navigate(&opts.url).map_err(ScrapeError::Driver)?;
    driver.dismiss_overlays().map_err(ScrapeError::Driver)?;
    driver.switch_to_weekly_view().map_err(ScrapeError::Driver)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Scrolling until the view stops growing…");
    }
    let stab = scroll::stabilize(
        driver,
        Duration::from_millis(opts.settle_delay_ms),
        opts.max_scroll_rounds,
    )?;
    debug!(pairs = stab.pairs, height = stab.final_height, "view stabilized");

    let doc = driver.rendered_html().map_err(ScrapeError::Driver)?;
    driver.close().map_err(ScrapeError::Driver)?;

    let extraction = calendar::extract(&doc, &site_base(&opts.url))?;

    for (index, reason) in &extraction.skipped {
        debug!(index, %reason, "row skipped");
    }
    if let Some(p) = progress.as_deref_mut() {
        for (index, reason) in &extraction.skipped {
            p.row_skipped(*index, reason);
        }
        p.finish(extraction.table.len(), extraction.skipped.len());
    }
    info!(
        events = extraction.table.len(),
        skipped = extraction.skipped.len(),
        "calendar extracted"
    );

    Ok(extraction)
}

/// Site root of `url` (scheme + host), the base for event detail links.
pub fn site_base(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.trim_end_matches('/').to_string();
    };
    let host_start = scheme_end + 3;
    match url[host_start..].find('/') {
        Some(slash) => url[..host_start + slash].to_string(),
        None => url.to_string(),
    }
}
