// src/specs/mod.rs
//! # Scraping specs
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* and *how to extract it robustly*:
//!
//! - Pure HTML parsing over a stabilized snapshot — no driving, no waiting.
//! - Tolerant extraction via `core::html` scanning helpers and
//!   `core::sanitize` text cleanup.
//! - Light shaping into the typed records of `crate::records`.
//!
//! What does **not** live here: page acquisition (`driver`), the scroll loop
//! (`scroll`), export formatting (`csv`/`file`), or run sequencing
//! (`scrape`). Specs know how to read the page; other layers decide when to
//! drive it and what to do with the result.

pub mod calendar;
