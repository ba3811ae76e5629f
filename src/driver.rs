// src/driver.rs
//! Page acquisition seam.
//!
//! The calendar page is JavaScript-rendered, so a plain HTTP GET never sees
//! its rows; acquisition goes through a driver capability implemented by a
//! browser-automation backend. The extraction pipeline consumes only the
//! scroll/measure/snapshot subset, which keeps it runnable against static
//! fixtures — [`SnapshotDriver`] below is exactly that.

use std::{fs, io, path::Path};

use crate::error::DriverError;

pub trait PageDriver {
    /// Point the page at `url`.
    fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Close cookie banners and popups when present.
    /// Their absence is not an error.
    fn dismiss_overlays(&mut self) -> Result<(), DriverError>;

    /// Flip the calendar from the default day view to the weekly view.
    fn switch_to_weekly_view(&mut self) -> Result<(), DriverError>;

    fn scroll_to_bottom(&mut self) -> Result<(), DriverError>;

    /// Current rendered content height, in page units.
    fn content_height(&mut self) -> Result<u64, DriverError>;

    /// Snapshot of the rendered document.
    fn rendered_html(&mut self) -> Result<String, DriverError>;

    fn close(&mut self) -> Result<(), DriverError>;
}

/// Driver over an already-rendered document: constant height, no-op
/// scrolling. Backs snapshot mode in the CLI and the fixture tests.
pub struct SnapshotDriver {
    html: String,
    url: Option<String>,
}

impl SnapshotDriver {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            url: None,
        }
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Last navigated URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl PageDriver for SnapshotDriver {
    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.url = Some(url.to_string());
        Ok(())
    }

    fn dismiss_overlays(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn switch_to_weekly_view(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn content_height(&mut self) -> Result<u64, DriverError> {
        Ok(self.html.len() as u64)
    }

    fn rendered_html(&mut self) -> Result<String, DriverError> {
        Ok(self.html.clone())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}
