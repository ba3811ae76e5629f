// src/config/consts.rs

// Site
pub const CALENDAR_URL: &str = "https://uk.investing.com/economic-calendar/";
pub const CALENDAR_TABLE_ID: &str = "economicCalendarData";

// Scroll stabilization
pub const SETTLE_DELAY_MS: u64 = 2000; // heuristic: long enough for async rows to render
pub const MAX_SCROLL_ROUNDS: usize = 60;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_PREFIX: &str = "Economic_Calendar";
