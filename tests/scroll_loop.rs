// tests/scroll_loop.rs
// Stabilization-loop tests against scripted page heights.

use std::time::Duration;

use eco_scrape::driver::PageDriver;
use eco_scrape::error::{DriverError, ScrapeError};
use eco_scrape::scroll::stabilize;

/// Driver whose height follows a script: `heights[i]` is the content height
/// after `i` scroll triggers; the last entry holds once the script runs out.
struct ScriptedPage {
    heights: Vec<u64>,
    scrolls: usize,
    measures: usize,
}

impl ScriptedPage {
    fn new(heights: Vec<u64>) -> Self {
        Self {
            heights,
            scrolls: 0,
            measures: 0,
        }
    }
}

impl PageDriver for ScriptedPage {
    fn navigate(&mut self, _url: &str) -> Result<(), DriverError> {
        Ok(())
    }
    fn dismiss_overlays(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
    fn switch_to_weekly_view(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
    fn scroll_to_bottom(&mut self) -> Result<(), DriverError> {
        self.scrolls += 1;
        Ok(())
    }
    fn content_height(&mut self) -> Result<u64, DriverError> {
        self.measures += 1;
        let i = self.scrolls.min(self.heights.len() - 1);
        Ok(self.heights[i])
    }
    fn rendered_html(&mut self) -> Result<String, DriverError> {
        Ok(String::new())
    }
    fn close(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}

#[test]
fn fixed_height_page_stabilizes_after_one_measurement_pair() {
    let mut page = ScriptedPage::new(vec![1000]);
    let stab = stabilize(&mut page, Duration::ZERO, 10).unwrap();

    assert_eq!(stab.pairs, 1);
    assert_eq!(stab.final_height, 1000);
    assert_eq!(page.scrolls, 1);
    assert_eq!(page.measures, 2); // the initial measure plus one settle measure
}

#[test]
fn page_growing_for_n_triggers_takes_n_plus_one_pairs() {
    // Grows on each of the first three scrolls, then holds.
    let mut page = ScriptedPage::new(vec![1000, 2000, 3000, 4000]);
    let stab = stabilize(&mut page, Duration::ZERO, 10).unwrap();

    assert_eq!(stab.pairs, 4); // N = 3 growth triggers → N + 1 pairs
    assert_eq!(stab.final_height, 4000);
    assert_eq!(page.scrolls, 4);
}

#[test]
fn ever_growing_page_surfaces_the_round_cap() {
    struct EndlessPage {
        scrolls: u64,
    }
    impl PageDriver for EndlessPage {
        fn navigate(&mut self, _url: &str) -> Result<(), DriverError> {
            Ok(())
        }
        fn dismiss_overlays(&mut self) -> Result<(), DriverError> {
            Ok(())
        }
        fn switch_to_weekly_view(&mut self) -> Result<(), DriverError> {
            Ok(())
        }
        fn scroll_to_bottom(&mut self) -> Result<(), DriverError> {
            self.scrolls += 1;
            Ok(())
        }
        fn content_height(&mut self) -> Result<u64, DriverError> {
            Ok(1000 + self.scrolls * 500)
        }
        fn rendered_html(&mut self) -> Result<String, DriverError> {
            Ok(String::new())
        }
        fn close(&mut self) -> Result<(), DriverError> {
            Ok(())
        }
    }

    let mut page = EndlessPage { scrolls: 0 };
    let err = stabilize(&mut page, Duration::ZERO, 5).unwrap_err();
    assert!(matches!(err, ScrapeError::DidNotStabilize { rounds: 5 }));
}
