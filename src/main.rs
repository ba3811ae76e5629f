// src/main.rs

use eco_scrape::{cli, logging};

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    cli::run()
}
