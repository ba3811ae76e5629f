// src/cli.rs

use std::{env, path::PathBuf};

use color_eyre::eyre::{bail, Result, WrapErr};

use crate::config::options::{AppOptions, ExportFormat};
use crate::driver::SnapshotDriver;
use crate::file;
use crate::progress::Progress;
use crate::records::{EventTable, SkipReason};
use crate::scrape;

struct Params {
    opts: AppOptions,
    snapshot: Option<PathBuf>,
    quiet: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            opts: AppOptions::default(),
            snapshot: None,
            quiet: false,
        }
    }
}

/// Console progress sink: status and skip lines to stderr.
struct ConsoleProgress {
    quiet: bool,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }
    fn row_skipped(&mut self, index: usize, reason: &SkipReason) {
        if !self.quiet {
            eprintln!("  row {index}: skipped ({reason})");
        }
    }
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    let Some(snapshot) = &params.snapshot else {
        bail!(
            "no page source: pass --snapshot <file> with a saved rendered page\n\
             (live pages are driven through a PageDriver implementation; see --help)"
        );
    };
    let mut driver = SnapshotDriver::from_file(snapshot)
        .wrap_err_with(|| format!("read snapshot {}", snapshot.display()))?;

    let mut progress = ConsoleProgress { quiet: params.quiet };
    let extraction = scrape::collect_calendar(&mut driver, &params.opts.scrape, Some(&mut progress))?;

    let path = file::write_export_single(
        &params.opts.export,
        &Some(EventTable::headers()),
        &extraction.table.to_rows(),
    )?;

    println!(
        "Wrote {} events to {} ({} rows skipped)",
        extraction.table.len(),
        path.display(),
        extraction.skipped.len()
    );
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--snapshot" => {
                let v = next_value(&mut args, "--snapshot")?;
                params.snapshot = Some(PathBuf::from(v));
            }
            "--url" => params.opts.scrape.url = next_value(&mut args, "--url")?,
            "--settle-ms" => {
                params.opts.scrape.settle_delay_ms = next_value(&mut args, "--settle-ms")?
                    .parse()
                    .wrap_err("--settle-ms expects milliseconds")?;
            }
            "--max-scrolls" => {
                params.opts.scrape.max_scroll_rounds = next_value(&mut args, "--max-scrolls")?
                    .parse()
                    .wrap_err("--max-scrolls expects a count")?;
            }
            "-o" | "--out" => {
                params.opts.export.out = Some(PathBuf::from(next_value(&mut args, "--out")?));
            }
            "--format" => {
                let v = next_value(&mut args, "--format")?;
                params.opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => bail!("unknown format: {other}"),
                };
            }
            "--no-headers" => params.opts.export.include_headers = false,
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("unknown arg: {a}"),
        }
    }

    Ok(params)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(v) => Ok(v),
        None => bail!("missing value for {flag}"),
    }
}
