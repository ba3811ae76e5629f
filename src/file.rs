// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::config::consts::{DEFAULT_OUT_DIR, EXPORT_FILE_PREFIX};
use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::ScrapeResult;

/// Default export stem, stamped with the current date:
/// `Economic_Calendar_06_08_2026`.
pub fn dated_stem() -> String {
    format!("{}_{}", EXPORT_FILE_PREFIX, Local::now().format("%d_%m_%Y"))
}

/// Write a single export file based on `ExportOptions` (path hint, headers
/// policy, delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> ScrapeResult<PathBuf> {
    let path = resolve_out_path(export.out.as_deref(), export.format.ext())?;
    let contents = to_export_string(headers, rows, export.include_headers, export.format.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Resolve the user's output hint into a concrete file path.
/// No hint → default directory + dated name; directory hint → that directory
/// + dated name; anything else is taken as the file path itself.
pub fn resolve_out_path(hint: Option<&Path>, ext: &str) -> ScrapeResult<PathBuf> {
    let default_name = format!("{}.{}", dated_stem(), ext);

    let Some(hint) = hint else {
        let dir = PathBuf::from(DEFAULT_OUT_DIR);
        ensure_directory(&dir)?;
        return Ok(dir.join(default_name));
    };

    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        Ok(hint.join(default_name))
    } else {
        if let Some(parent) = hint.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        Ok(hint.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> ScrapeResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
