use once_cell::sync::Lazy;
use regex::Regex;

use std::{fs, io, path::Path};

/// Syntactic `YYYY-MM-DD` check. Month and day ranges are not validated.
pub fn is_date_style(s: &str) -> bool {
    static DATE_STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
    DATE_STYLE.is_match(s)
}

/// True when anything, dangling symlinks included, sits at `path`.
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

pub fn create_dir_if_not_exists(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        fs::create_dir(path).map(|_| true)
    } else {
        Ok(false)
    }
}
