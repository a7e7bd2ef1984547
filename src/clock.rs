//! Where creation timestamps come from, and how they become calendar dates.

use chrono::{DateTime, FixedOffset, Local, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use std::{
    fs::{self, Metadata},
    io,
    path::Path,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of a file's creation timestamp.
///
/// Any `Fn(&Path) -> io::Result<DateTime<Utc>>` works as a clock, which is
/// how tests pin creation dates without touching filesystem metadata.
pub trait CreationClock {
    fn created_at(&self, path: &Path) -> io::Result<DateTime<Utc>>;
}

impl<F> CreationClock for F
where
    F: Fn(&Path) -> io::Result<DateTime<Utc>>,
{
    fn created_at(&self, path: &Path) -> io::Result<DateTime<Utc>> {
        self(path)
    }
}

/// Reads the timestamp from filesystem metadata, following symlinks.
///
/// On Unix this is the inode change time, which a rename refreshes. Other
/// platforms report the birth time.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataClock;

impl CreationClock for MetadataClock {
    fn created_at(&self, path: &Path) -> io::Result<DateTime<Utc>> {
        let meta = fs::metadata(path)?;
        creation_time(&meta)
    }
}

#[cfg(unix)]
fn creation_time(meta: &Metadata) -> io::Result<DateTime<Utc>> {
    use std::os::unix::fs::MetadataExt;

    DateTime::from_timestamp(meta.ctime(), meta.ctime_nsec() as u32).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("change time out of range: {}", meta.ctime()),
        )
    })
}

#[cfg(not(unix))]
fn creation_time(meta: &Metadata) -> io::Result<DateTime<Utc>> {
    meta.created().map(DateTime::<Utc>::from)
}

/// Time zone used to turn a timestamp into a calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DateZone {
    /// `YYYY-MM-DD` of `instant` in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> String {
        match self {
            DateZone::Local => instant.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            DateZone::Fixed(offset) => instant.with_timezone(offset).format(DATE_FORMAT).to_string(),
        }
    }
}

/// Parses `+09:00`, `-0530` or `Z`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, String> {
    static OFFSET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<sign>[+-])(?P<hours>\d{2}):?(?P<minutes>\d{2})$").unwrap());

    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| "invalid offset".to_string());
    }

    let captures = OFFSET
        .captures(s)
        .ok_or_else(|| format!("'{s}' is not a UTC offset like +09:00"))?;

    let hours: i32 = captures["hours"].parse().map_err(|_| format!("bad hours in '{s}'"))?;
    let minutes: i32 = captures["minutes"].parse().map_err(|_| format!("bad minutes in '{s}'"))?;
    if minutes >= 60 {
        return Err(format!("'{s}' has more than 59 minutes"));
    }

    let seconds = (hours * 3600 + minutes * 60) * if &captures["sign"] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| format!("'{s}' is out of range"))
}
