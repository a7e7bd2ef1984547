use chrono::FixedOffset;
use clap::{ArgAction, Parser, ValueEnum};

use std::{fmt, path::PathBuf};

use crate::{
    clock::{parse_utc_offset, DateZone},
    file_organizer::ArchiveConfig,
    target_date::TargetDate,
};

/// Capture folders of the honeypot the files come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Capture {
    /// Payloads fetched by attackers
    #[default]
    Downloads,
    /// Recorded terminal sessions
    Tty,
}

impl Capture {
    pub fn source_dir(self) -> PathBuf {
        match self {
            Capture::Downloads => PathBuf::from("./cowrie/var/lib/cowrie/downloads/"),
            Capture::Tty => PathBuf::from("./cowrie/var/lib/cowrie/tty/"),
        }
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capture::Downloads => write!(f, "downloads"),
            Capture::Tty => write!(f, "tty"),
        }
    }
}

/// Move the files created on DATE into a DATE-named subdirectory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Conf {
    /// Creation date of the files to move, YYYY-MM-DD
    #[arg(value_name = "DATE")]
    pub date: TargetDate,

    /// Capture folder to archive
    #[arg(short, long, default_value_t = Capture::Downloads)]
    pub capture: Capture,

    /// Source directory, overrides --capture
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Derive creation dates at this UTC offset instead of local time, e.g. +09:00
    #[arg(long, value_parser = parse_utc_offset, allow_hyphen_values = true)]
    pub utc_offset: Option<FixedOffset>,

    /// Print plain lines without color
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Diagnostic output on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Conf {
    pub fn source_dir(&self) -> PathBuf {
        self.source_dir.clone().unwrap_or_else(|| self.capture.source_dir())
    }

    pub fn zone(&self) -> DateZone {
        self.utc_offset.map_or(DateZone::Local, DateZone::Fixed)
    }

    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig {
            source_dir: self.source_dir(),
            target_date: self.date.clone(),
            zone: self.zone(),
        }
    }

    pub fn use_color(&self) -> bool {
        !self.no_color && colored::control::SHOULD_COLORIZE.should_colorize()
    }
}

impl fmt::Display for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.date, self.source_dir().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    #[test]
    fn verify_cli() {
        Conf::command().debug_assert();
    }

    #[test]
    fn defaults_to_the_downloads_capture_in_local_time() {
        let conf = Conf::try_parse_from(["dl2dir", "2019-04-01"]).unwrap();
        let config = conf.archive_config();

        assert_eq!(config.source_dir, PathBuf::from("./cowrie/var/lib/cowrie/downloads/"));
        assert_eq!(config.target_date.as_str(), "2019-04-01");
        assert_eq!(config.zone, DateZone::Local);
        assert_eq!(conf.debug, 0);
    }

    #[test]
    fn explicit_source_overrides_capture() {
        let conf = Conf::try_parse_from(["dl2dir", "--capture", "tty", "-s", "/srv/dl", "2019-04-01"]).unwrap();
        assert_eq!(conf.capture, Capture::Tty);
        assert_eq!(conf.source_dir(), PathBuf::from("/srv/dl"));

        let conf = Conf::try_parse_from(["dl2dir", "-c", "tty", "2019-04-01"]).unwrap();
        assert_eq!(conf.source_dir(), PathBuf::from("./cowrie/var/lib/cowrie/tty/"));
    }

    #[test]
    fn utc_offset_selects_a_fixed_zone() {
        let conf = Conf::try_parse_from(["dl2dir", "--utc-offset", "-05:00", "2019-04-01"]).unwrap();
        assert_eq!(conf.zone(), DateZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap()));
    }

    #[test]
    fn debug_flag_counts() {
        let conf = Conf::try_parse_from(["dl2dir", "-dd", "2019-04-01"]).unwrap();
        assert_eq!(conf.debug, 2);
    }

    #[test]
    fn exactly_one_date_is_required() {
        let none = Conf::try_parse_from(["dl2dir"]).unwrap_err();
        assert_eq!(none.kind(), ErrorKind::MissingRequiredArgument);

        let two = Conf::try_parse_from(["dl2dir", "2019-04-01", "2019-04-02"]).unwrap_err();
        assert_eq!(two.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn malformed_date_is_a_value_error() {
        let err = Conf::try_parse_from(["dl2dir", "2019-4-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
