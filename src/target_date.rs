use std::{fmt, str::FromStr};

use crate::{error::InvalidDate, utilities::is_date_style};

/// Date given on the command line. Doubles as the destination directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetDate(String);

impl TargetDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a formatted `YYYY-MM-DD` creation date matches this date.
    pub fn matches(&self, formatted: &str) -> bool {
        self.0 == formatted
    }
}

impl FromStr for TargetDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_date_style(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidDate(s.to_string()))
        }
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
