use thiserror::Error;

use std::{io, path::PathBuf};

use crate::{exitcode, target_date::TargetDate};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{0}\" is not a date in YYYY-MM-DD style")]
pub struct InvalidDate(pub String);

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("\"{}\" was not found.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("A file created on \"{0}\" was not found.")]
    NoFilesForDate(TargetDate),

    #[error("failed to {action} \"{}\": {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("\"{}\" already exists, refusing to overwrite it", .0.display())]
    DestinationOccupied(PathBuf),

    /// A file-level failure that stopped the batch part way through.
    #[error("stopped at \"{name}\" after moving {moved} file(s): {source}")]
    Interrupted {
        name: String,
        moved: usize,
        #[source]
        source: Box<ArchiveError>,
    },
}

impl ArchiveError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ArchiveError::Io { action, path, source }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ArchiveError::SourceNotFound(_) | ArchiveError::NoFilesForDate(_) => exitcode::FAILURE,
            ArchiveError::Io { .. } | ArchiveError::DestinationOccupied(_) | ArchiveError::Interrupted { .. } => {
                exitcode::IOERR
            },
        }
    }

    /// Expected outcomes already printed as console lines during the run.
    pub fn is_reported(&self) -> bool {
        matches!(self, ArchiveError::SourceNotFound(_) | ArchiveError::NoFilesForDate(_))
    }
}
