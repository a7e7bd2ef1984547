use tracing::{debug, info, trace};

use std::{
    ffi::OsString,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    clock::{CreationClock, DateZone},
    error::ArchiveError,
    output::{Console, Tone},
    target_date::TargetDate,
    utilities::*,
};

/// Everything a run needs to know, resolved up front.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub source_dir: PathBuf,
    pub target_date: TargetDate,
    pub zone: DateZone,
}

impl ArchiveConfig {
    pub fn destination_dir(&self) -> PathBuf {
        self.source_dir.join(self.target_date.as_str())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub moved: Vec<OsString>,
    pub skipped: Vec<OsString>,
}

/// Names of the regular files directly inside `dir` created on `date`.
///
/// Order follows the directory listing.
pub fn list_files_for_date(
    dir: &Path,
    date: &TargetDate,
    zone: DateZone,
    clock: &impl CreationClock,
) -> Result<Vec<OsString>, ArchiveError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(ArchiveError::io("read directory", dir))? {
        let entry = entry.map_err(ArchiveError::io("read directory", dir))?;
        let path = entry.path();

        let created = clock
            .created_at(&path)
            .map_err(ArchiveError::io("read creation time of", &path))?;
        let created_on = zone.date_of(created);
        trace!(path = %path.display(), %created_on, "inspected");

        // is_file follows symlinks, so a link to a regular file counts
        if path.is_file() && date.matches(&created_on) {
            names.push(entry.file_name());
        }
    }

    debug!(dir = %dir.display(), %date, count = names.len(), "listed files for date");
    Ok(names)
}

pub struct Archiver<C> {
    config: ArchiveConfig,
    clock: C,
}

impl<C: CreationClock> Archiver<C> {
    pub fn new(config: ArchiveConfig, clock: C) -> Self {
        Self { config, clock }
    }

    fn files_for_date(&self, dir: &Path) -> Result<Vec<OsString>, ArchiveError> {
        list_files_for_date(dir, &self.config.target_date, self.config.zone, &self.clock)
    }

    /// Moves the source files created on the target date into `source/<date>/`.
    ///
    /// A missing source directory or an empty match are reported on the
    /// console and returned as errors. Any filesystem failure stops the batch;
    /// files moved before it stay moved.
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<ArchiveSummary, ArchiveError> {
        let date = &self.config.target_date;
        let src_dir = &self.config.source_dir;

        console.line(Tone::Banner, "Start");

        if !src_dir.exists() {
            return Err(finish_early(console, ArchiveError::SourceNotFound(src_dir.clone())));
        }

        let src_matches = self.files_for_date(src_dir)?;
        if src_matches.is_empty() {
            return Err(finish_early(console, ArchiveError::NoFilesForDate(date.clone())));
        }

        let dst_dir = self.config.destination_dir();
        let dst_matches = if dst_dir.exists() {
            self.files_for_date(&dst_dir)?
        } else {
            console.line(Tone::Alert, format!("\"{date}\" directory was not found."));
            console.line(Tone::Notice, format!("Create \"{date}\" directory."));
            create_dir_if_not_exists(&dst_dir).map_err(ArchiveError::io("create directory", &dst_dir))?;
            console.line(Tone::Notice, format!("\"{date}\" directory was created."));
            Vec::new()
        };

        let mut summary = ArchiveSummary::default();
        for name in src_matches {
            let shown = name.to_string_lossy().into_owned();

            if dst_matches.contains(&name) {
                console.line(Tone::Alert, format!("\"{shown}\" exists in \"{date}\" directory."));
                summary.skipped.push(name);
                continue;
            }

            if let Err(e) = move_into(&src_dir.join(&name), &dst_dir.join(&name)) {
                return Err(ArchiveError::Interrupted {
                    name: shown,
                    moved: summary.moved.len(),
                    source: Box::new(e),
                });
            }
            console.line(Tone::Success, format!("\"{shown}\" moved to \"{date}\" directory."));
            summary.moved.push(name);
        }

        console.line(Tone::Banner, "Done");
        info!(
            %date,
            moved = summary.moved.len(),
            skipped = summary.skipped.len(),
            "archive run finished"
        );
        Ok(summary)
    }
}

fn finish_early<W: Write>(console: &mut Console<W>, err: ArchiveError) -> ArchiveError {
    console.line(Tone::Alert, &err);
    console.line(Tone::Banner, "Done");
    err
}

/// Moves `from` to `to` without ever replacing an existing entry at `to`.
///
/// Linking and then unlinking makes the occupied check atomic. Filesystems
/// without hard links fall back to a checked rename, which is only safe while
/// nothing else writes into the destination during the run.
fn move_into(from: &Path, to: &Path) -> Result<(), ArchiveError> {
    match fs::hard_link(from, to) {
        Ok(()) => fs::remove_file(from).map_err(ArchiveError::io("remove", from))?,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ArchiveError::DestinationOccupied(to.to_path_buf()));
        },
        Err(e) => {
            debug!(from = %from.display(), "hard link failed ({}), renaming instead", e);
            if is_occupied(to) {
                return Err(ArchiveError::DestinationOccupied(to.to_path_buf()));
            }
            fs::rename(from, to).map_err(ArchiveError::io("move", from))?;
        },
    }
    debug!(from = %from.display(), to = %to.display(), "moved");
    Ok(())
}
