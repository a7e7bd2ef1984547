//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Usage error, missing source directory or nothing to archive
pub const FAILURE: i32 = 1;

/// Input/output error (BSD sysexits.h EX_IOERR)
pub const IOERR: i32 = 74;
