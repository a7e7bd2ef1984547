pub mod cli;
pub mod clock;
pub mod error;
pub mod exitcode;
pub mod file_organizer;
pub mod output;
pub mod target_date;
pub mod utilities;
