use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use dl2dir::{
    cli::Conf,
    clock::MetadataClock,
    exitcode,
    file_organizer::Archiver,
    output::{self, Console},
};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use std::process;

fn main() {
    let conf = match Conf::try_parse() {
        Ok(conf) => conf,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{}", e.render());
            print!("{}", output::usage());
            process::exit(exitcode::FAILURE);
        },
    };

    setup_logging(conf.debug);
    debug!("archiving {}", conf);

    let archiver = Archiver::new(conf.archive_config(), MetadataClock);
    let mut console = Console::stdout(conf.use_color());

    let code = match archiver.run(&mut console) {
        Ok(summary) => {
            debug!(moved = ?summary.moved, skipped = ?summary.skipped, "summary");
            exitcode::OK
        },
        Err(e) => {
            if !e.is_reported() {
                eprintln!("{}", format!("Error: {}", e).red());
            }
            e.exit_code()
        },
    };
    process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, wins over -d
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
