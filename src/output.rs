//! Console lines. Every line goes through [`render`].

use colored::Colorize;
use tracing::warn;

use std::{
    fmt::Display,
    io::{self, Write},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Start and completion (blue)
    Banner,
    /// Not found, duplicates (red)
    Alert,
    /// Directory creation (yellow)
    Notice,
    /// File moved (green)
    Success,
}

pub fn render(tone: Tone, msg: &(impl Display + ?Sized), color: bool) -> String {
    if !color {
        return format!("[+] {msg}");
    }
    let mark = match tone {
        Tone::Banner => "+".blue(),
        Tone::Alert => "+".red(),
        Tone::Notice => "+".yellow(),
        Tone::Success => "+".green(),
    };
    format!("[{mark}] {msg}")
}

pub fn usage() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!("[+] Usage:\n        {bin} [OPTIONS] <DATE>\n    ex. {bin} 2019-04-01\n")
}

pub struct Console<W> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn line(&mut self, tone: Tone, msg: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", render(tone, &msg, self.color)) {
            warn!("console write failed: {}", e);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_have_bare_marker() {
        assert_eq!(render(Tone::Success, "\"a.bin\" moved", false), "[+] \"a.bin\" moved");
        assert_eq!(render(Tone::Banner, "Done", false), "[+] Done");
    }

    #[test]
    fn colored_lines_only_tint_the_marker() {
        colored::control::set_override(true);
        let banner = render(Tone::Banner, "Start", true);
        let alert = render(Tone::Alert, "gone", true);
        let notice = render(Tone::Notice, "Create", true);
        let success = render(Tone::Success, "moved", true);
        colored::control::unset_override();

        assert!(banner.contains("\u{1b}[34m+"));
        assert!(alert.contains("\u{1b}[31m+"));
        assert!(notice.contains("\u{1b}[33m+"));
        assert!(success.contains("\u{1b}[32m+"));
        assert!(banner.ends_with("] Start"));
    }

    #[test]
    fn usage_shows_an_example() {
        let text = usage();
        assert!(text.starts_with("[+] Usage:"));
        assert!(text.contains("2019-04-01"));
    }

    #[test]
    fn console_writes_one_line_per_event() {
        let mut console = Console::new(Vec::new(), false);
        console.line(Tone::Banner, "Start");
        console.line(Tone::Banner, "Done");

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "[+] Start\n[+] Done\n");
    }
}
