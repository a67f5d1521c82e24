//! Operator-facing status lines: colored icon prefix, plain message text.
//! Everything a mutating command reports goes through one of these.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) {
    println!("{color}{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: fmt::Display>(msg: T) {
    line(FG_BLUE, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(FG_GREEN, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(FG_YELLOW, "⚠️", msg);
}

/// Banner above the dashboard / quarterly report blocks.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}====================== {msg}\n{RESET}");
}
