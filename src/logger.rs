//! Colored, timestamped console logging shared by the library and the driver binary.
//!
//! `event!` lines are only printed when `LOG_ASTRO_EVENTS` is set when the first event is logged.
//! `adv!` takes the advisory [`Priority`] first and colors the line by it.
use crate::advisory::Priority;
use chrono::Utc;
use std::{fmt, sync::LazyLock};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_BLUE: &str = "\x1b[1;34m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

static EVENTS_ENABLED: LazyLock<bool> = LazyLock::new(|| std::env::var("LOG_ASTRO_EVENTS").is_ok());

/// Renders one log line, the tag padded to a fixed column.
pub fn line(color: &str, tag: &str, args: fmt::Arguments<'_>) -> String {
    format!("{color}{:<7}[{}]{RESET} {args}", format!("[{tag}]"), Utc::now().format("%H:%M:%S"))
}

pub fn info(args: fmt::Arguments<'_>) { println!("{}", line(GREEN, "INFO", args)); }

pub fn log(args: fmt::Arguments<'_>) { println!("{}", line(YELLOW, "LOG", args)); }

pub fn warn(args: fmt::Arguments<'_>) { println!("{}", line(MAGENTA, "WARN", args)); }

pub fn error(args: fmt::Arguments<'_>) { println!("{}", line(RED, "ERROR", args)); }

pub fn fatal(args: fmt::Arguments<'_>) -> String { line(BOLD_RED, "FATAL", args) }

pub fn event(args: fmt::Arguments<'_>) {
    if *EVENTS_ENABLED {
        println!("{}", line(CYAN, "EVENT", args));
    }
}

pub fn advisory(priority: Priority, args: fmt::Arguments<'_>) {
    let color = match priority {
        Priority::Critical => BOLD_RED,
        Priority::High => MAGENTA,
        Priority::Medium | Priority::Low => BOLD_BLUE,
    };
    println!("{}", line(color, &format!("ADV:{priority}"), args));
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::logger::info(format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => { $crate::logger::log(format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::logger::warn(format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::logger::error(format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => { panic!("{}", $crate::logger::fatal(format_args!($($arg)*))) };
}

#[macro_export]
macro_rules! adv {
    ($priority:expr, $($arg:tt)*) => { $crate::logger::advisory($priority, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => { $crate::logger::event(format_args!($($arg)*)) };
}
