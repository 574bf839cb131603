use std::sync::atomic::{AtomicBool, Ordering};

use semver::{BuildMetadata, Prerelease, Version};

pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod filesystem;
pub mod poll;
pub mod render;
pub mod status;

const MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
const MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
const PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

// only modified in main.rs on launch
pub struct RuntimeOptions
{
    pub debug: AtomicBool,
    pub debug_timestamp: AtomicBool
}

pub static OPTIONS: RuntimeOptions = RuntimeOptions { debug: AtomicBool::new(false), debug_timestamp: AtomicBool::new(false) };

pub fn set_debug(debug: bool)
{
    OPTIONS.debug.store(debug, Ordering::Relaxed);
}

pub fn set_debug_timestamp(timestamp: bool)
{
    OPTIONS.debug_timestamp.store(timestamp, Ordering::Relaxed);
}

/// Format a debug message, one tagged line per line of msg
///  - context is the tag, e.g. "POLL" gives "[POLL] msg", defaults to "[DEBUG]"
///  - lines are prefixed with an rfc3339 timestamp if [RuntimeOptions::debug_timestamp]
pub fn format_debug(msg: &str, context: Option<&str>) -> String
{
    let mut message = String::new();

    let time = chrono::offset::Utc::now().to_rfc3339();

    let tag = match context
    {
        Some(s) => format!("[{s}] "),
        None => format!("[DEBUG] ")
    };

    let timestamp = OPTIONS.debug_timestamp.load(Ordering::Relaxed);

    for line in msg.split("\n")
    {
        if timestamp { message.push_str(&format!("{time} ")); }
        message.push_str(&tag);
        message.push_str(line);
        message.push_str("\n");
    }

    message
}

pub fn debug(msg: String, context: Option<&str>)
{
    if !OPTIONS.debug.load(Ordering::Relaxed) { return }

    print!("{}", format_debug(&msg, context));
}

pub fn program_version() -> Version
{
    Version
    {
        major: MAJOR.parse().unwrap_or(0),
        minor: MINOR.parse().unwrap_or(0),
        patch: PATCH.parse().unwrap_or(0),
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY
    }
}
