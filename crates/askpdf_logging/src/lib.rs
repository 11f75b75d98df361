#![deny(missing_docs)]
//! Shared logging utilities for the askpdf workspace.
//!
//! This crate provides the `askpdf_*` logging macros used across the codebase,
//! a helper for keeping user text short in log lines, and a minimal test
//! initializer for the global logger.

use std::borrow::Cow;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! askpdf_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! askpdf_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! askpdf_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! askpdf_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! askpdf_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Returns at most `max_chars` characters of `text` on a single line.
///
/// Newlines are flattened to spaces and a trailing `…` marks truncation, so
/// queries and markdown answers can be logged without flooding the log file.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    let needs_flatten = text.contains(['\n', '\r']);
    let char_count = text.chars().count();
    if !needs_flatten && char_count <= max_chars {
        return Cow::Borrowed(text);
    }

    let mut out: String = text
        .chars()
        .take(max_chars)
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect();
    if char_count > max_chars {
        out.push('…');
    }
    Cow::Owned(out)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
