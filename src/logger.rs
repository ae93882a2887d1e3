//! Logging utilities with colored output.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} warnings", count);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{IsTerminal, Write, stderr, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for `[`, `]`, and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Apply an explicit color choice for the rest of the process.
///
/// `None` leaves it to `colored`, which drops colors when the output isn't a terminal.
pub fn set_color(choice: Option<bool>) {
    if let Some(enable) = choice {
        colored::control::set_override(enable);
    }
}

/// Log a message with a colored module prefix to stdout.
pub fn log(module: &str, message: &str) {
    let mut stdout = stdout().lock();
    let terminal = stdout.is_terminal();
    write_line(&mut stdout, terminal, module, message);
}

/// Log an `[error]` line to stderr, keeping stdout clean for command output.
pub fn log_error(message: &str) {
    let mut stderr = stderr().lock();
    let terminal = stderr.is_terminal();
    write_line(&mut stderr, terminal, "error", message);
}

/// Write one prefixed line.
///
/// Cursor control and width truncation only apply to a terminal.
fn write_line(out: &mut impl Write, terminal: bool, module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());

    if terminal {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }

    if !terminal || message.contains('\n') {
        writeln!(out, "{prefix} {message}").ok();
    } else {
        let width = get_terminal_width() as usize;
        let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
        writeln!(out, "{prefix} {}", truncate_str(message, max_msg_len)).ok();
    }

    out.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "check" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "get" -> "[get] " = 3 + 2 + 1 = 6
        assert_eq!(calc_prefix_len(3), 6);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn test_truncate_str_cuts() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "€" is 3 bytes
        assert_eq!(truncate_str("€€", 4), "€");
        assert_eq!(truncate_str("a€b", 3), "a");
        assert_eq!(truncate_str("a€b", 4), "a€");
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        set_color(Some(false));
        assert_eq!(colorize_prefix("error", "error").to_string(), "[error]");
        assert_eq!(colorize_prefix("Check", "check").to_string(), "[Check]");
    }

    #[test]
    fn test_write_line_without_terminal_is_plain() {
        set_color(Some(false));
        let mut out = Vec::new();
        write_line(&mut out, false, "error", "page `x` is not registered");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "[error] page `x` is not registered\n");
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_write_line_without_terminal_is_not_truncated() {
        set_color(Some(false));
        let message = "x".repeat(500);
        let mut out = Vec::new();
        write_line(&mut out, false, "check", &message);
        assert_eq!(String::from_utf8(out).unwrap(), format!("[check] {message}\n"));
    }

    #[test]
    fn test_write_line_keeps_multiline_messages() {
        set_color(Some(false));
        let mut out = Vec::new();
        write_line(&mut out, false, "check", "first\nsecond");
        assert_eq!(String::from_utf8(out).unwrap(), "[check] first\nsecond\n");
    }
}
