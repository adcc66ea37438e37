//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Style a status marker: green for exact, yellow for approximate or
/// skipped, red for failures and timeouts.
#[must_use]
pub fn styled_marker(marker: &str) -> String {
    let tag = format!("[{marker}]");
    if is_color_disabled() {
        return tag;
    }
    match marker {
        "OK" => style(tag).green().bold().to_string(),
        "APPROX" | "SKIP" => style(tag).yellow().bold().to_string(),
        _ => style(tag).red().bold().to_string(),
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
