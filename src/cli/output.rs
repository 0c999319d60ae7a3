//! Output formatting
//!
//! Status prefixes and error display for messages shown to the user.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Format an error and its causes on one line
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {error:#}", status::ERROR)
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(error));
}
