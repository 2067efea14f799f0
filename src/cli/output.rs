//! Output helpers for CLI commands

/// Output helper for replies and diagnostics
///
/// Replies go to stdout. Diagnostics go to stderr and only when verbose
/// mode is on, so they never mix with command replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a command reply
    pub fn reply(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
