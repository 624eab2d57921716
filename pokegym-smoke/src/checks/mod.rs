//! The individual smoke checks.
//!
//! A check never fails with an error. Whatever goes wrong is rendered into
//! the outcome's lines and reduced to `passed = false`.

pub mod agent;
pub mod connectivity;

pub use agent::check_agent;
pub use connectivity::{check_connectivity, check_with_provider};

/// Result of one check: a pass flag plus the lines to show the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the check succeeded.
    pub passed: bool,
    /// Human-readable report lines, in order.
    pub lines: Vec<String>,
}

impl CheckOutcome {
    /// A passing outcome with the given lines.
    #[must_use]
    pub const fn pass(lines: Vec<String>) -> Self {
        Self {
            passed: true,
            lines,
        }
    }

    /// A failing outcome with the given lines.
    #[must_use]
    pub const fn fail(lines: Vec<String>) -> Self {
        Self {
            passed: false,
            lines,
        }
    }

    /// All lines joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
