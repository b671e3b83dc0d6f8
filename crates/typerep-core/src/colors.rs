//! ANSI color codes for rendered values and types.
//!
//! Three semantic colors with a dim modifier:
//! - Blue: field names, case names, type names
//! - Green: string-like literals, type variables
//! - Dim: punctuation, keywords, absent values
//! - Reset: return to default

/// ANSI color palette for printer output.
///
/// Uses only standard 16-color ANSI codes, so output reads the same on light
/// and dark terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Append `text` wrapped in `color`, resetting afterwards.
    ///
    /// With colors off this is a plain `push_str`.
    pub fn paint(&self, out: &mut String, color: &str, text: &str) {
        if color.is_empty() {
            out.push_str(text);
            return;
        }
        out.push_str(color);
        out.push_str(text);
        out.push_str(self.reset);
    }
}
