//! Printer configuration.

use typerep_core::Colors;

/// Layout and color settings shared by both printers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Break non-empty records and sequences one item per line
    pub(crate) pretty: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Config {
    /// Create a new Config with default values (compact, uncolored).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use multi-line layout.
    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}
