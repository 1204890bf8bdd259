//! ANSI color codes for terminal output.
//!
//! Three roles with a dim modifier:
//! - Blue: tree kinds and rule-table state names
//! - Green: token text
//! - Dim: markers, positions and other metadata

/// ANSI color palette for dumps and traces.
///
/// Uses only standard 16-color ANSI codes so output reads the same in light
/// and dark themes.
#[derive(Clone, Copy, Debug)]
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
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    pub fn kind(&self, text: &str) -> String {
        self.paint(self.blue, text)
    }

    pub fn text(&self, text: &str) -> String {
        self.paint(self.green, text)
    }

    pub fn meta(&self, text: &str) -> String {
        self.paint(self.dim, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{code}{text}{}", self.reset)
        }
    }
}
