//! Parsing options and configuration.

/// Title emitted at the top of every report.
pub const DEFAULT_TITLE: &str = "Full-Stack AI Finance Platform";

/// Subtitle emitted under the title.
pub const DEFAULT_SUBTITLE: &str = "Project Report — December 2025";

/// Options for translating Markdown into the document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit the title/subtitle preamble before the Markdown blocks
    pub preamble: bool,

    /// Preamble title text
    pub title: String,

    /// Preamble subtitle text
    pub subtitle: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preamble title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the preamble subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Enable or disable the preamble.
    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    /// Skip the preamble; only Markdown blocks are emitted.
    pub fn without_preamble(self) -> Self {
        self.with_preamble(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preamble: true,
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_title("Quarterly Review")
            .with_subtitle("Draft")
            .without_preamble();

        assert_eq!(options.title, "Quarterly Review");
        assert_eq!(options.subtitle, "Draft");
        assert!(!options.preamble);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.preamble);
        assert_eq!(options.title, DEFAULT_TITLE);
        assert_eq!(options.subtitle, DEFAULT_SUBTITLE);
    }
}
