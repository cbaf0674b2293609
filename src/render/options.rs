//! Rendering options and configuration.

/// Options for writing the DOCX package.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Font family for code block runs
    pub code_font: String,

    /// Font size for code block runs, in points
    pub code_font_size: f32,

    /// Table style id applied to every table
    pub table_style: String,

    /// Creator recorded in the document properties
    pub creator: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code block font family.
    pub fn with_code_font(mut self, font: impl Into<String>) -> Self {
        self.code_font = font.into();
        self
    }

    /// Set the code block font size in points.
    pub fn with_code_font_size(mut self, size: f32) -> Self {
        self.code_font_size = size.max(1.0);
        self
    }

    /// Set the table style id.
    pub fn with_table_style(mut self, style: impl Into<String>) -> Self {
        self.table_style = style.into();
        self
    }

    /// Set the document creator.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Code font size in half-points, as WordprocessingML expects.
    pub fn code_font_half_points(&self) -> u32 {
        (self.code_font_size * 2.0).round() as u32
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_font: "Courier New".to_string(),
            code_font_size: 9.0,
            table_style: super::docx::TABLE_STYLE.to_string(),
            creator: "mdreport".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.code_font, "Courier New");
        assert_eq!(options.code_font_half_points(), 18);
        assert_eq!(options.table_style, "LightGridAccent1");
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_code_font("Consolas")
            .with_code_font_size(10.5)
            .with_creator("tester");

        assert_eq!(options.code_font, "Consolas");
        assert_eq!(options.code_font_half_points(), 21);
        assert_eq!(options.creator, "tester");
    }

    #[test]
    fn test_code_font_size_floor() {
        let options = RenderOptions::new().with_code_font_size(0.0);
        assert_eq!(options.code_font_half_points(), 2);
    }
}
