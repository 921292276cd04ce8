// Rendering theme: fonts, colors, margins, and glyphs.
//
// A `Theme` is plain data read by the renderer; it is never mutated during a
// render. Presets are built by copying `Theme::default()` and overriding a
// subset of fields.

use std::str::FromStr;

use crate::error::StyledMarkdownError;
use crate::style::{Color, Font, FontTraits, FontWeight, StrikethroughStyle};

/// Point size of body text in the default theme.
pub const BASE_FONT_SIZE: f64 = 15.0;

/// Visual parameters for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Font of plain text runs.
    pub text_font: Font,
    pub emphasis_font_traits: FontTraits,
    pub strong_font_traits: FontTraits,
    pub heading_font_traits: FontTraits,
    /// Heading point size is `heading_max_point_size - 2 * level`.
    pub heading_max_point_size: f64,
    pub link_color: Color,
    pub strikethrough_style: StrikethroughStyle,
    /// Glyph drawn in front of unordered list items.
    pub unordered_list_tag: String,
    pub unordered_bullet_font: Font,
    pub list_left_margin: f64,
    /// Extra left margin per level of list nesting.
    pub list_depth_margin: f64,
    /// Gap between the bullet column and item content.
    pub list_right_margin: f64,
    pub list_item_content_font: Font,
    pub ordered_numeral_font: Font,
    pub code_foreground_color: Color,
    pub code_font: Font,
    pub quote_left_margin: f64,
    /// Extra left margin per level of quote nesting.
    pub quote_depth_margin: f64,
    pub quote_font: Font,
    pub quote_foreground_color: Color,
    pub paragraph_line_spacing: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_font: Font::system(BASE_FONT_SIZE),
            emphasis_font_traits: FontTraits::ITALIC,
            strong_font_traits: FontTraits::BOLD,
            heading_font_traits: FontTraits::BOLD,
            heading_max_point_size: 28.0,
            link_color: Color::SYSTEM_BLUE,
            strikethrough_style: StrikethroughStyle::Single,
            unordered_list_tag: "•".to_string(),
            unordered_bullet_font: Font::system(BASE_FONT_SIZE),
            list_left_margin: 15.0,
            list_depth_margin: 20.0,
            list_right_margin: 8.0,
            list_item_content_font: Font::system(BASE_FONT_SIZE),
            ordered_numeral_font: Font::monospaced_digit(BASE_FONT_SIZE),
            code_foreground_color: Color::SYSTEM_GRAY,
            code_font: Font::monospaced(BASE_FONT_SIZE - 1.0),
            quote_left_margin: 15.0,
            quote_depth_margin: 20.0,
            quote_font: Font::system(BASE_FONT_SIZE),
            quote_foreground_color: Color::SYSTEM_GRAY,
            paragraph_line_spacing: 10.0,
        }
    }
}

impl Theme {
    /// Names accepted by [`Theme::preset`].
    pub const PRESETS: [&'static str; 3] = ["base", "test", "link-summary"];

    /// The default look.
    pub fn base() -> Self {
        Self::default()
    }

    /// A deliberately loud theme where most fields differ from `base`.
    pub fn test() -> Self {
        Self {
            heading_font_traits: FontTraits::ITALIC,
            heading_max_point_size: 30.0,
            link_color: Color::GRAY,
            strikethrough_style: StrikethroughStyle::Thick,
            unordered_list_tag: "a".to_string(),
            list_left_margin: 4.0,
            list_depth_margin: 20.0,
            list_right_margin: 10.0,
            list_item_content_font: Font::monospaced_digit(13.0).with_weight(FontWeight::Heavy),
            code_foreground_color: Color::BROWN,
            code_font: Font::bold_system(13.0),
            quote_left_margin: 10.0,
            quote_font: Font::bold_system(13.0),
            quote_foreground_color: Color::BLUE,
            ..Self::default()
        }
    }

    /// Compact theme for short link summaries.
    pub fn link_summary() -> Self {
        Self {
            text_font: Font::system(13.0),
            unordered_bullet_font: Font::system(20.0).with_weight(FontWeight::Bold),
            list_left_margin: 0.0,
            list_right_margin: 6.0,
            paragraph_line_spacing: 2.0,
            ..Self::default()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self, StyledMarkdownError> {
        match name {
            "base" => Ok(Self::base()),
            "test" => Ok(Self::test()),
            "link-summary" => Ok(Self::link_summary()),
            other => Err(StyledMarkdownError::UnknownTheme(other.to_string())),
        }
    }

    /// Set the plain text font.
    pub fn with_text_font(mut self, font: Font) -> Self {
        self.text_font = font;
        self
    }

    /// Set the link color.
    pub fn with_link_color(mut self, color: Color) -> Self {
        self.link_color = color;
        self
    }

    /// Set the heading size ceiling.
    pub fn with_heading_max_point_size(mut self, size: f64) -> Self {
        self.heading_max_point_size = size;
        self
    }

    /// Set the unordered list glyph and its font.
    pub fn with_bullet(mut self, tag: impl Into<String>, font: Font) -> Self {
        self.unordered_list_tag = tag.into();
        self.unordered_bullet_font = font;
        self
    }

    /// Set list left margin, per-depth margin, and content gap.
    pub fn with_list_margins(mut self, left: f64, depth: f64, right: f64) -> Self {
        self.list_left_margin = left;
        self.list_depth_margin = depth;
        self.list_right_margin = right;
        self
    }

    /// Set quote left margin and per-depth margin.
    pub fn with_quote_margins(mut self, left: f64, depth: f64) -> Self {
        self.quote_left_margin = left;
        self.quote_depth_margin = depth;
        self
    }

    /// Set paragraph line spacing.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.paragraph_line_spacing = spacing;
        self
    }
}

impl FromStr for Theme {
    type Err = StyledMarkdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::preset(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_default() {
        assert_eq!(Theme::base(), Theme::default());
    }

    #[test]
    fn test_test_preset_overrides() {
        let t = Theme::test();
        assert_eq!(t.heading_max_point_size, 30.0);
        assert_eq!(t.unordered_list_tag, "a");
        assert_eq!(t.list_left_margin, 4.0);
        assert_eq!(t.quote_foreground_color, Color::BLUE);
        assert!(t.list_item_content_font.is_bold());
    }

    #[test]
    fn test_overrides_leave_other_fields_at_base() {
        let base = Theme::base();
        let t = Theme::test();
        assert_eq!(t.text_font, base.text_font);
        assert_eq!(t.quote_depth_margin, base.quote_depth_margin);
        assert_eq!(t.paragraph_line_spacing, base.paragraph_line_spacing);
        assert_eq!(t.ordered_numeral_font, base.ordered_numeral_font);

        let s = Theme::link_summary();
        assert_eq!(s.text_font.size, 13.0);
        assert_eq!(s.list_left_margin, 0.0);
        assert_eq!(s.list_depth_margin, base.list_depth_margin);
        assert_eq!(s.link_color, base.link_color);
        assert_eq!(s.code_font, base.code_font);
        assert_eq!(s.unordered_list_tag, base.unordered_list_tag);
    }

    #[test]
    fn test_presets_differ() {
        assert_ne!(Theme::base(), Theme::test());
        assert_ne!(Theme::base(), Theme::link_summary());
        assert_ne!(Theme::test(), Theme::link_summary());
    }

    #[test]
    fn test_preset_lookup() {
        for name in Theme::PRESETS {
            assert!(Theme::preset(name).is_ok(), "preset {name}");
        }
        assert_eq!("link-summary".parse::<Theme>().unwrap(), Theme::link_summary());
    }

    #[test]
    fn test_unknown_preset() {
        let err = Theme::preset("neon").unwrap_err();
        assert!(matches!(err, StyledMarkdownError::UnknownTheme(ref n) if n == "neon"));
        assert_eq!(err.to_string(), "unknown theme preset: neon");
    }

    #[test]
    fn test_builder() {
        let t = Theme::base()
            .with_link_color(Color::YELLOW)
            .with_list_margins(1.0, 2.0, 3.0)
            .with_line_spacing(4.0);
        assert_eq!(t.link_color, Color::YELLOW);
        assert_eq!(t.list_depth_margin, 2.0);
        assert_eq!(t.paragraph_line_spacing, 4.0);
        assert_eq!(t.quote_left_margin, 15.0);
    }
}
