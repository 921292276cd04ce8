// Platform-neutral style attributes carried by each styled run.
//
// A host adapter maps these onto its toolkit's font, color, and paragraph
// types. Nothing here knows about a concrete windowing system.

use std::fmt;

use bitflags::bitflags;
use url::Url;

bitflags! {
    /// Symbolic font traits.
    ///
    /// Traits compose by union, so applying italic to a bold font keeps it bold:
    ///
    /// ```
    /// use styled_markdown::style::FontTraits;
    ///
    /// let traits = FontTraits::BOLD | FontTraits::ITALIC;
    /// assert!(traits.contains(FontTraits::BOLD));
    /// assert!(!traits.contains(FontTraits::MONOSPACE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontTraits: u8 {
        const ITALIC = 0b0000_0001;
        const BOLD = 0b0000_0010;
        const MONOSPACE = 0b0000_0100;
    }
}

/// Font family, resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform UI font.
    #[default]
    System,
    /// The platform UI font with fixed-width digits.
    MonospacedDigit,
    /// The platform monospaced font.
    Monospaced,
    /// A font looked up by name.
    Named(String),
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

/// A font descriptor: family, weight, point size, and symbolic traits.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f64,
    pub traits: FontTraits,
}

impl Font {
    /// The system font at the given size, regular weight.
    pub fn system(size: f64) -> Self {
        Self {
            family: FontFamily::System,
            weight: FontWeight::Regular,
            size,
            traits: FontTraits::empty(),
        }
    }

    /// The system font at the given size with the bold trait.
    pub fn bold_system(size: f64) -> Self {
        Self {
            weight: FontWeight::Bold,
            traits: FontTraits::BOLD,
            ..Self::system(size)
        }
    }

    /// The system font with fixed-width digits.
    pub fn monospaced_digit(size: f64) -> Self {
        Self {
            family: FontFamily::MonospacedDigit,
            ..Self::system(size)
        }
    }

    /// The platform monospaced font.
    pub fn monospaced(size: f64) -> Self {
        Self {
            family: FontFamily::Monospaced,
            traits: FontTraits::MONOSPACE,
            ..Self::system(size)
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        if matches!(weight, FontWeight::Bold | FontWeight::Heavy) {
            self.traits |= FontTraits::BOLD;
        }
        self
    }

    /// Merge `traits` into this font's existing traits, optionally resizing.
    ///
    /// Existing traits are never removed.
    pub fn apply(&self, traits: FontTraits, size: Option<f64>) -> Self {
        Self {
            family: self.family.clone(),
            weight: self.weight,
            size: size.unwrap_or(self.size),
            traits: self.traits | traits,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.traits.contains(FontTraits::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.traits.contains(FontTraits::ITALIC)
    }

    /// Whether every glyph (or at least every digit) has the same advance.
    pub fn has_fixed_digits(&self) -> bool {
        matches!(
            self.family,
            FontFamily::Monospaced | FontFamily::MonospacedDigit
        ) || self.traits.contains(FontTraits::MONOSPACE)
    }
}

/// RGBA color with normalized 0.0-1.0 component values.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque gray (#808080).
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    /// Brown (#996633).
    pub const BROWN: Self = Self::rgb(0.6, 0.4, 0.2);
    /// The platform accent blue (#007AFF).
    pub const SYSTEM_BLUE: Self = Self::rgb(0.0, 0.478, 1.0);
    /// The platform secondary gray (#8E8E93).
    pub const SYSTEM_GRAY: Self = Self::rgb(0.557, 0.557, 0.576);

    /// Create a new color from normalized RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from normalized RGB values.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit RGB values (0-255).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Convert to 8-bit RGBA values.
    #[inline]
    pub fn to_rgba_u8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Strikethrough line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrikethroughStyle {
    #[default]
    Single,
    Thick,
    Double,
}

/// Alignment of text against a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabAlignment {
    Left,
    Right,
}

/// A tab stop at `location` points from the leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStop {
    pub alignment: TabAlignment,
    pub location: f64,
}

impl TabStop {
    pub fn left(location: f64) -> Self {
        Self {
            alignment: TabAlignment::Left,
            location,
        }
    }

    pub fn right(location: f64) -> Self {
        Self {
            alignment: TabAlignment::Right,
            location,
        }
    }
}

/// Paragraph layout attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    pub line_spacing: f64,
    /// Indent of wrapped lines after the first.
    pub head_indent: f64,
    pub tab_stops: Vec<TabStop>,
}

impl ParagraphStyle {
    pub fn with_line_spacing(line_spacing: f64) -> Self {
        Self {
            line_spacing,
            ..Self::default()
        }
    }

    /// Merge an enclosing container's style under this one.
    ///
    /// Tab geometry set by a nested list or quote wins. A style without tab
    /// stops takes the container's stops and head indent and keeps its own
    /// line spacing.
    pub(crate) fn merge_outer(&mut self, outer: &ParagraphStyle) {
        if self.tab_stops.is_empty() {
            self.tab_stops = outer.tab_stops.clone();
            self.head_indent = outer.head_indent;
        }
    }
}

/// The destination a run links to.
///
/// Absolute URLs are parsed; relative references are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTarget {
    raw: String,
    url: Option<Url>,
}

impl LinkTarget {
    /// Resolve a link destination. Returns `None` for an empty destination or
    /// one that is not a usable URL reference.
    pub fn parse(destination: &str) -> Option<Self> {
        let raw = destination.trim();
        if raw.is_empty() {
            return None;
        }
        match Url::parse(raw) {
            Ok(url) => Some(Self {
                raw: raw.to_string(),
                url: Some(url),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    None
                } else {
                    Some(Self {
                        raw: raw.to_string(),
                        url: None,
                    })
                }
            }
            Err(_) => None,
        }
    }

    /// The destination as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL, when the destination is absolute.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

/// The attribute set of one styled run. Absent attributes fall back to the
/// host's defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    pub font: Option<Font>,
    pub foreground: Option<Color>,
    pub paragraph_style: Option<ParagraphStyle>,
    pub link: Option<LinkTarget>,
    pub strikethrough: Option<StrikethroughStyle>,
    /// List nesting depth; bookkeeping only, not rendered.
    pub list_depth: Option<usize>,
    /// Quote nesting depth; bookkeeping only, not rendered.
    pub quote_depth: Option<usize>,
}

impl Attributes {
    pub fn with_font(font: Font) -> Self {
        Self {
            font: Some(font),
            ..Self::default()
        }
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_traits() {
        let bold = Font::bold_system(15.0);
        let both = bold.apply(FontTraits::ITALIC, None);
        assert!(both.is_bold());
        assert!(both.is_italic());
        assert_eq!(both.size, 15.0);
    }

    #[test]
    fn test_apply_resizes() {
        let font = Font::system(15.0).apply(FontTraits::BOLD, Some(26.0));
        assert_eq!(font.size, 26.0);
        assert_eq!(font.family, FontFamily::System);
    }

    #[test]
    fn test_heavy_weight_is_bold() {
        let font = Font::monospaced_digit(13.0).with_weight(FontWeight::Heavy);
        assert!(font.is_bold());
        assert!(font.has_fixed_digits());
    }

    #[test]
    fn test_color_debug_is_hex() {
        assert_eq!(format!("{:?}", Color::from_rgb_u8(255, 0, 16)), "#FF0010");
        assert_eq!(format!("{:?}", Color::new(0.0, 0.0, 0.0, 0.0)), "#00000000");
    }

    #[test]
    fn test_merge_outer_keeps_nested_geometry() {
        let mut nested = ParagraphStyle {
            line_spacing: 10.0,
            head_indent: 43.0,
            tab_stops: vec![TabStop::right(35.0), TabStop::left(43.0)],
        };
        let outer = ParagraphStyle {
            line_spacing: 2.0,
            head_indent: 23.0,
            tab_stops: vec![TabStop::right(15.0), TabStop::left(23.0)],
        };
        let before = nested.clone();
        nested.merge_outer(&outer);
        assert_eq!(nested, before);

        let mut plain = ParagraphStyle::with_line_spacing(10.0);
        plain.merge_outer(&outer);
        assert_eq!(plain.line_spacing, 10.0);
        assert_eq!(plain.head_indent, 23.0);
        assert_eq!(plain.tab_stops, outer.tab_stops);
    }

    #[test]
    fn test_link_target_absolute() {
        let target = LinkTarget::parse("https://example.com").unwrap();
        assert_eq!(target.as_str(), "https://example.com");
        assert_eq!(target.url().unwrap().host_str(), Some("example.com"));
    }

    #[test]
    fn test_link_target_relative() {
        let target = LinkTarget::parse("/docs/intro.md").unwrap();
        assert_eq!(target.as_str(), "/docs/intro.md");
        assert!(target.url().is_none());
    }

    #[test]
    fn test_link_target_rejects_empty_and_malformed() {
        assert!(LinkTarget::parse("").is_none());
        assert!(LinkTarget::parse("   ").is_none());
        assert!(LinkTarget::parse("http://[::1").is_none());
        assert!(LinkTarget::parse("not a url").is_none());
    }
}
