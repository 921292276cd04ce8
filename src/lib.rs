// styled-markdown: render a Markdown AST into themed, attributed text runs.
//
// Architecture:
//   Markdown string → pulldown-cmark events → from_markdown → AST → render → StyledText
//
// The renderer is a single depth-first pass. Each node kind has one rule that
// builds a styled buffer from its children's buffers and the theme; nesting
// depth and sibling adjacency are threaded down instead of looked up through
// parent links. Measuring the laid-out height is delegated to the host through
// `TextMetrics`.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub mod ast;
mod error;
#[cfg(feature = "markdown")]
mod from_markdown;
pub mod metrics;
mod render;
pub mod style;
pub mod styled;
pub mod theme;

pub use error::StyledMarkdownError;
pub use metrics::{measure_height, EstimatedMetrics, TextMetrics};
pub use render::Renderer;
pub use styled::{Run, StyledText};
pub use theme::Theme;

/// Render a document tree with the given theme, estimating glyph widths.
///
/// # Examples
///
/// ```
/// use styled_markdown::ast::Node;
/// use styled_markdown::{render, Theme};
///
/// let doc = Node::document(vec![Node::paragraph(vec![Node::text("Hello")])]);
/// let text = render(&doc, &Theme::base());
/// assert_eq!(text.as_string(), "Hello");
/// ```
pub fn render(document: &ast::Node, theme: &Theme) -> StyledText {
    Renderer::new(theme).render(document)
}

/// Render a document tree, measuring glyphs with the host's metrics.
pub fn render_with(document: &ast::Node, theme: &Theme, metrics: &dyn TextMetrics) -> StyledText {
    Renderer::with_metrics(theme, metrics).render(document)
}

/// Parse Markdown source into a document tree.
///
/// # Examples
///
/// ```
/// use styled_markdown::ast::Node;
///
/// let doc = styled_markdown::parse("# Title");
/// assert!(matches!(doc, Node::Document(_)));
/// ```
#[cfg(feature = "markdown")]
pub fn parse(markdown: &str) -> ast::Node {
    from_markdown::parse(markdown)
}

/// Parse and render Markdown source in one step.
///
/// # Examples
///
/// ```
/// use styled_markdown::{render_markdown, Theme};
///
/// let text = render_markdown("Some **bold** text", &Theme::base());
/// assert_eq!(text.as_string(), "Some bold text");
/// ```
#[cfg(feature = "markdown")]
pub fn render_markdown(markdown: &str, theme: &Theme) -> StyledText {
    render(&parse(markdown), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::Node;

    #[test]
    fn test_render_empty_document() {
        let result = render(&Node::document(vec![]), &Theme::base());
        assert!(result.is_empty());
        assert_eq!(result.as_string(), "");
    }

    #[test]
    fn test_render_simple_paragraph() {
        let doc = Node::document(vec![Node::paragraph(vec![Node::text("Hello, world!")])]);
        let result = render(&doc, &Theme::base());
        assert_eq!(result.as_string(), "Hello, world!");
    }

    #[test]
    fn test_render_with_custom_metrics() {
        struct Wide;
        impl TextMetrics for Wide {
            fn text_width(&self, text: &str, _font: &style::Font) -> f64 {
                text.chars().count() as f64 * 100.0
            }
            fn content_height(&self, _text: &StyledText, _width: Option<f64>) -> f64 {
                0.0
            }
        }

        let doc = Node::document(vec![Node::unordered_list(vec![Node::list_item(vec![
            Node::paragraph(vec![Node::text("x")]),
        ])])]);
        let result = render_with(&doc, &Theme::base(), &Wide);
        let style = result.runs()[0].attributes.paragraph_style.as_ref().unwrap();
        // 15 left margin + 100 bullet width.
        assert_eq!(style.tab_stops[0].location, 115.0);
    }

    #[test]
    fn test_measure_height_of_rendered_text() {
        let doc = Node::document(vec![Node::paragraph(vec![Node::text("Hello")])]);
        let result = render(&doc, &Theme::base());
        let height = measure_height(&result, None, &EstimatedMetrics);
        assert_eq!(height, 18.0);
    }

    #[cfg(feature = "markdown")]
    #[test]
    fn test_render_markdown() {
        let result = render_markdown("# Title\n\nBody", &Theme::base());
        assert_eq!(result.as_string(), "Title\n\nBody");
    }
}
