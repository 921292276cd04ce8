// AST → styled text renderer.
//
// Walks the tree depth-first and returns one `StyledText` per node. All
// visual parameters come from the `Theme`; glyph widths come from the host's
// `TextMetrics`. The renderer holds no mutable state, so a value can be shared
// freely and every render call is independent.

pub(crate) mod handlers;
pub(crate) mod layout;

use crate::ast::Node;
use crate::metrics::{EstimatedMetrics, TextMetrics};
use crate::style::Attributes;
use crate::styled::StyledText;
use crate::theme::Theme;

/// Nesting level past which subtrees are rendered as plain text.
pub(crate) const MAX_NESTING: usize = 256;

/// Renders document trees with a theme.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    pub(crate) theme: &'a Theme,
    pub(crate) metrics: &'a dyn TextMetrics,
}

impl<'a> Renderer<'a> {
    /// A renderer that estimates glyph widths with [`EstimatedMetrics`].
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_metrics(theme, &EstimatedMetrics)
    }

    /// A renderer that measures glyphs with the host's metrics.
    pub fn with_metrics(theme: &'a Theme, metrics: &'a dyn TextMetrics) -> Self {
        Self { theme, metrics }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Render `node` and everything below it.
    pub fn render(&self, node: &Node) -> StyledText {
        debug!("rendering {}", node_kind(node));
        handlers::handle(self, node, Context::default())
    }

    /// A newline run (`count` newlines) in the text font.
    pub(crate) fn newlines(&self, count: usize) -> StyledText {
        StyledText::from_run(
            "\n".repeat(count),
            Attributes::with_font(self.theme.text_font.clone()),
        )
    }
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("theme", self.theme)
            .finish_non_exhaustive()
    }
}

/// Position of a node in the tree, threaded down from the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Context {
    /// Number of enclosing lists.
    pub list_depth: usize,
    /// Number of enclosing block quotes.
    pub quote_depth: usize,
    /// Whether a sibling follows this node.
    pub has_successor: bool,
    /// Number of enclosing nodes of any kind.
    pub nesting: usize,
}

impl Context {
    /// Whether any ancestor is a list.
    pub fn in_list(&self) -> bool {
        self.list_depth > 0
    }

    /// Context for a child of the current node.
    pub fn child(self, has_successor: bool) -> Self {
        Self {
            has_successor,
            nesting: self.nesting + 1,
            ..self
        }
    }

    /// Context for the children of a list.
    pub fn enter_list(self) -> Self {
        Self {
            list_depth: self.list_depth + 1,
            ..self
        }
    }

    /// Context for the children of a block quote.
    pub fn enter_quote(self) -> Self {
        Self {
            quote_depth: self.quote_depth + 1,
            ..self
        }
    }
}

/// Short name of a node's kind, for diagnostics.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Document(_) => "document",
        Node::BlockQuote(_) => "block-quote",
        Node::CodeBlock(_) => "code-block",
        Node::Heading(_) => "heading",
        Node::UnorderedList(_) => "unordered-list",
        Node::OrderedList(_) => "ordered-list",
        Node::ListItem(_) => "list-item",
        Node::Paragraph(_) => "paragraph",
        Node::ThematicBreak(_) => "thematic-break",
        Node::Html(_) => "html",
        Node::Text(_) => "text",
        Node::Emphasis(_) => "emphasis",
        Node::Strong(_) => "strong",
        Node::Strikethrough(_) => "strikethrough",
        Node::InlineCode(_) => "inline-code",
        Node::Link(_) => "link",
        Node::Image(_) => "image",
        Node::SoftBreak(_) => "soft-break",
        Node::LineBreak(_) => "line-break",
        Node::Table(_) => "table",
        Node::TableRow(_) => "table-row",
        Node::TableCell(_) => "table-cell",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_child_tracks_nesting() {
        let cx = Context::default().enter_list().child(true);
        assert_eq!(cx.list_depth, 1);
        assert_eq!(cx.nesting, 1);
        assert!(cx.has_successor);
        assert!(cx.in_list());
        assert!(!Context::default().in_list());
    }

    #[test]
    fn test_enter_quote_keeps_list_depth() {
        let cx = Context::default().enter_list().enter_quote().enter_quote();
        assert_eq!(cx.quote_depth, 2);
        assert_eq!(cx.list_depth, 1);
    }

    #[test]
    fn test_node_kind() {
        assert_eq!(node_kind(&Node::text("x")), "text");
        assert_eq!(node_kind(&Node::ordered_list(vec![])), "ordered-list");
    }

    #[test]
    fn test_renderer_is_reusable() {
        let theme = Theme::base();
        let renderer = Renderer::new(&theme);
        let doc = Node::document(vec![Node::paragraph(vec![Node::text("a")])]);
        assert_eq!(renderer.render(&doc), renderer.render(&doc));
    }

    #[test]
    fn test_renderer_exposes_its_theme() {
        let theme = Theme::link_summary();
        let renderer = Renderer::new(&theme);
        assert_eq!(renderer.theme(), &theme);
        assert_eq!(renderer.theme().list_right_margin, 6.0);
    }
}
