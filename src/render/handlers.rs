// Node kind handlers for AST → styled text rendering.
//
// One handler per node kind. Each takes the renderer, the node, and its
// position in the tree, and returns the node's styled buffer. Kinds without
// a handler of their own fall through to `default_visit`.

use super::{layout, Context, Renderer, MAX_NESTING};
use crate::ast::{self, Node};
use crate::style::{Attributes, LinkTarget, ParagraphStyle};
use crate::styled::StyledText;

/// Smallest point size a heading can shrink to.
const MIN_HEADING_POINT_SIZE: f64 = 1.0;

/// Dispatch to the appropriate handler for a node.
pub(crate) fn handle(r: &Renderer, node: &Node, cx: Context) -> StyledText {
    if cx.nesting > MAX_NESTING {
        return handle_too_deep(r, node);
    }
    match node {
        Node::Document(n) => handle_document(r, n, cx),
        Node::Paragraph(n) => handle_paragraph(r, n, cx),
        Node::Heading(n) => handle_heading(r, n, cx),
        Node::BlockQuote(n) => layout::handle_block_quote(r, n, cx),
        Node::UnorderedList(n) => layout::handle_unordered_list(r, n, cx),
        Node::OrderedList(n) => layout::handle_ordered_list(r, n, cx),
        Node::ListItem(n) => handle_list_item(r, n, cx),
        Node::CodeBlock(n) => handle_code_block(r, n, cx),
        Node::Text(n) => handle_text(r, n),
        Node::Emphasis(n) => handle_emphasis(r, n, cx),
        Node::Strong(n) => handle_strong(r, n, cx),
        Node::Strikethrough(n) => handle_strikethrough(r, n, cx),
        Node::InlineCode(n) => handle_inline_code(r, n),
        Node::Link(n) => handle_link(r, n, cx),
        Node::SoftBreak(_) => handle_soft_break(r),
        Node::LineBreak(_) => handle_line_break(r),
        Node::ThematicBreak(_)
        | Node::Html(_)
        | Node::Image(_)
        | Node::Table(_)
        | Node::TableRow(_)
        | Node::TableCell(_) => default_visit(r, node, cx),
    }
}

/// Concatenate the children's buffers with no styling of our own.
pub(crate) fn default_visit(r: &Renderer, node: &Node, cx: Context) -> StyledText {
    children(r, node.children().unwrap_or_default(), cx)
}

/// Render a run of siblings in order, telling each whether one follows it.
pub(crate) fn children(r: &Renderer, nodes: &[Node], cx: Context) -> StyledText {
    let count = nodes.len();
    nodes
        .iter()
        .enumerate()
        .map(|(i, child)| handle(r, child, cx.child(i + 1 < count)))
        .collect()
}

/// Subtrees nested past `MAX_NESTING` keep their text and lose their styling.
fn handle_too_deep(r: &Renderer, node: &Node) -> StyledText {
    debug!("nesting limit reached at {}", super::node_kind(node));
    StyledText::from_run(
        node.plain_text(),
        Attributes::with_font(r.theme.text_font.clone()),
    )
}

// ---------------------------------------------------------------------------
// Block handlers
// ---------------------------------------------------------------------------

fn handle_document(r: &Renderer, node: &ast::Document, cx: Context) -> StyledText {
    children(r, &node.children, cx)
}

fn handle_paragraph(r: &Renderer, node: &ast::Paragraph, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    trace!("paragraph: {:?}", result.as_string());
    result.apply_paragraph_style(&ParagraphStyle::with_line_spacing(
        r.theme.paragraph_line_spacing,
    ));

    if cx.has_successor {
        result.append(r.newlines(if cx.in_list() { 1 } else { 2 }));
    }
    result
}

fn handle_heading(r: &Renderer, node: &ast::Heading, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    let size = heading_point_size(r.theme.heading_max_point_size, node.level);
    trace!("heading {}: {:?} at {}pt", node.level, result.as_string(), size);
    result.apply_font_traits(r.theme.heading_font_traits, Some(size));

    if cx.has_successor {
        result.append(r.newlines(2));
    }
    result
}

/// Point size for a heading level: `max - 2 × level`. Levels outside 1–6 are
/// clamped, and the result never drops below one point.
pub(crate) fn heading_point_size(max_point_size: f64, level: u8) -> f64 {
    let level = level.clamp(1, 6);
    (max_point_size - 2.0 * f64::from(level)).max(MIN_HEADING_POINT_SIZE)
}

fn handle_list_item(r: &Renderer, node: &ast::ListItem, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    // The blank line after a list belongs to the list, never to an item.
    if cx.has_successor {
        result.append(r.newlines(1));
    }
    result
}

fn handle_code_block(r: &Renderer, node: &ast::CodeBlock, cx: Context) -> StyledText {
    let mut result = StyledText::from_run(
        node.value.as_str(),
        Attributes::with_font(r.theme.code_font.clone()).foreground(r.theme.code_foreground_color),
    );
    if cx.has_successor {
        result.append(r.newlines(1));
    }
    result
}

// ---------------------------------------------------------------------------
// Inline handlers
// ---------------------------------------------------------------------------

fn handle_text(r: &Renderer, node: &ast::Text) -> StyledText {
    trace!("text: {:?}", node.value);
    StyledText::from_run(
        node.value.as_str(),
        Attributes::with_font(r.theme.text_font.clone()),
    )
}

fn handle_emphasis(r: &Renderer, node: &ast::Emphasis, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    result.apply_font_traits(r.theme.emphasis_font_traits, None);
    result
}

fn handle_strong(r: &Renderer, node: &ast::Strong, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    result.apply_font_traits(r.theme.strong_font_traits, None);
    result
}

fn handle_strikethrough(r: &Renderer, node: &ast::Strikethrough, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    result.set_strikethrough(r.theme.strikethrough_style);
    result
}

fn handle_inline_code(r: &Renderer, node: &ast::InlineCode) -> StyledText {
    StyledText::from_run(
        node.value.as_str(),
        Attributes::with_font(r.theme.code_font.clone()).foreground(r.theme.code_foreground_color),
    )
}

fn handle_link(r: &Renderer, node: &ast::Link, cx: Context) -> StyledText {
    let mut result = children(r, &node.children, cx);
    result.set_foreground(r.theme.link_color);

    if let Some(destination) = node.destination.as_deref() {
        match LinkTarget::parse(destination) {
            Some(target) => result.set_link(&target),
            None => {
                debug!("dropping unusable link destination {:?}", destination);
            }
        }
    }
    result
}

fn handle_soft_break(r: &Renderer) -> StyledText {
    StyledText::from_run(" ", Attributes::with_font(r.theme.text_font.clone()))
}

fn handle_line_break(r: &Renderer) -> StyledText {
    r.newlines(1)
}
