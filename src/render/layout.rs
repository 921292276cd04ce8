// Indented containers: unordered lists, ordered lists, and block quotes.
//
// Each item or quoted child is prefixed with tab runs and given a paragraph
// style whose tab stops line the prefix and content up into columns. The
// columns move right by a fixed margin per level of nesting.

use super::handlers::handle;
use super::{Context, Renderer};
use crate::ast;
use crate::style::{Attributes, Font, ParagraphStyle, TabStop};
use crate::styled::StyledText;
use crate::theme::Theme;

/// Tab-stop columns of one list level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ListColumns {
    /// Right-aligned stop the marker ends at.
    pub marker_stop: f64,
    /// Left-aligned stop item content starts at.
    pub content_stop: f64,
}

impl ListColumns {
    pub fn new(theme: &Theme, depth: usize, marker_width: f64) -> Self {
        let marker_stop = list_left_margin(theme, depth) + marker_width;
        Self {
            marker_stop,
            content_stop: marker_stop + theme.list_right_margin,
        }
    }

    pub fn paragraph_style(&self, line_spacing: f64) -> ParagraphStyle {
        ParagraphStyle {
            line_spacing,
            head_indent: self.content_stop,
            tab_stops: vec![
                TabStop::right(self.marker_stop),
                TabStop::left(self.content_stop),
            ],
        }
    }
}

/// Left margin of a list nested `depth` lists deep.
pub(crate) fn list_left_margin(theme: &Theme, depth: usize) -> f64 {
    theme.list_left_margin + theme.list_depth_margin * depth as f64
}

/// Left margin of a quote nested inside `depth` other quotes.
pub(crate) fn quote_left_margin(theme: &Theme, depth: usize) -> f64 {
    theme.quote_left_margin + theme.quote_depth_margin * depth as f64
}

/// Width of a marker, rounded up to whole points.
fn marker_width(r: &Renderer, marker: &str, font: &Font) -> f64 {
    r.metrics.text_width(marker, font).ceil()
}

pub(crate) fn handle_unordered_list(
    r: &Renderer,
    node: &ast::UnorderedList,
    cx: Context,
) -> StyledText {
    let theme = r.theme;
    let tag = theme.unordered_list_tag.as_str();
    let columns = ListColumns::new(
        theme,
        cx.list_depth,
        marker_width(r, tag, &theme.unordered_bullet_font),
    );
    let content_attrs = Attributes::with_font(theme.list_item_content_font.clone());
    let bullet_attrs = Attributes::with_font(theme.unordered_bullet_font.clone());

    let items = cx.enter_list();
    let count = node.children.len();
    let mut result = StyledText::new();
    for (i, item) in node.children.iter().enumerate() {
        let mut prefix = StyledText::new();
        prefix.push("\t", content_attrs.clone());
        prefix.push(tag, bullet_attrs.clone());
        prefix.push("\t", content_attrs.clone());

        let mut content = handle(r, item, items.child(i + 1 < count));
        content.prepend(prefix);
        finish_item(&mut content, theme, &columns, cx.list_depth);
        result.append(content);
    }

    if cx.has_successor {
        result.append(r.newlines(if cx.in_list() { 1 } else { 2 }));
    }
    result
}

pub(crate) fn handle_ordered_list(r: &Renderer, node: &ast::OrderedList, cx: Context) -> StyledText {
    let theme = r.theme;
    let count = node.children.len();
    // Digits of the numeral font share one advance, so the last number is the
    // widest.
    let widest = format!("{count}.");
    let columns = ListColumns::new(
        theme,
        cx.list_depth,
        marker_width(r, &widest, &theme.ordered_numeral_font),
    );
    let numeral_attrs = Attributes::with_font(theme.ordered_numeral_font.clone());

    let items = cx.enter_list();
    let mut result = StyledText::new();
    for (i, item) in node.children.iter().enumerate() {
        let prefix = StyledText::from_run(format!("\t{}.\t", i + 1), numeral_attrs.clone());

        let mut content = handle(r, item, items.child(i + 1 < count));
        content.prepend(prefix);
        finish_item(&mut content, theme, &columns, cx.list_depth);
        result.append(content);
    }

    if cx.has_successor {
        result.append(r.newlines(if cx.in_list() { 1 } else { 2 }));
    }
    result
}

/// Lay a prefixed item out in its list's columns.
fn finish_item(content: &mut StyledText, theme: &Theme, columns: &ListColumns, depth: usize) {
    content.apply_paragraph_style(&columns.paragraph_style(theme.paragraph_line_spacing));
    content.fill_font(&theme.list_item_content_font);
    content.fill_list_depth(depth);
}

pub(crate) fn handle_block_quote(r: &Renderer, node: &ast::BlockQuote, cx: Context) -> StyledText {
    let theme = r.theme;
    let margin = quote_left_margin(theme, cx.quote_depth);
    let style = ParagraphStyle {
        line_spacing: theme.paragraph_line_spacing,
        head_indent: margin,
        tab_stops: vec![TabStop::left(margin)],
    };
    let tab_attrs = Attributes::with_font(theme.quote_font.clone());

    let inner = cx.enter_quote();
    let count = node.children.len();
    let mut result = StyledText::new();
    for (i, child) in node.children.iter().enumerate() {
        let mut content = handle(r, child, inner.child(i + 1 < count));
        content.prepend(StyledText::from_run("\t", tab_attrs.clone()));
        content.apply_paragraph_style(&style);
        content.fill_quote_depth(cx.quote_depth);
        content.set_foreground(theme.quote_foreground_color);
        result.append(content);
    }

    if cx.has_successor {
        result.append(r.newlines(2));
    }
    result
}
