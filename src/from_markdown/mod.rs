// Markdown source → AST.
//
// Parses with pulldown-cmark and folds its flat event stream into an owned
// `ast::Node` tree. Each `Start` event opens a frame on a stack; the matching
// `End` closes it into a node and hands it to the enclosing frame. Tags with
// no AST counterpart are transparent: their children go to the parent.

pub(crate) mod wrap;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::ast::{self, Node};

/// A node under construction.
enum Pending {
    Document,
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock(Option<String>),
    HtmlBlock,
    List(Option<u64>),
    Item(Option<bool>),
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        destination: String,
        title: String,
    },
    Image {
        source: String,
        title: String,
    },
    Table,
    TableRow,
    TableCell,
    Transparent,
}

struct Frame {
    pending: Pending,
    children: Vec<Node>,
}

impl Frame {
    fn new(pending: Pending) -> Self {
        Self {
            pending,
            children: Vec::new(),
        }
    }
}

/// Parse a Markdown string into a `Node::Document`.
pub(crate) fn parse(markdown: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut stack = vec![Frame::new(Pending::Document)];
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => stack.push(Frame::new(open(tag))),
            Event::End(_) => {
                // The root frame is never closed by an event.
                if stack.len() > 1 {
                    if let Some(frame) = stack.pop() {
                        close(frame, &mut stack);
                    }
                }
            }
            Event::Text(text) => push(&mut stack, Node::text(text.into_string())),
            Event::Code(code) => push(&mut stack, Node::inline_code(code.into_string())),
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                push(&mut stack, Node::inline_code(math.into_string()))
            }
            Event::Html(html) | Event::InlineHtml(html) => push(
                &mut stack,
                Node::Html(ast::Html {
                    value: html.into_string(),
                }),
            ),
            Event::FootnoteReference(label) => {
                push(&mut stack, Node::text(format!("[^{}]", &*label)))
            }
            Event::SoftBreak => push(&mut stack, Node::SoftBreak(ast::SoftBreak)),
            Event::HardBreak => push(&mut stack, Node::LineBreak(ast::LineBreak)),
            Event::Rule => push(&mut stack, Node::ThematicBreak(ast::ThematicBreak)),
            Event::TaskListMarker(checked) => {
                // Loose items report the marker inside their first paragraph.
                let item = stack.iter_mut().rev().find_map(|frame| match &mut frame.pending {
                    Pending::Item(state) => Some(state),
                    _ => None,
                });
                if let Some(state) = item {
                    *state = Some(checked);
                }
            }
        }
    }

    // Fold anything left open (only possible on a truncated stream).
    while stack.len() > 1 {
        if let Some(frame) = stack.pop() {
            close(frame, &mut stack);
        }
    }
    let children = stack.pop().map(|f| f.children).unwrap_or_default();
    Node::document(children)
}

/// Map an opening tag to the node it will become.
fn open(tag: Tag<'_>) -> Pending {
    match tag {
        Tag::Paragraph => Pending::Paragraph,
        Tag::Heading { level, .. } => Pending::Heading(heading_level(level)),
        Tag::BlockQuote(_) => Pending::BlockQuote,
        Tag::CodeBlock(kind) => Pending::CodeBlock(match kind {
            CodeBlockKind::Fenced(info) => info
                .split_whitespace()
                .next()
                .map(String::from),
            CodeBlockKind::Indented => None,
        }),
        Tag::HtmlBlock => Pending::HtmlBlock,
        Tag::List(start) => Pending::List(start),
        Tag::Item => Pending::Item(None),
        Tag::Emphasis => Pending::Emphasis,
        Tag::Strong => Pending::Strong,
        Tag::Strikethrough => Pending::Strikethrough,
        Tag::Link {
            dest_url, title, ..
        } => Pending::Link {
            destination: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => Pending::Image {
            source: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Table(_) => Pending::Table,
        Tag::TableHead | Tag::TableRow => Pending::TableRow,
        Tag::TableCell => Pending::TableCell,
        _ => Pending::Transparent,
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Append a finished node to the innermost open frame.
fn push(stack: &mut [Frame], node: Node) {
    if let Some(frame) = stack.last_mut() {
        frame.children.push(node);
    }
}

/// Turn a closed frame into a node (or nodes) on its parent.
fn close(frame: Frame, stack: &mut Vec<Frame>) {
    let Frame { pending, children } = frame;
    let node = match pending {
        Pending::Document | Pending::Transparent => {
            if let Some(parent) = stack.last_mut() {
                parent.children.extend(children);
            }
            return;
        }
        Pending::Paragraph => Node::paragraph(children),
        Pending::Heading(level) => Node::heading(level, children),
        Pending::BlockQuote => Node::block_quote(children),
        Pending::CodeBlock(lang) => Node::CodeBlock(ast::CodeBlock {
            value: Node::document(children).plain_text(),
            lang,
        }),
        Pending::HtmlBlock => Node::Html(ast::Html {
            value: children
                .iter()
                .map(|c| match c {
                    Node::Html(h) => h.value.as_str(),
                    Node::Text(t) => t.value.as_str(),
                    _ => "",
                })
                .collect(),
        }),
        Pending::List(Some(start)) => Node::OrderedList(ast::OrderedList {
            start: Some(start),
            children,
        }),
        Pending::List(None) => Node::unordered_list(children),
        Pending::Item(checked) => Node::ListItem(ast::ListItem {
            checked,
            children: wrap::wrap(children),
        }),
        Pending::Emphasis => Node::emphasis(children),
        Pending::Strong => Node::strong(children),
        Pending::Strikethrough => Node::strikethrough(children),
        Pending::Link { destination, title } => Node::Link(ast::Link {
            destination: non_empty(destination),
            title: non_empty(title),
            children,
        }),
        Pending::Image { source, title } => Node::Image(ast::Image {
            source: non_empty(source),
            title: non_empty(title),
            children,
        }),
        Pending::Table => Node::Table(ast::Table { children }),
        Pending::TableRow => Node::TableRow(ast::TableRow { children }),
        Pending::TableCell => Node::TableCell(ast::TableCell { children }),
    };
    push(stack, node);
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn blocks(markdown: &str) -> Vec<Node> {
        let mut doc = parse(markdown);
        assert!(matches!(doc, Node::Document(_)), "expected document, got {doc:?}");
        std::mem::take(doc.children_mut().unwrap())
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(""), Node::document(vec![]));
    }

    #[test]
    fn test_paragraph_with_emphasis() {
        assert_eq!(
            blocks("a *b* **c** ~~d~~"),
            vec![Node::paragraph(vec![
                Node::text("a "),
                Node::emphasis(vec![Node::text("b")]),
                Node::text(" "),
                Node::strong(vec![Node::text("c")]),
                Node::text(" "),
                Node::strikethrough(vec![Node::text("d")]),
            ])]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            blocks("### Three"),
            vec![Node::heading(3, vec![Node::text("Three")])]
        );
    }

    #[test]
    fn test_seven_hashes_is_a_paragraph() {
        assert_eq!(
            blocks("####### Heading 7"),
            vec![Node::paragraph(vec![Node::text("####### Heading 7")])]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            blocks("[Duck](https://duckduckgo.com)"),
            vec![Node::paragraph(vec![Node::link(
                Some("https://duckduckgo.com"),
                vec![Node::text("Duck")]
            )])]
        );
    }

    #[test]
    fn test_link_without_destination() {
        assert_eq!(
            blocks("[Duck]()"),
            vec![Node::paragraph(vec![Node::link(None, vec![Node::text("Duck")])])]
        );
    }

    #[test]
    fn test_fenced_code_block() {
        assert_eq!(
            blocks("```rust\nlet a = 10;\n```"),
            vec![Node::CodeBlock(ast::CodeBlock {
                value: "let a = 10;\n".into(),
                lang: Some("rust".into()),
            })]
        );
    }

    #[test]
    fn test_tight_list_items_get_paragraphs() {
        assert_eq!(
            blocks("- a\n- b"),
            vec![Node::unordered_list(vec![
                Node::list_item(vec![Node::paragraph(vec![Node::text("a")])]),
                Node::list_item(vec![Node::paragraph(vec![Node::text("b")])]),
            ])]
        );
    }

    #[test]
    fn test_ordered_list_keeps_start() {
        let nodes = blocks("3. a\n4. b");
        assert!(matches!(
            &nodes[0],
            Node::OrderedList(ast::OrderedList { start: Some(3), children }) if children.len() == 2
        ));
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            blocks("- a\n  - b"),
            vec![Node::unordered_list(vec![Node::list_item(vec![
                Node::paragraph(vec![Node::text("a")]),
                Node::unordered_list(vec![Node::list_item(vec![Node::paragraph(vec![
                    Node::text("b")
                ])])]),
            ])])]
        );
    }

    #[test]
    fn test_task_list_marker() {
        let nodes = blocks("- [x] done");
        let Node::UnorderedList(list) = &nodes[0] else {
            panic!("expected list");
        };
        assert!(matches!(
            &list.children[0],
            Node::ListItem(ast::ListItem { checked: Some(true), .. })
        ));
    }

    #[test]
    fn test_block_quote() {
        assert_eq!(
            blocks("> a\n>\n> b"),
            vec![Node::block_quote(vec![
                Node::paragraph(vec![Node::text("a")]),
                Node::paragraph(vec![Node::text("b")]),
            ])]
        );
    }

    #[test]
    fn test_soft_break() {
        assert_eq!(
            blocks("a\nb"),
            vec![Node::paragraph(vec![
                Node::text("a"),
                Node::SoftBreak(ast::SoftBreak),
                Node::text("b"),
            ])]
        );
    }

    #[test]
    fn test_table_cells() {
        let nodes = blocks("| h |\n|---|\n| c |");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].plain_text(), "hc");
        assert!(matches!(nodes[0], Node::Table(_)));
    }
}
