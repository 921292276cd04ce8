// Markdown AST node types.
//
// The tree the renderer walks. Each node kind is a variant of the `Node` enum.
// Parent nodes own their children; there are no parent back-references, so
// nesting depth and sibling adjacency are threaded down by the renderer.
// Leaf nodes hold a `value: String`.

// ---------------------------------------------------------------------------
// Node structs
// ---------------------------------------------------------------------------

/// Document root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

/// Block quote (`> ...`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockQuote {
    pub children: Vec<Node>,
}

/// Fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub value: String,
    pub lang: Option<String>,
}

/// ATX or setext heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8, // 1–6 by the grammar, not enforced
    pub children: Vec<Node>,
}

/// Bulleted list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnorderedList {
    pub children: Vec<Node>, // ListItem
}

/// Numbered list. `start` is the literal number of the first marker in the
/// source; rendering always numbers from 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedList {
    pub start: Option<u64>,
    pub children: Vec<Node>, // ListItem
}

/// Item inside a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub checked: Option<bool>,
    pub children: Vec<Node>,
}

/// Paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Thematic break (`***`, `---`, `___`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThematicBreak;

/// Raw HTML, block or inline.
#[derive(Debug, Clone, PartialEq)]
pub struct Html {
    pub value: String,
}

/// Plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

/// Emphasis (`*text*` or `_text_`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strong emphasis (`**text**` or `__text__`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Strikethrough (`~~text~~`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Strikethrough {
    pub children: Vec<Node>,
}

/// Inline code (`` `code` ``).
#[derive(Debug, Clone, PartialEq)]
pub struct InlineCode {
    pub value: String,
}

/// Soft line break (a newline inside a paragraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftBreak;

/// Hard line break (`\` or two spaces at end of line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreak;

/// Hyperlink (`[text](url "title")`). A missing destination is `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub destination: Option<String>,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

/// Image (`![alt](url "title")`). The alt text is kept as children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub source: Option<String>,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

// GFM tables -------------------------------------------------------------

/// GFM table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub children: Vec<Node>, // TableRow
}

/// Row in a GFM table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub children: Vec<Node>, // TableCell
}

/// Cell in a GFM table row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub children: Vec<Node>,
}

// ---------------------------------------------------------------------------
// Node enum
// ---------------------------------------------------------------------------

/// A node in the Markdown abstract syntax tree.
///
/// Dropping a tree is iterative, so any depth is safe. The derived `Clone`,
/// `PartialEq` and `Debug` recurse and are bounded by the thread's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Document
    Document(Document),

    // Block content
    BlockQuote(BlockQuote),
    CodeBlock(CodeBlock),
    Heading(Heading),
    UnorderedList(UnorderedList),
    OrderedList(OrderedList),
    ListItem(ListItem),
    Paragraph(Paragraph),
    ThematicBreak(ThematicBreak),
    Html(Html),

    // Inline content
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    Strikethrough(Strikethrough),
    InlineCode(InlineCode),
    Link(Link),
    Image(Image),
    SoftBreak(SoftBreak),
    LineBreak(LineBreak),

    // Tables (GFM)
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
}

impl Node {
    /// Returns a reference to this node's children, if it has any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Document(n) => Some(&n.children),
            Node::BlockQuote(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::UnorderedList(n) => Some(&n.children),
            Node::OrderedList(n) => Some(&n.children),
            Node::ListItem(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Strikethrough(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::Image(n) => Some(&n.children),
            Node::Table(n) => Some(&n.children),
            Node::TableRow(n) => Some(&n.children),
            Node::TableCell(n) => Some(&n.children),
            _ => None,
        }
    }

    /// Returns a mutable reference to this node's children, if it has any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document(n) => Some(&mut n.children),
            Node::BlockQuote(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::UnorderedList(n) => Some(&mut n.children),
            Node::OrderedList(n) => Some(&mut n.children),
            Node::ListItem(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Strikethrough(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::Image(n) => Some(&mut n.children),
            Node::Table(n) => Some(&mut n.children),
            Node::TableRow(n) => Some(&mut n.children),
            Node::TableCell(n) => Some(&mut n.children),
            _ => None,
        }
    }

    /// Whether this node is inline content.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::Text(_)
                | Node::Emphasis(_)
                | Node::Strong(_)
                | Node::Strikethrough(_)
                | Node::InlineCode(_)
                | Node::Link(_)
                | Node::Image(_)
                | Node::SoftBreak(_)
                | Node::LineBreak(_)
        )
    }

    /// Whether this node is a list container (ordered or unordered).
    pub fn is_list(&self) -> bool {
        matches!(self, Node::UnorderedList(_) | Node::OrderedList(_))
    }

    /// Concatenated text content of this node and its descendants.
    ///
    /// Walks with an explicit stack, so arbitrarily deep trees are safe.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(n) => out.push_str(&n.value),
                Node::InlineCode(n) => out.push_str(&n.value),
                Node::CodeBlock(n) => out.push_str(&n.value),
                Node::SoftBreak(_) => out.push(' '),
                Node::LineBreak(_) => out.push('\n'),
                _ => {
                    if let Some(children) = node.children() {
                        stack.extend(children.iter().rev());
                    }
                }
            }
        }
        out
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let Some(children) = self.children_mut() else {
            return;
        };
        if children.is_empty() {
            return;
        }
        // Detach descendants onto a heap stack so each node drops childless.
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Some(grandchildren) = node.children_mut() {
                pending.append(grandchildren);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Node {
    /// A text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// An inline code leaf.
    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode(InlineCode {
            value: value.into(),
        })
    }

    /// A code block without an info string.
    pub fn code_block(value: impl Into<String>) -> Self {
        Node::CodeBlock(CodeBlock {
            value: value.into(),
            lang: None,
        })
    }

    pub fn document(children: Vec<Node>) -> Self {
        Node::Document(Document { children })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { level, children })
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    pub fn strikethrough(children: Vec<Node>) -> Self {
        Node::Strikethrough(Strikethrough { children })
    }

    /// A link; pass `None` for a link without a destination.
    pub fn link(destination: Option<&str>, children: Vec<Node>) -> Self {
        Node::Link(Link {
            destination: destination.map(String::from),
            title: None,
            children,
        })
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::BlockQuote(BlockQuote { children })
    }

    pub fn unordered_list(items: Vec<Node>) -> Self {
        Node::UnorderedList(UnorderedList { children: items })
    }

    pub fn ordered_list(items: Vec<Node>) -> Self {
        Node::OrderedList(OrderedList {
            start: None,
            children: items,
        })
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItem {
            checked: None,
            children,
        })
    }
}
