// Implicit paragraphs for tight list items.
//
// A tight list item carries its inline content directly, without a paragraph
// around it. The renderer only breaks lines between items through paragraph
// rules, so every run of inline children is wrapped in a `Paragraph`; block
// children pass through untouched.

use crate::ast::Node;

/// Wrap each run of inline nodes in a paragraph, keeping block nodes as-is.
///
/// Breaks at either end of a run are dropped, and runs holding nothing but
/// whitespace disappear.
pub(crate) fn wrap(nodes: Vec<Node>) -> Vec<Node> {
    if !nodes.iter().any(Node::is_inline) {
        return nodes;
    }

    let mut result = Vec::with_capacity(nodes.len());
    let mut inline_run: Vec<Node> = Vec::new();

    for node in nodes {
        if node.is_inline() {
            inline_run.push(node);
        } else {
            flush(&mut inline_run, &mut result);
            result.push(node);
        }
    }
    flush(&mut inline_run, &mut result);

    result
}

fn flush(run: &mut Vec<Node>, out: &mut Vec<Node>) {
    if run.is_empty() {
        return;
    }
    let run = drop_surrounding_breaks(std::mem::take(run));
    if !is_whitespace_only(&run) {
        out.push(Node::paragraph(run));
    }
}

fn is_break(node: &Node) -> bool {
    matches!(node, Node::SoftBreak(_) | Node::LineBreak(_))
}

fn drop_surrounding_breaks(mut run: Vec<Node>) -> Vec<Node> {
    while run.last().is_some_and(is_break) {
        run.pop();
    }
    let leading = run.iter().take_while(|n| is_break(n)).count();
    run.drain(..leading);
    run
}

fn is_whitespace_only(run: &[Node]) -> bool {
    run.iter().all(|node| match node {
        Node::Text(t) => t.value.trim().is_empty(),
        _ => false,
    })
}
