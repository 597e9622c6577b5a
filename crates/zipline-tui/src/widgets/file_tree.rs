//! File tree view for the results screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use zipline_core::FileNode;

use crate::theme;

/// Recursive tree render preserving the given node order
pub struct FileTreeView<'a> {
    nodes: &'a [FileNode],
}

impl<'a> FileTreeView<'a> {
    pub fn new(nodes: &'a [FileNode]) -> Self {
        Self { nodes }
    }
}

/// Flatten the tree into display lines, children indented under parents
fn flatten(nodes: &[FileNode], depth: usize, out: &mut Vec<Line<'static>>) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let line = if node.is_directory() {
            Line::from(vec![
                Span::raw(format!("{indent}▸ ")),
                Span::styled(
                    format!("{}/", node.name),
                    ratatui::style::Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw(format!("{indent}· ")),
                Span::raw(node.name.clone()),
            ])
        };
        out.push(line);
        flatten(&node.children, depth + 1, out);
    }
}

impl Widget for FileTreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Files ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        flatten(self.nodes, 0, &mut lines);
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_flatten_preserves_order_and_nesting() {
        let nodes = vec![
            FileNode::directory(
                "src",
                vec![FileNode::file("a.js"), FileNode::file("b.js")],
            ),
            FileNode::file("index.html"),
        ];

        let mut lines = Vec::new();
        flatten(&nodes, 0, &mut lines);

        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            rendered,
            vec!["▸ src/", "  · a.js", "  · b.js", "· index.html"]
        );
    }

    #[test]
    fn test_flatten_deep_nesting_indents_per_level() {
        let nodes = vec![FileNode::directory(
            "a",
            vec![FileNode::directory("b", vec![FileNode::file("c.txt")])],
        )];

        let mut lines = Vec::new();
        flatten(&nodes, 0, &mut lines);

        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(rendered, vec!["▸ a/", "  ▸ b/", "    · c.txt"]);
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        let mut lines = Vec::new();
        flatten(&[], 0, &mut lines);
        assert!(lines.is_empty());
    }
}
