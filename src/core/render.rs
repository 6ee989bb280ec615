//! # Rendering
//!
//! The engine never draws. A host implements [`Renderer`] and the engine calls
//! back into it, one method per node kind:
//!
//! ```text
//! Navigator::render(r)
//!     └─► r.render(tree, open_branch)
//!             └─► for each child: child.render(r)
//!                     ├─► r.render_item(..)
//!                     ├─► r.render_back_item(..)
//!                     ├─► r.render_editable_item(..)
//!                     └─► r.render_branch(..)
//! ```
//!
//! [`TextRenderer`] is a line-oriented implementation for serial consoles,
//! logs and tests.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use super::branch::Branch;
use super::editable::EditableItem;
use super::item::{BackItem, Item};
use super::tree::MenuTree;

pub trait Renderer {
    /// Entry point: draw the open branch and its children.
    fn render(&mut self, tree: &MenuTree, branch: &Branch);

    fn render_item(&mut self, item: &Item);

    fn render_back_item(&mut self, item: &BackItem);

    fn render_editable_item(&mut self, item: &EditableItem);

    /// A branch shown as an entry of its parent's list.
    fn render_branch(&mut self, branch: &Branch);
}

/// Marker appended to the current child's line.
pub const CURRENT_MARKER: &str = "<<<";

/// Renders a branch as plain text, one child per line:
///
/// ```text
/// Settings
/// Brightness=5
/// Contrast<3>  <<<
/// Back
/// ```
///
/// Editable items show `name=value`, or `name<value>` while being edited.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
    line: String,
    gauge_width: Option<usize>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// While an editable item is focused, draw its position within
    /// `[min, max]` as a `---|---` gauge of `width` cells.
    pub fn with_gauge(width: usize) -> Self {
        Self {
            gauge_width: Some(width.max(2)),
            ..Self::default()
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the accumulated text and starts over.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn finish_line(&mut self, current: bool, width: usize) {
        if current {
            let pad = width.saturating_sub(self.line.width()) + 1;
            let _ = write!(self.line, "{:pad$}{CURRENT_MARKER}", "");
        }
        self.output.push_str(self.line.trim_end());
        self.output.push('\n');
        self.line.clear();
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, tree: &MenuTree, branch: &Branch) {
        let _ = writeln!(self.output, "{}", branch.name());

        let mut lines = Vec::with_capacity(branch.len());
        for child in tree.children(branch) {
            child.render(self);
            lines.push((std::mem::take(&mut self.line), child.is_current()));
        }

        let width = lines.iter().map(|(line, _)| line.width()).max().unwrap_or(0);
        for (line, current) in lines {
            self.line = line;
            self.finish_line(current, width);
        }
    }

    fn render_item(&mut self, item: &Item) {
        self.line.push_str(item.name());
    }

    fn render_back_item(&mut self, item: &BackItem) {
        self.line.push_str(item.name());
    }

    fn render_editable_item(&mut self, item: &EditableItem) {
        if !item.has_focus() {
            let _ = write!(self.line, "{}={}", item.name(), item.value_string());
            return;
        }
        match self.gauge_width {
            Some(width) => {
                let _ = write!(self.line, "{} {} {}", item.name(), gauge(item, width), item.value_string());
            }
            None => {
                let _ = write!(self.line, "{}<{}>", item.name(), item.value_string());
            }
        }
    }

    fn render_branch(&mut self, branch: &Branch) {
        let _ = write!(self.line, "{} >", branch.name());
    }
}

/// `width` dashes with a `|` at the value's relative position.
fn gauge(item: &EditableItem, width: usize) -> String {
    let span = item.max_value() - item.min_value();
    let ratio = if span > 0.0 {
        (item.value() - item.min_value()) / span
    } else {
        0.0
    };
    let mark = ((width - 1) as f32 * ratio).round() as usize;

    (0..width).map(|i| if i == mark.min(width - 1) { '|' } else { '-' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::NodeId;

    fn settings_tree() -> (MenuTree, NodeId) {
        let mut tree = MenuTree::new("Settings");
        let root = tree.root();
        tree.attach(root, EditableItem::new("Brightness", 5.0, 0.0, 10.0, 1.0));
        let sub = tree.attach(root, Branch::new("Advanced")).unwrap();
        tree.attach(root, BackItem::new("Back"));
        tree.attach(sub, Item::new("Factory reset"));
        (tree, root)
    }

    fn render(tree: &MenuTree, id: NodeId, renderer: &mut TextRenderer) -> String {
        renderer.render(tree, tree.branch(id).unwrap());
        renderer.take()
    }

    #[test]
    fn test_text_renderer_marks_current_line() {
        let (tree, root) = settings_tree();
        let text = render(&tree, root, &mut TextRenderer::new());

        assert_eq!(text, "Settings\nBrightness=5 <<<\nAdvanced >\nBack\n");
    }

    #[test]
    fn test_text_renderer_focused_value() {
        let (mut tree, root) = settings_tree();
        tree.activate(root);

        let text = render(&tree, root, &mut TextRenderer::new());

        assert!(text.contains("Brightness<5> <<<"));
    }

    #[test]
    fn test_text_renderer_aligns_marker() {
        let (mut tree, root) = settings_tree();
        tree.advance(root, false);
        tree.advance(root, false);

        let text = render(&tree, root, &mut TextRenderer::new());

        assert!(text.contains("\nBack         <<<\n"), "got: {text:?}");
    }

    #[test]
    fn test_gauge_positions_marker() {
        let low = EditableItem::new("x", 0.0, 0.0, 10.0, 1.0);
        let mid = EditableItem::new("x", 5.0, 0.0, 10.0, 1.0);
        let high = EditableItem::new("x", 10.0, 0.0, 10.0, 1.0);

        assert_eq!(gauge(&low, 5), "|----");
        assert_eq!(gauge(&mid, 5), "--|--");
        assert_eq!(gauge(&high, 5), "----|");
    }

    #[test]
    fn test_gauge_with_empty_range() {
        let flat = EditableItem::new("x", 3.0, 3.0, 3.0, 1.0);
        assert_eq!(gauge(&flat, 4), "|---");
    }

    #[test]
    fn test_text_renderer_gauge_only_while_editing() {
        let (mut tree, root) = settings_tree();
        let mut renderer = TextRenderer::with_gauge(5);

        let idle = render(&tree, root, &mut renderer);
        tree.activate(root);
        let editing = render(&tree, root, &mut renderer);

        assert!(idle.contains("Brightness=5"));
        assert!(editing.contains("Brightness --|-- 5"));
    }
}
