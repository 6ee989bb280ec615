//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::branch::Branch;
use crate::core::component::NodeId;
use crate::core::editable::EditableItem;
use crate::core::item::{BackItem, Item};
use crate::core::navigator::Navigator;
use crate::core::render::Renderer;
use crate::core::tree::MenuTree;

/// Ids of the interesting nodes in [`scenario`].
pub struct ScenarioIds {
    pub x: NodeId,
    pub b: NodeId,
    pub y: NodeId,
    pub level: NodeId,
    pub back: NodeId,
}

/// Builds:
///
/// ```text
/// A
/// ├── x
/// └── B
///     ├── y
///     ├── Level (5 in 0..=10, step 1)
///     └── Back
/// ```
pub fn scenario() -> (Navigator, ScenarioIds) {
    let mut nav = Navigator::new("A");
    let root = nav.root();
    let x = nav.attach(root, Item::new("x")).unwrap();
    let b = nav.attach(root, Branch::new("B")).unwrap();
    let y = nav.attach(b, Item::new("y")).unwrap();
    let level = nav.attach(b, EditableItem::new("Level", 5.0, 0.0, 10.0, 1.0)).unwrap();
    let back = nav.attach(b, BackItem::new("Back")).unwrap();
    (nav, ScenarioIds { x, b, y, level, back })
}

/// Records which visitor methods were called, in order.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, tree: &MenuTree, branch: &Branch) {
        self.calls.push(format!("branch-view:{}", branch.name()));
        for child in tree.children(branch) {
            child.render(self);
        }
    }

    fn render_item(&mut self, item: &Item) {
        self.calls.push(format!("item:{}", item.name()));
    }

    fn render_back_item(&mut self, item: &BackItem) {
        self.calls.push(format!("back:{}", item.name()));
    }

    fn render_editable_item(&mut self, item: &EditableItem) {
        self.calls.push(format!("editable:{}", item.name()));
    }

    fn render_branch(&mut self, branch: &Branch) {
        self.calls.push(format!("branch:{}", branch.name()));
    }
}
