//! # Navigator
//!
//! Owns the menu tree and tracks which branch is open. Hosts drive it with
//! four primitives:
//!
//! ```text
//!              ┌──────────── advance / retreat ────────────┐
//!              │                                           ▼
//!   open branch's current child has focus?  ── yes ──► edit that child's value
//!              │ no
//!              ▼
//!   move between siblings of the open branch
//!
//!   activate ──► Descend(b)  open = b
//!            ──► Ascend      open = parent(open)
//!            ──► Idle        optionally reset to root
//!
//!   return_to_parent ──► open = parent(open), unless open is root
//! ```

use log::debug;

use super::branch::Branch;
use super::component::{Activation, Component, NodeId};
use super::render::Renderer;
use super::tree::MenuTree;

pub struct Navigator {
    tree: MenuTree,
    /// Always names a branch: it starts at the root and is only reassigned
    /// from the root, a `Descend` target, or a branch's parent link.
    open: NodeId,
}

impl Navigator {
    /// A navigator over a fresh, empty root branch.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::from_tree(MenuTree::new(root_name))
    }

    pub fn from_tree(tree: MenuTree) -> Self {
        let open = tree.root();
        Self { tree, open }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn attach(&mut self, parent: NodeId, component: impl Into<Component>) -> Option<NodeId> {
        self.tree.attach(parent, component)
    }

    pub fn open_branch(&self) -> NodeId {
        self.open
    }

    /// The open branch. Cannot fail while `open` keeps its invariant.
    pub fn current_branch(&self) -> &Branch {
        match self.tree.branch(self.open) {
            Some(branch) => branch,
            None => unreachable!("open branch always refers to a branch"),
        }
    }

    pub fn open_branch_name(&self) -> &str {
        self.current_branch().name()
    }

    /// The open branch's current child, if it has one.
    pub fn current_component(&self) -> Option<&Component> {
        self.tree.get(self.tree.current_child(self.open)?)
    }

    pub fn is_at_root(&self) -> bool {
        self.open == self.tree.root()
    }

    /// True while input is redirected into editing a value.
    pub fn editing(&self) -> bool {
        self.current_component().is_some_and(Component::has_focus)
    }

    /// Names from the root down to the open branch.
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut cursor = Some(self.open);
        while let Some(id) = cursor {
            let Some(branch) = self.tree.branch(id) else { break };
            names.push(branch.name());
            cursor = branch.parent();
        }
        names.reverse();
        names
    }

    pub fn advance(&mut self, wrap: bool) -> bool {
        let target = self.input_target();
        self.tree.advance(target, wrap)
    }

    pub fn retreat(&mut self, wrap: bool) -> bool {
        let target = self.input_target();
        self.tree.retreat(target, wrap)
    }

    /// The focused child while editing, otherwise the open branch.
    fn input_target(&self) -> NodeId {
        match self.tree.current_child(self.open) {
            Some(child) if self.tree.get(child).is_some_and(Component::has_focus) => child,
            _ => self.open,
        }
    }

    /// Selects the current child of the open branch.
    ///
    /// With `reset`, a finished leaf action (nothing opened, nothing left in
    /// edit mode) returns the whole menu to the root.
    pub fn activate(&mut self, reset: bool) -> Activation {
        let activation = self.tree.activate(self.open);
        match activation {
            Activation::Descend(branch) => {
                debug!("Descending into '{}'", self.tree.get(branch).map_or("?", Component::name));
                self.open = branch;
            }
            Activation::Ascend => {
                self.return_to_parent();
            }
            Activation::Idle => {
                if reset && !self.editing() {
                    self.reset();
                }
            }
        }
        activation
    }

    /// Opens the parent of the open branch. False at the root.
    pub fn return_to_parent(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        match self.tree.parent(self.open) {
            Some(parent) => {
                debug!("Ascending from '{}'", self.open_branch_name());
                self.open = parent;
                true
            }
            None => false,
        }
    }

    /// Back to the root with the whole tree rewound.
    pub fn reset(&mut self) {
        self.open = self.tree.root();
        self.tree.reset(self.open);
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.tree, self.current_branch());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingRenderer, scenario};

    #[test]
    fn test_activate_descends_and_return_restores() {
        let (mut nav, ids) = scenario();

        nav.advance(false);
        assert_eq!(nav.activate(false), Activation::Descend(ids.b));
        assert_eq!(nav.open_branch(), ids.b);

        assert!(nav.return_to_parent());
        assert_eq!(nav.open_branch(), nav.root());
        assert_eq!(nav.current_branch().current_index(), 1);
    }

    #[test]
    fn test_return_at_root_is_noop() {
        let (mut nav, _) = scenario();
        assert!(!nav.return_to_parent());
        assert_eq!(nav.open_branch(), nav.root());
    }

    #[test]
    fn test_focus_redirects_input_to_value() {
        let (mut nav, ids) = scenario();
        nav.advance(false);
        nav.activate(false);
        nav.advance(false);

        assert_eq!(nav.activate(false), Activation::Idle);
        assert!(nav.editing());

        nav.advance(false);
        nav.advance(false);
        let level = nav.tree().get(ids.level).and_then(Component::as_editable).unwrap();
        assert_eq!(level.value(), 7.0);
        assert_eq!(nav.current_branch().current_index(), 1);

        nav.activate(false);
        assert!(!nav.editing());
        assert!(nav.advance(false));
        assert_eq!(nav.current_branch().current_index(), 2);
    }

    #[test]
    fn test_back_item_ascends() {
        let (mut nav, ids) = scenario();
        nav.advance(false);
        nav.activate(false);
        nav.advance(false);
        nav.advance(false);

        assert_eq!(nav.activate(false), Activation::Ascend);
        assert_eq!(nav.open_branch(), nav.root());
        assert_eq!(nav.tree().branch(ids.b).unwrap().current_index(), 2);
    }

    #[test]
    fn test_activate_with_reset_returns_home() {
        let (mut nav, ids) = scenario();
        nav.advance(false);
        nav.activate(true);
        assert_eq!(nav.open_branch(), ids.b);

        assert_eq!(nav.activate(true), Activation::Idle);
        assert_eq!(nav.open_branch(), nav.root());
        assert_eq!(nav.current_branch().current_index(), 0);
    }

    #[test]
    fn test_reset_flag_does_not_abort_edit() {
        let (mut nav, _) = scenario();
        nav.advance(false);
        nav.activate(true);
        nav.advance(false);

        nav.activate(true);
        assert!(nav.editing());

        nav.activate(true);
        assert!(!nav.editing());
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut nav, ids) = scenario();
        nav.advance(false);
        nav.activate(false);
        nav.advance(false);
        nav.activate(false);
        assert!(nav.editing());

        nav.reset();

        assert!(nav.is_at_root());
        assert!(!nav.editing());
        assert!(!nav.tree().get(ids.level).unwrap().has_focus());
        assert_eq!(nav.tree().branch(ids.b).unwrap().current_index(), 0);
        assert_eq!(nav.current_branch().current_index(), 0);
        assert!(nav.tree().get(ids.x).unwrap().is_current());
        assert!(nav.tree().get(ids.y).unwrap().is_current());
        assert!(!nav.tree().get(ids.back).unwrap().is_current());
    }

    #[test]
    fn test_open_always_names_a_branch() {
        let (mut nav, _) = scenario();
        let steps: [fn(&mut Navigator); 6] = [
            |n| {
                n.advance(false);
            },
            |n| {
                n.retreat(true);
            },
            |n| {
                n.activate(false);
            },
            |n| {
                n.activate(true);
            },
            |n| {
                n.return_to_parent();
            },
            |n| n.reset(),
        ];

        for round in 0..60 {
            steps[(round * 7 + round / 6) % steps.len()](&mut nav);
            assert!(nav.tree().branch(nav.open_branch()).is_some());
        }
    }

    #[test]
    fn test_breadcrumb() {
        let (mut nav, _) = scenario();
        assert_eq!(nav.breadcrumb(), vec!["A"]);

        nav.advance(false);
        nav.activate(false);
        assert_eq!(nav.breadcrumb(), vec!["A", "B"]);
        assert_eq!(nav.open_branch_name(), "B");
    }

    #[test]
    fn test_render_visits_open_branch_children() {
        let (mut nav, _) = scenario();
        let mut renderer = RecordingRenderer::default();

        nav.render(&mut renderer);
        assert_eq!(renderer.calls, vec!["branch-view:A", "item:x", "branch:B"]);

        nav.advance(false);
        nav.activate(false);
        renderer.calls.clear();
        nav.render(&mut renderer);
        assert_eq!(renderer.calls, vec!["branch-view:B", "item:y", "editable:Level", "back:Back"]);
    }

    #[test]
    fn test_empty_root() {
        let mut nav = Navigator::new("Empty");
        assert!(!nav.advance(true));
        assert!(!nav.retreat(true));
        assert_eq!(nav.activate(false), Activation::Idle);
        assert!(nav.current_component().is_none());
    }
}
