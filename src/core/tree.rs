//! # Menu Tree
//!
//! Arena holding every node of one menu. Index 0 is always the root branch.
//!
//! ```text
//! nodes: [ Root, Start, Settings, Brightness, Back ]
//!           │                 ▲
//!           ├── children ─────┤  (Vec<NodeId>, downward, owning order)
//!           │                 │
//! Settings.parent ────────────┘  (Option<NodeId>, upward, non-owning)
//! ```
//!
//! Nodes are never removed, so a `NodeId` stays valid for the tree's lifetime.

use log::{debug, warn};

use super::branch::{Branch, Step};
use super::component::{Activation, Component, NodeId};

pub struct MenuTree {
    nodes: Vec<Component>,
}

impl MenuTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_root(Branch::new(root_name))
    }

    pub fn with_root(mut root: Branch) -> Self {
        root.parent = None;
        root.current = false;
        Self {
            nodes: vec![Component::Branch(root)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Component> {
        self.nodes.get(id.0)
    }

    pub fn branch(&self, id: NodeId) -> Option<&Branch> {
        self.get(id).and_then(Component::as_branch)
    }

    fn branch_mut(&mut self, id: NodeId) -> Option<&mut Branch> {
        match self.nodes.get_mut(id.0) {
            Some(Component::Branch(branch)) => Some(branch),
            _ => None,
        }
    }

    fn set_current(&mut self, id: NodeId, current: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.set_current(current);
        }
    }

    /// Children of `branch` in display order.
    pub fn children<'a>(&'a self, branch: &'a Branch) -> impl Iterator<Item = &'a Component> + 'a {
        branch.children().iter().filter_map(|id| self.get(*id))
    }

    pub fn component_at(&self, branch: NodeId, index: usize) -> Option<&Component> {
        let id = *self.branch(branch)?.children().get(index)?;
        self.get(id)
    }

    pub fn current_child(&self, branch: NodeId) -> Option<NodeId> {
        self.branch(branch)?.current_child()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.branch(id)?.parent()
    }

    /// Moves `component` into the tree as the last child of `parent`.
    ///
    /// Returns `None` and leaves the tree untouched when `parent` is not a
    /// branch, the branch is at capacity, or storage cannot grow.
    pub fn attach(&mut self, parent: NodeId, component: impl Into<Component>) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        let mut component = component.into();

        if self.nodes.try_reserve(1).is_err() {
            warn!("Dropping attach of '{}': node storage exhausted", component.name());
            return None;
        }

        let Some(branch) = self.branch_mut(parent) else {
            warn!("Dropping attach of '{}': parent {:?} is not a branch", component.name(), parent);
            return None;
        };
        if branch.is_full() {
            warn!(
                "Dropping attach of '{}': '{}' is at capacity ({} children)",
                component.name(),
                branch.name(),
                branch.len()
            );
            return None;
        }
        if branch.children.try_reserve(1).is_err() {
            warn!("Dropping attach of '{}': child list of '{}' cannot grow", component.name(), branch.name());
            return None;
        }

        let first = branch.children.is_empty();
        branch.children.push(id);

        component.set_current(first);
        if let Component::Branch(child) = &mut component {
            child.parent = Some(parent);
        }
        self.nodes.push(component);
        Some(id)
    }

    /// Branch: select the next sibling. Editable: step the value up.
    /// Other leaves: no effect.
    pub fn advance(&mut self, id: NodeId, wrap: bool) -> bool {
        self.step(id, Step::Forward, wrap)
    }

    pub fn retreat(&mut self, id: NodeId, wrap: bool) -> bool {
        self.step(id, Step::Backward, wrap)
    }

    fn step(&mut self, id: NodeId, step: Step, wrap: bool) -> bool {
        let moved = match self.nodes.get_mut(id.0) {
            Some(Component::Branch(branch)) => branch.step(step, wrap),
            Some(Component::Editable(item)) => {
                return match step {
                    Step::Forward => item.advance(wrap),
                    Step::Backward => item.retreat(wrap),
                };
            }
            _ => return false,
        };

        match moved {
            Some((old, new)) => {
                // Clear before set: old and new are the same node when a
                // single-child branch wraps.
                self.set_current(old, false);
                self.set_current(new, true);
                true
            }
            None => false,
        }
    }

    /// Selects the current child of `branch`.
    pub fn activate(&mut self, branch: NodeId) -> Activation {
        let Some(child) = self.current_child(branch) else {
            return Activation::Idle;
        };
        match self.nodes.get_mut(child.0) {
            Some(node) => node.select(child),
            None => Activation::Idle,
        }
    }

    /// Returns `id` and everything below it to the initial state: focus
    /// cleared, first child current.
    pub fn reset(&mut self, id: NodeId) {
        let children = match self.nodes.get_mut(id.0) {
            Some(Component::Editable(item)) => {
                item.reset();
                return;
            }
            Some(Component::Branch(branch)) => {
                branch.rewind();
                branch.children.clone()
            }
            _ => return,
        };

        for (index, child) in children.iter().enumerate() {
            self.reset(*child);
            self.set_current(*child, index == 0);
        }
        debug!("Reset '{}'", self.nodes[id.0].name());
    }
}
