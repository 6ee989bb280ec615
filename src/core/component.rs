//! # Components
//!
//! Every node in a menu tree is a `Component`. The set of node kinds is closed:
//!
//! ```text
//! Component
//! ├── Item       leaf, fires a callback when selected
//! ├── Back       leaf, fires a callback and asks the navigator to ascend
//! ├── Editable   leaf, toggles value editing when selected
//! └── Branch     container of other components
//! ```
//!
//! Nodes are stored in a [`MenuTree`](super::tree::MenuTree) and addressed by
//! [`NodeId`]. Operations that only touch one node (selecting, editing a value)
//! live here; operations that walk the list of children live on the tree.

use super::branch::Branch;
use super::editable::EditableItem;
use super::item::{BackItem, Item};
use super::render::Renderer;

/// Handle to a node stored in a `MenuTree`.
///
/// Ids are only handed out by the tree that owns the node. Using an id with a
/// different tree is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What activating a node asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing to open: a leaf action ran, an edit toggled, or the branch was empty.
    Idle,
    /// Open this branch.
    Descend(NodeId),
    /// Go back to the parent of the open branch.
    Ascend,
}

pub enum Component {
    Item(Item),
    Back(BackItem),
    Editable(EditableItem),
    Branch(Branch),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Item(item) => item.name(),
            Component::Back(item) => item.name(),
            Component::Editable(item) => item.name(),
            Component::Branch(branch) => branch.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Component::Item(item) => item.set_name(name),
            Component::Back(item) => item.set_name(name),
            Component::Editable(item) => item.set_name(name),
            Component::Branch(branch) => branch.set_name(name),
        }
    }

    /// True iff this node is the active child of its branch.
    pub fn is_current(&self) -> bool {
        match self {
            Component::Item(item) => item.is_current(),
            Component::Back(item) => item.is_current(),
            Component::Editable(item) => item.is_current(),
            Component::Branch(branch) => branch.is_current(),
        }
    }

    pub(crate) fn set_current(&mut self, current: bool) {
        match self {
            Component::Item(item) => item.current = current,
            Component::Back(item) => item.current = current,
            Component::Editable(item) => item.current = current,
            Component::Branch(branch) => branch.current = current,
        }
    }

    /// Only an `Editable` in the middle of an edit ever has focus.
    pub fn has_focus(&self) -> bool {
        match self {
            Component::Editable(item) => item.has_focus(),
            _ => false,
        }
    }

    /// Activation hook. `id` is this node's own id, returned when a branch is
    /// selected so the navigator can open it.
    pub(crate) fn select(&mut self, id: NodeId) -> Activation {
        match self {
            Component::Item(item) => {
                item.select();
                Activation::Idle
            }
            Component::Back(item) => {
                item.select();
                Activation::Ascend
            }
            Component::Editable(item) => {
                item.select();
                Activation::Idle
            }
            Component::Branch(_) => Activation::Descend(id),
        }
    }

    /// Calls exactly one visitor method, picked by node kind.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        match self {
            Component::Item(item) => renderer.render_item(item),
            Component::Back(item) => renderer.render_back_item(item),
            Component::Editable(item) => renderer.render_editable_item(item),
            Component::Branch(branch) => renderer.render_branch(branch),
        }
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Component::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    pub fn as_editable(&self) -> Option<&EditableItem> {
        match self {
            Component::Editable(item) => Some(item),
            _ => None,
        }
    }
}

impl From<Item> for Component {
    fn from(item: Item) -> Self {
        Component::Item(item)
    }
}

impl From<BackItem> for Component {
    fn from(item: BackItem) -> Self {
        Component::Back(item)
    }
}

impl From<EditableItem> for Component {
    fn from(item: EditableItem) -> Self {
        Component::Editable(item)
    }
}

impl From<Branch> for Component {
    fn from(branch: Branch) -> Self {
        Component::Branch(branch)
    }
}
