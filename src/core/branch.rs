//! # Branch
//!
//! A container node: an ordered list of children (by `NodeId`), the index of
//! the current child, and a link to its parent branch.
//!
//! The index bookkeeping lives here. Flipping the `is_current` flag on the
//! child nodes needs the arena, so that part is done by `MenuTree`.

use super::component::NodeId;

/// Direction of a single step through a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Forward,
    Backward,
}

pub struct Branch {
    name: String,
    pub(crate) current: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    current_index: usize,
    previous_index: usize,
    capacity: Option<usize>,
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: false,
            parent: None,
            children: Vec::new(),
            current_index: 0,
            previous_index: 0,
            capacity: None,
        }
    }

    /// A branch that refuses attaches beyond `capacity` children.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|max| self.children.len() >= max)
    }

    /// Meaningful only while the branch has children.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index before the latest advance/retreat, for renderers that redraw
    /// only what changed.
    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    pub fn current_child(&self) -> Option<NodeId> {
        self.children.get(self.current_index).copied()
    }

    /// Moves the current index one slot. Returns the ids of the old and new
    /// current child, or `None` when nothing moved.
    ///
    /// `previous_index` is recorded even when the step is refused.
    pub(crate) fn step(&mut self, step: Step, wrap: bool) -> Option<(NodeId, NodeId)> {
        self.previous_index = self.current_index;
        let last = self.children.len().checked_sub(1)?;

        let next = match step {
            Step::Forward if self.current_index < last => self.current_index + 1,
            Step::Forward if wrap => 0,
            Step::Backward if self.current_index > 0 => self.current_index - 1,
            Step::Backward if wrap => last,
            _ => return None,
        };

        let old = self.children[self.current_index];
        self.current_index = next;
        Some((old, self.children[next]))
    }

    pub(crate) fn rewind(&mut self) {
        self.current_index = 0;
        self.previous_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_with(n: usize) -> Branch {
        let mut branch = Branch::new("b");
        branch.children = (0..n).map(NodeId).collect();
        branch
    }

    #[test]
    fn test_step_on_empty_branch_refused() {
        let mut branch = Branch::new("empty");
        assert_eq!(branch.step(Step::Forward, true), None);
        assert_eq!(branch.step(Step::Backward, true), None);
    }

    #[test]
    fn test_forward_stops_at_last_without_wrap() {
        let mut branch = branch_with(2);

        assert_eq!(branch.step(Step::Forward, false), Some((NodeId(0), NodeId(1))));
        assert_eq!(branch.step(Step::Forward, false), None);
        assert_eq!(branch.current_index(), 1);
        assert_eq!(branch.previous_index(), 1);
    }

    #[test]
    fn test_forward_wraps_to_first() {
        let mut branch = branch_with(3);
        branch.step(Step::Forward, false);
        branch.step(Step::Forward, false);

        assert_eq!(branch.step(Step::Forward, true), Some((NodeId(2), NodeId(0))));
        assert_eq!(branch.current_index(), 0);
        assert_eq!(branch.previous_index(), 2);
    }

    #[test]
    fn test_backward_wraps_to_last() {
        let mut branch = branch_with(3);
        assert_eq!(branch.step(Step::Backward, false), None);
        assert_eq!(branch.step(Step::Backward, true), Some((NodeId(0), NodeId(2))));
    }

    #[test]
    fn test_capacity_limit() {
        let mut branch = Branch::with_capacity("small", 2);
        assert!(!branch.is_full());
        branch.children = vec![NodeId(1), NodeId(2)];
        assert!(branch.is_full());
        assert!(!Branch::new("unbounded").is_full());
    }
}
