//! Ancestor path recorded during descent.
//!
//! Nodes have no parent links. Insert and remove push one [`Step`] per
//! ancestor they pass through, innermost last, and hand the stack to the
//! balancer, which walks it bottom-up. The step's `side` is the child slot
//! the descent took, so the step above any node identifies the exact slot
//! that owns it.

use crate::arena::{Arena, NodeId};
use crate::node::{Link, Node, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub node: NodeId,
    pub side: Side,
}

impl Step {
    pub fn new(node: NodeId, side: Side) -> Self {
        Self { node, side }
    }
}

pub type Path = Vec<Step>;

/// Writes `link` into the slot named by `parent`, or into `root` when the
/// slot belongs to the tree itself.
#[inline]
pub fn attach<T>(
    arena: &mut Arena<Node<T>>,
    root: &mut Link,
    parent: Option<Step>,
    link: Link,
) {
    match parent {
        Some(step) => arena[step.node].set_child(step.side, link),
        None => *root = link,
    }
}
