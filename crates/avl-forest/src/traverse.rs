//! Tree walks with explicit stacks.
//!
//! Every iterator borrows the tree's arena and yields `&T`; none of them
//! recurse, so walk depth is bounded by heap memory rather than the call
//! stack.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::arena::{Arena, NodeId};
use crate::error::TreeError;
use crate::node::{Link, Node};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, node, right subtree. Non-decreasing for a valid tree.
    #[default]
    InOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth first, left to right within a level.
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre_order",
            TraversalOrder::InOrder => "in_order",
            TraversalOrder::PostOrder => "post_order",
            TraversalOrder::LevelOrder => "level_order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraversalOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| TreeError::InvalidTraversalOrder(s.to_string()))
    }
}

pub struct PreOrder<'a, T> {
    arena: &'a Arena<Node<T>>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Link) -> Self {
        Self {
            arena,
            stack: root.node().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let node = &self.arena[id];
        self.stack.extend(node.right.node());
        self.stack.extend(node.left.node());
        Some(&node.value)
    }
}

pub struct InOrder<'a, T> {
    arena: &'a Arena<Node<T>>,
    stack: Vec<NodeId>,
    curr: Link,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Link) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            curr: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Link::Node(id) = self.curr {
            self.stack.push(id);
            self.curr = self.arena[id].left;
        }
        let id = self.stack.pop()?;
        let node = &self.arena[id];
        self.curr = node.right;
        Some(&node.value)
    }
}

pub struct PostOrder<'a, T> {
    arena: &'a Arena<Node<T>>,
    // (node, children already pushed)
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Link) -> Self {
        Self {
            arena,
            stack: root.node().map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = &self.arena[id];
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.node().map(|r| (r, false)));
            self.stack.extend(node.left.node().map(|l| (l, false)));
        }
    }
}

pub struct LevelOrder<'a, T> {
    arena: &'a Arena<Node<T>>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Link) -> Self {
        Self {
            arena,
            queue: root.node().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.queue.pop_front()?;
        let node = &self.arena[id];
        self.queue.extend(node.left.node());
        self.queue.extend(node.right.node());
        Some(&node.value)
    }
}

/// Walk in any [`TraversalOrder`], returned by [`Tree::traverse`](crate::Tree::traverse).
pub enum Traverse<'a, T> {
    PreOrder(PreOrder<'a, T>),
    InOrder(InOrder<'a, T>),
    PostOrder(PostOrder<'a, T>),
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Link, order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::PreOrder => Traverse::PreOrder(PreOrder::new(arena, root)),
            TraversalOrder::InOrder => Traverse::InOrder(InOrder::new(arena, root)),
            TraversalOrder::PostOrder => Traverse::PostOrder(PostOrder::new(arena, root)),
            TraversalOrder::LevelOrder => Traverse::LevelOrder(LevelOrder::new(arena, root)),
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            Traverse::PreOrder(it) => it.next(),
            Traverse::InOrder(it) => it.next(),
            Traverse::PostOrder(it) => it.next(),
            Traverse::LevelOrder(it) => it.next(),
        }
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for LevelOrder<'_, T> {}
impl<T> FusedIterator for Traverse<'_, T> {}
