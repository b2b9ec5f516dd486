//! Node and child-link types.
//!
//! A child slot is a [`Link`]: either a handle to a real [`Node`] or the
//! [`Link::Empty`] sentinel. The sentinel has height 0 and carries no value,
//! so height arithmetic and "is there a child" checks are plain matches on
//! the link instead of null special-casing.

use crate::arena::{Arena, NodeId};

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A child slot: a node or the empty sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Link {
    #[default]
    Empty,
    Node(NodeId),
}

impl Link {
    pub fn is_empty(self) -> bool {
        matches!(self, Link::Empty)
    }

    pub fn node(self) -> Option<NodeId> {
        match self {
            Link::Node(id) => Some(id),
            Link::Empty => None,
        }
    }

    /// Height of the subtree behind this link; the sentinel is 0.
    pub fn height<T>(self, arena: &Arena<Node<T>>) -> u32 {
        match self {
            Link::Node(id) => arena[id].height,
            Link::Empty => 0,
        }
    }
}

impl From<NodeId> for Link {
    fn from(id: NodeId) -> Self {
        Link::Node(id)
    }
}

#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
    /// 1 for a leaf.
    pub(crate) height: u32,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: Link::Empty,
            right: Link::Empty,
            height: 1,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Link {
        self.left
    }

    pub fn right(&self) -> Link {
        self.right
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Recomputes `height` of `id` from its children.
#[inline]
pub fn update_height<T>(arena: &mut Arena<Node<T>>, id: NodeId) {
    let node = &arena[id];
    let height = 1 + node.left.height(arena).max(node.right.height(arena));
    arena[id].height = height;
}

/// `height(right) - height(left)`.
#[inline]
pub fn balance_factor<T>(arena: &Arena<Node<T>>, id: NodeId) -> i32 {
    let node = &arena[id];
    node.right.height(arena) as i32 - node.left.height(arena) as i32
}

/// Read-only cursor over a node of a tree.
pub struct NodeRef<'a, T> {
    arena: &'a Arena<Node<T>>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub(crate) fn from_link(arena: &'a Arena<Node<T>>, link: Link) -> Option<Self> {
        link.node().map(|id| Self::new(arena, id))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.arena[self.id].value
    }

    pub fn height(&self) -> u32 {
        self.arena[self.id].height
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        Self::from_link(self.arena, self.arena[self.id].left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        Self::from_link(self.arena, self.arena[self.id].right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a, T>> {
        Self::from_link(self.arena, self.arena[self.id].child(side))
    }

    pub fn balance_factor(&self) -> i32 {
        balance_factor(self.arena, self.id)
    }
}
