//! Arena-backed binary search tree core shared by [`Bst`](crate::Bst) and
//! [`AvlTree`](crate::AvlTree).
//!
//! Structural insert and remove live here. Both walk down from the root with
//! an explicit loop, record the ancestor [`Path`], perform the mutation, and
//! then hand the path to the tree's [`Balancer`], which fixes heights (and,
//! for AVL, rotates) from the mutation point back up to the root.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::arena::{Arena, NodeId};
use crate::error::TreeError;
use crate::node::{Link, Node, NodeRef, Side};
use crate::path::{attach, Path, Step};
use crate::traverse::{InOrder, Traverse, TraversalOrder};

/// Post-mutation pass run over the recorded ancestor path.
pub trait Balancer {
    /// Name used by the tree dump.
    const NAME: &'static str;

    /// Restores height bookkeeping (and any balance invariant) for every
    /// node on `path`, innermost first.
    fn rebalance<T>(arena: &mut Arena<Node<T>>, root: &mut Link, path: Path);

    /// Whether a right subtree may hold values equal to its parent.
    /// Rotations can lift an equal left child above its twin.
    const EQUAL_ON_RIGHT: bool = false;

    /// Whether a node with `balance_factor` satisfies this tree's invariant.
    fn accepts(_balance_factor: i32) -> bool {
        true
    }
}

fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Ordered binary tree over values of type `T`.
///
/// Values that compare equal are kept, not merged; an equal value descends
/// to the left, so equal keys keep their insertion order in an in-order walk.
#[derive(Clone)]
pub struct Tree<T, B, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub(crate) arena: Arena<Node<T>>,
    pub(crate) root: Link,
    comparator: C,
    _balancer: PhantomData<B>,
}

impl<T, B> Tree<T, B, fn(&T, &T) -> Ordering>
where
    T: Ord,
    B: Balancer,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    /// Builds a tree by inserting `values` in iteration order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<T, B> Default for Tree<T, B, fn(&T, &T) -> Ordering>
where
    T: Ord,
    B: Balancer,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B, C> Tree<T, B, C>
where
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: Link::Empty,
            comparator,
            _balancer: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = Link::Empty;
    }

    pub fn root_link(&self) -> Link {
        self.root
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::from_link(&self.arena, self.root)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Inserts `value` as a new leaf and rebalances along the descent path.
    pub fn insert(&mut self, value: T) {
        let mut path = Path::new();
        let mut curr = self.root;
        while let Link::Node(id) = curr {
            let side = match (self.comparator)(&value, &self.arena[id].value) {
                Ordering::Greater => Side::Right,
                _ => Side::Left,
            };
            path.push(Step::new(id, side));
            curr = self.arena[id].child(side);
        }

        let id = self.arena.alloc(Node::new(value));
        attach(&mut self.arena, &mut self.root, path.last().copied(), id.into());
        B::rebalance(&mut self.arena, &mut self.root, path);
    }

    /// Removes one node holding a value equal to `value` and returns the
    /// stored value.
    ///
    /// A node with two children keeps its slot: it takes over the value of
    /// its in-order predecessor, and the predecessor's node is unlinked
    /// instead. On [`TreeError::NotFound`] the tree is left untouched.
    pub fn remove(&mut self, value: &T) -> Result<T, TreeError> {
        let mut path = Path::new();
        let mut curr = self.root;
        let target = loop {
            let Link::Node(id) = curr else {
                log::debug!("remove: value not found after {} steps", path.len());
                return Err(TreeError::NotFound);
            };
            let side = match (self.comparator)(value, &self.arena[id].value) {
                Ordering::Equal => break id,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            path.push(Step::new(id, side));
            curr = self.arena[id].child(side);
        };

        let (left, right) = {
            let node = &self.arena[target];
            (node.left, node.right)
        };

        let removed = match (left, right) {
            (Link::Node(left), Link::Node(_)) => {
                path.push(Step::new(target, Side::Left));
                let mut pred = left;
                while let Link::Node(next) = self.arena[pred].right {
                    path.push(Step::new(pred, Side::Right));
                    pred = next;
                }
                let pred_left = self.arena[pred].left;
                attach(&mut self.arena, &mut self.root, path.last().copied(), pred_left);
                let pred_node = self.take_node(pred);
                std::mem::replace(&mut self.arena[target].value, pred_node.value)
            }
            (child, Link::Empty) | (Link::Empty, child) => {
                attach(&mut self.arena, &mut self.root, path.last().copied(), child);
                self.take_node(target).value
            }
        };

        B::rebalance(&mut self.arena, &mut self.root, path);
        Ok(removed)
    }

    fn take_node(&mut self, id: NodeId) -> Node<T> {
        match self.arena.take(id) {
            Some(node) => node,
            None => unreachable!("linked node {id:?} has a vacant slot"),
        }
    }

    fn locate(&self, value: &T) -> Option<NodeId> {
        let mut curr = self.root;
        while let Link::Node(id) = curr {
            curr = match (self.comparator)(value, &self.arena[id].value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => self.arena[id].left,
                Ordering::Greater => self.arena[id].right,
            };
        }
        None
    }

    /// Whether a value equal to `value` is stored. An empty tree reports
    /// `false`.
    pub fn find(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value)
    }

    /// Height of the root; 0 for an empty tree.
    pub fn get_height(&self) -> u32 {
        self.root.height(&self.arena)
    }

    pub fn height(&self) -> u32 {
        self.get_height()
    }

    fn extreme(&self, side: Side) -> Option<&T> {
        let mut id = self.root.node()?;
        while let Link::Node(next) = self.arena[id].child(side) {
            id = next;
        }
        Some(&self.arena[id].value)
    }

    pub fn minimum(&self) -> Option<&T> {
        self.extreme(Side::Left)
    }

    pub fn maximum(&self) -> Option<&T> {
        self.extreme(Side::Right)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, T> {
        Traverse::new(&self.arena, self.root, order)
    }

    /// In-order iterator.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(&self.arena, self.root)
    }

    pub fn to_list(&self, order: TraversalOrder) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(order).cloned().collect()
    }
}

impl<T, B> FromIterator<T> for Tree<T, B, fn(&T, &T) -> Ordering>
where
    T: Ord,
    B: Balancer,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T, B, C> Extend<T> for Tree<T, B, C>
where
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, B, C> IntoIterator for &'a Tree<T, B, C>
where
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, B, C> fmt::Debug for Tree<T, B, C>
where
    T: fmt::Debug,
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(B::NAME)
            .field("len", &self.len())
            .field("height", &self.get_height())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
