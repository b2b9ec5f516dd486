//! Plain binary search tree: heights are kept, shape is not.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::node::{update_height, Link, Node};
use crate::path::Path;
use crate::tree::{Balancer, Tree};

/// Balancer that only refreshes heights along the descent path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balancer for Unbalanced {
    const NAME: &'static str = "Bst";

    fn rebalance<T>(arena: &mut Arena<Node<T>>, _root: &mut Link, path: Path) {
        for step in path.iter().rev() {
            update_height(arena, step.node);
        }
    }
}

/// Binary search tree without rebalancing. Height is O(n) in the worst case.
pub type Bst<T, C = fn(&T, &T) -> Ordering> = Tree<T, Unbalanced, C>;
