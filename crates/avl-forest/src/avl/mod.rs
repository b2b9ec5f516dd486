//! AVL tree: a [`Bst`](crate::Bst) whose insert and remove are followed by a
//! rotation pass that keeps every balance factor within `[-1, 1]`.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::node::{Link, Node};
use crate::path::Path;
use crate::tree::{Balancer, Tree};

pub mod util;

pub use util::{rotate_left, rotate_right};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avl;

impl Balancer for Avl {
    const NAME: &'static str = "AvlTree";
    const EQUAL_ON_RIGHT: bool = true;

    fn rebalance<T>(arena: &mut Arena<Node<T>>, root: &mut Link, path: Path) {
        util::rebalance(arena, root, path);
    }

    fn accepts(balance_factor: i32) -> bool {
        (-1..=1).contains(&balance_factor)
    }
}

pub type AvlTree<T, C = fn(&T, &T) -> Ordering> = Tree<T, Avl, C>;
