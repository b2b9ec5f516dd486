//! Structural invariant checks.

use std::cmp::Ordering;

use crate::arena::{Arena, NodeId};
use crate::node::{balance_factor, Link, Node};
use crate::tree::{Balancer, Tree};

struct Frame<'a, T> {
    id: NodeId,
    /// Values here must compare greater than this (or equal, when the
    /// balancer allows equal values on the right).
    above: Option<&'a T>,
    /// Values here must compare less than or equal to this.
    at_most: Option<&'a T>,
}

/// Checks ordering, height bookkeeping and the balancer's balance rule for
/// every node reachable from `root`, and that the arena holds no unreachable
/// nodes.
pub fn assert_tree<T, B, C>(arena: &Arena<Node<T>>, root: Link, comparator: &C) -> Result<(), String>
where
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    let mut stack: Vec<Frame<'_, T>> = root
        .node()
        .map(|id| Frame {
            id,
            above: None,
            at_most: None,
        })
        .into_iter()
        .collect();
    let mut reachable = 0usize;

    while let Some(frame) = stack.pop() {
        reachable += 1;
        if reachable > arena.len() {
            return Err("Cycle or shared node detected".to_string());
        }
        let id = frame.id;
        let Some(node) = arena.get(id) else {
            return Err(format!("Link to vacant slot {id:?}"));
        };

        if let Some(low) = frame.above {
            match comparator(&node.value, low) {
                Ordering::Greater => {}
                Ordering::Equal if B::EQUAL_ON_RIGHT => {}
                _ => {
                    return Err(format!("Node {id:?} is not greater than an ancestor on its left"));
                }
            }
        }
        if let Some(high) = frame.at_most {
            if comparator(&node.value, high) == Ordering::Greater {
                return Err(format!("Node {id:?} is greater than an ancestor on its right"));
            }
        }

        for child in [node.left, node.right].into_iter().filter_map(Link::node) {
            if arena.get(child).is_none() {
                return Err(format!("Node {id:?} links to vacant slot {child:?}"));
            }
        }
        let expected = 1 + node.left.height(arena).max(node.right.height(arena));
        if node.height != expected {
            return Err(format!(
                "Height mismatch at {id:?}: expected {expected}, got {}",
                node.height
            ));
        }
        let bf = balance_factor(arena, id);
        if !B::accepts(bf) {
            return Err(format!("Balance factor {bf} at {id:?} violates {}", B::NAME));
        }

        if let Link::Node(l) = node.left {
            stack.push(Frame {
                id: l,
                above: frame.above,
                at_most: Some(&node.value),
            });
        }
        if let Link::Node(r) = node.right {
            stack.push(Frame {
                id: r,
                above: Some(&node.value),
                at_most: frame.at_most,
            });
        }
    }

    if reachable != arena.len() {
        return Err(format!(
            "{} nodes allocated but {reachable} reachable",
            arena.len()
        ));
    }
    Ok(())
}

impl<T, B, C> Tree<T, B, C>
where
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_tree::<T, B, C>(&self.arena, self.root, self.comparator())
    }
}
