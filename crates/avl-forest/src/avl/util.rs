use crate::arena::{Arena, NodeId};
use crate::node::{balance_factor, update_height, Link, Node, Side};
use crate::path::{attach, Path, Step};

/// Walks `path` innermost first, refreshing heights and rotating every
/// node whose balance factor left `[-1, 1]`.
///
/// The walk never stops early: after a removal more than one ancestor may
/// need a rotation.
pub(crate) fn rebalance<T>(arena: &mut Arena<Node<T>>, root: &mut Link, mut path: Path) {
    while let Some(step) = path.pop() {
        let n = step.node;
        update_height(arena, n);
        let parent = path.last().copied();

        let bf = balance_factor(arena, n);
        if bf > 1 {
            if let Link::Node(nr) = arena[n].right {
                if balance_factor(arena, nr) < 0 {
                    rotate_right(arena, root, Some(Step::new(n, Side::Right)), nr);
                }
                rotate_left(arena, root, parent, n);
            }
        } else if bf < -1 {
            if let Link::Node(nl) = arena[n].left {
                if balance_factor(arena, nl) > 0 {
                    rotate_left(arena, root, Some(Step::new(n, Side::Left)), nl);
                }
                rotate_right(arena, root, parent, n);
            }
        }
    }
}

/// Rotates the subtree at `n` towards `dir`: the child on the opposite side
/// rises into the slot named by `parent` (or the root), its inner subtree
/// moves across to `n`, and `n` becomes its child on `dir`.
///
/// Returns the new subtree root. Leaves the tree unchanged and returns `n`
/// when there is no child to lift.
fn rotate<T>(
    arena: &mut Arena<Node<T>>,
    root: &mut Link,
    parent: Option<Step>,
    n: NodeId,
    dir: Side,
) -> NodeId {
    let heavy = dir.opposite();
    let Link::Node(pivot) = arena[n].child(heavy) else {
        return n;
    };
    log::trace!("rotate {dir:?} at {n:?}, pivot {pivot:?}");

    let inner = arena[pivot].child(dir);
    arena[n].set_child(heavy, inner);
    arena[pivot].set_child(dir, Link::Node(n));
    attach(arena, root, parent, Link::Node(pivot));

    update_height(arena, n);
    update_height(arena, pivot);
    pivot
}

/// Left rotation at `n`; `n`'s right child takes its place.
pub fn rotate_left<T>(
    arena: &mut Arena<Node<T>>,
    root: &mut Link,
    parent: Option<Step>,
    n: NodeId,
) -> NodeId {
    rotate(arena, root, parent, n, Side::Left)
}

/// Right rotation at `n`; `n`'s left child takes its place.
pub fn rotate_right<T>(
    arena: &mut Arena<Node<T>>,
    root: &mut Link,
    parent: Option<Step>,
    n: NodeId,
) -> NodeId {
    rotate(arena, root, parent, n, Side::Right)
}
