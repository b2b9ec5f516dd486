//! Text renderings of a tree: an indented outline for debugging and a
//! level diagram for display. Neither is part of the tree's invariants.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::tree::{Balancer, Tree};

pub mod outline;
pub mod render;

pub use outline::outline;
pub use render::{render, RenderOptions, MAX_RENDER_DEPTH, MAX_VALUE_WIDTH};

impl<T, B, C> Tree<T, B, C>
where
    T: Display,
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    /// Outline of every node with its height; left child first.
    pub fn dump(&self, tab: &str) -> String {
        outline(&self.arena, self.root, B::NAME, tab)
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render(self.root(), self.get_height(), options)
    }
}

impl<T, B, C> Display for Tree<T, B, C>
where
    T: Display,
    B: Balancer,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
