//! Arena-backed binary search tree and AVL tree.
//!
//! Every node of a tree lives in the tree's own [`Arena`]; a child slot is a
//! [`Link`], which is either a [`NodeId`] or the [`Link::Empty`] sentinel
//! (height 0, no value). There are no parent pointers. Insert and remove
//! record the ancestor path on the way down and hand it to the tree's
//! [`Balancer`], which fixes heights and, for [`AvlTree`], rotates on the way
//! back up.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`arena`] | Slot arena with free list, [`NodeId`] handles |
//! [`node`] | [`Node`], [`Link`], [`Side`], [`NodeRef`] cursor |
//! [`path`] | Ancestor [`Step`]s recorded during descent |
//! [`tree`] | [`Tree`] core: insert, remove, queries; [`Balancer`] trait |
//! [`bst`] | [`Bst`], height bookkeeping only |
//! [`avl`] | [`AvlTree`], rebalancing walk and rotations |
//! [`traverse`] | [`TraversalOrder`] and explicit-stack iterators |
//! [`print`] | Outline dump and level diagram |
//! [`util`] | Invariant checker |
//! [`cli`] | Command-line front end |
//!
//! # Example
//!
//! ```
//! use avl_forest::{AvlTree, TraversalOrder};
//!
//! let mut tree: AvlTree<i32> = (1..=5).collect();
//! assert_eq!(tree.get_height(), 3);
//! assert_eq!(tree.to_list(TraversalOrder::LevelOrder), vec![2, 1, 4, 3, 5]);
//!
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert!(!tree.find(&2));
//! tree.assert_valid().unwrap();
//! ```
//!
//! Trees are not internally synchronised. Mutation needs `&mut`, so sharing a
//! tree across threads for writing requires the caller's own lock.

pub mod arena;
pub mod avl;
pub mod bst;
pub mod cli;
pub mod error;
pub mod node;
pub mod path;
pub mod print;
pub mod traverse;
pub mod tree;
pub mod util;

pub use arena::{Arena, NodeId};
pub use avl::{Avl, AvlTree};
pub use bst::{Bst, Unbalanced};
pub use error::{CliError, TreeError};
pub use node::{Link, Node, NodeRef, Side};
pub use path::{Path, Step};
pub use print::RenderOptions;
pub use traverse::{InOrder, LevelOrder, PostOrder, PreOrder, TraversalOrder, Traverse};
pub use tree::{Balancer, Tree};
