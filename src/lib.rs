//! Height-balanced (AVL) binary search tree built by iterative insertion.
//!
//! Each insertion walks down from the root, detaching the nodes it passes
//! onto an explicit descent path instead of relying on parent links. Once
//! the new leaf is placed, the path is unwound bottom-up: every ancestor is
//! reattached, its cached height refreshed from its children, and a single
//! or double rotation applied wherever the balance factor reached ±2.
//!
//! Heights count edges (a leaf stores 0) and are always computed from the
//! children's stored heights, never by walking a subtree.
//!
//! ```
//! use avl_builder::AvlTree;
//!
//! let tree = AvlTree::from_keys(&[10, 20, 30]).unwrap();
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(root.height(), 1);
//! assert_eq!(tree.destroy().unwrap(), 3);
//! ```

pub mod avl;
pub mod error;
pub mod node;
pub mod path;
pub mod rotate;

pub use avl::{AvlTree, Violation, Visit};
pub use error::AvlError;
pub use node::Node;
pub use path::Direction;
pub use rotate::Imbalance;
