use std::fmt::Debug;

use thiserror::Error;
use tracing::{debug, error, info, trace};

use crate::error::AvlError;
use crate::node::{Link, Node};
use crate::path::{Direction, PathTracker};
use crate::rotate;

/// AVL tree built by iterative insertion with bottom-up rebalancing.
///
/// Keys that compare equal are kept: a duplicate descends into the right
/// subtree of its twin.
#[derive(Debug)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

/// One node reported by a preorder walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<K> {
    pub key: K,
    /// `None` for the root.
    pub parent: Option<K>,
    /// Which child of `parent` this node is; `None` for the root.
    pub side: Option<Direction>,
    pub height: i32,
}

/// First broken invariant found by [`AvlTree::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation<K> {
    /// `key` sits on the wrong side of its ancestor `bound`.
    #[error("key {key:?} is out of order relative to {bound:?}")]
    Order { key: K, bound: K },

    #[error("node {key:?} has balance factor {balance}")]
    Balance { key: K, balance: i32 },

    #[error("node {key:?} stores height {stored}, children imply {expected}")]
    Height { key: K, stored: i32, expected: i32 },

    #[error("counted {counted} nodes but {recorded} were inserted")]
    Count { counted: usize, recorded: usize },
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        AvlTree { root: None, len: 0 }
    }
}

impl<K: Ord + Copy + Debug> AvlTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `keys` in order; the first key becomes the
    /// initial root.
    pub fn from_keys(keys: &[K]) -> Result<Self, AvlError> {
        let Some((&first, rest)) = keys.split_first() else {
            error!("cannot build an AVL tree from an empty key sequence");
            return Err(AvlError::InvalidInput);
        };

        let mut tree = AvlTree {
            root: Some(Node::leaf(first)),
            len: 1,
        };
        for &key in rest {
            tree.insert(key)?;
        }

        debug!(nodes = tree.len, height = ?tree.height(), "built AVL tree");
        Ok(tree)
    }

    /// Inserts one key and restores the AVL invariant along its path.
    ///
    /// On error the tree is left exactly as it was.
    pub fn insert(&mut self, key: K) -> Result<(), AvlError> {
        // The descent pushes at most one entry per edge below the root, so
        // reserving before anything is detached keeps a failure harmless.
        let depth = self.root.as_ref().map_or(0, |root| root.height() as usize);
        let mut path = PathTracker::with_depth(depth).inspect_err(|err| {
            error!(?key, %err, "insertion aborted");
        })?;

        let Some(mut current) = self.root.take() else {
            self.root = Some(Node::leaf(key));
            self.len = 1;
            return Ok(());
        };

        loop {
            let direction = Direction::of(&key, current.key());
            match current.child_mut(direction).take() {
                Some(child) => {
                    path.push(current, direction);
                    current = child;
                }
                None => {
                    *current.child_mut(direction) = Some(Node::leaf(key));
                    current.update_height();
                    break;
                }
            }
        }
        trace!(?key, depth = path.len() + 1, "inserted leaf");

        // Reattach each ancestor's child and rebalance it on the way up; the
        // last subtree standing is the new root.
        let mut subtree = current;
        while let Some((mut parent, direction)) = path.pop() {
            *parent.child_mut(direction) = Some(subtree);
            subtree = rotate::rebalance(parent, &key);
        }
        self.root = Some(subtree);
        self.len += 1;
        Ok(())
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if key == node.key() {
                return true;
            }
            current = node.child(Direction::of(key, node.key()));
        }
        false
    }

    /// Pre-order walk reporting every node with its parent's key.
    pub fn preorder(&self) -> Result<Vec<Visit<K>>, AvlError> {
        let Some(root) = self.root.as_deref() else {
            error!("preorder walk requested on a tree with no root");
            return Err(AvlError::InvalidNode);
        };
        let mut visits = Vec::with_capacity(self.len);
        Self::preorder_rec(root, None, &mut visits);
        Ok(visits)
    }

    fn preorder_rec(node: &Node<K>, from: Option<(K, Direction)>, visits: &mut Vec<Visit<K>>) {
        visits.push(Visit {
            key: *node.key(),
            parent: from.map(|(parent, _)| parent),
            side: from.map(|(_, side)| side),
            height: node.height(),
        });
        if let Some(left) = node.left() {
            Self::preorder_rec(left, Some((*node.key(), Direction::Left)), visits);
        }
        if let Some(right) = node.right() {
            Self::preorder_rec(right, Some((*node.key(), Direction::Right)), visits);
        }
    }

    /// Logs the pre-order walk and returns how many nodes were printed.
    pub fn print_preorder(&self) -> Result<usize, AvlError> {
        let visits = self.preorder()?;
        for visit in &visits {
            match (visit.parent, visit.side) {
                (Some(parent), Some(side)) => {
                    info!("data: {:>6?}, parent: {:>6?} ({:?})", visit.key, parent, side)
                }
                _ => info!("data: {:>6?}, root", visit.key),
            }
        }
        Ok(visits.len())
    }

    pub fn inorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::inorder_rec(&self.root, &mut keys);
        keys
    }

    fn inorder_rec(node: &Link<K>, keys: &mut Vec<K>) {
        if let Some(n) = node {
            Self::inorder_rec(&n.left, keys);
            keys.push(*n.key());
            Self::inorder_rec(&n.right, keys);
        }
    }

    /// Verifies ordering, balance and cached heights for every node.
    pub fn check(&self) -> Result<(), Violation<K>> {
        let counted = Self::check_rec(self.root.as_deref(), None, None)?;
        if counted != self.len {
            return Err(Violation::Count {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }

    // Both bounds are inclusive: rotations can lift a duplicate above its
    // twin, leaving an equal key in the left subtree.
    fn check_rec(
        node: Option<&Node<K>>,
        lower: Option<K>,
        upper: Option<K>,
    ) -> Result<usize, Violation<K>> {
        let Some(node) = node else {
            return Ok(0);
        };
        let key = *node.key();
        if let Some(bound) = lower.filter(|bound| key < *bound) {
            return Err(Violation::Order { key, bound });
        }
        if let Some(bound) = upper.filter(|bound| key > *bound) {
            return Err(Violation::Order { key, bound });
        }

        let left = Self::check_rec(node.left(), lower, Some(key))?;
        let right = Self::check_rec(node.right(), Some(key), upper)?;

        let expected = Node::evaluate_height(Some(node));
        if node.height() != expected {
            return Err(Violation::Height {
                key,
                stored: node.height(),
                expected,
            });
        }
        let balance = node.balance_factor();
        if !(-1..=1).contains(&balance) {
            return Err(Violation::Balance { key, balance });
        }
        Ok(left + right + 1)
    }

    /// Tears the tree down, releasing left subtree, right subtree, then the
    /// node itself. Returns how many nodes were released.
    pub fn destroy(mut self) -> Result<usize, AvlError> {
        let Some(root) = self.root.take() else {
            error!("destroy requested on a tree with no root");
            return Err(AvlError::InvalidNode);
        };
        let released = Self::release(root);
        debug!(released, "destroyed AVL tree");
        Ok(released)
    }

    fn release(mut node: Box<Node<K>>) -> usize {
        if node.is_leaf() {
            return 1;
        }
        let mut count = 0;
        if let Some(left) = node.left.take() {
            count += Self::release(left);
        }
        if let Some(right) = node.right.take() {
            count += Self::release(right);
        }
        drop(node);
        count + 1
    }
}

impl<K> AvlTree<K> {
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Stored height of the root, `None` while the tree is empty.
    pub fn height(&self) -> Option<i32> {
        self.root.as_ref().map(|root| root.height())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
