use std::fmt::Debug;

use tracing::debug;

use crate::node::Node;
use crate::path::Direction;

/// Skew pattern found at a node whose balance factor reached ±2, named after
/// the two branches leading down to the new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Imbalance {
    /// Classifies `node` after `key` was inserted somewhere below it.
    ///
    /// Only balance factors of exactly ±2 count: a single insertion moves a
    /// subtree's height by at most one.
    pub fn detect<K: Ord>(node: &Node<K>, key: &K) -> Option<Self> {
        match node.balance_factor() {
            -2 => node.child(Direction::Right).map(|right| {
                if key >= right.key() {
                    Imbalance::RightRight
                } else {
                    Imbalance::RightLeft
                }
            }),
            2 => node.child(Direction::Left).map(|left| {
                if key < left.key() {
                    Imbalance::LeftLeft
                } else {
                    Imbalance::LeftRight
                }
            }),
            _ => None,
        }
    }

    /// Restructures the subtree and returns its new root.
    pub(crate) fn fix<K>(self, node: Box<Node<K>>) -> Box<Node<K>> {
        match self {
            Imbalance::LeftLeft => fix_left_left(node),
            Imbalance::LeftRight => fix_left_right(node),
            Imbalance::RightRight => fix_right_right(node),
            Imbalance::RightLeft => fix_right_left(node),
        }
    }
}

// The demoted node's height is refreshed before the pivot's, since the pivot
// reads it.
pub(crate) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

pub(crate) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

pub(crate) fn fix_left_left<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_right(node)
}

pub(crate) fn fix_right_right<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_left(node)
}

pub(crate) fn fix_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(left) = node.left.take() {
        node.left = Some(rotate_left(left));
    }
    rotate_right(node)
}

pub(crate) fn fix_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(right) = node.right.take() {
        node.right = Some(rotate_right(right));
    }
    rotate_left(node)
}

/// Rebalances one ancestor popped off the descent path.
///
/// The returned subtree root has a fresh height, whether or not a rotation
/// happened.
pub(crate) fn rebalance<K: Ord + Debug>(mut node: Box<Node<K>>, key: &K) -> Box<Node<K>> {
    match Imbalance::detect(&node, key) {
        Some(case) => {
            debug!(?case, at = ?node.key(), ?key, "rotating subtree");
            case.fix(node)
        }
        None => {
            node.update_height();
            node
        }
    }
}
