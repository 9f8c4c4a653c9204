use crate::error::AvlError;
use crate::node::Node;

/// Branch taken from a node towards one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Keys not less than the node's key go right, so duplicates land in the
    /// right subtree.
    pub fn of<K: Ord>(key: &K, node_key: &K) -> Self {
        if key < node_key {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Ancestors visited while descending to an insertion point, most recent last.
///
/// Each entry owns a node detached from the tree together with the side its
/// child on the path was taken from. Popping an entry and reattaching the
/// rebalanced child rebuilds the tree bottom-up, so nodes never need a parent
/// link.
pub(crate) struct PathTracker<K> {
    entries: Vec<(Box<Node<K>>, Direction)>,
}

impl<K> PathTracker<K> {
    /// Reserves room for `depth` entries up front so that pushes during a
    /// descent never allocate.
    pub(crate) fn with_depth(depth: usize) -> Result<Self, AvlError> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(depth)?;
        Ok(PathTracker { entries })
    }

    pub(crate) fn push(&mut self, node: Box<Node<K>>, direction: Direction) {
        self.entries.push((node, direction));
    }

    pub(crate) fn pop(&mut self) -> Option<(Box<Node<K>>, Direction)> {
        self.entries.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
