use std::cmp::max;

use crate::path::Direction;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Node in the AVL tree.
///
/// `height` is cached and counts edges: a leaf stores 0. It is always derived
/// from the children's *stored* heights, never by walking the subtree, so it
/// must be refreshed bottom-up after every structural change.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    height: i32,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            height: 0,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Stored height of this subtree.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    // One edge down to the child plus whatever the child has stored.
    fn contribution(link: &Link<K>) -> i32 {
        link.as_ref().map_or(0, |n| 1 + n.height)
    }

    /// Height of `node` as computed from its children's stored heights; 0 for
    /// a missing node.
    pub fn evaluate_height(node: Option<&Node<K>>) -> i32 {
        node.map_or(0, |n| {
            max(Node::contribution(&n.left), Node::contribution(&n.right))
        })
    }

    /// Left contribution minus right contribution; 0 for a missing node.
    pub fn evaluate_balance(node: Option<&Node<K>>) -> i32 {
        node.map_or(0, |n| n.balance_factor())
    }

    pub fn balance_factor(&self) -> i32 {
        Node::contribution(&self.left) - Node::contribution(&self.right)
    }

    pub(crate) fn update_height(&mut self) {
        self.height = Node::evaluate_height(Some(&*self));
    }

    pub(crate) fn child(&self, direction: Direction) -> Option<&Node<K>> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link<K> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
