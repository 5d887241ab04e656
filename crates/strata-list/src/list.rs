//! Node chains and the owning list.

use std::fmt;

/// One link of a [`NodeList`].
///
/// Nodes are only created by the list. A `&Node` is also the head of the
/// sub-chain that starts at it, so `len`/`get` work relative to any node.
pub struct Node {
    value: f64,
    next: Option<Box<Node>>,
}

impl Node {
    /// The value stored in this node.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Number of nodes in the chain starting at this node.
    pub fn len(&self) -> usize {
        std::iter::successors(Some(self), |node| node.next()).count()
    }

    /// The node `index` links after this one (`0` is this node).
    pub fn get(&self, index: usize) -> Option<&Node> {
        std::iter::successors(Some(self), |node| node.next()).nth(index)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// An owned, singly-linked list of `f64` values.
///
/// Index operations walk from the head, so they are O(index).
#[derive(Default)]
pub struct NodeList {
    head: Option<Box<Node>>,
}

impl NodeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.head().map_or(0, Node::len)
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// The node at `index`, or `None` if out of range.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.head()?.get(index)
    }

    /// The value at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.node(index).map(Node::value)
    }

    /// Overwrite the value at `index`.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        match self.link_mut(index) {
            Some(Some(node)) => {
                node.value = value;
                true
            }
            _ => false,
        }
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// `index` may range over `0..=len()`; inserting at `len()` appends.
    /// Returns `false` and changes nothing for larger indices.
    pub fn insert(&mut self, index: usize, value: f64) -> bool {
        let Some(link) = self.link_mut(index) else {
            return false;
        };
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        true
    }

    /// Insert `value` at the head.
    pub fn push_front(&mut self, value: f64) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Remove the node at `index` and return its value.
    ///
    /// Returns `None` and changes nothing if `index` is out of range.
    pub fn erase(&mut self, index: usize) -> Option<f64> {
        let link = self.link_mut(index)?;
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node.value)
    }

    /// Split the list after its first `at` nodes.
    ///
    /// `self` keeps nodes `[0, at)`; the returned list holds the rest.
    /// If `at >= len()` the returned list is empty and `self` is
    /// unchanged.
    pub fn split_off(&mut self, at: usize) -> NodeList {
        let head = self.link_mut(at).and_then(Option::take);
        NodeList { head }
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Iterate over values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head() }
    }

    /// The link that holds node `index`: `head` for 0, otherwise the
    /// `next` field of node `index - 1`. `None` if fewer than `index`
    /// nodes exist.
    fn link_mut(&mut self, index: usize) -> Option<&mut Option<Box<Node>>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

// Iterative drop: the default recursive drop of `Box<Node>` chains would
// use stack proportional to the list length.
impl Drop for NodeList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<f64> for NodeList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut list = NodeList::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
        }
        list
    }
}

impl fmt::Debug for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`NodeList`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.next?;
        self.next = node.next();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
