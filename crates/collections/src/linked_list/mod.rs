use std::fmt;

use crate::boxnode;

/// Occurrence counter stored next to every key
pub type Count = u64;

/// A singly-linked chain of `(key, count)` nodes.
///
/// Every bucket of a [`ChainedHashTable`](crate::ChainedHashTable) is one `Chain`.
/// Keys are unique within a chain and new keys are appended at the tail,
/// so a chain keeps first-seen order.
pub struct Chain {
    head: Option<Box<Node>>,
    len: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bumps the count of `key` if it is already in the chain,
    /// otherwise appends a new node with a count of 1 at the tail.
    ///
    /// Returns the count of `key` after the call.
    pub fn increment_or_push(&mut self, key: &str) -> Count {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.key == key {
                node.count += 1;
                return node.count;
            }
            link = &mut node.next;
        }

        *link = Some(boxnode!(key));
        self.len += 1;
        1
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.iter().find(|n| n.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                return Some(node);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the node holding `key` and hands it back,
    /// relinking its predecessor to its successor.
    ///
    /// Returns `None` and leaves the chain untouched if `key` is not present.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return None,
                Some(node) if node.key == key => {
                    // the successor takes the place of the removed node
                    let next = node.next.take();
                    let removed = std::mem::replace(link, next);
                    self.len -= 1;
                    return removed.map(|boxed| *boxed);
                }
                Some(node) => link = &mut node.next,
            }
        }
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<Node> {
        match self.head.take() {
            None => None,
            Some(mut node) => {
                self.head = node.next.take();
                self.len -= 1;
                Some(*node)
            }
        }
    }

    pub fn peek(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Clone for Chain {
    /// Deep copy: every node is duplicated and the copies are linked
    /// in the same order as the originals.
    fn clone(&self) -> Self {
        let mut copy = Chain::new();
        let mut tail = &mut copy.head;
        for node in self.iter() {
            let cloned = tail.insert(boxnode!(node.key.as_str(), node.count));
            tail = &mut cloned.next;
        }
        copy.len = self.len;
        copy
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl IntoIterator for Chain {
    type Item = <IterOwn as Iterator>::Item;
    type IntoIter = IterOwn;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node {
    pub(crate) key: String,
    pub(crate) count: Count,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn count(&self) -> Count {
        self.count
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.count == other.count
    }
}
impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.key, self.count)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.key, self.count)
    }
}

// [iterators]

pub struct Iter<'a> {
    current: Option<&'a Node>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(node)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> Iter<'a> {
    pub fn new(chain: &'a Chain) -> Self {
        Self {
            current: chain.head.as_deref(),
            len: chain.len,
        }
    }
}

pub struct IterOwn(Chain);

impl Iterator for IterOwn {
    type Item = Node;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl IterOwn {
    pub fn new(chain: Chain) -> Self {
        Self(chain)
    }
}
