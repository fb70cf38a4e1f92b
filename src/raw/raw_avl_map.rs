use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::node::{Link, Node};

/// The core AVL tree implementation backing `AvlTreeMap`.
///
/// Every mutation descends from the root to the affected position and
/// rebalances each node on the unwind, so the balance invariant
/// (`|height(left) - height(right)| <= 1` at every node) holds whenever a
/// public method returns.
#[derive(Clone)]
pub(crate) struct RawAvlMap<K, V> {
    /// The root link, `None` when the tree is empty.
    root: Link<K, V>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

impl<K, V> RawAvlMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears all elements from the tree.
    ///
    /// Dropping the root link releases the whole node graph through `Box`
    /// ownership; the recursion depth is the tree height, which the balance
    /// invariant bounds by O(log n).
    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns a shared reference to the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns a mutable reference to the root node, if any.
    pub(crate) fn root_mut(&mut self) -> Option<&mut Node<K, V>> {
        self.root.as_deref_mut()
    }

    /// Returns the entry with the given key, if present.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some((&node.key, &node.value)),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns the value for the given key, if present.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value for the given key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns true if the tree contains the given key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).is_some()
    }

    /// Returns the minimum entry, following left links from the root.
    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the maximum entry, following right links from the root.
    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing key is updated in place; no second node is created and the
    /// length is unchanged.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let old = Self::insert_at(&mut self.root, key, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    fn insert_at(link: &mut Link<K, V>, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let Some(node) = link else {
            *link = Some(Box::new(Node::new(key, value)));
            return None;
        };

        let old = match key.cmp(&node.key) {
            Ordering::Less => Self::insert_at(&mut node.left, key, value),
            Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            Ordering::Greater => Self::insert_at(&mut node.right, key, value),
        };

        // A replaced value leaves the structure untouched; only a fresh node
        // can change subtree heights on the unwind.
        if old.is_none() {
            Node::rebalance(node);
        }
        old
    }

    /// Removes the entry with the given key, if present.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let removed = Self::remove_at(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_at<Q>(link: &mut Link<K, V>, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let node = link.as_mut()?;
        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::remove_at(&mut node.left, key),
            Ordering::Equal => return Some(Self::splice(link)),
            Ordering::Greater => Self::remove_at(&mut node.right, key),
        };

        // Unlike insertion, deletion can demand a rotation at every level of
        // the unwind, so each ancestor is rebalanced unconditionally.
        if removed.is_some() {
            Node::rebalance(node);
        }
        removed
    }

    /// Detaches the entry occupying `link`, wiring a replacement subtree into
    /// its place, and returns the detached key-value pair.
    fn splice(link: &mut Link<K, V>) -> (K, V)
    where
        K: Ord,
    {
        let node = link.as_mut().expect("splice on empty link");
        if node.left.is_some() && node.right.is_some() {
            // Two children: hoist the in-order successor into this node. The
            // successor is spliced out of the right subtree by the minimum
            // removal, which rebalances its own unwind; this node then only
            // needs its regular repair.
            let (succ_key, succ_value) = Self::pop_min_at(&mut node.right);
            let pair = (
                mem::replace(&mut node.key, succ_key),
                mem::replace(&mut node.value, succ_value),
            );
            Node::rebalance(node);
            pair
        } else {
            // At most one child: that child (or nothing) takes the slot. A
            // lone AVL child is a childless node, so the replacement subtree
            // is balanced as-is; ancestors repair themselves on the unwind.
            let node = link.take().expect("splice on empty link");
            let (key, value, left, right) = node.into_parts();
            *link = left.or(right);
            (key, value)
        }
    }

    /// Removes and returns the minimum entry of the non-empty subtree behind
    /// `link`, rebalancing the unwound path.
    fn pop_min_at(link: &mut Link<K, V>) -> (K, V) {
        let node = link.as_mut().expect("pop_min_at on empty subtree");
        if node.left.is_some() {
            let pair = Self::pop_min_at(&mut node.left);
            Node::rebalance(node);
            pair
        } else {
            let node = link.take().expect("pop_min_at on empty subtree");
            let (key, value, _, right) = node.into_parts();
            *link = right;
            (key, value)
        }
    }

    /// Removes and returns the maximum entry of the non-empty subtree behind
    /// `link`, rebalancing the unwound path.
    fn pop_max_at(link: &mut Link<K, V>) -> (K, V) {
        let node = link.as_mut().expect("pop_max_at on empty subtree");
        if node.right.is_some() {
            let pair = Self::pop_max_at(&mut node.right);
            Node::rebalance(node);
            pair
        } else {
            let node = link.take().expect("pop_max_at on empty subtree");
            let (key, value, left, _) = node.into_parts();
            *link = left;
            (key, value)
        }
    }

    /// Removes and returns the minimum entry, `None` if the tree is empty.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        if self.root.is_none() {
            return None;
        }
        let pair = Self::pop_min_at(&mut self.root);
        self.len -= 1;
        Some(pair)
    }

    /// Removes and returns the maximum entry, `None` if the tree is empty.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        if self.root.is_none() {
            return None;
        }
        let pair = Self::pop_max_at(&mut self.root);
        self.len -= 1;
        Some(pair)
    }

    /// Consumes the tree into a vector of entries in ascending key order.
    ///
    /// This is O(n) and avoids rebalancing, unlike repeated `pop_first`.
    pub(crate) fn into_sorted_vec(self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.len);
        Self::drain_at(self.root, &mut out);
        out
    }

    fn drain_at(link: Link<K, V>, out: &mut Vec<(K, V)>) {
        if let Some(node) = link {
            let (key, value, left, right) = node.into_parts();
            Self::drain_at(left, out);
            out.push((key, value));
            Self::drain_at(right, out);
        }
    }
}
