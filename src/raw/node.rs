use alloc::boxed::Box;
use core::mem;

/// An owning link to a subtree; `None` is the empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single key-value association plus its local structural metadata.
///
/// Each node exclusively owns its child subtrees; there are no parent
/// back-references anywhere in the tree.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Cached height of the subtree rooted here. A childless node has
    /// height 0; the empty subtree counts as -1.
    height: i8,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new childless node.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Returns the cached height of this node's subtree.
    pub(crate) fn height(&self) -> i8 {
        self.height
    }

    /// Decomposes the node into its entry and child links.
    pub(crate) fn into_parts(self) -> (K, V, Link<K, V>, Link<K, V>) {
        (self.key, self.value, self.left, self.right)
    }

    /// Borrows the entry and both child links disjointly.
    pub(crate) fn split_mut(&mut self) -> (&K, &mut V, &mut Link<K, V>, &mut Link<K, V>) {
        (&self.key, &mut self.value, &mut self.left, &mut self.right)
    }

    /// Returns the height of the subtree behind `link`, -1 if empty.
    pub(crate) fn height_of(link: &Link<K, V>) -> i8 {
        link.as_ref().map_or(-1, |node| node.height)
    }

    /// Recomputes this node's cached height from its children.
    ///
    /// Must be called bottom-up: both children's heights have to be current.
    fn update_height(&mut self) {
        self.height = 1 + Self::height_of(&self.left).max(Self::height_of(&self.right));
    }

    /// Returns `height(right) - height(left)`.
    ///
    /// Values outside `[-1, 1]` mean the node needs a rotation; values
    /// outside `[-2, 2]` cannot occur between mutation and repair.
    pub(crate) fn balance_factor(&self) -> i8 {
        Self::height_of(&self.right) - Self::height_of(&self.left)
    }

    /// Rotates the subtree in `root` to the right, promoting the left child.
    ///
    /// The promoted child's right subtree crosses over to become the demoted
    /// node's left subtree; in-order key sequence is unchanged. Heights are
    /// recomputed demoted-node first.
    fn rotate_right(root: &mut Box<Node<K, V>>) {
        let mut pivot = root.left.take().expect("rotate_right requires a left child");
        root.left = pivot.right.take();
        root.update_height();
        mem::swap(root, &mut pivot);
        // `pivot` now holds the demoted node.
        root.right = Some(pivot);
        root.update_height();
    }

    /// Rotates the subtree in `root` to the left, promoting the right child.
    fn rotate_left(root: &mut Box<Node<K, V>>) {
        let mut pivot = root.right.take().expect("rotate_left requires a right child");
        root.right = pivot.left.take();
        root.update_height();
        mem::swap(root, &mut pivot);
        root.left = Some(pivot);
        root.update_height();
    }

    /// Recomputes `root`'s height and restores the balance invariant with at
    /// most one single or double rotation.
    ///
    /// The double-rotation decision inspects the child's balance factor, not
    /// any key, so the same routine serves insertion and deletion unwinds.
    pub(crate) fn rebalance(root: &mut Box<Node<K, V>>) {
        root.update_height();
        match root.balance_factor() {
            -2 => {
                let left = root.left.as_mut().expect("left-heavy node has a left child");
                if left.balance_factor() > 0 {
                    // Left child is right-heavy: left-right case.
                    Self::rotate_left(left);
                }
                Self::rotate_right(root);
            }
            2 => {
                let right = root.right.as_mut().expect("right-heavy node has a right child");
                if right.balance_factor() < 0 {
                    // Right child is left-heavy: right-left case.
                    Self::rotate_right(right);
                }
                Self::rotate_left(root);
            }
            _ => {}
        }
        debug_assert!(root.balance_factor().abs() <= 1);
    }
}
