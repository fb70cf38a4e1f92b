//! AVL tree collections for Rust.
//!
//! This crate provides [`AvlTreeMap`] and [`AvlTreeSet`], ordered collections backed by a
//! height-balanced binary search tree (an [AVL tree]) with O(log n) lookup, insertion, and
//! deletion:
//!
//! - [`insert`](AvlTreeMap::insert) / [`remove`](AvlTreeMap::remove) - Point mutations with
//!   guaranteed rebalancing
//! - [`get`](AvlTreeMap::get) - Point lookups by any borrowed form of the key
//! - [`first_key_value`](AvlTreeMap::first_key_value) /
//!   [`last_key_value`](AvlTreeMap::last_key_value) - Ordered min/max access
//! - In-order iteration in ascending key order
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTreeMap;
//!
//! let mut book = AvlTreeMap::new();
//! book.insert(105, "bid");
//! book.insert(99, "bid");
//! book.insert(110, "ask");
//!
//! // Point queries are O(log n)
//! assert_eq!(book.get(&105), Some(&"bid"));
//! assert_eq!(book.len(), 3);
//!
//! // Min/max descend a single spine
//! assert_eq!(book.first_key_value(), Some((&99, &"bid")));
//! assert_eq!(book.last_key_value(), Some((&110, &"ask")));
//!
//! // Iteration is always in ascending key order
//! let keys: Vec<_> = book.keys().copied().collect();
//! assert_eq!(keys, [99, 105, 110]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Drop-in familiar** - API mirrors `std::collections::BTreeMap`/`BTreeSet`
//! - **Strict balance** - Every node's subtree heights differ by at most one, restored by
//!   rotations after every mutation, so tree depth is bounded by ~1.44 log2(n)
//! - **No unsafe code** - Nodes own their children; iterators use explicit traversal stacks
//!   instead of parent pointers
//!
//! # Implementation
//!
//! The collections are classic AVL trees: each node caches the height of its subtree, and
//! every insertion or deletion rebalances the unwound path with single or double rotations
//! chosen by the child's balance factor. The tree is a single-threaded, synchronous
//! structure; sharing it across threads requires external synchronization, which the
//! borrow checker enforces through the usual `&`/`&mut` receiver rules.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod raw;

pub mod avl_map;
pub mod avl_set;

pub use avl_map::AvlTreeMap;
pub use avl_set::AvlTreeSet;
