//! Private AVL tree internals backing the public collections.

mod node;
mod raw_avl_map;

pub(crate) use node::Node;
pub(crate) use raw_avl_map::RawAvlMap;
