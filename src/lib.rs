//! Key-Indexed Binary Heap
//!
//! This crate provides a binary priority heap whose entries are addressable by an
//! external key: a caller can look up, and change the priority of, an element
//! already in the heap in O(log n). This keyed update is the operation needed by
//! Dijkstra's shortest path, Prim's minimum spanning tree, and similar algorithms,
//! and is not available on `std::collections::BinaryHeap`.
//!
//! # Features
//!
//! - **Min or max ordering**: chosen once at construction via [`Order`]
//! - **Keyed updates**: `update` re-prioritizes an existing entry in O(log n)
//! - **O(1) membership**: `contains`/`get` answer directly from the key index
//! - **Stable node identity**: nodes live in an arena; handles survive every swap
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{IndexedBinaryHeap, Order};
//!
//! let mut heap = IndexedBinaryHeap::new(Order::Min);
//! heap.push(8, "2^3", ());
//! heap.push(2, "2^1", ());
//! heap.push(10, "2^0", ());
//!
//! // Re-prioritize an entry already in the heap.
//! heap.update(1, "2^0", ());
//!
//! let node = heap.pop().unwrap();
//! assert_eq!(node.priority(), 1);
//! assert_eq!(*node.key(), "2^0");
//! ```

pub mod indexed_binary;
pub mod order;

// Re-export the main types for convenience
pub use indexed_binary::{HeapError, HeapNode, IndexedBinaryHeap};
pub use order::Order;
