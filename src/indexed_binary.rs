//! Key-indexed binary heap implementation
//!
//! A 1-indexed binary heap (slot 0 is a sentinel, so the parent of slot `i` is
//! `i / 2` and its children are `2i` and `2i + 1`) augmented with a key index
//! that maps every live key to its node, making entries addressable from the
//! outside without a linear search.
//!
//! Nodes are owned by an arena ([`slotmap::SlotMap`]) and referenced by stable
//! generational handles; the slot vector and the key index both store handles
//! rather than aliasing a shared mutable node. A node's `position` field is
//! rewritten on every swap, so the handle-to-slot mapping is consistent at all
//! times between operations.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `update`   | O(log n)   |
//! | `contains` | O(1)       |
//! | `get`      | O(1)       |
//! | `peek`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{IndexedBinaryHeap, Order};
//!
//! let mut heap = IndexedBinaryHeap::new(Order::Max);
//! heap.push(3, "three", ());
//! heap.push(1, "one", ());
//! heap.push(2, "two", ());
//!
//! assert!(heap.contains("one"));
//! assert_eq!(heap.pop().unwrap().priority(), 3);
//! assert_eq!(heap.pop().unwrap().priority(), 2);
//! assert_eq!(heap.pop().unwrap().priority(), 1);
//! assert!(heap.pop().is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::order::Order;

new_key_type! {
    /// Arena handle for a heap node, shared by the slot vector and the key index
    struct NodeKey;
}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` was called on an empty heap
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "pop called on an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A single heap entry: the unit of storage of [`IndexedBinaryHeap`].
///
/// `position` is the node's current 1-based slot in the heap and is rewritten
/// on every swap; callers must not assume it is stable across any mutating
/// heap operation. The priority can only change through
/// [`IndexedBinaryHeap::update`] — there is no public mutable accessor, so the
/// heap invariant cannot be corrupted from outside.
#[derive(Debug, Clone)]
pub struct HeapNode<K, V> {
    position: usize,
    priority: i64,
    key: K,
    value: V,
}

impl<K, V> HeapNode<K, V> {
    /// The node's 1-based slot within the heap.
    ///
    /// For a node returned by [`IndexedBinaryHeap::pop`] this is the slot it
    /// occupied at the instant it was removed, which is always 1 (the root).
    pub fn position(&self) -> usize {
        self.position
    }

    /// The node's priority.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// The key the node is addressed by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload associated with the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the node, returning its priority, key, and value.
    pub fn into_parts(self) -> (i64, K, V) {
        (self.priority, self.key, self.value)
    }
}

/// A binary min/max priority heap whose entries are addressable by key.
///
/// Each entry is identified by a unique key; `contains` and `get` answer in
/// O(1) from the key index, and `update` re-prioritizes an existing entry in
/// O(log n) by sifting it from its current slot. Keys are unique: pushing a
/// key that is already present behaves as [`update`](Self::update), so the
/// heap never holds two entries for one key.
///
/// Not safe for unsynchronized concurrent mutation; wrap the whole structure
/// in a lock if multiple threads need it.
///
/// # Example
///
/// ```rust
/// use indexed_binary_heap::{IndexedBinaryHeap, Order};
///
/// let mut heap = IndexedBinaryHeap::new(Order::Min);
/// heap.push(40, "d", "payload-d");
/// heap.push(10, "a", "payload-a");
/// heap.push(30, "c", "payload-c");
///
/// // "c" moves ahead of "a" once its priority drops below 10.
/// heap.update(5, "c", "payload-c");
/// assert_eq!(*heap.pop().unwrap().key(), "c");
/// assert_eq!(*heap.pop().unwrap().key(), "a");
/// ```
#[derive(Debug)]
pub struct IndexedBinaryHeap<K: Eq + Hash + Clone, V> {
    /// Arena owning every live node; handles stay valid across swaps and grows
    nodes: SlotMap<NodeKey, HeapNode<K, V>>,
    /// 1-indexed heap layout; slot 0 holds the null key as a sentinel
    slots: Vec<NodeKey>,
    order: Order,
    /// key -> node handle, kept in lockstep with the arena
    index: FxHashMap<K, NodeKey>,
}

impl<K: Eq + Hash + Clone, V> IndexedBinaryHeap<K, V> {
    /// Creates an empty heap with the given ordering policy.
    pub fn new(order: Order) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            slots: vec![NodeKey::default()],
            order,
            index: FxHashMap::default(),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns true if the heap has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ordering policy chosen at construction.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns true if an entry with the given key is in the heap.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns a read-only view of the entry with the given key, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&HeapNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&nk| &self.nodes[nk])
    }

    /// Returns a read-only view of the root entry (the most extreme priority
    /// under the heap's ordering) without removing it.
    pub fn peek(&self) -> Option<&HeapNode<K, V>> {
        self.slots.get(1).map(|&nk| &self.nodes[nk])
    }

    /// Inserts an entry with the given priority, key, and value.
    ///
    /// If the key is already present this behaves as [`update`](Self::update),
    /// so a key never owns more than one entry.
    pub fn push(&mut self, priority: i64, key: K, value: V) {
        if self.index.contains_key(&key) {
            self.update(priority, key, value);
            return;
        }

        let position = self.slots.len();
        let nk = self.nodes.insert(HeapNode {
            position,
            priority,
            key: key.clone(),
            value,
        });
        self.slots.push(nk);
        self.index.insert(key, nk);

        self.swim(position);
    }

    /// Removes and returns the root entry: the maximum priority for
    /// [`Order::Max`], the minimum for [`Order::Min`].
    ///
    /// The last slot's node is moved into the root and sunk back down until no
    /// child outranks it. The returned node's recorded position is the slot it
    /// held when removed, always 1.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no entries.
    pub fn pop(&mut self) -> Result<HeapNode<K, V>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let root = self.slots.swap_remove(1);
        if let Some(&moved) = self.slots.get(1) {
            self.nodes[moved].position = 1;
            self.sink(1);
        }

        let node = self
            .nodes
            .remove(root)
            .expect("heap slot held a stale arena handle");
        self.index.remove(&node.key);

        Ok(node)
    }

    /// Sets the priority and value of the entry with the given key, restoring
    /// heap order from the entry's current slot.
    ///
    /// If the key is absent this behaves exactly as [`push`](Self::push): the
    /// operation is an upsert, not an error. If present, the node swims when
    /// the new priority outranks the old one and sinks otherwise; one
    /// direction suffices because a single priority change can violate the
    /// heap property in only one direction.
    pub fn update(&mut self, priority: i64, key: K, value: V) {
        let nk = match self.index.get(&key) {
            Some(&nk) => nk,
            None => {
                self.push(priority, key, value);
                return;
            }
        };

        let node = &mut self.nodes[nk];
        let old_priority = node.priority;
        node.priority = priority;
        node.value = value;
        let position = node.position;

        if self.order.outranks(priority, old_priority) {
            self.swim(position);
        } else {
            self.sink(position);
        }
    }

    /// Moves the node at slot `i` toward the root while it strictly outranks
    /// its parent.
    fn swim(&mut self, mut i: usize) {
        while i > 1 && self.outranks_at(i, i / 2) {
            self.swap_slots(i, i / 2);
            i /= 2;
        }
    }

    /// Moves the node at slot `i` toward the leaves while either child
    /// strictly outranks it, swapping with the more extreme child (the left
    /// one on a tie between children).
    fn sink(&mut self, mut i: usize) {
        let n = self.len();
        while 2 * i <= n {
            let mut child = 2 * i;
            if child < n && self.outranks_at(child + 1, child) {
                child += 1;
            }
            if !self.outranks_at(child, i) {
                break;
            }
            self.swap_slots(i, child);
            i = child;
        }
    }

    /// True if the node at slot `i` strictly outranks the node at slot `j`.
    fn outranks_at(&self, i: usize, j: usize) -> bool {
        self.order.outranks(
            self.nodes[self.slots[i]].priority,
            self.nodes[self.slots[j]].priority,
        )
    }

    /// Exchanges slots `i` and `j` and rewrites both nodes' positions.
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.nodes[self.slots[i]].position = i;
        self.nodes[self.slots[j]].position = j;
    }
}
