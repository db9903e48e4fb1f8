//! # The Catalog
//!
//! A doubly linked sequence of [`Product`]s kept in insertion order, plus a
//! cursor for stateful navigation. Nodes live in a slot arena and link to
//! their neighbors by index, so insert and unlink are O(1) pure data
//! operations and there are no raw-pointer aliasing hazards; removed slots
//! go on a free list and are reused by later inserts.
//!
//! ## Handles
//!
//! [`NodeHandle`] is a stable address for one node. It survives unrelated
//! insertions and removals, and is invalidated only when its own node is
//! removed (the slot may then be reused, so hold handles briefly — look up,
//! read, drop).
//!
//! ## The cursor
//!
//! The catalog tracks one "current" node:
//! - [`insert`](Catalog::insert) moves the cursor to the new tail node.
//! - [`remove`](Catalog::remove) of the cursor's node reassigns it to the
//!   successor, else the predecessor, else nothing.
//! - [`step_next`](Catalog::step_next) / [`step_prev`](Catalog::step_prev)
//!   refuse to move past an end and report `false`.
//! - [`update`](Catalog::update) never touches the cursor.

use crate::error::{ProdzError, Result};
use crate::model::{Product, ProductPatch};

/// Stable address of one node in the catalog's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

#[derive(Debug, Clone)]
struct Node {
    product: Product,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Free { next_free: Option<usize> },
}

/// Doubly linked product sequence over a slot arena.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slots: Vec<Slot>,
    free: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
    cursor: Option<usize>,
    len: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node and resets to the empty state. Safe to call on an
    /// already-empty catalog.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.first = None;
        self.last = None;
        self.cursor = None;
        self.len = 0;
    }

    /// Appends a product at the tail and moves the cursor onto it. O(1).
    ///
    /// Duplicate ids are accepted; the catalog never checks. Lookups on a
    /// duplicated id resolve to the earliest inserted node.
    pub fn insert(&mut self, product: Product) -> NodeHandle {
        let node = Node {
            product,
            prev: self.last,
            next: None,
        };
        let index = self.alloc(node);

        match self.last {
            Some(last) => self.node_mut(last).next = Some(index),
            None => self.first = Some(index),
        }
        self.last = Some(index);
        self.cursor = Some(index);
        self.len += 1;
        NodeHandle(index)
    }

    /// Linear scan from the head; first id match wins. O(n).
    pub fn find_by_id(&self, id: i64) -> Option<NodeHandle> {
        let mut index = self.first;
        while let Some(i) = index {
            let node = self.node(i);
            if node.product.id == id {
                return Some(NodeHandle(i));
            }
            index = node.next;
        }
        None
    }

    /// Reads the product behind a handle, or `None` if the slot is no
    /// longer occupied.
    pub fn get(&self, handle: NodeHandle) -> Option<&Product> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(node)) => Some(&node.product),
            _ => None,
        }
    }

    /// Applies the present fields of `patch` to the product with `id`.
    /// The id itself is never altered, and the cursor does not move.
    pub fn update(&mut self, id: i64, patch: &ProductPatch) -> Result<()> {
        let handle = self.find_by_id(id).ok_or(ProdzError::NotFound(id))?;
        let product = &mut self.node_mut(handle.0).product;
        if let Some(name) = &patch.name {
            product.set_name(name);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(quantity) = patch.quantity {
            product.quantity = quantity;
        }
        Ok(())
    }

    /// Unlinks the first node matching `id` and returns its product.
    /// O(n) for the lookup, O(1) for the unlink.
    ///
    /// If the removed node was the cursor, the cursor moves to the
    /// successor, else the predecessor, else nothing.
    pub fn remove(&mut self, id: i64) -> Result<Product> {
        let handle = self.find_by_id(id).ok_or(ProdzError::NotFound(id))?;
        let index = handle.0;
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.first = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.last = prev,
        }
        if self.cursor == Some(index) {
            self.cursor = next.or(prev);
        }

        let slot = std::mem::replace(&mut self.slots[index], Slot::Free { next_free: self.free });
        self.free = Some(index);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => Ok(node.product),
            Slot::Free { .. } => unreachable!("removed node resolved to a free slot"),
        }
    }

    /// Puts the cursor on the head. No-op on an empty catalog.
    pub fn go_first(&mut self) {
        self.cursor = self.first;
    }

    /// Puts the cursor on the tail. No-op on an empty catalog.
    pub fn go_last(&mut self) {
        self.cursor = self.last;
    }

    /// Advances the cursor to its successor. Returns `false` (cursor
    /// unchanged) when the cursor is unset or already at the tail.
    pub fn step_next(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        match self.node(cursor).next {
            Some(next) => {
                self.cursor = Some(next);
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to its predecessor. Returns `false` (cursor
    /// unchanged) when the cursor is unset or already at the head.
    pub fn step_prev(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        match self.node(cursor).prev {
            Some(prev) => {
                self.cursor = Some(prev);
                true
            }
            None => false,
        }
    }

    /// The product under the cursor, if the cursor is set.
    pub fn current(&self) -> Option<&Product> {
        self.cursor.map(|i| &self.node(i).product)
    }

    /// Walks the chain head to tail; reverse with [`Iterator::rev`].
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            catalog: self,
            front: self.first,
            back: self.last,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot on the free list"),
                };
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, index: usize) -> &Node {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("chain link points at a free slot"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("chain link points at a free slot"),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Double-ended traversal of the chain. `front`/`back` close in on each
/// other; `remaining` stops them from crossing.
pub struct Iter<'a> {
    catalog: &'a Catalog,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<&'a Product> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        let node = self.catalog.node(index);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Product> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        let node = self.catalog.node(index);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.product)
    }
}

impl ExactSizeIterator for Iter<'_> {}
