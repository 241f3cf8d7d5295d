//! A common cursor-based interface over the containers being compared.
//!
//! The workloads walk containers the way an iterator loop would: start at
//! [`Sequence::begin`], step with [`Sequence::advance`] until
//! [`Sequence::is_end`]. Positional access is always a linear walk, so a
//! vector and a linked list do exactly the same number of steps and only
//! their memory layout differs.

mod linked;

pub use linked::{Iter, LinkedSeq, NodeRef};

use std::collections::VecDeque;
use std::fmt;

/// Which data-structure strategy a container represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    Vector,
    Deque,
}

impl ContainerKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::List => "list",
            ContainerKind::Vector => "vector",
            ContainerKind::Deque => "deque",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Sequence<T> {
    /// Position handle. The end position is one past the last element.
    type Cursor: Copy + PartialEq + fmt::Debug;

    fn kind(&self) -> ContainerKind;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn begin(&self) -> Self::Cursor;

    fn is_end(&self, cursor: Self::Cursor) -> bool;

    fn value_at(&self, cursor: Self::Cursor) -> Option<&T>;

    fn advance(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Inserts `value` in front of `cursor` (at the end when `cursor` is the
    /// end position) and returns the cursor of the new element.
    fn insert_before(&mut self, cursor: Self::Cursor, value: T) -> Self::Cursor;

    /// Removes the element at `cursor`. Returns `None` for the end position.
    fn erase_at(&mut self, cursor: Self::Cursor) -> Option<T>;

    fn insert_front(&mut self, value: T);

    fn insert_back(&mut self, value: T);

    /// Sorts the whole container with the container's preferred algorithm.
    fn sort_all(&mut self)
    where
        T: Ord;

    /// Elements in container order.
    fn contents(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> Sequence<T> for Vec<T> {
    type Cursor = usize;

    fn kind(&self) -> ContainerKind {
        ContainerKind::Vector
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn begin(&self) -> usize {
        0
    }

    fn is_end(&self, cursor: usize) -> bool {
        cursor >= self.len()
    }

    fn value_at(&self, cursor: usize) -> Option<&T> {
        self.as_slice().get(cursor)
    }

    fn advance(&self, cursor: usize) -> usize {
        cursor + 1
    }

    fn insert_before(&mut self, cursor: usize, value: T) -> usize {
        let at = cursor.min(self.len());
        self.insert(at, value);
        at
    }

    fn erase_at(&mut self, cursor: usize) -> Option<T> {
        (cursor < self.len()).then(|| self.remove(cursor))
    }

    fn insert_front(&mut self, value: T) {
        self.insert(0, value);
    }

    fn insert_back(&mut self, value: T) {
        self.push(value);
    }

    fn sort_all(&mut self)
    where
        T: Ord,
    {
        self.sort_unstable();
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    type Cursor = usize;

    fn kind(&self) -> ContainerKind {
        ContainerKind::Deque
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn begin(&self) -> usize {
        0
    }

    fn is_end(&self, cursor: usize) -> bool {
        cursor >= self.len()
    }

    fn value_at(&self, cursor: usize) -> Option<&T> {
        VecDeque::get(self, cursor)
    }

    fn advance(&self, cursor: usize) -> usize {
        cursor + 1
    }

    fn insert_before(&mut self, cursor: usize, value: T) -> usize {
        let at = cursor.min(self.len());
        VecDeque::insert(self, at, value);
        at
    }

    fn erase_at(&mut self, cursor: usize) -> Option<T> {
        VecDeque::remove(self, cursor)
    }

    fn insert_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn insert_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn sort_all(&mut self)
    where
        T: Ord,
    {
        self.make_contiguous().sort_unstable();
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Sequence<T> for LinkedSeq<T> {
    type Cursor = NodeRef;

    fn kind(&self) -> ContainerKind {
        ContainerKind::List
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn begin(&self) -> NodeRef {
        self.cursor_front()
    }

    fn is_end(&self, cursor: NodeRef) -> bool {
        cursor.is_end()
    }

    fn value_at(&self, cursor: NodeRef) -> Option<&T> {
        LinkedSeq::get(self, cursor)
    }

    fn advance(&self, cursor: NodeRef) -> NodeRef {
        self.next(cursor)
    }

    fn insert_before(&mut self, cursor: NodeRef, value: T) -> NodeRef {
        LinkedSeq::insert_before(self, cursor, value)
    }

    fn erase_at(&mut self, cursor: NodeRef) -> Option<T> {
        self.remove(cursor)
    }

    fn insert_front(&mut self, value: T) {
        self.push_front(value);
    }

    fn insert_back(&mut self, value: T) {
        self.push_back(value);
    }

    fn sort_all(&mut self)
    where
        T: Ord,
    {
        self.sort();
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
