//! Doubly linked list with stable node handles.
//!
//! Nodes live in an arena and are linked by index, with freed slots recycled
//! through a free list. Walking the list in order jumps around the arena the
//! same way a heap-allocated list jumps around memory, which is the access
//! pattern the benchmarks want to expose.

use std::fmt;
use std::iter::FusedIterator;

const NIL: usize = usize::MAX;

/// Handle to a list node. [`NodeRef::END`] is the one-past-the-last position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

impl NodeRef {
    pub const END: NodeRef = NodeRef(NIL);

    pub fn is_end(&self) -> bool {
        self.0 == NIL
    }
}

#[derive(Clone)]
struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

#[derive(Clone)]
pub struct LinkedSeq<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> LinkedSeq<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    pub fn front(&self) -> Option<&T> {
        self.get(NodeRef(self.head))
    }

    pub fn back(&self) -> Option<&T> {
        self.get(NodeRef(self.tail))
    }

    pub fn cursor_front(&self) -> NodeRef {
        NodeRef(self.head)
    }

    /// Node after `at`; the end position stays at the end.
    pub fn next(&self, at: NodeRef) -> NodeRef {
        match self.live(at.0) {
            Some(node) => NodeRef(node.next),
            None => NodeRef::END,
        }
    }

    pub fn get(&self, at: NodeRef) -> Option<&T> {
        self.live(at.0).and_then(|node| node.value.as_ref())
    }

    pub fn push_front(&mut self, value: T) -> NodeRef {
        let head = self.head;
        self.insert_before(NodeRef(head), value)
    }

    pub fn push_back(&mut self, value: T) -> NodeRef {
        self.insert_before(NodeRef::END, value)
    }

    /// Links `value` in front of `at` in O(1) and returns its handle. `END`
    /// appends. Other handles stay valid.
    pub fn insert_before(&mut self, at: NodeRef, value: T) -> NodeRef {
        let next = if self.live(at.0).is_some() { at.0 } else { NIL };
        let prev = if next == NIL {
            self.tail
        } else {
            self.nodes[next].prev
        };

        let idx = self.alloc(Node {
            value: Some(value),
            prev,
            next,
        });

        if prev == NIL {
            self.head = idx;
        } else {
            self.nodes[prev].next = idx;
        }
        if next == NIL {
            self.tail = idx;
        } else {
            self.nodes[next].prev = idx;
        }
        self.len += 1;
        NodeRef(idx)
    }

    /// Unlinks the node at `at` in O(1). Handles to other nodes stay valid.
    pub fn remove(&mut self, at: NodeRef) -> Option<T> {
        let (prev, next) = {
            let node = self.live(at.0)?;
            (node.prev, node.next)
        };
        let value = self.nodes[at.0].value.take();

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[at.0].prev = NIL;
        self.nodes[at.0].next = NIL;
        self.free.push(at.0);
        self.len -= 1;
        value
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            at: self.head,
            remaining: self.len,
        }
    }

    /// Stable bottom-up merge sort that relinks nodes instead of moving
    /// values. O(n log n) comparisons, no extra allocation.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        if self.len < 2 {
            return;
        }

        let mut width = 1usize;
        loop {
            let mut p = self.head;
            let mut head = NIL;
            let mut tail = NIL;
            let mut merges = 0usize;

            while p != NIL {
                merges += 1;

                // q starts `width` nodes after p
                let mut q = p;
                let mut p_len = 0usize;
                while p_len < width && q != NIL {
                    p_len += 1;
                    q = self.nodes[q].next;
                }
                let mut q_len = width;

                while p_len > 0 || (q_len > 0 && q != NIL) {
                    let take_p = if p_len == 0 {
                        false
                    } else if q_len == 0 || q == NIL {
                        true
                    } else {
                        self.nodes[p].value <= self.nodes[q].value
                    };

                    let e = if take_p {
                        let e = p;
                        p = self.nodes[p].next;
                        p_len -= 1;
                        e
                    } else {
                        let e = q;
                        q = self.nodes[q].next;
                        q_len -= 1;
                        e
                    };

                    if tail == NIL {
                        head = e;
                    } else {
                        self.nodes[tail].next = e;
                    }
                    self.nodes[e].prev = tail;
                    tail = e;
                }

                p = q;
            }

            self.nodes[tail].next = NIL;
            self.head = head;
            self.tail = tail;

            if merges <= 1 {
                return;
            }
            width *= 2;
        }
    }

    fn live(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx).filter(|node| node.value.is_some())
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedSeq::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`LinkedSeq`].
pub struct Iter<'a, T> {
    list: &'a LinkedSeq<T>,
    at: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.live(self.at)?;
        self.at = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::{LinkedSeq, NodeRef};

    fn collect(list: &LinkedSeq<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    /// Walks the list back to front through the `prev` links.
    fn collect_rev(list: &LinkedSeq<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        let mut at = list.tail;
        while at != super::NIL {
            out.push(list.nodes[at].value.unwrap());
            at = list.nodes[at].prev;
        }
        out
    }

    #[test]
    fn push_front_reverses_order() {
        let mut list = LinkedSeq::new();
        for v in [1, 2, 3] {
            list.push_front(v);
        }
        assert_eq!(collect(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn insert_before_keeps_other_handles_valid() {
        let mut list = LinkedSeq::new();
        let a = list.push_back(10);
        let c = list.push_back(30);
        let b = list.insert_before(c, 20);
        list.insert_before(a, 5);
        assert_eq!(collect(&list), vec![5, 10, 20, 30]);
        assert_eq!(list.get(a), Some(&10));
        assert_eq!(list.get(b), Some(&20));
        assert_eq!(list.get(c), Some(&30));
        assert_eq!(collect_rev(&list), vec![30, 20, 10, 5]);
    }

    #[test]
    fn remove_relinks_and_recycles_slots() {
        let mut list: LinkedSeq<u32> = (1..=4).collect();
        let second = list.next(list.cursor_front());
        assert_eq!(list.remove(second), Some(2));
        assert_eq!(list.remove(second), None);
        assert_eq!(collect(&list), vec![1, 3, 4]);

        let slots = list.nodes.len();
        list.push_back(5);
        assert_eq!(list.nodes.len(), slots);
        assert_eq!(collect(&list), vec![1, 3, 4, 5]);
        assert_eq!(collect_rev(&list), vec![5, 4, 3, 1]);
    }

    #[test]
    fn removing_everything_leaves_an_empty_list() {
        let mut list: LinkedSeq<u32> = (0..10).collect();
        while !list.is_empty() {
            let head = list.cursor_front();
            list.remove(head);
        }
        assert_eq!(list.len(), 0);
        assert!(list.cursor_front().is_end());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn end_handle_is_inert() {
        let mut list: LinkedSeq<u32> = LinkedSeq::new();
        assert_eq!(list.get(NodeRef::END), None);
        assert!(list.next(NodeRef::END).is_end());
        assert_eq!(list.remove(NodeRef::END), None);
    }

    #[test]
    fn sort_orders_and_keeps_links_consistent() {
        let mut list: LinkedSeq<u32> = [9, 3, 7, 3, 1, 8, 2, 0, 5].into_iter().collect();
        list.sort();
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 3, 5, 7, 8, 9]);
        assert_eq!(collect_rev(&list), vec![9, 8, 7, 5, 3, 3, 2, 1, 0]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&9));
    }

    #[test]
    fn sort_matches_vec_sort_on_larger_input() {
        let input: Vec<u32> = (0..1_000u32).map(|i| (i * 7919) % 613).collect();
        let mut list: LinkedSeq<u32> = input.iter().copied().collect();
        let mut expected = input;
        expected.sort();
        list.sort();
        assert_eq!(collect(&list), expected);
    }

    #[test]
    fn sort_is_stable() {
        #[derive(Debug, Clone, Copy)]
        struct Keyed(u32, u32);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut list: LinkedSeq<Keyed> =
            [Keyed(2, 0), Keyed(1, 1), Keyed(2, 2), Keyed(1, 3)].into_iter().collect();
        list.sort();
        let tags: Vec<u32> = list.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec![1, 3, 0, 2]);
    }
}
