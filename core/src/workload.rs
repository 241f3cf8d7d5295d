//! Access-pattern workloads.
//!
//! Each pattern comes in two forms: a plain function that only mutates the
//! container, and a `time_*` wrapper that runs it under a [`StopWatch`] and
//! returns the elapsed time. The scans are deliberately naive (front to back,
//! one step at a time) so that the measured difference between containers is
//! memory layout, not algorithm.

use crate::dataset::random_index;
use crate::sequence::{LinkedSeq, NodeRef, Sequence};
use crate::timer::{Resolution, StopWatch, TimeValue};
use rand::Rng;

/// First position at or after `start` whose element is `>= value`, or the end
/// position.
fn first_not_less<T, S>(container: &S, start: S::Cursor, value: &T) -> S::Cursor
where
    T: Ord,
    S: Sequence<T> + ?Sized,
{
    let mut cursor = start;
    while !container.is_end(cursor) {
        if container.value_at(cursor).is_some_and(|v| v >= value) {
            break;
        }
        cursor = container.advance(cursor);
    }
    cursor
}

/// Inserts each value in sorted position, scanning from the beginning.
pub fn sorted_insertion<T, S>(values: &[T], container: &mut S)
where
    T: Ord + Clone,
    S: Sequence<T> + ?Sized,
{
    for value in values {
        let at = first_not_less(container, container.begin(), value);
        container.insert_before(at, value.clone());
    }
}

/// Sorted insertion that resumes the scan from the previous insertion point
/// whenever the next value is not smaller than the previous one.
///
/// Only valid for the linked list, whose handles survive later insertions.
/// Produces exactly the same contents as [`sorted_insertion`].
pub fn smart_sorted_insertion<T>(values: &[T], list: &mut LinkedSeq<T>)
where
    T: Ord + Clone,
{
    let mut last: Option<(NodeRef, &T)> = None;
    for value in values {
        let start = match last {
            Some((cursor, previous)) if value >= previous => cursor,
            _ => list.cursor_front(),
        };
        let at = first_not_less(&*list, start, value);
        let inserted = list.insert_before(at, value.clone());
        last = Some((inserted, value));
    }
}

/// Inserts each value at position 0.
pub fn front_insertion<T, S>(values: &[T], container: &mut S)
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    for value in values {
        let front = container.begin();
        container.insert_before(front, value.clone());
    }
}

/// Appends each value.
pub fn back_insertion<T, S>(values: &[T], container: &mut S)
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    for value in values {
        container.insert_back(value.clone());
    }
}

/// Erases a uniformly random element, reached by a linear walk from the
/// beginning, until the container is empty. Returns the number of erasures.
pub fn random_erase<T, S, R>(rng: &mut R, container: &mut S) -> usize
where
    S: Sequence<T> + ?Sized,
    R: Rng + ?Sized,
{
    let mut erased = 0;
    while let Some(position) = random_index(rng, container.size()) {
        let mut cursor = container.begin();
        for _ in 0..position {
            cursor = container.advance(cursor);
        }
        if container.erase_at(cursor).is_none() {
            break;
        }
        erased += 1;
    }
    erased
}

pub fn full_sort<T, S>(container: &mut S)
where
    T: Ord,
    S: Sequence<T> + ?Sized,
{
    container.sort_all();
}

pub fn time_sorted_insertion<T, S>(
    values: &[T],
    container: &mut S,
    resolution: Resolution,
) -> TimeValue
where
    T: Ord + Clone,
    S: Sequence<T> + ?Sized,
{
    let watch = StopWatch::start();
    sorted_insertion(values, container);
    watch.elapsed_in(resolution)
}

pub fn time_smart_sorted_insertion<T>(
    values: &[T],
    list: &mut LinkedSeq<T>,
    resolution: Resolution,
) -> TimeValue
where
    T: Ord + Clone,
{
    let watch = StopWatch::start();
    smart_sorted_insertion(values, list);
    watch.elapsed_in(resolution)
}

pub fn time_front_insertion<T, S>(
    values: &[T],
    container: &mut S,
    resolution: Resolution,
) -> TimeValue
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    let watch = StopWatch::start();
    front_insertion(values, container);
    watch.elapsed_in(resolution)
}

pub fn time_back_insertion<T, S>(
    values: &[T],
    container: &mut S,
    resolution: Resolution,
) -> TimeValue
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    let watch = StopWatch::start();
    back_insertion(values, container);
    watch.elapsed_in(resolution)
}

pub fn time_random_erase<T, S, R>(
    rng: &mut R,
    container: &mut S,
    resolution: Resolution,
) -> TimeValue
where
    S: Sequence<T> + ?Sized,
    R: Rng + ?Sized,
{
    let watch = StopWatch::start();
    random_erase(rng, container);
    watch.elapsed_in(resolution)
}

pub fn time_full_sort<T, S>(container: &mut S, resolution: Resolution) -> TimeValue
where
    T: Ord,
    S: Sequence<T> + ?Sized,
{
    let watch = StopWatch::start();
    full_sort(container);
    watch.elapsed_in(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{SeedSource, random_dataset};
    use crate::record::Record;
    use std::collections::VecDeque;

    fn sorted(values: &[u32]) -> Vec<u32> {
        let mut v = values.to_vec();
        v.sort();
        v
    }

    #[test]
    fn sorted_insertion_into_list_sorts_with_duplicates() {
        let mut list = LinkedSeq::new();
        sorted_insertion(&[5, 3, 5, 1], &mut list);
        assert_eq!(list.contents(), vec![1, 3, 5, 5]);
    }

    #[test]
    fn back_insertion_into_vector_keeps_input_order() {
        let mut vector = Vec::new();
        back_insertion(&[5, 3, 5, 1], &mut vector);
        assert_eq!(vector, vec![5, 3, 5, 1]);
    }

    #[test]
    fn front_insertion_reverses_input() {
        let mut list = LinkedSeq::new();
        front_insertion(&[1, 2, 3], &mut list);
        assert_eq!(list.contents(), vec![3, 2, 1]);

        let mut vector = Vec::new();
        front_insertion(&[1, 2, 3], &mut vector);
        assert_eq!(vector, vec![3, 2, 1]);
    }

    #[test]
    fn sorted_insertion_agrees_across_containers() {
        let mut rng = SeedSource::Fixed(11).rng();
        let values = random_dataset(&mut rng, 500);
        let expected = sorted(&values);

        let mut list = LinkedSeq::new();
        let mut vector = Vec::new();
        let mut deque = VecDeque::new();
        sorted_insertion(&values, &mut list);
        sorted_insertion(&values, &mut vector);
        sorted_insertion(&values, &mut deque);

        assert_eq!(list.contents(), expected);
        assert_eq!(vector, expected);
        assert_eq!(deque.contents(), expected);
    }

    #[test]
    fn smart_insertion_matches_plain_insertion() {
        let mut rng = SeedSource::Fixed(12).rng();
        for n in [0usize, 1, 2, 10, 300] {
            let values = random_dataset(&mut rng, n);
            let mut plain = LinkedSeq::new();
            let mut smart = LinkedSeq::new();
            sorted_insertion(&values, &mut plain);
            smart_sorted_insertion(&values, &mut smart);
            assert_eq!(smart, plain, "n = {n}");
        }
    }

    #[test]
    fn smart_insertion_handles_runs_and_repeats() {
        let values = [4, 4, 5, 9, 1, 1, 2, 9, 0, 9];
        let mut smart = LinkedSeq::new();
        smart_sorted_insertion(&values, &mut smart);
        assert_eq!(smart.contents(), sorted(&values));
    }

    #[test]
    fn smart_insertion_into_prefilled_list() {
        let mut smart: LinkedSeq<u32> = [2, 6].into_iter().collect();
        let mut plain = smart.clone();
        let values = [7, 1, 3, 3, 8];
        smart_sorted_insertion(&values, &mut smart);
        sorted_insertion(&values, &mut plain);
        assert_eq!(smart, plain);
        assert_eq!(smart.contents(), vec![1, 2, 3, 3, 6, 7, 8]);
    }

    #[test]
    fn random_erase_empties_after_exactly_n_deletions() {
        let mut rng = SeedSource::Fixed(13).rng();
        let values = random_dataset(&mut rng, 200);

        let mut list: LinkedSeq<u32> = values.iter().copied().collect();
        let mut vector = values.clone();
        let mut deque: VecDeque<u32> = values.iter().copied().collect();

        assert_eq!(random_erase(&mut rng, &mut list), 200);
        assert_eq!(random_erase(&mut rng, &mut vector), 200);
        assert_eq!(random_erase(&mut rng, &mut deque), 200);
        assert!(list.is_empty());
        assert!(vector.is_empty());
        assert!(deque.is_empty());
    }

    #[test]
    fn random_erase_on_empty_container_is_a_no_op() {
        let mut rng = SeedSource::Fixed(14).rng();
        let mut vector: Vec<u32> = Vec::new();
        assert_eq!(random_erase(&mut rng, &mut vector), 0);
    }

    #[test]
    fn full_sort_agrees_across_containers() {
        let mut rng = SeedSource::Fixed(15).rng();
        let values = random_dataset(&mut rng, 1_000);
        let expected = sorted(&values);

        let mut list: LinkedSeq<u32> = values.iter().copied().collect();
        let mut vector = values.clone();
        let mut deque: VecDeque<u32> = values.iter().copied().collect();
        full_sort(&mut list);
        full_sort(&mut vector);
        full_sort(&mut deque);

        assert_eq!(list.contents(), expected);
        assert_eq!(vector, expected);
        assert_eq!(deque.contents(), expected);
    }

    #[test]
    fn workloads_accept_records() {
        let values: Vec<Record<16>> = [3u32, 1, 2].into_iter().map(Record::from).collect();
        let mut list = LinkedSeq::new();
        sorted_insertion(&values, &mut list);
        let keys: Vec<u32> = list.iter().map(Record::key).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn empty_dataset_is_a_no_op_for_every_pattern() {
        let mut rng = SeedSource::Fixed(16).rng();
        let mut vector: Vec<u32> = Vec::new();
        let mut list: LinkedSeq<u32> = LinkedSeq::new();
        let none: [u32; 0] = [];
        time_sorted_insertion(&none, &mut vector, Resolution::Micros);
        time_smart_sorted_insertion(&none, &mut list, Resolution::Micros);
        time_front_insertion(&none, &mut list, Resolution::Micros);
        time_back_insertion(&none, &mut vector, Resolution::Micros);
        time_random_erase(&mut rng, &mut vector, Resolution::Micros);
        time_full_sort(&mut list, Resolution::Micros);
        assert!(vector.is_empty());
        assert!(list.is_empty());
    }
}
