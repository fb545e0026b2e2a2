//! A generic queue with uniformly random removal.
//!
//! Removal picks a uniformly random element, swaps it with the last slot,
//! and pops, so every operation is O(1) and no slot is ever left dead. The
//! queue owns its random number generator; seeded construction makes whole
//! test runs reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A bag of elements where `dequeue` removes a uniformly random one.
///
/// # Examples
/// ```
/// use algolab::randomized_queue::RandomizedQueue;
///
/// let mut queue = RandomizedQueue::with_seed(7);
/// for value in 0..4 {
///     queue.enqueue(value);
/// }
/// let mut drained: Vec<i32> = Vec::new();
/// while let Some(value) = queue.dequeue() {
///     drained.push(value);
/// }
/// drained.sort_unstable();
/// assert_eq!(drained, vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomizedQueue<T> {
    items: Vec<T>,
    rng: SmallRng,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue with an entropy-seeded generator.
    pub fn new() -> Self {
        RandomizedQueue {
            items: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an empty queue whose random choices are reproducible: the
    /// same seed and operation sequence always dequeues in the same order.
    pub fn with_seed(seed: u64) -> Self {
        RandomizedQueue {
            items: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element to the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns a uniformly random element, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.items.len());
        Some(self.items.swap_remove(index))
    }

    /// Returns a uniformly random element without removing it, or `None`
    /// when empty. Takes `&mut self` because drawing the index advances the
    /// generator.
    pub fn sample(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.items.len());
        self.items.get(index)
    }

    /// Iterates over the elements in a freshly shuffled order. Each call
    /// draws its own independent permutation.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.shuffle(&mut SmallRng::from_entropy());
        Iter {
            queue: self,
            order,
            cursor: 0,
        }
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a `RandomizedQueue` in a random order.
pub struct Iter<'a, T> {
    queue: &'a RandomizedQueue<T>,
    order: Vec<usize>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = *self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(&self.queue.items[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_empty() {
        let mut queue: RandomizedQueue<u8> = RandomizedQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.sample(), None);
    }

    #[test]
    fn dequeue_drains_exactly_the_enqueued_elements() {
        let mut queue = RandomizedQueue::with_seed(11);
        for value in 0..10 {
            queue.enqueue(value);
        }
        let mut drained = Vec::new();
        while let Some(value) = queue.dequeue() {
            drained.push(value);
        }
        assert!(queue.is_empty());
        drained.sort_unstable();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_order() {
        let mut first = RandomizedQueue::with_seed(99);
        let mut second = RandomizedQueue::with_seed(99);
        for value in 0..20 {
            first.enqueue(value);
            second.enqueue(value);
        }
        for _ in 0..20 {
            assert_eq!(first.dequeue(), second.dequeue());
        }
    }

    #[test]
    fn sample_does_not_remove() {
        let mut queue = RandomizedQueue::with_seed(5);
        queue.enqueue("only");
        for _ in 0..10 {
            assert_eq!(queue.sample(), Some(&"only"));
        }
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn iterator_yields_every_element_once() {
        let mut queue = RandomizedQueue::with_seed(3);
        for value in 0..16 {
            queue.enqueue(value);
        }
        let seen: HashSet<i32> = queue.iter().copied().collect();
        assert_eq!(seen.len(), 16);
        assert_eq!(queue.iter().count(), 16);
        // Iterating twice leaves the queue untouched.
        assert_eq!(queue.len(), 16);
    }

    #[test]
    fn dequeue_reaches_every_position() {
        // Across seeds, the first dequeue should pick out different
        // elements; a removal biased to one end would fail this.
        let mut first_picks = HashSet::new();
        for seed in 0..64 {
            let mut queue = RandomizedQueue::with_seed(seed);
            for value in 0..4 {
                queue.enqueue(value);
            }
            first_picks.insert(queue.dequeue().unwrap());
        }
        assert_eq!(first_picks.len(), 4);
    }
}
