//! Weighted quick-union connectivity structure.
//!
//! Union by size keeps every tree depth logarithmic, so `find` is O(log n)
//! without any mutation, which lets connectivity queries take `&self`.

/// A partition of `0..n` into disjoint connected components.
///
/// # Examples
/// ```
/// use algolab::union_find::WeightedUnionFind;
///
/// let mut uf = WeightedUnionFind::new(4);
/// assert_eq!(uf.count(), 4);
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// uf.union(1, 2);
/// assert!(uf.connected(0, 3));
/// assert_eq!(uf.count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedUnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedUnionFind {
    /// Creates `n` singleton components.
    pub fn new(n: usize) -> Self {
        WeightedUnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of components remaining.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the component root of `p`.
    ///
    /// # Panics
    /// Panics if `p` is out of range.
    pub fn find(&self, mut p: usize) -> usize {
        assert!(p < self.parent.len(), "site {p} out of range");
        while p != self.parent[p] {
            p = self.parent[p];
        }
        p
    }

    /// Are `p` and `q` in the same component?
    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the components of `p` and `q`. The smaller tree is attached
    /// under the larger root.
    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_start_disconnected() {
        let uf = WeightedUnionFind::new(5);
        assert_eq!(uf.count(), 5);
        for p in 0..5 {
            for q in 0..5 {
                assert_eq!(uf.connected(p, q), p == q);
            }
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = WeightedUnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);
        assert!(uf.connected(0, 2));
        assert!(uf.connected(5, 4));
        assert!(!uf.connected(2, 4));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn redundant_union_keeps_count() {
        let mut uf = WeightedUnionFind::new(3);
        uf.union(0, 1);
        let before = uf.count();
        uf.union(1, 0);
        assert_eq!(uf.count(), before);
    }

    #[test]
    fn chain_stays_shallow() {
        // Worst-case chain of unions; weighting bounds the tree depth, so a
        // long chain must still resolve roots consistently.
        let mut uf = WeightedUnionFind::new(1024);
        for p in 0..1023 {
            uf.union(p, p + 1);
        }
        assert_eq!(uf.count(), 1);
        assert!(uf.connected(0, 1023));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn find_rejects_out_of_range() {
        WeightedUnionFind::new(2).find(2);
    }
}
