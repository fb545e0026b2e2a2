//! Percolation on an n-by-n grid of sites.
//!
//! A site is either blocked or open; an open site is full when it connects
//! to the top row through a chain of orthogonally adjacent open sites. The
//! system percolates when some bottom-row site is full.
//!
//! Connectivity is tracked with two `WeightedUnionFind` structures. One has
//! virtual top and bottom sites and answers the percolation query. The
//! second has only the virtual top and answers fullness queries; without it,
//! once the system percolates every open bottom-row site would leak
//! fullness upward through the virtual bottom (the backwash artifact).
//!
//! `PercolationStats` estimates the percolation threshold by Monte Carlo
//! simulation: open uniformly random blocked sites until the system
//! percolates and record the fraction of open sites.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::union_find::WeightedUnionFind;

/// An n-by-n grid of blocked and open sites. Rows and columns are 0-based.
#[derive(Clone, Debug)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    /// Sites plus virtual top and bottom; answers `percolates`.
    percolation_uf: WeightedUnionFind,
    /// Sites plus virtual top only; answers `is_full` without backwash.
    fullness_uf: WeightedUnionFind,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "grid dimension must be positive");
        let sites = n * n;
        Percolation {
            n,
            open: vec![false; sites],
            open_count: 0,
            percolation_uf: WeightedUnionFind::new(sites + 2),
            fullness_uf: WeightedUnionFind::new(sites + 1),
        }
    }

    /// Returns the grid dimension.
    pub fn dimension(&self) -> usize {
        self.n
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.n && col < self.n,
            "site ({row}, {col}) outside a {n}x{n} grid",
            n = self.n
        );
        row * self.n + col
    }

    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Opens the site at `(row, col)`. Opening an already open site is a
    /// no-op.
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn open(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        if self.open[index] {
            return;
        }
        self.open[index] = true;
        self.open_count += 1;

        if row == 0 {
            self.percolation_uf.union(index, self.virtual_top());
            self.fullness_uf.union(index, self.virtual_top());
        }
        if row == self.n - 1 {
            self.percolation_uf.union(index, self.virtual_bottom());
        }

        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbors {
            if r < self.n && c < self.n && self.open[r * self.n + c] {
                let other = r * self.n + c;
                self.percolation_uf.union(index, other);
                self.fullness_uf.union(index, other);
            }
        }
    }

    /// Is the site at `(row, col)` open?
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[self.index(row, col)]
    }

    /// Is the site at `(row, col)` connected to the top row through open
    /// sites?
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn is_full(&self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        self.fullness_uf.connected(index, self.virtual_top())
    }

    /// Number of open sites.
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Does any bottom-row site connect to the top row?
    pub fn percolates(&self) -> bool {
        self.percolation_uf
            .connected(self.virtual_top(), self.virtual_bottom())
    }
}

/// Monte Carlo estimate of the percolation threshold.
///
/// Runs `trials` independent experiments on an n-by-n grid. Each experiment
/// opens uniformly random blocked sites until the system percolates and
/// records the fraction of sites open at that moment.
///
/// # Examples
/// ```
/// use algolab::percolation::PercolationStats;
///
/// let stats = PercolationStats::with_seed(10, 30, 42);
/// assert!(stats.mean() > 0.4 && stats.mean() < 0.8);
/// assert!(stats.confidence_low() < stats.confidence_high());
/// ```
#[derive(Clone, Debug)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
    confidence_low: f64,
    confidence_high: f64,
}

impl PercolationStats {
    /// Runs `trials` experiments with an entropy-seeded generator.
    ///
    /// # Panics
    /// Panics if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize) -> Self {
        Self::run(n, trials, SmallRng::from_entropy())
    }

    /// Runs `trials` experiments with a fixed seed. The same seed always
    /// reproduces the same thresholds.
    ///
    /// # Panics
    /// Panics if `n` or `trials` is zero.
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Self {
        Self::run(n, trials, SmallRng::seed_from_u64(seed))
    }

    fn run(n: usize, trials: usize, mut rng: SmallRng) -> Self {
        assert!(n > 0, "grid dimension must be positive");
        assert!(trials > 0, "at least one trial is required");

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = Self::fill_until_percolation(n, &mut rng);
            debug!(trial, threshold, "trial complete");
            thresholds.push(threshold);
        }

        let count = thresholds.len() as f64;
        let mean = thresholds.iter().sum::<f64>() / count;
        // Sample standard deviation; NaN for a single trial, same as the
        // usual unbiased estimator.
        let stddev = (thresholds
            .iter()
            .map(|threshold| (threshold - mean).powi(2))
            .sum::<f64>()
            / (count - 1.0))
            .sqrt();
        let half_width = 1.96 * stddev / count.sqrt();

        PercolationStats {
            thresholds,
            mean,
            stddev,
            confidence_low: mean - half_width,
            confidence_high: mean + half_width,
        }
    }

    fn fill_until_percolation(n: usize, rng: &mut SmallRng) -> f64 {
        let mut percolation = Percolation::new(n);
        while !percolation.percolates() {
            // Rejection sampling keeps the choice uniform over blocked sites.
            loop {
                let row = rng.gen_range(0..n);
                let col = rng.gen_range(0..n);
                if !percolation.is_open(row, col) {
                    percolation.open(row, col);
                    break;
                }
            }
        }
        percolation.open_sites() as f64 / (n * n) as f64
    }

    /// Number of trials performed.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the recorded thresholds.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_low(&self) -> f64 {
        self.confidence_low
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_high(&self) -> f64 {
        self.confidence_high
    }
}
