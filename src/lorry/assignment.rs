//! Partition of brick weights into lorries.

use std::fmt;

use rand::Rng;

/// A complete partition of items into bins.
///
/// Every input weight lives in exactly one bin. Bins may be empty and
/// keep their items in insertion order.
///
/// # Examples
///
/// ```
/// use lorry_balance::lorry::Assignment;
///
/// let a = Assignment::new(vec![vec![3.0, 2.0], vec![4.0], vec![]]);
/// assert_eq!(a.loads(), vec![5.0, 4.0, 0.0]);
/// assert_eq!(a.fitness(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    bins: Vec<Vec<f64>>,
}

impl Assignment {
    /// Wraps explicit bin contents.
    pub fn new(bins: Vec<Vec<f64>>) -> Self {
        Self { bins }
    }

    /// Creates `bin_count` empty bins (at least one).
    pub fn empty(bin_count: usize) -> Self {
        Self {
            bins: vec![Vec::new(); bin_count.max(1)],
        }
    }

    /// Places each weight, in input order, into a uniformly random bin.
    pub fn random<R: Rng>(weights: &[f64], bin_count: usize, rng: &mut R) -> Self {
        let mut assignment = Self::empty(bin_count);
        let n = assignment.bins.len();
        for &w in weights {
            let bin = rng.random_range(0..n);
            assignment.bins[bin].push(w);
        }
        assignment
    }

    /// Bin contents, in bin order.
    pub fn bins(&self) -> &[Vec<f64>] {
        &self.bins
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Number of items across all bins.
    pub fn item_count(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Total weight carried by each bin. Empty bins weigh 0.
    pub fn loads(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.iter().sum()).collect()
    }

    /// Heaviest load minus lightest load. Lower is better.
    pub fn fitness(&self) -> f64 {
        let loads = self.loads();
        if loads.is_empty() {
            return 0.0;
        }
        let max = loads.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = loads.iter().copied().fold(f64::INFINITY, f64::min);
        max - min
    }

    /// Returns a copy with item `index` of bin `from` appended to bin `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from`, `index` or `to` is out of range.
    pub fn with_move(&self, from: usize, index: usize, to: usize) -> Self {
        let mut bins = self.bins.clone();
        let weight = bins[from].remove(index);
        bins[to].push(weight);
        Self { bins }
    }

    /// Every assignment reachable by moving one item to another bin.
    ///
    /// Order: source bin ascending, then items of that bin in order,
    /// then destination bin ascending (source skipped).
    pub fn single_moves(&self) -> impl Iterator<Item = Assignment> + '_ {
        let n = self.bins.len();
        (0..n).flat_map(move |from| {
            (0..self.bins[from].len()).flat_map(move |index| {
                (0..n)
                    .filter(move |&to| to != from)
                    .map(move |to| self.with_move(from, index, to))
            })
        })
    }
}

impl fmt::Display for Assignment {
    /// One `Lorry <n>: <w1>, <w2>, ...` line per bin, 1-indexed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bin) in self.bins.iter().enumerate() {
            let weights: Vec<String> = bin.iter().map(|w| w.to_string()).collect();
            writeln!(f, "Lorry {}: {}", i + 1, weights.join(", "))?;
        }
        Ok(())
    }
}
