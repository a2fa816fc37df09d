//! Access and comparison counters handed to a sorting routine.

use std::cmp::Ordering;

/// The counter pair a [`Sorter`](crate::Sorter) reports into while it runs.
///
/// Both counters start at zero and only ever grow. They saturate at
/// `u64::MAX` rather than wrapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Probe {
    accesses: u64,
    comparisons: u64,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` element reads. Non-positive values are ignored.
    #[inline]
    pub fn record_access(&mut self, n: i64) {
        if n > 0 {
            self.accesses = self.accesses.saturating_add(n as u64);
        }
    }

    /// Add exactly one comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    /// Read `data[index]`, counting one access.
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    #[inline]
    pub fn read<'a, T>(&mut self, data: &'a [T], index: usize) -> &'a T {
        self.record_access(1);
        &data[index]
    }

    /// Compare two elements, counting one comparison.
    #[inline]
    pub fn compare<T: Ord + ?Sized>(&mut self, a: &T, b: &T) -> Ordering {
        self.record_comparison();
        a.cmp(b)
    }

    /// `a < b`, counting one comparison.
    #[inline]
    pub fn less<T: Ord + ?Sized>(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}
