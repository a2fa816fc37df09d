//! Sort Watch
//!
//! Times a sorting routine and counts the element accesses and comparisons
//! it reports, so different algorithms can be measured the same way.
//!
//! Implement [`Sorter`] for an algorithm, hand it to a [`Session`] with the
//! data to sort, then call [`Session::compute`] and read the
//! [`SortResults`].

pub mod error;
pub mod probe;
pub mod results;
pub mod session;
pub mod workload;

pub use error::{Result, SortWatchError};
pub use probe::Probe;
pub use results::{ResultSet, SortResults};
pub use session::Session;
pub use workload::{is_sorted, Shape};

/// Trait for instrumented sorting implementations
pub trait Sorter<T> {
    /// Sort the slice in place, reporting accesses and comparisons to `probe`
    fn sort(&self, data: &mut [T], probe: &mut Probe);

    /// Default label used when a session is created without a name
    fn name(&self) -> &str {
        ""
    }
}

impl<T, S: Sorter<T> + ?Sized> Sorter<T> for &S {
    fn sort(&self, data: &mut [T], probe: &mut Probe) {
        (**self).sort(data, probe)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
pub(crate) mod test_sorters {
    //! Small sorts used to exercise the harness from tests.

    use super::*;

    /// Classic O(n²) bubble sort, counting every read and compare
    pub struct BubbleSorter;

    impl<T: Ord> Sorter<T> for BubbleSorter {
        fn sort(&self, data: &mut [T], probe: &mut Probe) {
            let n = data.len();
            if n <= 1 {
                return;
            }

            for i in 0..n {
                for j in 0..n - 1 - i {
                    probe.record_access(2);
                    if probe.less(&data[j + 1], &data[j]) {
                        data.swap(j, j + 1);
                    }
                }
            }
        }

        fn name(&self) -> &str {
            "bubble"
        }
    }

    /// Insertion sort going through `Probe::read` and `Probe::compare`
    pub struct InsertionSorter;

    impl<T: Ord + Clone> Sorter<T> for InsertionSorter {
        fn sort(&self, data: &mut [T], probe: &mut Probe) {
            for i in 1..data.len() {
                let key = probe.read(data, i).clone();
                let mut j = i;
                while j > 0 && probe.compare(&data[j - 1], &key).is_gt() {
                    data.swap(j, j - 1);
                    j -= 1;
                }
            }
        }

        fn name(&self) -> &str {
            "insertion"
        }
    }

    /// Leaves the data untouched and counts nothing
    pub struct NoopSorter;

    impl<T> Sorter<T> for NoopSorter {
        fn sort(&self, _data: &mut [T], _probe: &mut Probe) {}
    }

    /// Reports a fixed number of accesses and comparisons without sorting
    pub struct FixedCounts {
        pub accesses: i64,
        pub comparisons: u32,
    }

    impl<T> Sorter<T> for FixedCounts {
        fn sort(&self, _data: &mut [T], probe: &mut Probe) {
            probe.record_access(self.accesses);
            for _ in 0..self.comparisons {
                probe.record_comparison();
            }
        }
    }
}
