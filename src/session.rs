//! The instrumented sort session.
//!
//! A [`Session`] owns the data to sort and a [`Sorter`]. Calling
//! [`Session::compute`] times exactly one run of the sorter while it reports
//! element accesses and comparisons to the session's [`Probe`].

use crate::error::{Result, SortWatchError};
use crate::probe::Probe;
use crate::results::SortResults;
use crate::Sorter;
use std::time::{Duration, Instant};

/// Start and end of the single timed run.
#[derive(Clone, Copy, Debug)]
struct Timing {
    start: Instant,
    end: Instant,
}

/// Wraps one sorting run: data, label, counters and timing.
pub struct Session<T, S> {
    sorter: S,
    data: Vec<T>,
    name: String,
    probe: Probe,
    timing: Option<Timing>,
}

impl<T, S: Sorter<T>> Session<T, S> {
    /// Create a session labelled with the sorter's default name.
    ///
    /// Counters start at zero and no timing is taken until [`compute`](Self::compute).
    pub fn new(sorter: S, data: Vec<T>) -> Self {
        let name = sorter.name().to_string();
        Self {
            sorter,
            data,
            name,
            probe: Probe::new(),
            timing: None,
        }
    }

    /// Builder-style label override.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Run the sorter once, timed, and return the data as it left it.
    ///
    /// A session runs only once: a second call fails with
    /// [`SortWatchError::AlreadyComputed`] and changes nothing.
    pub fn compute(&mut self) -> Result<&[T]> {
        if self.timing.is_some() {
            log::warn!("[Session] '{}' already computed, ignoring rerun", self.name);
            return Err(SortWatchError::AlreadyComputed);
        }

        log::debug!("[Session] '{}' sorting {} elements", self.name, self.data.len());

        let start = Instant::now();
        self.sorter.sort(&mut self.data, &mut self.probe);
        let end = Instant::now();
        self.timing = Some(Timing { start, end });

        log::debug!(
            "[Session] '{}' done in {:?}: {} accesses, {} comparisons",
            self.name,
            end.duration_since(start),
            self.probe.accesses(),
            self.probe.comparisons()
        );

        Ok(&self.data)
    }
}

impl<T, S> Session<T, S> {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `n` element reads from outside the sorter. Non-positive values are ignored.
    pub fn record_access(&mut self, n: i64) {
        self.probe.record_access(n);
    }

    pub fn record_comparison(&mut self) {
        self.probe.record_comparison();
    }

    pub fn access_count(&self) -> u64 {
        self.probe.accesses()
    }

    pub fn comparison_count(&self) -> u64 {
        self.probe.comparisons()
    }

    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    pub fn is_computed(&self) -> bool {
        self.timing.is_some()
    }

    /// Wall time of the timed run.
    pub fn duration(&self) -> Result<Duration> {
        self.timing
            .map(|t| t.end.duration_since(t.start))
            .ok_or(SortWatchError::NotComputed)
    }

    /// Collect name, duration and counters into one exportable record.
    pub fn results(&self) -> Result<SortResults> {
        let duration = self.duration()?;
        Ok(SortResults {
            name: self.name.clone(),
            duration_seconds: duration.as_secs_f64(),
            access_count: self.probe.accesses(),
            comparison_count: self.probe.comparisons(),
        })
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T: std::fmt::Debug, S> std::fmt::Debug for Session<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("data", &self.data)
            .field("probe", &self.probe)
            .field("computed", &self.is_computed())
            .finish()
    }
}
