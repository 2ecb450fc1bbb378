//! Bounded log of inventory operations with lifetime per-operation counters.

use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub at: DateTime<Utc>,
    pub operation: &'static str,
    pub elapsed_us: u64,
    /// Inventory size once the operation finished.
    pub items_after: usize,
    pub ok: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub calls: u64,
    pub failures: u64,
}

/// Keeps the most recent `capacity` records; older ones fall off the front.
/// The counters are not affected by eviction.
#[derive(Debug)]
pub struct OperationLog {
    capacity: usize,
    records: VecDeque<OperationRecord>,
    counts: BTreeMap<&'static str, OperationCounts>,
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl OperationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
            counts: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&mut self, operation: &'static str, elapsed: Duration, items_after: usize, ok: bool) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(OperationRecord {
            at: Utc::now(),
            operation,
            elapsed_us: elapsed.as_micros() as u64,
            items_after,
            ok,
        });

        let counts = self.counts.entry(operation).or_default();
        counts.calls += 1;
        if !ok {
            counts.failures += 1;
        }
    }

    pub fn counts(&self) -> &BTreeMap<&'static str, OperationCounts> {
        &self.counts
    }

    pub fn records(&self) -> impl Iterator<Item = &OperationRecord> {
        self.records.iter()
    }

    /// Forgets records and counters; returns how many records were held.
    pub fn clear(&mut self) -> usize {
        let held = self.records.len();
        self.records.clear();
        self.counts.clear();
        held
    }

    /// Retained records as CSV, oldest first.
    pub fn to_csv(&self) -> anyhow::Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for record in &self.records {
            wtr.serialize(record)?;
        }
        let bytes = wtr.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}
