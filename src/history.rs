use std::collections::{HashMap, VecDeque};

use log::trace;

use crate::track::TrackId;

/// Bounded ring of vertical center samples for one identity. Oldest sample
/// is evicted once capacity is exceeded; reads run oldest-first.
#[derive(Debug, Clone)]
pub struct YHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl YHistory {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, sample: f32) -> Option<f32> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };

        self.samples.push_back(sample);

        evicted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Oldest sample in the window.
    #[inline]
    pub fn first(&self) -> Option<f32> {
        self.samples.front().copied()
    }

    /// Most recent sample.
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Samples oldest-first, arrival order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }
}

/// Per-identity store of vertical center positions. Entries are created on
/// first write and removed only through the tracker's expiry hook.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    entries: HashMap<TrackId, YHistory>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    /// Appends a sample for `id`, creating the entry on first sighting.
    pub fn record(&mut self, id: TrackId, center_y: f32) {
        let capacity = self.capacity;
        let entry = self
            .entries
            .entry(id)
            .or_insert_with(|| YHistory::with_capacity(capacity));

        entry.push(center_y);
        trace!("track {}: recorded center_y {} ({} samples)", id, center_y, entry.len());
    }

    #[inline]
    pub fn get(&self, id: TrackId) -> Option<&YHistory> {
        self.entries.get(&id)
    }

    /// Samples for `id`, oldest-first; empty for an identity never seen.
    pub fn history(&self, id: TrackId) -> Vec<f32> {
        self.entries
            .get(&id)
            .map(|h| h.iter().collect())
            .unwrap_or_default()
    }

    pub fn remove(&mut self, id: TrackId) {
        self.entries.remove(&id);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
