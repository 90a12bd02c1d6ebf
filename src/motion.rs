use std::collections::HashMap;

use log::debug;

use crate::history::HistoryStore;
use crate::track::TrackId;

/// Outcome of classifying one confirmed track for one frame. Exclusions
/// are explicit so callers can tell WHY a track stayed out of aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eligibility {
    /// Fewer samples than the direction window; the track does not
    /// participate in aggregation yet.
    ShortHistory,
    /// Net vertical displacement over the window is zero or negative.
    /// An already-running dwell timer is left untouched.
    NoForwardMotion,
    /// Moving forward; dwell timing is running.
    Eligible { duration_sec: f64 },
}

/// Decides, from a track's position history, whether it is in motion worth
/// timing and how long it has dwelled since the timer started.
#[derive(Debug)]
pub struct MotionClassifier {
    congestion_time_sec: f64,
    start_times: HashMap<TrackId, f64>,
}

impl MotionClassifier {
    pub fn new(congestion_time_sec: f64) -> Self {
        Self {
            congestion_time_sec,
            start_times: HashMap::new(),
        }
    }

    /// Classifies `id` against its recorded history at wall-clock `now_sec`.
    /// Call after the current frame's center has been recorded.
    ///
    /// The timer is sticky: it starts on the first full-window frame with
    /// positive net displacement and survives later frames where the
    /// displacement drops to zero or below.
    pub fn classify(&mut self, id: TrackId, history: &HistoryStore, now_sec: f64) -> Eligibility {
        let delta_y = match history.get(id) {
            Some(entry) if entry.is_full() => match (entry.first(), entry.last()) {
                (Some(first), Some(last)) => last - first,
                _ => return Eligibility::ShortHistory,
            },
            _ => return Eligibility::ShortHistory,
        };

        if delta_y <= 0.0 {
            return Eligibility::NoForwardMotion;
        }

        let start = *self.start_times.entry(id).or_insert_with(|| {
            debug!("track {}: forward motion confirmed, dwell timer started", id);
            now_sec
        });

        Eligibility::Eligible {
            duration_sec: now_sec - start,
        }
    }

    /// Dwell duration at or past the threshold counts as congested.
    #[inline]
    pub fn congested(&self, duration_sec: f64) -> bool {
        duration_sec >= self.congestion_time_sec
    }

    pub fn remove(&mut self, id: TrackId) {
        self.start_times.remove(&id);
    }

    #[cfg(test)]
    fn start_time(&self, id: TrackId) -> Option<f64> {
        self.start_times.get(&id).copied()
    }
}
