use log::{debug, trace};

use crate::congestion::{self, Annotation, FrameReport};
use crate::detection::admit_vehicles;
use crate::error::Error;
use crate::history::HistoryStore;
use crate::motion::{Eligibility, MotionClassifier};
use crate::{Detector, Frame, MeterConfig, Tracking};

/// Stateful engine driving one video stream frame by frame: detections are
/// admitted, tracked, recorded into per-track history and classified, then
/// aggregated into the frame report. Owns all per-identity state, so
/// independent streams run as independent instances.
pub struct CongestionMeter<D, T> {
    config: MeterConfig,
    detector: D,
    tracker: T,
    history: HistoryStore,
    motion: MotionClassifier,
}

impl<D: Detector, T: Tracking> CongestionMeter<D, T> {
    pub fn new(config: MeterConfig, detector: D, tracker: T) -> Self {
        let history = HistoryStore::new(config.y_history_length);
        let motion = MotionClassifier::new(config.congestion_time_sec);

        Self {
            config,
            detector,
            tracker,
            history,
            motion,
        }
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Runs one frame through the whole chain and returns the frame-level
    /// report. Collaborator failures and contract violations propagate;
    /// there is no retry.
    pub fn process_frame(&mut self, frame: &Frame<'_>) -> Result<FrameReport, Error> {
        let detections = self.detector.detect(frame)?;
        let vehicles = admit_vehicles(detections, &self.config);
        trace!("{} vehicle detections admitted", vehicles.len());

        let tracks = self.tracker.update(frame, &vehicles)?;

        for id in self.tracker.expired() {
            self.history.remove(id);
            self.motion.remove(id);
            debug!("track {}: expired, per-identity state purged", id);
        }

        let mut annotations = Vec::new();
        for track in &tracks {
            if !track.confirmed {
                continue;
            }

            let bbox = track.bbox.clone().ok_or(Error::MissingBox(track.id))?;
            self.history.record(track.id, bbox.center_y());

            match self.motion.classify(track.id, &self.history, frame.timestamp) {
                Eligibility::ShortHistory => {
                    trace!("track {}: history still warming up", track.id)
                }
                Eligibility::NoForwardMotion => {
                    trace!("track {}: no forward motion this frame", track.id)
                }
                Eligibility::Eligible { duration_sec } => annotations.push(Annotation {
                    id: track.id,
                    bbox,
                    duration_sec,
                    congested: self.motion.congested(duration_sec),
                }),
            }
        }

        Ok(congestion::aggregate(annotations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;
    use crate::track::{Track, TrackId};
    use crate::Detection;

    struct StaticDetector {
        detections: Vec<Detection>,
    }

    impl Detector for StaticDetector {
        fn detect(&mut self, _frame: &Frame<'_>) -> Result<Vec<Detection>, Error> {
            Ok(self.detections.clone())
        }
    }

    /// Replays a scripted list of per-frame track sets.
    struct ScriptTracker {
        frames: Vec<Vec<Track>>,
        cursor: usize,
    }

    impl Tracking for ScriptTracker {
        fn update(
            &mut self,
            _frame: &Frame<'_>,
            _detections: &[Detection],
        ) -> Result<Vec<Track>, Error> {
            let tracks = self.frames[self.cursor].clone();
            self.cursor += 1;
            Ok(tracks)
        }
    }

    fn track_at(id: u32, center_y: f32) -> Track {
        Track::new(
            TrackId(id),
            BBox::ltrb(0.0, center_y - 10.0, 20.0, center_y + 10.0),
            true,
        )
    }

    #[test]
    fn unconfirmed_tracks_leave_no_state_behind() {
        let mut track = track_at(1, 100.0);
        track.confirmed = false;

        let mut meter = CongestionMeter::new(
            MeterConfig::default(),
            StaticDetector { detections: vec![] },
            ScriptTracker {
                frames: vec![vec![track]],
                cursor: 0,
            },
        );

        let report = meter
            .process_frame(&Frame::new(&[], (640, 480), 0.0))
            .unwrap();
        assert_eq!(report.total_tracked, 0);
        assert!(meter.history.history(TrackId(1)).is_empty());
    }

    #[test]
    fn confirmed_track_without_box_fails_fast() {
        let broken = Track {
            id: TrackId(4),
            bbox: None,
            confirmed: true,
        };

        let mut meter = CongestionMeter::new(
            MeterConfig::default(),
            StaticDetector { detections: vec![] },
            ScriptTracker {
                frames: vec![vec![broken]],
                cursor: 0,
            },
        );

        let err = meter
            .process_frame(&Frame::new(&[], (640, 480), 0.0))
            .unwrap_err();
        assert!(matches!(err, Error::MissingBox(TrackId(4))));
    }

    #[test]
    fn expired_identity_restarts_from_scratch() {
        struct ExpiringTracker {
            frames: Vec<Vec<Track>>,
            cursor: usize,
            expire_at: usize,
        }

        impl Tracking for ExpiringTracker {
            fn update(
                &mut self,
                _frame: &Frame<'_>,
                _detections: &[Detection],
            ) -> Result<Vec<Track>, Error> {
                let tracks = self.frames[self.cursor].clone();
                self.cursor += 1;
                Ok(tracks)
            }

            fn expired(&mut self) -> Vec<TrackId> {
                if self.cursor == self.expire_at {
                    vec![TrackId(1)]
                } else {
                    Vec::new()
                }
            }
        }

        // five forward frames make the track eligible; on the sixth the
        // tracker ages the identity out and re-issues the same numeric id
        let mut frames: Vec<Vec<Track>> = (0..5)
            .map(|i| vec![track_at(1, 100.0 + 2.0 * i as f32)])
            .collect();
        frames.push(vec![track_at(1, 200.0)]);

        let mut meter = CongestionMeter::new(
            MeterConfig::default(),
            StaticDetector { detections: vec![] },
            ExpiringTracker {
                frames,
                cursor: 0,
                expire_at: 6,
            },
        );

        for i in 0..5 {
            let report = meter
                .process_frame(&Frame::new(&[], (640, 480), i as f64 * 0.1))
                .unwrap();
            assert_eq!(report.total_tracked, if i < 4 { 0 } else { 1 });
        }

        // recycled identity: single fresh sample, back to warmup
        let report = meter
            .process_frame(&Frame::new(&[], (640, 480), 0.5))
            .unwrap();
        assert_eq!(report.total_tracked, 0);
        assert_eq!(meter.history.history(TrackId(1)), vec![200.0]);
    }
}
