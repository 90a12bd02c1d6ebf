pub mod bbox;
pub mod config;
pub mod congestion;
pub mod detection;
pub mod error;
pub mod frame;
pub mod history;
pub mod motion;
pub mod overlay;
pub mod pipeline;
pub mod track;

pub use config::MeterConfig;
pub use congestion::{Annotation, FrameReport};
pub use detection::Detection;
pub use frame::Frame;
pub use pipeline::CongestionMeter;
pub use track::{Track, TrackId};

use error::Error;

/// Object detector collaborator: turns a raw frame into scored, classed
/// boxes. Implementations wrap their own failures via [`Error::detector`].
pub trait Detector {
    fn detect(&mut self, frame: &Frame<'_>) -> Result<Vec<Detection>, Error>;
}

/// Identity-association tracker collaborator: turns per-frame detections
/// into stable track identities with smoothed boxes.
pub trait Tracking {
    fn update(&mut self, frame: &Frame<'_>, detections: &[Detection])
        -> Result<Vec<Track>, Error>;

    /// Identities aged out since the previous update. The pipeline purges
    /// all per-identity state for each reported id. Trackers without expiry
    /// support may keep the default.
    fn expired(&mut self) -> Vec<TrackId> {
        Vec::new()
    }
}
