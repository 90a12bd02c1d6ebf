use thiserror::Error;

use crate::track::TrackId;

type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("detector error: {0}")]
    Detector(#[source] Source),

    #[error("tracker error: {0}")]
    Tracker(#[source] Source),

    /// The tracker reported a confirmed track without a box estimate.
    /// Surfaced instead of substituting defaults so integration bugs show
    /// up at the seam.
    #[error("confirmed track {0} has no bounding box")]
    MissingBox(TrackId),
}

impl Error {
    pub fn detector(err: impl Into<Source>) -> Self {
        Error::Detector(err.into())
    }

    pub fn tracker(err: impl Into<Source>) -> Self {
        Error::Tracker(err.into())
    }
}
