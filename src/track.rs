use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};

/// Stable identity assigned by the external tracker to a physical object.
/// Stays constant across frames while the tracker holds the track; a value
/// seen again after expiry is a new identity as far as this crate goes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One tracker output per held identity per frame.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    /// Smoothed corner box. None when the tracker holds the identity but
    /// has no current box estimate; for a confirmed track that is a
    /// contract violation the pipeline fails fast on.
    pub bbox: Option<BBox<Ltrb>>,
    pub confirmed: bool,
}

impl Track {
    pub fn new(id: TrackId, bbox: BBox<Ltrb>, confirmed: bool) -> Self {
        Self {
            id,
            bbox: Some(bbox),
            confirmed,
        }
    }
}
