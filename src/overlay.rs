use crate::bbox::{BBox, Ltrb};
use crate::track::TrackId;

/// RGB color tag the rendering collaborator maps to its own pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Free-flowing track.
    pub const NORMAL: Color = Color(0, 255, 0);
    /// Congested track.
    pub const SLOW: Color = Color(255, 0, 0);
}

/// Box-draw instruction for one annotated track.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBox {
    pub bbox: BBox<Ltrb>,
    pub color: Color,
    pub label: String,
}

/// Frame-level text overlay at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawText {
    pub text: String,
    pub position: (i32, i32),
}

pub const BANNER_POSITION: (i32, i32) = (20, 30);

pub fn track_label(id: TrackId, congested: bool) -> String {
    if congested {
        format!("ID: {} (slow)", id)
    } else {
        format!("ID: {}", id)
    }
}

pub fn density_banner(density: f64) -> DrawText {
    DrawText {
        text: format!("Congestion: {}%", density),
        position: BANNER_POSITION,
    }
}
