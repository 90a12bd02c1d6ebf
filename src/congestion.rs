use crate::bbox::{BBox, Ltrb};
use crate::overlay::{self, Color, DrawBox, DrawText};
use crate::track::TrackId;

/// Classification of one eligible track for one frame.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub id: TrackId,
    pub bbox: BBox<Ltrb>,
    pub duration_sec: f64,
    pub congested: bool,
}

impl Annotation {
    /// Draw instruction for the rendering collaborator.
    pub fn draw(&self) -> DrawBox {
        DrawBox {
            bbox: self.bbox.clone(),
            color: if self.congested {
                Color::SLOW
            } else {
                Color::NORMAL
            },
            label: overlay::track_label(self.id, self.congested),
        }
    }
}

/// Frame-level aggregation result.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Eligible tracks this frame.
    pub total_tracked: usize,
    /// Congested among the eligible.
    pub congested_count: usize,
    /// Percentage in [0, 100], two decimal places; 0 when nothing was
    /// eligible this frame.
    pub density: f64,
    pub annotations: Vec<Annotation>,
}

impl FrameReport {
    pub fn banner(&self) -> DrawText {
        overlay::density_banner(self.density)
    }

    pub fn draw_boxes(&self) -> Vec<DrawBox> {
        self.annotations.iter().map(Annotation::draw).collect()
    }
}

/// Collapses the frame's eligible classifications into the density figure.
pub fn aggregate(annotations: Vec<Annotation>) -> FrameReport {
    let total_tracked = annotations.len();
    let congested_count = annotations.iter().filter(|a| a.congested).count();

    let density = if total_tracked > 0 {
        round2(congested_count as f64 / total_tracked as f64 * 100.0)
    } else {
        0.0
    };

    FrameReport {
        total_tracked,
        congested_count,
        density,
        annotations,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(id: u32, congested: bool) -> Annotation {
        Annotation {
            id: TrackId(id),
            bbox: BBox::ltrb(0.0, 0.0, 10.0, 10.0),
            duration_sec: if congested { 4.0 } else { 1.0 },
            congested,
        }
    }

    #[test]
    fn empty_frame_has_zero_density() {
        let report = aggregate(Vec::new());
        assert_eq!(report.total_tracked, 0);
        assert_eq!(report.congested_count, 0);
        assert_eq!(report.density, 0.0);
        assert!(report.annotations.is_empty());
    }

    #[test]
    fn half_congested_is_fifty() {
        let report = aggregate(vec![annotation(1, true), annotation(2, false)]);
        assert_eq!(report.total_tracked, 2);
        assert_eq!(report.congested_count, 1);
        assert_eq!(report.density, 50.0);
    }

    #[test]
    fn density_rounds_to_two_decimals() {
        let report = aggregate(vec![
            annotation(1, true),
            annotation(2, false),
            annotation(3, false),
        ]);
        assert_eq!(report.density, 33.33);
    }

    #[test]
    fn density_stays_in_bounds() {
        let all = aggregate(vec![annotation(1, true), annotation(2, true)]);
        assert_eq!(all.density, 100.0);

        let none = aggregate(vec![annotation(1, false)]);
        assert_eq!(none.density, 0.0);
    }

    #[test]
    fn annotations_pass_through_untouched() {
        let report = aggregate(vec![annotation(9, true)]);
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].id, TrackId(9));
        assert_eq!(report.annotations[0].duration_sec, 4.0);
    }
}
