use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};
use crate::config::MeterConfig;

/// Contains the corner coordinates of the bbox in pixels (x2 > x1, y2 > y1)
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    #[serde(rename = "p")]
    pub confidence: f32,
    #[serde(rename = "c")]
    pub class: i32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32, class: i32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            confidence,
            class,
        }
    }

    #[inline(always)]
    pub fn bbox(&self) -> BBox<Ltrb> {
        BBox::ltrb(self.x1, self.y1, self.x2, self.y2)
    }

    /// A detection reaches the tracker only when it clears the confidence
    /// floor and its class is on the vehicle allow-list.
    #[inline]
    pub fn is_vehicle(&self, config: &MeterConfig) -> bool {
        self.confidence >= config.min_confidence && config.vehicle_classes.contains(&self.class)
    }
}

/// Drops detections that fail the admission filter, in place of upstream
/// filtering when the detector reports everything it sees.
pub fn admit_vehicles(mut detections: Vec<Detection>, config: &MeterConfig) -> Vec<Detection> {
    detections.retain(|d| d.is_vehicle(config));
    detections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_filter() {
        let config = MeterConfig::default();
        let detections = vec![
            Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, 2),
            // below the confidence floor
            Detection::new(0.0, 0.0, 10.0, 10.0, 0.2, 2),
            // person, not a vehicle class
            Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, 0),
            // exactly at the floor
            Detection::new(0.0, 0.0, 10.0, 10.0, 0.3, 7),
        ];

        let admitted = admit_vehicles(detections, &config);
        assert_eq!(admitted.len(), 2);
        assert_eq!(admitted[0].class, 2);
        assert_eq!(admitted[1].class, 7);
    }
}
