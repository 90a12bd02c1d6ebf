use serde_derive::{Deserialize, Serialize};

/// Recognized options of the congestion meter.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeterConfig {
    /// Seconds a track must dwell in forward motion before it is flagged
    /// as congested.
    #[serde(default = "default_congestion_time")]
    pub congestion_time_sec: f64,

    /// Sample window for direction detection; a track is invisible to
    /// aggregation until its history holds this many samples.
    #[serde(default = "default_history_length")]
    pub y_history_length: usize,

    /// Detector confidence floor.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Class ids admitted as vehicles (COCO: car, motorcycle, bus, truck).
    #[serde(default = "default_vehicle_classes")]
    pub vehicle_classes: Vec<i32>,
}

fn default_congestion_time() -> f64 {
    3.0
}

fn default_history_length() -> usize {
    5
}

fn default_min_confidence() -> f32 {
    0.3
}

fn default_vehicle_classes() -> Vec<i32> {
    vec![2, 3, 5, 7]
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            congestion_time_sec: default_congestion_time(),
            y_history_length: default_history_length(),
            min_confidence: default_min_confidence(),
            vehicle_classes: default_vehicle_classes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MeterConfig::default();
        assert_eq!(config.congestion_time_sec, 3.0);
        assert_eq!(config.y_history_length, 5);
        assert_eq!(config.min_confidence, 0.3);
        assert_eq!(config.vehicle_classes, vec![2, 3, 5, 7]);
    }
}
