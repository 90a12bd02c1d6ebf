// Synthetic traffic demo: a crawling vehicle shares the road with a fast
// lane whose cars clear the view in about two seconds. The crawler dwells
// past the congestion threshold and gets flagged; fast cars expire first.
//
// Run with: cargo run --example synthetic -- --frames 150 --fps 10

use anyhow::Result;
use clap::Parser;
use log::info;

use jammeter::error::Error;
use jammeter::{
    CongestionMeter, Detection, Detector, Frame, MeterConfig, Track, TrackId, Tracking,
};

#[derive(Parser)]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 150)]
    frames: usize,

    /// Synthetic frame rate
    #[arg(long, default_value_t = 10.0)]
    fps: f64,
}

/// Emits two lanes of boxes: a crawler at 4 px/s and a fast lane crossing
/// the full frame height every two seconds.
struct SyntheticDetector;

impl Detector for SyntheticDetector {
    fn detect(&mut self, frame: &Frame<'_>) -> Result<Vec<Detection>, Error> {
        let t = frame.timestamp;
        let height = frame.height() as f64;

        let crawler_y = (80.0 + 4.0 * t) as f32;
        let fast_y = ((t % 2.0) / 2.0 * height) as f32;

        Ok(vec![
            Detection::new(100.0, crawler_y - 20.0, 160.0, crawler_y + 20.0, 0.9, 2),
            Detection::new(300.0, fast_y - 20.0, 360.0, fast_y + 20.0, 0.8, 7),
        ])
    }
}

struct Held {
    id: TrackId,
    cx: f32,
    cy: f32,
    hits: u32,
    misses: u32,
}

/// Minimal nearest-neighbor tracker: matches by center distance, confirms
/// after two hits, expires after three consecutive misses and reports the
/// expired identities so the meter can purge its state.
struct NearestTracker {
    held: Vec<Held>,
    expired: Vec<TrackId>,
    next_id: u32,
    gate: f32,
}

impl NearestTracker {
    fn new() -> Self {
        Self {
            held: Vec::new(),
            expired: Vec::new(),
            next_id: 1,
            gate: 60.0,
        }
    }
}

impl Tracking for NearestTracker {
    fn update(
        &mut self,
        _frame: &Frame<'_>,
        detections: &[Detection],
    ) -> Result<Vec<Track>, Error> {
        let mut matched = vec![false; detections.len()];

        for held in &mut self.held {
            let nearest = detections
                .iter()
                .enumerate()
                .filter(|(i, _)| !matched[*i])
                .map(|(i, d)| {
                    let b = d.bbox();
                    let dx = b.center_x() - held.cx;
                    let dy = b.center_y() - held.cy;
                    (i, (dx * dx + dy * dy).sqrt())
                })
                .min_by(|a, b| a.1.total_cmp(&b.1));

            match nearest {
                Some((i, dist)) if dist < self.gate => {
                    matched[i] = true;
                    let b = detections[i].bbox();
                    held.cx = b.center_x();
                    held.cy = b.center_y();
                    held.hits += 1;
                    held.misses = 0;
                }
                _ => held.misses += 1,
            }
        }

        for (i, d) in detections.iter().enumerate() {
            if !matched[i] {
                let b = d.bbox();
                self.held.push(Held {
                    id: TrackId(self.next_id),
                    cx: b.center_x(),
                    cy: b.center_y(),
                    hits: 1,
                    misses: 0,
                });
                self.next_id += 1;
            }
        }

        let expired = &mut self.expired;
        self.held.retain(|h| {
            if h.misses >= 3 {
                expired.push(h.id);
                false
            } else {
                true
            }
        });

        Ok(self
            .held
            .iter()
            .filter(|h| h.misses == 0)
            .map(|h| {
                let half = 20.0;
                Track::new(
                    h.id,
                    jammeter::bbox::BBox::ltrb(h.cx - 30.0, h.cy - half, h.cx + 30.0, h.cy + half),
                    h.hits >= 2,
                )
            })
            .collect())
    }

    fn expired(&mut self) -> Vec<TrackId> {
        std::mem::take(&mut self.expired)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut meter = CongestionMeter::new(
        MeterConfig::default(),
        SyntheticDetector,
        NearestTracker::new(),
    );

    let mut peak = 0.0f64;
    for i in 0..cli.frames {
        let t = i as f64 / cli.fps;
        let report = meter.process_frame(&Frame::new(&[], (640, 480), t))?;

        info!(
            "t={:6.2}s {} ({} tracked, {} congested)",
            t,
            report.banner().text,
            report.total_tracked,
            report.congested_count
        );
        for draw in report.draw_boxes() {
            info!("  [{}] at y={:.0}", draw.label, draw.bbox.center_y());
        }

        peak = peak.max(report.density);
    }

    println!("peak congestion density over {} frames: {}%", cli.frames, peak);
    Ok(())
}
