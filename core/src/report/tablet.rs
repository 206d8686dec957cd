use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// One position-bearing hardware report from the digitizer.
///
/// The smoothing stage rewrites only `position`; pressure, pen buttons, and
/// the timestamp pass through unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TabletReport {
    pub timestamp: f64,
    pub position: Vec2,
    pub pressure: f32,
    pub pen_buttons: u8,
}

impl TabletReport {
    pub fn new(timestamp: f64, position: Vec2, pressure: f32) -> Self {
        Self {
            timestamp,
            position,
            pressure,
            pen_buttons: 0,
        }
    }
}
