use crate::report::tablet::TabletReport;
use serde::{Deserialize, Serialize};

/// Auxiliary (express-key) report carrying no position or pressure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AuxReport {
    pub timestamp: f64,
    pub aux_buttons: u8,
}

/// A report as delivered by the device driver.
///
/// Only `Tablet` reports carry a position/pressure pair and are candidates
/// for filtering; every other kind is routed through pipeline stages
/// unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DeviceReport {
    Tablet(TabletReport),
    Aux(AuxReport),
    OutOfRange { timestamp: f64 },
}

impl DeviceReport {
    /// Returns the contained tablet report, if this report carries one.
    pub fn as_tablet(&self) -> Option<&TabletReport> {
        match self {
            DeviceReport::Tablet(report) => Some(report),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> f64 {
        match self {
            DeviceReport::Tablet(report) => report.timestamp,
            DeviceReport::Aux(report) => report.timestamp,
            DeviceReport::OutOfRange { timestamp } => *timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    #[test]
    fn as_tablet_extracts_only_tablet_reports() {
        let tablet = DeviceReport::Tablet(TabletReport::new(0.0, Vec2::new(1.0, 2.0), 512.0));
        let aux = DeviceReport::Aux(AuxReport {
            timestamp: 1.0,
            aux_buttons: 0b10,
        });

        assert!(tablet.as_tablet().is_some());
        assert!(aux.as_tablet().is_none());
    }

    #[test]
    fn timestamp_covers_every_report_kind() {
        assert_eq!(DeviceReport::OutOfRange { timestamp: 3.5 }.timestamp(), 3.5);
    }
}
