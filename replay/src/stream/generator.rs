use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use styluscore::prelude::{AuxReport, DeviceReport, TabletReport, Vec2};

/// Configuration for generating a synthetic pen stroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    pub samples: usize,
    /// Base horizontal advance per report.
    pub step: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    /// Uniform positional noise added to each report.
    pub jitter: f32,
    pub peak_pressure: f32,
    pub seed: u64,
    /// Interleave an aux report every N tablet reports (0 = never).
    pub aux_every: usize,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            samples: 512,
            step: 2.0,
            wave_amplitude: 40.0,
            wave_frequency: 2.0,
            jitter: 3.0,
            peak_pressure: 8191.0,
            seed: 0,
            aux_every: 64,
        }
    }
}

/// Builds a wavy stroke with hand-tremor noise and a pressure envelope that
/// ramps up toward mid-stroke and eases off again.
pub fn build_stroke(config: &StrokeConfig) -> anyhow::Result<Vec<DeviceReport>> {
    anyhow::ensure!(config.samples >= 2, "stroke needs at least two samples");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reports = Vec::with_capacity(config.samples);

    for index in 0..config.samples {
        let progress = index as f32 / (config.samples - 1) as f32;
        let base_x = index as f32 * config.step;
        let base_y = (progress * 2.0 * PI * config.wave_frequency).sin() * config.wave_amplitude;
        let jitter_x = rng.gen_range(-config.jitter..=config.jitter);
        let jitter_y = rng.gen_range(-config.jitter..=config.jitter);
        // sin(PI) is a hair below zero in f32; keep the envelope non-negative.
        let pressure = ((progress * PI).sin() * config.peak_pressure).max(0.0);
        let timestamp = index as f64 * 2.0;

        reports.push(DeviceReport::Tablet(TabletReport::new(
            timestamp,
            Vec2::new(base_x + jitter_x, base_y + jitter_y),
            pressure,
        )));

        if config.aux_every > 0 && index > 0 && index % config.aux_every == 0 {
            reports.push(DeviceReport::Aux(AuxReport {
                timestamp,
                aux_buttons: 0b1,
            }));
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic_for_a_seed() {
        let config = StrokeConfig {
            samples: 64,
            seed: 42,
            ..Default::default()
        };
        assert_eq!(build_stroke(&config).unwrap(), build_stroke(&config).unwrap());
    }

    #[test]
    fn generator_interleaves_aux_reports() {
        let config = StrokeConfig {
            samples: 100,
            aux_every: 10,
            ..Default::default()
        };
        let reports = build_stroke(&config).unwrap();
        let aux_count = reports
            .iter()
            .filter(|r| matches!(r, DeviceReport::Aux(_)))
            .count();
        assert_eq!(aux_count, 9);
        assert_eq!(reports.len(), 109);
    }

    #[test]
    fn generator_keeps_pressure_non_negative_and_bounded() {
        let config = StrokeConfig {
            samples: 200,
            ..Default::default()
        };
        for report in build_stroke(&config).unwrap() {
            if let Some(tablet) = report.as_tablet() {
                assert!(tablet.pressure >= 0.0);
                assert!(tablet.pressure <= config.peak_pressure);
            }
        }
    }

    #[test]
    fn generator_rejects_degenerate_sample_count() {
        let config = StrokeConfig {
            samples: 1,
            ..Default::default()
        };
        assert!(build_stroke(&config).is_err());
    }
}
