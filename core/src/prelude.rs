use serde::{Deserialize, Serialize};

/// Configuration for the pressure-sensitive smoothing stage.
///
/// Weights are blend coefficients given to the incoming raw position, so a
/// weight of `1.0` means no smoothing and `0.0` freezes the cursor at the
/// previous position. All weight fields are clamped into `[0, 1]` by
/// [`SmoothingConfig::normalized`] at configuration time; the blend math never
/// re-clamps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Pressure value where the weight ramp starts.
    pub min_pressure: f32,
    /// Pressure value where the weight ramp ends.
    pub max_pressure: f32,
    /// Blend weight at the low-pressure end of the ramp.
    pub min_weight: f32,
    /// Blend weight at the maximum pressure.
    pub max_weight: f32,
    /// Whether smoothing stays active below the minimum pressure.
    pub base_smoothing: bool,
    /// Whether the weight/pressure relationship is inverted.
    pub reverse_smoothing: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_pressure: 1.0,
            max_pressure: 8191.0,
            min_weight: 1.0,
            max_weight: 0.5,
            base_smoothing: false,
            reverse_smoothing: false,
        }
    }
}

impl SmoothingConfig {
    /// Returns a copy with pressures raised to at least `1.0` and weights
    /// clamped into `[0, 1]`. Applied once when a stage is initialized.
    pub fn normalized(&self) -> Self {
        Self {
            min_pressure: self.min_pressure.max(1.0),
            max_pressure: self.max_pressure.max(1.0),
            min_weight: self.min_weight.clamp(0.0, 1.0),
            max_weight: self.max_weight.clamp(0.0, 1.0),
            base_smoothing: self.base_smoothing,
            reverse_smoothing: self.reverse_smoothing,
        }
    }

    /// Rejects pressure bounds that leave either weight mode with a zero or
    /// negative normalization denominator.
    pub fn validate(&self) -> FilterResult<()> {
        if self.max_pressure <= self.min_pressure {
            return Err(FilterError::InvalidConfig(format!(
                "max pressure {} must exceed min pressure {}",
                self.max_pressure, self.min_pressure
            )));
        }
        Ok(())
    }
}

/// Common error type for stage configuration and execution.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type FilterResult<T> = Result<T, FilterError>;

/// Trait describing per-stream stages of the device-report pipeline.
///
/// A stage owns whatever sequential state it needs; callers must feed each
/// logical device stream through its own stage instance, in arrival order.
pub trait PipelineStage {
    fn initialize(&mut self, config: &SmoothingConfig) -> FilterResult<()>;
    fn process(&mut self, report: DeviceReport) -> FilterResult<DeviceReport>;
    fn reset(&mut self);
}

pub use crate::filter::SmoothingStage;
pub use crate::math::vec2::Vec2;
pub use crate::report::{AuxReport, DeviceReport, TabletReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_values() {
        let config = SmoothingConfig::default();
        assert_eq!(config.min_pressure, 1.0);
        assert_eq!(config.max_pressure, 8191.0);
        assert_eq!(config.min_weight, 1.0);
        assert_eq!(config.max_weight, 0.5);
        assert!(!config.base_smoothing);
        assert!(!config.reverse_smoothing);
    }

    #[test]
    fn normalized_clamps_weights_and_pressures() {
        let config = SmoothingConfig {
            min_pressure: 0.0,
            max_pressure: -5.0,
            min_weight: 1.7,
            max_weight: -0.3,
            base_smoothing: false,
            reverse_smoothing: false,
        }
        .normalized();

        assert_eq!(config.min_pressure, 1.0);
        assert_eq!(config.max_pressure, 1.0);
        assert_eq!(config.min_weight, 1.0);
        assert_eq!(config.max_weight, 0.0);
    }

    #[test]
    fn validate_rejects_degenerate_pressure_range() {
        let config = SmoothingConfig {
            min_pressure: 100.0,
            max_pressure: 100.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidConfig(_)));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn validate_accepts_default_config() {
        assert!(SmoothingConfig::default().validate().is_ok());
    }
}
