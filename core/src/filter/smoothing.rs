use crate::filter::weight::weight_for;
use crate::math::blend::lerp;
use crate::prelude::{FilterError, FilterResult, PipelineStage, SmoothingConfig};
use crate::report::{DeviceReport, TabletReport};
use crate::telemetry::log::LogManager;

/// Pressure-sensitive EMA smoothing stage.
///
/// Remembers exactly one prior raw tablet report per stream. Each tablet
/// report is blended against that remembered raw position with a weight
/// derived from its pressure; the raw incoming report is then stored, never
/// the smoothed output. Non-positional reports are routed through untouched.
///
/// One instance serves one logical device stream, fed in arrival order; for
/// concurrent streams give each its own stage.
pub struct SmoothingStage {
    config: Option<SmoothingConfig>,
    last_report: Option<TabletReport>,
    logger: LogManager,
}

impl SmoothingStage {
    pub fn new() -> Self {
        Self {
            config: None,
            last_report: None,
            logger: LogManager::new(),
        }
    }

    /// Builds an initialized stage, rejecting a degenerate configuration up
    /// front.
    pub fn with_config(config: &SmoothingConfig) -> FilterResult<Self> {
        let mut stage = Self::new();
        stage.initialize(config)?;
        Ok(stage)
    }
}

impl Default for SmoothingStage {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStage for SmoothingStage {
    fn initialize(&mut self, config: &SmoothingConfig) -> FilterResult<()> {
        let config = config.normalized();
        config.validate()?;
        self.logger.record(&format!(
            "SmoothingStage configured: pressure {}..{}, weight {}..{}, base {}, reversed {}",
            config.min_pressure,
            config.max_pressure,
            config.min_weight,
            config.max_weight,
            config.base_smoothing,
            config.reverse_smoothing
        ));
        self.last_report = None;
        self.config = Some(config);
        Ok(())
    }

    fn process(&mut self, report: DeviceReport) -> FilterResult<DeviceReport> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| FilterError::Internal("stage not initialized".into()))?;

        let incoming = match report {
            DeviceReport::Tablet(tablet) => tablet,
            other => return Ok(other),
        };

        let position = match &self.last_report {
            Some(previous) => {
                let weight = weight_for(incoming.pressure, config);
                lerp(incoming.position, previous.position, weight)
            }
            // First report of the stream, nothing to blend against.
            None => incoming.position,
        };

        self.last_report = Some(incoming);

        Ok(DeviceReport::Tablet(TabletReport {
            position,
            ..incoming
        }))
    }

    fn reset(&mut self) {
        self.logger.record_debug("SmoothingStage reset");
        self.last_report = None;
        self.config = None;
    }
}
