use crate::workflow::config::ReplayConfig;
use anyhow::Context;
use styluscore::math::{StatsHelper, Vec2};
use styluscore::prelude::{DeviceReport, PipelineStage, SmoothingStage};
use styluscore::telemetry::MetricsRecorder;

pub struct ReplayResult {
    pub reports: Vec<DeviceReport>,
    pub smoothed_count: usize,
    pub passthrough_count: usize,
    pub raw_jitter: f32,
    pub smoothed_jitter: f32,
    pub pressure_rms: f32,
}

#[derive(Clone)]
pub struct Runner {
    config: ReplayConfig,
}

impl Runner {
    pub fn new(config: ReplayConfig) -> Self {
        Self { config }
    }

    /// Feeds the stream through a fresh smoothing stage in arrival order and
    /// summarizes the effect on path jitter.
    pub fn execute(&self, reports: &[DeviceReport]) -> anyhow::Result<ReplayResult> {
        let mut stage = SmoothingStage::new();
        stage
            .initialize(&self.config.to_smoothing_config())
            .context("initializing smoothing stage")?;

        let metrics = MetricsRecorder::new();
        let mut smoothed = Vec::with_capacity(reports.len());
        for report in reports {
            let output = stage.process(*report).context("processing report")?;
            match output {
                DeviceReport::Tablet(_) => metrics.record_smoothed(),
                _ => metrics.record_passthrough(),
            }
            smoothed.push(output);
        }
        stage.reset();

        let raw_path = tablet_positions(reports);
        let smoothed_path = tablet_positions(&smoothed);
        let pressures: Vec<f32> = reports
            .iter()
            .filter_map(|report| report.as_tablet().map(|tablet| tablet.pressure))
            .collect();
        let (smoothed_count, passthrough_count) = metrics.snapshot();

        Ok(ReplayResult {
            reports: smoothed,
            smoothed_count,
            passthrough_count,
            raw_jitter: StatsHelper::path_jitter(&raw_path),
            smoothed_jitter: StatsHelper::path_jitter(&smoothed_path),
            pressure_rms: StatsHelper::rms(&pressures),
        })
    }
}

fn tablet_positions(reports: &[DeviceReport]) -> Vec<Vec2> {
    reports
        .iter()
        .filter_map(|report| report.as_tablet().map(|tablet| tablet.position))
        .collect()
}
