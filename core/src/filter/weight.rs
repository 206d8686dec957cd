use crate::math::blend::clamp_unit;
use crate::prelude::SmoothingConfig;

/// Maps a raw pressure reading to the blend weight for the active mode.
///
/// Expects a configuration that already passed [`SmoothingConfig::validate`];
/// only the normalized-pressure ratio is clamped here, never the weights.
pub fn weight_for(pressure: f32, config: &SmoothingConfig) -> f32 {
    if config.reverse_smoothing {
        reversed_weight(pressure, config)
    } else {
        forward_weight(pressure, config)
    }
}

/// Forward mode: the weight ramps from `min_weight` at `min_pressure` to
/// `max_weight` at `max_pressure`. The ramp is rescaled so the whole
/// transition happens inside `[min_pressure, max_pressure]`; below
/// `min_pressure` the sample passes unfiltered unless `base_smoothing` is
/// set.
pub fn forward_weight(pressure: f32, config: &SmoothingConfig) -> f32 {
    let normalized = pressure / config.max_pressure;
    let threshold = config.min_pressure / config.max_pressure;
    let ratio = clamp_unit((normalized - threshold) / (1.0 - threshold));

    if !config.base_smoothing && normalized < threshold {
        return 1.0;
    }

    (1.0 - ratio) * config.min_weight + ratio * config.max_weight
}

/// Reversed mode: the weight ramps from `max_weight` at `min_pressure` down
/// to `min_weight` at `max_pressure`, inverting which pressure extreme gets
/// the most smoothing.
///
/// Unlike forward mode this normalizes over `max_pressure - min_pressure`
/// with no threshold rescale. The asymmetry is inherited from the reference
/// behavior on purpose; do not reconcile the two ramps without checking with
/// the tablet-driver maintainers first.
pub fn reversed_weight(pressure: f32, config: &SmoothingConfig) -> f32 {
    let normalized = (pressure - config.min_pressure) / (config.max_pressure - config.min_pressure);
    let ratio = clamp_unit(normalized);

    if !config.base_smoothing && normalized < 0.0 {
        return 1.0;
    }

    (1.0 - ratio) * config.max_weight + ratio * config.min_weight
}
