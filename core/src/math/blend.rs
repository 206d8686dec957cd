use crate::math::vec2::Vec2;

/// Component-wise blend between the current raw position and the previous
/// one: `weight * current + (1 - weight) * previous`.
///
/// The weight applies to the *new* sample, so `1.0` means no smoothing and
/// `0.0` freezes the output at the previous position.
pub fn lerp(current: Vec2, previous: Vec2, weight: f32) -> Vec2 {
    Vec2 {
        x: weight * current.x + (1.0 - weight) * previous.x,
        y: weight * current.y + (1.0 - weight) * previous.y,
    }
}

/// Clamps a normalized ratio into `[0, 1]`.
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_weight_returns_current_exactly() {
        let current = Vec2::new(10.0, -4.0);
        let previous = Vec2::new(2.0, 7.0);
        assert_eq!(lerp(current, previous, 1.0), current);
    }

    #[test]
    fn zero_weight_returns_previous_exactly() {
        let current = Vec2::new(10.0, -4.0);
        let previous = Vec2::new(2.0, 7.0);
        assert_eq!(lerp(current, previous, 0.0), previous);
    }

    #[test]
    fn half_weight_returns_midpoint() {
        let blended = lerp(Vec2::new(100.0, 0.0), Vec2::new(0.0, 0.0), 0.5);
        assert_eq!(blended, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn clamp_unit_bounds_both_ends() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
