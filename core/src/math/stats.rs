use crate::math::vec2::Vec2;

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f32).sqrt()
    }

    /// Mean absolute second difference of a path.
    ///
    /// Each interior point is compared against the midpoint of its
    /// neighbors; hand tremor shows up as a large value, a straight or
    /// gently curving stroke as a small one.
    pub fn path_jitter(path: &[Vec2]) -> f32 {
        if path.len() < 3 {
            return 0.0;
        }
        let mut deviation = 0.0;
        for window in path.windows(3) {
            let expected = Vec2::new(
                (window[0].x + window[2].x) / 2.0,
                (window[0].y + window[2].y) / 2.0,
            );
            deviation += window[1].distance(&expected);
        }
        deviation / (path.len() - 2) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn straight_path_has_zero_jitter() {
        let path: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32, 0.0)).collect();
        assert_eq!(StatsHelper::path_jitter(&path), 0.0);
    }

    #[test]
    fn zigzag_path_has_positive_jitter() {
        let path: Vec<Vec2> = (0..10)
            .map(|i| Vec2::new(i as f32, if i % 2 == 0 { 1.0 } else { -1.0 }))
            .collect();
        assert!(StatsHelper::path_jitter(&path) > 0.0);
    }

    #[test]
    fn short_paths_yield_zero() {
        assert_eq!(StatsHelper::path_jitter(&[]), 0.0);
        assert_eq!(
            StatsHelper::path_jitter(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]),
            0.0
        );
    }
}
