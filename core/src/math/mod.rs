pub mod blend;
pub mod stats;
pub mod vec2;

pub use stats::StatsHelper;
pub use vec2::Vec2;
