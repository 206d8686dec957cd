pub mod smoothing;
pub mod weight;

pub use smoothing::SmoothingStage;
