pub mod generator;
pub mod trace;
