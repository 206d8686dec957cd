pub mod device;
pub mod tablet;

pub use device::{AuxReport, DeviceReport};
pub use tablet::TabletReport;
