pub mod config;
pub mod error;
pub mod log;
pub mod monitor;
pub mod pattern;
pub mod plan;
pub mod rect;
pub mod wait;
pub mod window;

pub use config::{Config, PlacementRule};
pub use error::{Error, Result};
pub use monitor::Monitor;
pub use plan::{Placement, PlannedWindow};
pub use rect::Rect;
pub use window::{WindowRecord, WindowSource};
