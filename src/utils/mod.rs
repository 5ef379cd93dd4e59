//! Utility Module
//!
//! - [`Timer`]: wall-clock time since mount, fed to the frame loop
//! - [`FpsCounter`]: frame rate measurement, logged at debug level

pub mod fps_counter;
pub mod time;

pub use fps_counter::FpsCounter;
pub use time::Timer;
