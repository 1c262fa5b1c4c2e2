//! Asset selection module
//!
//! This module picks the wheel to download from a release's asset list and
//! enumerates the platforms a tool is published for.

mod listing;
mod picker;

pub use listing::{available_platforms, wheel_platform};
pub use picker::{AssetPicker, WheelPicker, find_wheel_asset};
