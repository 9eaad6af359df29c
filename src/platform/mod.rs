//! Platform detection module
//!
//! Maps the host operating system and CPU architecture onto the normalized
//! names used in `build.json` platform blocks and in packaging decisions.

mod detection;

pub use detection::{Platform, PlatformName};
