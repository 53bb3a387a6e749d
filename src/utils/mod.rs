//! Console helpers

pub mod logging;
pub mod styling;

pub use logging::*;
pub use styling::*;
