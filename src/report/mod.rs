//! Report module - presenting the composed message

pub mod summary;

pub use summary::*;
