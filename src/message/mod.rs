//! Message module - composing templates and saving the result

pub mod compose;
pub mod output;

pub use compose::*;
pub use output::*;
