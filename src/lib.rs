//! msgtpl: Message Template Library
//!
//! Loads recipients, authors, topics and greeting/body/closing templates
//! from a base directory, lets the user pick one of each, fills the
//! placeholders and saves the composed message.

pub mod cli;
pub mod error;
pub mod message;
pub mod report;
pub mod session;
pub mod storage;
pub mod utils;

pub use error::{MsgError, MsgResult};
