//! REST API request handlers.

pub mod options;
pub mod recommendation;
