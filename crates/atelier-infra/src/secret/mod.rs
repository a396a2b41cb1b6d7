//! Secret loading.
//!
//! - `env`: API key from the process environment (after `.env` is loaded)

pub mod env;
