//! Cross-crate helpers shared by the server binary and the HTTP layer.

pub mod types;
pub mod utils;
