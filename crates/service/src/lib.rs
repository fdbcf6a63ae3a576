//! Service layer for the soda catalog.
//! - Owns the stock rules; handlers and storage carry no decisions.
//! - Reaches persistence only through the `SodaRepository` trait.

pub mod errors;
pub mod soda;
#[cfg(test)]
pub mod test_support;

pub use soda::SodaService;
