use serde::{Deserialize, Serialize};

pub use models::soda::SodaType;

use crate::errors::ServiceError;

/// Soda as exposed to callers (business view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soda {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    #[serde(rename = "type")]
    pub soda_type: SodaType,
}

/// Creation input; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SodaInput {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    #[serde(rename = "type")]
    pub soda_type: SodaType,
}

impl SodaInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::soda::validate_name(&self.name)?;
        models::soda::validate_brand(&self.brand)?;
        models::soda::validate_stock(self.quantity, self.max)?;
        Ok(())
    }
}

/// Body of a stock increment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityInput {
    pub quantity: i32,
}
