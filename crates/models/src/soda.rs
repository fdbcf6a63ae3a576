use sea_orm::{entity::prelude::*, DatabaseConnection, IntoActiveModel, NotSet, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 200;
pub const BRAND_MAX_LEN: usize = 200;
pub const MAX_STOCK_CEILING: i32 = 500;
pub const QUANTITY_CEILING: i32 = 100;

/// Beverage category. Stored and serialized as the upper-case name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum SodaType {
    #[sea_orm(string_value = "LAGER")]
    Lager,
    #[sea_orm(string_value = "MALZBIER")]
    Malzbier,
    #[sea_orm(string_value = "WITBIER")]
    Witbier,
    #[sea_orm(string_value = "WEISS")]
    Weiss,
    #[sea_orm(string_value = "ALE")]
    Ale,
    #[sea_orm(string_value = "IPA")]
    Ipa,
    #[sea_orm(string_value = "STOUT")]
    Stout,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "soda")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub brand: String,
    pub soda_type: SodaType,
    pub quantity: i32,
    pub max: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_label(field: &str, value: &str, max_len: usize) -> Result<(), errors::ModelError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if len > max_len {
        return Err(errors::ModelError::Validation(format!("{field} longer than {max_len} characters")));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validate_label("name", name, NAME_MAX_LEN)
}

pub fn validate_brand(brand: &str) -> Result<(), errors::ModelError> {
    validate_label("brand", brand, BRAND_MAX_LEN)
}

/// Creation-time stock rules: `max` in `1..=500`, `quantity` in `0..=100`,
/// and [`check_bounds`].
pub fn validate_stock(quantity: i32, max: i32) -> Result<(), errors::ModelError> {
    if !(1..=MAX_STOCK_CEILING).contains(&max) {
        return Err(errors::ModelError::Validation(format!("max must be within 1..={MAX_STOCK_CEILING}")));
    }
    if !(0..=QUANTITY_CEILING).contains(&quantity) {
        return Err(errors::ModelError::Validation(format!("quantity must be within 0..={QUANTITY_CEILING}")));
    }
    check_bounds(quantity, max)
}

/// `0 <= quantity <= max`, which every stored row satisfies.
pub fn check_bounds(quantity: i32, max: i32) -> Result<(), errors::ModelError> {
    if quantity < 0 || quantity > max {
        return Err(errors::ModelError::Validation(format!("quantity {quantity} outside 0..={max}")));
    }
    Ok(())
}

pub fn validate_increment(amount: i32) -> Result<(), errors::ModelError> {
    if amount < 1 {
        return Err(errors::ModelError::Validation("increment quantity must be a positive integer".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    brand: &str,
    soda_type: SodaType,
    quantity: i32,
    max: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_brand(brand)?;
    validate_stock(quantity, max)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        brand: Set(brand.to_string()),
        soda_type: Set(soda_type),
        quantity: Set(quantity),
        max: Set(max),
    };
    // unique index on name; a racing create lands here
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Duplicate(name.to_string()),
        _ => errors::ModelError::Db(e.to_string()),
    })
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Write every column of an existing row back to the table.
pub async fn save(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    check_bounds(model.quantity, model.max)?;
    let id = model.id;
    model
        .into_active_model()
        .reset_all()
        .update(db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => errors::ModelError::NotFound(format!("soda {id}")),
            other => errors::ModelError::Db(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_oversized_labels_are_rejected() {
        assert!(validate_name("Guarana").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_brand("").is_err());
        assert!(validate_brand(&"b".repeat(BRAND_MAX_LEN + 1)).is_err());
        assert!(validate_name(&"n".repeat(NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn stock_bounds() {
        assert!(validate_stock(10, 50).is_ok());
        assert!(validate_stock(0, 1).is_ok());
        assert!(validate_stock(50, 50).is_ok());
        assert!(validate_stock(51, 50).is_err());
        assert!(validate_stock(-1, 50).is_err());
        assert!(validate_stock(10, 0).is_err());
        assert!(validate_stock(10, MAX_STOCK_CEILING + 1).is_err());
        assert!(validate_stock(QUANTITY_CEILING + 1, MAX_STOCK_CEILING).is_err());
    }

    #[test]
    fn stored_bounds_allow_quantities_above_creation_ceiling() {
        assert!(check_bounds(QUANTITY_CEILING + 50, MAX_STOCK_CEILING).is_ok());
        assert!(check_bounds(51, 50).is_err());
        assert!(check_bounds(-1, 50).is_err());
    }

    #[test]
    fn increment_amount_must_be_positive() {
        assert!(validate_increment(1).is_ok());
        assert!(validate_increment(400).is_ok());
        assert!(validate_increment(0).is_err());
        assert!(validate_increment(-5).is_err());
    }

    #[test]
    fn soda_type_uses_upper_case_wire_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&SodaType::Ipa)?, "\"IPA\"");
        let parsed: SodaType = serde_json::from_str("\"MALZBIER\"")?;
        assert_eq!(parsed, SodaType::Malzbier);
        assert!(serde_json::from_str::<SodaType>("\"lemonade\"").is_err());
        Ok(())
    }
}
