use crate::db::connect;
use crate::soda::{self, SodaType};
use sea_orm::{DatabaseConnection, EntityTrait};
use anyhow::Result;
use migration::MigratorTrait;
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

#[tokio::test]
async fn test_soda_crud() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let name = format!("model_soda_{}", Uuid::new_v4());
    let created = soda::create(&db, &name, "Ambev", SodaType::Lager, 10, 50).await?;
    assert_eq!(created.name, name);
    assert_eq!(created.quantity, 10);

    let found = soda::find_by_name(&db, &name).await?;
    assert_eq!(found.map(|s| s.id), Some(created.id));

    let updated = soda::save(&db, soda::Model { quantity: 42, ..created.clone() }).await?;
    assert_eq!(updated.quantity, 42);
    assert_eq!(updated.max, 50);

    soda::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(soda::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_rejected_by_schema() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let name = format!("model_dup_{}", Uuid::new_v4());
    let first = soda::create(&db, &name, "Ambev", SodaType::Ipa, 1, 10).await?;
    let second = soda::create(&db, &name, "Other", SodaType::Ale, 1, 10).await;
    assert!(matches!(second, Err(crate::errors::ModelError::Duplicate(n)) if n == name));

    soda::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_save_on_missing_row() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    let ghost = soda::Model {
        id: i64::MAX,
        name: format!("ghost_{}", Uuid::new_v4()),
        brand: "Nobody".into(),
        soda_type: SodaType::Stout,
        quantity: 1,
        max: 10,
    };
    let res = soda::save(&db, ghost).await;
    assert!(matches!(res, Err(crate::errors::ModelError::NotFound(_))));
    Ok(())
}
