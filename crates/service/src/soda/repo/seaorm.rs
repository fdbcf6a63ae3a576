use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;
use crate::soda::domain::{Soda, SodaInput};
use crate::soda::repository::SodaRepository;
use models::soda;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmSodaRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl SodaRepository for SeaOrmSodaRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Soda>, ServiceError> {
        let found = soda::find_by_name(&self.db, name).await?;
        Ok(found.map(Soda::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Soda>, ServiceError> {
        let found = soda::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Soda::from))
    }

    async fn find_all(&self) -> Result<Vec<Soda>, ServiceError> {
        let rows = soda::Entity::find()
            .order_by_asc(soda::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Soda::from).collect())
    }

    async fn insert(&self, input: &SodaInput) -> Result<Soda, ServiceError> {
        let created = soda::create(&self.db, &input.name, &input.brand, input.soda_type, input.quantity, input.max).await?;
        Ok(created.into())
    }

    async fn save(&self, soda: Soda) -> Result<Soda, ServiceError> {
        let saved = soda::save(&self.db, soda.into()).await?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        soda::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soda::domain::SodaType;
    use crate::soda::SodaService;
    use crate::test_support::get_db;
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn soda_lifecycle_against_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let svc = SodaService::new(Arc::new(SeaOrmSodaRepository { db }));

        let name = format!("svc_soda_{}", Uuid::new_v4());
        let input = SodaInput { name: name.clone(), brand: "Ambev".into(), max: 50, quantity: 10, soda_type: SodaType::Lager };
        let created = svc.create(input.clone()).await?;
        assert_eq!(created.name, name);

        let dup = svc.create(input).await;
        assert!(matches!(dup, Err(ServiceError::AlreadyRegistered(_))));

        assert_eq!(svc.find_by_name(&name).await?, created);
        assert!(svc.list_all().await?.iter().any(|s| s.id == created.id));

        let bumped = svc.increment(created.id, 40).await?;
        assert_eq!(bumped.quantity, 50);
        let over = svc.increment(created.id, 1).await;
        assert!(matches!(over, Err(ServiceError::StockExceeded { .. })));
        assert_eq!(svc.find_by_name(&name).await?.quantity, 50);

        svc.delete_by_id(created.id).await?;
        assert!(matches!(svc.find_by_name(&name).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_by_id(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
