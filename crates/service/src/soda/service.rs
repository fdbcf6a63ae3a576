use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{Soda, SodaInput};
use super::repository::SodaRepository;
use crate::errors::ServiceError;

/// Soda stock service independent of web framework and storage.
///
/// Check-then-act pairs (exists then delete, read then write quantity) are
/// two repository calls and are not atomic against concurrent requests.
pub struct SodaService<R: SodaRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SodaRepository + ?Sized> SodaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new soda. Names are unique; a taken name is rejected
    /// before anything is written.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: SodaInput) -> Result<Soda, ServiceError> {
        input.validate()?;
        self.verify_not_registered(&input.name).await?;
        let saved = self.repo.insert(&input).await?;
        info!(id = saved.id, name = %saved.name, brand = %saved.brand, "soda_created");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Soda, ServiceError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::name_not_found(name))
    }

    /// Every stored soda in repository order.
    pub async fn list_all(&self) -> Result<Vec<Soda>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.verify_exists(id).await?;
        self.repo.delete_by_id(id).await?;
        info!(id, "soda_deleted");
        Ok(())
    }

    /// Add `amount` to the stock of soda `id`.
    ///
    /// The result may reach `max` exactly; anything above fails with
    /// `StockExceeded` and leaves the stored quantity untouched.
    ///
    /// # Examples
    /// ```
    /// use service::soda::{SodaService, repository::mock::MockSodaRepository};
    /// use service::soda::domain::{SodaInput, SodaType};
    /// use std::sync::Arc;
    /// let svc = SodaService::new(Arc::new(MockSodaRepository::default()));
    /// let input = SodaInput { name: "Guarana".into(), brand: "Antarctica".into(), max: 50, quantity: 10, soda_type: SodaType::Lager };
    /// let soda = tokio_test::block_on(svc.create(input)).unwrap();
    /// let soda = tokio_test::block_on(svc.increment(soda.id, 10)).unwrap();
    /// assert_eq!(soda.quantity, 20);
    /// assert!(tokio_test::block_on(svc.increment(soda.id, 45)).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn increment(&self, id: i64, amount: i32) -> Result<Soda, ServiceError> {
        let mut soda = self.verify_exists(id).await?;
        models::soda::validate_increment(amount)?;

        let after = soda
            .quantity
            .checked_add(amount)
            .filter(|q| *q <= soda.max);
        let Some(after) = after else {
            warn!(id, amount, quantity = soda.quantity, max = soda.max, "soda_stock_exceeded");
            return Err(ServiceError::StockExceeded { id, quantity: amount });
        };

        soda.quantity = after;
        let saved = self.repo.save(soda).await?;
        info!(id, amount, quantity = saved.quantity, max = saved.max, "soda_stock_incremented");
        Ok(saved)
    }

    async fn verify_not_registered(&self, name: &str) -> Result<(), ServiceError> {
        if let Some(existing) = self.repo.find_by_name(name).await? {
            debug!(id = existing.id, "soda name taken: {}", existing.name);
            return Err(ServiceError::AlreadyRegistered(name.to_string()));
        }
        Ok(())
    }

    async fn verify_exists(&self, id: i64) -> Result<Soda, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::id_not_found(id))
    }
}
