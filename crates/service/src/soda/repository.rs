use async_trait::async_trait;

use super::domain::{Soda, SodaInput};
use crate::errors::ServiceError;

/// Repository abstraction for soda persistence.
#[async_trait]
pub trait SodaRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Soda>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Soda>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Soda>, ServiceError>;
    /// Insert a new row; the repository assigns the id.
    async fn insert(&self, input: &SodaInput) -> Result<Soda, ServiceError>;
    /// Overwrite an existing row with `soda`.
    async fn save(&self, soda: Soda) -> Result<Soda, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and doc examples.
///
/// Counts every mutating call so tests can assert that a rejected
/// operation never reached storage. `set_unavailable(true)` makes every
/// method fail with `ServiceError::Db`, like a dropped connection.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockSodaRepository {
        rows: Mutex<BTreeMap<i64, Soda>>,
        next_id: Mutex<i64>,
        inserts: AtomicUsize,
        saves: AtomicUsize,
        deletes: AtomicUsize,
        unavailable: AtomicBool,
    }

    fn poisoned<T>(e: std::sync::PoisonError<T>) -> ServiceError {
        ServiceError::Db(format!("mock repository lock poisoned: {e}"))
    }

    impl MockSodaRepository {
        /// Seed a stored row directly, bypassing the insert counter.
        pub fn seed(&self, soda: Soda) {
            let mut next = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
            *next = (*next).max(soda.id);
            self.rows.lock().unwrap_or_else(|e| e.into_inner()).insert(soda.id, soda);
        }

        pub fn stored(&self, id: i64) -> Option<Soda> {
            self.rows.lock().unwrap_or_else(|e| e.into_inner()).get(&id).cloned()
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap_or_else(|e| e.into_inner()).len()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        pub fn insert_calls(&self) -> usize { self.inserts.load(Ordering::SeqCst) }
        pub fn save_calls(&self) -> usize { self.saves.load(Ordering::SeqCst) }
        pub fn delete_calls(&self) -> usize { self.deletes.load(Ordering::SeqCst) }

        pub fn set_unavailable(&self, down: bool) { self.unavailable.store(down, Ordering::SeqCst) }

        fn ensure_available(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("mock repository unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SodaRepository for MockSodaRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<Soda>, ServiceError> {
            self.ensure_available()?;
            let rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.values().find(|s| s.name == name).cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Soda>, ServiceError> {
            self.ensure_available()?;
            let rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Soda>, ServiceError> {
            self.ensure_available()?;
            let rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.values().cloned().collect())
        }

        async fn insert(&self, input: &SodaInput) -> Result<Soda, ServiceError> {
            self.ensure_available()?;
            self.inserts.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().map_err(poisoned)?;
            if rows.values().any(|s| s.name == input.name) {
                return Err(ServiceError::AlreadyRegistered(input.name.clone()));
            }
            let mut next = self.next_id.lock().map_err(poisoned)?;
            *next += 1;
            let soda = Soda {
                id: *next,
                name: input.name.clone(),
                brand: input.brand.clone(),
                max: input.max,
                quantity: input.quantity,
                soda_type: input.soda_type,
            };
            rows.insert(soda.id, soda.clone());
            Ok(soda)
        }

        async fn save(&self, soda: Soda) -> Result<Soda, ServiceError> {
            self.ensure_available()?;
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().map_err(poisoned)?;
            match rows.get_mut(&soda.id) {
                Some(slot) => {
                    *slot = soda.clone();
                    Ok(soda)
                }
                None => Err(ServiceError::id_not_found(soda.id)),
            }
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.ensure_available()?;
            self.deletes.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().map_err(poisoned)?;
            rows.remove(&id);
            Ok(())
        }
    }
}
