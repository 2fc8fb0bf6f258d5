//! Mutex-guarded vector implementing [`SalesmanRepository`].
//!
//! Every port call takes the lock once and runs to completion, so operations
//! never interleave and each one is atomic. Callers receive clones; the
//! vector is never exposed.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{SalesmanRepository, SalesmanStoreError};
use crate::domain::{Salesman, Sid, SocialPerformanceRecord, example_salesmen};

/// Ordered salesman collection held in process memory.
///
/// # Examples
/// ```
/// use salesmen::domain::ports::SalesmanRepository;
/// use salesmen::domain::Sid;
/// use salesmen::outbound::memory::InMemorySalesmanStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemorySalesmanStore::seeded();
/// let found = store.find_by_sid(Sid::new(101)).await.expect("store usable");
/// assert_eq!(found.map(|s| s.firstname().to_owned()), Some("John".to_owned()));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySalesmanStore {
    salesmen: Mutex<Vec<Salesman>>,
}

impl InMemorySalesmanStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `salesmen` in the given order.
    #[must_use]
    pub const fn with_salesmen(salesmen: Vec<Salesman>) -> Self {
        Self {
            salesmen: Mutex::new(salesmen),
        }
    }

    /// Create a store holding the example salesmen.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_salesmen(example_salesmen())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Salesman>>, SalesmanStoreError> {
        self.salesmen
            .lock()
            .map_err(|err| SalesmanStoreError::unavailable(err.to_string()))
    }

    fn update_salesman<F>(&self, sid: Sid, mutate: F) -> Result<Option<Salesman>, SalesmanStoreError>
    where
        F: FnOnce(&mut Salesman),
    {
        let mut salesmen = self.lock()?;
        Ok(salesmen
            .iter_mut()
            .find(|salesman| salesman.sid() == sid)
            .map(|salesman| {
                mutate(salesman);
                salesman.clone()
            }))
    }
}

#[async_trait]
impl SalesmanRepository for InMemorySalesmanStore {
    async fn list(&self) -> Result<Vec<Salesman>, SalesmanStoreError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_sid(&self, sid: Sid) -> Result<Option<Salesman>, SalesmanStoreError> {
        let salesmen = self.lock()?;
        Ok(salesmen.iter().find(|salesman| salesman.sid() == sid).cloned())
    }

    async fn insert(&self, salesman: Salesman) -> Result<(), SalesmanStoreError> {
        let mut salesmen = self.lock()?;
        debug!(sid = %salesman.sid(), total = salesmen.len() + 1, "inserting salesman");
        salesmen.push(salesman);
        Ok(())
    }

    async fn remove(&self, sid: Sid) -> Result<Vec<Salesman>, SalesmanStoreError> {
        let mut salesmen = self.lock()?;
        let (removed, kept): (Vec<Salesman>, Vec<Salesman>) = salesmen
            .drain(..)
            .partition(|salesman| salesman.sid() == sid);
        *salesmen = kept;
        debug!(%sid, removed = removed.len(), "removed salesmen");
        Ok(removed)
    }

    async fn add_record(
        &self,
        sid: Sid,
        record: SocialPerformanceRecord,
    ) -> Result<Option<Salesman>, SalesmanStoreError> {
        debug!(%sid, skill = record.skill(), "adding social performance record");
        self.update_salesman(sid, |salesman| salesman.push_record(record))
    }

    async fn remove_record(
        &self,
        sid: Sid,
        skill: &str,
    ) -> Result<Option<Salesman>, SalesmanStoreError> {
        self.update_salesman(sid, |salesman| {
            let removed = salesman.remove_records_with_skill(skill);
            debug!(%sid, skill, removed, "removed social performance records");
        })
    }
}
