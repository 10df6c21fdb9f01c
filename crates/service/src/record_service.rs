use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;
use crate::repository::RecordRepository;
use crate::resources::Resource;
use crate::storage::record_store::{Fields, Record, RecordStore, StoreError};

/// One collection of `R` records guarded by a read/write lock.
///
/// Reads share the lock; create/update/delete take it exclusively, so id
/// assignment and the duplicate-name check cannot interleave.
pub struct RecordService<R: Resource> {
    store: RwLock<RecordStore>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> RecordService<R> {
    /// Empty collection; ids still start after `ID_SEED`.
    pub fn empty() -> Arc<Self> {
        Self::from_store(RecordStore::new())
    }

    /// Collection preloaded with `R::seed()`.
    pub fn seeded() -> Arc<Self> {
        Self::from_store(RecordStore::with_records(R::seed()))
    }

    pub fn new(seed: bool) -> Arc<Self> {
        if seed { Self::seeded() } else { Self::empty() }
    }

    pub fn from_store(store: RecordStore) -> Arc<Self> {
        Arc::new(Self { store: RwLock::new(store), _resource: PhantomData })
    }

    fn map_err(err: StoreError) -> ServiceError {
        match err {
            StoreError::NotFound(_) => ServiceError::not_found(R::KIND),
            StoreError::DuplicateName(_) => ServiceError::conflict(R::KIND),
        }
    }
}

#[async_trait]
impl<R: Resource> RecordRepository for RecordService<R> {
    fn kind(&self) -> &'static str {
        R::KIND
    }

    async fn list(&self) -> Vec<Record> {
        let store = self.store.read().await;
        store.list().to_vec()
    }

    async fn get(&self, id: u64) -> Result<Record, ServiceError> {
        let store = self.store.read().await;
        store.get(id).cloned().map_err(Self::map_err)
    }

    #[instrument(skip(self, input), fields(kind = R::KIND))]
    async fn create(&self, input: Fields) -> Result<Record, ServiceError> {
        let mut store = self.store.write().await;
        match store.insert(R::shape(&input)) {
            Ok(rec) => {
                info!(id = rec.id, "record created");
                Ok(rec)
            }
            Err(e) => {
                warn!(error = %e, "record create rejected");
                Err(Self::map_err(e))
            }
        }
    }

    #[instrument(skip(self, input), fields(kind = R::KIND))]
    async fn update(&self, id: u64, input: Fields) -> Result<Record, ServiceError> {
        let patch = R::patch(&input);
        debug!(fields = ?patch.keys().collect::<Vec<_>>(), "applying patch");
        let mut store = self.store.write().await;
        let rec = store.update(id, patch).map_err(Self::map_err)?;
        info!("record updated");
        Ok(rec)
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    async fn delete(&self, id: u64) -> Result<Record, ServiceError> {
        let mut store = self.store.write().await;
        let rec = store.delete(id).map_err(Self::map_err)?;
        info!("record deleted");
        Ok(rec)
    }
}
