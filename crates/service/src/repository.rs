use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::storage::record_store::{Fields, Record};

/// Trait abstraction over one record collection, as seen by request handlers.
/// Implementations own their records; callers only go through these methods.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Resource name, e.g. `"user"`.
    fn kind(&self) -> &'static str;
    async fn list(&self) -> Vec<Record>;
    async fn get(&self, id: u64) -> Result<Record, ServiceError>;
    async fn create(&self, input: Fields) -> Result<Record, ServiceError>;
    async fn update(&self, id: u64, input: Fields) -> Result<Record, ServiceError>;
    async fn delete(&self, id: u64) -> Result<Record, ServiceError>;
}
