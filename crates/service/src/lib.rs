//! Service layer: in-memory record collections behind an async repository trait.
//! - `storage` holds the schema-agnostic store.
//! - `resources` declares the user and animal record shapes.
//! - `record_service` serializes access to one store per resource.

pub mod errors;
pub mod storage;
pub mod resources;
pub mod repository;
pub mod record_service;

pub use record_service::RecordService;
pub use repository::RecordRepository;
