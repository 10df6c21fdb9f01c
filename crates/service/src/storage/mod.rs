//! Storage abstractions for service layer
//!
//! Holds the schema-agnostic in-memory record collection shared by every
//! resource type.

pub mod record_store;
