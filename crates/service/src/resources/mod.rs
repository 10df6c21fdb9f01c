//! Record shapes served by the API.
//!
//! The store itself is schema-agnostic; a [`Resource`] names a collection,
//! declares which fields its records carry and provides the sample data a
//! fresh collection starts with.

use serde_json::Value;

use crate::storage::record_store::{Fields, Record};

pub mod animal;
pub mod user;

pub use animal::Animal;
pub use user::User;

pub trait Resource: Send + Sync + 'static {
    /// Singular name, used as URL segment and in response messages.
    const KIND: &'static str;
    /// Declared fields, in display order.
    const FIELDS: &'static [&'static str];

    fn seed() -> Vec<Record>;

    /// Projection applied on create: every declared field, `null` when not supplied.
    fn shape(input: &Fields) -> Fields {
        Self::FIELDS
            .iter()
            .map(|f| (f.to_string(), input.get(*f).cloned().unwrap_or(Value::Null)))
            .collect()
    }

    /// Projection applied on update: declared fields the caller actually sent.
    fn patch(input: &Fields) -> Fields {
        Self::FIELDS
            .iter()
            .filter_map(|f| input.get(*f).map(|v| (f.to_string(), v.clone())))
            .collect()
    }
}

/// Build a seed record from a JSON object literal.
pub(crate) fn seed_record(id: u64, value: Value) -> Record {
    let fields = match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    };
    Record::new(id, fields)
}
