use serde_json::json;

use super::{seed_record, Resource};
use crate::storage::record_store::Record;

/// Sheltered animals: `name`, `age`, `gender`, `species`, `special requirements`.
pub struct Animal;

impl Resource for Animal {
    const KIND: &'static str = "animal";
    const FIELDS: &'static [&'static str] = &["name", "age", "gender", "species", "special requirements"];

    fn seed() -> Vec<Record> {
        vec![
            seed_record(1, json!({
                "name": "rabbit",
                "age": 3,
                "gender": "female",
                "species": "mamals",
                "special requirements": "Needs medication"
            })),
            seed_record(2, json!({
                "name": "parrot",
                "age": 5,
                "gender": "male",
                "species": "bird",
                "special requirements": "Quiet room"
            })),
        ]
    }
}
