use serde_json::json;

use super::{seed_record, Resource};
use crate::storage::record_store::Record;

/// Staff accounts: `name`, `email`, `phone number`, `role`, `schedule`.
pub struct User;

impl Resource for User {
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["name", "email", "phone number", "role", "schedule"];

    fn seed() -> Vec<Record> {
        vec![
            seed_record(1, json!({
                "name": "Alice",
                "email": "alice@example.com",
                "phone number": "0812-1111-2222",
                "role": "caretaker",
                "schedule": "Mon-Fri 08:00-16:00"
            })),
            seed_record(2, json!({
                "name": "Budi",
                "email": "budi@example.com",
                "phone number": "0813-3333-4444",
                "role": "veterinarian",
                "schedule": "Sat-Sun 09:00-15:00"
            })),
        ]
    }
}
