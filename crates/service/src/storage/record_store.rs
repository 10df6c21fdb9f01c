use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field mapping of a record, without its id.
pub type Fields = Map<String, Value>;

/// Counter value every collection starts from; the first inserted record gets `ID_SEED + 1`.
pub const ID_SEED: u64 = 2;

/// One entry of a collection: store-assigned id plus arbitrary fields.
///
/// Serialized flat, e.g. `{"id": 3, "name": "John", "email": null}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: u64, mut fields: Fields) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    pub fn name(&self) -> Option<&Value> {
        self.fields.get("name").filter(|v| !v.is_null())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(u64),
    #[error("a record named {0} already exists")]
    DuplicateName(String),
}

/// Truthiness used by partial updates: null, false, zero, and empty
/// strings, arrays or objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// In-memory collection keyed by an auto-incrementing id.
///
/// Records keep insertion order. Ids come from a monotonic counter and are
/// never handed out twice, even after the record holding one is deleted.
/// The store does no locking; callers sharing it across tasks wrap it
/// (see `RecordService`).
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    last_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self { Self::new() }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records. The counter begins at the larger of
    /// `ID_SEED` and the highest id present.
    pub fn with_records(records: Vec<Record>) -> Self {
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self { records, last_id: max_id.max(ID_SEED) }
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn get(&self, id: u64) -> Result<&Record, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a record built from `fields`, rejecting a duplicate non-null `name`.
    pub fn insert(&mut self, fields: Fields) -> Result<Record, StoreError> {
        if let Some(name) = fields.get("name").filter(|v| !v.is_null()) {
            if self.records.iter().any(|r| r.name() == Some(name)) {
                let shown = name.as_str().map(str::to_owned).unwrap_or_else(|| name.to_string());
                return Err(StoreError::DuplicateName(shown));
            }
        }

        self.last_id += 1;
        let record = Record::new(self.last_id, fields);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Overwrite the fields of record `id` whose supplied value is truthy.
    /// Falsy values (e.g. `0`, `""`, `null`) are skipped, not written.
    pub fn update(&mut self, id: u64, fields: Fields) -> Result<Record, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        for (key, value) in fields {
            if key == "id" || !is_truthy(&value) {
                continue;
            }
            record.fields.insert(key, value);
        }
        Ok(record.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Record, StoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn insert_then_get_returns_fields_and_id() {
        let mut store = RecordStore::new();
        let created = store.insert(fields(json!({"name": "John", "email": "john@x.com"}))).unwrap();
        assert_eq!(created.id, ID_SEED + 1);

        let found = store.get(created.id).unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.fields["email"], "john@x.com");
    }

    #[test]
    fn ids_increase_by_one_per_insert() {
        let mut store = RecordStore::new();
        let a = store.insert(fields(json!({"name": "a"}))).unwrap();
        let b = store.insert(fields(json!({"name": "b"}))).unwrap();
        assert_eq!(a.id, 3);
        assert_eq!(b.id, 4);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = RecordStore::new();
        let a = store.insert(fields(json!({"name": "a"}))).unwrap();
        store.delete(a.id).unwrap();
        let b = store.insert(fields(json!({"name": "b"}))).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn counter_starts_above_existing_records() {
        let seeded = vec![
            Record::new(1, fields(json!({"name": "one"}))),
            Record::new(7, fields(json!({"name": "seven"}))),
        ];
        let mut store = RecordStore::with_records(seeded);
        assert_eq!(store.last_id(), 7);
        assert_eq!(store.insert(Fields::new()).unwrap().id, 8);
    }

    #[test]
    fn duplicate_name_is_rejected_without_mutation() {
        let mut store = RecordStore::new();
        store.insert(fields(json!({"name": "rabbit"}))).unwrap();
        let before = store.last_id();

        let err = store.insert(fields(json!({"name": "rabbit", "age": 2}))).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("rabbit".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.last_id(), before);
    }

    #[test]
    fn records_without_name_do_not_conflict() {
        let mut store = RecordStore::new();
        store.insert(fields(json!({"name": null, "age": 1}))).unwrap();
        store.insert(fields(json!({"age": 2}))).unwrap();
        store.insert(fields(json!({"name": null}))).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn supplied_id_is_ignored() {
        let mut store = RecordStore::new();
        let created = store.insert(fields(json!({"id": 99, "name": "x"}))).unwrap();
        assert_eq!(created.id, 3);
        assert!(!created.fields.contains_key("id"));

        let updated = store.update(3, fields(json!({"id": 42}))).unwrap();
        assert_eq!(updated.id, 3);
    }

    #[test]
    fn delete_removes_record() {
        let mut store = RecordStore::new();
        let a = store.insert(fields(json!({"name": "a"}))).unwrap();
        let b = store.insert(fields(json!({"name": "b"}))).unwrap();

        let removed = store.delete(a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(store.get(a.id).unwrap_err(), StoreError::NotFound(a.id));
        assert!(store.list().iter().all(|r| r.id != a.id));
        assert_eq!(store.list()[0].id, b.id);
        assert_eq!(store.delete(a.id).unwrap_err(), StoreError::NotFound(a.id));
    }

    #[test]
    fn update_skips_falsy_values() {
        let mut store = RecordStore::new();
        let created = store
            .insert(fields(json!({"name": "rabbit", "age": 3, "species": "mamals"})))
            .unwrap();

        let updated = store
            .update(created.id, fields(json!({"age": 0, "species": "", "name": null})))
            .unwrap();
        assert_eq!(updated.fields["age"], 3);
        assert_eq!(updated.fields["species"], "mamals");
        assert_eq!(updated.fields["name"], "rabbit");

        let updated = store.update(created.id, fields(json!({"age": 4, "gender": "female"}))).unwrap();
        assert_eq!(updated.fields["age"], 4);
        assert_eq!(updated.fields["gender"], "female");
        assert_eq!(store.get(created.id).unwrap(), &updated);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = RecordStore::new();
        let err = store.update(10, fields(json!({"name": "x"}))).unwrap_err();
        assert_eq!(err, StoreError::NotFound(10));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        for name in ["c", "a", "b"] {
            store.insert(fields(json!({"name": name}))).unwrap();
        }
        let names: Vec<_> = store.list().iter().map(|r| r.fields["name"].clone()).collect();
        assert_eq!(names, vec![json!("c"), json!("a"), json!("b")]);
    }

    #[test]
    fn truthiness_matches_update_policy() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
        for v in [json!(true), json!(1), json!(-2.5), json!("x"), json!([0]), json!({"a": 1})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn record_serializes_flat() {
        let r = Record::new(3, fields(json!({"name": "John", "role": null})));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"id": 3, "name": "John", "role": null})
        );
    }
}
