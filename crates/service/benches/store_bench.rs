use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

use service::resources::{Resource, User};
use service::storage::record_store::{Fields, RecordStore};
use service::{RecordRepository, RecordService};

fn user(i: usize) -> Fields {
    User::shape(json!({"name": format!("user-{i}"), "email": format!("u{i}@example.com")}).as_object().unwrap())
}

fn bench_store(c: &mut Criterion) {
    // pre-fill a collection of realistic size outside the measured loop
    let mut store = RecordStore::new();
    for i in 0..500 {
        store.insert(user(i)).unwrap();
    }

    c.bench_function("record_store_get_last", |b| {
        let last = store.last_id();
        b.iter(|| store.get(last).unwrap().id);
    });

    c.bench_function("record_store_insert_unique", |b| {
        let mut i = 1_000;
        b.iter(|| {
            let mut s = store.clone();
            i += 1;
            s.insert(user(i)).unwrap().id
        });
    });
}

fn bench_service(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = RecordService::<User>::seeded();

    c.bench_function("record_service_get", |b| {
        b.iter(|| rt.block_on(svc.get(1)).unwrap());
    });
}

criterion_group!(benches, bench_store, bench_service);
criterion_main!(benches);
