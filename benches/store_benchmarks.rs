//! Performance benchmarks for the contact store and service.
//!
//! These benchmarks measure:
//! - Retrieval from a pre-filled store (hit and miss)
//! - Validated creates through the service
//! - Concurrent creates contending on the store lock

use contact_api::models::Contact;
use contact_api::repositories::{ContactRepository, InMemoryContactRepository};
use contact_api::services::{ContactService, ContactServiceImpl};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use futures::future::join_all;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Build a store holding `size` contacts.
fn filled_repo(rt: &Runtime, size: usize) -> InMemoryContactRepository {
    let repo = InMemoryContactRepository::new();
    rt.block_on(async {
        for i in 0..size {
            repo.create(Contact::new(format!("contact-{i}"), "555", "person"))
                .await
                .unwrap();
        }
    });
    repo
}

fn bench_retrieve(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("retrieve");

    for size in [100, 10_000] {
        let repo = filled_repo(&rt, size);
        let service = ContactServiceImpl::new(Arc::new(repo));

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, _| {
            b.to_async(&rt)
                .iter(|| async { service.retrieve(Some("contact-42")).await.unwrap() });
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            b.to_async(&rt)
                .iter(|| async { service.retrieve(Some("nobody")).await.unwrap() });
        });
    }

    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let service = ContactServiceImpl::new(Arc::new(InMemoryContactRepository::new()));

    // After the first iteration every create is a duplicate no-op, which is
    // the steady-state cost of validation plus the locked entry check.
    c.bench_function("create_validated", |b| {
        b.to_async(&rt).iter(|| async {
            service
                .create(Some(Contact::new("Acme", "555-0100", "Business")))
                .await
                .unwrap()
        });
    });
}

fn bench_concurrent_create(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("concurrent_create_100", |b| {
        b.to_async(&rt).iter(|| async {
            let service = Arc::new(ContactServiceImpl::new(Arc::new(
                InMemoryContactRepository::new(),
            )));
            let tasks = (0..100).map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create(Some(Contact::new(format!("c{i}"), "", "person")))
                        .await
                })
            });
            join_all(tasks).await
        });
    });
}

criterion_group!(benches, bench_retrieve, bench_create, bench_concurrent_create);
criterion_main!(benches);
