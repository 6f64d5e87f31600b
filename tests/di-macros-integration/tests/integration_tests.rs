//! Centralized integration tests for di-macros crate

use di_abstractions::{Applicator, DependencyError, Injectable, TypeKey, TypeMapper, Value};
use di_impl::Container;
use di_macros::Injectable;
use std::sync::Arc;

#[derive(Debug)]
pub struct Database {
    pub url: String,
}

#[derive(Debug)]
pub struct Cache {
    pub capacity: usize,
}

#[derive(Injectable)]
pub struct Repository {
    pub table: &'static str,
    #[inject]
    pub database: Arc<Database>,
    #[inject]
    pub cache: Option<Arc<Cache>>,
}

impl Repository {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            database: Arc::new(Database { url: String::new() }),
            cache: None,
        }
    }
}

#[test]
fn test_generated_injection_points() {
    let repository = Repository::new("users");
    let points = repository.injection_points();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].field, "database");
    assert_eq!(points[0].key, TypeKey::of::<Database>());
    assert!(!points[0].optional);
    assert_eq!(points[1].field, "cache");
    assert_eq!(points[1].key, TypeKey::of::<Cache>());
    assert!(points[1].optional);
}

#[test]
fn test_generated_inject_field() {
    let mut repository = Repository::new("users");

    repository
        .inject_field("cache", Value::from_value(Cache { capacity: 64 }))
        .unwrap();

    assert_eq!(repository.cache.as_ref().map(|c| c.capacity), Some(64));
}

#[test]
fn test_generated_inject_field_rejects_wrong_type() {
    let mut repository = Repository::new("users");

    let err = repository
        .inject_field("database", Value::from_value(Cache { capacity: 1 }))
        .unwrap_err();

    assert!(matches!(err, DependencyError::TypeMismatch { .. }));
    assert!(repository.database.url.is_empty());
}

#[test]
fn test_generated_inject_field_rejects_unmarked_field() {
    let mut repository = Repository::new("users");

    let err = repository
        .inject_field("table", Value::from_value("orders"))
        .unwrap_err();

    assert!(matches!(err, DependencyError::UnknownField { .. }));
    assert_eq!(repository.table, "users");
}

#[test]
fn test_derive_with_container() {
    let mut container = Container::new();
    container
        .map(Database {
            url: "postgres://localhost/lorn".to_string(),
        })
        .map(Cache { capacity: 128 });
    let mut repository = Repository::new("users");

    container.apply(&mut repository).unwrap();

    assert_eq!(repository.table, "users");
    assert_eq!(repository.database.url, "postgres://localhost/lorn");
    assert_eq!(repository.cache.as_ref().map(|c| c.capacity), Some(128));
}
