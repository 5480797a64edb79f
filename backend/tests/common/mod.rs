//! Shared fixtures for SQLite-backed integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use campus_food::domain::{AccountProfile, NewAccount};
use campus_food::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use tempfile::TempDir;

/// Fresh database file in a temporary directory, schema applied.
pub struct TestDatabase {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn open() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("database.db");
        let config = PoolConfig::new(path.to_string_lossy().into_owned()).with_max_size(4);
        let pool = DbPool::new(config).await.expect("open database");
        ensure_schema(&pool).await.expect("create schema");
        Self { pool, _dir: dir }
    }
}

pub fn profile(name: &str, level: &str) -> AccountProfile {
    AccountProfile {
        name: name.to_owned(),
        department: "Computer Science".to_owned(),
        college: "COLNAS".to_owned(),
        level: level.to_owned(),
        hostel: "Hall 2".to_owned(),
    }
}

pub fn new_account(matric_number: &str, password: &str) -> NewAccount {
    NewAccount::try_from_parts(matric_number, profile("Ada Obi", "300"), password)
        .expect("valid account")
}
