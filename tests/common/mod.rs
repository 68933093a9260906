//! Shared setup for the integration tests
//!
//! Tests run against `DATABASE_URL` and are skipped when it is unset.

#![allow(dead_code)]

use pgext::prelude::*;
use tokio::sync::{Mutex, MutexGuard};

/// Tests in one binary share tables, so they run one at a time
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestDb {
    pub db: PgExt,
    _guard: MutexGuard<'static, ()>,
}

/// Connect and recreate the table of `T`, or `None` without a database
pub async fn setup<T: TableMetadata>() -> Option<TestDb> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping integration test");
        return None;
    };

    let guard = DB_LOCK.lock().await;
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    let db = PgExt::from_pool(pool);
    db.create_table::<T>(true)
        .await
        .expect("Failed to create test table");

    Some(TestDb { db, _guard: guard })
}

/// Query ordered by primary key
pub fn by_id() -> QueryBuilder {
    QueryBuilder::new().order_by("id", SortOrder::Asc)
}

/// Recreate another table used by the same test
pub async fn recreate<T: TableMetadata>(db: &PgExt) {
    db.create_table::<T>(true)
        .await
        .expect("Failed to create test table");
}
