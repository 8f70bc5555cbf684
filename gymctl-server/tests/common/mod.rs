//! Shared fixtures for store-backed tests
//!
//! Each test gets its own Postgres schema so tests can run in parallel
//! against one database. Run with:
//! `DATABASE_URL=postgres://... cargo test -p gymctl-server -- --ignored`

#![allow(dead_code)]

use gymctl_server::{ConnectionProvider, StoreConfig};

pub const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

/// Only the members table, for tests that must show the workouts table
/// is never touched.
pub const MEMBERS_ONLY_SQL: &str = "CREATE TABLE Members (
    member_id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone VARCHAR(50) NOT NULL
);";

pub struct TestStore {
    pub schema: String,
    pub connections: ConnectionProvider,
}

impl TestStore {
    /// Fresh schema with both tables.
    pub async fn new() -> Self {
        Self::with_ddl(SCHEMA_SQL).await
    }

    pub async fn with_ddl(ddl: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("gymctl_server=debug")
            .with_test_writer()
            .try_init();

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("gymctl_test_{}", uuid::Uuid::new_v4().simple());
        let config = StoreConfig::from_url(url).with_schema(&schema);
        let connections = ConnectionProvider::new(&config).expect("valid DATABASE_URL");

        let mut conn = connections.acquire().await.expect("connection");
        sqlx::raw_sql(&format!("CREATE SCHEMA {schema}; SET search_path TO {schema};"))
            .execute(&mut *conn)
            .await
            .expect("create schema");
        sqlx::raw_sql(ddl)
            .execute(&mut *conn)
            .await
            .expect("create tables");
        conn.release().await;

        Self {
            schema,
            connections,
        }
    }

    /// Number of workouts referencing a member, read straight from the store.
    pub async fn workout_count(&self, member_id: i64) -> i64 {
        let mut conn = self.connections.acquire().await.expect("connection");
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM Workouts WHERE member_id = $1")
            .bind(member_id)
            .fetch_one(&mut *conn)
            .await
            .expect("count query");
        conn.release().await;
        count
    }

    pub async fn teardown(self) {
        let mut conn = self.connections.acquire().await.expect("connection");
        sqlx::raw_sql(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&mut *conn)
            .await
            .expect("drop schema");
        conn.release().await;
    }
}
