//! Member repository
//!
//! Handles member CRUD. Deletion is guarded in application code: a member
//! that still has workouts is never removed.

use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::db::ConnectionProvider;
use crate::models::NewMember;

/// Member record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Member {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Result of a guarded member delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberDeletion {
    Deleted,
    NotFound,
    /// Workouts still reference the member; nothing was deleted
    Blocked { workouts: i64 },
}

/// Member repository
pub struct MemberRepo<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> MemberRepo<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    /// Every member, in whatever order the store returns them.
    pub async fn list_all(&self) -> Result<Vec<Member>, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, Member>(
            "SELECT member_id, name, email, phone FROM Members",
        )
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Member>, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, Member>(
            "SELECT member_id, name, email, phone FROM Members WHERE member_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    /// Insert a member, returning the store-assigned id.
    pub async fn create(&self, member: &NewMember) -> Result<i64, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO Members (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING member_id
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .fetch_one(&mut *conn)
        .await;
        conn.release().await;

        let member_id = result?;
        tracing::info!(member_id, "member created");
        Ok(member_id)
    }

    /// Overwrite a member's fields.
    ///
    /// No existence check: an unknown id updates nothing and still succeeds.
    /// Returns the number of rows touched.
    pub async fn update(&self, id: i64, member: &NewMember) -> Result<u64, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query(
            "UPDATE Members SET name = $1, email = $2, phone = $3 WHERE member_id = $4",
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(id)
        .execute(&mut *conn)
        .await;
        conn.release().await;

        let rows_affected = result?.rows_affected();
        if rows_affected == 0 {
            tracing::debug!(member_id = id, "member update matched no rows");
        }
        Ok(rows_affected)
    }

    /// Delete a member unless workouts still reference it.
    pub async fn delete(&self, id: i64) -> Result<MemberDeletion, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = Self::guarded_delete(&mut conn, id).await;
        conn.release().await;

        let outcome = result?;
        tracing::info!(member_id = id, ?outcome, "member delete");
        Ok(outcome)
    }

    /// Existence check, then dependency check, then delete.
    ///
    /// Three separate statements with no transaction: a workout inserted
    /// between the dependency check and the delete is not seen.
    async fn guarded_delete(conn: &mut PgConnection, id: i64) -> Result<MemberDeletion, sqlx::Error> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT member_id FROM Members WHERE member_id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        if existing.is_none() {
            return Ok(MemberDeletion::NotFound);
        }

        let workouts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM Workouts WHERE member_id = $1")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;

        if workouts > 0 {
            return Ok(MemberDeletion::Blocked { workouts });
        }

        sqlx::query("DELETE FROM Members WHERE member_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(MemberDeletion::Deleted)
    }
}
