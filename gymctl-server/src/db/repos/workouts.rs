//! Workout repository
//!
//! Workouts have no dependents, so delete is unconditional. Writes do not
//! check that `member_id` names an existing member.

use chrono::NaiveDate;
use sqlx::FromRow;

use super::DbError;
use crate::db::ConnectionProvider;
use crate::models::NewWorkout;

/// Workout record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Workout {
    pub workout_id: i64,
    pub member_id: i64,
    pub date: NaiveDate,
}

/// Workout repository
pub struct WorkoutRepo<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> WorkoutRepo<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    pub async fn list_all(&self) -> Result<Vec<Workout>, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, Workout>(
            "SELECT workout_id, member_id, date FROM Workouts",
        )
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Workout>, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, Workout>(
            "SELECT workout_id, member_id, date FROM Workouts WHERE workout_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    /// Insert a workout, returning the store-assigned id.
    pub async fn create(&self, workout: &NewWorkout) -> Result<i64, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO Workouts (date, member_id)
            VALUES ($1, $2)
            RETURNING workout_id
            "#,
        )
        .bind(workout.date)
        .bind(workout.member_id)
        .fetch_one(&mut *conn)
        .await;
        conn.release().await;

        let workout_id = result?;
        tracing::info!(workout_id, member_id = workout.member_id, "workout scheduled");
        Ok(workout_id)
    }

    /// Overwrite a workout's fields; an unknown id updates nothing and succeeds.
    pub async fn update(&self, id: i64, workout: &NewWorkout) -> Result<u64, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query(
            "UPDATE Workouts SET date = $1, member_id = $2 WHERE workout_id = $3",
        )
        .bind(workout.date)
        .bind(workout.member_id)
        .bind(id)
        .execute(&mut *conn)
        .await;
        conn.release().await;

        let rows_affected = result?.rows_affected();
        if rows_affected == 0 {
            tracing::debug!(workout_id = id, "workout update matched no rows");
        }
        Ok(rows_affected)
    }

    /// Delete a workout. Succeeds whether or not the row existed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query("DELETE FROM Workouts WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await;
        conn.release().await;

        let rows_affected = result?.rows_affected();
        tracing::info!(workout_id = id, rows_affected, "workout delete");
        Ok(rows_affected)
    }
}
