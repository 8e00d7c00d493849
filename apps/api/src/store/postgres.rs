use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{duplicate_email, new_token, Store};
use crate::errors::AppError;
use crate::models::prediction::{PredictionRecord, PredictionRow};
use crate::models::user::{NewUser, Session, User};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id),
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS predictions (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id),
        input_metrics JSONB NOT NULL,
        placement_probability DOUBLE PRECISION NOT NULL,
        readiness_score DOUBLE PRECISION NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS predictions_user_created ON predictions (user_id, created_at)",
];

/// Postgres-backed store. Predictions are INSERT-only.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Postgres schema ready");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(duplicate_email()),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_session(&self, user_id: Uuid) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (token, user_id, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(new_token())
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(session)
    }

    async fn resolve_session(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            JOIN sessions s ON s.user_id = u.id
            WHERE s.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn append_prediction(&self, record: PredictionRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO predictions
                (id, user_id, input_metrics, placement_probability, readiness_score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(Json(record.input_metrics))
        .bind(record.placement_probability)
        .bind(record.readiness_score)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_predictions(&self, user_id: Uuid) -> Result<Vec<PredictionRecord>, AppError> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            "SELECT * FROM predictions WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(PredictionRecord::from).collect())
    }

    async fn find_prediction(
        &self,
        user_id: Uuid,
        prediction_id: Uuid,
    ) -> Result<Option<PredictionRecord>, AppError> {
        let row = sqlx::query_as::<_, PredictionRow>(
            "SELECT * FROM predictions WHERE id = $1 AND user_id = $2",
        )
        .bind(prediction_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(PredictionRecord::from))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
