//! Persistence seam for accounts, sessions and prediction history.
//!
//! `AppState` carries an `Arc<dyn Store>`; the backend is picked at startup
//! (`PgStore` when `DATABASE_URL` is set, `MemoryStore` otherwise).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::prediction::PredictionRecord;
use crate::models::user::{NewUser, Session, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Fails with `AppError::Validation` when the email is already taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn create_session(&self, user_id: Uuid) -> Result<Session, AppError>;

    async fn resolve_session(&self, token: &str) -> Result<Option<User>, AppError>;

    async fn append_prediction(&self, record: PredictionRecord) -> Result<(), AppError>;

    /// All of a user's predictions, oldest first.
    async fn list_predictions(&self, user_id: Uuid) -> Result<Vec<PredictionRecord>, AppError>;

    async fn find_prediction(
        &self,
        user_id: Uuid,
        prediction_id: Uuid,
    ) -> Result<Option<PredictionRecord>, AppError>;

    /// Short backend label for health output.
    fn backend(&self) -> &'static str;
}

pub(crate) fn duplicate_email() -> AppError {
    AppError::Validation("Email already registered".to_string())
}

pub(crate) fn new_token() -> String {
    Uuid::new_v4().to_string()
}
