use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{duplicate_email, new_token, Store};
use crate::errors::AppError;
use crate::models::prediction::PredictionRecord;
use crate::models::user::{NewUser, Session, User};

/// In-process store. State is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    sessions: RwLock<HashMap<String, Uuid>>,
    predictions: RwLock<Vec<PredictionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(duplicate_email());
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_session(&self, user_id: Uuid) -> Result<Session, AppError> {
        let session = Session {
            token: new_token(),
            user_id,
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), user_id);
        Ok(session)
    }

    async fn resolve_session(&self, token: &str) -> Result<Option<User>, AppError> {
        let user_id = match self.sessions.read().await.get(token) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn append_prediction(&self, record: PredictionRecord) -> Result<(), AppError> {
        self.predictions.write().await.push(record);
        Ok(())
    }

    async fn list_predictions(&self, user_id: Uuid) -> Result<Vec<PredictionRecord>, AppError> {
        let predictions = self.predictions.read().await;
        Ok(predictions
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_prediction(
        &self,
        user_id: Uuid,
        prediction_id: Uuid,
    ) -> Result<Option<PredictionRecord>, AppError> {
        let predictions = self.predictions.read().await;
        Ok(predictions
            .iter()
            .find(|p| p.id == prediction_id && p.user_id == user_id)
            .cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
