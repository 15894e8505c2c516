use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use remindly_models::{
    reminder::{NotificationChannel, Reminder, ReminderId},
    user::UserId,
};

/// Fields submitted when creating or updating a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPayload {
    pub title: String,
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    pub channel: NotificationChannel,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Error)]
pub enum ReminderStorageError {
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ReminderStorageError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected { status: 404, .. })
    }

    /// Message the store attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// CRUD access to one user's partition of the reminder store.
#[async_trait]
pub trait ReminderStorage: Send + Sync {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Reminder>, ReminderStorageError>;

    async fn get(
        &self,
        user_id: &UserId,
        id: &ReminderId,
    ) -> Result<Option<Reminder>, ReminderStorageError>;

    async fn create(
        &self,
        user_id: &UserId,
        reminder: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError>;

    async fn update(
        &self,
        user_id: &UserId,
        id: &ReminderId,
        reminder: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError>;

    async fn delete(&self, user_id: &UserId, id: &ReminderId) -> Result<(), ReminderStorageError>;
}
