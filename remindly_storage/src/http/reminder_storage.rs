mod model;

use async_trait::async_trait;
use model::{ErrorResponseModel, ReminderRequestModel, ReminderResponseModel};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use remindly_models::{
    reminder::{Reminder, ReminderId},
    user::UserId,
};

use crate::reminder::{ReminderPayload, ReminderStorage, ReminderStorageError};

const USER_ID_HEADER: &str = "X-User-ID";

/// Reminder store reached over the reminder service REST API.
pub struct HttpReminderStorage {
    client: Client,
    base_url: String,
}

impl HttpReminderStorage {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn reminders_url(&self) -> String {
        format!("{}/reminders", self.base_url)
    }

    fn reminder_url(&self, id: &ReminderId) -> String {
        format!("{}/reminders/{}", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ReminderStorageError> {
        let response = request
            .send()
            .await
            .map_err(|e| ReminderStorageError::Transport(Box::new(e)))?;

        log::debug!("{} {}", response.status(), response.url());

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::read_rejection(response).await)
        }
    }

    async fn read_rejection(response: Response) -> ReminderStorageError {
        let status = response.status();
        let message = response
            .json::<ErrorResponseModel>()
            .await
            .ok()
            .and_then(|body| body.error);

        ReminderStorageError::Rejected {
            status: status.as_u16(),
            message,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ReminderStorageError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ReminderStorageError::MalformedResponse(e.to_string()))
    }

    fn into_reminder(model: ReminderResponseModel) -> Result<Reminder, ReminderStorageError> {
        Reminder::try_from(model).map_err(|e| ReminderStorageError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl ReminderStorage for HttpReminderStorage {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Reminder>, ReminderStorageError> {
        let request = self
            .client
            .get(self.reminders_url())
            .query(&[("user_id", user_id)]);
        let response = self.send(request).await?;
        let records: Option<Vec<serde_json::Value>> = Self::read_json(response).await?;

        let reminders = records
            .unwrap_or_default()
            .into_iter()
            .filter_map(|record| {
                let id = record
                    .get("id")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("<no id>")
                    .to_string();
                let model = match serde_json::from_value::<ReminderResponseModel>(record) {
                    Ok(model) => model,
                    Err(error) => {
                        log::warn!("Skipping unreadable reminder {id}: {error}");
                        return None;
                    }
                };
                match Reminder::try_from(model) {
                    Ok(reminder) => Some(reminder),
                    Err(error) => {
                        log::warn!("Skipping reminder {id}: {error}");
                        None
                    }
                }
            })
            .collect();

        Ok(reminders)
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: &ReminderId,
    ) -> Result<Option<Reminder>, ReminderStorageError> {
        let request = self
            .client
            .get(self.reminder_url(id))
            .query(&[("user_id", user_id)]);

        match self.send(request).await {
            Ok(response) => {
                let model = Self::read_json(response).await?;
                Self::into_reminder(model).map(Some)
            }
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn create(
        &self,
        user_id: &UserId,
        reminder: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError> {
        let request = self
            .client
            .post(self.reminders_url())
            .header(USER_ID_HEADER, user_id)
            .json(&ReminderRequestModel::from(&reminder));
        let response = self.send(request).await?;

        let created = Self::into_reminder(Self::read_json(response).await?)?;
        log::info!("Created reminder {}", created.id);
        Ok(created)
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: &ReminderId,
        reminder: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError> {
        let request = self
            .client
            .put(self.reminder_url(id))
            .header(USER_ID_HEADER, user_id)
            .json(&ReminderRequestModel::from(&reminder));
        let response = self.send(request).await?;

        let updated = Self::into_reminder(Self::read_json(response).await?)?;
        log::info!("Updated reminder {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, user_id: &UserId, id: &ReminderId) -> Result<(), ReminderStorageError> {
        let request = self
            .client
            .delete(self.reminder_url(id))
            .query(&[("user_id", user_id)]);
        self.send(request).await?;

        log::info!("Deleted reminder {id}");
        Ok(())
    }
}
