use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use remindly_models::{
    reminder::{NotificationChannel, Reminder, UnknownChannel},
    status::DeliveryStatus,
};

use crate::reminder::ReminderPayload;

#[derive(Debug, Serialize)]
pub struct ReminderRequestModel<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub datetime: String,
    pub notification_type: NotificationChannel,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a ReminderPayload> for ReminderRequestModel<'a> {
    fn from(value: &'a ReminderPayload) -> Self {
        Self {
            title: &value.title,
            description: &value.description,
            datetime: value.scheduled_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            notification_type: value.channel,
            email: &value.email,
            phone: &value.phone,
        }
    }
}

/// Reminder record as returned by the store. Older deployments spell the
/// channel `notificationType`; both spellings are folded into one here.
#[derive(Debug, Deserialize)]
pub struct ReminderResponseModel {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default, rename = "notificationType")]
    pub legacy_notification_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponseModel {
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("reminder {0} has no notification type")]
    MissingChannel(String),

    #[error(transparent)]
    UnknownChannel(#[from] UnknownChannel),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<ReminderResponseModel> for Reminder {
    type Error = ModelError;

    fn try_from(value: ReminderResponseModel) -> Result<Self, Self::Error> {
        let channel = non_empty(value.notification_type)
            .or_else(|| non_empty(value.legacy_notification_type))
            .ok_or_else(|| ModelError::MissingChannel(value.id.clone()))?
            .parse::<NotificationChannel>()?;

        Ok(Self {
            id: value.id,
            title: value.title,
            description: non_empty(value.description),
            scheduled_at: value.datetime,
            channel,
            email: value.email.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
            status: DeliveryStatus::classify(value.status.as_deref()),
        })
    }
}
