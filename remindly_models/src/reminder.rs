use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    recipients::{RecipientCandidate, parse_recipients},
    status::DeliveryStatus,
};

pub type ReminderId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
}

impl NotificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown notification channel `{0}`")]
pub struct UnknownChannel(pub String);

impl FromStr for NotificationChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}

/// Who a reminder is delivered to on its current channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    Email(Vec<RecipientCandidate>),
    Sms(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub channel: NotificationChannel,
    /// Raw recipient list as stored. Only meaningful when `channel` is email.
    pub email: String,
    /// Only meaningful when `channel` is sms.
    pub phone: String,
    pub status: DeliveryStatus,
}

impl Reminder {
    /// Recipients selected by the current channel. Leftovers of the other channel are ignored.
    pub fn target(&self) -> DeliveryTarget {
        match self.channel {
            NotificationChannel::Email => DeliveryTarget::Email(parse_recipients(&self.email)),
            NotificationChannel::Sms => DeliveryTarget::Sms(self.phone.trim().to_string()),
        }
    }
}
