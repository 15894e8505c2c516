use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use remindly_models::reminder::{NotificationChannel, Reminder, ReminderId};

/// Wall-clock format used by the date/time input, minute precision.
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const LOCAL_INPUT_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// In-progress create or edit of a reminder, holding raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Set when editing an existing reminder.
    pub id: Option<ReminderId>,
    pub title: String,
    pub description: String,
    /// Local wall-clock time in [`LOCAL_INPUT_FORMAT`], interpreted in `timezone`.
    pub datetime: String,
    pub channel: NotificationChannel,
    pub email: String,
    pub phone: String,
    pub timezone: Tz,
}

impl Draft {
    /// Blank draft for a new reminder, prefilled with the default recipients.
    pub fn new(timezone: Tz, default_recipients: String) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            datetime: String::new(),
            channel: NotificationChannel::Email,
            email: default_recipients,
            phone: String::new(),
            timezone,
        }
    }

    pub fn from_reminder(reminder: &Reminder, timezone: Tz) -> Self {
        Self {
            id: Some(reminder.id.clone()),
            title: reminder.title.clone(),
            description: reminder.description.clone().unwrap_or_default(),
            datetime: to_local_input(&reminder.scheduled_at, timezone),
            channel: reminder.channel,
            email: reminder.email.clone(),
            phone: reminder.phone.clone(),
            timezone,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// The scheduled instant, if the local input can be resolved in the draft's timezone.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        parse_local_input(&self.datetime, self.timezone)
    }
}

/// Resolves a local wall-clock input to an absolute instant.
///
/// Times that fall into a DST gap do not exist and yield `None`; ambiguous
/// times resolve to the earlier instant.
pub fn parse_local_input(input: &str, timezone: Tz) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT_WITH_SECONDS))
        .ok()?;

    timezone
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

pub fn to_local_input(instant: &DateTime<Utc>, timezone: Tz) -> String {
    instant
        .with_timezone(&timezone)
        .format(LOCAL_INPUT_FORMAT)
        .to_string()
}
