use thiserror::Error;

use remindly_models::{
    recipients::{invalid_recipients, parse_recipients, render_recipients},
    reminder::NotificationChannel,
};
use remindly_storage::ReminderPayload;

use crate::draft::Draft;

/// The first reason a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title.")]
    MissingTitle,

    #[error("Please choose a date and time.")]
    MissingDateTime,

    #[error("\"{0}\" is not a valid date and time.")]
    InvalidDateTime(String),

    #[error("Please enter at least one email address.")]
    MissingRecipients,

    #[error("Invalid email address(es): {}", .0.join(", "))]
    InvalidRecipients(Vec<String>),

    #[error("Please enter a phone number.")]
    MissingPhone,
}

/// Checks a draft without touching it. Checks run in a fixed order and the first failure wins.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    prepare_submission(draft).map(|_| ())
}

/// Validates the draft and builds what is sent to the store.
///
/// This is the only place where the local date/time input becomes an absolute instant.
pub fn prepare_submission(draft: &Draft) -> Result<ReminderPayload, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    if draft.datetime.trim().is_empty() {
        return Err(ValidationError::MissingDateTime);
    }
    let scheduled_at = draft
        .scheduled_at()
        .ok_or_else(|| ValidationError::InvalidDateTime(draft.datetime.trim().to_string()))?;

    let recipients = parse_recipients(&draft.email);
    match draft.channel {
        NotificationChannel::Email => {
            if recipients.is_empty() {
                return Err(ValidationError::MissingRecipients);
            }
            let invalid = invalid_recipients(&recipients);
            if !invalid.is_empty() {
                return Err(ValidationError::InvalidRecipients(invalid));
            }
        }
        NotificationChannel::Sms => {
            if draft.phone.trim().is_empty() {
                return Err(ValidationError::MissingPhone);
            }
        }
    }

    Ok(ReminderPayload {
        title: title.to_string(),
        description: draft.description.clone(),
        scheduled_at,
        channel: draft.channel,
        email: render_recipients(&recipients),
        phone: draft.phone.trim().to_string(),
    })
}
