use std::sync::Arc;

use chrono_tz::Tz;
use thiserror::Error;

use remindly_models::{reminder::ReminderId, user::UserId};
use remindly_storage::{DefaultRecipientPreference, ReminderStorage, ReminderStorageError};

use crate::{
    draft::Draft,
    filter::Filter,
    state::{AppEvent, AppState},
    validation::{ValidationError, prepare_submission},
    view::{ReminderView, visible_views},
};

const SAVE_FAILED: &str = "Failed to save reminder";
const DELETE_FAILED: &str = "Failed to delete reminder";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No reminder is being edited.")]
    NoDraft,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Network error: Failed to save reminder")]
    Network(#[source] ReminderStorageError),

    /// Carries the store's own message.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Network error: Failed to delete reminder")]
    Network(#[source] ReminderStorageError),

    #[error("{0}")]
    Rejected(String),
}

/// Owns the application state and keeps it in sync with the reminder store.
pub struct ReminderController {
    storage: Arc<dyn ReminderStorage>,
    default_recipients: DefaultRecipientPreference,
    user_id: UserId,
    timezone: Tz,
    state: AppState,
}

impl ReminderController {
    pub fn new(
        storage: Arc<dyn ReminderStorage>,
        default_recipients: DefaultRecipientPreference,
        user_id: UserId,
        timezone: Tz,
    ) -> Self {
        Self {
            storage,
            default_recipients,
            user_id,
            timezone,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn views(&self) -> Vec<ReminderView<'_>> {
        visible_views(&self.state, self.timezone)
    }

    fn dispatch(&mut self, event: AppEvent) {
        log::debug!("Applying {event:?}");
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Reloads the whole list. On any failure the list becomes empty.
    pub async fn refresh(&mut self) {
        match self.storage.list(&self.user_id).await {
            Ok(reminders) => {
                log::debug!("Fetched {} reminders", reminders.len());
                self.dispatch(AppEvent::RemindersLoaded(reminders));
            }
            Err(error) => {
                log::error!("Failed to fetch reminders: {error}");
                self.dispatch(AppEvent::RemindersUnavailable);
            }
        }
    }

    /// Re-reads a single reminder, e.g. to pick up a new delivery status.
    pub async fn refresh_reminder(&mut self, id: &ReminderId) -> Result<(), ReminderStorageError> {
        match self.storage.get(&self.user_id, id).await? {
            Some(reminder) => self.dispatch(AppEvent::ReminderRefreshed(reminder)),
            None => {
                log::info!("Reminder {id} no longer exists");
                self.dispatch(AppEvent::ReminderRemoved(id.clone()));
            }
        }
        Ok(())
    }

    pub async fn start_new_reminder(&mut self) {
        let default_recipients = self.default_recipients.get().await;
        self.dispatch(AppEvent::DraftOpened(Draft::new(
            self.timezone,
            default_recipients,
        )));
    }

    /// Opens a draft for a reminder in the local list. Returns `false` if it is not there.
    pub fn start_editing(&mut self, id: &ReminderId) -> bool {
        let Some(reminder) = self.state.reminders.iter().find(|r| &r.id == id) else {
            log::warn!("Cannot edit unknown reminder {id}");
            return false;
        };

        let draft = Draft::from_reminder(reminder, self.timezone);
        self.dispatch(AppEvent::DraftOpened(draft));
        true
    }

    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut Draft)) {
        if let Some(mut draft) = self.state.draft.clone() {
            edit(&mut draft);
            self.dispatch(AppEvent::DraftEdited(draft));
        }
    }

    pub fn cancel_draft(&mut self) {
        self.dispatch(AppEvent::DraftClosed);
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.dispatch(AppEvent::FilterSelected(filter));
    }

    pub async fn save_default_recipients(&self, value: &str) {
        self.default_recipients.set(value).await;
    }

    /// Creates or updates the reminder described by the open draft.
    ///
    /// Invalid drafts never reach the store. On failure the draft stays open unchanged.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let (id, payload) = {
            let draft = self.state.draft.as_ref().ok_or(SubmitError::NoDraft)?;
            (draft.id.clone(), prepare_submission(draft)?)
        };

        self.dispatch(AppEvent::SubmitStarted);
        let result = match &id {
            Some(id) => self.storage.update(&self.user_id, id, payload).await,
            None => self.storage.create(&self.user_id, payload).await,
        };

        match result {
            Ok(reminder) => {
                log::info!("Saved reminder {}", reminder.id);
                self.dispatch(AppEvent::SubmitSucceeded);
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                self.dispatch(AppEvent::SubmitFailed);
                Err(match error {
                    ReminderStorageError::Rejected { status, message } => {
                        log::error!("Reminder rejected with status {status}: {message:?}");
                        SubmitError::Rejected(message.unwrap_or_else(|| SAVE_FAILED.to_string()))
                    }
                    other => {
                        log::error!("Error saving reminder: {other}");
                        SubmitError::Network(other)
                    }
                })
            }
        }
    }

    /// Deletes a reminder and drops it from the local list without re-fetching.
    pub async fn delete(&mut self, id: &ReminderId) -> Result<(), DeleteError> {
        match self.storage.delete(&self.user_id, id).await {
            Ok(()) => {}
            Err(error) if error.is_not_found() => {
                log::warn!("Reminder {id} was already deleted");
            }
            Err(ReminderStorageError::Rejected { status, message }) => {
                log::error!("Deleting reminder {id} rejected with status {status}: {message:?}");
                return Err(DeleteError::Rejected(
                    message.unwrap_or_else(|| DELETE_FAILED.to_string()),
                ));
            }
            Err(error) => {
                log::error!("Error deleting reminder {id}: {error}");
                return Err(DeleteError::Network(error));
            }
        }

        self.dispatch(AppEvent::ReminderRemoved(id.clone()));
        Ok(())
    }
}
