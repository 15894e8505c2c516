use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use remindly_models::{
    reminder::{Reminder, ReminderId},
    status::DeliveryStatus,
    user::UserId,
};

use crate::reminder::{ReminderPayload, ReminderStorage, ReminderStorageError};

type UserReminders = HashMap<UserId, Vec<Reminder>>;

/// Process-local store, used for offline runs and tests.
pub struct InMemoryReminderStorage {
    store: RwLock<(u64, UserReminders)>,
}

impl InMemoryReminderStorage {
    pub fn new() -> Self {
        InMemoryReminderStorage {
            store: RwLock::new((0, HashMap::new())),
        }
    }

    /// Overrides the delivery status, the way the scheduler does it remotely.
    pub async fn set_status(&self, id: &ReminderId, status: DeliveryStatus) -> bool {
        let mut store = self.store.write().await;
        let found = store
            .1
            .values_mut()
            .flat_map(|reminders| reminders.iter_mut())
            .find(|reminder| &reminder.id == id);

        match found {
            Some(reminder) => {
                reminder.status = status;
                true
            }
            None => false,
        }
    }
}

impl Default for InMemoryReminderStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> ReminderStorageError {
    ReminderStorageError::rejected(404, "Reminder not found")
}

fn apply_payload(reminder: &mut Reminder, payload: ReminderPayload) {
    reminder.title = payload.title;
    reminder.description = Some(payload.description).filter(|d| !d.is_empty());
    reminder.scheduled_at = payload.scheduled_at;
    reminder.channel = payload.channel;
    reminder.email = payload.email;
    reminder.phone = payload.phone;
}

#[async_trait]
impl ReminderStorage for InMemoryReminderStorage {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Reminder>, ReminderStorageError> {
        let store = self.store.read().await;
        let mut reminders = store.1.get(user_id).cloned().unwrap_or_default();
        reminders.sort_by_key(|reminder| reminder.scheduled_at);
        Ok(reminders)
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: &ReminderId,
    ) -> Result<Option<Reminder>, ReminderStorageError> {
        let store = self.store.read().await;
        Ok(store
            .1
            .get(user_id)
            .and_then(|reminders| reminders.iter().find(|reminder| &reminder.id == id))
            .cloned())
    }

    async fn create(
        &self,
        user_id: &UserId,
        payload: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError> {
        let mut store = self.store.write().await;
        store.0 += 1;
        let mut reminder = Reminder {
            id: format!("reminder-{}", store.0),
            title: String::new(),
            description: None,
            scheduled_at: payload.scheduled_at,
            channel: payload.channel,
            email: String::new(),
            phone: String::new(),
            status: DeliveryStatus::Pending,
        };
        apply_payload(&mut reminder, payload);

        store
            .1
            .entry(user_id.clone())
            .or_default()
            .push(reminder.clone());

        log::info!("Stored reminder {} for user {}", reminder.id, user_id);
        Ok(reminder)
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: &ReminderId,
        payload: ReminderPayload,
    ) -> Result<Reminder, ReminderStorageError> {
        let mut store = self.store.write().await;
        let reminder = store
            .1
            .get_mut(user_id)
            .and_then(|reminders| reminders.iter_mut().find(|reminder| &reminder.id == id))
            .ok_or_else(not_found)?;

        apply_payload(reminder, payload);
        Ok(reminder.clone())
    }

    async fn delete(&self, user_id: &UserId, id: &ReminderId) -> Result<(), ReminderStorageError> {
        let mut store = self.store.write().await;
        let reminders = store.1.get_mut(user_id).ok_or_else(not_found)?;
        let before = reminders.len();
        reminders.retain(|reminder| &reminder.id != id);

        if reminders.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
