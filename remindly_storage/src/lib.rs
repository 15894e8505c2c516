pub mod http;
mod in_memory;
mod preferences;
mod reminder;

pub use in_memory::InMemoryReminderStorage;
pub use preferences::{
    DEFAULT_RECIPIENTS_KEY, DefaultRecipientPreference, InMemoryPreferenceStore,
    JsonFilePreferenceStore, PreferenceStore,
};
pub use reminder::{ReminderPayload, ReminderStorage, ReminderStorageError};
