mod reminder_storage;

pub use reminder_storage::HttpReminderStorage;
