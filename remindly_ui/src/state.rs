use remindly_models::reminder::{Reminder, ReminderId};

use crate::{draft::Draft, filter::Filter};

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub reminders: Vec<Reminder>,
    pub draft: Option<Draft>,
    pub filter: Filter,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RemindersLoaded(Vec<Reminder>),
    RemindersUnavailable,
    ReminderRefreshed(Reminder),
    ReminderRemoved(ReminderId),
    DraftOpened(Draft),
    DraftEdited(Draft),
    DraftClosed,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
    FilterSelected(Filter),
}

impl AppState {
    pub fn apply(self, event: AppEvent) -> Self {
        match event {
            AppEvent::RemindersLoaded(reminders) => Self { reminders, ..self },
            AppEvent::RemindersUnavailable => Self {
                reminders: Vec::new(),
                ..self
            },
            AppEvent::ReminderRefreshed(reminder) => {
                let mut reminders = self.reminders;
                match reminders.iter_mut().find(|r| r.id == reminder.id) {
                    Some(existing) => *existing = reminder,
                    None => reminders.push(reminder),
                }
                Self { reminders, ..self }
            }
            AppEvent::ReminderRemoved(id) => {
                let mut reminders = self.reminders;
                reminders.retain(|r| r.id != id);
                Self { reminders, ..self }
            }
            AppEvent::DraftOpened(draft) => Self {
                draft: Some(draft),
                submitting: false,
                ..self
            },
            // Edits only land while a draft is open.
            AppEvent::DraftEdited(draft) => match self.draft {
                Some(_) => Self {
                    draft: Some(draft),
                    ..self
                },
                None => self,
            },
            AppEvent::DraftClosed | AppEvent::SubmitSucceeded => Self {
                draft: None,
                submitting: false,
                ..self
            },
            AppEvent::SubmitStarted => Self {
                submitting: true,
                ..self
            },
            AppEvent::SubmitFailed => Self {
                submitting: false,
                ..self
            },
            AppEvent::FilterSelected(filter) => Self { filter, ..self },
        }
    }

    pub fn visible_reminders(&self) -> Vec<&Reminder> {
        self.filter.apply(&self.reminders)
    }
}
