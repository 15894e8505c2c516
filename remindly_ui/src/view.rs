use chrono_tz::Tz;

use remindly_models::{
    reminder::{DeliveryTarget, Reminder},
    status::DeliveryStatus,
};

use crate::state::AppState;

pub const EMPTY_LIST_TITLE: &str = "No reminders yet";
pub const EMPTY_LIST_HINT: &str = "Create your first reminder to get started!";

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// A reminder annotated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderView<'a> {
    pub reminder: &'a Reminder,
    pub scheduled_at: String,
    pub target: DeliveryTarget,
    pub status: DeliveryStatus,
}

impl<'a> ReminderView<'a> {
    pub fn new(reminder: &'a Reminder, timezone: Tz) -> Self {
        Self {
            reminder,
            scheduled_at: reminder
                .scheduled_at
                .with_timezone(&timezone)
                .format(DISPLAY_FORMAT)
                .to_string(),
            target: reminder.target(),
            status: reminder.status,
        }
    }
}

pub fn visible_views(state: &AppState, timezone: Tz) -> Vec<ReminderView<'_>> {
    state
        .visible_reminders()
        .into_iter()
        .map(|reminder| ReminderView::new(reminder, timezone))
        .collect()
}
