use std::str::FromStr;

use thiserror::Error;

use remindly_models::reminder::{NotificationChannel, Reminder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Email,
    Sms,
}

impl Filter {
    pub fn matches(&self, reminder: &Reminder) -> bool {
        match self {
            Filter::All => true,
            Filter::Email => reminder.channel == NotificationChannel::Email,
            Filter::Sms => reminder.channel == NotificationChannel::Sms,
        }
    }

    pub fn apply<'a>(&self, reminders: &'a [Reminder]) -> Vec<&'a Reminder> {
        reminders.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter `{0}`, expected one of: all, email, sms")]
pub struct UnknownFilter(String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "email" => Ok(Filter::Email),
            "sms" => Ok(Filter::Sms),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}
