mod controller;
mod draft;
mod filter;
mod state;
mod validation;
mod view;

#[cfg(test)]
mod tests;

pub use controller::{DeleteError, ReminderController, SubmitError};
pub use draft::{Draft, LOCAL_INPUT_FORMAT, parse_local_input, to_local_input};
pub use filter::{Filter, UnknownFilter};
pub use state::{AppEvent, AppState};
pub use validation::{ValidationError, prepare_submission, validate};
pub use view::{EMPTY_LIST_HINT, EMPTY_LIST_TITLE, ReminderView, visible_views};
