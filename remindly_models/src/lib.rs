pub mod recipients;
pub mod reminder;
pub mod settings;
pub mod status;
pub mod user;
