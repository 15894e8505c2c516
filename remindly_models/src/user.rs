/// Opaque identifier of the user whose partition of the reminder store is used.
pub type UserId = String;
