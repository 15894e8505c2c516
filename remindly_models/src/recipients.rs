//! Parsing of free-form recipient lists such as `"a@b.com, c@d.com; e@f"`.

const SEPARATORS: [char; 2] = [',', ';'];

/// A single trimmed entry of a recipient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientCandidate {
    pub address: String,
    pub valid: bool,
}

impl RecipientCandidate {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let valid = is_valid_address(&address);
        Self { address, valid }
    }
}

/// Splits `raw` on commas and semicolons, trims every piece and drops the empty ones.
///
/// Entry order and duplicates are preserved.
pub fn parse_recipients(raw: &str) -> Vec<RecipientCandidate> {
    raw.split(SEPARATORS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(RecipientCandidate::new)
        .collect()
}

pub fn render_recipients(candidates: &[RecipientCandidate]) -> String {
    candidates
        .iter()
        .map(|candidate| candidate.address.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn invalid_recipients(candidates: &[RecipientCandidate]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| !candidate.valid)
        .map(|candidate| candidate.address.clone())
        .collect()
}

/// Permissive address shape check: one `@`, something before it, a `.` after it, no whitespace.
pub fn is_valid_address(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = candidate.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && domain.contains('.'),
        _ => false,
    }
}
