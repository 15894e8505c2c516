/// Display state of a reminder's notification, as reported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeliveryStatus {
    Sent,
    Pending,
    Processing,
    Failed,
    #[default]
    Unknown,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Sent,
        DeliveryStatus::Pending,
        DeliveryStatus::Processing,
        DeliveryStatus::Failed,
        DeliveryStatus::Unknown,
    ];

    /// Maps a raw status reported by the store onto a display state.
    ///
    /// Matching ignores case and surrounding whitespace. Anything unrecognised,
    /// including a missing value, resolves to [`DeliveryStatus::Unknown`].
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return DeliveryStatus::Unknown;
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "sent" => DeliveryStatus::Sent,
            "pending" => DeliveryStatus::Pending,
            "processing" => DeliveryStatus::Processing,
            "failed" => DeliveryStatus::Failed,
            _ => DeliveryStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Pending => "Scheduled",
            DeliveryStatus::Processing => "Sending",
            DeliveryStatus::Failed => "Failed",
            DeliveryStatus::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "The notification has been delivered.",
            DeliveryStatus::Pending => "Waiting for the scheduled time.",
            DeliveryStatus::Processing => "The notification is being delivered right now.",
            DeliveryStatus::Failed => "The notification could not be delivered.",
            DeliveryStatus::Unknown => "Delivery status is not available.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_classified_ignoring_case() {
        assert_eq!(DeliveryStatus::classify(Some("sent")), DeliveryStatus::Sent);
        assert_eq!(DeliveryStatus::classify(Some("PENDING")), DeliveryStatus::Pending);
        assert_eq!(
            DeliveryStatus::classify(Some(" Processing ")),
            DeliveryStatus::Processing
        );
        assert_eq!(DeliveryStatus::classify(Some("Failed")), DeliveryStatus::Failed);
    }

    #[test]
    fn missing_or_garbage_status_is_unknown() {
        assert_eq!(DeliveryStatus::classify(None), DeliveryStatus::Unknown);
        assert_eq!(DeliveryStatus::classify(Some("")), DeliveryStatus::Unknown);
        assert_eq!(DeliveryStatus::classify(Some("delivered")), DeliveryStatus::Unknown);
    }

    #[test]
    fn every_state_has_label_and_description() {
        for status in DeliveryStatus::ALL {
            assert!(!status.label().is_empty());
            assert!(!status.description().is_empty());
        }
    }

    proptest::proptest! {
        #[test]
        fn classify_is_total(raw in proptest::option::of(".*")) {
            let status = DeliveryStatus::classify(raw.as_deref());
            proptest::prop_assert!(DeliveryStatus::ALL.contains(&status));
        }
    }
}
