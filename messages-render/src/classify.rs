use messages_core::{Classification, Message, Severity, SeverityCode};

/// Map a stored severity label onto the canonical severities, checked in
/// the order info, warn, error, fatal.
pub fn classify_code(code: &SeverityCode) -> Classification {
    Severity::ALL
        .into_iter()
        .find(|severity| severity.as_str() == code.as_str())
        .map_or(Classification::Unrecognized, Classification::Recognized)
}

pub fn classify(message: &Message) -> Classification {
    classify_code(&message.severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_are_recognized() {
        for severity in Severity::ALL {
            assert_eq!(
                classify_code(&SeverityCode::from(severity)),
                Classification::Recognized(severity)
            );
        }
    }

    #[test]
    fn labels_are_matched_exactly() {
        for label in ["", "ERROR", "warning", " info", "debug"] {
            assert_eq!(
                classify_code(&SeverityCode::new(label)),
                Classification::Unrecognized,
                "label {label:?}"
            );
        }
    }
}
