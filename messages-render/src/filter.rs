//! Per-message admission policy.

use messages_core::{Message, Severity, WidgetConfig};

/// Decides whether a classified message is actually rendered.
pub trait RenderFilter {
    fn should_render(&self, config: &WidgetConfig, message: &Message, severity: Severity) -> bool;

    /// Client-facing name of the configured severity filter.
    fn client_severity(&self, config: &WidgetConfig) -> String;
}

/// Default policy driven by the widget's `severity` list and `redisplay` flag.
///
/// The list holds severity names separated by commas or whitespace. An
/// absent or blank list admits every severity. A message that was already
/// displayed earlier in the request is refused unless `redisplay` is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityFilter;

impl SeverityFilter {
    fn allowed(config: &WidgetConfig) -> Option<Vec<Severity>> {
        let list = config.severity.as_deref()?;
        if list.trim().is_empty() {
            return None;
        }

        let named: Vec<&str> = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        Some(
            Severity::ALL
                .into_iter()
                .filter(|severity| named.contains(&severity.as_str()))
                .collect(),
        )
    }
}

impl RenderFilter for SeverityFilter {
    fn should_render(&self, config: &WidgetConfig, message: &Message, severity: Severity) -> bool {
        let admitted = Self::allowed(config).map_or(true, |allowed| allowed.contains(&severity));
        admitted && (config.redisplay || !message.consumed)
    }

    fn client_severity(&self, config: &WidgetConfig) -> String {
        match Self::allowed(config) {
            Some(allowed) => allowed
                .iter()
                .map(|severity| severity.as_str())
                .collect::<Vec<_>>()
                .join(","),
            None => "all".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use messages_core::MessageId;

    use super::*;

    fn config_with(severity: Option<&str>) -> WidgetConfig {
        WidgetConfig {
            severity: severity.map(str::to_string),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn unset_list_admits_everything() {
        let config = config_with(None);
        let message = Message::new(MessageId(0), Severity::Fatal, "boom");
        assert!(Severity::ALL
            .into_iter()
            .all(|severity| SeverityFilter.should_render(&config, &message, severity)));
        assert_eq!(SeverityFilter.client_severity(&config), "all");
    }

    #[test]
    fn list_restricts_and_normalizes() {
        let config = config_with(Some(" error, warn  bogus"));
        let message = Message::new(MessageId(0), Severity::Warn, "careful");

        assert!(SeverityFilter.should_render(&config, &message, Severity::Warn));
        assert!(SeverityFilter.should_render(&config, &message, Severity::Error));
        assert!(!SeverityFilter.should_render(&config, &message, Severity::Info));
        assert_eq!(SeverityFilter.client_severity(&config), "warn,error");
    }

    #[test]
    fn consumed_message_needs_redisplay() {
        let mut config = config_with(None);
        let mut message = Message::new(MessageId(3), Severity::Info, "saved");
        message.consumed = true;

        assert!(SeverityFilter.should_render(&config, &message, Severity::Info));
        config.redisplay = false;
        assert!(!SeverityFilter.should_render(&config, &message, Severity::Info));
    }
}
