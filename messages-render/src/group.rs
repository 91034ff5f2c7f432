//! Buckets admitted messages by canonical severity.

use messages_core::{Classification, Message, Severity, WidgetConfig};
use tracing::debug;

use crate::classify::classify;
use crate::filter::RenderFilter;

/// Admitted messages per severity. Iteration always follows `Severity::ALL`
/// and skips empty buckets.
#[derive(Debug, Default)]
pub struct SeverityGroups<'a> {
    buckets: [Vec<&'a Message>; 4],
}

impl<'a> SeverityGroups<'a> {
    pub fn push(&mut self, severity: Severity, message: &'a Message) {
        self.buckets[severity.index()].push(message);
    }

    pub fn get(&self, severity: Severity) -> &[&'a Message] {
        &self.buckets[severity.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, &[&'a Message])> + '_ {
        Severity::ALL.into_iter().filter_map(move |severity| {
            let bucket = &self.buckets[severity.index()];
            (!bucket.is_empty()).then_some((severity, bucket.as_slice()))
        })
    }

    /// Number of severities with at least one message.
    pub fn len(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn message_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Classify each message, ask the filter once, and keep the admitted ones.
pub fn group_by_severity<'a, I>(
    config: &WidgetConfig,
    messages: I,
    filter: &dyn RenderFilter,
) -> SeverityGroups<'a>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut groups = SeverityGroups::default();

    for message in messages {
        match classify(message) {
            Classification::Recognized(severity) => {
                if filter.should_render(config, message, severity) {
                    groups.push(severity, message);
                } else {
                    debug!(id = %message.id, %severity, "message filtered out");
                }
            }
            Classification::Unrecognized => {
                debug!(
                    id = %message.id,
                    severity = message.severity.as_str(),
                    "dropping message with unrecognized severity"
                );
            }
        }
    }

    groups
}
