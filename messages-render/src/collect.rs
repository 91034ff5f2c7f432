//! Chooses which store lookups a widget runs and merges their results.

use std::collections::HashSet;

use messages_core::{ForType, Message, MessageId, WidgetConfig};
use tracing::debug;

use crate::resolve::TargetResolver;
use crate::store::{MessageStore, Query};

/// Collect the messages a widget displays, in store order and without duplicates.
///
/// Without `for`, the widget reads every message (or only global ones when
/// `globalOnly` is set). With `for`, an unset `forType` runs both the literal
/// key lookup and the resolved-expression lookup and merges them by identity.
pub fn collect_messages<'s, S>(
    config: &WidgetConfig,
    store: &'s S,
    resolver: &dyn TargetResolver,
) -> Vec<&'s Message>
where
    S: MessageStore + ?Sized,
{
    let Some(target) = config.target() else {
        let query = if config.global_only {
            Query::Global
        } else {
            Query::All
        };
        let messages: Vec<&Message> = store.messages(query).collect();
        debug!(?query, hits = messages.len(), "collected messages");
        return messages;
    };

    let mut messages = Vec::new();

    if matches!(config.for_type, None | Some(ForType::Key)) {
        messages.extend(store.messages(Query::Target(target)));
        debug!(reference = target, hits = messages.len(), "collected messages by key");
    }

    if matches!(config.for_type, None | Some(ForType::Expression)) {
        match resolver.resolve(target) {
            Some(resolved) if resolved != target => {
                let before = messages.len();
                let mut seen: HashSet<MessageId> =
                    messages.iter().map(|message| message.id).collect();
                for message in store.messages(Query::Target(&resolved)) {
                    if seen.insert(message.id) {
                        messages.push(message);
                    }
                }
                debug!(
                    reference = target,
                    resolved = resolved.as_str(),
                    hits = messages.len() - before,
                    "collected messages by expression"
                );
            }
            Some(_) => debug!(reference = target, "expression resolves to the key itself"),
            None => debug!(reference = target, "target reference did not resolve"),
        }
    }

    messages
}
