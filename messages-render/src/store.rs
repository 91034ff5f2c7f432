//! Request-scoped message store seam and an in-memory implementation.

use std::collections::HashSet;

use messages_core::{Message, MessageId, SeverityCode};

/// Lookup supported by a message store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    /// Every message of the request, whatever its target.
    All,
    /// Messages with no target.
    Global,
    /// Messages attached to the given target identifier.
    Target(&'q str),
}

/// Lazy, single-pass sequence of store lookup results.
pub type MessageIter<'a> = Box<dyn Iterator<Item = &'a Message> + 'a>;

pub trait MessageStore {
    /// Runs a lookup. Results come back in store order.
    fn messages(&self, query: Query<'_>) -> MessageIter<'_>;

    /// Records that these messages were displayed during the current pass.
    fn acknowledge(&mut self, displayed: &[MessageId]);
}

#[derive(Debug, Clone)]
struct StoredMessage {
    target: Option<String>,
    message: Message,
}

/// Insertion-ordered store holding the messages of a single request.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Vec<StoredMessage>,
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message and returns the identifier the store assigned to it.
    pub fn push(
        &mut self,
        target: Option<&str>,
        severity: impl Into<SeverityCode>,
        summary: impl Into<String>,
        detail: Option<&str>,
    ) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;

        let mut message = Message::new(id, severity, summary);
        message.detail = detail.map(str::to_string);

        self.entries.push(StoredMessage {
            target: target.map(str::to_string),
            message,
        });
        id
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.entries
            .iter()
            .map(|entry| &entry.message)
            .find(|message| message.id == id)
    }

    pub fn is_consumed(&self, id: MessageId) -> bool {
        self.get(id).is_some_and(|message| message.consumed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageStore for InMemoryStore {
    fn messages(&self, query: Query<'_>) -> MessageIter<'_> {
        match query {
            Query::All => Box::new(self.entries.iter().map(|entry| &entry.message)),
            Query::Global => Box::new(
                self.entries
                    .iter()
                    .filter(|entry| entry.target.is_none())
                    .map(|entry| &entry.message),
            ),
            Query::Target(target) => {
                let target = target.to_string();
                Box::new(
                    self.entries
                        .iter()
                        .filter(move |entry| entry.target.as_deref() == Some(target.as_str()))
                        .map(|entry| &entry.message),
                )
            }
        }
    }

    fn acknowledge(&mut self, displayed: &[MessageId]) {
        let displayed: HashSet<MessageId> = displayed.iter().copied().collect();
        for entry in &mut self.entries {
            if displayed.contains(&entry.message.id) {
                entry.message.consumed = true;
            }
        }
    }
}
