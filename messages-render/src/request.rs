//! JSON request documents: a widget config plus the request's messages.

use std::collections::HashMap;

use messages_core::{MessagesError, RenderReceipt, SeverityCode, WidgetConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{InMemoryStore, MessageStore};
use crate::{MessagesRenderer, RenderEnvironment};

/// Everything needed to render one widget outside a live request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub config: WidgetConfig,
    pub messages: Vec<MessageRecord>,
    /// Target references and the widget identifiers they resolve to.
    pub targets: HashMap<String, String>,
    #[serde(flatten)]
    pub environment: RenderEnvironment,
}

/// A message as listed in a request document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub target: Option<String>,
    pub severity: SeverityCode,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detail: Option<String>,
    /// Already displayed earlier in the request.
    #[serde(default)]
    pub consumed: bool,
}

/// Markup plus the receipt of what it displayed.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedMessages {
    pub html: String,
    pub receipt: RenderReceipt,
}

impl RenderRequest {
    /// Build a store holding the listed messages in document order.
    pub fn store(&self) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for record in &self.messages {
            let id = store.push(
                record.target.as_deref(),
                record.severity.clone(),
                record.summary.clone(),
                record.detail.as_deref(),
            );
            if record.consumed {
                store.acknowledge(&[id]);
            }
        }
        store
    }
}

/// Render a request document given as a JSON string.
pub fn render_request_str(request_json: &str) -> Result<RenderedMessages, MessagesError> {
    let value: Value =
        serde_json::from_str(request_json).map_err(|err| MessagesError::Parse(err.to_string()))?;
    render_request_value(&value)
}

/// Render a request document given as a `serde_json::Value`.
pub fn render_request_value(request: &Value) -> Result<RenderedMessages, MessagesError> {
    let request =
        RenderRequest::deserialize(request).map_err(|err| MessagesError::Parse(err.to_string()))?;
    render_request(&request)
}

pub fn render_request(request: &RenderRequest) -> Result<RenderedMessages, MessagesError> {
    let store = request.store();
    let (html, receipt) = MessagesRenderer::new(&request.config)
        .with_environment(request.environment)
        .with_resolver(&request.targets)
        .render_to_string(&store)?;
    Ok(RenderedMessages { html, receipt })
}
