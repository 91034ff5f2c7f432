//! Severity-grouped HTML rendering for a request's pending messages.
//!
//! One render pass collects the messages a widget is configured for,
//! classifies and filters them, groups them by severity and writes the
//! markup. The pass never mutates the store; it returns a
//! [`RenderReceipt`] naming the displayed messages, which the caller hands
//! back to the store (or lets [`MessagesRenderer::render_and_acknowledge`]
//! do it).

use std::io;

use messages_core::{MessagesError, RenderReceipt, WidgetConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod classify;
pub mod collect;
pub mod emit;
pub mod filter;
pub mod group;
pub mod markup;
pub mod request;
pub mod resolve;
pub mod store;

pub use classify::{classify, classify_code};
pub use collect::collect_messages;
pub use emit::{encode_close_icon, encode_messages};
pub use filter::{RenderFilter, SeverityFilter};
pub use group::{group_by_severity, SeverityGroups};
pub use markup::{escape_html, HtmlWriter, MarkupWriter};
pub use request::{
    render_request, render_request_str, render_request_value, MessageRecord, RenderRequest,
    RenderedMessages,
};
pub use resolve::{NoTargets, TargetResolver};
pub use store::{InMemoryStore, MessageIter, MessageStore, Query};

/// Request-scoped settings that do not belong to the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderEnvironment {
    /// Adds `data-*` metadata so client scripts can mirror server filtering.
    pub client_side_validation: bool,
}

/// A widget configuration bound to its external collaborators.
pub struct MessagesRenderer<'r> {
    config: &'r WidgetConfig,
    environment: RenderEnvironment,
    resolver: &'r dyn TargetResolver,
    filter: &'r dyn RenderFilter,
}

impl<'r> MessagesRenderer<'r> {
    /// Renderer with no resolvable targets, the default severity filter
    /// and client-side validation off.
    pub fn new(config: &'r WidgetConfig) -> Self {
        Self {
            config,
            environment: RenderEnvironment::default(),
            resolver: &NoTargets,
            filter: &SeverityFilter,
        }
    }

    pub fn with_environment(mut self, environment: RenderEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_resolver(mut self, resolver: &'r dyn TargetResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_filter(mut self, filter: &'r dyn RenderFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        self.config
    }

    /// Run one render pass into `writer`. A sink error aborts the pass and
    /// no receipt is produced.
    pub fn render<S, W>(&self, store: &S, writer: &mut W) -> Result<RenderReceipt, MessagesError>
    where
        S: MessageStore + ?Sized,
        W: MarkupWriter + ?Sized,
    {
        let messages = collect_messages(self.config, store, self.resolver);
        let collected = messages.len();
        let groups = group_by_severity(self.config, messages, self.filter);
        let displayed =
            encode_messages(writer, self.config, &self.environment, self.filter, &groups)?;

        debug!(
            id = self.config.id.as_str(),
            collected,
            blocks = groups.len(),
            displayed = displayed.len(),
            "rendered messages"
        );
        Ok(RenderReceipt::new(displayed))
    }

    /// Render, then report the displayed messages back to the store.
    pub fn render_and_acknowledge<S, W>(
        &self,
        store: &mut S,
        writer: &mut W,
    ) -> Result<RenderReceipt, MessagesError>
    where
        S: MessageStore + ?Sized,
        W: MarkupWriter + ?Sized,
    {
        let receipt = self.render(&*store, writer)?;
        store.acknowledge(&receipt.displayed);
        Ok(receipt)
    }

    /// Render into an in-memory HTML string.
    pub fn render_to_string<S>(&self, store: &S) -> Result<(String, RenderReceipt), MessagesError>
    where
        S: MessageStore + ?Sized,
    {
        let mut writer = HtmlWriter::new(Vec::new());
        let receipt = self.render(store, &mut writer)?;
        let html = String::from_utf8(writer.into_inner()?)
            .map_err(|err| MessagesError::Sink(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        Ok((html, receipt))
    }
}
