//! Writes the container and one block per present severity.

use messages_core::{
    Message, MessageId, MessagesError, Severity, WidgetConfig, CLOSE_ACTION, CLOSE_ICON_CLASS,
    CLOSE_LINK_CLASS, CORNER_CLASS, SEVERITY_PREFIX_CLASS,
};
use tracing::trace;

use crate::filter::RenderFilter;
use crate::group::SeverityGroups;
use crate::markup::MarkupWriter;
use crate::RenderEnvironment;

/// Emit the full widget markup and return the messages written, in order.
///
/// The container is written even when `groups` is empty.
pub fn encode_messages<W>(
    writer: &mut W,
    config: &WidgetConfig,
    environment: &RenderEnvironment,
    filter: &dyn RenderFilter,
    groups: &SeverityGroups<'_>,
) -> Result<Vec<MessageId>, MessagesError>
where
    W: MarkupWriter + ?Sized,
{
    writer.start_element("div")?;
    writer.write_attribute("id", &config.id)?;
    writer.write_attribute("class", &config.container_class())?;
    if let Some(style) = config.style.as_deref() {
        writer.write_attribute("style", style)?;
    }
    writer.write_attribute("aria-live", "polite")?;

    if environment.client_side_validation {
        writer.write_attribute("data-global", bool_attr(config.global_only))?;
        writer.write_attribute("data-summary", bool_attr(config.show_summary))?;
        writer.write_attribute("data-detail", bool_attr(config.show_detail))?;
        writer.write_attribute("data-severity", &filter.client_severity(config))?;
        writer.write_attribute("data-redisplay", bool_attr(config.redisplay))?;
    }

    let mut displayed = Vec::with_capacity(groups.message_count());
    for (severity, messages) in groups.iter() {
        encode_severity_messages(writer, config, severity, messages, &mut displayed)?;
    }

    writer.end_element("div")?;
    Ok(displayed)
}

fn encode_severity_messages<W>(
    writer: &mut W,
    config: &WidgetConfig,
    severity: Severity,
    messages: &[&Message],
    displayed: &mut Vec<MessageId>,
) -> Result<(), MessagesError>
where
    W: MarkupWriter + ?Sized,
{
    let prefix = format!("{SEVERITY_PREFIX_CLASS}{severity}");

    writer.start_element("div")?;
    writer.write_attribute("class", &format!("{prefix} {CORNER_CLASS}"))?;

    if config.closable {
        encode_close_icon(writer)?;
    }

    if config.show_icon {
        writer.start_element("span")?;
        writer.write_attribute("class", &format!("{prefix}-icon"))?;
        writer.end_element("span")?;
    }

    writer.start_element("ul")?;
    for message in messages {
        writer.start_element("li")?;
        writer.write_attribute("role", "alert")?;
        writer.write_attribute("aria-atomic", "true")?;

        if config.show_summary {
            encode_text_span(
                writer,
                &format!("{prefix}-summary"),
                &message.summary,
                config.escape,
            )?;
        }
        if config.show_detail {
            encode_text_span(
                writer,
                &format!("{prefix}-detail"),
                message.detail_or_summary(),
                config.escape,
            )?;
        }

        writer.end_element("li")?;
        trace!(id = %message.id, %severity, "message emitted");
        displayed.push(message.id);
    }
    writer.end_element("ul")?;

    writer.end_element("div")?;
    Ok(())
}

/// Dismiss anchor placed at the top of a severity block.
pub fn encode_close_icon<W>(writer: &mut W) -> Result<(), MessagesError>
where
    W: MarkupWriter + ?Sized,
{
    writer.start_element("a")?;
    writer.write_attribute("href", "#")?;
    writer.write_attribute("class", CLOSE_LINK_CLASS)?;
    writer.write_attribute("onclick", CLOSE_ACTION)?;

    writer.start_element("span")?;
    writer.write_attribute("class", CLOSE_ICON_CLASS)?;
    writer.end_element("span")?;

    writer.end_element("a")?;
    Ok(())
}

fn encode_text_span<W>(
    writer: &mut W,
    class: &str,
    text: &str,
    escape: bool,
) -> Result<(), MessagesError>
where
    W: MarkupWriter + ?Sized,
{
    writer.start_element("span")?;
    writer.write_attribute("class", class)?;
    if escape {
        writer.write_text(text)?;
    } else {
        writer.write_raw(text)?;
    }
    writer.end_element("span")?;
    Ok(())
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
