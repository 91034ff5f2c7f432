use std::fs;

use messages_core::{MessageId, MessagesError};
use messages_render::{render_request_str, RenderRequest};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn closable_request_matches_golden() {
    let request = fs::read_to_string(fixture_path("closable_request.json"))
        .expect("Không đọc được request mẫu");

    let rendered = render_request_str(&request).expect("Không render được request");

    let expected = fs::read_to_string(fixture_path("closable_request.html"))
        .expect("Không đọc được golden HTML");

    assert_eq!(rendered.html, expected.trim_end());
    assert_eq!(rendered.receipt.displayed, vec![MessageId(2), MessageId(0)]);
}

#[test]
fn empty_document_uses_widget_defaults() {
    let rendered = render_request_str("{}").expect("Không render được request");

    assert_eq!(
        rendered.html,
        r#"<div id="messages" class="ui-messages ui-widget" aria-live="polite"></div>"#
    );
    assert!(rendered.receipt.is_empty());
}

#[test]
fn request_targets_feed_the_resolver() {
    let json = r#"{
        "config": { "for": "name" },
        "targets": { "name": "form:name" },
        "messages": [
            { "target": "form:name", "severity": "error", "summary": "Required" },
            { "target": "name", "severity": "warn", "summary": "Short" }
        ]
    }"#;

    let rendered = render_request_str(json).expect("Không render được request");

    assert_eq!(
        rendered.receipt.displayed,
        vec![MessageId(1), MessageId(0)]
    );
}

#[test]
fn unknown_for_type_is_rejected() {
    let err = render_request_str(r#"{ "config": { "for": "x", "forType": "clientId" } }"#)
        .unwrap_err();

    assert!(matches!(err, MessagesError::Parse(ref text) if text.contains("clientId")));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = render_request_str("{ not json").unwrap_err();
    assert!(matches!(err, MessagesError::Parse(_)));
}

#[test]
fn request_round_trips_through_serde() {
    let request: RenderRequest = serde_json::from_str(
        r#"{ "config": { "globalOnly": true }, "clientSideValidation": true }"#,
    )
    .expect("Request không hợp lệ");

    assert!(request.config.global_only);
    assert!(request.environment.client_side_validation);
    assert!(request.store().is_empty());
}
