use messages_core::{ForType, Message, MessageId, Severity, WidgetConfig};

#[test]
fn partial_config_takes_defaults() {
    let config: WidgetConfig =
        serde_json::from_str(r#"{ "for": "form:name", "forType": "key", "showDetail": true }"#)
            .expect("Cấu hình không hợp lệ");

    assert_eq!(config.target(), Some("form:name"));
    assert_eq!(config.for_type, Some(ForType::Key));
    assert!(config.show_detail);
    assert!(config.show_summary);
    assert!(config.escape);
    assert!(config.redisplay);
    assert_eq!(config.id, "messages");
}

#[test]
fn blank_for_counts_as_absent() {
    let config = WidgetConfig {
        for_target: Some("   ".to_string()),
        ..WidgetConfig::default()
    };
    assert_eq!(config.target(), None);
}

#[test]
fn container_class_depends_on_icon_and_extra_class() {
    let mut config = WidgetConfig::default();
    assert_eq!(config.container_class(), "ui-messages ui-widget");

    config.show_icon = false;
    config.style_class = Some("narrow".to_string());
    assert_eq!(
        config.container_class(),
        "ui-messages ui-messages-noicon ui-widget narrow"
    );
}

#[test]
fn for_type_labels() {
    assert_eq!("expression".parse::<ForType>().ok(), Some(ForType::Expression));
    assert!("clientId".parse::<ForType>().is_err());
    assert!(serde_json::from_str::<WidgetConfig>(r#"{ "forType": "Key" }"#).is_err());
}

#[test]
fn severity_names_round_trip() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_name(severity.as_str()), Some(severity));
        assert_eq!(Severity::ALL[severity.index()], severity);
    }
    assert_eq!(Severity::from_name("warning"), None);
}

#[test]
fn detail_falls_back_to_summary() {
    let message = Message::new(MessageId(1), Severity::Warn, "Check input");
    assert_eq!(message.detail_or_summary(), "Check input");
    assert_eq!(message.with_detail("Too short").detail_or_summary(), "Too short");
}
