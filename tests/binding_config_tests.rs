use chart_binding::ChartError;
use chart_binding::api::BindingConfig;
use chart_binding::core::Viewport;

#[test]
fn empty_document_yields_defaults() {
    let config = BindingConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, BindingConfig::default());
    assert_eq!(config.payload_attribute, "data-chart-data");
    assert!(config.responsive);
    assert!(config.maintain_aspect_ratio);
    assert_eq!(config.viewport, Viewport::new(800, 400));
}

#[test]
fn partial_document_overrides_only_given_fields() {
    let config = BindingConfig::from_json_str(
        r#"{"payload_attribute":"data-series","viewport":{"width":320,"height":200}}"#,
    )
    .expect("partial config");
    assert_eq!(config.payload_attribute, "data-series");
    assert_eq!(config.viewport, Viewport::new(320, 200));
    assert!(config.responsive);
}

#[test]
fn serialized_config_parses_back() {
    let config = BindingConfig::default()
        .with_payload_attribute("data-points")
        .with_viewport(Viewport::new(640, 480));
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(BindingConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_documents_are_rejected() {
    for raw in [
        "not json",
        r#"{"payload_attribute":""}"#,
        r#"{"viewport":{"width":0,"height":10}}"#,
        r#"{"responsive":"yes"}"#,
    ] {
        let err = BindingConfig::from_json_str(raw).expect_err("invalid config");
        assert!(matches!(err, ChartError::InvalidConfig(_)), "{raw}: {err}");
    }
}
