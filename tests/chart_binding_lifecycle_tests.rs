use chart_binding::ChartError;
use chart_binding::api::{
    BindingConfig, BindingState, BindingStateKind, ChartBinding, ChartElement, ChartKind,
    Geometry, profile_for,
};
use chart_binding::render::{CallCounts, RecordingBackend};

const REVENUE: &str = r#"{"labels":["Q1","Q2"],"data":[100,250.5]}"#;
const REVENUE_NEXT: &str = r#"{"labels":["Q1","Q2","Q3"],"data":[100,250.5,80]}"#;

fn recording_binding(kind: ChartKind) -> (ChartBinding<RecordingBackend>, RecordingBackend) {
    let backend = RecordingBackend::new();
    (ChartBinding::new(kind, backend.clone()), backend)
}

#[test]
fn attach_then_detach_leaves_no_live_instance() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let element = ChartElement::with_payload("revenue", REVENUE);

    binding.attach(&element).expect("attach");
    assert!(binding.is_bound());
    assert_eq!(backend.live_count(), 1);

    binding.detach();
    assert!(!binding.is_bound());
    assert_eq!(backend.live_count(), 0);
    assert_eq!(
        backend.calls(),
        CallCounts {
            creates: 1,
            mutates: 0,
            redraws: 0,
            disposes: 1,
        }
    );
}

#[test]
fn refreshes_mutate_in_place_without_recreating() {
    let (mut binding, backend) = recording_binding(ChartKind::Trend);
    let mut element = ChartElement::with_payload("trend", REVENUE);

    binding.attach(&element).expect("attach");
    element.set_payload(REVENUE_NEXT);
    binding.refresh(&element).expect("first refresh");
    binding.refresh(&element).expect("second refresh");

    let calls = backend.calls();
    assert_eq!(calls.creates, 1);
    assert_eq!(calls.mutates, 2);
    assert_eq!(calls.redraws, 2);
    assert_eq!(calls.disposes, 0);

    let instance = backend.instance_on("trend").expect("live instance");
    assert_eq!(instance.config.labels, ["Q1", "Q2", "Q3"]);
    assert_eq!(instance.config.values(), [100.0, 250.5, 80.0]);
    assert_eq!(instance.redraws, 2);

    let snapshot = binding.snapshot();
    assert_eq!(snapshot.state, BindingStateKind::Bound);
    assert_eq!(snapshot.point_count, 3);
    assert_eq!(snapshot.refresh_count, 2);
}

#[test]
fn refresh_without_attach_behaves_like_attach() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let element = ChartElement::with_payload("late", REVENUE);

    binding.refresh(&element).expect("refresh falls back to attach");

    assert!(binding.is_bound());
    let calls = backend.calls();
    assert_eq!(calls.creates, 1);
    assert_eq!(calls.mutates, 0);
    assert_eq!(binding.snapshot().refresh_count, 0);
}

#[test]
fn detach_is_idempotent_and_safe_without_attach() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    binding.detach();
    assert_eq!(backend.calls().disposes, 0);

    let element = ChartElement::with_payload("revenue", REVENUE);
    binding.attach(&element).expect("attach");
    binding.detach();
    binding.detach();
    assert_eq!(backend.calls().disposes, 1);
    assert_eq!(backend.live_count(), 0);
}

#[test]
fn bounded_percentage_attach_builds_fixed_axis_bar_chart() {
    let (mut binding, backend) = recording_binding(ChartKind::BoundedPercentage);
    let element =
        ChartElement::with_payload("util", r#"{"labels":["Team A","Team B"],"data":[55.5,90]}"#);

    binding.attach(&element).expect("attach");

    let instance = backend.instance_on("util").expect("live instance");
    assert_eq!(instance.config.geometry, Geometry::Bar);
    assert_eq!(instance.config.axis.max, Some(100.0));
    assert!(instance.config.axis.begin_at_zero);
    assert!(!instance.config.legend_visible);
    assert_eq!(instance.config.labels, ["Team A", "Team B"]);
    assert_eq!(instance.config.values(), [55.5, 90.0]);
    assert_eq!(instance.config.tooltip_labels(), ["55.50%", "90.00%"]);
    assert_eq!(instance.config.datasets[0].label, "Utilization (%)");
}

#[test]
fn malformed_payload_on_attach_creates_nothing() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let element = ChartElement::with_payload("bad", r#"{"labels":["a","b"],"data":[1]}"#);

    let err = binding.attach(&element).expect_err("mismatched lengths");
    assert!(matches!(err, ChartError::MalformedPayload(_)));
    assert!(!binding.is_bound());
    assert_eq!(backend.calls(), CallCounts::default());
}

#[test]
fn malformed_refresh_keeps_previous_display() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let mut element = ChartElement::with_payload("revenue", REVENUE);
    binding.attach(&element).expect("attach");

    element.set_payload(r#"{"labels":["only"]}"#);
    let err = binding.refresh(&element).expect_err("missing data");
    assert!(err.is_malformed_payload());

    assert!(binding.is_bound());
    assert_eq!(backend.calls().mutates, 0);
    assert_eq!(backend.calls().redraws, 0);
    let instance = backend.instance_on("revenue").expect("original instance survives");
    assert_eq!(instance.config.values(), [100.0, 250.5]);
    assert_eq!(binding.snapshot().point_count, 2);
}

#[test]
fn missing_payload_attribute_is_malformed() {
    let (mut binding, backend) = recording_binding(ChartKind::Trend);
    let element = ChartElement::new("empty");

    let err = binding.attach(&element).expect_err("no payload attribute");
    assert!(err.to_string().contains("data-chart-data"));
    assert_eq!(backend.calls().creates, 0);
}

#[test]
fn attach_while_bound_disposes_previous_instance() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let element = ChartElement::with_payload("revenue", REVENUE);

    binding.attach(&element).expect("first attach");
    binding.attach(&element).expect("second attach");

    let calls = backend.calls();
    assert_eq!(calls.creates, 2);
    assert_eq!(calls.disposes, 1);
    assert_eq!(backend.live_count(), 1);
}

#[test]
fn dropping_a_bound_binding_disposes_its_instance() {
    let backend = RecordingBackend::new();
    {
        let mut binding = ChartBinding::new(ChartKind::Trend, backend.clone());
        binding
            .attach(&ChartElement::with_payload("trend", REVENUE))
            .expect("attach");
        assert_eq!(backend.live_count(), 1);
    }
    assert_eq!(backend.live_count(), 0);
    assert_eq!(backend.calls().disposes, 1);
}

#[test]
fn backend_creation_failure_leaves_binding_unbound() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let element = ChartElement::with_payload("revenue", REVENUE);
    backend.fail_next_create("surface lost");

    let err = binding.attach(&element).expect_err("creation fails");
    assert_eq!(err, ChartError::Backend("surface lost".to_owned()));
    assert!(!binding.is_bound());
    assert_eq!(backend.live_count(), 0);

    binding.refresh(&element).expect("next re-render recovers");
    assert!(binding.is_bound());
    assert_eq!(backend.calls().creates, 2);
}

#[test]
fn redraw_failure_surfaces_and_keeps_instance_bound() {
    let (mut binding, backend) = recording_binding(ChartKind::Categorical);
    let mut element = ChartElement::with_payload("revenue", REVENUE);
    binding.attach(&element).expect("attach");

    element.set_payload(REVENUE_NEXT);
    backend.fail_next_redraw("context lost");
    let err = binding.refresh(&element).expect_err("redraw fails");
    assert!(matches!(err, ChartError::Backend(_)));
    assert!(binding.is_bound());
    assert_eq!(binding.snapshot().refresh_count, 0);

    binding.refresh(&element).expect("retry succeeds");
    assert_eq!(backend.calls().creates, 1);
    assert_eq!(binding.snapshot().refresh_count, 1);
}

#[test]
fn custom_payload_attribute_is_honored() {
    let backend = RecordingBackend::new();
    let config = BindingConfig::default().with_payload_attribute("data-series");
    let mut binding = ChartBinding::with_config(ChartKind::Categorical, backend.clone(), config);

    let element = ChartElement::new("custom").with_attribute("data-series", REVENUE);
    binding.attach(&element).expect("attach via custom attribute");

    let defaulted = ChartElement::with_payload("custom", REVENUE);
    let err = binding.refresh(&defaulted).expect_err("default attribute is not read");
    assert!(err.to_string().contains("data-series"));
    assert_eq!(backend.calls().mutates, 0);
}

#[test]
fn empty_series_renders_an_empty_chart() {
    let (mut binding, backend) = recording_binding(ChartKind::Trend);
    let element = ChartElement::with_payload("empty", r#"{"labels":[],"data":[]}"#);

    binding.attach(&element).expect("empty series is valid");
    let instance = backend.instance_on("empty").expect("live instance");
    assert!(instance.config.labels.is_empty());
    assert!(instance.config.values().is_empty());
}

#[test]
fn snapshot_serializes_state() {
    let (mut binding, _backend) = recording_binding(ChartKind::BoundedPercentage);
    binding
        .attach(&ChartElement::with_payload("util", REVENUE))
        .expect("attach");

    let json = binding.snapshot().to_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["kind"], "BoundedPercentage");
    assert_eq!(value["state"], "bound");
    assert_eq!(value["point_count"], 2);
}

#[test]
fn bound_state_exposes_the_backend_handle() {
    let (mut binding, backend) = recording_binding(ChartKind::BoundedPercentage);
    let mut element = ChartElement::with_payload("teams", REVENUE);

    assert!(std::ptr::eq(binding.profile(), profile_for(ChartKind::BoundedPercentage)));
    assert_eq!(
        binding.config().payload_attribute,
        BindingConfig::DEFAULT_PAYLOAD_ATTRIBUTE
    );
    assert!(matches!(binding.state(), BindingState::Unbound));

    binding.attach(&element).expect("attach");
    let BindingState::Bound(instance) = binding.state() else {
        panic!("binding should be bound after attach");
    };
    assert_eq!(instance.point_count(), 2);
    let recorded = backend.instance(*instance.handle()).expect("live instance");
    assert_eq!(recorded.surface, "teams");
    assert_eq!(recorded.config.labels, ["Q1", "Q2"]);

    // A payload that disappears is rejected and the display is kept.
    assert!(element.remove_attribute(&binding.config().payload_attribute).is_some());
    let err = binding.refresh(&element).expect_err("missing payload");
    assert!(matches!(err, ChartError::MalformedPayload(_)));
    assert!(binding.is_bound());
    assert_eq!(binding.snapshot().point_count, 2);

    // Re-attaching disposes the old instance before creating a new one.
    binding.backend_mut().fail_next_create("surface lost");
    element.set_payload(REVENUE_NEXT);
    let err = binding.attach(&element).expect_err("create fails");
    assert!(matches!(err, ChartError::Backend(_)));
    assert!(matches!(binding.state(), BindingState::Unbound));
    assert_eq!(backend.live_count(), 0);
}
