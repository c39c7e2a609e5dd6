use approx::assert_relative_eq;
use chart_binding::ChartError;
use chart_binding::api::{
    BindingConfig, ChartBinding, ChartConfig, ChartElement, ChartKind, profile_for,
};
use chart_binding::core::{Series, Viewport};
use chart_binding::render::{FrameBackend, NullRenderer, build_frame};

fn config_for(kind: ChartKind, labels: &[&str], values: &[f64]) -> ChartConfig {
    let series = Series::new(
        labels.iter().map(|label| (*label).to_owned()).collect(),
        values.to_vec(),
    )
    .expect("valid series");
    ChartConfig::from_profile(profile_for(kind), series, &BindingConfig::default())
}

#[test]
fn bounded_percentage_bars_use_fixed_hundred_axis() {
    let config = config_for(ChartKind::BoundedPercentage, &["Team A", "Team B"], &[55.5, 90.0]);
    let frame = build_frame(&config).expect("frame");
    frame.validate().expect("valid frame");

    // Plot area spans x 64..788, y 12..372 on the default 800x400 surface.
    assert_eq!(frame.rects.len(), 2);
    let band = (788.0 - 64.0) / 2.0;
    let tall = frame.rects[1];
    assert_relative_eq!(tall.x + tall.width / 2.0, 64.0 + band * 1.5);
    assert_relative_eq!(tall.width, band * 0.8);
    assert_relative_eq!(tall.y, 372.0 - 0.9 * 360.0);
    assert_relative_eq!(tall.y + tall.height, 372.0);

    let tick_texts: Vec<&str> = frame
        .texts
        .iter()
        .take(6)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(tick_texts, ["0%", "20%", "40%", "60%", "80%", "100%"]);
    assert!(frame.texts.iter().any(|text| text.text == "Team B"));
}

#[test]
fn categorical_axis_grows_with_data_and_formats_currency() {
    let config = config_for(ChartKind::Categorical, &["a", "b"], &[50.0, 100.0]);
    let frame = build_frame(&config).expect("frame");

    assert_eq!(frame.texts[0].text, "$0.00");
    assert_eq!(frame.texts[5].text, "$100.00");
    assert_relative_eq!(frame.rects[1].y, 12.0);
}

#[test]
fn trend_draws_segments_over_filled_area() {
    let config = config_for(ChartKind::Trend, &["Mon", "Tue", "Wed"], &[10.0, 20.0, 15.0]);
    let frame = build_frame(&config).expect("frame");
    frame.validate().expect("valid frame");

    assert!(frame.rects.is_empty());
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.polygons[0].points.len(), 5);
    // Six grid lines plus two series segments.
    assert_eq!(frame.lines.len(), 8);
    let segment = frame.lines[6];
    assert_relative_eq!(segment.stroke_width, 2.0);

    // Straight segments chain the band centers; tension stays in the config.
    let next = frame.lines[7];
    assert_relative_eq!(segment.x2, next.x1);
    assert_relative_eq!(segment.y2, next.y1);
    let band = (788.0 - 64.0) / 3.0;
    assert_relative_eq!(segment.x1, 64.0 + band * 0.5);
    assert_relative_eq!(next.x2, 64.0 + band * 2.5);
    assert_relative_eq!(config.datasets[0].style.tension, 0.4);
}

#[test]
fn negative_bars_hang_from_zero_baseline() {
    let config = config_for(ChartKind::Categorical, &["a", "b"], &[-5.0, -2.0]);
    let frame = build_frame(&config).expect("frame");
    frame.validate().expect("valid frame");

    // Domain is [-5, 0], so the zero baseline sits at the plot top (y = 12).
    assert_eq!(frame.texts[0].text, "$-5.00");
    assert_eq!(frame.texts[5].text, "$0.00");
    assert_eq!(frame.rects.len(), 2);
    for rect in &frame.rects {
        assert_relative_eq!(rect.y, 12.0);
    }
    assert_relative_eq!(frame.rects[0].y + frame.rects[0].height, 372.0);
    assert_relative_eq!(frame.rects[1].y + frame.rects[1].height, 156.0);
}

#[test]
fn extreme_finite_values_still_lay_out() {
    let config = config_for(ChartKind::Categorical, &["max", "min"], &[1.7e308, -1.7e308]);
    let frame = build_frame(&config).expect("finite values must lay out");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 2);
    assert_eq!(frame.lines.len(), 6);
    assert!(frame.texts[0].text.ends_with("e+307"));
}

#[test]
fn empty_series_still_draws_axis() {
    let config = config_for(ChartKind::Categorical, &[], &[]);
    let frame = build_frame(&config).expect("frame");
    assert!(frame.rects.is_empty());
    assert_eq!(frame.lines.len(), 6);
    assert!(!frame.is_empty());
}

#[test]
fn tiny_viewport_is_rejected() {
    let mut config = config_for(ChartKind::Categorical, &["a"], &[1.0]);
    config.viewport = Viewport::new(40, 20);
    let err = build_frame(&config).expect_err("no room for plot");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn binding_drives_frame_backend_through_lifecycle() {
    let backend = FrameBackend::new(NullRenderer::default());
    let mut binding = ChartBinding::new(ChartKind::Trend, backend);
    let mut element =
        ChartElement::with_payload("trend", r#"{"labels":["a","b"],"data":[1,2]}"#);

    binding.attach(&element).expect("attach");
    assert_eq!(binding.backend().renderer().frames_rendered, 1);
    assert_eq!(binding.backend().live_count(), 1);

    element.set_payload(r#"{"labels":["a","b","c"],"data":[1,2,3]}"#);
    binding.refresh(&element).expect("refresh");
    let renderer = binding.backend().renderer();
    assert_eq!(renderer.frames_rendered, 2);
    let frame = renderer.last_frame.as_ref().expect("frame rendered");
    assert_eq!(frame.lines.len(), 6 + 2);

    binding.detach();
    assert_eq!(binding.backend().live_count(), 0);
    assert_eq!(binding.backend().surfaces().count(), 0);
}

#[test]
fn failed_first_draw_leaves_no_instance() {
    let config = BindingConfig::default().with_viewport(Viewport::new(10, 10));
    let mut binding = ChartBinding::with_config(
        ChartKind::Categorical,
        FrameBackend::new(NullRenderer::default()),
        config,
    );
    let element = ChartElement::with_payload("small", r#"{"labels":["a"],"data":[1]}"#);

    let err = binding.attach(&element).expect_err("surface too small");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert!(!binding.is_bound());
    assert_eq!(binding.backend().live_count(), 0);
}
