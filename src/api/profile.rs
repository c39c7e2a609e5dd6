use serde::{Deserialize, Serialize};

use crate::core::{format_currency, format_percentage, format_percentage_tick};
use crate::render::Color;

use super::{ChartKind, Geometry};

/// Maps a numeric value to its display string.
pub type ValueFormatter = fn(f64) -> String;

/// Fill and stroke tokens for the single dataset of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Paint the area between the line and the axis baseline.
    pub fill_area: bool,
    /// Bezier tension requested for line segments. Carried for backends that
    /// curve lines; the built-in frame backend always draws straight segments.
    pub tension: f64,
}

/// Value axis policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
}

/// Immutable per-kind visual and formatting configuration.
///
/// One static profile exists per [`ChartKind`]; every binding of that kind
/// shares it by reference.
#[derive(Debug, Clone, Copy)]
pub struct PresentationProfile {
    pub kind: ChartKind,
    pub geometry: Geometry,
    pub dataset_label: &'static str,
    pub style: DatasetStyle,
    pub axis: AxisOptions,
    pub legend_visible: bool,
    pub value_formatter: ValueFormatter,
    pub tooltip_formatter: ValueFormatter,
    pub tick_formatter: ValueFormatter,
}

impl PresentationProfile {
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        (self.value_formatter)(value)
    }

    #[must_use]
    pub fn format_tooltip(&self, value: f64) -> String {
        (self.tooltip_formatter)(value)
    }

    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        (self.tick_formatter)(value)
    }
}

pub static CATEGORICAL_PROFILE: PresentationProfile = PresentationProfile {
    kind: ChartKind::Categorical,
    geometry: Geometry::Bar,
    dataset_label: "Revenue ($)",
    style: DatasetStyle {
        fill: Color::from_rgba8(79, 70, 229, 0.8),
        stroke: Color::from_rgba8(79, 70, 229, 1.0),
        stroke_width: 1.0,
        fill_area: false,
        tension: 0.0,
    },
    axis: AxisOptions {
        begin_at_zero: true,
        max: None,
    },
    legend_visible: false,
    value_formatter: format_currency,
    tooltip_formatter: format_currency,
    tick_formatter: format_currency,
};

pub static BOUNDED_PERCENTAGE_PROFILE: PresentationProfile = PresentationProfile {
    kind: ChartKind::BoundedPercentage,
    geometry: Geometry::Bar,
    dataset_label: "Utilization (%)",
    style: DatasetStyle {
        fill: Color::from_rgba8(16, 185, 129, 0.8),
        stroke: Color::from_rgba8(16, 185, 129, 1.0),
        stroke_width: 1.0,
        fill_area: false,
        tension: 0.0,
    },
    axis: AxisOptions {
        begin_at_zero: true,
        max: Some(100.0),
    },
    legend_visible: false,
    value_formatter: format_percentage,
    tooltip_formatter: format_percentage,
    tick_formatter: format_percentage_tick,
};

pub static TREND_PROFILE: PresentationProfile = PresentationProfile {
    kind: ChartKind::Trend,
    geometry: Geometry::Line,
    dataset_label: "Revenue ($)",
    style: DatasetStyle {
        fill: Color::from_rgba8(139, 92, 246, 0.1),
        stroke: Color::from_rgba8(139, 92, 246, 1.0),
        stroke_width: 2.0,
        fill_area: true,
        tension: 0.4,
    },
    axis: AxisOptions {
        begin_at_zero: true,
        max: None,
    },
    legend_visible: false,
    value_formatter: format_currency,
    tooltip_formatter: format_currency,
    tick_formatter: format_currency,
};

/// Resolves the shared profile for `kind`.
#[must_use]
pub fn profile_for(kind: ChartKind) -> &'static PresentationProfile {
    match kind {
        ChartKind::Categorical => &CATEGORICAL_PROFILE,
        ChartKind::BoundedPercentage => &BOUNDED_PERCENTAGE_PROFILE,
        ChartKind::Trend => &TREND_PROFILE,
    }
}
