use crate::core::{Series, Viewport};

use super::{
    AxisOptions, BindingConfig, DatasetStyle, Geometry, PresentationProfile, ValueFormatter,
};

/// One labeled value sequence drawn by a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub style: DatasetStyle,
}

/// Complete creation request handed to a [`ChartBackend`](super::ChartBackend).
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub geometry: Geometry,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axis: AxisOptions,
    pub legend_visible: bool,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Logical surface size the instance lays out against.
    pub viewport: Viewport,
    pub tooltip_formatter: ValueFormatter,
    pub tick_formatter: ValueFormatter,
}

impl ChartConfig {
    #[must_use]
    pub fn from_profile(
        profile: &PresentationProfile,
        series: Series,
        binding_config: &BindingConfig,
    ) -> Self {
        let (labels, values) = series.into_parts();
        Self {
            geometry: profile.geometry,
            labels,
            datasets: vec![Dataset {
                label: profile.dataset_label.to_owned(),
                values,
                style: profile.style,
            }],
            axis: profile.axis,
            legend_visible: profile.legend_visible,
            responsive: binding_config.responsive,
            maintain_aspect_ratio: binding_config.maintain_aspect_ratio,
            viewport: binding_config.viewport,
            tooltip_formatter: profile.tooltip_formatter,
            tick_formatter: profile.tick_formatter,
        }
    }

    /// Values of the primary dataset.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.datasets
            .first()
            .map(|dataset| dataset.values.as_slice())
            .unwrap_or_default()
    }

    /// Replaces labels and primary dataset values in full.
    pub fn replace_data(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.labels = labels;
        if let Some(dataset) = self.datasets.first_mut() {
            dataset.values = values;
        }
    }

    #[must_use]
    pub fn tooltip_labels(&self) -> Vec<String> {
        self.values()
            .iter()
            .map(|value| (self.tooltip_formatter)(*value))
            .collect()
    }
}
