//! Lifecycle binding between host elements and chart instances.

mod backend;
mod binding;
mod binding_config;
mod chart_config;
mod element;
mod kind;
mod profile;
mod registry;
mod snapshot;

pub use backend::{ChartBackend, HostElement};
pub use binding::{BindingState, BoundInstance, ChartBinding};
pub use binding_config::BindingConfig;
pub use chart_config::{ChartConfig, Dataset};
pub use element::ChartElement;
pub use kind::{ChartKind, Geometry};
pub use profile::{
    AxisOptions, BOUNDED_PERCENTAGE_PROFILE, CATEGORICAL_PROFILE, DatasetStyle,
    PresentationProfile, TREND_PROFILE, ValueFormatter, profile_for,
};
pub use registry::BindingRegistry;
pub use snapshot::{BindingSnapshot, BindingStateKind};
