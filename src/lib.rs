//! chart-binding: lifecycle glue between server-rendered chart payloads and
//! stateful chart instances.
//!
//! A remote rendering process owns the page markup and attaches a JSON
//! payload (`{"labels": [...], "data": [...]}`) to every chart element. This
//! crate decodes those payloads, resolves one of three fixed presentation
//! profiles and drives a charting backend through create, mutate, redraw
//! and dispose so each element owns at most one live chart instance.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    BindingConfig, BindingRegistry, ChartBackend, ChartBinding, ChartKind, HostElement,
    PresentationProfile, profile_for,
};
pub use crate::core::{Series, decode_payload};
pub use error::{ChartError, ChartResult};
