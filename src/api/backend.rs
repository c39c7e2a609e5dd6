use crate::error::ChartResult;

use super::ChartConfig;

/// DOM element as seen by a binding.
///
/// The host guarantees the element keeps the same identity for the whole
/// lifetime of its binding.
pub trait HostElement {
    /// Stable element id; doubles as the drawable surface identifier.
    fn id(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Charting collaborator providing instance primitives for a drawable surface.
///
/// All calls are synchronous. `dispose` consumes the handle, so an instance
/// can never be disposed twice.
pub trait ChartBackend {
    type Handle;

    fn create_instance(&mut self, surface: &str, config: ChartConfig) -> ChartResult<Self::Handle>;

    /// Replaces the instance's labels and primary values in full.
    fn mutate(
        &mut self,
        handle: &mut Self::Handle,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> ChartResult<()>;

    fn redraw(&mut self, handle: &mut Self::Handle) -> ChartResult<()>;

    /// Releases the instance and its surface resources. Never fails.
    fn dispose(&mut self, handle: Self::Handle);
}
