mod frame;
mod frame_backend;
mod null_renderer;
mod primitives;
mod recording_backend;

pub use frame::RenderFrame;
pub use frame_backend::{FrameBackend, build_frame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use recording_backend::{CallCounts, RecordedInstance, RecordingBackend};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from payload decoding and lifecycle handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Opaque identifier of one chart instance created by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);
