use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::api::{ChartBackend, ChartConfig, Geometry};
use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

use super::{
    Color, InstanceId, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

const VALUE_AXIS_GUTTER_PX: f64 = 64.0;
const CATEGORY_AXIS_GUTTER_PX: f64 = 28.0;
const EDGE_PADDING_PX: f64 = 12.0;
const TICK_COUNT: usize = 6;
const TICK_LABEL_OFFSET_PX: f64 = 6.0;
const CATEGORY_LABEL_OFFSET_PX: f64 = 16.0;
const BAR_BAND_RATIO: f64 = 0.8;
const FONT_SIZE_PX: f64 = 11.0;
const GRID_COLOR: Color = Color::from_rgba8(229, 231, 235, 1.0);
const TEXT_COLOR: Color = Color::from_rgba8(107, 114, 128, 1.0);

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

/// Lays out one chart instance into a [`RenderFrame`].
///
/// Categories share the plot width in equal bands. Bars fill
/// `BAR_BAND_RATIO` of their band and grow from the zero baseline; trend
/// lines join band centers with straight segments over an optional filled
/// area. The dataset's tension is not applied here. The value axis gets
/// `TICK_COUNT` evenly spaced grid lines labeled by the tick formatter.
pub fn build_frame(config: &ChartConfig) -> ChartResult<RenderFrame> {
    let viewport = config.viewport;
    let plot = PlotArea {
        left: VALUE_AXIS_GUTTER_PX,
        top: EDGE_PADDING_PX,
        right: f64::from(viewport.width) - EDGE_PADDING_PX,
        bottom: f64::from(viewport.height) - CATEGORY_AXIS_GUTTER_PX,
    };
    if !viewport.is_valid() || plot.right <= plot.left || plot.bottom <= plot.top {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let values = config.values();
    let scale = LinearScale::for_values(values, config.axis.begin_at_zero, config.axis.max)?;
    let mut frame = RenderFrame::new(viewport);

    for tick in scale.ticks(TICK_COUNT) {
        let y = scale.value_to_pixel(tick, plot.bottom, plot.top)?;
        frame.push_line(LinePrimitive::new(plot.left, y, plot.right, y, 1.0, GRID_COLOR));
        frame.push_text(TextPrimitive::new(
            (config.tick_formatter)(tick),
            plot.left - TICK_LABEL_OFFSET_PX,
            y,
            FONT_SIZE_PX,
            TEXT_COLOR,
            TextHAlign::Right,
        ));
    }

    let band = (plot.right - plot.left) / config.labels.len().max(1) as f64;
    let center = |index: usize| plot.left + band * (index as f64 + 0.5);
    for (index, label) in config.labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            label.as_str(),
            center(index),
            plot.bottom + CATEGORY_LABEL_OFFSET_PX,
            FONT_SIZE_PX,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    let Some(dataset) = config.datasets.first() else {
        return Ok(frame);
    };
    let (domain_start, domain_end) = scale.domain();
    let baseline_value = 0.0_f64.clamp(domain_start, domain_end);
    let baseline = scale.value_to_pixel(baseline_value, plot.bottom, plot.top)?;
    let mut points = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let y = scale
            .value_to_pixel(*value, plot.bottom, plot.top)?
            .clamp(plot.top, plot.bottom);
        points.push((center(index), y));
    }

    let style = dataset.style;
    match config.geometry {
        Geometry::Bar => {
            let bar_width = band * BAR_BAND_RATIO;
            for (x, y) in &points {
                frame.push_rect(RectPrimitive {
                    x: x - bar_width / 2.0,
                    y: y.min(baseline),
                    width: bar_width,
                    height: (baseline - y).abs(),
                    fill: style.fill,
                    stroke: style.stroke,
                    stroke_width: style.stroke_width,
                });
            }
        }
        Geometry::Line => {
            if style.fill_area && points.len() >= 2 {
                let first_x = points[0].0;
                let last_x = points[points.len() - 1].0;
                let mut outline = points.clone();
                outline.push((last_x, baseline));
                outline.push((first_x, baseline));
                frame.push_polygon(PolygonPrimitive {
                    points: outline,
                    fill: style.fill,
                });
            }
            for pair in points.windows(2) {
                frame.push_line(LinePrimitive::new(
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1,
                    style.stroke_width,
                    style.stroke,
                ));
            }
        }
    }

    Ok(frame)
}

#[derive(Debug, Clone)]
struct FrameInstance {
    surface: String,
    config: ChartConfig,
}

/// Charting backend that lays out frames and hands them to a [`Renderer`].
///
/// Instances are drawn once on creation and again on every redraw.
#[derive(Debug, Clone)]
pub struct FrameBackend<R: Renderer> {
    renderer: R,
    next_id: u64,
    instances: IndexMap<InstanceId, FrameInstance>,
}

impl<R: Renderer> FrameBackend<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            next_id: 0,
            instances: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.instances.len()
    }

    /// Surfaces with a live instance, in creation order.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.instances
            .values()
            .map(|instance| instance.surface.as_str())
    }

    fn draw(&mut self, id: InstanceId) -> ChartResult<()> {
        let instance = self
            .instances
            .get(&id)
            .ok_or_else(|| ChartError::Backend(format!("unknown instance {id:?}")))?;
        let frame = build_frame(&instance.config)?;
        self.renderer
            .render(&frame)
            .map_err(|e| ChartError::Backend(format!("render failed: {e}")))
    }
}

impl<R: Renderer> ChartBackend for FrameBackend<R> {
    type Handle = InstanceId;

    fn create_instance(&mut self, surface: &str, config: ChartConfig) -> ChartResult<InstanceId> {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            id,
            FrameInstance {
                surface: surface.to_owned(),
                config,
            },
        );
        if let Err(err) = self.draw(id) {
            self.instances.shift_remove(&id);
            return Err(err);
        }
        debug!(surface, instance = id.0, "frame instance created");
        Ok(id)
    }

    fn mutate(
        &mut self,
        handle: &mut InstanceId,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> ChartResult<()> {
        let instance = self
            .instances
            .get_mut(&*handle)
            .ok_or_else(|| ChartError::Backend(format!("unknown instance {handle:?}")))?;
        instance.config.replace_data(labels, values);
        Ok(())
    }

    fn redraw(&mut self, handle: &mut InstanceId) -> ChartResult<()> {
        self.draw(*handle)
    }

    fn dispose(&mut self, handle: InstanceId) {
        if self.instances.shift_remove(&handle).is_none() {
            warn!(instance = handle.0, "dispose of unknown frame instance");
        }
    }
}
