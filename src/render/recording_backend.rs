use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::warn;

use crate::api::{ChartBackend, ChartConfig};
use crate::error::{ChartError, ChartResult};

use super::InstanceId;

/// Number of calls a [`RecordingBackend`] has received, per primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub creates: usize,
    pub mutates: usize,
    pub redraws: usize,
    pub disposes: usize,
}

/// State of one live instance as last seen by the backend.
#[derive(Debug, Clone)]
pub struct RecordedInstance {
    pub surface: String,
    pub config: ChartConfig,
    pub redraws: usize,
}

#[derive(Debug, Default)]
struct RecordingLog {
    counts: CallCounts,
    next_id: u64,
    live: IndexMap<InstanceId, RecordedInstance>,
    fail_next_create: Option<String>,
    fail_next_redraw: Option<String>,
}

/// Headless backend that records every call and draws nothing.
///
/// Clones share one log, so a host can hand clones to many bindings and
/// still observe the totals.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    log: Rc<RefCell<RecordingLog>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.log.borrow().counts
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.log.borrow().live.len()
    }

    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<RecordedInstance> {
        self.log.borrow().live.get(&id).cloned()
    }

    /// Live instance drawn on `surface`, if any.
    #[must_use]
    pub fn instance_on(&self, surface: &str) -> Option<RecordedInstance> {
        self.log
            .borrow()
            .live
            .values()
            .find(|instance| instance.surface == surface)
            .cloned()
    }

    /// Makes the next `create_instance` call fail with `message`.
    pub fn fail_next_create(&self, message: impl Into<String>) {
        self.log.borrow_mut().fail_next_create = Some(message.into());
    }

    /// Makes the next `redraw` call fail with `message`.
    pub fn fail_next_redraw(&self, message: impl Into<String>) {
        self.log.borrow_mut().fail_next_redraw = Some(message.into());
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = InstanceId;

    fn create_instance(&mut self, surface: &str, config: ChartConfig) -> ChartResult<InstanceId> {
        let mut log = self.log.borrow_mut();
        log.counts.creates += 1;
        if let Some(message) = log.fail_next_create.take() {
            return Err(ChartError::Backend(message));
        }

        let id = InstanceId(log.next_id);
        log.next_id += 1;
        log.live.insert(
            id,
            RecordedInstance {
                surface: surface.to_owned(),
                config,
                redraws: 0,
            },
        );
        Ok(id)
    }

    fn mutate(
        &mut self,
        handle: &mut InstanceId,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> ChartResult<()> {
        let mut log = self.log.borrow_mut();
        log.counts.mutates += 1;
        let instance = log
            .live
            .get_mut(&*handle)
            .ok_or_else(|| ChartError::Backend(format!("unknown instance {handle:?}")))?;
        instance.config.replace_data(labels, values);
        Ok(())
    }

    fn redraw(&mut self, handle: &mut InstanceId) -> ChartResult<()> {
        let mut log = self.log.borrow_mut();
        log.counts.redraws += 1;
        if let Some(message) = log.fail_next_redraw.take() {
            return Err(ChartError::Backend(message));
        }
        let instance = log
            .live
            .get_mut(&*handle)
            .ok_or_else(|| ChartError::Backend(format!("unknown instance {handle:?}")))?;
        instance.redraws += 1;
        Ok(())
    }

    fn dispose(&mut self, handle: InstanceId) {
        let mut log = self.log.borrow_mut();
        log.counts.disposes += 1;
        if log.live.shift_remove(&handle).is_none() {
            warn!(instance = handle.0, "dispose of unknown instance");
        }
    }
}
