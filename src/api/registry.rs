use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ChartResult;

use super::{BindingConfig, BindingSnapshot, ChartBackend, ChartBinding, ChartKind, HostElement};

/// Host-side routing of lifecycle events to per-element bindings.
///
/// Bindings are keyed by element id and created on first `mounted` with the
/// kind named by the element's hook. Each binding receives its own clone of
/// the backend prototype. Errors are returned for the element that caused
/// them only; other elements are never affected.
pub struct BindingRegistry<B: ChartBackend + Clone> {
    prototype: B,
    config: BindingConfig,
    bindings: IndexMap<String, ChartBinding<B>>,
}

impl<B: ChartBackend + Clone> BindingRegistry<B> {
    #[must_use]
    pub fn new(prototype: B) -> Self {
        Self::with_config(prototype, BindingConfig::default())
    }

    #[must_use]
    pub fn with_config(prototype: B, config: BindingConfig) -> Self {
        Self {
            prototype,
            config,
            bindings: IndexMap::new(),
        }
    }

    /// Element was inserted into the page under hook `hook`.
    pub fn mounted<E: HostElement + ?Sized>(
        &mut self,
        hook: &str,
        element: &E,
    ) -> ChartResult<()> {
        let kind = ChartKind::from_hook_name(hook)?;
        self.binding_entry(kind, element.id()).attach(element)
    }

    /// Element was re-rendered with a possibly new payload.
    pub fn updated<E: HostElement + ?Sized>(
        &mut self,
        hook: &str,
        element: &E,
    ) -> ChartResult<()> {
        let kind = ChartKind::from_hook_name(hook)?;
        self.binding_entry(kind, element.id()).refresh(element)
    }

    /// Element was removed; its binding is detached and discarded.
    ///
    /// Returns `false` when no binding existed for `element_id`.
    pub fn destroyed(&mut self, element_id: &str) -> bool {
        match self.bindings.shift_remove(element_id) {
            Some(mut binding) => {
                binding.detach();
                debug!(element = element_id, "binding discarded");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn binding(&self, element_id: &str) -> Option<&ChartBinding<B>> {
        self.bindings.get(element_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Snapshots of all bindings in mount order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<(String, BindingSnapshot)> {
        self.bindings
            .iter()
            .map(|(id, binding)| (id.clone(), binding.snapshot()))
            .collect()
    }

    fn binding_entry(&mut self, kind: ChartKind, element_id: &str) -> &mut ChartBinding<B> {
        let binding = self
            .bindings
            .entry(element_id.to_owned())
            .or_insert_with(|| {
                ChartBinding::with_config(kind, self.prototype.clone(), self.config.clone())
            });
        if binding.kind() != kind {
            warn!(
                element = element_id,
                bound = %binding.kind(),
                requested = %kind,
                "hook changed for a live element; keeping original kind"
            );
        }
        binding
    }
}
