use tracing::{debug, error, trace, warn};

use crate::core::{Series, decode_payload};
use crate::error::{ChartError, ChartResult};

use super::{
    BindingConfig, BindingSnapshot, BindingStateKind, ChartBackend, ChartConfig, ChartKind,
    HostElement, PresentationProfile, profile_for,
};

/// Live chart instance owned by a binding.
#[derive(Debug)]
pub struct BoundInstance<H> {
    handle: H,
    point_count: usize,
}

impl<H> BoundInstance<H> {
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Number of points currently displayed.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }
}

/// Per-element lifecycle state.
#[derive(Debug)]
pub enum BindingState<H> {
    Unbound,
    Bound(BoundInstance<H>),
}

impl<H> BindingState<H> {
    #[must_use]
    pub fn kind(&self) -> BindingStateKind {
        match self {
            Self::Unbound => BindingStateKind::Unbound,
            Self::Bound(_) => BindingStateKind::Bound,
        }
    }
}

/// Lifecycle state machine tying one host element to one chart instance.
///
/// The host drives it with `attach` on first render, `refresh` on every
/// re-render and `detach` on removal. At most one instance is live at any
/// time; dropping a bound binding disposes its instance.
pub struct ChartBinding<B: ChartBackend> {
    kind: ChartKind,
    profile: &'static PresentationProfile,
    config: BindingConfig,
    backend: B,
    state: BindingState<B::Handle>,
    refresh_count: u64,
}

impl<B: ChartBackend> ChartBinding<B> {
    #[must_use]
    pub fn new(kind: ChartKind, backend: B) -> Self {
        Self::with_config(kind, backend, BindingConfig::default())
    }

    #[must_use]
    pub fn with_config(kind: ChartKind, backend: B, config: BindingConfig) -> Self {
        Self {
            kind,
            profile: profile_for(kind),
            config,
            backend,
            state: BindingState::Unbound,
            refresh_count: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn profile(&self) -> &'static PresentationProfile {
        self.profile
    }

    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &BindingState<B::Handle> {
        &self.state
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindingState::Bound(_))
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn snapshot(&self) -> BindingSnapshot {
        BindingSnapshot {
            kind: self.kind,
            state: self.state.kind(),
            point_count: match &self.state {
                BindingState::Bound(instance) => instance.point_count,
                BindingState::Unbound => 0,
            },
            refresh_count: self.refresh_count,
        }
    }

    /// Creates the chart instance for `element`.
    ///
    /// On a decode or creation failure no instance is left behind and the
    /// binding stays unbound. Attaching while already bound disposes the
    /// previous instance first.
    pub fn attach<E: HostElement + ?Sized>(&mut self, element: &E) -> ChartResult<()> {
        let series = self.decode_element(element)?;

        if let BindingState::Bound(previous) =
            std::mem::replace(&mut self.state, BindingState::Unbound)
        {
            warn!(
                element = element.id(),
                kind = %self.kind,
                "attach on a bound element; disposing previous instance"
            );
            self.backend.dispose(previous.handle);
        }

        let point_count = series.len();
        let chart_config = ChartConfig::from_profile(self.profile, series, &self.config);
        let handle = self
            .backend
            .create_instance(element.id(), chart_config)
            .inspect_err(|err| {
                error!(
                    element = element.id(),
                    kind = %self.kind,
                    error = %err,
                    "chart creation failed"
                );
            })?;

        self.state = BindingState::Bound(BoundInstance {
            handle,
            point_count,
        });
        debug!(
            element = element.id(),
            kind = %self.kind,
            point_count,
            "chart instance created"
        );
        Ok(())
    }

    /// Pushes the element's current payload into the live instance.
    ///
    /// Labels and values are replaced in full, then the instance is redrawn.
    /// An unbound binding falls back to [`attach`](Self::attach). A malformed
    /// payload leaves the previous display untouched.
    pub fn refresh<E: HostElement + ?Sized>(&mut self, element: &E) -> ChartResult<()> {
        if !self.is_bound() {
            warn!(
                element = element.id(),
                kind = %self.kind,
                "refresh before attach; creating instance"
            );
            return self.attach(element);
        }

        let series = self.decode_element(element)?;
        let BindingState::Bound(instance) = &mut self.state else {
            return Ok(());
        };

        let point_count = series.len();
        let (labels, values) = series.into_parts();
        self.backend
            .mutate(&mut instance.handle, labels, values)
            .inspect_err(|err| {
                error!(element = element.id(), error = %err, "chart mutation failed");
            })?;
        instance.point_count = point_count;
        self.backend
            .redraw(&mut instance.handle)
            .inspect_err(|err| {
                error!(element = element.id(), error = %err, "chart redraw failed");
            })?;

        self.refresh_count += 1;
        debug!(
            element = element.id(),
            kind = %self.kind,
            point_count,
            "chart instance refreshed"
        );
        Ok(())
    }

    /// Disposes the live instance, if any. Never fails.
    pub fn detach(&mut self) {
        match std::mem::replace(&mut self.state, BindingState::Unbound) {
            BindingState::Bound(instance) => {
                self.backend.dispose(instance.handle);
                debug!(kind = %self.kind, "chart instance disposed");
            }
            BindingState::Unbound => {
                trace!(kind = %self.kind, "detach without live instance");
            }
        }
    }

    fn decode_element<E: HostElement + ?Sized>(&self, element: &E) -> ChartResult<Series> {
        let raw = element
            .attribute(&self.config.payload_attribute)
            .ok_or_else(|| {
                ChartError::MalformedPayload(format!(
                    "element has no `{}` attribute",
                    self.config.payload_attribute
                ))
            });
        raw.and_then(decode_payload).inspect_err(|err| {
            warn!(
                element = element.id(),
                kind = %self.kind,
                error = %err,
                "rejected chart payload"
            );
        })
    }
}

impl<B: ChartBackend> Drop for ChartBinding<B> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<B: ChartBackend + std::fmt::Debug> std::fmt::Debug for ChartBinding<B>
where
    B::Handle: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBinding")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("backend", &self.backend)
            .field("state", &self.state)
            .field("refresh_count", &self.refresh_count)
            .finish_non_exhaustive()
    }
}
