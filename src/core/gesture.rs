//! Centering gesture session
//!
//! A press on the brush background of the centering demo recenters the
//! brush under the pointer with a smooth tween, then keeps tracking the
//! pointer until release. Pointer targets are clamped so the window never
//! leaves the domain.

use tracing::debug;

use super::extent::Extent;
use super::tween::{Motion, RecenterOutcome, RecenterTween};

#[derive(Clone, Debug)]
pub struct CenteringSession {
    /// Allowed centers `[domainLo + width/2, domainHi - width/2]`
    bounds: (f64, f64),
    /// Whether this session started the running tween
    owns_tween: bool,
    target: f64,
}

impl CenteringSession {
    /// Press at `value`. Starts a smooth recenter unless one is already running.
    pub fn start(value: f64, extent: Extent, domain: Extent, tween: &mut RecenterTween) -> Self {
        let bounds = domain.center_bounds(extent.width());
        let target = clamp(value, bounds);
        let owns_tween = tween.request(extent, target, Motion::Smooth) == RecenterOutcome::Started;

        debug!(value, target, owns_tween, "Centering gesture started");
        Self {
            bounds,
            owns_tween,
            target,
        }
    }

    /// Pointer moved to `value`. Returns an extent to commit when the
    /// instant recenter went through (no tween running).
    pub fn update(&mut self, value: f64, extent: Extent, tween: &mut RecenterTween) -> Option<Extent> {
        self.target = clamp(value, self.bounds);
        if self.owns_tween {
            tween.retarget(self.target);
        }
        match tween.request(extent, self.target, Motion::Instant) {
            RecenterOutcome::Applied(next) => Some(next),
            RecenterOutcome::Started | RecenterOutcome::Ignored => None,
        }
    }

    /// Release at `value`: one last update, then the session is gone.
    pub fn end(mut self, value: f64, extent: Extent, tween: &mut RecenterTween) -> Option<Extent> {
        let result = self.update(value, extent, tween);
        debug!(target = self.target, tween_running = tween.is_running(), "Centering gesture ended");
        result
    }

    /// Latest clamped target
    pub fn target(&self) -> f64 {
        self.target
    }
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}
