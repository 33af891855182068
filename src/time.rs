//! Platform-agnostic clock and per-animation frame counter

#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Hands out frame step numbers to a running animation.
///
/// Restarts from zero each time an animation begins, so the step passed to
/// `FrameDriven::on_frame` counts frames since that animation started.
#[derive(Default)]
pub struct FrameClock {
    step: u64,
    started_at: Option<f64>,
}

impl FrameClock {
    /// Next step number; `animating` says whether the driven animation is live.
    pub fn next(&mut self, animating: bool) -> u64 {
        if !animating {
            self.step = 0;
            self.started_at = None;
            return 0;
        }
        if self.started_at.is_none() {
            self.started_at = Some(now_seconds());
        }
        let step = self.step;
        self.step += 1;
        step
    }

    /// Seconds since the current animation started
    pub fn elapsed(&self) -> f64 {
        self.started_at.map_or(0.0, |t| now_seconds() - t)
    }
}
