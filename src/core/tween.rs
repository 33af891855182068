//! Recenter tween and the frame-driver abstraction
//!
//! The tween moves an extent's midpoint toward a target with exponential
//! smoothing, one step per display frame:
//!
//! ```text
//! center1 = target * alpha + midpoint * (1 - alpha)
//! ```
//!
//! Width never changes. The tween stops once `|center1 - target| <= epsilon`.
//! While running it owns the extent: further requests are ignored until it
//! converges. Frame scheduling belongs to the host, which calls [`FrameDriven::on_frame`]
//! once per refresh and stops when it returns [`Tick::Done`].

use tracing::{debug, trace};

use super::error::{Error, Result};
use super::extent::Extent;

/// Default smoothing factor
pub const DEFAULT_SMOOTHING: f64 = 0.2;
/// Default convergence threshold
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Result of one animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Schedule another frame
    Continue,
    /// Animation finished; stop scheduling
    Done,
}

impl Tick {
    pub fn is_done(self) -> bool {
        self == Tick::Done
    }
}

/// Anything the host scheduler can drive frame by frame.
pub trait FrameDriven {
    /// Advance by one frame; `step` counts frames since the driver started.
    fn on_frame(&mut self, step: u64) -> Tick;
}

/// Drives a [`FrameDriven`] without a display loop, capped at `max_frames`.
#[derive(Clone, Copy, Debug)]
pub struct FrameScheduler {
    pub max_frames: u64,
}

/// Outcome of [`FrameScheduler::run`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Frames executed, including the one that returned `Done`
    pub frames: u64,
    pub finished: bool,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self { max_frames: 10_000 }
    }
}

impl FrameScheduler {
    pub fn new(max_frames: u64) -> Self {
        Self { max_frames }
    }

    pub fn run<D: FrameDriven + ?Sized>(&self, driven: &mut D) -> FrameReport {
        for step in 0..self.max_frames {
            if driven.on_frame(step).is_done() {
                return FrameReport {
                    frames: step + 1,
                    finished: true,
                };
            }
        }
        FrameReport {
            frames: self.max_frames,
            finished: false,
        }
    }
}

/// How a recenter request should be applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Animate over several frames
    Smooth,
    /// Jump in one synchronous step
    Instant,
}

/// What happened to a recenter request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecenterOutcome {
    /// Instant jump applied; the caller must commit this extent
    Applied(Extent),
    /// Smooth animation started; frames will follow
    Started,
    /// A tween was already running; nothing changed
    Ignored,
}

/// Idle / Running state machine for smooth recentering
#[derive(Clone, Debug)]
pub struct RecenterTween {
    alpha: f64,
    epsilon: f64,
    running: bool,
    target: f64,
}

impl Default for RecenterTween {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING,
            epsilon: DEFAULT_EPSILON,
            running: false,
            target: 0.0,
        }
    }
}

impl RecenterTween {
    /// # Errors
    ///
    /// `alpha` must be in (0, 1] and `epsilon` strictly positive.
    pub fn new(alpha: f64, epsilon: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::InvalidSmoothing(alpha));
        }
        if !(epsilon > 0.0) {
            return Err(Error::InvalidEpsilon(epsilon));
        }
        Ok(Self {
            alpha,
            epsilon,
            ..Self::default()
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target of the in-flight animation
    pub fn target(&self) -> Option<f64> {
        self.running.then_some(self.target)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Change the smoothing factor; a running tween uses it from its next step.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::InvalidSmoothing(alpha));
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Ask for the midpoint of `current` to move to `target`.
    pub fn request(&mut self, current: Extent, target: f64, motion: Motion) -> RecenterOutcome {
        if self.running {
            trace!(target, "Recenter ignored, tween in flight");
            return RecenterOutcome::Ignored;
        }

        match motion {
            Motion::Instant => RecenterOutcome::Applied(current.recentered(target)),
            Motion::Smooth => {
                self.running = true;
                self.target = target;
                debug!(target, from = current.center(), "Recenter tween started");
                RecenterOutcome::Started
            }
        }
    }

    /// Move the goal of a running tween. Used by a held centering gesture,
    /// which owns the tween it started. No effect while idle.
    pub fn retarget(&mut self, target: f64) {
        if self.running {
            self.target = target;
        }
    }

    /// One frame: returns the next extent and whether to keep going.
    pub fn step(&mut self, current: Extent) -> (Extent, Tick) {
        if !self.running {
            return (current, Tick::Done);
        }

        let center1 = self.target * self.alpha + current.center() * (1.0 - self.alpha);
        let next = current.recentered(center1);
        let remaining = (center1 - self.target).abs();

        trace!(center1, target = self.target, remaining, "Tween step");

        if remaining > self.epsilon {
            (next, Tick::Continue)
        } else {
            self.running = false;
            debug!(center = center1, target = self.target, "Recenter tween converged");
            (next, Tick::Done)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn extent(lo: f64, hi: f64) -> Extent {
        Extent::new(lo, hi).unwrap()
    }

    /// Run the tween to convergence, returning the final extent and frame count.
    fn settle(tween: &mut RecenterTween, mut current: Extent) -> (Extent, u64) {
        let mut frames = 0;
        loop {
            let (next, tick) = tween.step(current);
            current = next;
            frames += 1;
            if tick.is_done() || frames > 10_000 {
                return (current, frames);
            }
        }
    }

    #[test]
    fn test_instant_applies_without_running() {
        let mut tween = RecenterTween::default();
        let outcome = tween.request(extent(0.3, 0.5), 0.7, Motion::Instant);
        match outcome {
            RecenterOutcome::Applied(e) => {
                assert_relative_eq!(e.lo(), 0.6);
                assert_relative_eq!(e.hi(), 0.8);
            }
            other => panic!("expected Applied, got {other:?}"),
        }
        assert!(!tween.is_running());
    }

    #[test]
    fn test_smooth_converges_to_target() {
        let mut tween = RecenterTween::default();
        let start = extent(0.7, 0.9);
        assert_eq!(tween.request(start, 0.9, Motion::Smooth), RecenterOutcome::Started);
        assert!(tween.is_running());

        let (end, frames) = settle(&mut tween, start);
        assert!(!tween.is_running());
        assert!(frames > 1);
        assert_relative_eq!(end.center(), 0.9, epsilon = 1e-3);
        assert_relative_eq!(end.lo(), 0.8, epsilon = 1e-3);
        assert_relative_eq!(end.hi(), 1.0, epsilon = 1e-3);
        assert_relative_eq!(end.width(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_first_step_moves_by_alpha() {
        let mut tween = RecenterTween::default();
        let start = extent(0.3, 0.5);
        tween.request(start, 0.9, Motion::Smooth);
        let (next, tick) = tween.step(start);
        assert_eq!(tick, Tick::Continue);
        // 0.9 * 0.2 + 0.4 * 0.8
        assert_relative_eq!(next.center(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_request_while_running_is_ignored() {
        let mut tween = RecenterTween::default();
        let start = extent(0.3, 0.5);
        tween.request(start, 0.8, Motion::Smooth);
        let (mid, _) = tween.step(start);

        assert_eq!(tween.request(mid, 0.1, Motion::Smooth), RecenterOutcome::Ignored);
        assert_eq!(tween.request(mid, 0.1, Motion::Instant), RecenterOutcome::Ignored);
        assert_eq!(tween.target(), Some(0.8));

        let (end, _) = settle(&mut tween, mid);
        assert_relative_eq!(end.center(), 0.8, epsilon = 1e-3);
    }

    #[test]
    fn test_retarget_only_while_running() {
        let mut tween = RecenterTween::default();
        tween.retarget(0.5);
        assert_eq!(tween.target(), None);

        let start = extent(0.3, 0.5);
        tween.request(start, 0.8, Motion::Smooth);
        tween.retarget(0.2);
        assert_eq!(tween.target(), Some(0.2));
        let (end, _) = settle(&mut tween, start);
        assert_relative_eq!(end.center(), 0.2, epsilon = 1e-3);
    }

    #[test]
    fn test_step_when_idle_is_done() {
        let mut tween = RecenterTween::default();
        let e = extent(0.3, 0.5);
        assert_eq!(tween.step(e), (e, Tick::Done));
    }

    #[test]
    fn test_alpha_one_converges_in_one_frame() {
        let mut tween = RecenterTween::new(1.0, 1e-3).unwrap();
        let start = extent(0.3, 0.5);
        tween.request(start, 0.6, Motion::Smooth);
        let (_, frames) = settle(&mut tween, start);
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_set_alpha() {
        let mut tween = RecenterTween::default();
        assert!(tween.set_alpha(0.0).is_err());
        assert_eq!(tween.alpha(), DEFAULT_SMOOTHING);
        tween.set_alpha(0.5).unwrap();
        assert_eq!(tween.alpha(), 0.5);
    }

    #[test]
    fn test_new_validates() {
        assert!(RecenterTween::new(0.0, 1e-3).is_err());
        assert!(RecenterTween::new(1.2, 1e-3).is_err());
        assert!(RecenterTween::new(0.2, 0.0).is_err());
    }

    struct Countdown(u64);

    impl FrameDriven for Countdown {
        fn on_frame(&mut self, _step: u64) -> Tick {
            self.0 = self.0.saturating_sub(1);
            if self.0 == 0 {
                Tick::Done
            } else {
                Tick::Continue
            }
        }
    }

    #[test]
    fn test_scheduler_runs_until_done() {
        let report = FrameScheduler::default().run(&mut Countdown(5));
        assert_eq!(report, FrameReport { frames: 5, finished: true });
    }

    #[test]
    fn test_scheduler_respects_cap() {
        let report = FrameScheduler::new(3).run(&mut Countdown(100));
        assert_eq!(report, FrameReport { frames: 3, finished: false });
    }

    proptest! {
        #[test]
        fn smooth_recenter_converges_and_keeps_width(
            lo in 0.0f64..0.8,
            w in 0.0f64..0.2,
            target in 0.0f64..1.0,
        ) {
            let start = extent(lo, lo + w);
            let mut tween = RecenterTween::default();
            tween.request(start, target, Motion::Smooth);
            let (end, frames) = settle(&mut tween, start);
            prop_assert!(frames <= 10_000);
            prop_assert!(!tween.is_running());
            prop_assert!((end.center() - target).abs() <= 1e-3);
            prop_assert!((end.width() - start.width()).abs() < 1e-9);
        }
    }
}
