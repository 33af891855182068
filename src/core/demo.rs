//! One brush demo instance: samples, brush extent, highlight and gestures
//!
//! All extent changes go through [`BrushDemo::commit`], which recomputes the
//! highlight. This is the "brush changed" event: drags, programmatic sets and
//! tween frames all land here.

use tracing::{debug, trace};

use super::brush::{hit_test, BrushSession, HandleGeometry, Hit, Pointer};
use super::config::DemoConfig;
use super::error::Result;
use super::extent::Extent;
use super::gesture::CenteringSession;
use super::samples::SampleSet;
use super::scale::LinearScale;
use super::selection::Selection;
use super::tween::{FrameDriven, Motion, RecenterOutcome, RecenterTween, Tick};

/// Which interaction set a demo offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoKind {
    /// Background press draws a new extent
    Static,
    /// Background press recenters the brush under the pointer
    Centering,
}

impl DemoKind {
    pub const ALL: &'static [DemoKind] = &[DemoKind::Centering, DemoKind::Static];

    pub fn label(self) -> &'static str {
        match self {
            DemoKind::Static => "Static brush",
            DemoKind::Centering => "Centering brush",
        }
    }
}

impl std::fmt::Display for DemoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The gesture currently holding the pointer
#[derive(Clone, Debug)]
enum Gesture {
    Brush(BrushSession),
    Centering(CenteringSession),
}

pub struct BrushDemo {
    kind: DemoKind,
    config: DemoConfig,
    samples: SampleSet,
    extent: Extent,
    selection: Selection,
    tween: RecenterTween,
    gesture: Option<Gesture>,
    handles: HandleGeometry,
    /// Number of brush-changed events raised so far
    changes: u64,
}

impl BrushDemo {
    /// Build a demo with freshly generated samples.
    pub fn new(kind: DemoKind, config: DemoConfig) -> Result<Self> {
        let samples =
            SampleSet::generate_seeded(config.sample_count, config.layout.height(), config.seed);
        Self::with_samples(kind, config, samples)
    }

    pub fn with_samples(kind: DemoKind, config: DemoConfig, samples: SampleSet) -> Result<Self> {
        config.validate()?;
        let tween = RecenterTween::new(config.smoothing, config.epsilon)?;
        let handles = HandleGeometry::for_band(config.layout.height());
        let extent = config.initial_extent;

        let mut demo = Self {
            kind,
            config,
            samples,
            extent,
            selection: Selection::default(),
            tween,
            gesture: None,
            handles,
            changes: 0,
        };
        // initial highlight, as if the brush had just been drawn
        demo.commit(extent);
        debug!(%kind, samples = demo.samples.len(), %extent, "Demo created");
        Ok(demo)
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn domain(&self) -> Extent {
        self.config.domain
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn handles(&self) -> HandleGeometry {
        self.handles
    }

    pub fn change_count(&self) -> u64 {
        self.changes
    }

    /// True while a recenter tween needs frames
    pub fn is_animating(&self) -> bool {
        self.tween.is_running()
    }

    /// True between pointer-down and pointer-up
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Current tween target, if one is in flight
    pub fn tween_target(&self) -> Option<f64> {
        self.tween.target()
    }

    /// Raise the brush-changed event.
    fn commit(&mut self, extent: Extent) {
        self.extent = extent;
        self.selection = Selection::highlight(extent, &self.samples);
        self.changes += 1;
    }

    /// Programmatic extent change; bounds are clamped into the domain.
    /// Ignored while a tween owns the extent.
    pub fn set_extent(&mut self, extent: Extent) -> bool {
        if self.tween.is_running() {
            return false;
        }
        let domain = self.config.domain;
        self.commit(Extent::spanning(domain.clamp(extent.lo()), domain.clamp(extent.hi())));
        true
    }

    /// Programmatic recenter. The target is clamped so the window stays in
    /// the domain; requests during a running tween are ignored.
    pub fn recenter(&mut self, target: f64, motion: Motion) -> RecenterOutcome {
        let target = self.config.domain.clamp_center(target, self.extent.width());
        let outcome = self.tween.request(self.extent, target, motion);
        if let RecenterOutcome::Applied(extent) = outcome {
            self.commit(extent);
        }
        outcome
    }

    /// Replace the samples (new seed, or entropy) and recompute the highlight.
    pub fn regenerate(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
        self.samples = SampleSet::generate_seeded(
            self.config.sample_count,
            self.config.layout.height(),
            seed,
        );
        self.commit(self.extent);
    }

    /// Change the smoothing factor, including for a tween in flight.
    pub fn set_smoothing(&mut self, alpha: f64) -> Result<()> {
        self.tween.set_alpha(alpha)?;
        self.config.smoothing = alpha;
        Ok(())
    }

    pub fn hit_test(&self, pointer: Pointer, scale: &LinearScale) -> Hit {
        hit_test(self.extent, scale, self.handles, pointer)
    }

    /// Pointer pressed. Returns what was hit, or `None` when the press was refused
    /// (a gesture is already open, or a tween owns the extent for a brush drag).
    pub fn pointer_down(&mut self, pointer: Pointer, scale: &LinearScale) -> Option<Hit> {
        if self.gesture.is_some() {
            return None;
        }

        let hit = self.hit_test(pointer, scale);
        let value = scale.invert(pointer.x);
        let domain = self.config.domain;

        let gesture = match (self.kind, hit) {
            (DemoKind::Centering, Hit::Background) => Gesture::Centering(CenteringSession::start(
                value,
                self.extent,
                domain,
                &mut self.tween,
            )),
            _ if self.tween.is_running() => {
                trace!(?hit, "Brush drag refused, tween in flight");
                return None;
            }
            _ => {
                let (session, initial) = BrushSession::start(hit, value, self.extent, domain);
                if let Some(extent) = initial {
                    self.commit(extent);
                }
                Gesture::Brush(session)
            }
        };

        self.gesture = Some(gesture);
        Some(hit)
    }

    /// Pointer moved while pressed. No-op without an open gesture.
    pub fn pointer_move(&mut self, x: f32, scale: &LinearScale) {
        let value = scale.invert(x);
        let next = match self.gesture.as_mut() {
            Some(Gesture::Brush(session)) => Some(session.update(value, self.extent)),
            Some(Gesture::Centering(session)) => session.update(value, self.extent, &mut self.tween),
            None => None,
        };
        if let Some(extent) = next {
            self.commit(extent);
        }
    }

    /// Pointer released: final update and close the gesture.
    pub fn pointer_up(&mut self, x: f32, scale: &LinearScale) {
        let value = scale.invert(x);
        let next = match self.gesture.take() {
            Some(Gesture::Brush(session)) => Some(session.end(value, self.extent)),
            Some(Gesture::Centering(session)) => session.end(value, self.extent, &mut self.tween),
            None => None,
        };
        if let Some(extent) = next {
            self.commit(extent);
        }
    }
}

impl FrameDriven for BrushDemo {
    fn on_frame(&mut self, step: u64) -> Tick {
        if !self.tween.is_running() {
            return Tick::Done;
        }
        let (extent, tick) = self.tween.step(self.extent);
        self.commit(extent);
        trace!(step, %extent, selected = self.selection.count(), "Frame");
        tick
    }
}
