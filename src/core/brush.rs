//! Brush hit testing and drag sessions (move / resize / redraw)
//!
//! Hit testing works in pixels through a [`LinearScale`]; drag updates work
//! in domain values. Every extent a session produces lies inside the domain.

use tracing::debug;

use super::extent::Extent;
use super::scale::LinearScale;

/// Brush edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// `lo` edge
    West,
    /// `hi` edge
    East,
}

/// What a pointer press landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Handle(Side),
    Body,
    Background,
}

/// Pointer position relative to the brush band
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Horizontal screen position, px
    pub x: f32,
    /// Vertical distance from the band's midline, px
    pub dy: f32,
}

impl Pointer {
    pub fn at(x: f32) -> Self {
        Self { x, dy: 0.0 }
    }
}

/// Pixel geometry of the resize grips
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleGeometry {
    /// Half width of the thin grip strip centered on each edge
    pub grip_half_width: f32,
    /// Radius of the outward half-disc drawn on each edge
    pub arc_radius: f32,
}

impl HandleGeometry {
    /// Grips for a band `band_height` pixels tall.
    pub fn for_band(band_height: f32) -> Self {
        Self {
            grip_half_width: 3.0,
            arc_radius: band_height / 2.0,
        }
    }
}

/// Classify a pointer press against the current extent.
///
/// Grips win over the body. The west grip is checked first, so on an
/// empty extent the press resizes from the west side.
pub fn hit_test(extent: Extent, scale: &LinearScale, geometry: HandleGeometry, pointer: Pointer) -> Hit {
    let west = scale.scale(extent.lo());
    let east = scale.scale(extent.hi());

    for (side, edge, outward) in [(Side::West, west, -1.0f32), (Side::East, east, 1.0)] {
        let dx = pointer.x - edge;
        if dx.abs() <= geometry.grip_half_width {
            return Hit::Handle(side);
        }
        let out = dx * outward;
        let r = geometry.arc_radius;
        if out >= 0.0 && out * out + pointer.dy * pointer.dy <= r * r {
            return Hit::Handle(side);
        }
    }

    if pointer.x > west && pointer.x < east {
        Hit::Body
    } else {
        Hit::Background
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragMode {
    /// Keep width, follow the pointer at a fixed offset from `lo`
    Move { grab_offset: f64 },
    /// One edge fixed at `anchor`, the other follows the pointer
    Anchored { anchor: f64 },
}

/// One press-drag-release interaction with the brush itself
#[derive(Clone, Debug)]
pub struct BrushSession {
    mode: DragMode,
    domain: Extent,
}

impl BrushSession {
    /// Open a session for a press at `value` that hit `hit`.
    ///
    /// Returns the session plus the extent to commit right away, if any:
    /// a background press collapses the brush to the press position.
    pub fn start(hit: Hit, value: f64, extent: Extent, domain: Extent) -> (Self, Option<Extent>) {
        let value = domain.clamp(value);
        let (mode, initial) = match hit {
            Hit::Body => (
                DragMode::Move {
                    grab_offset: value - extent.lo(),
                },
                None,
            ),
            Hit::Handle(Side::West) => (DragMode::Anchored { anchor: extent.hi() }, None),
            Hit::Handle(Side::East) => (DragMode::Anchored { anchor: extent.lo() }, None),
            Hit::Background => (DragMode::Anchored { anchor: value }, Some(Extent::point(value))),
        };
        debug!(?hit, value, ?mode, "Brush drag started");
        (Self { mode, domain }, initial)
    }

    /// Extent for the pointer now at `value`.
    pub fn update(&self, value: f64, current: Extent) -> Extent {
        match self.mode {
            DragMode::Move { grab_offset } => {
                let lo = value - grab_offset;
                self.domain.fit(Extent::spanning(lo, lo + current.width()))
            }
            DragMode::Anchored { anchor } => Extent::spanning(anchor, self.domain.clamp(value)),
        }
    }

    pub fn end(self, value: f64, current: Extent) -> Extent {
        let extent = self.update(value, current);
        debug!(%extent, empty = extent.is_empty(), "Brush drag ended");
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn scale() -> LinearScale {
        LinearScale::new(Extent::UNIT, (0.0, 610.0)).unwrap()
    }

    fn extent(lo: f64, hi: f64) -> Extent {
        Extent::new(lo, hi).unwrap()
    }

    const GEOMETRY: HandleGeometry = HandleGeometry {
        grip_half_width: 3.0,
        arc_radius: 25.0,
    };

    #[test]
    fn test_hit_regions() {
        let e = extent(0.3, 0.5); // 183px .. 305px
        let s = scale();
        assert_eq!(hit_test(e, &s, GEOMETRY, Pointer::at(183.0)), Hit::Handle(Side::West));
        assert_eq!(hit_test(e, &s, GEOMETRY, Pointer::at(185.5)), Hit::Handle(Side::West));
        assert_eq!(hit_test(e, &s, GEOMETRY, Pointer::at(306.0)), Hit::Handle(Side::East));
        assert_eq!(hit_test(e, &s, GEOMETRY, Pointer::at(240.0)), Hit::Body);
        assert_eq!(hit_test(e, &s, GEOMETRY, Pointer::at(500.0)), Hit::Background);
    }

    #[test]
    fn test_half_disc_grip_faces_outward() {
        let e = extent(0.3, 0.5);
        let s = scale();
        // 20px outside the east edge, near the midline: inside the grip disc
        let outside = Pointer { x: 325.0, dy: 5.0 };
        assert_eq!(hit_test(e, &s, GEOMETRY, outside), Hit::Handle(Side::East));
        // same distance inward is body, not grip
        let inside = Pointer { x: 285.0, dy: 5.0 };
        assert_eq!(hit_test(e, &s, GEOMETRY, inside), Hit::Body);
        // outside but beyond the radius vertically
        let far = Pointer { x: 325.0, dy: 24.0 };
        assert_eq!(hit_test(e, &s, GEOMETRY, far), Hit::Background);
    }

    #[test]
    fn test_grip_beats_body_on_narrow_extent() {
        let e = extent(0.5, 0.505); // ~3px wide
        let s = scale();
        let x = s.scale(0.5025);
        assert!(matches!(hit_test(e, &s, GEOMETRY, Pointer::at(x)), Hit::Handle(_)));
    }

    #[test]
    fn test_move_keeps_width_and_clamps() {
        let domain = Extent::UNIT;
        let e = extent(0.3, 0.5);
        let (session, initial) = BrushSession::start(Hit::Body, 0.4, e, domain);
        assert!(initial.is_none());

        let moved = session.update(0.6, e);
        assert_relative_eq!(moved.lo(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(moved.hi(), 0.7, epsilon = 1e-12);

        let pinned = session.update(0.95, moved);
        assert_relative_eq!(pinned.lo(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(pinned.hi(), 1.0, epsilon = 1e-12);

        let pinned = session.end(-0.5, pinned);
        assert_relative_eq!(pinned.lo(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(pinned.hi(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_resize_east_and_flip() {
        let domain = Extent::UNIT;
        let e = extent(0.3, 0.5);
        let (session, _) = BrushSession::start(Hit::Handle(Side::East), 0.5, e, domain);

        let grown = session.update(0.7, e);
        assert_eq!(grown, extent(0.3, 0.7));

        // dragging past the west edge flips the window
        let flipped = session.update(0.1, grown);
        assert_eq!(flipped, extent(0.1, 0.3));

        let clamped = session.update(1.4, flipped);
        assert_eq!(clamped, extent(0.3, 1.0));
    }

    #[test]
    fn test_resize_west() {
        let (session, _) =
            BrushSession::start(Hit::Handle(Side::West), 0.3, extent(0.3, 0.5), Extent::UNIT);
        assert_eq!(session.update(0.2, extent(0.3, 0.5)), extent(0.2, 0.5));
    }

    #[test]
    fn test_background_click_clears() {
        let (session, initial) =
            BrushSession::start(Hit::Background, 0.8, extent(0.3, 0.5), Extent::UNIT);
        assert_eq!(initial, Some(Extent::point(0.8)));
        let end = session.end(0.8, Extent::point(0.8));
        assert!(end.is_empty());
        assert_eq!(end.lo(), 0.8);
    }

    #[test]
    fn test_background_drag_redraws() {
        let (session, initial) =
            BrushSession::start(Hit::Background, 0.8, extent(0.3, 0.5), Extent::UNIT);
        let e = session.update(0.6, initial.unwrap());
        assert_eq!(e, extent(0.6, 0.8));
    }

    proptest! {
        #[test]
        fn drag_stays_in_domain(
            lo in 0.0f64..0.9,
            w in 0.0f64..0.1,
            press in 0.0f64..1.0,
            moves in prop::collection::vec(-1.0f64..2.0, 1..16),
            hit in prop_oneof![
                Just(Hit::Body),
                Just(Hit::Handle(Side::West)),
                Just(Hit::Handle(Side::East)),
                Just(Hit::Background),
            ],
        ) {
            let domain = Extent::UNIT;
            let mut current = extent(lo, lo + w);
            let (session, initial) = BrushSession::start(hit, press, current, domain);
            if let Some(e) = initial {
                current = e;
            }
            for m in moves {
                current = session.update(m, current);
                prop_assert!(current.lo() >= -1e-9 && current.hi() <= 1.0 + 1e-9);
                prop_assert!(current.lo() <= current.hi());
            }
        }
    }
}
