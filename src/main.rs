//! Headless replay of the brush demos
//!
//! Run with: cargo run --bin brush-cli --features cli -- 0.8 0.95 0.1
//!
//! Each argument is a click target on the centering demo. The tween is driven
//! to convergence without a display loop and the result is logged.

use brush_vis::core::tween::FrameReport;
use brush_vis::core::{BrushDemo, DemoConfig, DemoKind, FrameScheduler, Hit, LinearScale, Pointer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Targets replayed when none are given
const DEFAULT_TARGETS: [f64; 3] = [0.8, 0.95, 0.1];

/// Pixels the static brush is dragged to the right
const DRAG_PX: f32 = 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,brush_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = DemoConfig::from_env()?;
    let targets = parse_targets(std::env::args().skip(1));

    let width = config.layout.width();
    let scale = LinearScale::new(config.domain, (0.0, width))?;
    info!(
        samples = config.sample_count,
        seed = ?config.seed,
        width,
        targets = targets.len(),
        "Replaying brush gestures"
    );

    let mut centering = BrushDemo::new(DemoKind::Centering, config.clone())?;
    let scheduler = FrameScheduler::default();

    for target in targets {
        let before = centering.extent();
        let Some(report) = replay_target(&mut centering, &scale, &scheduler, target) else {
            continue;
        };
        info!(
            target,
            from = %before,
            to = %centering.extent(),
            steps = report.frames,
            converged = report.finished,
            selected = centering.selection().count(),
            "Recentered"
        );
    }

    let mut fixed = BrushDemo::new(DemoKind::Static, config)?;
    let before = fixed.extent();
    let grab = scale.scale(before.center());
    if let Some(hit) = fixed.pointer_down(Pointer::at(grab), &scale) {
        fixed.pointer_move(grab + DRAG_PX, &scale);
        fixed.pointer_up(grab + DRAG_PX, &scale);
        info!(
            ?hit,
            from = %before,
            to = %fixed.extent(),
            selected = fixed.selection().count(),
            changes = fixed.change_count(),
            "Dragged static brush"
        );
    }

    Ok(())
}

/// Click the centering demo at `target` and run the tween to rest.
///
/// Targets landing on the brush body or a grip would start a drag instead of
/// a recenter; those are skipped, as are presses the demo refuses.
fn replay_target(
    demo: &mut BrushDemo,
    scale: &LinearScale,
    scheduler: &FrameScheduler,
    target: f64,
) -> Option<FrameReport> {
    let pointer = Pointer::at(scale.scale(target));
    let hit = demo.hit_test(pointer, scale);
    if hit != Hit::Background {
        warn!(target, ?hit, "Target is on the brush, skipping");
        return None;
    }
    if demo.pointer_down(pointer, scale).is_none() {
        warn!(target, "Press refused");
        return None;
    }
    let report = scheduler.run(demo);
    demo.pointer_up(pointer.x, scale);
    Some(report)
}

/// Parse positional targets, skipping anything that is not a number.
fn parse_targets(args: impl Iterator<Item = String>) -> Vec<f64> {
    let targets: Vec<f64> = args
        .filter_map(|arg| match arg.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                warn!(arg = %arg, "Ignoring non-numeric target");
                None
            }
        })
        .collect();

    if targets.is_empty() {
        DEFAULT_TARGETS.to_vec()
    } else {
        targets
    }
}
