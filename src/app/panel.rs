//! One demo card: scatter plot, x axis and the interactive brush overlay
//!
//! egui_plot draws the dots and the axis. The brush is painted on top of the
//! plot frame and driven by raw pointer input, mapped through a
//! [`LinearScale`] rebuilt from the plot transform every frame.

use eframe::egui;
use egui::{pos2, vec2, Color32, CursorIcon, Pos2, Rect, Shape, Stroke};
use egui_plot::{Plot, PlotPoints, Points};
use tracing::debug;

use crate::core::{BrushDemo, DemoKind, FrameDriven, Hit, LinearScale, Pointer};
use crate::theme::colors;
use crate::time::FrameClock;

/// Segments per half-disc grip
const ARC_SEGMENTS: usize = 16;

pub(crate) struct DemoPanel {
    pub(crate) demo: BrushDemo,
    clock: FrameClock,
    /// Last pointer x seen during a gesture, for releases outside the window
    last_x: Option<f32>,
}

impl DemoPanel {
    pub(crate) fn new(demo: BrushDemo) -> Self {
        Self {
            demo,
            clock: FrameClock::default(),
            last_x: None,
        }
    }

    /// Draw the card and feed it this frame's input. Returns the plot frame.
    pub(crate) fn show(&mut self, ui: &mut egui::Ui) -> Option<Rect> {
        ui.label(
            egui::RichText::new(self.demo.kind().label())
                .color(colors::TEXT_MUTED)
                .size(14.0),
        );

        let plot = self.render_plot(ui);
        if let Some((frame, scale)) = &plot {
            self.handle_pointer(ui, *frame, scale);
            self.advance_tween();
            self.paint_brush(ui, *frame, scale);
        }

        self.render_status(ui);
        plot.map(|(frame, _)| frame)
    }

    /// Scatter + axis. Returns the plot frame and a scale onto it.
    fn render_plot(&self, ui: &mut egui::Ui) -> Option<(Rect, LinearScale)> {
        let config = self.demo.config();
        let layout = config.layout;
        let domain = self.demo.domain();
        let band = layout.height() as f64;

        let mut plain: Vec<[f64; 2]> = Vec::new();
        let mut selected: Vec<[f64; 2]> = Vec::new();
        for (i, sample) in self.demo.samples().iter().enumerate() {
            // offsets count down from the top; plot y grows upward
            let point = [sample.value, band - sample.offset as f64];
            if self.demo.selection().is_selected(i) {
                selected.push(point);
            } else {
                plain.push(point);
            }
        }

        let radius = config.dot_radius;
        let response = Plot::new(("brush_plot", self.demo.kind().label()))
            .width(layout.width())
            .height(layout.height() + layout.margin.bottom)
            .show_axes([true, false])
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_background(false)
            .set_margin_fraction(vec2(0.0, 0.0))
            .include_x(domain.lo())
            .include_x(domain.hi())
            .include_y(0.0)
            .include_y(band)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from(plain))
                        .color(colors::DOT)
                        .radius(radius)
                        .filled(true),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(selected))
                        .color(colors::DOT_SELECTED)
                        .radius(radius)
                        .filled(true),
                );
            });

        let transform = response.transform;
        let range = (
            transform.position_from_point_x(domain.lo()),
            transform.position_from_point_x(domain.hi()),
        );
        let scale = LinearScale::new(domain, range).ok()?;
        Some((*transform.frame(), scale))
    }

    /// Translate raw pointer input into the demo's pointer_down / move / up.
    fn handle_pointer(&mut self, ui: &mut egui::Ui, frame: Rect, scale: &LinearScale) {
        let id = ui.id().with(("brush_overlay", self.demo.kind().label()));
        let overlay = ui.interact(frame, id, egui::Sense::click_and_drag());

        let (pressed, released, moved, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.latest_pos(),
            )
        });
        let pointer = pos.map(|p| Pointer {
            x: p.x,
            dy: p.y - frame.center().y,
        });

        if let Some(pointer) = pointer {
            if overlay.hovered() && !self.demo.is_gesture_active() {
                ui.ctx().set_cursor_icon(cursor_for(self.demo.hit_test(pointer, scale), self.demo.kind()));
            }
        }

        // a quick click can press and release within one frame
        if pressed && overlay.hovered() {
            if let Some(pointer) = pointer {
                if let Some(hit) = self.demo.pointer_down(pointer, scale) {
                    debug!(kind = %self.demo.kind(), ?hit, "Pointer down");
                    self.last_x = Some(pointer.x);
                }
            }
        }

        if !self.demo.is_gesture_active() {
            return;
        }

        let x = pointer.map(|p| p.x).or(self.last_x);
        let Some(x) = x else {
            return;
        };

        if released {
            self.demo.pointer_up(x, scale);
            self.last_x = None;
        } else if moved {
            self.demo.pointer_move(x, scale);
            self.last_x = Some(x);
        }
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    }

    /// One tween frame per egui frame.
    fn advance_tween(&mut self) {
        let animating = self.demo.is_animating();
        let step = self.clock.next(animating);
        if animating && self.demo.on_frame(step).is_done() {
            debug!(
                kind = %self.demo.kind(),
                frames = step + 1,
                seconds = self.clock.elapsed(),
                "Recenter finished"
            );
        }
    }

    fn paint_brush(&self, ui: &egui::Ui, frame: Rect, scale: &LinearScale) {
        let extent = self.demo.extent();
        let painter = ui.painter();
        let x0 = scale.scale(extent.lo());
        let x1 = scale.scale(extent.hi());
        let body = Rect::from_min_max(pos2(x0, frame.top()), pos2(x1, frame.bottom()));

        if !extent.is_empty() {
            painter.rect_filled(body, 0.0, colors::BRUSH_FILL);
            painter.add(Shape::closed_line(
                vec![body.left_top(), body.right_top(), body.right_bottom(), body.left_bottom()],
                Stroke::new(1.0, colors::BRUSH_STROKE),
            ));
        }

        let handle_color = if self.demo.is_gesture_active() || self.demo.is_animating() {
            colors::HANDLE_ACTIVE
        } else {
            colors::HANDLE_FILL
        };
        let radius = self.demo.handles().arc_radius;
        let mid_y = frame.center().y;
        for (x, outward) in [(x0, -1.0f32), (x1, 1.0)] {
            painter.add(half_disc(pos2(x, mid_y), radius, outward, handle_color));
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let extent = self.demo.extent();
        let selection = self.demo.selection();
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} / {} selected",
                    selection.count(),
                    self.demo.samples().len()
                ))
                .color(colors::TEXT_SECONDARY)
                .monospace(),
            );
            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
            ui.label(
                egui::RichText::new(format!("extent {}", extent))
                    .color(colors::TEXT_MUTED)
                    .monospace(),
            );
            if let Some(target) = self.demo.tween_target() {
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("target {:.3}", target))
                        .color(colors::TEXT_MUTED)
                        .monospace(),
                );
            }
        });
    }
}

fn cursor_for(hit: Hit, kind: DemoKind) -> CursorIcon {
    match (hit, kind) {
        (Hit::Handle(_), _) => CursorIcon::ResizeHorizontal,
        (Hit::Body, _) => CursorIcon::Grab,
        (Hit::Background, DemoKind::Centering) => CursorIcon::PointingHand,
        (Hit::Background, DemoKind::Static) => CursorIcon::Crosshair,
    }
}

/// Filled half-disc bulging left (`outward < 0`) or right of `center`.
fn half_disc(center: Pos2, radius: f32, outward: f32, fill: Color32) -> Shape {
    let points: Vec<Pos2> = (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = std::f32::consts::PI * (i as f32 / ARC_SEGMENTS as f32 - 0.5);
            pos2(center.x + outward * radius * t.cos(), center.y + radius * t.sin())
        })
        .collect();
    Shape::convex_polygon(points, fill, Stroke::new(1.0, colors::BRUSH_STROKE))
}
