//! Per-frame update: input handling, layout, highlight resolution, painting.
//!
//! Frame order follows the single-writer model: layout, highlight and
//! routing are computed from the frame's pointer snapshot, drawing consumes
//! them, and wiring mutations run in the release/key handlers afterwards.

use eframe::egui::{self, Key};

use super::render::{
    draw_connector, draw_rubber_band, draw_title, draw_wires, EguiMetrics, Palette,
};
use super::state::{LoomApp, FONT_SIZE, ZOOM_RATE};
use crate::highlight::{apply_highlights, resolve_highlights};
use crate::interact::{
    clear_under_pointer, delete_wires_under_pointer, mark_under_pointer, try_add_wire,
};
use crate::layout::{layout_harness, pins_under_pointer, HarnessLayout, LayoutConfig, Vec2f};
use crate::model::{Harness, PinRef};
use crate::route::{route_all, rubber_band};

/// Wire attachment point of a pin, for anchoring the rubber band.
fn pin_anchor(harness: &Harness, layout: &HarnessLayout, pin: PinRef) -> Option<Vec2f> {
    let c = harness.connector(pin.connector)?;
    let idx = c.pin_index(pin.pin)?;
    let cl = layout.connector(pin.connector)?;
    Some(layout.wire_anchor(cl, idx))
}

/// Handle held/pressed keys. Returns (delete_pressed, quit_requested).
fn handle_keys(app: &mut LoomApp, ctx: &egui::Context) -> (bool, bool) {
    ctx.input(|i| {
        if i.key_down(Key::Minus) {
            app.adjust_zoom(ZOOM_RATE);
        } else if i.key_down(Key::Plus) || (i.key_down(Key::Equals) && i.modifiers.shift) {
            app.adjust_zoom(-ZOOM_RATE);
        } else if i.key_down(Key::Num0) {
            app.zoom = 1.0;
        }

        if i.key_down(Key::L) {
            app.draw_offset.x -= 10.0;
        } else if i.key_down(Key::H) {
            app.draw_offset.x += 10.0;
        }
        if i.key_down(Key::J) {
            app.draw_offset.y -= 10.0;
        } else if i.key_down(Key::K) {
            app.draw_offset.y += 10.0;
        }

        if i.key_pressed(Key::Backspace) {
            app.reset_view();
        }
        if i.key_pressed(Key::S) && i.modifiers.ctrl {
            app.save();
        }
        if i.key_pressed(Key::N) {
            if i.modifiers.ctrl {
                app.export_template();
            } else {
                app.next_harness();
            }
        }
        if i.key_pressed(Key::P) {
            app.prev_harness();
        }

        (i.key_pressed(Key::D), i.key_pressed(Key::Q))
    })
}

pub fn update(app: &mut LoomApp, ctx: &egui::Context) {
    let palette = Palette::for_mode(app.doc.dark_background);

    let (pointer_pos, primary_down, primary_released, secondary_down, pointer_delta) =
        ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.secondary_down(),
                i.pointer.delta(),
            )
        });

    let (delete_pressed, quit_requested) = handle_keys(app, ctx);
    if quit_requested {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    if secondary_down {
        app.draw_offset.x += pointer_delta.x;
        app.draw_offset.y += pointer_delta.y;
    }

    let metrics = EguiMetrics::new(ctx, FONT_SIZE * app.zoom);
    let cfg = LayoutConfig {
        origin: app.draw_offset,
        zoom: app.zoom,
        ..LayoutConfig::default()
    };

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        let (name, changed) = app
            .active_harness()
            .map(|h| (h.name.clone(), h.changed))
            .unwrap_or_default();
        let mut status = format!(
            "{} ({}/{}){}",
            name,
            app.harness_index + 1,
            app.doc.harnesses.len(),
            if changed { " [modified]" } else { "" }
        );
        if let Some(err) = &app.last_error {
            status.push_str("  |  ");
            status.push_str(err);
        }
        ui.label(status);
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(palette.background))
        .show(ctx, |ui| {
            let painter = ui.painter();
            let Some(harness) = app.doc.harnesses.get_mut(app.harness_index) else {
                return;
            };

            let layout = layout_harness(harness, &metrics, &cfg);
            let pointer_v = pointer_pos.map(|p| Vec2f::new(p.x, p.y));
            let hovered = pointer_v
                .map(|p| pins_under_pointer(harness, &layout, p))
                .unwrap_or_default();

            let set = resolve_highlights(harness, &hovered);
            apply_highlights(harness, &set);
            mark_under_pointer(harness, &hovered);

            for (cl, c) in layout.connectors.iter().zip(&harness.connectors) {
                draw_connector(painter, cl, c, &palette, &metrics.font, pointer_pos, app.zoom);
            }
            let routed = route_all(harness, &layout, &cfg);
            draw_wires(painter, harness, &routed, &palette, app.zoom);
            draw_title(
                painter,
                &harness.name,
                cfg.origin,
                metrics.title_font(),
                &palette,
            );

            if primary_down {
                for pin in &hovered {
                    app.interaction.pointer_held_on(*pin);
                }
                if let (Some(first), Some(p)) = (app.interaction.first_pin(), pointer_v) {
                    if let Some(anchor) = pin_anchor(harness, &layout, first) {
                        draw_rubber_band(painter, rubber_band(anchor, p), &palette, app.zoom);
                    }
                }
            } else if primary_released {
                if let Some((a, b)) = app.interaction.pointer_released() {
                    if let Err(e) = try_add_wire(harness, a, b) {
                        eprintln!("[rustyloom] Warning: {}", e);
                        app.last_error = Some(e.to_string());
                    }
                    clear_under_pointer(harness);
                }
            }

            if delete_pressed {
                delete_wires_under_pointer(harness);
            }
        });

    // Keep hover highlighting live even without input events.
    ctx.request_repaint_after(std::time::Duration::from_millis(50));
}
