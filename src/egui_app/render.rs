//! Painting for the harness view: connector boxes, wire curves, rubber band.

use eframe::egui::epaint::CubicBezierShape;
use eframe::egui::{
    self, Align2, Color32, CornerRadius, Pos2, Stroke, StrokeKind,
};

use super::colors;
use crate::layout::{ConnectorLayout, TextMetrics, Vec2f};
use crate::model::{Connector, Harness, DEFAULT_WIRE_THICKNESS};
use crate::route::RoutedWire;

pub const TITLE_FONT_SCALE: f32 = 1.25;

/// Text measurement backed by the egui font system.
pub struct EguiMetrics {
    ctx: egui::Context,
    pub font: egui::FontId,
}

impl EguiMetrics {
    pub fn new(ctx: &egui::Context, font_size: f32) -> Self {
        Self {
            ctx: ctx.clone(),
            font: egui::FontId::monospace(font_size.clamp(1.0, 50.0)),
        }
    }

    pub fn title_font(&self) -> egui::FontId {
        egui::FontId::monospace(self.font.size * TITLE_FONT_SCALE)
    }
}

impl TextMetrics for EguiMetrics {
    fn text_width(&self, text: &str) -> f32 {
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_string(), self.font.clone(), Color32::WHITE)
                .size()
                .x
        })
    }

    fn line_height(&self) -> f32 {
        self.ctx.fonts(|f| f.row_height(&self.font)) + 2.0
    }
}

/// Foreground/background/highlight colours for the current display mode.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub foreground: Color32,
    pub background: Color32,
    pub highlight: Color32,
}

impl Palette {
    pub fn for_mode(dark_background: bool) -> Self {
        let highlight = colors::colour_or(colors::HIGHLIGHT_COLOUR_NAME, Color32::GOLD);
        if dark_background {
            Self {
                foreground: colors::DARK_FOREGROUND,
                background: colors::DARK_BACKGROUND,
                highlight,
            }
        } else {
            Self {
                foreground: colors::LIGHT_FOREGROUND,
                background: colors::LIGHT_BACKGROUND,
                highlight,
            }
        }
    }
}

pub fn pos2(v: Vec2f) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn rect(r: crate::layout::RectF) -> egui::Rect {
    egui::Rect::from_min_max(pos2(r.min), pos2(r.max))
}

/// Draw one connector box: rounded outline (thicker while hovered), name and
/// type rows, and the pin rows with their highlight colouring.
pub fn draw_connector(
    painter: &egui::Painter,
    cl: &ConnectorLayout,
    connector: &Connector,
    palette: &Palette,
    font: &egui::FontId,
    pointer: Option<Pos2>,
    zoom: f32,
) {
    let outline = rect(cl.outline);
    let mut line_thickness = 1.5;
    if pointer.is_some_and(|p| outline.contains(p)) {
        line_thickness += 1.0;
    }
    painter.rect_stroke(
        outline,
        CornerRadius::same(4),
        Stroke::new(line_thickness * zoom, palette.foreground),
        StrokeKind::Middle,
    );

    painter.text(
        pos2(cl.title_pos),
        Align2::LEFT_TOP,
        &cl.title,
        font.clone(),
        palette.foreground,
    );
    painter.text(
        pos2(cl.type_row_pos),
        Align2::LEFT_TOP,
        &cl.type_row,
        font.clone(),
        palette.foreground,
    );

    for (row, pin) in cl.pin_rows.iter().zip(&connector.pins) {
        let colour = if pin.highlighted {
            palette.highlight
        } else {
            palette.foreground
        };
        painter.text(
            pos2(row.rect.min),
            Align2::LEFT_TOP,
            &row.text,
            font.clone(),
            colour,
        );
    }
}

fn bezier(points: [Vec2f; 4], thickness: f32, colour: Color32) -> CubicBezierShape {
    CubicBezierShape::from_points_stroke(
        points.map(pos2),
        false,
        Color32::TRANSPARENT,
        Stroke::new(thickness, colour),
    )
}

/// Draw every routed wire: a slightly thicker underlay (foreground, or the
/// highlight colour when the wire is highlighted) beneath the wire's own
/// colour.
pub fn draw_wires(
    painter: &egui::Painter,
    harness: &Harness,
    routed: &[RoutedWire],
    palette: &Palette,
    zoom: f32,
) {
    for rw in routed {
        let w = &harness.wires[rw.wire_index];
        let (under_colour, under_thickness) = if w.highlighted {
            (palette.highlight, w.thickness + 4.0)
        } else {
            (palette.foreground, w.thickness + 0.5)
        };
        painter.add(bezier(rw.points, under_thickness * zoom, under_colour));
        let colour = colors::colour_or(
            w.colour.resolve(&harness.default_wire_colour),
            palette.foreground,
        );
        painter.add(bezier(rw.points, w.thickness * zoom, colour));
    }
}

/// Draw the in-flight gesture curve from the first selected pin to the
/// pointer.
pub fn draw_rubber_band(
    painter: &egui::Painter,
    points: [Vec2f; 4],
    palette: &Palette,
    zoom: f32,
) {
    painter.add(bezier(
        points,
        (DEFAULT_WIRE_THICKNESS + 4.5) * zoom,
        palette.highlight,
    ));
    painter.add(bezier(points, DEFAULT_WIRE_THICKNESS * zoom, palette.foreground));
}

/// Draw the harness name above the diagram in the scaled title font.
pub fn draw_title(
    painter: &egui::Painter,
    name: &str,
    origin: Vec2f,
    title_font: egui::FontId,
    palette: &Palette,
) {
    painter.text(
        Pos2::new(origin.x, origin.y - 5.0),
        Align2::LEFT_BOTTOM,
        name,
        title_font,
        palette.foreground,
    );
}
