//! Connector box sizing and left/right column placement.
//!
//! This module is pure: text measurement is injected through the
//! [`TextMetrics`] trait so the layout can be computed (and tested) without a
//! font system. All coordinates are in screen space.
//!
//! A connector box stacks, top to bottom: the connector name, a synthesized
//! `type mate (N pins)` row, then one row per pin. `Side::Left` connectors
//! stack in a left column in declaration order; `Side::Right` connectors
//! stack in a right column offset by the widest left box plus the
//! zoom-scaled column gap. Pin rows are justified toward the connector's
//! outward edge so wire endpoints always face the harness midline.

use crate::model::{Harness, PinRef, Side};

/// Text measurement supplied by the renderer.
pub trait TextMetrics {
    /// Width of the rendered string, in layout units.
    fn text_width(&self, text: &str) -> f32;
    /// Height of one text row.
    fn line_height(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl RectF {
    pub fn from_min_max(min: Vec2f, max: Vec2f) -> Self {
        Self { min, max }
    }
    pub fn from_min_size(min: Vec2f, w: f32, h: f32) -> Self {
        Self {
            min,
            max: Vec2f::new(min.x + w, min.y + h),
        }
    }
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
    pub fn contains(&self, p: Vec2f) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Spacing constants and view state consumed by layout and routing.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Top-left corner of the left column (the pan offset).
    pub origin: Vec2f,
    /// Padding between a box outline and its text rows.
    pub outline_gap: f32,
    /// Horizontal gap between the columns, scaled by `zoom`.
    pub spacing_x: f32,
    /// Vertical gap between stacked boxes.
    pub spacing_y: f32,
    pub zoom: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Vec2f::new(5.0, 30.0),
            outline_gap: 10.0,
            spacing_x: 200.0,
            spacing_y: 30.0,
            zoom: 1.0,
        }
    }
}

/// One rendered pin row: its text and the rect it occupies on screen.
#[derive(Debug, Clone)]
pub struct PinRow {
    pub text: String,
    pub rect: RectF,
}

/// Computed geometry for one connector box.
#[derive(Debug, Clone)]
pub struct ConnectorLayout {
    pub number: u32,
    pub side: Side,
    pub outline: RectF,
    pub title: String,
    pub title_pos: Vec2f,
    pub type_row: String,
    pub type_row_pos: Vec2f,
    /// In pin-list order.
    pub pin_rows: Vec<PinRow>,
}

/// Computed geometry for a whole harness.
#[derive(Debug, Clone)]
pub struct HarnessLayout {
    /// In declaration order, indexable by connector number − 1.
    pub connectors: Vec<ConnectorLayout>,
    pub line_height: f32,
    pub outline_gap: f32,
    /// Widest box in the left column.
    pub left_width: f32,
}

impl HarnessLayout {
    /// Resolve a 1-based connector number.
    pub fn connector(&self, number: u32) -> Option<&ConnectorLayout> {
        if number == 0 {
            return None;
        }
        self.connectors.get(number as usize - 1)
    }

    /// Wire attachment point for the pin at `pin_index`: on the connector's
    /// outward edge, vertically centered on the pin's row.
    pub fn wire_anchor(&self, c: &ConnectorLayout, pin_index: usize) -> Vec2f {
        let x = match c.side {
            Side::Left => c.outline.max.x,
            Side::Right => c.outline.min.x,
        };
        let y = c.outline.min.y
            + self.outline_gap
            + self.line_height * (2.5 + pin_index as f32);
        Vec2f::new(x, y)
    }
}

/// The text of one pin row. `Left` rows put the label first (padded to the
/// connector's widest label), `Right` rows lead with the number.
fn pin_row_text(side: Side, number: i32, label: &str, max_label: usize) -> String {
    match side {
        Side::Left => format!("{:>width$} {:>3}", label, number, width = max_label),
        Side::Right => format!("{:>3} {}", number, label),
    }
}

/// Compute box geometry and column placement for every connector.
pub fn layout_harness(
    harness: &Harness,
    metrics: &dyn TextMetrics,
    cfg: &LayoutConfig,
) -> HarnessLayout {
    let lh = metrics.line_height();
    let gap = cfg.outline_gap;

    // Box sizing
    struct SizedBox {
        type_row: String,
        pin_texts: Vec<String>,
        width: f32,
        height: f32,
    }
    let mut sized: Vec<SizedBox> = Vec::with_capacity(harness.connectors.len());
    for c in &harness.connectors {
        let type_row = format!("{} {} ({} pins)", c.conn_type, c.mate, c.pins.len());
        let max_label = c.pins.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
        let pin_texts: Vec<String> = c
            .pins
            .iter()
            .map(|p| pin_row_text(c.side, p.number, &p.label, max_label))
            .collect();
        let mut w = metrics.text_width(&c.name).max(metrics.text_width(&type_row));
        for t in &pin_texts {
            w = w.max(metrics.text_width(t));
        }
        sized.push(SizedBox {
            type_row,
            pin_texts,
            width: w + gap * 2.0,
            height: lh * (2.0 + c.pins.len() as f32) + gap * 2.0,
        });
    }

    // Column placement
    let left_width = harness
        .connectors
        .iter()
        .zip(&sized)
        .filter(|(c, _)| c.side == Side::Left)
        .map(|(_, s)| s.width)
        .fold(0.0, f32::max);
    let right_x = cfg.origin.x + left_width + cfg.spacing_x * cfg.zoom;
    let mut y_left = cfg.origin.y;
    let mut y_right = cfg.origin.y;

    let mut connectors = Vec::with_capacity(sized.len());
    for (c, s) in harness.connectors.iter().zip(sized) {
        let min = match c.side {
            Side::Left => {
                let p = Vec2f::new(cfg.origin.x, y_left);
                y_left += s.height + cfg.spacing_y;
                p
            }
            Side::Right => {
                let p = Vec2f::new(right_x, y_right);
                y_right += s.height + cfg.spacing_y;
                p
            }
        };
        let outline = RectF::from_min_size(min, s.width, s.height);

        let title_pos = Vec2f::new(
            min.x + s.width / 2.0 - metrics.text_width(&c.name) / 2.0,
            min.y + gap,
        );
        let type_row_pos = Vec2f::new(
            min.x + s.width / 2.0 - metrics.text_width(&s.type_row) / 2.0,
            min.y + gap + lh,
        );

        let pin_rows = s
            .pin_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let tw = metrics.text_width(&text);
                let x = match c.side {
                    Side::Left => outline.max.x - gap - tw,
                    Side::Right => min.x + gap,
                };
                let y = min.y + gap + lh * (2.0 + i as f32);
                PinRow {
                    text,
                    rect: RectF::from_min_size(Vec2f::new(x, y), tw, lh),
                }
            })
            .collect();

        connectors.push(ConnectorLayout {
            number: c.number,
            side: c.side,
            outline,
            title: c.name.clone(),
            title_pos,
            type_row: s.type_row,
            type_row_pos,
            pin_rows,
        });
    }

    HarnessLayout {
        connectors,
        line_height: lh,
        outline_gap: gap,
        left_width,
    }
}

/// Every pin whose rendered row currently sits under the pointer.
pub fn pins_under_pointer(
    harness: &Harness,
    layout: &HarnessLayout,
    pointer: Vec2f,
) -> Vec<PinRef> {
    let mut hits = Vec::new();
    for (c, cl) in harness.connectors.iter().zip(&layout.connectors) {
        for (p, row) in c.pins.iter().zip(&cl.pin_rows) {
            if row.rect.contains(pointer) {
                hits.push(PinRef {
                    connector: c.number,
                    pin: p.number,
                });
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospace stand-in: every char is `char_w` wide.
    struct CharMetrics {
        char_w: f32,
        line_h: f32,
    }
    impl TextMetrics for CharMetrics {
        fn text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * self.char_w
        }
        fn line_height(&self) -> f32 {
            self.line_h
        }
    }

    #[test]
    fn pin_row_text_orders_by_side() {
        assert_eq!(pin_row_text(Side::Left, 2, "AGND", 6), "  AGND   2");
        assert_eq!(pin_row_text(Side::Right, 2, "AGND", 6), "  2 AGND");
    }

    #[test]
    fn box_height_counts_header_and_pins() {
        let mut h = Harness::default();
        h.connectors.push(crate::model::Connector {
            name: "J1".to_string(),
            number: 1,
            conn_type: "header".to_string(),
            mate: "plug".to_string(),
            pins: vec![
                crate::model::Pin {
                    number: 1,
                    label: "A".to_string(),
                    ..Default::default()
                },
                crate::model::Pin {
                    number: 2,
                    label: "B".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        let m = CharMetrics { char_w: 10.0, line_h: 16.0 };
        let cfg = LayoutConfig::default();
        let l = layout_harness(&h, &m, &cfg);
        // 2 header rows + 2 pins, padded top and bottom
        assert_eq!(l.connectors[0].outline.height(), 16.0 * 4.0 + 20.0);
        // widest row is the type row "header plug (2 pins)"
        assert_eq!(l.connectors[0].outline.width(), 20.0 * 10.0 + 20.0);
    }

    #[test]
    fn anchor_sits_on_outward_edge() {
        let mut h = Harness::default();
        for (number, side) in [(1u32, Side::Left), (2u32, Side::Right)] {
            h.connectors.push(crate::model::Connector {
                name: format!("J{}", number),
                number,
                side,
                pins: vec![crate::model::Pin {
                    number: 1,
                    label: "A".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            });
        }
        let m = CharMetrics { char_w: 8.0, line_h: 16.0 };
        let l = layout_harness(&h, &m, &LayoutConfig::default());
        let left = &l.connectors[0];
        let right = &l.connectors[1];
        assert_eq!(l.wire_anchor(left, 0).x, left.outline.max.x);
        assert_eq!(l.wire_anchor(right, 0).x, right.outline.min.x);
        // Row center: gap + 2.5 line heights below the box top
        assert_eq!(
            l.wire_anchor(left, 0).y,
            left.outline.min.y + 10.0 + 16.0 * 2.5
        );
    }
}
