//! Wire curve routing.
//!
//! Each wire is drawn as a cubic bezier whose control points pull the curve
//! horizontally out of its connector before it bends toward the other end.
//! The control offset direction follows the connector's [`Side`], so a wire
//! between two connectors on the same visual side bows outward instead of
//! collapsing onto the boxes.

use crate::layout::{HarnessLayout, LayoutConfig, Vec2f};
use crate::model::{Harness, Side, WireEnd, DEFAULT_STRAIGHT_FRACTION};

/// A wire resolved to screen space, ready to draw.
#[derive(Debug, Clone)]
pub struct RoutedWire {
    /// Index into `harness.wires`.
    pub wire_index: usize,
    /// Cubic bezier control polygon: endpoint, control, control, endpoint.
    pub points: [Vec2f; 4],
}

/// Control polygon for a single wire given its resolved endpoints.
pub fn route_wire(
    src: Vec2f,
    src_side: Side,
    dst: Vec2f,
    dst_side: Side,
    straight_fraction: f32,
    cfg: &LayoutConfig,
) -> [Vec2f; 4] {
    let dx = straight_fraction * cfg.spacing_x * cfg.zoom;
    let c1 = Vec2f::new(src.x + src_side.outward_sign() * dx, src.y);
    let c2 = Vec2f::new(dst.x + dst_side.outward_sign() * dx, dst.y);
    [src, c1, c2, dst]
}

/// Resolve one wire end against the layout. `None` if the connector number is
/// out of range or the pin number is not present in that connector.
fn resolve_end(
    harness: &Harness,
    layout: &HarnessLayout,
    end: WireEnd,
) -> Option<(Vec2f, Side)> {
    let connector = harness.connector(end.connector)?;
    let pin_index = connector.pin_index(end.pin)?;
    let cl = layout.connector(end.connector)?;
    Some((layout.wire_anchor(cl, pin_index), cl.side))
}

/// Route every wire of the harness. A wire referencing a connector or pin
/// outside the harness is skipped with a stderr diagnostic; loading is never
/// aborted over it.
pub fn route_all(
    harness: &Harness,
    layout: &HarnessLayout,
    cfg: &LayoutConfig,
) -> Vec<RoutedWire> {
    let mut routed = Vec::with_capacity(harness.wires.len());
    for (i, w) in harness.wires.iter().enumerate() {
        let Some((src, src_side)) = resolve_end(harness, layout, w.src) else {
            eprintln!(
                "[rustyloom] Warning: invalid source connector number for wire {}",
                i + 1
            );
            continue;
        };
        let Some((dst, dst_side)) = resolve_end(harness, layout, w.dst) else {
            eprintln!(
                "[rustyloom] Warning: invalid target connector number for wire {}",
                i + 1
            );
            continue;
        };
        routed.push(RoutedWire {
            wire_index: i,
            points: route_wire(src, src_side, dst, dst_side, w.straight_fraction, cfg),
        });
    }
    routed
}

/// Curve from a selected pin to the pointer while a wire gesture is in
/// flight. The bow scales with the horizontal span instead of the column gap.
pub fn rubber_band(from: Vec2f, to: Vec2f) -> [Vec2f; 4] {
    let dx = DEFAULT_STRAIGHT_FRACTION * (to.x - from.x);
    [
        from,
        Vec2f::new(from.x + dx, from.y),
        Vec2f::new(to.x - dx, to.y),
        to,
    ]
}
