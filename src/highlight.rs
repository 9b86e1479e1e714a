//! Hover/selection highlight propagation.
//!
//! Hovering a pin highlights it; a wire is highlighted when either of its
//! endpoint pins is; a pin is highlighted when any incident wire is. The
//! resolver iterates this to a fixed point once per frame and returns the
//! result as a [`HighlightSet`], fully decoupled from drawing. The transient
//! flags on [`Pin`]/[`Wire`] are only written by [`apply_highlights`] just
//! before rendering.

use crate::model::{Harness, PinRef};
use std::collections::BTreeSet;

/// The converged highlight state for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    /// Highlighted pins, keyed by (connector number, pin number).
    pub pins: BTreeSet<(u32, i32)>,
    /// Indices into `harness.wires`.
    pub wires: BTreeSet<usize>,
}

impl HighlightSet {
    pub fn contains_pin(&self, pin: PinRef) -> bool {
        self.pins.contains(&(pin.connector, pin.pin))
    }
    pub fn contains_wire(&self, index: usize) -> bool {
        self.wires.contains(&index)
    }
}

/// Propagate highlight between hovered pins and their wires to a fixed point.
///
/// Flags only ever flip on, so the loop is bounded by pin count + wire count
/// passes; in practice it converges in a handful.
pub fn resolve_highlights(harness: &Harness, hovered: &[PinRef]) -> HighlightSet {
    let mut set = HighlightSet::default();
    for p in hovered {
        set.pins.insert((p.connector, p.pin));
    }

    loop {
        let mut updated = false;
        for (i, w) in harness.wires.iter().enumerate() {
            if set.wires.contains(&i) {
                continue;
            }
            if set.pins.contains(&(w.src.connector, w.src.pin))
                || set.pins.contains(&(w.dst.connector, w.dst.pin))
            {
                set.wires.insert(i);
                updated = true;
            }
        }
        for i in &set.wires {
            let w = &harness.wires[*i];
            updated |= set.pins.insert((w.src.connector, w.src.pin));
            updated |= set.pins.insert((w.dst.connector, w.dst.pin));
        }
        if !updated {
            return set;
        }
    }
}

/// Write the resolved set onto the transient pin/wire flags for rendering.
pub fn apply_highlights(harness: &mut Harness, set: &HighlightSet) {
    for c in &mut harness.connectors {
        let number = c.number;
        for p in &mut c.pins {
            p.highlighted = set.pins.contains(&(number, p.number));
        }
    }
    for (i, w) in harness.wires.iter_mut().enumerate() {
        w.highlighted = set.wires.contains(&i);
    }
}

/// Reset every transient highlight flag.
pub fn clear_highlights(harness: &mut Harness) {
    for c in &mut harness.connectors {
        for p in &mut c.pins {
            p.highlighted = false;
        }
    }
    for w in &mut harness.wires {
        w.highlighted = false;
    }
}
