//! Pointer-gesture tracking for creating and deleting wires.
//!
//! A wire is created by holding the pointer button over one pin, dragging to
//! a second pin, and releasing. While the button stays down, the pin under
//! the pointer replaces the second selection, so the gesture can be re-aimed
//! without restarting. All model mutation happens between frames, in the
//! release/key handlers.

use crate::model::{Harness, PinRef, Wire};
use anyhow::{Context, Result};

// ────────────────────────────────────────────────────────────────────────────
// Wire gesture state machine
// ────────────────────────────────────────────────────────────────────────────

/// Pointer-drag progress of the wire-creation gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireGesture {
    #[default]
    Idle,
    OneSelected {
        first: PinRef,
    },
    TwoSelected {
        first: PinRef,
        second: PinRef,
    },
}

/// Drives [`WireGesture`] from per-frame pointer reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    pub gesture: WireGesture,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a pin under the held-down pointer. The first distinct pin
    /// starts the gesture; the next distinct pin becomes (or replaces) the
    /// second selection. Re-reporting a selected pin is a no-op.
    pub fn pointer_held_on(&mut self, pin: PinRef) {
        self.gesture = match self.gesture {
            WireGesture::Idle => WireGesture::OneSelected { first: pin },
            WireGesture::OneSelected { first } if pin != first => {
                WireGesture::TwoSelected { first, second: pin }
            }
            WireGesture::TwoSelected { first, second } if pin != first && pin != second => {
                WireGesture::TwoSelected { first, second: pin }
            }
            unchanged => unchanged,
        };
    }

    /// Pointer released: yields the selected pair if the gesture reached two
    /// pins, and always returns to `Idle`.
    pub fn pointer_released(&mut self) -> Option<(PinRef, PinRef)> {
        let result = match self.gesture {
            WireGesture::TwoSelected { first, second } => Some((first, second)),
            _ => None,
        };
        self.gesture = WireGesture::Idle;
        result
    }

    /// Discard in-flight selection (e.g. when the active harness changes).
    pub fn cancel(&mut self) {
        self.gesture = WireGesture::Idle;
    }

    /// The gesture's anchor pin, for drawing the rubber band.
    pub fn first_pin(&self) -> Option<PinRef> {
        match self.gesture {
            WireGesture::Idle => None,
            WireGesture::OneSelected { first } | WireGesture::TwoSelected { first, .. } => {
                Some(first)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model mutation
// ────────────────────────────────────────────────────────────────────────────

/// Result of a wire-add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddWireOutcome {
    Added,
    /// A wire already joins this pin pair (in either orientation).
    Duplicate,
}

/// Append a wire joining two pins, with colour/gauge/length inherited from
/// the harness defaults. A pair already joined (compared unordered) is a
/// no-op. List growth failure surfaces as an error on this operation rather
/// than aborting the process.
pub fn try_add_wire(harness: &mut Harness, a: PinRef, b: PinRef) -> Result<AddWireOutcome> {
    if harness.wire_exists(a, b) {
        return Ok(AddWireOutcome::Duplicate);
    }
    harness
        .wires
        .try_reserve(1)
        .context("add-wire failed: out of memory")?;
    harness.wires.push(Wire::joining(a, b));
    Ok(AddWireOutcome::Added)
}

/// Remove every wire incident to the given pin, compacting the wire list.
/// Marks the harness changed if anything was removed. Returns the number of
/// wires removed.
pub fn delete_wires_at(harness: &mut Harness, pin: PinRef) -> usize {
    let before = harness.wires.len();
    harness.wires.retain(|w| !w.touches(pin));
    let removed = before - harness.wires.len();
    if removed > 0 {
        harness.changed = true;
    }
    removed
}

/// Delete trigger: remove all wires incident to any pin whose under-pointer
/// flag is set, clearing that flag. Returns the number of wires removed.
pub fn delete_wires_under_pointer(harness: &mut Harness) -> usize {
    let mut targets = Vec::new();
    for c in &mut harness.connectors {
        let number = c.number;
        for p in &mut c.pins {
            if p.under_pointer {
                targets.push(PinRef {
                    connector: number,
                    pin: p.number,
                });
                p.under_pointer = false;
            }
        }
    }
    targets
        .into_iter()
        .map(|pin| delete_wires_at(harness, pin))
        .sum()
}

/// Set the under-pointer flag on exactly the given pins, clearing the rest.
pub fn mark_under_pointer(harness: &mut Harness, hovered: &[PinRef]) {
    for c in &mut harness.connectors {
        let number = c.number;
        for p in &mut c.pins {
            p.under_pointer = hovered.iter().any(|h| h.connector == number && h.pin == p.number);
        }
    }
}

/// Reset every pin's under-pointer flag (gesture teardown).
pub fn clear_under_pointer(harness: &mut Harness) {
    for c in &mut harness.connectors {
        for p in &mut c.pins {
            p.under_pointer = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(connector: u32, pin: i32) -> PinRef {
        PinRef { connector, pin }
    }

    #[test]
    fn gesture_needs_two_distinct_pins() {
        let mut it = Interaction::new();
        it.pointer_held_on(pin(1, 1));
        it.pointer_held_on(pin(1, 1));
        assert_eq!(it.gesture, WireGesture::OneSelected { first: pin(1, 1) });
        assert_eq!(it.pointer_released(), None);
        assert_eq!(it.gesture, WireGesture::Idle);
    }

    #[test]
    fn further_pins_replace_the_second_selection() {
        let mut it = Interaction::new();
        it.pointer_held_on(pin(1, 1));
        it.pointer_held_on(pin(1, 2));
        it.pointer_held_on(pin(2, 7));
        assert_eq!(
            it.gesture,
            WireGesture::TwoSelected {
                first: pin(1, 1),
                second: pin(2, 7)
            }
        );
        assert_eq!(it.pointer_released(), Some((pin(1, 1), pin(2, 7))));
    }

    #[test]
    fn cancel_discards_selection() {
        let mut it = Interaction::new();
        it.pointer_held_on(pin(1, 1));
        it.pointer_held_on(pin(2, 1));
        it.cancel();
        assert_eq!(it.gesture, WireGesture::Idle);
        assert_eq!(it.pointer_released(), None);
    }
}
