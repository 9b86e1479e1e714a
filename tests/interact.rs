use rustyloom::interact::{
    clear_under_pointer, delete_wires_at, delete_wires_under_pointer, mark_under_pointer,
    try_add_wire, AddWireOutcome, Interaction,
};
use rustyloom::model::{Harness, PinRef, WireProp};
use rustyloom::parser::HarnessParser;

fn pin(connector: u32, pin: i32) -> PinRef {
    PinRef { connector, pin }
}

fn harness() -> Harness {
    let input = "\
harness
H
30cm,26awg,GRAY
connector
J1,h,p
1 A
2 B
3 C
.
connector
J2,h,p
1 A
2 B
3 C
.
wiring
1,1,2,1
1,1,2,2
2,3,1,1
1,2,2,3
.
";
    let mut p = HarnessParser::new();
    let mut doc = p.parse_str(input);
    assert!(p.diagnostics().is_empty());
    doc.harnesses.remove(0)
}

#[test]
fn added_wire_inherits_harness_defaults() {
    let mut h = harness();
    let outcome = try_add_wire(&mut h, pin(1, 3), pin(2, 3)).unwrap();
    assert_eq!(outcome, AddWireOutcome::Added);
    let w = h.wires.last().unwrap();
    assert_eq!(w.colour, WireProp::Inherit);
    assert_eq!(w.gauge, WireProp::Inherit);
    assert_eq!(w.length, WireProp::Inherit);
    assert_eq!(w.thickness, 2.0);
}

#[test]
fn reversed_duplicate_is_a_noop() {
    let mut h = harness();
    let count = h.wires.len();
    assert_eq!(
        try_add_wire(&mut h, pin(1, 3), pin(2, 3)).unwrap(),
        AddWireOutcome::Added
    );
    assert_eq!(h.wires.len(), count + 1);
    // Same pair, opposite orientation: no-op.
    assert_eq!(
        try_add_wire(&mut h, pin(2, 3), pin(1, 3)).unwrap(),
        AddWireOutcome::Duplicate
    );
    assert_eq!(h.wires.len(), count + 1);
}

#[test]
fn addition_does_not_mark_the_harness_changed() {
    let mut h = harness();
    try_add_wire(&mut h, pin(1, 3), pin(2, 3)).unwrap();
    assert!(!h.changed);
}

#[test]
fn delete_removes_exactly_the_incident_wires() {
    let mut h = harness();
    // Pin (1,1) touches wires 0, 1 and 2; wire 3 is unrelated.
    assert_eq!(h.wires.len(), 4);
    let removed = delete_wires_at(&mut h, pin(1, 1));
    assert_eq!(removed, 3);
    assert_eq!(h.wires.len(), 1);
    assert_eq!(h.wires[0].src, pin(1, 2).into());
    assert_eq!(h.wires[0].dst, pin(2, 3).into());
    assert!(h.changed);
}

#[test]
fn delete_on_untouched_pin_changes_nothing() {
    let mut h = harness();
    let removed = delete_wires_at(&mut h, pin(2, 9));
    assert_eq!(removed, 0);
    assert_eq!(h.wires.len(), 4);
    assert!(!h.changed);
}

#[test]
fn delete_trigger_uses_and_clears_under_pointer_flags() {
    let mut h = harness();
    mark_under_pointer(&mut h, &[pin(1, 1)]);
    assert!(h.connectors[0].pins[0].under_pointer);

    let removed = delete_wires_under_pointer(&mut h);
    assert_eq!(removed, 3);
    assert!(!h.connectors[0].pins[0].under_pointer);

    // Nothing marked, nothing removed.
    assert_eq!(delete_wires_under_pointer(&mut h), 0);
}

#[test]
fn full_gesture_adds_a_wire_once() {
    let mut h = harness();
    let mut it = Interaction::new();
    let count = h.wires.len();

    // Drag from (1,3) over (2,2) and settle on (2,3) before release.
    it.pointer_held_on(pin(1, 3));
    it.pointer_held_on(pin(2, 2));
    it.pointer_held_on(pin(2, 3));
    let (a, b) = it.pointer_released().unwrap();
    assert_eq!((a, b), (pin(1, 3), pin(2, 3)));
    try_add_wire(&mut h, a, b).unwrap();
    clear_under_pointer(&mut h);
    assert_eq!(h.wires.len(), count + 1);

    // Releasing with only one pin selected attempts nothing.
    it.pointer_held_on(pin(1, 2));
    assert_eq!(it.pointer_released(), None);
    assert_eq!(h.wires.len(), count + 1);
}

#[test]
fn mark_under_pointer_replaces_previous_marks() {
    let mut h = harness();
    mark_under_pointer(&mut h, &[pin(1, 1)]);
    mark_under_pointer(&mut h, &[pin(2, 2)]);
    assert!(!h.connectors[0].pins[0].under_pointer);
    assert!(h.connectors[1].pins[1].under_pointer);
    clear_under_pointer(&mut h);
    assert!(!h.connectors[1].pins[1].under_pointer);
}
