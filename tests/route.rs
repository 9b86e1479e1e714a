use rustyloom::layout::{layout_harness, LayoutConfig, TextMetrics};
use rustyloom::parser::HarnessParser;
use rustyloom::route::route_all;

struct CharMetrics;
impl TextMetrics for CharMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }
    fn line_height(&self) -> f32 {
        16.0
    }
}

fn parse(input: &str) -> rustyloom::model::Harness {
    let mut p = HarnessParser::new();
    let mut doc = p.parse_str(input);
    doc.harnesses.remove(0)
}

#[test]
fn routes_connect_outward_edges() {
    let h = parse(
        "\
harness
H
1m,24awg,GRAY
connector
J1,h,p
1 A
.
connector
J2,h,p,reversed
1 A
.
wiring
1,1,2,1
.
",
    );
    let cfg = LayoutConfig::default();
    let l = layout_harness(&h, &CharMetrics, &cfg);
    let routed = route_all(&h, &l, &cfg);
    assert_eq!(routed.len(), 1);

    let pts = routed[0].points;
    // Source leaves the left connector's right edge, pulled rightward.
    assert_eq!(pts[0].x, l.connectors[0].outline.max.x);
    assert!(pts[1].x > pts[0].x);
    // Destination enters the right connector's left edge, pulled leftward.
    assert_eq!(pts[3].x, l.connectors[1].outline.min.x);
    assert!(pts[2].x < pts[3].x);
    // Bow distance: straight_fraction (0.2) * spacing_x (200) * zoom (1.0).
    assert_eq!(pts[1].x - pts[0].x, 40.0);
}

#[test]
fn same_side_pair_bows_outward() {
    let h = parse(
        "\
harness
H
1m,24awg,GRAY
connector
J1,h,p
1 A
.
connector
J2,h,p
1 A
.
wiring
1,1,2,1
.
",
    );
    let cfg = LayoutConfig::default();
    let l = layout_harness(&h, &CharMetrics, &cfg);
    let routed = route_all(&h, &l, &cfg);
    let pts = routed[0].points;
    // Both connectors sit in the left column with equal widths, so both
    // control points push past the shared edge instead of cancelling out.
    assert_eq!(pts[0].x, pts[3].x);
    assert!(pts[1].x > pts[0].x);
    assert!(pts[2].x > pts[3].x);
}

#[test]
fn out_of_range_references_are_skipped() {
    let h = parse(
        "\
harness
H
1m,24awg,GRAY
connector
J1,h,p
1 A
2 B
.
wiring
1,1,7,1
9,1,1,2
1,1,1,2
.
",
    );
    let cfg = LayoutConfig::default();
    let l = layout_harness(&h, &CharMetrics, &cfg);
    let routed = route_all(&h, &l, &cfg);
    // Only the wire with both ends in range survives.
    assert_eq!(routed.len(), 1);
    assert_eq!(routed[0].wire_index, 2);
}

#[test]
fn unknown_pin_number_is_skipped() {
    let h = parse(
        "\
harness
H
1m,24awg,GRAY
connector
J1,h,p
1 A
.
connector
J2,h,p
1 A
.
wiring
1,5,2,1
.
",
    );
    let cfg = LayoutConfig::default();
    let l = layout_harness(&h, &CharMetrics, &cfg);
    assert!(route_all(&h, &l, &cfg).is_empty());
}

#[test]
fn anchors_follow_pin_list_positions() {
    let h = parse(
        "\
harness
H
1m,24awg,GRAY
connector
J1,h,p
1 A
2 B
3 C
.
connector
J2,h,p,reversed
1 A
.
wiring
1,3,2,1
.
",
    );
    let cfg = LayoutConfig::default();
    let l = layout_harness(&h, &CharMetrics, &cfg);
    let routed = route_all(&h, &l, &cfg);
    let pts = routed[0].points;
    // Pin 3 is the third row: gap + (2.5 + 2) line heights below the top.
    let expected_y = l.connectors[0].outline.min.y + 10.0 + 16.0 * 4.5;
    assert_eq!(pts[0].y, expected_y);
}
