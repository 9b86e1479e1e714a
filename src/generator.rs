//! Harness description text generator.
//!
//! Regenerates the line-oriented harness format from [`HarnessDoc`]
//! structures, including the explanatory comment header, so that a file can
//! be rewritten in place after editing. Also builds the starter template
//! document written by `--make-template`.

use crate::model::{
    Connector, Harness, HarnessDoc, Pin, Side, DEFAULT_WIRE_THICKNESS,
};
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fmt::Write as _;

/// File name used by template export.
pub const TEMPLATE_FILENAME: &str = "template_harness.txt";

/// Render a complete document back into the text format.
///
/// Optional wire fields nest: colour is emitted only when it differs from the
/// harness default, thickness only when colour was emitted and differs from
/// the built-in default, and gauge only when thickness was also emitted.
pub fn harness_doc_to_text(doc: &HarnessDoc) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}dark_background",
        if doc.dark_background { "" } else { "#" }
    );
    out.push_str("# comments like this and empty lines are ignored\n");
    out.push_str("# Format: consists of a 3-line 'harness' header\n");
    out.push_str("# followed by one or more 'connector' descriptions\n");
    out.push_str("# and a single 'wiring' section.\n");
    out.push('\n');
    out.push_str("# The end of an enumerated list, such as a pin list, is denoted by '.' on a\n");
    out.push_str("# line by itself.\n");
    out.push_str("# Pins must appear in increasing order.\n");

    for (i, h) in doc.harnesses.iter().enumerate() {
        let _ = writeln!(out, "\nharness {}", i + 1);
        let _ = writeln!(out, "{}", h.name);
        let _ = writeln!(
            out,
            "{},{},{}",
            h.default_wire_length, h.default_wire_gauge, h.default_wire_colour
        );
        out.push('\n');

        for (j, c) in h.connectors.iter().enumerate() {
            let _ = writeln!(out, "connector {}", j + 1);
            out.push_str("# <name>,<type>,<mate>[,reversed]\n");
            let _ = writeln!(
                out,
                "{},{},{}{}",
                c.name,
                c.conn_type,
                c.mate,
                if c.side == Side::Right { ",reversed" } else { "" }
            );
            for p in &c.pins {
                let _ = writeln!(out, "{} {}", p.number, p.label);
            }
            out.push_str(".\n\n");
        }

        out.push_str("wiring\n");
        out.push_str(
            "# <src_conn_#>,<src_pin_#>,<dst_conn_#>,<dst_pin_#>[,<wire_colour>][,<wire_thickness][,<wire_gauge>]\n",
        );
        for w in &h.wires {
            let _ = write!(
                out,
                "{},{},{},{}",
                w.src.connector, w.src.pin, w.dst.connector, w.dst.pin
            );
            let colour = w.colour.resolve(&h.default_wire_colour);
            if colour != h.default_wire_colour {
                let _ = write!(out, ",{}", colour);
                if w.thickness != DEFAULT_WIRE_THICKNESS {
                    let _ = write!(out, ",{}", w.thickness);
                    let gauge = w.gauge.resolve(&h.default_wire_gauge);
                    if gauge != h.default_wire_gauge {
                        let _ = write!(out, ",{}", gauge);
                    }
                }
            }
            out.push('\n');
        }
        out.push_str(".\n");
    }

    out
}

/// Rewrite a harness description file in place.
pub fn export_harness_doc(doc: &HarnessDoc, path: impl AsRef<Utf8Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path.as_std_path(), harness_doc_to_text(doc))
        .with_context(|| format!("Error opening {} for writing", path))
}

// ────────────────────────────────────────────────────────────────────────────
// Template
// ────────────────────────────────────────────────────────────────────────────

/// Append a connector with `n_pins` filler pins named `NC`, numbered 1..N.
fn add_connector(h: &mut Harness, name: &str, conn_type: &str, mate: &str, n_pins: i32) {
    let mut c = Connector {
        name: name.to_string(),
        number: h.connectors.len() as u32 + 1,
        conn_type: conn_type.to_string(),
        mate: mate.to_string(),
        ..Connector::default()
    };
    for i in 1..=n_pins {
        c.pins.push(Pin {
            number: i,
            label: "NC".to_string(),
            ..Pin::default()
        });
    }
    h.connectors.push(c);
}

/// The fixed starter document written by `--make-template`.
pub fn template_doc(dark_background: bool) -> HarnessDoc {
    let mut h = Harness {
        name: "<name>".to_string(),
        default_wire_length: "30cm".to_string(),
        default_wire_gauge: "26awg".to_string(),
        default_wire_colour: "GRAY".to_string(),
        ..Harness::default()
    };

    add_connector(&mut h, "J1", "header", "plug", 5);
    h.connectors[0].pins[0].label = "+5V".to_string();
    h.connectors[0].pins[1].label = "AGND".to_string();

    add_connector(&mut h, "J2", "header", "plug", 2);
    h.connectors[1].pins[0].label = "3V3".to_string();
    h.connectors[1].pins[1].label = "DGND".to_string();

    add_connector(&mut h, "J3", "DB9", "socket", 5);
    h.connectors[2].side = Side::Right;
    let labels = ["+5V", "+5V_RTN", "NC", "3V3", "3V3_RTN"];
    for (p, label) in h.connectors[2].pins.iter_mut().zip(labels) {
        p.label = label.to_string();
    }

    HarnessDoc {
        harnesses: vec![h],
        dark_background,
    }
}

/// Write the starter template to [`TEMPLATE_FILENAME`] in the working
/// directory.
pub fn export_template(dark_background: bool) -> Result<()> {
    export_harness_doc(&template_doc(dark_background), TEMPLATE_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PinRef, Wire, WireProp};

    fn doc_with_wire(wire: Wire) -> HarnessDoc {
        let mut h = Harness {
            name: "t".to_string(),
            default_wire_length: "1m".to_string(),
            default_wire_gauge: "24awg".to_string(),
            default_wire_colour: "GRAY".to_string(),
            ..Harness::default()
        };
        add_connector(&mut h, "J1", "header", "plug", 2);
        add_connector(&mut h, "J2", "header", "plug", 2);
        h.wires.push(wire);
        HarnessDoc {
            harnesses: vec![h],
            dark_background: false,
        }
    }

    fn wire_line(doc: &HarnessDoc) -> String {
        harness_doc_to_text(doc)
            .lines()
            .find(|l| l.starts_with("1,"))
            .unwrap()
            .to_string()
    }

    #[test]
    fn default_wire_emits_endpoints_only() {
        let w = Wire::joining(
            PinRef { connector: 1, pin: 1 },
            PinRef { connector: 2, pin: 2 },
        );
        assert_eq!(wire_line(&doc_with_wire(w)), "1,1,2,2");
    }

    #[test]
    fn thickness_needs_non_default_colour() {
        // The omission rule nests: a default colour suppresses the thickness
        // field even when the thickness itself is non-default.
        let mut w = Wire::joining(
            PinRef { connector: 1, pin: 1 },
            PinRef { connector: 2, pin: 2 },
        );
        w.thickness = 3.5;
        assert_eq!(wire_line(&doc_with_wire(w.clone())), "1,1,2,2");

        w.colour = WireProp::Override("RED".to_string());
        assert_eq!(wire_line(&doc_with_wire(w)), "1,1,2,2,RED,3.5");
    }

    #[test]
    fn gauge_needs_colour_and_thickness() {
        let mut w = Wire::joining(
            PinRef { connector: 1, pin: 1 },
            PinRef { connector: 2, pin: 2 },
        );
        w.gauge = WireProp::Override("30awg".to_string());
        assert_eq!(wire_line(&doc_with_wire(w.clone())), "1,1,2,2");

        w.colour = WireProp::Override("RED".to_string());
        assert_eq!(wire_line(&doc_with_wire(w.clone())), "1,1,2,2,RED");

        w.thickness = 4.0;
        assert_eq!(wire_line(&doc_with_wire(w)), "1,1,2,2,RED,4,30awg");
    }

    #[test]
    fn override_equal_to_default_is_omitted() {
        let mut w = Wire::joining(
            PinRef { connector: 1, pin: 1 },
            PinRef { connector: 2, pin: 2 },
        );
        w.colour = WireProp::Override("GRAY".to_string());
        w.thickness = 9.0;
        assert_eq!(wire_line(&doc_with_wire(w)), "1,1,2,2");
    }

    #[test]
    fn dark_background_flag_round_trips_to_text() {
        let text = harness_doc_to_text(&template_doc(true));
        assert!(text.starts_with("dark_background\n"));
        let text = harness_doc_to_text(&template_doc(false));
        assert!(text.starts_with("#dark_background\n"));
    }
}
