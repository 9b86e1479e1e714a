//! Harness description text parser.
//!
//! Provides [`HarnessParser`] to load the line-oriented harness format into
//! [`HarnessDoc`] structures. Parsing is best-effort: a malformed line is
//! recorded as a [`Diagnostic`] and scanning resumes at the next recognized
//! directive, so a partially populated harness is still returned.
//!
//! Format summary (blank lines and `#` comments are skipped everywhere; `.`
//! on a line by itself ends an enumerated block):
//!
//! - `dark_background` – file-global display flag
//! - `harness` – followed by a name line and a
//!   `default_length,default_gauge,default_colour` properties line
//! - `connector` – followed by a `name,type,mate[,reversed]` header line and
//!   pin lines `<number> <label>` until `.`
//! - `wiring` – lines `c1,p1,c2,p2[,colour[,thickness]]` until `.`

use crate::model::{
    Connector, Harness, HarnessDoc, MAX_WIRE_THICKNESS, Pin, Side, Wire, WireProp,
    DEFAULT_WIRE_THICKNESS,
};
use anyhow::{Context, Result};
use camino::Utf8Path;

/// A problem found while parsing. Parsing continues past it.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// 1-based line number in the input text.
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Cursor over the content lines of the input: skips blank and `#`-prefixed
/// lines and yields 1-based line numbers for diagnostics.
struct ContentLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> ContentLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        for (i, ln) in self.inner.by_ref() {
            let ln = ln.trim_end_matches('\r');
            if ln.is_empty() || ln.starts_with('#') {
                continue;
            }
            return Some((i + 1, ln));
        }
        None
    }
}

/// Best-effort parser for the harness description format.
#[derive(Debug, Default)]
pub struct HarnessParser {
    diagnostics: Vec<Diagnostic>,
}

impl HarnessParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a harness description file. An unreadable file is the
    /// only fatal error; everything else becomes a diagnostic.
    pub fn parse_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<HarnessDoc> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Unable to open {}", path))?;
        Ok(self.parse_str(&text))
    }

    /// Parse a harness description from text.
    pub fn parse_str(&mut self, text: &str) -> HarnessDoc {
        let mut doc = HarnessDoc::default();
        let mut lines = ContentLines::new(text);

        while let Some((n, ln)) = lines.next() {
            if ln == "dark_background" {
                doc.dark_background = true;
            } else if ln.starts_with("harness") {
                let Some((_, name)) = lines.next() else {
                    self.diag(n, "harness directive at end of input");
                    break;
                };
                let mut h = Harness {
                    name: name.to_string(),
                    ..Harness::default()
                };
                if let Some((pn, props)) = lines.next() {
                    self.parse_harness_properties(pn, props, &mut h);
                }
                doc.harnesses.push(h);
            } else if ln.starts_with("connector") {
                let Some(h) = doc.harnesses.last_mut() else {
                    self.diag(n, "connector block before any harness");
                    continue;
                };
                let mut c = Connector {
                    number: h.connectors.len() as u32 + 1,
                    ..Connector::default()
                };
                if let Some((_, header)) = lines.next() {
                    parse_connector_header(header, &mut c);
                }
                while let Some((pn, pin_ln)) = lines.next() {
                    if pin_ln.starts_with('.') {
                        // End of pin list for this connector
                        break;
                    }
                    if !self.parse_pin_entry(pn, pin_ln, &mut c) {
                        break;
                    }
                }
                h.connectors.push(c);
            } else if ln.starts_with("wiring") {
                let Some(h) = doc.harnesses.last_mut() else {
                    self.diag(n, "wiring block before any harness");
                    continue;
                };
                while let Some((wn, wire_ln)) = lines.next() {
                    if wire_ln.starts_with('.') {
                        // End of wiring table for this harness
                        break;
                    }
                    if let Some(w) = self.parse_wire_entry(wn, wire_ln, &h.name) {
                        h.wires.push(w);
                    }
                }
            }
            // Anything else is skipped until the next recognized directive.
        }

        doc
    }

    /// Diagnostics collected so far, in input order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all collected diagnostics to stderr.
    pub fn print_diagnostics(&self) {
        for d in &self.diagnostics {
            eprintln!("[rustyloom] Warning: {}", d);
        }
    }

    fn diag(&mut self, line: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.into(),
        });
    }

    /// `default_length,default_gauge,default_colour` – each missing field is
    /// an error, but whatever was present is kept.
    fn parse_harness_properties(&mut self, n: usize, s: &str, h: &mut Harness) {
        let mut fields = s.split(',');
        h.default_wire_length = fields.next().unwrap_or("").to_string();
        match fields.next() {
            Some(v) if !v.is_empty() => h.default_wire_gauge = v.to_string(),
            _ => {
                self.diag(n, format!("{}: missing <default_wire_gauge>", h.name));
                return;
            }
        }
        match fields.next() {
            Some(v) if !v.is_empty() => h.default_wire_colour = v.to_string(),
            _ => {
                self.diag(n, format!("{}: missing <default_wire_colour>", h.name));
            }
        }
    }

    /// `<number> <label…>` – the label may contain spaces. A missing label
    /// aborts the remaining pins of this connector; the bad pin is dropped.
    fn parse_pin_entry(&mut self, n: usize, s: &str, c: &mut Connector) -> bool {
        let (num, label) = match s.split_once(' ') {
            Some((a, b)) => (a, b),
            None => (s, ""),
        };
        let number = atoi(num);
        if label.is_empty() {
            self.diag(n, format!("{}: missing name for pin {}", c.name, number));
            return false;
        }
        c.pins.push(Pin {
            number,
            label: label.to_string(),
            ..Pin::default()
        });
        true
    }

    /// `c1,p1,c2,p2[,colour[,thickness]]` – an incomplete endpoint tuple
    /// skips the line; out-of-range thickness resets to the default.
    fn parse_wire_entry(&mut self, n: usize, s: &str, harness_name: &str) -> Option<Wire> {
        let mut fields = s.split(',');
        let mut w = Wire::default();

        let (Some(c1), Some(p1), Some(c2), Some(p2)) = (
            fields.next().map(atoi),
            fields.next().map(atoi),
            fields.next().map(atoi),
            fields.next().map(atoi),
        ) else {
            self.diag(n, format!("{}: invalid wire entry {}", harness_name, s));
            return None;
        };
        w.src.connector = c1.max(0) as u32;
        w.src.pin = p1;
        w.dst.connector = c2.max(0) as u32;
        w.dst.pin = p2;

        if let Some(colour) = fields.next() {
            w.colour = WireProp::Override(colour.to_string());
        }
        if let Some(th) = fields.next() {
            let v = th.trim().parse::<f32>().unwrap_or(0.0);
            if !(0.0..=MAX_WIRE_THICKNESS).contains(&v) {
                self.diag(n, format!("invalid wire thickness {}", v));
                w.thickness = DEFAULT_WIRE_THICKNESS;
            } else {
                w.thickness = v;
            }
        }

        Some(w)
    }
}

/// `name,type,mate[,reversed]` – missing trailing fields stay empty.
fn parse_connector_header(s: &str, c: &mut Connector) {
    let mut fields = s.split(',');
    if let Some(v) = fields.next() {
        c.name = v.to_string();
    }
    if let Some(v) = fields.next() {
        c.conn_type = v.to_string();
    }
    if let Some(v) = fields.next() {
        c.mate = v.to_string();
    }
    if fields.next() == Some("reversed") {
        c.side = Side::Right;
    }
}

/// C `atoi` semantics: optional sign, leading digits, trailing junk ignored.
fn atoi(s: &str) -> i32 {
    let t = s.trim_start();
    let mut chars = t.chars().peekable();
    let mut neg = false;
    if matches!(chars.peek(), Some('+') | Some('-')) {
        neg = chars.next() == Some('-');
    }
    let mut v: i32 = 0;
    for ch in chars {
        match ch.to_digit(10) {
            Some(d) => v = v.saturating_mul(10).saturating_add(d as i32),
            None => break,
        }
    }
    if neg { -v } else { v }
}
