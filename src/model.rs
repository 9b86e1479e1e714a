use serde::{Deserialize, Serialize};

/// Default wire thickness, also the reset value for out-of-range input.
pub const DEFAULT_WIRE_THICKNESS: f32 = 2.0;
/// Default bow factor for wire curves.
pub const DEFAULT_STRAIGHT_FRACTION: f32 = 0.2;
/// Maximum accepted wire thickness; anything above resets to the default.
pub const MAX_WIRE_THICKNESS: f32 = 20.0;

// ────────────────────────────────────────────────────────────────────────────
// HarnessDoc – document scope + binary serialization wrapper
// ────────────────────────────────────────────────────────────────────────────

/// A parsed harness description file: one or more harnesses plus the
/// file-global dark-background display flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessDoc {
    pub harnesses: Vec<Harness>,
    pub dark_background: bool,
}

impl HarnessDoc {
    /// Save the HarnessDoc to a binary file with magic bytes and versioning.
    pub fn save_to_binary<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        std::io::Write::write_all(&mut writer, b"RUSTYLOOM")?;
        std::io::Write::write_all(&mut writer, &1u32.to_le_bytes())?;
        bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
        Ok(())
    }

    /// Load a HarnessDoc from a binary file, checking magic bytes and version.
    pub fn load_from_binary<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mut magic = [0u8; 9];
        std::io::Read::read_exact(&mut reader, &mut magic)?;
        if &magic != b"RUSTYLOOM" {
            anyhow::bail!("Invalid magic bytes: expected 'RUSTYLOOM'");
        }
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut reader, &mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != 1 {
            anyhow::bail!("Unsupported version: {}", version);
        }
        let doc: HarnessDoc =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        Ok(doc)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Harness
// ────────────────────────────────────────────────────────────────────────────

/// One named diagram: a set of connectors plus the wires joining their pins.
///
/// Connector numbers are assigned 1..N in declaration order and never reused;
/// [`Harness::connector`] resolves a number back to its connector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Harness {
    pub name: String,
    /// Specified as strings to allow arbitrary units.
    pub default_wire_length: String,
    pub default_wire_gauge: String,
    pub default_wire_colour: String,
    pub connectors: Vec<Connector>,
    pub wires: Vec<Wire>,
    /// Set when the wiring was edited since load. Never persisted.
    #[serde(skip)]
    pub changed: bool,
}

impl Harness {
    /// Resolve a 1-based connector number.
    pub fn connector(&self, number: u32) -> Option<&Connector> {
        if number == 0 {
            return None;
        }
        self.connectors.get(number as usize - 1)
    }

    /// Returns true if any existing wire joins the same unordered pin pair.
    pub fn wire_exists(&self, a: PinRef, b: PinRef) -> bool {
        self.wires.iter().any(|w| {
            (w.src == a.into() && w.dst == b.into()) || (w.src == b.into() && w.dst == a.into())
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Connector / Pin
// ────────────────────────────────────────────────────────────────────────────

/// Which diagram column a connector is drawn in.
///
/// `Right` connectors (declared with the `reversed` header field) flip their
/// pin-row order and receive wires on their left edge. Both the layout engine
/// and the wire router branch on this value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Default for Side {
    fn default() -> Self {
        Side::Left
    }
}

impl Side {
    /// Horizontal direction pointing out of the connector, toward the wires.
    pub fn outward_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A physical plug or socket holding numbered, labeled pins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connector {
    pub name: String,
    /// 1-based position within the harness declaration order.
    pub number: u32,
    #[serde(rename = "type")]
    pub conn_type: String,
    pub mate: String,
    pub side: Side,
    pub pins: Vec<Pin>,
}

impl Connector {
    /// Index of the pin carrying the given printed number within the pin list.
    pub fn pin_index(&self, number: i32) -> Option<usize> {
        self.pins.iter().position(|p| p.number == number)
    }
}

/// One contact point within a connector.
///
/// Pin numbers are caller-supplied and expected strictly increasing within a
/// connector, but not validated. The two flags are frame-local render state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pin {
    pub number: i32,
    pub label: String,
    #[serde(skip)]
    pub highlighted: bool,
    #[serde(skip)]
    pub under_pointer: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire
// ────────────────────────────────────────────────────────────────────────────

/// One end of a wire: connector number plus printed pin number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireEnd {
    pub connector: u32,
    pub pin: i32,
}

/// Key for a pin during hover/highlight/gesture processing; identical in
/// content to [`WireEnd`] but named for its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PinRef {
    pub connector: u32,
    pub pin: i32,
}

impl From<PinRef> for WireEnd {
    fn from(p: PinRef) -> Self {
        WireEnd {
            connector: p.connector,
            pin: p.pin,
        }
    }
}

/// A wire property that either inherits the harness default or overrides it.
///
/// Resolved to a concrete string only at render/serialize time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value")]
pub enum WireProp {
    Inherit,
    Override(String),
}

impl Default for WireProp {
    fn default() -> Self {
        WireProp::Inherit
    }
}

impl WireProp {
    /// The effective value given the harness default.
    pub fn resolve<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            WireProp::Inherit => default,
            WireProp::Override(v) => v,
        }
    }

    /// True if this property overrides the harness default.
    pub fn is_override(&self) -> bool {
        matches!(self, WireProp::Override(_))
    }
}

/// A logical connection between two (connector, pin) endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wire {
    pub src: WireEnd,
    pub dst: WireEnd,
    pub colour: WireProp,
    pub gauge: WireProp,
    pub length: WireProp,
    pub thickness: f32,
    /// Fraction of the column gap the curve runs straight out of its
    /// connector before bending.
    pub straight_fraction: f32,
    #[serde(skip)]
    pub highlighted: bool,
}

impl Default for Wire {
    fn default() -> Self {
        Wire {
            src: WireEnd::default(),
            dst: WireEnd::default(),
            colour: WireProp::Inherit,
            gauge: WireProp::Inherit,
            length: WireProp::Inherit,
            thickness: DEFAULT_WIRE_THICKNESS,
            straight_fraction: DEFAULT_STRAIGHT_FRACTION,
            highlighted: false,
        }
    }
}

impl Wire {
    /// Create a wire joining two pins with all properties at harness defaults.
    pub fn joining(a: PinRef, b: PinRef) -> Self {
        Wire {
            src: a.into(),
            dst: b.into(),
            ..Wire::default()
        }
    }

    /// Returns true if either end of this wire lands on the given pin.
    pub fn touches(&self, pin: PinRef) -> bool {
        self.src == pin.into() || self.dst == pin.into()
    }
}
