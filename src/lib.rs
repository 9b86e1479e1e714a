//! Wiring-harness diagram model, codec and geometry.
//!
//! This crate parses a compact, hand-authored text format describing wiring
//! harnesses (connectors with numbered, labeled pins, and wires joining pin
//! pairs) into strongly-typed Rust structures, and provides the pure
//! geometry/state engines behind the interactive diagram view: connector box
//! layout, wire curve routing, hover highlight resolution and the
//! wire-editing pointer gestures.
//!
//! The binary `rustyloom` loads a harness file and opens the interactive
//! viewer (with the `egui` feature) or prints the parsed JSON.

pub mod generator;
pub mod highlight;
pub mod interact;
pub mod layout;
pub mod model;
pub mod parser;
pub mod route;

// Optional GUI functionality lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;
