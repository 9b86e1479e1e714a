//! Interactive harness viewer/editor built on egui/eframe.
//!
//! Lives behind the `egui` cargo feature. The pure core (layout, routing,
//! highlighting, gestures) stays renderer-agnostic; this module supplies the
//! text measurement, painting and input plumbing around it.

pub mod colors;
pub mod render;
pub mod state;
pub mod ui;

pub use state::LoomApp;

use crate::model::HarnessDoc;
use camino::Utf8PathBuf;

/// Open the interactive viewer for a parsed document. Blocks until the
/// window is closed.
pub fn run(doc: HarnessDoc, path: Utf8PathBuf) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Harness"),
        ..Default::default()
    };
    let app = LoomApp::new(doc, path);
    eframe::run_native("rustyloom", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
