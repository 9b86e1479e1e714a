//! Viewer application state.

use camino::Utf8PathBuf;
use eframe::egui;

use crate::generator;
use crate::interact::Interaction;
use crate::layout::Vec2f;
use crate::model::{Harness, HarnessDoc};

pub const FONT_SIZE: f32 = 14.0;
pub const ZOOM_RATE: f32 = 0.02;
pub const MINIMUM_ZOOM: f32 = 0.3;
pub const MAXIMUM_ZOOM: f32 = 3.0;
pub const DEFAULT_DRAW_OFFSET: Vec2f = Vec2f { x: 5.0, y: 30.0 };

/// Interactive viewer/editor for a harness description file.
pub struct LoomApp {
    pub doc: HarnessDoc,
    pub file_path: Utf8PathBuf,
    pub harness_index: usize,
    pub zoom: f32,
    pub draw_offset: Vec2f,
    pub interaction: Interaction,
    /// Most recent save/export failure, shown in the status row.
    pub last_error: Option<String>,
}

impl LoomApp {
    pub fn new(doc: HarnessDoc, file_path: Utf8PathBuf) -> Self {
        Self {
            doc,
            file_path,
            harness_index: 0,
            zoom: 1.0,
            draw_offset: DEFAULT_DRAW_OFFSET,
            interaction: Interaction::new(),
            last_error: None,
        }
    }

    pub fn active_harness(&self) -> Option<&Harness> {
        self.doc.harnesses.get(self.harness_index)
    }

    pub fn active_harness_mut(&mut self) -> Option<&mut Harness> {
        self.doc.harnesses.get_mut(self.harness_index)
    }

    /// Select the next harness; clamps at the end. Discards any in-flight
    /// wire gesture.
    pub fn next_harness(&mut self) {
        if self.harness_index + 1 < self.doc.harnesses.len() {
            self.harness_index += 1;
        }
        self.interaction.cancel();
    }

    /// Select the previous harness; clamps at the start. Discards any
    /// in-flight wire gesture.
    pub fn prev_harness(&mut self) {
        self.harness_index = self.harness_index.saturating_sub(1);
        self.interaction.cancel();
    }

    pub fn adjust_zoom(&mut self, amount: f32) {
        self.zoom = (self.zoom - amount).clamp(MINIMUM_ZOOM, MAXIMUM_ZOOM);
    }

    pub fn reset_view(&mut self) {
        self.draw_offset = DEFAULT_DRAW_OFFSET;
    }

    /// Rewrite the loaded file in place and clear the changed flags.
    pub fn save(&mut self) {
        match generator::export_harness_doc(&self.doc, &self.file_path) {
            Ok(()) => {
                for h in &mut self.doc.harnesses {
                    h.changed = false;
                }
                self.last_error = None;
            }
            Err(e) => {
                eprintln!("[rustyloom] Error saving harness description: {}", e);
                self.last_error = Some(format!("save failed: {}", e));
            }
        }
    }

    /// Write the starter template next to the current working directory.
    pub fn export_template(&mut self) {
        if let Err(e) = generator::export_template(self.doc.dark_background) {
            eprintln!(
                "[rustyloom] Error exporting harness description template: {}",
                e
            );
            self.last_error = Some(format!("template export failed: {}", e));
        }
    }
}

impl eframe::App for LoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}
