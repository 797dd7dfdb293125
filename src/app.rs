use egui::{CursorIcon, Sense, Vec2};

use crate::input::InputHandler;
use crate::pad::SketchPad;
use crate::renderer::{self, CANVAS_SIZE, PainterSurface};
use crate::tools::{BRUSH_THICK, BRUSH_THIN, ToolConfig, ToolKind};

/// The eframe application shell: canvas, toolbar, and the per-frame
/// input → pad → redraw wiring.
///
/// Only UI preferences (the tool config, including user-added stickers) are
/// persisted across restarts; drawings are not.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchPadApp {
    tools: ToolConfig,
    new_sticker: String,
    #[serde(skip)]
    pad: SketchPad,
    #[serde(skip)]
    input: InputHandler,
}

impl Default for SketchPadApp {
    fn default() -> Self {
        Self {
            tools: ToolConfig::default(),
            new_sticker: String::new(),
            pad: SketchPad::new(),
            input: InputHandler::default(),
        }
    }
}

impl SketchPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(CANVAS_SIZE), Sense::click_and_drag());

        // The preview dot stands in for the cursor while hovering.
        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::None);
        }

        self.input.set_canvas_rect(response.rect);
        for event in self.input.process_input(ui.ctx()) {
            self.pad.handle_pointer(event, &self.tools);
        }

        let painter = painter.with_clip_rect(response.rect);
        let mut surface = PainterSurface::new(&painter, response.rect);
        renderer::redraw(&self.pad, &mut surface);
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.pad.clear();
            }
            if ui
                .add_enabled(self.pad.history().can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.pad.undo();
            }
            if ui
                .add_enabled(self.pad.history().can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.pad.redo();
            }

            #[cfg(not(target_arch = "wasm32"))]
            if ui.button("Export").clicked() {
                self.export();
            }
        });

        ui.horizontal(|ui| {
            let brush = self.tools.tool() == ToolKind::Brush;
            if ui
                .selectable_label(brush && self.tools.brush_width() == BRUSH_THIN, "Thin")
                .clicked()
            {
                self.tools.select_thin();
            }
            if ui
                .selectable_label(brush && self.tools.brush_width() == BRUSH_THICK, "Thick")
                .clicked()
            {
                self.tools.select_thick();
            }

            // Swatch showing the color the next stroke will use.
            let (swatch, painter) = ui.allocate_painter(Vec2::splat(14.0), Sense::hover());
            painter.rect_filled(swatch.rect, 2.0, self.tools.color());
        });

        ui.horizontal_wrapped(|ui| {
            for glyph in self.tools.stickers().to_vec() {
                let selected =
                    self.tools.tool() == ToolKind::Sticker && self.tools.glyph() == glyph;
                if ui.selectable_label(selected, &glyph).clicked() {
                    self.tools.select_sticker(&glyph);
                }
            }

            ui.add(
                egui::TextEdit::singleline(&mut self.new_sticker)
                    .hint_text("new sticker")
                    .desired_width(80.0),
            );
            if ui.button("Add").clicked() {
                self.tools.add_sticker(std::mem::take(&mut self.new_sticker));
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export(&self) {
        let bytes = match crate::export::export_png(&self.pad) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("export failed: {err}");
                return;
            }
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(crate::export::EXPORT_FILE_NAME)
            .save_file()
        else {
            return; // dialog cancelled
        };
        if let Err(err) = std::fs::write(&path, &bytes) {
            log::error!("could not write {}: {err}", path.display());
        }
    }
}

impl eframe::App for SketchPadApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Draw Pad");
            });
            ui.add_space(4.0);
            self.canvas(ui);
            ui.add_space(4.0);
            self.toolbar(ui);
        });
    }
}
