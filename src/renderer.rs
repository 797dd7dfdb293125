use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::pad::SketchPad;

/// Side length of the square drawing surface, in pixels.
pub const CANVAS_SIZE: f32 = 256.0;

/// Background the pipeline fills before repainting commands.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// The drawing-primitive seam between commands and an actual surface.
///
/// Implemented for the on-screen egui painter here and for the export
/// raster in [`crate::export`]. Coordinates are canvas-local, origin
/// top-left, y down.
pub trait Surface {
    /// Fills the whole surface with an opaque color.
    fn clear(&mut self, color: Color32);

    /// Strokes a connected polyline. Fewer than two points is a degenerate
    /// path and must draw nothing.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draws `text` with its baseline at `at`.
    fn text(&mut self, at: Pos2, text: &str, size_px: f32, color: Color32);
}

/// On-screen surface over an egui [`Painter`], offsetting canvas-local
/// coordinates into the panel rectangle.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
}

impl<'a> PainterSurface<'a> {
    /// The painter should be clipped to `canvas` so strokes cannot spill
    /// into surrounding UI.
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self { painter, canvas }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas, 0.0, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, Stroke::new(width, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn text(&mut self, at: Pos2, text: &str, size_px: f32, color: Color32) {
        self.painter.text(
            self.to_screen(at),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size_px),
            color,
        );
    }
}

/// The redraw pipeline: background fill, every committed command in
/// insertion order (later commands paint over earlier ones), then the
/// preview iff one is visible. Pure function of the pad's state; safe to
/// invoke any number of times.
pub fn redraw(pad: &SketchPad, surface: &mut dyn Surface) {
    surface.clear(BACKGROUND);
    for command in pad.history().commands() {
        command.render(surface);
    }
    if let Some(preview) = pad.visible_preview() {
        preview.render(surface);
    }
}
