use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::renderer::Surface;

/// Font size used for sticker glyphs, on screen and in the export raster.
pub const STICKER_FONT_PX: f32 = 30.0;

/// A single drawable action on the pad.
///
/// `Stroke` and `Sticker` are the committable variants that live in the
/// history; the preview variants only ever occupy the pad's single preview
/// slot. Style is captured at creation time and never re-read from the tool
/// config, so changing tools mid-draw leaves existing commands untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// A freehand polyline.
    Stroke {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    /// A glyph placed at a single point.
    Sticker { at: Pos2, glyph: String },
    /// Hover hint for the brush tool: a filled dot under the cursor.
    BrushPreview {
        at: Pos2,
        radius: f32,
        color: Color32,
    },
    /// Hover hint for the sticker tool: the glyph tracking the cursor.
    StickerPreview { at: Pos2, glyph: String },
}

impl Command {
    pub fn stroke(start: Pos2, width: f32, color: Color32) -> Self {
        Command::Stroke {
            points: vec![start],
            width,
            color,
        }
    }

    pub fn sticker(at: Pos2, glyph: impl Into<String>) -> Self {
        Command::Sticker {
            at,
            glyph: glyph.into(),
        }
    }

    /// Whether this variant may be stored in the history.
    pub fn is_committable(&self) -> bool {
        matches!(self, Command::Stroke { .. } | Command::Sticker { .. })
    }

    /// Continues the command at `point`: strokes grow their polyline, every
    /// other variant is repositioned.
    pub fn extend(&mut self, point: Pos2) {
        match self {
            Command::Stroke { points, .. } => points.push(point),
            Command::Sticker { at, .. }
            | Command::BrushPreview { at, .. }
            | Command::StickerPreview { at, .. } => *at = point,
        }
    }

    /// Paints this command using only its stored style. A stroke with fewer
    /// than two points is a degenerate path and draws nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke {
                points,
                width,
                color,
            } => surface.stroke_polyline(points, *width, *color),
            Command::Sticker { at, glyph } | Command::StickerPreview { at, glyph } => {
                surface.text(*at, glyph, STICKER_FONT_PX, Color32::BLACK)
            }
            Command::BrushPreview { at, radius, color } => {
                surface.fill_circle(*at, *radius, *color)
            }
        }
    }
}
