use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::Command;

pub const BRUSH_THIN: f32 = 1.0;
pub const BRUSH_THICK: f32 = 3.0;

/// The fixed palette a brush selection draws its color from.
pub const PALETTE: [Color32; 6] = [
    Color32::BLACK,
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
    Color32::from_rgb(255, 192, 203), // pink
];

const INITIAL_STICKERS: [&str; 3] = ["👁️", "🐶", "🥞"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Brush,
    Sticker,
}

/// Tool and palette state, passed by reference into the pad.
///
/// Also acts as the command factory: the pad asks it for a new command or
/// preview at a point, and the returned command carries a snapshot of the
/// current style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    tool: ToolKind,
    brush_width: f32,
    color: Color32,
    glyph: String,
    stickers: Vec<String>,
    #[serde(skip)]
    rng: PaletteRng,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            brush_width: BRUSH_THIN,
            color: Color32::BLACK,
            glyph: INITIAL_STICKERS[0].to_owned(),
            stickers: INITIAL_STICKERS.iter().map(|s| (*s).to_owned()).collect(),
            rng: PaletteRng::default(),
        }
    }
}

impl ToolConfig {
    /// Selects the thin brush; each brush selection also picks a fresh
    /// palette color.
    pub fn select_thin(&mut self) {
        self.select_brush(BRUSH_THIN);
    }

    /// Selects the thick brush; each brush selection also picks a fresh
    /// palette color.
    pub fn select_thick(&mut self) {
        self.select_brush(BRUSH_THICK);
    }

    fn select_brush(&mut self, width: f32) {
        self.tool = ToolKind::Brush;
        self.brush_width = width;
        self.color = PALETTE[self.rng.next_index(PALETTE.len())];
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.tool = ToolKind::Sticker;
        self.glyph = glyph.to_owned();
    }

    /// Adds a user-supplied sticker to the set, verbatim. An empty entry is
    /// ignored, matching the cancelled-prompt behavior.
    pub fn add_sticker(&mut self, glyph: String) {
        if !glyph.is_empty() {
            self.stickers.push(glyph);
        }
    }

    /// Creates the committable command the current tool draws at `point`.
    pub fn command_at(&self, point: Pos2) -> Command {
        match self.tool {
            ToolKind::Brush => Command::stroke(point, self.brush_width, self.color),
            ToolKind::Sticker => Command::sticker(point, self.glyph.clone()),
        }
    }

    /// Creates the hover preview for the current tool at `point`.
    pub fn preview_at(&self, point: Pos2) -> Command {
        match self.tool {
            ToolKind::Brush => Command::BrushPreview {
                at: point,
                radius: self.brush_width,
                color: self.color,
            },
            ToolKind::Sticker => Command::StickerPreview {
                at: point,
                glyph: self.glyph.clone(),
            },
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }
}

/// Small LCG for the palette pick; the pack carries no rand dependency and
/// the pick only has to look arbitrary.
#[derive(Debug, Clone)]
pub struct PaletteRng {
    seed: u32,
}

impl Default for PaletteRng {
    fn default() -> Self {
        Self { seed: 0x9e37_79b9 }
    }
}

impl PaletteRng {
    pub fn next_index(&mut self, n: usize) -> usize {
        self.seed = self.seed.wrapping_mul(1103515245).wrapping_add(12345);
        (self.seed >> 16) as usize % n
    }
}
