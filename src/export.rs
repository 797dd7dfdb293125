use ab_glyph::{Font as _, FontArc, GlyphId, ScaleFont as _, point};
use egui::{Color32, FontDefinitions, Pos2};
use image::{Rgba, RgbaImage};

use crate::error::ExportError;
use crate::pad::SketchPad;
use crate::renderer::{BACKGROUND, CANVAS_SIZE, Surface};

/// Integer factor between the on-screen canvas and the export raster.
pub const EXPORT_SCALE: u32 = 4;

/// Default file name offered for the exported image.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Software raster implementing [`Surface`] over an RGBA image.
///
/// Takes canvas-local coordinates and multiplies them by a fixed scale, so
/// the same commands that paint the 256 px canvas fill the 1024 px export.
/// Thick lines are stamped as overlapping discs along each segment, which
/// gives round caps and joins; glyphs are drawn from their `ab_glyph`
/// outlines using egui's embedded default fonts.
pub struct Raster {
    image: RgbaImage,
    scale: f32,
    fonts: Vec<FontArc>,
}

impl Raster {
    /// A `width` x `height` canvas rasterized at `scale` pixels per canvas
    /// unit. Fails only if the embedded font set is unusable.
    pub fn new(width: u32, height: u32, scale: u32) -> Result<Self, ExportError> {
        Ok(Self {
            image: RgbaImage::new(width * scale, height * scale),
            scale: scale as f32,
            fonts: default_fonts()?,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// PNG-encodes the current pixels.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fills a disc at raster coordinates.
    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Rgba<u8>) {
        let r2 = radius * radius;
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stamps discs along the segment densely enough to leave no gaps.
    fn stamp_segment(&mut self, a: Pos2, b: Pos2, radius: f32, color: Rgba<u8>) {
        let delta = b - a;
        let step = (radius * 0.5).max(0.25);
        let steps = ((delta.length() / step).ceil() as u32).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(a + delta * t, radius, color);
        }
    }

    fn to_raster(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.scale).to_pos2()
    }

    fn pick_font(&self, ch: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(ch) != GlyphId(0))
    }
}

impl Surface for Raster {
    fn clear(&mut self, color: Color32) {
        let px = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = px;
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let radius = width * self.scale / 2.0;
        let px = to_rgba(color);
        for segment in points.windows(2) {
            self.stamp_segment(
                self.to_raster(segment[0]),
                self.to_raster(segment[1]),
                radius,
                px,
            );
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.stamp_disc(self.to_raster(center), radius * self.scale, to_rgba(color));
    }

    fn text(&mut self, at: Pos2, text: &str, size_px: f32, color: Color32) {
        let px_scale = size_px * self.scale;
        let anchor = self.to_raster(at);
        let color = to_rgba(color);

        // Lay the glyphs out first so the run can be centered on the anchor
        // (the export path centers text; the screen surface anchors left).
        let mut run = Vec::new();
        let mut advance = 0.0;
        for ch in text.chars() {
            let Some(font) = self.pick_font(ch) else {
                continue;
            };
            let id = font.glyph_id(ch);
            run.push((font.clone(), id, advance));
            advance += font.as_scaled(px_scale).h_advance(id);
        }

        let left = anchor.x - advance / 2.0;
        for (font, id, dx) in run {
            let glyph = id.with_scale_and_position(px_scale, point(left + dx, anchor.y));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    if coverage > 0.5 {
                        self.put(
                            bounds.min.x as i32 + gx as i32,
                            bounds.min.y as i32 + gy as i32,
                            color,
                        );
                    }
                });
            }
        }
    }
}

/// Renders the committed history (and only the history, never the preview)
/// at [`EXPORT_SCALE`] and returns the PNG bytes.
pub fn export_png(pad: &SketchPad) -> Result<Vec<u8>, ExportError> {
    let size = CANVAS_SIZE as u32;
    let mut raster = Raster::new(size, size, EXPORT_SCALE)?;
    raster.clear(BACKGROUND);
    for command in pad.history().commands() {
        command.render(&mut raster);
    }
    log::info!(
        "exported {} commands at {}x{}",
        pad.history().commands().len(),
        size * EXPORT_SCALE,
        size * EXPORT_SCALE,
    );
    raster.encode_png()
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_array())
}

/// The embedded egui default fonts, parsed for offline rasterization.
fn default_fonts() -> Result<Vec<FontArc>, ExportError> {
    let definitions = FontDefinitions::default();
    let mut fonts = Vec::new();
    for data in definitions.font_data.values() {
        if let Ok(font) = FontArc::try_from_vec(data.font.to_vec()) {
            fonts.push(font);
        }
    }
    if fonts.is_empty() {
        return Err(ExportError::NoUsableFont);
    }
    Ok(fonts)
}
