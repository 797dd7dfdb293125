use thiserror::Error;

/// Export is the only fallible surface in the pad; everything else defines
/// its edge cases (empty undo, degenerate stroke) as no-ops.
#[derive(Debug, Error)]
pub enum ExportError {
    /// None of the embedded default fonts parsed; sticker glyphs cannot be
    /// rasterized without one.
    #[error("no usable font in the embedded default font set")]
    NoUsableFont,

    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
