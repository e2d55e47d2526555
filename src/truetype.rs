use std::path::Path;
use std::{fmt, fs, io};

use fontdue::{Font, FontSettings};

use crate::{CellMut, Error, Render};

/// Coverage at or above which a rasterized pixel counts as ink.
const THRESHOLD: u8 = 128;

/// TrueType/OpenType renderer.
///
/// Codes map to the Unicode scalar of the same value, so the set reads as
/// Latin-1. Codes the font lacks are drawn with its `.notdef` glyph.
pub struct TrueType {
    font: Font,
}

impl TrueType {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_bytes(fs::read(path).map_err(LoadError::Io)?)
    }

    pub fn from_bytes(data: impl AsRef<[u8]>) -> Result<Self, LoadError> {
        let font =
            Font::from_bytes(data.as_ref(), FontSettings::default()).map_err(LoadError::Parse)?;
        Ok(Self { font })
    }
}

impl Render for TrueType {
    fn render(&self, code: u8, size: u32, cell: &mut CellMut<'_>) -> Result<(), Error> {
        let px = size as f32;
        let (metrics, coverage) = self.font.rasterize(char::from(code), px);
        if metrics.width == 0 {
            return Ok(());
        }

        // Text is laid out from the top of the ascender, like a line of text
        // drawn at the cell origin.
        let ascent = self
            .font
            .horizontal_line_metrics(px)
            .map_or(px, |line| line.ascent)
            .round() as i32;
        let top = ascent - (metrics.ymin + metrics.height as i32);

        for (row, scanline) in coverage.chunks_exact(metrics.width).enumerate() {
            for (column, &value) in scanline.iter().enumerate() {
                if value >= THRESHOLD {
                    cell.plot(metrics.xmin + column as i32, top + row as i32);
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum LoadError {
    /// The font file could not be read.
    Io(io::Error),
    /// The data is not a font `fontdue` understands.
    Parse(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LoadError::Io(e) => write!(f, "unable to read font: {e}"),
            LoadError::Parse(msg) => write!(f, "unable to parse font: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(_) => None,
        }
    }
}
