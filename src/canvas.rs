use alloc::vec;
use alloc::vec::Vec;

use crate::{CELL, FOREGROUND};

/// Character sheet: one `width`×[`CELL`] cell per glyph, stacked vertically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    glyphs: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, glyphs: usize) -> Self {
        Self {
            width,
            glyphs,
            pixels: vec![0; width * glyphs * CELL],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.glyphs * CELL
    }

    #[inline]
    pub fn glyphs(&self) -> usize {
        self.glyphs
    }

    /// Raw pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.pixels[y * self.width + x] = value;
    }

    /// Whether column `x` of `glyph` has ink on any of its rows.
    pub fn column_has_ink(&self, glyph: usize, x: usize) -> bool {
        (0..CELL).any(|row| self.get(x, glyph * CELL + row) == FOREGROUND)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn cell_mut(&mut self, glyph: usize) -> CellMut<'_> {
        let stride = self.width * CELL;
        CellMut {
            pixels: &mut self.pixels[glyph * stride..(glyph + 1) * stride],
            width: self.width,
        }
    }

    /// Copy of the leftmost `width` columns.
    pub fn crop(&self, width: usize) -> Canvas {
        let width = width.min(self.width);
        let pixels = self
            .pixels
            .chunks_exact(self.width)
            .flat_map(|row| &row[..width])
            .copied()
            .collect();
        Canvas {
            width,
            glyphs: self.glyphs,
            pixels,
        }
    }
}

/// A single glyph cell that a renderer paints into.
///
/// Coordinates are signed so renderers can place bitmaps with negative
/// bearings; anything outside the cell is dropped.
pub struct CellMut<'a> {
    pixels: &'a mut [u8],
    width: usize,
}

impl CellMut<'_> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < CELL {
            self.pixels[y * self.width + x] = FOREGROUND;
        }
    }
}
