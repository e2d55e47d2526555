use alloc::vec;
use alloc::vec::Vec;

use crate::{Canvas, Layout, CELL, FOREGROUND};

/// 0/1 pixel values of a sheet: [`CELL`] lanes, each `CELL * glyphs` long.
///
/// Element `glyph * CELL + bit` of lane `lane` becomes bit `bit` of
/// `table[lane][glyph]` once packed. Which pixel that is depends on the
/// [`Layout`] the matrix was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    lanes: [Vec<u8>; CELL],
}

impl Matrix {
    pub fn new(glyphs: usize) -> Self {
        Self {
            lanes: core::array::from_fn(|_| vec![0; glyphs * CELL]),
        }
    }

    #[inline]
    pub fn lane(&self, lane: usize) -> &[u8] {
        &self.lanes[lane]
    }

    #[inline]
    pub fn get(&self, lane: usize, index: usize) -> u8 {
        self.lanes[lane][index]
    }

    /// Any nonzero `value` is stored as 1.
    #[inline]
    pub fn set(&mut self, lane: usize, index: usize, value: u8) {
        self.lanes[lane][index] = (value != 0) as u8;
    }
}

/// Packed bytes: `table.get(lane, glyph)`, [`CELL`] bytes per glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    lanes: [Vec<u8>; CELL],
}

impl Table {
    #[inline]
    pub fn glyphs(&self) -> usize {
        self.lanes[0].len()
    }

    #[inline]
    pub fn lane(&self, lane: usize) -> &[u8] {
        &self.lanes[lane]
    }

    #[inline]
    pub fn get(&self, lane: usize, glyph: usize) -> u8 {
        self.lanes[lane][glyph]
    }

    /// The bytes of one glyph, in output order.
    pub fn glyph(&self, glyph: usize) -> [u8; CELL] {
        core::array::from_fn(|lane| self.lanes[lane][glyph])
    }

    /// Inverse of [`pack`].
    pub fn unpack(&self) -> Matrix {
        let mut matrix = Matrix::new(self.glyphs());
        for (lane, bytes) in self.lanes.iter().enumerate() {
            for (glyph, &byte) in bytes.iter().enumerate() {
                for bit in 0..CELL {
                    matrix.set(lane, glyph * CELL + bit, byte & BITS[bit]);
                }
            }
        }
        matrix
    }
}

const BITS: [u8; 8] = [
    1 << 0,
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 4,
    1 << 5,
    1 << 6,
    1 << 7,
];

/// Map each pixel of the leftmost [`CELL`] columns to 1 if it is exactly
/// [`FOREGROUND`], 0 otherwise.
pub fn binarize(canvas: &Canvas, layout: Layout) -> Matrix {
    let mut matrix = Matrix::new(canvas.glyphs());
    for y in 0..canvas.height() {
        let (glyph, row) = (y / CELL, y % CELL);
        for x in 0..CELL.min(canvas.width()) {
            let value = (canvas.get(x, y) == FOREGROUND) as u8;
            match layout {
                Layout::Rows => matrix.set(row, glyph * CELL + x, value),
                Layout::Columns => matrix.set(x, y, value),
            }
        }
    }
    matrix
}

/// Fold every run of [`CELL`] bits into a byte, least significant bit first.
pub fn pack(matrix: &Matrix) -> Table {
    Table {
        lanes: core::array::from_fn(|lane| {
            matrix
                .lane(lane)
                .chunks_exact(CELL)
                .map(|bits| {
                    bits.iter()
                        .enumerate()
                        .fold(0u8, |byte, (bit, &value)| byte | (value << bit))
                })
                .collect()
        }),
    }
}
