//! Turn a font into an 8×8 monochrome bitmap table for small OLED displays.
//!
//! The pipeline is [`fit`] → [`center`] → [`binarize`] → [`pack`] →
//! [`serialize`]. Rendering is abstracted behind [`Render`], so anything that
//! can paint a glyph into a [`CellMut`] can drive it; the `truetype` feature
//! provides one backed by `fontdue`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod canvas;
mod center;
mod fit;
mod pack;
mod render;
mod serialize;
#[cfg(feature = "png")]
mod sheet;
#[cfg(feature = "truetype")]
mod truetype;

use core::hash::BuildHasherDefault;

use hashbrown::HashSet;
use rustc_hash::FxHasher;

pub use canvas::{Canvas, CellMut};
pub use center::{center, ink_width, shift_right};
pub use fit::{fit, overflows, Fitted};
pub use pack::{binarize, pack, Matrix, Table};
pub use render::Render;
pub use serialize::{identifier, serialize};
#[cfg(feature = "truetype")]
pub use truetype::{LoadError, TrueType};

/// Width and height of a glyph cell in pixels.
pub const CELL: usize = 8;

/// Column checked for overflow while fitting, one past the visible cell.
pub const PROBE_COLUMN: usize = CELL;

/// Pixel value of ink. Everything else is background.
pub const FOREGROUND: u8 = 255;

/// Codes that keep their rendered position: `! , . : ; ?`
pub const DEFAULT_EXEMPT: [u8; 6] = [b'!', b',', b'.', b':', b';', b'?'];

pub type ExemptSet = HashSet<u8, BuildHasherDefault<FxHasher>>;

/// How the binary matrix maps onto glyph pixels, and thus what each packed
/// byte holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// One byte per pixel row, bit `b` is column `b`.
    #[default]
    Rows,
    /// One byte per pixel column, bit `b` is row `b`. This is the page format
    /// of SSD1306-style controllers.
    Columns,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of character slots; slot `i` holds code `i`.
    pub glyphs: usize,
    /// Last code (inclusive) checked for overflow while fitting.
    pub probe_end: usize,
    pub min_size: u32,
    /// Exclusive: the first size tried is `max_size - 1`.
    pub max_size: u32,
    pub exempt: ExemptSet,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: 256,
            probe_end: 128,
            min_size: 4,
            max_size: 13,
            exempt: DEFAULT_EXEMPT.iter().copied().collect(),
            layout: Layout::Rows,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.glyphs == 0 || self.glyphs > 256 {
            return Err(Error::Config("glyph count must be within 1..=256"));
        }
        if self.min_size == 0 {
            return Err(Error::Config("minimum size must be positive"));
        }
        if self.min_size >= self.max_size {
            return Err(Error::Config("minimum size must be below maximum size"));
        }
        Ok(())
    }

    /// Codes whose overflow disqualifies a candidate size.
    #[inline]
    pub fn probe(&self) -> core::ops::Range<usize> {
        0..self.probe_end.saturating_add(1).min(self.glyphs)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Every candidate size down to `min_size` overflowed the cell.
    NoFit { min_size: u32 },
    /// The renderer could not produce the glyph for `code`.
    Render { code: u8 },
    /// Invalid [`Config`].
    Config(&'static str),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        match *self {
            Error::NoFit { min_size } => write!(
                f,
                "glyphs overflow the {CELL}x{CELL} cell at every size down to {min_size}"
            ),
            Error::Render { code } => write!(f, "unable to render glyph {code:#04x}"),
            Error::Config(msg) => f.pad(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result of running the whole pipeline short of serialization.
#[derive(Debug, Clone)]
pub struct Output {
    pub size: u32,
    /// Fitted and centered sheet, [`CELL`] columns wide.
    pub canvas: Canvas,
    pub table: Table,
}

/// Fit, center, binarize and pack in one go.
pub fn convert<R: Render + ?Sized>(renderer: &R, config: &Config) -> Result<Output, Error> {
    let Fitted { size, mut canvas } = fit(renderer, config)?;
    center(&mut canvas, &config.exempt);
    let table = pack(&binarize(&canvas, config.layout));
    Ok(Output {
        size,
        canvas,
        table,
    })
}
