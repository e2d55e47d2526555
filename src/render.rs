use crate::{CellMut, Error};

/// Something that can draw a single-byte character code at a point size.
///
/// The cell is cleared before each call. Renderers paint ink with
/// [`CellMut::plot`]; pixels falling outside the cell are discarded, except
/// that the cell is one column wider than [`CELL`](crate::CELL) while fitting
/// so overflow can be detected.
pub trait Render {
    fn render(&self, code: u8, size: u32, cell: &mut CellMut<'_>) -> Result<(), Error>;
}
