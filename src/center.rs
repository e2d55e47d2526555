use log::trace;

use crate::{Canvas, ExemptSet, CELL};

/// Center every glyph horizontally, except codes in `exempt`.
///
/// A glyph with `w` inked columns moves right by `(CELL - w) / 2`.
pub fn center(canvas: &mut Canvas, exempt: &ExemptSet) {
    for glyph in 0..canvas.glyphs() {
        if u8::try_from(glyph).map_or(false, |code| exempt.contains(&code)) {
            continue;
        }
        let spaces = (CELL - ink_width(canvas, glyph)) / 2;
        trace!("glyph {glyph:#04x}: shift {spaces}");
        shift_right(canvas, glyph, spaces);
    }
}

/// Number of columns in the glyph's cell holding at least one set pixel.
///
/// Gaps count as blank, so this is not the distance between the outermost
/// inked columns.
pub fn ink_width(canvas: &Canvas, glyph: usize) -> usize {
    (0..CELL)
        .filter(|&x| canvas.column_has_ink(glyph, x))
        .count()
}

/// Move the glyph `spaces` columns right within its cell. Columns pushed past
/// the edge are lost and vacated ones are cleared.
pub fn shift_right(canvas: &mut Canvas, glyph: usize, spaces: usize) {
    let top = glyph * CELL;
    // Right to left, so every source column is read before it is overwritten.
    for x in (0..CELL).rev() {
        for y in top..top + CELL {
            let value = match x.checked_sub(spaces) {
                Some(from) => canvas.get(from, y),
                None => 0,
            };
            canvas.set(x, y, value);
        }
    }
}
