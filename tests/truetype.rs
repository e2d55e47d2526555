#![cfg(feature = "truetype")]

use font2oled::{convert, fit, overflows, Canvas, Config, Render, TrueType, CELL, FOREGROUND};

const FONT: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

fn ink(canvas: &Canvas, code: u8) -> usize {
    let top = usize::from(code) * CELL;
    (top..top + CELL)
        .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.get(x, y) == FOREGROUND)
        .count()
}

#[test]
fn smoke() {
    let font = TrueType::from_bytes(FONT).unwrap();
    let config = Config::default();
    let fitted = fit(&font, &config).unwrap();
    assert!((4..=12).contains(&fitted.size));

    let mut sheet = Canvas::new(CELL + 1, config.glyphs);
    for glyph in config.probe() {
        font.render(glyph as u8, fitted.size, &mut sheet.cell_mut(glyph))
            .unwrap();
        assert!(!overflows(&sheet, glyph), "glyph {glyph:#04x} overflows");
    }
    assert!(ink(&sheet, b'A') > 0);
    assert_eq!(ink(&sheet, b' '), 0);
}

#[test]
fn convert_real_font() {
    let font = TrueType::from_bytes(FONT).unwrap();
    let output = convert(&font, &Config::default()).unwrap();
    assert_eq!(output.table.glyphs(), 256);
    assert_ne!(output.table.glyph(usize::from(b'A')), [0; 8]);
    assert_eq!(output.table.glyph(usize::from(b' ')), [0; 8]);
}

#[test]
fn glyph_sits_below_the_ascender() {
    let font = TrueType::from_bytes(FONT).unwrap();
    let mut sheet = Canvas::new(CELL + 1, 1);
    font.render(b'H', 12, &mut sheet.cell_mut(0)).unwrap();

    // Cap height is well short of the ascent, so the top row stays clear
    // while the stems reach the bottom of the cell.
    assert!((0..sheet.width()).all(|x| sheet.get(x, 0) == 0));
    assert!((0..sheet.width()).any(|x| sheet.get(x, CELL - 1) == FOREGROUND));
    // Left side bearing.
    assert!((0..CELL).all(|y| sheet.get(0, y) == 0));
}
