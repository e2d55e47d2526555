use log::{debug, info};

use crate::{Canvas, Config, Error, Render, CELL, PROBE_COLUMN};

/// Sheet rendered at the largest size that fits the cell.
#[derive(Debug, Clone)]
pub struct Fitted {
    pub size: u32,
    /// [`CELL`] columns wide; the probe column has been dropped.
    pub canvas: Canvas,
}

/// Search downwards from `config.max_size - 1` for a size at which no probed
/// glyph paints into [`PROBE_COLUMN`].
///
/// Every candidate re-renders the whole character set onto a fresh canvas.
/// Codes past [`Config::probe`] are rendered but never checked, so they may
/// still be clipped at the chosen size.
pub fn fit<R: Render + ?Sized>(renderer: &R, config: &Config) -> Result<Fitted, Error> {
    config.validate()?;

    let mut canvas = Canvas::new(CELL + 1, config.glyphs);
    let mut size = config.max_size;
    loop {
        size -= 1;
        if size < config.min_size {
            return Err(Error::NoFit {
                min_size: config.min_size,
            });
        }

        canvas.clear();
        for glyph in 0..config.glyphs {
            let code = glyph as u8;
            renderer.render(code, size, &mut canvas.cell_mut(glyph))?;
        }

        match config.probe().find(|&glyph| overflows(&canvas, glyph)) {
            Some(glyph) => debug!("size {size} rejected: glyph {glyph:#04x} overflows"),
            None => {
                info!("fitted font size {size}");
                return Ok(Fitted {
                    size,
                    canvas: canvas.crop(CELL),
                });
            }
        }
    }
}

/// Whether `glyph` has ink in the probe column.
#[inline]
pub fn overflows(canvas: &Canvas, glyph: usize) -> bool {
    canvas.width() > PROBE_COLUMN && canvas.column_has_ink(glyph, PROBE_COLUMN)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::RefCell;
    use std::vec::Vec;

    use super::*;
    use crate::CellMut;

    /// A bar `size - 3` pixels wide; overflows above size 11.
    struct Bar {
        sizes: RefCell<Vec<u32>>,
    }

    impl Render for Bar {
        fn render(&self, code: u8, size: u32, cell: &mut CellMut<'_>) -> Result<(), Error> {
            if code == 0 {
                self.sizes.borrow_mut().push(size);
            }
            for x in 0..size.saturating_sub(3) as i32 {
                cell.plot(x, 4);
            }
            Ok(())
        }
    }

    fn small() -> Config {
        Config {
            glyphs: 4,
            ..Config::default()
        }
    }

    #[test]
    fn tries_sizes_in_descending_order() {
        let bar = Bar {
            sizes: RefCell::new(Vec::new()),
        };
        let fitted = fit(&bar, &small()).unwrap();
        // Nine pixels wide at 12, eight at 11.
        assert_eq!(fitted.size, 11);
        assert_eq!(*bar.sizes.borrow(), [12, 11]);
        assert_eq!(fitted.canvas.width(), CELL);
        assert_eq!(fitted.canvas.glyphs(), 4);
    }

    #[test]
    fn exhausts_at_floor() {
        let bar = Bar {
            sizes: RefCell::new(Vec::new()),
        };
        let config = Config {
            min_size: 12,
            max_size: 13,
            ..small()
        };
        assert_eq!(
            fit(&bar, &config).unwrap_err(),
            Error::NoFit { min_size: 12 }
        );
        assert_eq!(*bar.sizes.borrow(), [12]);
    }

    #[test]
    fn propagates_render_failure() {
        struct Broken;
        impl Render for Broken {
            fn render(&self, code: u8, _: u32, _: &mut CellMut<'_>) -> Result<(), Error> {
                match code {
                    2 => Err(Error::Render { code }),
                    _ => Ok(()),
                }
            }
        }
        assert_eq!(
            fit(&Broken, &small()).unwrap_err(),
            Error::Render { code: 2 }
        );
    }

    #[test]
    fn unprobed_glyphs_may_overflow() {
        struct Wide;
        impl Render for Wide {
            fn render(&self, code: u8, _: u32, cell: &mut CellMut<'_>) -> Result<(), Error> {
                if code == 3 {
                    cell.plot(8, 0);
                }
                Ok(())
            }
        }
        let config = Config {
            probe_end: 2,
            ..small()
        };
        assert_eq!(fit(&Wide, &config).unwrap().size, 12);
    }

    #[test]
    fn unbounded_probe_end_checks_every_glyph() {
        struct Overflowing;
        impl Render for Overflowing {
            fn render(&self, _: u8, _: u32, cell: &mut CellMut<'_>) -> Result<(), Error> {
                cell.plot(8, 0);
                Ok(())
            }
        }
        let config = Config {
            probe_end: usize::MAX,
            ..small()
        };
        assert_eq!(
            fit(&Overflowing, &config).unwrap_err(),
            Error::NoFit { min_size: 4 }
        );
    }
}
