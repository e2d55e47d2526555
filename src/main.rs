//! Print a font as a C array of 8×8 glyph bitmaps for OLED firmware.

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};

use args::Args;
use font2oled::{convert, identifier, serialize, Config, ExemptSet, TrueType};

mod args {
    use std::path::PathBuf;

    use clap::{Parser, ValueEnum};

    #[derive(Parser)]
    #[clap(version, about)]
    pub struct Args {
        /// TrueType or OpenType font to convert
        pub font: PathBuf,
        /// Number of character codes to emit, starting at 0
        #[clap(long, default_value_t = 256)]
        pub glyphs: usize,
        /// Last code checked for overflow while fitting
        #[clap(long, default_value_t = 128)]
        pub probe_end: usize,
        /// Smallest font size to try
        #[clap(long, default_value_t = 4)]
        pub min_size: u32,
        /// Sizes below this are tried, largest first
        #[clap(long, default_value_t = 13)]
        pub max_size: u32,
        /// Characters left where the font puts them instead of centered
        #[clap(long, default_value = "!,.:;?")]
        pub exempt: String,
        /// What each output byte holds
        #[clap(long, value_enum, default_value_t = Layout::Rows)]
        pub layout: Layout,
        /// Where to write a picture of the character sheet
        #[clap(long, default_value = "font.png")]
        pub sheet: PathBuf,
        /// Don't write the character sheet
        #[clap(long)]
        pub no_sheet: bool,
    }

    #[derive(Copy, Clone, ValueEnum)]
    pub enum Layout {
        /// One byte per pixel row, least significant bit leftmost
        Rows,
        /// One byte per pixel column, least significant bit on top
        Columns,
    }

    impl From<Layout> for font2oled::Layout {
        fn from(layout: Layout) -> Self {
            match layout {
                Layout::Rows => font2oled::Layout::Rows,
                Layout::Columns => font2oled::Layout::Columns,
            }
        }
    }
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut exempt = ExemptSet::default();
        for c in self.exempt.chars() {
            match u8::try_from(c) {
                Ok(code) => exempt.insert(code),
                Err(_) => bail!("exempt character {c:?} is not a single-byte code"),
            };
        }
        let config = Config {
            glyphs: self.glyphs,
            probe_end: self.probe_end,
            min_size: self.min_size,
            max_size: self.max_size,
            exempt,
            layout: self.layout.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config()?;

    let font = TrueType::load(&args.font)
        .with_context(|| format!("unable to load font {}", args.font.display()))?;
    let output = convert(&font, &config)
        .with_context(|| format!("unable to convert {}", args.font.display()))?;
    info!("{} glyphs at size {}", config.glyphs, output.size);

    if !args.no_sheet {
        if let Err(e) = output.canvas.save_sheet(&args.sheet) {
            warn!("unable to write {}: {e}", args.sheet.display());
        }
    }

    let name = identifier(&args.font.to_string_lossy());
    println!("{}", serialize(&output.table, &name));
    Ok(())
}
