use alloc::string::String;
use core::fmt::Write;

use crate::{Table, CELL};

/// Characters dropped from the filename to form the identifier.
const RESERVED: [char; 5] = [' ', '-', ':', ',', '?'];

/// Format `table` as a C array declaration named `name`.
///
/// ```
/// # use font2oled::{pack, serialize, Matrix};
/// let text = serialize(&pack(&Matrix::new(1)), "tiny");
/// assert_eq!(
///     text,
///     "const char tiny[][8] PROGMEM = {\n\
///      {0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00}\n\
///      };"
/// );
/// ```
pub fn serialize(table: &Table, name: &str) -> String {
    let mut out = String::new();
    writeln!(out, "const char {name}[][{CELL}] PROGMEM = {{").unwrap();
    for glyph in 0..table.glyphs() {
        if glyph != 0 {
            out.push_str(",\n");
        }
        out.push('{');
        for (i, byte) in table.glyph(glyph).iter().enumerate() {
            if i != 0 {
                out.push_str(", ");
            }
            write!(out, "{byte:#04x}").unwrap();
        }
        out.push('}');
    }
    out.push_str("\n};");
    out
}

/// Identifier for the array, from the base name of `path` without its
/// extension.
///
/// ```
/// assert_eq!(font2oled::identifier("fonts/My Font-1.ttf"), "MyFont1");
/// ```
pub fn identifier(path: &str) -> String {
    let file = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let stem = match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    };
    let mut name: String = stem.chars().filter(|c| !RESERVED.contains(c)).collect();
    if name.is_empty() {
        name.push_str("font");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
