use std::env;

use font2oled::{convert, Config, Layout, TrueType, CELL};

fn main() {
    let args = env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        eprintln!("usage: {} <font.ttf> [text]", args[0]);
        return;
    }
    let font = TrueType::load(&args[1]).unwrap();
    let config = Config {
        layout: Layout::Rows,
        ..Config::default()
    };
    let output = convert(&font, &config).unwrap();
    println!("size {}", output.size);
    let text = args.get(2).map_or("demo", String::as_str);
    for c in text.chars() {
        let code = match u8::try_from(c) {
            Ok(x) => x,
            Err(_) => {
                eprintln!("not a single-byte character: {}", c);
                continue;
            }
        };
        for row in output.table.glyph(usize::from(code)) {
            for bit in 0..CELL {
                let x = match row & (1 << bit) != 0 {
                    true => '█',
                    false => ' ',
                };
                print!("{}", x);
            }
            println!();
        }
    }
}
