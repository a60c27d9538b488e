use std::path::Path;
use text_raster::{export_to_file, Align, Colour, Font, FontSet, Px, Style};

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: poster <font.ttf> [output-dir]");
    let out_dir = std::env::args().nth(2).unwrap_or_else(|| ".".to_string());

    let bytes = std::fs::read(&font_path).expect("can read font file");
    let font = Font::load(bytes).expect("can parse font");
    let fonts = FontSet::new(font);

    let mut style = Style::new(Px(18.0));
    style.align = Align::Justify;
    style.colour = Colour::from_hex("#202428").expect("valid colour");

    let text = lipsum::lipsum(120);
    match export_to_file(&text, &style, &fonts, Some("poster"), 2.0, Path::new(&out_dir)) {
        Ok(Some(path)) => println!("wrote {}", path.display()),
        Ok(None) => println!("nothing to export"),
        Err(err) => eprintln!("export failed: {err}"),
    }
}
