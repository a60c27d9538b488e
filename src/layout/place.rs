use crate::style::{Align, Style};
use crate::surface::{MAX_TEXT_WIDTH, PADDING, SURFACE_WIDTH};
use crate::units::Px;

/// One drawing operation produced by [place]. Coordinates are logical pixels;
/// text origins are the top-left of the glyph box.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a run of text with its top-left corner at `origin`
    Text { text: String, origin: (Px, Px) },
    /// Stroke a 1-unit-high horizontal underline starting at `origin`
    Rule { origin: (Px, Px), width: Px },
}

/// Compute the exact position of every text run and underline for a block of
/// wrapped lines.
///
/// Vertical: line `i` tops out at `padding + i × lineHeight`. Horizontal:
/// per the style's alignment, with [Align::Justify] distributing the slack
/// width evenly between words. Justification never applies to the document's
/// final wrapped line or to single-word lines; both render left-aligned, as
/// the last line of a justified paragraph conventionally does.
///
/// Underlines sit `fontSize + 2` below the line top and span the measured
/// width of the whole line, or of each word when the line is justified.
pub fn place<F>(lines: &[String], style: &Style, measure: F) -> Vec<DrawCommand>
where
    F: Fn(&str) -> Px,
{
    let mut commands = Vec::new();
    let line_height = style.line_height();
    let underline_drop = style.size() + Px(2.0);

    for (index, line) in lines.iter().enumerate() {
        let top = PADDING + line_height * index as f32;
        let words: Vec<&str> = line.split_whitespace().collect();
        let last_line = index + 1 == lines.len();

        if style.align == Align::Justify && !last_line && words.len() > 1 {
            let words_width: Px = words.iter().map(|w| measure(w)).sum();
            let gap = (MAX_TEXT_WIDTH - words_width) / (words.len() - 1) as f32;

            let mut x = PADDING;
            for &word in &words {
                let width = measure(word);
                commands.push(DrawCommand::Text {
                    text: word.to_string(),
                    origin: (x, top),
                });
                if style.underline {
                    commands.push(DrawCommand::Rule {
                        origin: (x, top + underline_drop),
                        width,
                    });
                }
                x += width + gap;
            }
        } else {
            let width = measure(line);
            let x = match style.align {
                Align::Left | Align::Justify => PADDING,
                Align::Right => SURFACE_WIDTH - width - PADDING,
                Align::Center => (SURFACE_WIDTH - width) * 0.5,
            };
            commands.push(DrawCommand::Text {
                text: line.clone(),
                origin: (x, top),
            });
            if style.underline {
                commands.push(DrawCommand::Rule {
                    origin: (x, top + underline_drop),
                    width,
                });
            }
        }
    }

    commands
}
