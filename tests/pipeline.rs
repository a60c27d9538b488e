//! End-to-end layout pipeline checks: document text through [split_lines],
//! [wrap], and [place], with a synthetic per-character measure standing in
//! for a font.

use text_raster::layout::{place, split_lines, text_height, wrap, DrawCommand};
use text_raster::{Align, Px, Style, MAX_TEXT_WIDTH, PADDING, SURFACE_WIDTH};

fn measure_40(text: &str) -> Px {
    Px(40.0 * text.chars().count() as f32)
}

fn wrap_document<F: Fn(&str) -> Px>(text: &str, measure: F) -> Vec<String> {
    let raw = split_lines(text);
    wrap(raw.iter().map(String::as_str), measure, MAX_TEXT_WIDTH)
}

fn text_origins(commands: &[DrawCommand]) -> Vec<(String, Px, Px)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, origin } => Some((text.clone(), origin.0, origin.1)),
            DrawCommand::Rule { .. } => None,
        })
        .collect()
}

#[test]
fn two_words_that_fit_render_as_one_left_line() {
    let lines = wrap_document("hello world", measure_40);
    assert_eq!(lines, vec!["hello world".to_string()]);

    let style = Style::new(Px(16.0));
    let origins = text_origins(&place(&lines, &style, measure_40));
    assert_eq!(origins, vec![("hello world".to_string(), PADDING, PADDING)]);
}

#[test]
fn narrow_justified_document_stretches_every_line_but_the_last() {
    let text = "a b c d e f g h i j k l m n o p q r s t u v w x y z";
    let lines = wrap_document(text, measure_40);
    assert!(lines.len() > 2, "expected several wrapped lines");

    let mut style = Style::new(Px(16.0));
    style.align = Align::Justify;
    let commands = place(&lines, &style, measure_40);
    let origins = text_origins(&commands);

    // every line except the last spans padding..(width - padding)
    for line_index in 0..lines.len() - 1 {
        let words: Vec<(String, Px, Px)> = origins
            .iter()
            .filter(|(_, _, y)| *y == PADDING + style.line_height() * line_index as f32)
            .cloned()
            .collect();
        assert!(words.len() > 1, "justified line split into words");
        assert_eq!(words[0].1, PADDING);
        let (last_word, x, _) = words.last().unwrap();
        let end = *x + measure_40(last_word);
        assert!(
            (end - (SURFACE_WIDTH - PADDING)).abs() < Px(1e-2),
            "line {line_index} ends at {end} instead of the far edge"
        );
    }

    // the last line is a single left-aligned run
    let last_top = PADDING + style.line_height() * (lines.len() - 1) as f32;
    let last: Vec<&(String, Px, Px)> = origins.iter().filter(|(_, _, y)| *y == last_top).collect();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].1, PADDING);
}

#[test]
fn blank_only_document_produces_nothing_to_export() {
    let lines = wrap_document("\n\n\n", measure_40);
    assert!(lines.is_empty());
    assert_eq!(text_height(lines.len(), &Style::new(Px(16.0))), Px::ZERO);
}

#[test]
fn oversized_word_survives_the_whole_pipeline() {
    let long_word: String = std::iter::repeat('x').take(20).collect();
    let text = format!("tiny {long_word} words");
    let lines = wrap_document(&text, measure_40);

    assert!(lines.contains(&long_word));
    assert!(measure_40(&long_word) > MAX_TEXT_WIDTH);

    // placed verbatim at the padding even when right-aligned math would go negative
    let style = Style::new(Px(16.0));
    let origins = text_origins(&place(&lines, &style, measure_40));
    let placed = origins.iter().find(|(t, _, _)| t == &long_word).unwrap();
    assert_eq!(placed.1, PADDING);
}

#[test]
fn surface_height_tightly_bounds_the_text() {
    let style = Style::new(Px(20.0));
    let lines = wrap_document("one two three four five six seven eight nine ten", |s| {
        Px(60.0 * s.chars().count() as f32)
    });
    let height = text_height(lines.len(), &style);
    let line_height = style.line_height();
    assert_eq!(
        height,
        line_height * lines.len() as f32 - (line_height - style.size())
    );
}
