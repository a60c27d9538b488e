use crate::style::Style;
use crate::units::Px;

/// Split a document into its raw lines, normalizing `\r\n` and `\r` newlines
/// to `\n` first. Blank lines are kept here; [wrap] drops them.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n').map(str::to_string).collect()
}

/// Greedily wrap raw lines so that every output line measures at most
/// `max_width`, with one exception: a single word wider than `max_width` is
/// emitted verbatim on its own line, never split or truncated.
///
/// Lines that are blank after trimming produce no output at all. Words are
/// accumulated with a single joining space; when adding a word would
/// overflow, the accumulated line is flushed and the word starts the next
/// line. An empty document yields an empty sequence — callers short-circuit
/// export on that.
pub fn wrap<'a, I, F>(raw_lines: I, measure: F, max_width: Px) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> Px,
{
    let mut wrapped: Vec<String> = Vec::new();

    for raw in raw_lines {
        if raw.trim().is_empty() {
            continue;
        }

        let mut current = String::new();
        for word in raw.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate) <= max_width {
                current = candidate;
            } else if !current.is_empty() {
                // flush the accumulated line; the overflowing word starts the next one
                wrapped.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                // an oversized first word goes out alone, untruncated
                wrapped.push(word.to_string());
            }
        }

        if !current.is_empty() {
            wrapped.push(current);
        }
    }

    wrapped
}

/// The exact height of a block of `line_count` wrapped lines. The trailing
/// half-line gap below the last line is removed so the surface tightly bounds
/// the text: `count × lineHeight − (lineHeight − fontSize)`.
pub fn text_height(line_count: usize, style: &Style) -> Px {
    if line_count == 0 {
        return Px::ZERO;
    }

    let line_height = style.line_height();
    line_height * line_count as f32 - (line_height - style.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ten logical pixels per character, like a coarse monospace face
    fn measure(text: &str) -> Px {
        Px(10.0 * text.chars().count() as f32)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap(["hello world"], measure, Px(200.0));
        assert_eq!(lines, vec!["hello world".to_string()]);
    }

    #[test]
    fn long_text_breaks_at_word_boundaries() {
        let lines = wrap(["aaa bbb ccc ddd"], measure, Px(75.0));
        assert_eq!(
            lines,
            vec!["aaa bbb".to_string(), "ccc ddd".to_string()]
        );
    }

    #[test]
    fn wrapped_lines_respect_the_width_bound() {
        let text = "a b c d e f g h i j k l m n o p q r s t u v w x y z";
        let max = Px(88.0);
        let lines = wrap([text], measure, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                measure(line) <= max,
                "line {line:?} measures wider than the bound"
            );
        }
    }

    #[test]
    fn no_word_is_dropped_or_duplicated() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap([text], measure, Px(95.0));
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let lines = wrap(["", "   ", "\t"], measure, Px(100.0));
        assert!(lines.is_empty());
    }

    #[test]
    fn oversized_word_is_emitted_verbatim() {
        let lines = wrap(["incomprehensibilities"], measure, Px(50.0));
        assert_eq!(lines, vec!["incomprehensibilities".to_string()]);
        assert!(measure(&lines[0]) > Px(50.0));
    }

    #[test]
    fn oversized_word_mid_line_gets_its_own_line() {
        let lines = wrap(["a incomprehensibilities b"], measure, Px(50.0));
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "incomprehensibilities".to_string(),
                "b".to_string()
            ]
        );
    }

    #[test]
    fn consecutive_spaces_do_not_create_empty_words() {
        let lines = wrap(["one  two   three"], measure, Px(200.0));
        assert_eq!(lines, vec!["one two three".to_string()]);
    }

    #[test]
    fn split_lines_normalizes_newlines() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn height_formula_removes_the_trailing_gap() {
        let style = Style::new(Px(16.0));
        // N × 1.5F − 0.5F
        assert_eq!(text_height(1, &style), Px(16.0));
        assert_eq!(text_height(3, &style), Px(64.0));
        assert_eq!(text_height(0, &style), Px::ZERO);
    }
}
