//! Text helpers for the reader view.

/// Split post content on blank lines. A double newline is the paragraph
/// delimiter of the content format; single newlines stay inside a paragraph.
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim_end)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Wrap a paragraph to the given width, preserving its internal line breaks.
/// A width of zero yields the input lines unwrapped.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return text.lines().map(|l| l.to_string()).collect();
    }
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width as usize)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}
