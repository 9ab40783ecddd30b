//! Paragraph-aware word wrapping into a [`LineQueue`].

use alloc::string::String;

use crate::page::{Line, LineQueue};

/// Wraps `raw_text` into lines of at most `max_chars_per_line` characters and
/// queues them for display, `lines_per_page` at a time.
///
/// Every paragraph is followed by exactly one blank separator line, including
/// paragraphs with no words. Words are never split: a word longer than the
/// budget gets a line of its own.
pub fn paginate(raw_text: &str, max_chars_per_line: usize, lines_per_page: usize) -> LineQueue {
    let mut queue = LineQueue::new(lines_per_page);
    let text = normalize_paragraph_breaks(raw_text);

    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_chars_per_line, |line| queue.push(line));
        queue.push(Line::blank());
    }

    queue
}

/// Collapses blank-line paragraph separators into single newlines.
///
/// Pairs are replaced left to right without overlap, so a run of three
/// newlines still leaves one empty paragraph behind.
pub fn normalize_paragraph_breaks(raw_text: &str) -> String {
    raw_text.replace("\r\n", "\n").replace("\n\n", "\n")
}

/// Greedy word packing for a single paragraph.
///
/// A word joins the current line while `length + chars(word) + 1` stays within
/// the budget; the `+1` reserves room for the joining space. A word that does
/// not fit flushes the current line as is, so an over-long first word is
/// preceded by an empty line.
pub fn wrap_paragraph<F>(paragraph: &str, max_chars_per_line: usize, mut emit: F)
where
    F: FnMut(Line),
{
    let mut line = String::new();
    let mut current_length = 0usize;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if current_length + word_len + 1 <= max_chars_per_line {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            current_length += word_len + 1;
            continue;
        }

        emit(Line::new(&line));
        line.clear();
        line.push_str(word);
        current_length = word_len;
    }

    if !line.is_empty() {
        emit(Line::from(line));
    }
}
