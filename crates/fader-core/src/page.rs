//! Wrapped lines, page batches and the backlog of lines not yet shown.

use alloc::{boxed::Box, collections::VecDeque, string::String};
use core::{fmt, ops::Deref};

/// Upper bound for `lines_per_page`; pages are stack-allocated.
pub const MAX_LINES_PER_PAGE: usize = 8;

/// One display line, already wrapped to the layout's character budget.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Line(Box<str>);

impl Line {
    pub fn new(text: &str) -> Self {
        Self(Box::from(text))
    }

    /// Paragraph separator.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self(text.into_boxed_str())
    }
}

/// Lines rendered together as one slide.
pub type Page = heapless::Vec<Line, MAX_LINES_PER_PAGE>;

pub const fn clamp_lines_per_page(lines_per_page: usize) -> usize {
    if lines_per_page == 0 {
        1
    } else if lines_per_page > MAX_LINES_PER_PAGE {
        MAX_LINES_PER_PAGE
    } else {
        lines_per_page
    }
}

/// FIFO of wrapped lines waiting to be shown.
///
/// The queue is filled once up front and only shrinks afterwards: a line handed
/// out by [`LineQueue::pop_line`] or [`LineQueue::pop_page`] never comes back.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineQueue {
    lines: VecDeque<Line>,
    lines_per_page: usize,
}

impl LineQueue {
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            lines_per_page: clamp_lines_per_page(lines_per_page),
        }
    }

    pub fn from_lines<I, L>(lines: I, lines_per_page: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        let mut queue = Self::new(lines_per_page);
        queue.lines.extend(lines.into_iter().map(Into::into));
        queue
    }

    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push_back(line);
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// Changes the batch size of later [`LineQueue::pop_page`] calls. Lines
    /// already queued are not touched.
    pub fn set_lines_per_page(&mut self, lines_per_page: usize) {
        self.lines_per_page = clamp_lines_per_page(lines_per_page);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn pop_line(&mut self) -> Option<Line> {
        self.lines.pop_front()
    }

    /// Dequeues up to `lines_per_page` lines. Returns an empty page once the
    /// backlog is exhausted.
    pub fn pop_page(&mut self) -> Page {
        let mut page = Page::new();

        while page.len() < self.lines_per_page {
            let Some(line) = self.pop_line() else {
                break;
            };

            if let Err(line) = page.push(line) {
                self.lines.push_front(line);
                break;
            }
        }

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_cut_at_lines_per_page() {
        let mut queue = LineQueue::from_lines(["a", "b", "c", "d", "e"], 2);

        let first = queue.pop_page();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].as_str(), "a");
        assert_eq!(first[1].as_str(), "b");
        assert_eq!(queue.len(), 3);

        let _ = queue.pop_page();
        let last = queue.pop_page();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].as_str(), "e");
        assert!(queue.is_empty());
        assert!(queue.pop_page().is_empty());
    }

    #[test]
    fn lines_come_out_in_order_and_never_return() {
        let mut queue = LineQueue::from_lines(["a", "b"], 5);
        assert_eq!(queue.pop_line(), Some(Line::new("a")));
        assert_eq!(queue.len(), 1);

        let page = queue.pop_page();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].as_str(), "b");
        assert_eq!(queue.pop_line(), None);
    }

    #[test]
    fn lines_per_page_is_clamped() {
        assert_eq!(LineQueue::new(0).lines_per_page(), 1);
        assert_eq!(LineQueue::new(64).lines_per_page(), MAX_LINES_PER_PAGE);
        assert_eq!(LineQueue::new(5).lines_per_page(), 5);
    }

    #[test]
    fn rebatching_changes_later_pages_only() {
        let mut queue = LineQueue::from_lines(["a", "b", "c", "d"], 3);
        assert_eq!(queue.pop_page().len(), 3);

        queue.set_lines_per_page(0);
        assert_eq!(queue.lines_per_page(), 1);
        let page = queue.pop_page();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].as_str(), "d");
    }

    #[test]
    fn blank_line_is_empty() {
        assert!(Line::blank().is_blank());
        assert_eq!(Line::new("héllo").char_count(), 5);
    }
}
