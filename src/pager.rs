//! Position within a paged list, used by the email carousel.

/// Current position in a list of `len` items.
///
/// The index is always clamped into range; an empty list sits at index 0
/// with nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// Pager at the first item.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Pager at `index`, clamped to the last item.
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step back one item, stopping at the first.
    #[must_use]
    pub fn previous(&self) -> Self {
        Self::at(self.index.saturating_sub(1), self.len)
    }

    /// Step forward one item, stopping at the last.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::at(self.index.saturating_add(1), self.len)
    }

    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// `"(2/5)"` style label, empty unless there is more than one item.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.has_multiple() {
            format!("({}/{})", self.index + 1, self.len)
        } else {
            String::new()
        }
    }
}
