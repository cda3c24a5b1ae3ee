//! Read cursor over the live geometry during application.

/// Position in the sequence a diff is being replayed against.
///
/// The cursor only moves forward, and only past an element the diff expected
/// to find there. An element the diff expected but that is not under the
/// cursor is treated as already gone; the caller decides what that means.
#[derive(Debug)]
pub(crate) struct Cursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T: PartialEq> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// The element under the cursor, if any.
    pub(crate) fn peek(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// Step past the element under the cursor if it equals `expected`.
    pub(crate) fn take_if(&mut self, expected: &T) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.items.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}
