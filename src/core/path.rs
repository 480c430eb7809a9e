//! Fixed-capacity buffer of states used while walking the hierarchy.

use super::error::DispatchError;

/// A run of states recorded leaf-first, at most `N` long.
///
/// Lives on the stack for the duration of one transition. Overflowing it
/// is a configuration error and is reported, never truncated.
pub(crate) struct Path<S, const N: usize> {
    slots: [Option<S>; N],
    len: usize,
}

impl<S: Copy + Eq, const N: usize> Path<S, N> {
    pub(crate) fn new() -> Self {
        Path {
            slots: [None; N],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, state: S) -> Result<(), DispatchError<S>> {
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(DispatchError::DepthExceeded { max: N })?;
        *slot = Some(state);
        self.len += 1;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn position(&self, state: S) -> Option<usize> {
        self.iter().position(|recorded| recorded == state)
    }

    /// Recorded states, in recording order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = S> + '_ {
        self.prefix(self.len)
    }

    /// The first `count` recorded states, in recording order.
    pub(crate) fn prefix(&self, count: usize) -> impl DoubleEndedIterator<Item = S> + '_ {
        self.slots[..count.min(self.len)].iter().flatten().copied()
    }
}
