//! Bounded queue storing copies of events in a ring buffer.

use super::EventQueue;
use tracing::debug;

/// Capacity used when none is given.
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

/// Queue of at most `N` events, stored inline.
///
/// Pushing onto a full buffer silently drops the pushed event, keeping
/// memory use fixed at the cost of losing events under load.
///
/// # Example
///
/// ```rust
/// use hsmlite::core::{Event, Signal};
/// use hsmlite::queue::{EventQueue, RingBuffer};
///
/// let mut queue: RingBuffer<Event, 2> = RingBuffer::new();
/// queue.push_back(Event::new(Signal::user(0)));
/// queue.push_back(Event::new(Signal::user(1)));
/// queue.push_back(Event::new(Signal::user(2))); // dropped
///
/// assert_eq!(queue.size(), 2);
/// assert_eq!(queue.front().map(|e| e.signal), Some(Signal::user(0)));
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<E, const N: usize = DEFAULT_QUEUE_CAPACITY> {
    slots: [Option<E>; N],
    front: usize,
    // one past the last event
    back: usize,
    len: usize,
}

impl<E, const N: usize> RingBuffer<E, N> {
    const CAPACITY_IS_NONZERO: () = assert!(N > 0, "ring buffer capacity must be at least 1");

    pub fn new() -> Self {
        let () = Self::CAPACITY_IS_NONZERO;
        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }
}

impl<E, const N: usize> Default for RingBuffer<E, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, const N: usize> EventQueue<E> for RingBuffer<E, N> {
    fn push_back(&mut self, event: E) {
        if self.is_full() {
            debug!(capacity = N, "ring buffer full, dropping event");
            return;
        }
        self.slots[self.back] = Some(event);
        self.back = (self.back + 1) % N;
        self.len += 1;
    }

    fn front(&self) -> Option<&E> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    fn pop_front(&mut self) {
        if self.len == 0 {
            return;
        }
        self.slots[self.front] = None;
        self.front = (self.front + 1) % N;
        self.len -= 1;
    }

    fn size(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, Signal};

    fn front_signal<const N: usize>(queue: &RingBuffer<Event, N>) -> Option<u8> {
        queue.front().map(|event| event.signal.value())
    }

    #[test]
    fn empty_buffer_has_nothing_to_pop() {
        let mut queue: RingBuffer<Event, 5> = RingBuffer::new();
        assert_eq!(queue.size(), 0);
        assert_eq!(front_signal(&queue), None);

        queue.pop_front();

        assert_eq!(queue.size(), 0);
        assert_eq!(front_signal(&queue), None);
    }

    #[test]
    fn overflow_drops_newest_event() {
        let mut queue: RingBuffer<Event, 5> = RingBuffer::new();
        for value in 10..16 {
            queue.push_back(Event::new(Signal(value)));
            assert_eq!(front_signal(&queue), Some(10));
        }
        assert_eq!(queue.size(), 5);
        assert!(queue.is_full());

        let mut drained = Vec::new();
        while let Some(value) = front_signal(&queue) {
            drained.push(value);
            queue.pop_front();
        }
        assert_eq!(drained, vec![10, 11, 12, 13, 14]);
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn indices_wrap_around() {
        let mut queue: RingBuffer<Event, 5> = RingBuffer::new();
        for value in 10..15 {
            queue.push_back(Event::new(Signal(value)));
        }
        for _ in 0..5 {
            queue.pop_front();
        }

        queue.push_back(Event::new(Signal(16)));
        queue.push_back(Event::new(Signal(17)));
        assert_eq!(queue.size(), 2);
        assert_eq!(front_signal(&queue), Some(16));

        queue.pop_front();
        assert_eq!(front_signal(&queue), Some(17));
        queue.pop_front();
        assert_eq!(front_signal(&queue), None);
    }

    #[test]
    fn default_capacity_applies() {
        let queue: RingBuffer<Event> = RingBuffer::default();
        assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY);
        assert!(queue.is_empty());
    }
}
