//! Unbounded queue of individually boxed events.

use super::EventQueue;
use std::collections::VecDeque;

/// Queue that boxes each event and never runs out of room.
///
/// The queue owns every event until it is removed: [`pop_front`] releases
/// it, [`take_front`] hands it to the caller, who releases it by dropping
/// the box once processed.
///
/// [`pop_front`]: EventQueue::pop_front
/// [`take_front`]: HeapQueue::take_front
#[derive(Debug)]
pub struct HeapQueue<E> {
    events: VecDeque<Box<E>>,
}

impl<E> HeapQueue<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Queue an already boxed event without moving it.
    pub fn push_boxed(&mut self, event: Box<E>) {
        self.events.push_back(event);
    }

    /// Remove the front event and transfer its ownership to the caller.
    pub fn take_front(&mut self) -> Option<Box<E>> {
        self.events.pop_front()
    }
}

impl<E> Default for HeapQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventQueue<E> for HeapQueue<E> {
    fn push_back(&mut self, event: E) {
        self.push_boxed(Box::new(event));
    }

    fn front(&self) -> Option<&E> {
        self.events.front().map(|event| event.as_ref())
    }

    fn pop_front(&mut self) {
        self.events.pop_front();
    }

    fn size(&self) -> usize {
        self.events.len()
    }
}
