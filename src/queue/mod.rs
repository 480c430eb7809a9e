//! FIFO event queues.
//!
//! Handy when events are produced somewhere it is awkward to dispatch them
//! immediately, e.g. while polling inputs. Feed a queue to
//! [`dispatch_all`](crate::dispatch_all) to deliver its contents.
//!
//! Two implementations are provided:
//! - [`RingBuffer`]: fixed capacity, stores events inline, drops the newest
//!   event when full
//! - [`HeapQueue`]: unbounded, each event boxed and owned by the queue
//!   until the consumer removes it
//!
//! Queues do no synchronization. One consumer drains them, and producers
//! must not overlap.

mod heap;
mod ring;

pub use heap::HeapQueue;
pub use ring::{RingBuffer, DEFAULT_QUEUE_CAPACITY};

/// Interface shared by all queue implementations.
pub trait EventQueue<E> {
    /// Add `event` at the back of the queue.
    fn push_back(&mut self, event: E);

    /// Event at the front of the queue, `None` when empty.
    fn front(&self) -> Option<&E>;

    /// Remove the event at the front. Does nothing when empty.
    fn pop_front(&mut self);

    /// Number of queued events.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
