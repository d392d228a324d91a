use crate::record::RawLogEvent;
use crate::self_log;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Create the unbounded producer/consumer pair carrying raw events from
/// arbitrary threads to the tick context.
pub fn unbounded() -> (EventSender, EventChannel) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventChannel { rx })
}

/// Producer half. Cheap to clone and usable from any thread.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<RawLogEvent>,
}

impl EventSender {
    /// Fire-and-forget enqueue. Never blocks; the queue has no capacity
    /// limit. If the consumer side is gone the event is dropped and the
    /// failure reported on the self-diagnostic channel, so logging can
    /// never take the host down.
    pub fn emit(&self, event: RawLogEvent) {
        if let Err(err) = self.tx.send(event) {
            self_log::write(&format!(
                "log overlay channel unavailable, dropping event: {}",
                err.0.message
            ));
        }
    }
}

/// Consumer half, owned by the tick context.
pub struct EventChannel {
    rx: Receiver<RawLogEvent>,
}

impl EventChannel {
    /// Pop at most `n` queued events in FIFO order. Returns immediately
    /// with whatever is currently available, possibly nothing.
    pub fn drain_up_to(&self, n: usize) -> Vec<RawLogEvent> {
        let mut drained = Vec::new();
        while drained.len() < n {
            match self.rx.try_recv() {
                Ok(event) => drained.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::unbounded;
    use crate::record::{LogLevel, RawLogEvent};

    #[test]
    fn drains_in_fifo_order() {
        let (sender, channel) = unbounded();
        for i in 0..3 {
            sender.emit(RawLogEvent::new(LogLevel::Debug, format!("event {i}")));
        }
        let drained = channel.drain_up_to(8);
        let messages: Vec<&str> = drained.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["event 0", "event 1", "event 2"]);
    }

    #[test]
    fn drain_is_bounded_and_leaves_the_rest_queued() {
        let (sender, channel) = unbounded();
        for i in 0..5 {
            sender.emit(RawLogEvent::new(LogLevel::Debug, format!("event {i}")));
        }
        assert_eq!(channel.drain_up_to(2).len(), 2);
        assert_eq!(channel.drain_up_to(2).len(), 2);
        assert_eq!(channel.drain_up_to(2).len(), 1);
        assert!(channel.drain_up_to(2).is_empty());
    }

    #[test]
    fn empty_channel_drains_nothing() {
        let (_sender, channel) = unbounded();
        assert!(channel.drain_up_to(4).is_empty());
    }

    #[test]
    fn emit_after_consumer_dropped_does_not_panic() {
        let (sender, channel) = unbounded();
        drop(channel);
        sender.emit(RawLogEvent::new(LogLevel::Information, "orphaned"));
    }
}
