use crate::record::LogRecord;
use std::collections::VecDeque;

/// Bounded FIFO of display records. Touched only by the tick context, so no
/// synchronization is needed.
///
/// Eviction runs on arrival order (cheap head removal); the draw pass asks
/// for [`recent_first`](Self::recent_first), which sorts the small bounded
/// set by timestamp instead. The two orderings are independent policies.
#[derive(Debug)]
pub struct DrawBuffer {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

impl DrawBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append at the tail, then evict from the head until the bound holds
    /// again. `len() <= capacity` after every call.
    pub fn push(&mut self, record: LogRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    /// Records ordered most recent first for display, regardless of the
    /// arrival order eviction runs on.
    pub fn recent_first(&self) -> Vec<&LogRecord> {
        let mut sorted: Vec<&LogRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
