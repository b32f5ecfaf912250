//! Thread-shared handle to a [`ReceiverState`]
//!
//! A session thread feeds messages while a presentation thread reads. Readers
//! get owned snapshots or run a closure under the lock; no reference into the
//! state outlives the lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::change::ChangeType;
use crate::message::Message;
use crate::snapshot::StateSnapshot;
use crate::ReceiverState;

/// Cloneable handle; all clones see the same state
#[derive(Debug, Clone)]
pub struct SharedState {
    inner: Arc<Mutex<ReceiverState>>,
}

impl SharedState {
    pub fn new(state: ReceiverState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Apply a message under the lock
    pub fn update(&self, msg: &Message) -> ChangeType {
        self.inner.lock().update(msg)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run a read-only closure against the live state
    pub fn read<R>(&self, f: impl FnOnce(&ReceiverState) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<ReceiverState> for SharedState {
    fn from(state: ReceiverState) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PowerStatus;
    use std::thread;

    #[test]
    fn test_updates_visible_across_threads() {
        let shared = SharedState::new(ReceiverState::new(0));
        let writer = shared.clone();

        let handle = thread::spawn(move || writer.update(&Message::PowerStatus(PowerStatus::On)));
        assert_eq!(handle.join().unwrap(), ChangeType::Common);

        assert!(shared.read(|state| state.is_on()));
        assert!(shared.snapshot().is_on());
    }
}
