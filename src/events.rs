use std::sync::mpsc::{Receiver, Sender, channel};

/// One change pushed by the external realtime collaborator (the hosted
/// database's change feed). The feed itself is not reimplemented here; this
/// is only the seam the app consumes it through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordChange {
    pub table: String,
    pub record_id: String,
    pub kind: ChangeKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
}

/// Producer half, handed to whatever bridges the external feed.
#[derive(Clone)]
pub struct RecordPublisher {
    tx: Sender<RecordChange>,
}

impl RecordPublisher {
    pub fn publish(&self, change: RecordChange) {
        // A dropped feed just means nobody is watching anymore.
        let _ = self.tx.send(change);
    }
}

/// Consumer half, polled from the UI update loop.
pub struct RecordFeed {
    rx: Receiver<RecordChange>,
}

impl RecordFeed {
    pub fn new() -> (RecordPublisher, RecordFeed) {
        let (tx, rx) = channel();
        (RecordPublisher { tx }, RecordFeed { rx })
    }

    /// Non-blocking: `None` when nothing is pending.
    pub fn poll(&self) -> Option<RecordChange> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_is_non_blocking_and_ordered() {
        let (publisher, feed) = RecordFeed::new();
        assert_eq!(feed.poll(), None);

        publisher.publish(RecordChange {
            table: "attendance".into(),
            record_id: "a1".into(),
            kind: ChangeKind::Inserted,
        });
        publisher.publish(RecordChange {
            table: "attendance".into(),
            record_id: "a1".into(),
            kind: ChangeKind::Updated,
        });

        assert_eq!(feed.poll().unwrap().kind, ChangeKind::Inserted);
        assert_eq!(feed.poll().unwrap().kind, ChangeKind::Updated);
        assert_eq!(feed.poll(), None);
    }

    #[test]
    fn publish_after_feed_drop_does_not_panic() {
        let (publisher, feed) = RecordFeed::new();
        drop(feed);
        publisher.publish(RecordChange {
            table: "profiles".into(),
            record_id: "p9".into(),
            kind: ChangeKind::Deleted,
        });
    }
}
