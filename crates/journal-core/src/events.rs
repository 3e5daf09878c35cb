//! Store change notifications.
//!
//! Each subscriber owns the receiving half of an unbounded channel. The store
//! pushes one [`StoreEvent`] per successful mutation and drops senders whose
//! receiver has gone away.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::models::{EntryId, SortOrder};

/// A successful mutation of the entry store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// An entry was appended
    Added(EntryId),
    /// An entry's title/content was replaced
    Edited(EntryId),
    /// An entry's bookmark flag flipped
    BookmarkToggled {
        id: EntryId,
        is_bookmarked: bool,
    },
    /// An entry was removed
    Deleted(EntryId),
    /// The sequence was reordered
    Sorted(SortOrder),
}

/// Receiving side of a store subscription
pub type StoreSubscription = UnboundedReceiver<StoreEvent>;

#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<UnboundedSender<StoreEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> StoreSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.senders.push(sender);
        receiver
    }

    pub(crate) fn notify(&mut self, event: StoreEvent) {
        let before = self.senders.len();
        self.senders.retain(|sender| sender.send(event).is_ok());

        let dropped = before - self.senders.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Pruned closed store subscribers");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
