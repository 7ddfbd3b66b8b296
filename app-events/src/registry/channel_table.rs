//! Immutable channel-table snapshot: subscriber lists, unique-event records and kinds.
//!
//! Every mutation returns a new table so readers holding an older snapshot keep a stable
//! view for the whole duration of a fan-out.

use crate::catalog::ChannelKind;
use crate::payload::Payload;
use crate::subscriber::{Subscriber, SubscriberId};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub(crate) struct ChannelTable {
    subscribers: HashMap<String, Arc<[Subscriber]>>,
    unique_records: HashMap<String, Arc<Payload>>,
    kinds: HashMap<String, ChannelKind>,
}

impl ChannelTable {
    /// Subscribers of `channel` in registration order.
    pub(crate) fn subscribers(&self, channel: &str) -> &[Subscriber] {
        self.subscribers
            .get(channel)
            .map(|subscribers| &subscribers[..])
            .unwrap_or_default()
    }

    pub(crate) fn contains_subscriber(&self, channel: &str, id: SubscriberId) -> bool {
        self.subscribers(channel)
            .iter()
            .any(|subscriber| subscriber.id() == id)
    }

    pub(crate) fn unique_record(&self, channel: &str) -> Option<&Arc<Payload>> {
        self.unique_records.get(channel)
    }

    pub(crate) fn kind(&self, channel: &str) -> Option<ChannelKind> {
        self.kinds.get(channel).copied()
    }

    /// Names of every channel that has a subscriber list or a unique record.
    pub(crate) fn channel_names(&self) -> Vec<String> {
        self.subscribers
            .keys()
            .chain(self.unique_records.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub(crate) fn with_subscriber(&self, channel: &str, subscriber: Subscriber) -> Self {
        let mut next = self.clone();
        let mut subscribers = self.subscribers(channel).to_vec();
        subscribers.push(subscriber);
        next.subscribers
            .insert(channel.to_string(), Arc::from(subscribers));
        next
    }

    /// Returns `None` when `id` is not registered on `channel`.
    ///
    /// The channel keeps its (possibly empty) subscriber list once created.
    pub(crate) fn without_subscriber(&self, channel: &str, id: SubscriberId) -> Option<Self> {
        if !self.contains_subscriber(channel, id) {
            return None;
        }
        let mut next = self.clone();
        let remaining: Vec<Subscriber> = self
            .subscribers(channel)
            .iter()
            .filter(|subscriber| subscriber.id() != id)
            .cloned()
            .collect();
        next.subscribers
            .insert(channel.to_string(), Arc::from(remaining));
        Some(next)
    }

    /// Returns `None` when `channel` already has a unique record.
    pub(crate) fn with_unique_record(&self, channel: &str, record: Arc<Payload>) -> Option<Self> {
        if self.unique_records.contains_key(channel) {
            return None;
        }
        let mut next = self.clone();
        next.unique_records.insert(channel.to_string(), record);
        Some(next)
    }

    pub(crate) fn with_kind(&self, channel: &str, kind: ChannelKind) -> Self {
        let mut next = self.clone();
        next.kinds.insert(channel.to_string(), kind);
        next
    }
}
