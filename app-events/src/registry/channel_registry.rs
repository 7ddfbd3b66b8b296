/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Snapshot owner for the channel table.
//!
//! Readers load the current table without locking. Writers apply read-copy-update steps,
//! so a registration racing with a unique trigger sees either the table before the record
//! was stored (and receives the fan-out) or the table after (and receives the replay).

use crate::catalog::ChannelKind;
use crate::payload::Payload;
use crate::registry::channel_table::ChannelTable;
use crate::subscriber::{Callback, Subscriber, SubscriberId};
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Outcome of a registration attempt.
pub(crate) enum Registration {
    Live(SubscriberId),
    /// The channel is finalized; the caller replays this record instead.
    Replay(Arc<Payload>),
}

pub(crate) struct ChannelRegistry {
    table: ArcSwap<ChannelTable>,
    next_subscriber_id: AtomicU64,
}

impl ChannelRegistry {
    pub(crate) fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(ChannelTable::default()),
            next_subscriber_id: AtomicU64::new(0),
        }
    }

    pub(crate) fn snapshot(&self) -> Arc<ChannelTable> {
        self.table.load_full()
    }

    /// Adds a subscriber unless the channel already holds a unique record.
    pub(crate) fn register(
        &self,
        channel: &str,
        site_scope: Option<&str>,
        callback: Callback,
    ) -> Registration {
        let id = SubscriberId(self.next_subscriber_id.fetch_add(1, Ordering::Relaxed));
        let subscriber = Subscriber::new(id, site_scope, callback);

        let previous = self.table.rcu(|table| {
            if table.unique_record(channel).is_some() {
                Arc::clone(table)
            } else {
                Arc::new(table.with_subscriber(channel, subscriber.clone()))
            }
        });

        match previous.unique_record(channel) {
            Some(record) => Registration::Replay(Arc::clone(record)),
            None => Registration::Live(id),
        }
    }

    /// Removes a subscriber. Returns `true` only when it was still registered.
    pub(crate) fn release(&self, channel: &str, id: SubscriberId) -> bool {
        let previous = self.table.rcu(|table| match table.without_subscriber(channel, id) {
            Some(next) => Arc::new(next),
            None => Arc::clone(table),
        });
        previous.contains_subscriber(channel, id)
    }

    pub(crate) fn is_registered(&self, channel: &str, id: SubscriberId) -> bool {
        self.table.load().contains_subscriber(channel, id)
    }

    /// Stores the first unique record of `channel`.
    ///
    /// Returns the snapshot the record was added to, whose subscribers are the ones that
    /// must receive the fan-out, or `None` when the channel was already finalized.
    pub(crate) fn finalize_unique(
        &self,
        channel: &str,
        record: Arc<Payload>,
    ) -> Option<Arc<ChannelTable>> {
        let previous = self.table.rcu(|table| {
            match table.with_unique_record(channel, Arc::clone(&record)) {
                Some(next) => Arc::new(next),
                None => Arc::clone(table),
            }
        });

        if previous.unique_record(channel).is_some() {
            None
        } else {
            Some(previous)
        }
    }

    /// Records `kind` for `channel` unless one is already set; returns the established kind.
    pub(crate) fn claim_kind(&self, channel: &str, kind: ChannelKind) -> ChannelKind {
        let previous = self.table.rcu(|table| {
            if table.kind(channel).is_some() {
                Arc::clone(table)
            } else {
                Arc::new(table.with_kind(channel, kind))
            }
        });
        previous.kind(channel).unwrap_or(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelRegistry, Registration};
    use crate::catalog::ChannelKind;
    use crate::payload::Payload;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn register(registry: &ChannelRegistry, channel: &str) -> Registration {
        registry.register(channel, None, Arc::new(|_| {}))
    }

    #[test]
    fn register_then_release_is_idempotent() {
        let registry = ChannelRegistry::new();
        let Registration::Live(id) = register(&registry, "login") else {
            panic!("fresh channel should register a live subscriber");
        };

        assert!(registry.is_registered("login", id));
        assert!(registry.release("login", id));
        assert!(!registry.release("login", id));
        assert!(!registry.is_registered("login", id));
    }

    #[test]
    fn snapshot_taken_before_release_still_lists_subscriber() {
        let registry = ChannelRegistry::new();
        let Registration::Live(id) = register(&registry, "login") else {
            panic!("fresh channel should register a live subscriber");
        };

        let before = registry.snapshot();
        registry.release("login", id);

        assert_eq!(before.subscribers("login").len(), 1);
        assert!(registry.snapshot().subscribers("login").is_empty());
    }

    #[test]
    fn finalize_unique_returns_fan_out_snapshot_once() {
        let registry = ChannelRegistry::new();
        let _ = register(&registry, "boot");

        let fan_out = registry
            .finalize_unique("boot", Arc::new(Payload::new(json!({ "n": 1 }))))
            .expect("first trigger finalizes the channel");
        assert_eq!(fan_out.subscribers("boot").len(), 1);
        assert!(fan_out.unique_record("boot").is_none());

        assert!(registry
            .finalize_unique("boot", Arc::new(Payload::new(json!({ "n": 2 }))))
            .is_none());
    }

    #[test]
    fn register_after_finalize_replays_record() {
        let registry = ChannelRegistry::new();
        registry
            .finalize_unique("boot", Arc::new(Payload::new(json!({ "n": 1 }))))
            .expect("first trigger finalizes the channel");

        match register(&registry, "boot") {
            Registration::Replay(record) => assert_eq!(record.value(), &json!({ "n": 1 })),
            Registration::Live(_) => panic!("finalized channel must replay"),
        }
        assert!(registry.snapshot().subscribers("boot").is_empty());
    }

    #[test]
    fn claim_kind_keeps_first_claim() {
        let registry = ChannelRegistry::new();

        assert_eq!(
            registry.claim_kind("sync", ChannelKind::Repeatable),
            ChannelKind::Repeatable
        );
        assert_eq!(
            registry.claim_kind("sync", ChannelKind::Unique),
            ChannelKind::Repeatable
        );
    }

    #[test]
    fn racing_registrations_get_fan_out_or_replay_exactly_once() {
        const SUBSCRIBERS: usize = 32;

        for _ in 0..16 {
            let registry = ChannelRegistry::new();
            let deliveries: Vec<Arc<AtomicUsize>> =
                (0..SUBSCRIBERS).map(|_| Arc::new(AtomicUsize::new(0))).collect();
            let start = Barrier::new(SUBSCRIBERS + 1);

            thread::scope(|scope| {
                for counter in &deliveries {
                    let (registry, start) = (&registry, &start);
                    let counter = Arc::clone(counter);
                    scope.spawn(move || {
                        let callback_counter = Arc::clone(&counter);
                        start.wait();
                        let registration = registry.register(
                            "boot",
                            None,
                            Arc::new(move |_| {
                                callback_counter.fetch_add(1, Ordering::SeqCst);
                            }),
                        );
                        if let Registration::Replay(record) = registration {
                            counter.fetch_add(1, Ordering::SeqCst);
                            assert_eq!(record.value(), &json!({ "n": 1 }));
                        }
                    });
                }

                start.wait();
                let fan_out = registry
                    .finalize_unique("boot", Arc::new(Payload::new(json!({ "n": 1 }))))
                    .expect("only one trigger runs");
                let record = Payload::new(json!({ "n": 1 }));
                for subscriber in fan_out.subscribers("boot") {
                    subscriber.deliver(&record);
                }
            });

            for counter in &deliveries {
                assert_eq!(counter.load(Ordering::SeqCst), 1);
            }
        }
    }
}
