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

use crate::observability::events;
use crate::registry::channel_registry::ChannelRegistry;
use crate::subscriber::SubscriberId;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Weak};
use tracing::debug;

const COMPONENT: &str = "subscription";

///
/// [`Subscription`] is the release handle returned by
/// [`EventBus::subscribe`](crate::EventBus::subscribe) and
/// [`EventBus::subscribe_multiple`](crate::EventBus::subscribe_multiple).
///
/// Dropping the handle does not unsubscribe: registrations stay live until [`off`] is
/// called or the bus itself is dropped. Handles returned for a replayed unique event hold
/// no registration at all and their [`off`] does nothing.
///
/// [`off`]: Subscription::off
#[must_use = "dropping a subscription does not release it; keep it and call `off`"]
pub struct Subscription {
    registry: Weak<ChannelRegistry>,
    entries: Vec<(String, SubscriberId)>,
}

impl Subscription {
    pub(crate) fn new(
        registry: &Arc<ChannelRegistry>,
        entries: Vec<(String, SubscriberId)>,
    ) -> Self {
        Self {
            registry: Arc::downgrade(registry),
            entries,
        }
    }

    /// Handle with nothing to release.
    pub(crate) fn inert() -> Self {
        Self {
            registry: Weak::new(),
            entries: Vec::new(),
        }
    }

    /// Releases every registration held by this handle. Calling it again does nothing.
    ///
    /// A trigger that is already delivering keeps delivering to the snapshot it started
    /// with; only later triggers skip the released callbacks.
    pub fn off(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        for (channel, id) in &self.entries {
            if registry.release(channel, *id) {
                debug!(
                    event = events::UNSUBSCRIBE_OK,
                    component = COMPONENT,
                    channel = channel.as_str(),
                    subscriber_id = id.0,
                    "subscription released"
                );
            }
        }
    }

    /// Whether any registration held by this handle is still live.
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        self.entries
            .iter()
            .any(|(channel, id)| registry.is_registered(channel, *id))
    }

    /// Channels this handle registered on, in subscription order, including released ones.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(channel, _)| channel.as_str())
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
