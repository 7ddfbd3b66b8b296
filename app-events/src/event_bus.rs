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

use crate::catalog::{self, Channel, ChannelKind};
use crate::config::EventBusConfig;
use crate::error::EventBusError;
use crate::observability::{events, fields};
use crate::payload::Payload;
use crate::registry::channel_registry::{ChannelRegistry, Registration};
use crate::registry::channel_table::ChannelTable;
use crate::subscriber::{Callback, SubscriberId};
use crate::subscription::Subscription;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace, warn};

const COMPONENT: &str = "event_bus";

/// [`EventBus`] routes named notifications from producers to every interested consumer.
///
/// The bus is an explicit context object: create one per application (or per test) and
/// clone the handle into every component that publishes or subscribes. Clones share the
/// same registry.
///
/// Delivery is synchronous. [`publish`](EventBus::publish) and
/// [`publish_once`](EventBus::publish_once) invoke every matching callback, in registration
/// order, before returning. Callbacks may re-enter the bus; a panicking callback stops the
/// remaining deliveries of that trigger.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use app_events::EventBus;
/// use serde_json::json;
///
/// let bus = EventBus::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = seen.clone();
/// let subscription = bus
///     .subscribe("login", move |payload| sink.lock().unwrap().push(payload.clone()), Some("site-1"))
///     .unwrap();
///
/// bus.publish("login", json!({}), Some("site-2")).unwrap();
/// bus.publish("login", json!({}), Some("site-1")).unwrap();
/// subscription.off();
/// bus.publish("login", json!({}), Some("site-1")).unwrap();
///
/// let seen = seen.lock().unwrap();
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen[0].site_id(), Some("site-1"));
/// ```
#[derive(Clone)]
pub struct EventBus {
    config: Arc<EventBusConfig>,
    registry: Arc<ChannelRegistry>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_channel_name(channel: &str, operation: &'static str) -> Result<(), EventBusError> {
    if channel.is_empty() {
        warn!(
            event = events::CHANNEL_NAME_REJECTED,
            component = COMPONENT,
            operation,
            reason = fields::REASON_EMPTY_CHANNEL_NAME,
            "rejected empty channel name"
        );
        return Err(EventBusError::EmptyChannelName);
    }
    Ok(())
}

fn prepare_payload(
    channel: &str,
    payload: Payload,
    site_id: Option<&str>,
) -> Result<Payload, EventBusError> {
    let Some(site_id) = site_id else {
        return Ok(payload);
    };
    payload.with_site_id(site_id).map_err(|rejected| {
        warn!(
            event = events::PUBLISH_REJECTED,
            component = COMPONENT,
            channel,
            site_id,
            reason = fields::REASON_PAYLOAD_NOT_OBJECT,
            payload_shape = %fields::format_payload_shape(&rejected),
            "payload cannot carry a site id"
        );
        EventBusError::PayloadNotObject {
            channel: channel.to_string(),
        }
    })
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        debug!(
            component = COMPONENT,
            strict_channel_kinds = config.strict_channel_kinds,
            trace_deliveries = config.trace_deliveries,
            "event bus created"
        );
        Self {
            config: Arc::new(config),
            registry: Arc::new(ChannelRegistry::new()),
        }
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    /// Subscribes `callback` to `channel`.
    ///
    /// If the channel already holds a unique-event record the callback runs immediately
    /// with that payload (regardless of `site_scope`) and the returned handle is inert.
    /// Otherwise the callback is registered; with a `site_scope` it only receives payloads
    /// whose `siteId` equals the scope.
    pub fn subscribe<F>(
        &self,
        channel: &str,
        callback: F,
        site_scope: Option<&str>,
    ) -> Result<Subscription, EventBusError>
    where
        F: Fn(&Payload) + Send + Sync + 'static,
    {
        validate_channel_name(channel, "subscribe")?;
        Ok(self.subscribe_callback(channel, Arc::new(callback), site_scope))
    }

    /// Subscribes one callback to several channels and returns a single handle releasing
    /// all of them.
    ///
    /// Every name is validated before anything is registered.
    pub fn subscribe_multiple<F>(
        &self,
        channels: &[&str],
        callback: F,
        site_scope: Option<&str>,
    ) -> Result<Subscription, EventBusError>
    where
        F: Fn(&Payload) + Send + Sync + 'static,
    {
        for channel in channels {
            validate_channel_name(channel, "subscribe_multiple")?;
        }

        let callback: Callback = Arc::new(callback);
        let entries = channels
            .iter()
            .flat_map(|channel| {
                self.register_or_replay(channel, Arc::clone(&callback), site_scope)
            })
            .collect();
        Ok(Subscription::new(&self.registry, entries))
    }

    /// Delivers `payload` to the current subscribers of `channel`.
    ///
    /// With a `site_id` the payload gains a `siteId` field; an empty payload becomes
    /// `{ "siteId": ... }`. Without subscribers the payload is dropped.
    pub fn publish(
        &self,
        channel: &str,
        payload: impl Into<Payload>,
        site_id: Option<&str>,
    ) -> Result<(), EventBusError> {
        validate_channel_name(channel, "publish")?;
        let payload = prepare_payload(channel, payload.into(), site_id)?;
        self.check_kind(channel, ChannelKind::Repeatable)?;

        let snapshot = self.registry.snapshot();
        let delivered = self.fan_out(&snapshot, channel, &payload);
        debug!(
            event = events::PUBLISH_OK,
            component = COMPONENT,
            channel,
            site_id = fields::format_site(site_id),
            delivered,
            "event published"
        );
        Ok(())
    }

    /// Triggers `channel` as a unique event.
    ///
    /// The first call stores the payload permanently and delivers it to the subscribers
    /// registered at that moment; every later subscriber receives it on subscription.
    /// Later calls are ignored.
    pub fn publish_once(
        &self,
        channel: &str,
        payload: impl Into<Payload>,
        site_id: Option<&str>,
    ) -> Result<(), EventBusError> {
        validate_channel_name(channel, "publish_once")?;
        if self.registry.snapshot().unique_record(channel).is_some() {
            debug!(
                event = events::PUBLISH_ONCE_IGNORED,
                component = COMPONENT,
                channel,
                "unique event already triggered"
            );
            return Ok(());
        }

        let payload = prepare_payload(channel, payload.into(), site_id)?;
        self.check_kind(channel, ChannelKind::Unique)?;

        let record = Arc::new(payload);
        let Some(snapshot) = self.registry.finalize_unique(channel, Arc::clone(&record)) else {
            debug!(
                event = events::PUBLISH_ONCE_IGNORED,
                component = COMPONENT,
                channel,
                "unique event already triggered"
            );
            return Ok(());
        };

        let delivered = self.fan_out(&snapshot, channel, &record);
        debug!(
            event = events::PUBLISH_ONCE_STORED,
            component = COMPONENT,
            channel,
            site_id = fields::format_site(site_id),
            delivered,
            "unique event stored"
        );
        Ok(())
    }

    /// Encodes `record` and triggers a well-known channel according to its kind.
    pub fn publish_event<T: Serialize>(
        &self,
        channel: &Channel<T>,
        record: &T,
        site_id: Option<&str>,
    ) -> Result<(), EventBusError> {
        let payload = Payload::encode(record)
            .map_err(|err| EventBusError::PayloadEncoding(err.to_string()))?;
        match channel.kind() {
            ChannelKind::Repeatable => self.publish(channel.name(), payload, site_id),
            ChannelKind::Unique => self.publish_once(channel.name(), payload, site_id),
        }
    }

    /// Subscribes to a well-known channel with a callback receiving decoded records.
    ///
    /// Payloads that do not decode into `T` are skipped and logged.
    pub fn subscribe_event<T, F>(
        &self,
        channel: &Channel<T>,
        callback: F,
        site_scope: Option<&str>,
    ) -> Result<Subscription, EventBusError>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        let name = channel.name();
        self.subscribe(
            name,
            move |payload| match payload.decode::<T>() {
                Ok(record) => callback(record),
                Err(err) => warn!(
                    event = events::TYPED_DECODE_FAILED,
                    component = COMPONENT,
                    channel = name,
                    payload_shape = %fields::format_payload_shape(payload),
                    err = %err,
                    "payload does not match channel record, skipped"
                ),
            },
            site_scope,
        )
    }

    /// Stored unique-event payload of `channel`, if it was triggered as unique.
    pub fn unique_record(&self, channel: &str) -> Option<Payload> {
        self.registry
            .snapshot()
            .unique_record(channel)
            .map(|record| record.as_ref().clone())
    }

    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.registry.snapshot().subscribers(channel).len()
    }

    /// Channels that have been subscribed to or finalized, sorted by name.
    pub fn channel_names(&self) -> Vec<String> {
        self.registry.snapshot().channel_names()
    }

    fn subscribe_callback(
        &self,
        channel: &str,
        callback: Callback,
        site_scope: Option<&str>,
    ) -> Subscription {
        match self.register_or_replay(channel, callback, site_scope) {
            Some(entry) => Subscription::new(&self.registry, vec![entry]),
            None => Subscription::inert(),
        }
    }

    /// Registers the callback, or replays the unique record into it right away.
    fn register_or_replay(
        &self,
        channel: &str,
        callback: Callback,
        site_scope: Option<&str>,
    ) -> Option<(String, SubscriberId)> {
        match self
            .registry
            .register(channel, site_scope, Arc::clone(&callback))
        {
            Registration::Live(id) => {
                debug!(
                    event = events::SUBSCRIBE_OK,
                    component = COMPONENT,
                    channel,
                    site_scope = fields::format_site(site_scope),
                    subscriber_id = id.0,
                    "subscriber registered"
                );
                Some((channel.to_string(), id))
            }
            Registration::Replay(record) => {
                debug!(
                    event = events::SUBSCRIBE_REPLAY,
                    component = COMPONENT,
                    channel,
                    site_scope = fields::format_site(site_scope),
                    "replaying unique event to late subscriber"
                );
                callback(&record);
                None
            }
        }
    }

    fn check_kind(&self, channel: &str, attempted: ChannelKind) -> Result<(), EventBusError> {
        if !self.config.strict_channel_kinds {
            return Ok(());
        }

        let expected = match catalog::channel_kind(channel) {
            Some(kind) => kind,
            None => self.registry.claim_kind(channel, attempted),
        };
        if expected == attempted {
            return Ok(());
        }

        warn!(
            event = events::CHANNEL_KIND_MISMATCH,
            component = COMPONENT,
            channel,
            expected = %expected,
            attempted = %attempted,
            "channel triggered with the wrong kind"
        );
        Err(EventBusError::ChannelKindMismatch {
            channel: channel.to_string(),
            expected,
            attempted,
        })
    }

    /// Delivers to every accepting subscriber of `channel` in `snapshot`.
    fn fan_out(&self, snapshot: &ChannelTable, channel: &str, payload: &Payload) -> usize {
        let mut delivered = 0;
        for subscriber in snapshot.subscribers(channel) {
            if !subscriber.accepts(payload) {
                continue;
            }
            if self.config.trace_deliveries {
                trace!(
                    event = events::DELIVERY,
                    component = COMPONENT,
                    channel,
                    subscriber_id = subscriber.id().0,
                    site_scope = fields::format_site(subscriber.site_scope()),
                    "delivering payload"
                );
            }
            subscriber.deliver(payload);
            delivered += 1;
        }
        delivered
    }
}
