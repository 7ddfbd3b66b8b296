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

use crate::config::Step;
use anyhow::{bail, Context, Result};
use app_events::{EventBus, Payload, Subscription};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Delivery {
    pub(crate) label: String,
    pub(crate) channel: String,
    pub(crate) payload: Value,
}

/// Runs scripted steps against one bus, tracking subscriptions by label.
pub(crate) struct ScriptRunner {
    bus: EventBus,
    subscriptions: HashMap<String, Vec<Subscription>>,
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl ScriptRunner {
    pub(crate) fn new(bus: EventBus) -> Self {
        Self {
            bus,
            subscriptions: HashMap::new(),
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("script step {} failed", index + 1))?;
        }
        Ok(())
    }

    pub(crate) fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Subscribe {
                label,
                channels,
                site_id,
            } => self.subscribe(label, channels, site_id.as_deref()),
            Step::Publish {
                channel,
                payload,
                site_id,
            } => {
                self.bus
                    .publish(channel, payload.clone(), site_id.as_deref())?;
                Ok(())
            }
            Step::PublishOnce {
                channel,
                payload,
                site_id,
            } => {
                self.bus
                    .publish_once(channel, payload.clone(), site_id.as_deref())?;
                Ok(())
            }
            Step::Off { label } => {
                let Some(subscriptions) = self.subscriptions.remove(label) else {
                    bail!("unknown subscription label '{label}'");
                };
                subscriptions.iter().for_each(Subscription::off);
                info!(label = %label, "subscription released");
                Ok(())
            }
        }
    }

    // One registration per channel so each delivery can be reported with its channel.
    fn subscribe(&mut self, label: &str, channels: &[String], site_id: Option<&str>) -> Result<()> {
        if self.subscriptions.contains_key(label) {
            bail!("duplicate subscription label '{label}'");
        }
        if channels.is_empty() {
            bail!("subscription '{label}' names no channels");
        }

        let mut subscriptions = Vec::with_capacity(channels.len());
        for channel in channels {
            let callback = self.delivery_callback(label, channel);
            subscriptions.push(self.bus.subscribe(channel, callback, site_id)?);
        }
        self.subscriptions.insert(label.to_string(), subscriptions);
        Ok(())
    }

    fn delivery_callback(&self, label: &str, channel: &str) -> impl Fn(&Payload) + Send + Sync {
        let deliveries = Arc::clone(&self.deliveries);
        let (label, channel) = (label.to_string(), channel.to_string());
        move |payload| {
            info!("{label} <- {channel} {}", payload.value());
            deliveries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Delivery {
                    label: label.clone(),
                    channel: channel.clone(),
                    payload: payload.value().clone(),
                });
        }
    }
}
