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

use app_events::Payload;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Collects every payload delivered to the callbacks it hands out.
#[derive(Clone, Default)]
pub struct DeliveryRecorder {
    history: Arc<Mutex<Vec<Payload>>>,
}

impl DeliveryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl Fn(&Payload) + Send + Sync + 'static {
        let history = self.history.clone();
        move |payload: &Payload| lock(&history).push(payload.clone())
    }

    pub fn count(&self) -> usize {
        lock(&self.history).len()
    }

    pub fn payloads(&self) -> Vec<Payload> {
        lock(&self.history).clone()
    }

    pub fn values(&self) -> Vec<Value> {
        lock(&self.history)
            .iter()
            .map(|payload| payload.value().clone())
            .collect()
    }
}

/// Records which labelled callback ran, in call order, across several subscribers.
#[derive(Clone, Default)]
pub struct OrderRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl OrderRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self, label: &str) -> impl Fn(&Payload) + Send + Sync + 'static {
        let calls = self.calls.clone();
        let label = label.to_string();
        move |_: &Payload| lock(&calls).push(label.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}
