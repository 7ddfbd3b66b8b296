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

use serde::{Deserialize, Serialize};

/// Behaviour switches for an [`EventBus`](crate::EventBus).
///
/// ```
/// use app_events::EventBusConfig;
///
/// let config: EventBusConfig = serde_json::from_str(r#"{ "strict_channel_kinds": true }"#).unwrap();
/// assert!(config.strict_channel_kinds);
/// assert!(!config.trace_deliveries);
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EventBusConfig {
    /// Reject triggers that mix repeatable and unique semantics on one channel.
    #[serde(default)]
    pub strict_channel_kinds: bool,
    /// Emit a trace event for every single delivery.
    #[serde(default)]
    pub trace_deliveries: bool,
}
