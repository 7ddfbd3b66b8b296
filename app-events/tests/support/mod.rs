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

use app_events::{EventBus, EventBusConfig};

pub(crate) fn make_bus() -> EventBus {
    integration_test_utils::init_logging();
    EventBus::new()
}

#[allow(dead_code)]
pub(crate) fn make_strict_bus() -> EventBus {
    integration_test_utils::init_logging();
    EventBus::with_config(EventBusConfig {
        strict_channel_kinds: true,
        ..EventBusConfig::default()
    })
}
