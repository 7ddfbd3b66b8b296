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

//! Canonical structured field values and value-format helpers.

use crate::payload::Payload;
use serde_json::Value;

pub const NONE: &str = "none";

pub const REASON_EMPTY_CHANNEL_NAME: &str = "empty_channel_name";
pub const REASON_PAYLOAD_NOT_OBJECT: &str = "payload_not_object";

pub fn format_site(site_id: Option<&str>) -> &str {
    site_id.unwrap_or(NONE)
}

/// Compact description of a payload's shape, never its contents.
pub fn format_payload_shape(payload: &Payload) -> String {
    match payload.value() {
        Value::Null => NONE.to_string(),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("{{{}}}", keys.join(","))
        }
        Value::Array(items) => format!("array[{}]", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "bool".to_string(),
    }
}
