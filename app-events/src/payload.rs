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

//! Payload values carried on bus channels.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field a trigger writes when it is scoped to a site.
pub const SITE_ID_FIELD: &str = "siteId";

/// Structured value delivered to subscribers.
///
/// The bus does not interpret payloads beyond the optional `siteId` field. A payload built
/// from [`Value::Null`] means "no payload".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(Value::Null)
    }

    /// Serializes a typed record into a payload.
    pub fn encode<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(record).map(Self)
    }

    /// Deserializes the payload into a typed record.
    ///
    /// An empty payload decodes as `{}`, so records whose fields are all optional still
    /// receive payload-less triggers.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match &self.0 {
            Value::Null => T::deserialize(&Value::Object(Map::new())),
            value => T::deserialize(value),
        }
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// Site the payload was triggered for, if any.
    pub fn site_id(&self) -> Option<&str> {
        self.0.get(SITE_ID_FIELD).and_then(Value::as_str)
    }

    /// Merges `site_id` into the payload, overwriting any existing `siteId`.
    ///
    /// An empty payload becomes `{ "siteId": site_id }`. Payloads that are neither empty nor
    /// objects are handed back unchanged as the error value.
    pub(crate) fn with_site_id(self, site_id: &str) -> Result<Self, Self> {
        let mut map = match self.0 {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => return Err(Self(other)),
        };
        map.insert(
            SITE_ID_FIELD.to_string(),
            Value::String(site_id.to_string()),
        );
        Ok(Self(Value::Object(map)))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Option<Value>> for Payload {
    fn from(value: Option<Value>) -> Self {
        Self(value.unwrap_or(Value::Null))
    }
}
