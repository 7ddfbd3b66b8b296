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

use crate::catalog::ChannelKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Boundary validation failures reported by [`EventBus`](crate::EventBus).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventBusError {
    EmptyChannelName,
    /// A site id was supplied for a payload that is not an object.
    PayloadNotObject { channel: String },
    /// Strict mode saw a channel triggered with the other kind.
    ChannelKindMismatch {
        channel: String,
        expected: ChannelKind,
        attempted: ChannelKind,
    },
    PayloadEncoding(String),
}

impl Display for EventBusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventBusError::EmptyChannelName => write!(f, "channel name must not be empty"),
            EventBusError::PayloadNotObject { channel } => {
                write!(
                    f,
                    "payload for channel `{channel}` must be an object to carry a site id"
                )
            }
            EventBusError::ChannelKindMismatch {
                channel,
                expected,
                attempted,
            } => write!(
                f,
                "channel `{channel}` is {expected} but was triggered as {attempted}"
            ),
            EventBusError::PayloadEncoding(err) => write!(f, "failed to encode payload: {err}"),
        }
    }
}

impl Error for EventBusError {}
