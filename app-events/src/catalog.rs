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

//! Well-known application channels and the payload record each one carries.
//!
//! Channel names are stable strings shared by convention between producers and consumers.
//! The bus itself never checks payload shapes; the typed [`Channel`] handles below let
//! callers encode and decode them consistently through
//! [`EventBus::publish_event`](crate::EventBus::publish_event) and
//! [`EventBus::subscribe_event`](crate::EventBus::subscribe_event).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
/// How a channel is triggered.
pub enum ChannelKind {
    /// Ordinary fire-and-forget publish/subscribe.
    Repeatable,
    /// Fires at most once; the payload is replayed to later subscribers.
    Unique,
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Repeatable => write!(f, "repeatable"),
            ChannelKind::Unique => write!(f, "unique"),
        }
    }
}

/// Typed handle for a well-known channel carrying payload record `T`.
pub struct Channel<T> {
    name: &'static str,
    kind: ChannelKind,
    record: PhantomData<fn() -> T>,
}

impl<T> Channel<T> {
    pub const fn repeatable(name: &'static str) -> Self {
        Self {
            name,
            kind: ChannelKind::Repeatable,
            record: PhantomData,
        }
    }

    pub const fn unique(name: &'static str) -> Self {
        Self {
            name,
            kind: ChannelKind::Unique,
            record: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> ChannelKind {
        self.kind
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Channel<T> {}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Payload for events that only identify the affected site.
pub struct SiteEventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExpiredData {
    /// Page to reopen once the user has logged in again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChangedData {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletedData {
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStatusChangedData {
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatusChangedData {
    pub course_id: u64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of a background content sync run for one component.
pub struct SyncStatusChangedData {
    pub component: String,
    pub status: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

pub const SESSION_EXPIRED: Channel<SessionExpiredData> = Channel::repeatable("session_expired");
pub const LOGIN: Channel<SiteEventData> = Channel::repeatable("login");
pub const LOGOUT: Channel<SiteEventData> = Channel::repeatable("logout");
pub const LANGUAGE_CHANGED: Channel<LanguageChangedData> =
    Channel::repeatable("language_changed");
pub const SITE_ADDED: Channel<SiteEventData> = Channel::repeatable("site_added");
pub const SITE_UPDATED: Channel<SiteEventData> = Channel::repeatable("site_updated");
pub const SITE_DELETED: Channel<SiteEventData> = Channel::repeatable("site_deleted");
pub const USER_DELETED: Channel<UserDeletedData> = Channel::repeatable("user_deleted");
pub const PACKAGE_STATUS_CHANGED: Channel<PackageStatusChangedData> =
    Channel::repeatable("package_status_changed");
pub const COURSE_STATUS_CHANGED: Channel<CourseStatusChangedData> =
    Channel::repeatable("course_status_changed");
pub const SYNC_STATUS_CHANGED: Channel<SyncStatusChangedData> =
    Channel::repeatable("sync_status_changed");
pub const WS_CACHE_INVALIDATED: Channel<SiteEventData> =
    Channel::repeatable("ws_cache_invalidated");
pub const SITE_PLUGINS_LOADED: Channel<SiteEventData> = Channel::unique("site_plugins_loaded");
pub const MAIN_HOME_LOADED: Channel<SiteEventData> = Channel::unique("main_home_loaded");

/// Every well-known channel name with its kind.
pub const WELL_KNOWN: &[(&str, ChannelKind)] = &[
    (SESSION_EXPIRED.name(), SESSION_EXPIRED.kind()),
    (LOGIN.name(), LOGIN.kind()),
    (LOGOUT.name(), LOGOUT.kind()),
    (LANGUAGE_CHANGED.name(), LANGUAGE_CHANGED.kind()),
    (SITE_ADDED.name(), SITE_ADDED.kind()),
    (SITE_UPDATED.name(), SITE_UPDATED.kind()),
    (SITE_DELETED.name(), SITE_DELETED.kind()),
    (USER_DELETED.name(), USER_DELETED.kind()),
    (PACKAGE_STATUS_CHANGED.name(), PACKAGE_STATUS_CHANGED.kind()),
    (COURSE_STATUS_CHANGED.name(), COURSE_STATUS_CHANGED.kind()),
    (SYNC_STATUS_CHANGED.name(), SYNC_STATUS_CHANGED.kind()),
    (WS_CACHE_INVALIDATED.name(), WS_CACHE_INVALIDATED.kind()),
    (SITE_PLUGINS_LOADED.name(), SITE_PLUGINS_LOADED.kind()),
    (MAIN_HOME_LOADED.name(), MAIN_HOME_LOADED.kind()),
];

/// Looks up the kind of a well-known channel.
pub fn channel_kind(name: &str) -> Option<ChannelKind> {
    WELL_KNOWN
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, kind)| *kind)
}
