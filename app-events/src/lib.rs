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

//! # app-events
//!
//! `app-events` is the application-wide publish/subscribe bus used for cross-component
//! notifications: session expiry, login and logout, site changes, content sync status and
//! so on.
//!
//! Channels come in two kinds:
//!
//! - **repeatable** channels behave like ordinary pub/sub: [`EventBus::publish`] reaches
//!   whoever is subscribed right now and is otherwise dropped;
//! - **unique** channels fire at most once through [`EventBus::publish_once`]; the payload
//!   is kept and handed to every later subscriber the moment it subscribes.
//!
//! ## Unique events
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use app_events::EventBus;
//! use serde_json::json;
//!
//! let bus = EventBus::new();
//! bus.publish_once("main_home_loaded", json!({ "tab": "dashboard" }), None).unwrap();
//! bus.publish_once("main_home_loaded", json!({ "tab": "ignored" }), None).unwrap();
//!
//! let seen = Arc::new(Mutex::new(None));
//! let sink = seen.clone();
//! let subscription = bus
//!     .subscribe("main_home_loaded", move |payload| {
//!         *sink.lock().unwrap() = Some(payload.value().clone());
//!     }, None)
//!     .unwrap();
//!
//! // Replayed synchronously during `subscribe`; nothing is left to release.
//! assert_eq!(*seen.lock().unwrap(), Some(json!({ "tab": "dashboard" })));
//! assert!(!subscription.is_active());
//! ```
//!
//! ## Typed catalog channels
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use app_events::catalog::{CourseStatusChangedData, COURSE_STATUS_CHANGED};
//! use app_events::EventBus;
//!
//! let bus = EventBus::new();
//! let statuses = Arc::new(Mutex::new(Vec::new()));
//! let sink = statuses.clone();
//! let subscription = bus
//!     .subscribe_event(&COURSE_STATUS_CHANGED, move |data: CourseStatusChangedData| {
//!         sink.lock().unwrap().push((data.course_id, data.site_id));
//!     }, Some("site-1"))
//!     .unwrap();
//!
//! let record = CourseStatusChangedData {
//!     course_id: 7,
//!     status: "downloaded".to_string(),
//!     site_id: None,
//! };
//! bus.publish_event(&COURSE_STATUS_CHANGED, &record, Some("site-1")).unwrap();
//! subscription.off();
//!
//! assert_eq!(*statuses.lock().unwrap(), vec![(7, Some("site-1".to_string()))]);
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: [`EventBus`], [`Subscription`], [`Payload`]
//! - Registry: copy-on-write channel table (subscriber lists, unique records, kinds)
//! - Catalog: well-known channel names and their payload records
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events and never initializes a global subscriber.
//! Binaries and tests are responsible for one-time `tracing_subscriber` initialization.

pub mod catalog;
pub use catalog::{Channel, ChannelKind};

mod config;
pub use config::EventBusConfig;

mod error;
pub use error::EventBusError;

mod event_bus;
pub use event_bus::EventBus;

#[doc(hidden)]
pub mod observability;

mod payload;
pub use payload::{Payload, SITE_ID_FIELD};

mod registry;

mod subscriber;

mod subscription;
pub use subscription::Subscription;
