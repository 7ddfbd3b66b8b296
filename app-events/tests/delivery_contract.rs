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

mod support;

use app_events::{Payload, Subscription};
use integration_test_utils::{DeliveryRecorder, OrderRecorder};
use serde_json::json;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use support::make_bus;

#[test]
fn fresh_channel_delivers_exactly_once_without_site() {
    let bus = make_bus();
    let recorder = DeliveryRecorder::new();
    let _subscription = bus
        .subscribe("session_expired", recorder.callback(), None)
        .unwrap();

    bus.publish("session_expired", json!({ "pageName": "courses" }), None)
        .unwrap();

    assert_eq!(recorder.values(), vec![json!({ "pageName": "courses" })]);
    assert_eq!(recorder.payloads()[0].site_id(), None);
}

#[test]
fn publish_without_subscribers_is_dropped() {
    let bus = make_bus();

    bus.publish("language_changed", json!({ "language": "es" }), None)
        .unwrap();

    let recorder = DeliveryRecorder::new();
    let _subscription = bus
        .subscribe("language_changed", recorder.callback(), None)
        .unwrap();
    assert_eq!(recorder.count(), 0);
    assert!(bus.unique_record("language_changed").is_none());
}

#[test]
fn delivery_follows_registration_order() {
    let bus = make_bus();
    let order = OrderRecorder::new();
    let _first = bus.subscribe("login", order.callback("first"), None).unwrap();
    let _second = bus.subscribe("login", order.callback("second"), None).unwrap();
    let _third = bus.subscribe("login", order.callback("third"), None).unwrap();

    bus.publish("login", Payload::empty(), None).unwrap();

    assert_eq!(order.calls(), vec!["first", "second", "third"]);
}

#[test]
fn subscribe_multiple_delivers_per_channel_and_off_releases_all() {
    let bus = make_bus();
    let recorder = DeliveryRecorder::new();
    let subscription = bus
        .subscribe_multiple(&["site_added", "site_deleted"], recorder.callback(), None)
        .unwrap();

    assert_eq!(
        subscription.channels().collect::<Vec<_>>(),
        vec!["site_added", "site_deleted"]
    );

    bus.publish("site_added", json!({ "x": 1 }), None).unwrap();
    bus.publish("site_deleted", json!({ "y": 2 }), None).unwrap();
    assert_eq!(
        recorder.values(),
        vec![json!({ "x": 1 }), json!({ "y": 2 })]
    );

    subscription.off();
    assert!(!subscription.is_active());

    bus.publish("site_added", json!({ "x": 3 }), None).unwrap();
    bus.publish("site_deleted", json!({ "y": 4 }), None).unwrap();
    assert_eq!(recorder.count(), 2);
}

#[test]
fn subscribe_multiple_replays_finalized_channels_and_registers_the_rest() {
    let bus = make_bus();
    bus.publish_once("main_home_loaded", json!({ "tab": 1 }), None)
        .unwrap();

    let recorder = DeliveryRecorder::new();
    let subscription = bus
        .subscribe_multiple(&["main_home_loaded", "logout"], recorder.callback(), None)
        .unwrap();

    assert_eq!(recorder.values(), vec![json!({ "tab": 1 })]);
    assert_eq!(subscription.channels().collect::<Vec<_>>(), vec!["logout"]);

    bus.publish("logout", json!({}), None).unwrap();
    assert_eq!(recorder.count(), 2);
}

#[test]
fn off_before_trigger_prevents_delivery() {
    let bus = make_bus();
    let recorder = DeliveryRecorder::new();
    let subscription = bus.subscribe("logout", recorder.callback(), None).unwrap();
    assert!(subscription.is_active());

    subscription.off();
    bus.publish("logout", Payload::empty(), None).unwrap();

    assert_eq!(recorder.count(), 0);
    assert_eq!(bus.subscriber_count("logout"), 0);
    assert_eq!(bus.channel_names(), vec!["logout".to_string()]);
}

#[test]
fn release_during_delivery_does_not_affect_current_trigger() {
    let bus = make_bus();
    let order = OrderRecorder::new();
    let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let slot = victim.clone();
    let first = order.callback("first");
    let _releaser = bus
        .subscribe(
            "ws_cache_invalidated",
            move |payload| {
                first(payload);
                if let Some(subscription) = slot.lock().unwrap().as_ref() {
                    subscription.off();
                }
            },
            None,
        )
        .unwrap();
    let second = bus
        .subscribe("ws_cache_invalidated", order.callback("second"), None)
        .unwrap();
    *victim.lock().unwrap() = Some(second);

    bus.publish("ws_cache_invalidated", Payload::empty(), None)
        .unwrap();
    assert_eq!(order.calls(), vec!["first", "second"]);

    bus.publish("ws_cache_invalidated", Payload::empty(), None)
        .unwrap();
    assert_eq!(order.calls(), vec!["first", "second", "first"]);
}

#[test]
fn callbacks_may_publish_re_entrantly() {
    let bus = make_bus();
    let recorder = DeliveryRecorder::new();
    let _sink = bus.subscribe("logout", recorder.callback(), None).unwrap();

    let relay_bus = bus.clone();
    let _relay = bus
        .subscribe(
            "session_expired",
            move |payload| {
                relay_bus
                    .publish("logout", payload.clone(), None)
                    .expect("re-entrant publish succeeds");
            },
            None,
        )
        .unwrap();

    bus.publish("session_expired", json!({ "pageName": "home" }), Some("site-1"))
        .unwrap();

    assert_eq!(
        recorder.values(),
        vec![json!({ "pageName": "home", "siteId": "site-1" })]
    );
}

#[test]
fn callbacks_may_subscribe_re_entrantly() {
    let bus = make_bus();
    let recorder = DeliveryRecorder::new();
    let late: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

    let inner_bus = bus.clone();
    let inner_recorder = recorder.clone();
    let keep = late.clone();
    let _outer = bus
        .subscribe(
            "login",
            move |_| {
                let subscription = inner_bus
                    .subscribe("login", inner_recorder.callback(), None)
                    .expect("re-entrant subscribe succeeds");
                keep.lock().unwrap().push(subscription);
            },
            None,
        )
        .unwrap();

    // The subscriber added mid-delivery only sees the next trigger.
    bus.publish("login", Payload::empty(), None).unwrap();
    assert_eq!(recorder.count(), 0);

    bus.publish("login", Payload::empty(), None).unwrap();
    assert_eq!(recorder.count(), 1);
}

#[test]
fn panicking_callback_interrupts_remaining_deliveries() {
    let bus = make_bus();
    let order = OrderRecorder::new();
    let _first = bus.subscribe("logout", order.callback("first"), None).unwrap();
    let _panicking = bus
        .subscribe("logout", |_| panic!("subscriber failure"), None)
        .unwrap();
    let _third = bus.subscribe("logout", order.callback("third"), None).unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        bus.publish("logout", Payload::empty(), None)
    }));

    assert!(outcome.is_err());
    assert_eq!(order.calls(), vec!["first"]);
    assert_eq!(bus.subscriber_count("logout"), 3);
}
