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
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Predicate over the full URL deciding whether a route may take part in matching.
///
/// The host router still decides whether the route's own path matches; a condition only
/// switches the route on or off.
#[derive(Clone)]
pub struct RouteCondition(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl RouteCondition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    pub fn url_starts_with(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        Self::new(move |url| url.starts_with(&prefix))
    }

    pub fn accepts(&self, url: &str) -> bool {
        (self.0)(url)
    }

    /// Condition accepting only what both `self` and `other` accept.
    pub fn and(&self, other: &RouteCondition) -> Self {
        let (first, second) = (self.clone(), other.clone());
        Self::new(move |url| first.accepts(url) && second.accepts(url))
    }
}

impl Debug for RouteCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RouteCondition(..)")
    }
}

/// One route as contributed by a feature module.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDescriptor {
    pub path: String,
    /// Page or lazily loaded module the host router renders for this route.
    pub target: String,
    /// Access-control guard ids, evaluated by the host in order.
    #[serde(default)]
    pub guards: Vec<String>,
    #[serde(skip)]
    pub condition: Option<RouteCondition>,
    #[serde(default)]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: &str, target: &str) -> Self {
        Self {
            path: path.to_string(),
            target: target.to_string(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Routes without a condition are always active.
    pub fn is_active_for(&self, url: &str) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.accepts(url))
    }
}
