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

//! Pure helpers that merge feature-module route contributions.

use crate::route::{RouteCondition, RouteDescriptor};
use serde::{Deserialize, Serialize};

/// Routes contributed by one feature module.
///
/// `children` are nested under the host's root route; `siblings` sit next to it.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleRoutes {
    pub module: String,
    #[serde(default)]
    pub children: Vec<RouteDescriptor>,
    #[serde(default)]
    pub siblings: Vec<RouteDescriptor>,
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedRoutes {
    pub children: Vec<RouteDescriptor>,
    pub siblings: Vec<RouteDescriptor>,
}

/// Flattens module contributions, keeping contribution order within each list.
pub fn resolve_module_routes(contributions: &[ModuleRoutes]) -> ResolvedRoutes {
    contributions
        .iter()
        .fold(ResolvedRoutes::default(), |mut resolved, contribution| {
            resolved
                .children
                .extend(contribution.children.iter().cloned());
            resolved
                .siblings
                .extend(contribution.siblings.iter().cloned());
            resolved
        })
}

/// Appends `guard` to every top-level route that does not already carry it.
pub fn inject_guard(routes: Vec<RouteDescriptor>, guard: &str) -> Vec<RouteDescriptor> {
    routes
        .into_iter()
        .map(|mut route| {
            if !route.guards.iter().any(|existing| existing == guard) {
                route.guards.push(guard.to_string());
            }
            route
        })
        .collect()
}

/// Attaches `condition` to every top-level route, AND-combined with any condition already set.
pub fn conditional_routes(
    routes: Vec<RouteDescriptor>,
    condition: &RouteCondition,
) -> Vec<RouteDescriptor> {
    routes
        .into_iter()
        .map(|mut route| {
            route.condition = Some(match route.condition.take() {
                Some(existing) => existing.and(condition),
                None => condition.clone(),
            });
            route
        })
        .collect()
}
