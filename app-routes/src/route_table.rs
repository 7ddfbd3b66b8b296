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

//! Composed route table with path identity and per-URL activation.

use crate::composition::{conditional_routes, inject_guard, resolve_module_routes, ModuleRoutes};
use crate::observability::{events, COMPONENT};
use crate::route::{RouteCondition, RouteDescriptor};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Top-level routes after guard injection, conditional wrapping and path dedupe.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    duplicates: Vec<String>,
}

impl RouteTable {
    /// Composes `routes` in order. The first route registered for a path wins; later routes
    /// for the same path are dropped and reported through [`RouteTable::duplicates`].
    pub fn compose(
        routes: Vec<RouteDescriptor>,
        guard: Option<&str>,
        condition: Option<&RouteCondition>,
    ) -> Self {
        let routes = match guard {
            Some(guard) => inject_guard(routes, guard),
            None => routes,
        };
        let routes = match condition {
            Some(condition) => conditional_routes(routes, condition),
            None => routes,
        };

        let mut seen_paths = HashSet::new();
        let mut table = Self::default();
        for route in routes {
            if seen_paths.insert(route.path.clone()) {
                table.routes.push(route);
                continue;
            }

            warn!(
                event = events::ROUTE_DUPLICATE_SKIPPED,
                component = COMPONENT,
                path = %route.path,
                target = %route.target,
                "route path already registered; keeping the first contribution"
            );
            table.duplicates.push(route.path);
        }

        debug!(
            event = events::ROUTE_TABLE_COMPOSED,
            component = COMPONENT,
            routes = table.routes.len(),
            duplicates = table.duplicates.len(),
            guarded = guard.is_some(),
            conditional = condition.is_some(),
            "route table composed"
        );
        table
    }

    /// Nests the modules' children under `root`, places their siblings after it and composes
    /// the result.
    pub fn from_modules(
        mut root: RouteDescriptor,
        contributions: &[ModuleRoutes],
        guard: Option<&str>,
        condition: Option<&RouteCondition>,
    ) -> Self {
        let resolved = resolve_module_routes(contributions);
        root.children.extend(resolved.children);

        let mut routes = Vec::with_capacity(resolved.siblings.len() + 1);
        routes.push(root);
        routes.extend(resolved.siblings);
        Self::compose(routes, guard, condition)
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Paths of routes dropped because an earlier contribution used the same path.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Routes whose condition accepts `url`. Path matching stays with the host router.
    pub fn active_routes(&self, url: &str) -> Vec<&RouteDescriptor> {
        self.routes
            .iter()
            .filter(|route| route.is_active_for(url))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RouteTable;
    use crate::composition::ModuleRoutes;
    use crate::route::{RouteCondition, RouteDescriptor};

    fn paths(routes: &[&RouteDescriptor]) -> Vec<String> {
        routes.iter().map(|route| route.path.clone()).collect()
    }

    #[test]
    fn compose_keeps_first_route_per_path() {
        let table = RouteTable::compose(
            vec![
                RouteDescriptor::new("courses", "CoursesPage"),
                RouteDescriptor::new("settings", "SettingsPage"),
                RouteDescriptor::new("courses", "OtherCoursesPage"),
            ],
            None,
            None,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.routes()[0].target, "CoursesPage");
        assert_eq!(table.duplicates().to_vec(), vec!["courses".to_string()]);
    }

    #[test]
    fn compose_applies_guard_and_condition() {
        let table = RouteTable::compose(
            vec![
                RouteDescriptor::new("courses", "CoursesPage"),
                RouteDescriptor::new("settings", "SettingsPage"),
            ],
            Some("has-site"),
            Some(&RouteCondition::url_starts_with("/main")),
        );

        assert!(table
            .routes()
            .iter()
            .all(|route| route.guards == vec!["has-site".to_string()]));
        assert_eq!(
            paths(&table.active_routes("/main/courses")),
            vec!["courses", "settings"]
        );
        assert!(table.active_routes("/login").is_empty());
    }

    #[test]
    fn routes_without_condition_stay_active() {
        let mut conditional = RouteDescriptor::new("course/:id", "CoursePage");
        conditional.condition = Some(RouteCondition::url_starts_with("/course"));
        let table = RouteTable::compose(
            vec![conditional, RouteDescriptor::new("home", "HomePage")],
            None,
            None,
        );

        assert_eq!(paths(&table.active_routes("/home")), vec!["home"]);
        assert_eq!(
            paths(&table.active_routes("/course/4")),
            vec!["course/:id", "home"]
        );
    }

    #[test]
    fn from_modules_nests_children_and_appends_siblings() {
        let contributions = vec![
            ModuleRoutes {
                module: "courses".to_string(),
                children: vec![RouteDescriptor::new("courses", "CoursesPage")],
                siblings: vec![RouteDescriptor::new("course/:id", "CoursePage")],
            },
            ModuleRoutes {
                module: "login".to_string(),
                children: Vec::new(),
                siblings: vec![
                    RouteDescriptor::new("login", "LoginPage"),
                    RouteDescriptor::new("course/:id", "LegacyCoursePage"),
                ],
            },
        ];

        let table = RouteTable::from_modules(
            RouteDescriptor::new("", "MainMenuPage"),
            &contributions,
            Some("auth"),
            None,
        );

        let top: Vec<&str> = table.routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(top, vec!["", "course/:id", "login"]);
        assert_eq!(table.routes()[0].children[0].target, "CoursesPage");
        assert!(table.routes()[0].children[0].guards.is_empty());
        assert_eq!(table.routes()[0].guards, vec!["auth".to_string()]);
        assert_eq!(table.duplicates().to_vec(), vec!["course/:id".to_string()]);
    }
}
