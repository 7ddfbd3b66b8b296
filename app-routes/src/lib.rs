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

//! Route composition for feature modules.
//!
//! Feature modules contribute [`RouteDescriptor`]s as [`ModuleRoutes`]. This crate merges
//! them in contribution order, injects a shared guard, attaches URL conditions and dedupes
//! by path. Matching a path against a URL and evaluating guards stay with the host router.
//!
//! ```
//! use app_routes::{ModuleRoutes, RouteCondition, RouteDescriptor, RouteTable};
//!
//! let courses = ModuleRoutes {
//!     module: "courses".to_string(),
//!     children: vec![RouteDescriptor::new("courses", "CoursesPage")],
//!     siblings: vec![RouteDescriptor::new("course/:id", "CoursePage")],
//! };
//!
//! let table = RouteTable::from_modules(
//!     RouteDescriptor::new("main", "MainMenuPage"),
//!     &[courses],
//!     Some("has-site"),
//!     Some(&RouteCondition::url_starts_with("/main")),
//! );
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.active_routes("/main/courses").len(), 2);
//! assert!(table.active_routes("/login").is_empty());
//! ```

mod composition;
mod observability;
mod route;
mod route_table;

pub use composition::{
    conditional_routes, inject_guard, resolve_module_routes, ModuleRoutes, ResolvedRoutes,
};
pub use route::{RouteCondition, RouteDescriptor};
pub use route_table::RouteTable;
