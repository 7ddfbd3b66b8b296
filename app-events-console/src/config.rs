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

use anyhow::{Context, Result};
use app_events::EventBusConfig;
use app_routes::{ModuleRoutes, RouteCondition, RouteDescriptor, RouteTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) bus: EventBusConfig,
    #[serde(default)]
    pub(crate) routes: RoutesConfig,
    #[serde(default)]
    pub(crate) script: Vec<Step>,
}

impl Config {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("unable to parse config file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        Ok(json5::from_str(contents)?)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    #[serde(default)]
    pub(crate) root: RouteDescriptor,
    #[serde(default)]
    pub(crate) modules: Vec<ModuleRoutes>,
    pub(crate) guard: Option<String>,
    pub(crate) condition_prefix: Option<String>,
    #[serde(default)]
    pub(crate) probe_urls: Vec<String>,
}

impl RoutesConfig {
    pub(crate) fn compose(&self) -> RouteTable {
        let condition = self
            .condition_prefix
            .as_deref()
            .map(RouteCondition::url_starts_with);
        RouteTable::from_modules(
            self.root.clone(),
            &self.modules,
            self.guard.as_deref(),
            condition.as_ref(),
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    Subscribe {
        label: String,
        channels: Vec<String>,
        site_id: Option<String>,
    },
    Publish {
        channel: String,
        payload: Option<Value>,
        site_id: Option<String>,
    },
    PublishOnce {
        channel: String,
        payload: Option<Value>,
        site_id: Option<String>,
    },
    Off {
        label: String,
    },
}
