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

mod config;
mod script;

use crate::config::{Config, RoutesConfig};
use crate::script::ScriptRunner;
use anyhow::Result;
use app_events::EventBus;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command()]
struct ConsoleArgs {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    info!("Started app-events-console");

    let args = ConsoleArgs::parse();
    let config = Config::load(&args.config)?;

    log_route_table(&config.routes);

    let bus = EventBus::with_config(config.bus.clone());
    let mut runner = ScriptRunner::new(bus.clone());
    runner.run(&config.script)?;

    info!(
        steps = config.script.len(),
        deliveries = runner.deliveries().len(),
        channels = ?bus.channel_names(),
        "script finished"
    );
    Ok(())
}

fn log_route_table(routes: &RoutesConfig) {
    let table = routes.compose();
    for route in table.routes() {
        info!(
            path = %route.path,
            target = %route.target,
            guards = ?route.guards,
            children = route.children.len(),
            "route"
        );
    }
    for path in table.duplicates() {
        info!(path = %path, "duplicate route dropped");
    }
    for url in &routes.probe_urls {
        let active: Vec<&str> = table
            .active_routes(url)
            .iter()
            .map(|route| route.path.as_str())
            .collect();
        info!(url = %url, active = ?active, "active routes");
    }
}
