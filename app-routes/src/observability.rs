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

pub(crate) const COMPONENT: &str = "route_table";

pub(crate) mod events {
    pub const ROUTE_DUPLICATE_SKIPPED: &str = "route_duplicate_skipped";
    pub const ROUTE_TABLE_COMPOSED: &str = "route_table_composed";
}
