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

mod integration_test_recorders;
pub use integration_test_recorders::{DeliveryRecorder, OrderRecorder};
mod integration_test_sites;
pub use integration_test_sites::{local_site, remote_site_a, remote_site_b};
mod integration_test_utils;
pub use integration_test_utils::init_logging;
