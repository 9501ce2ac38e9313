/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod types;
pub use types::{
    CounterSnapshot, GaugeSnapshot, HistogramSnapshot, MeterSnapshot, MetricId, MetricSnapshot,
    MetricValue, SummarySnapshot, TimerSnapshot,
};

mod encode;
pub use encode::{ScalarRecord, expand_batch, expand_metric};

mod config;
pub use config::HostedGraphiteClientConfig;

mod export;
pub use export::{HostedGraphiteClient, ResponseLineError, TransportError};
