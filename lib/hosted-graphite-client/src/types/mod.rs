/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod value;
pub use value::MetricValue;

mod snapshot;
pub use snapshot::{
    CounterSnapshot, GaugeSnapshot, HistogramSnapshot, MeterSnapshot, MetricSnapshot,
    SummarySnapshot, TimerSnapshot,
};

/// Identity of one reported metric.
///
/// The four parts are joined into the dotted Graphite namespace as
/// `<domain>.<type>.[<scope>.]<name>`, after the per-client instance prefix.
/// The scope segment is emitted only when set and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetricId {
    domain: String,
    r#type: String,
    scope: Option<String>,
    name: String,
}

impl MetricId {
    pub fn new<D, T, N>(domain: D, r#type: T, name: N) -> Self
    where
        D: Into<String>,
        T: Into<String>,
        N: Into<String>,
    {
        MetricId {
            domain: domain.into(),
            r#type: r#type.into(),
            scope: None,
            name: name.into(),
        }
    }

    pub fn with_scope<S: Into<String>>(mut self, scope: S) -> Self {
        self.scope = Some(scope.into());
        self
    }

    #[inline]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    #[inline]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}
