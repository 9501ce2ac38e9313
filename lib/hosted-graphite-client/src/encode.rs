/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use ahash::AHashMap;

use crate::types::{MetricId, MetricSnapshot, MetricValue};

/// One Graphite data point before namespacing: the owning metric identity,
/// the fixed name suffix for this statistic, and the value. Records borrow
/// from the reported batch and only live for the duration of one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarRecord<'a> {
    pub id: &'a MetricId,
    pub suffix: &'static str,
    pub value: MetricValue,
}

/// Append the fixed ordered expansion of one metric to `records`.
pub fn expand_metric<'a>(
    id: &'a MetricId,
    snapshot: &MetricSnapshot,
    records: &mut Vec<ScalarRecord<'a>>,
) {
    match snapshot {
        MetricSnapshot::Counter(c) => push_all(records, id, &c.scalar_values()),
        MetricSnapshot::Meter(m) => push_all(records, id, &m.scalar_values()),
        MetricSnapshot::Histogram(h) => push_all(records, id, &h.scalar_values()),
        MetricSnapshot::Timer(t) => push_all(records, id, &t.scalar_values()),
        MetricSnapshot::Gauge(g) => push_all(records, id, &g.scalar_values()),
        // snapshot kinds without an expansion table produce no records
        #[allow(unreachable_patterns)]
        _ => {}
    }
}

/// Expand a whole batch, one metric after another in the map's iteration
/// order. The order of records within one metric is fixed, the order across
/// metrics is not.
pub fn expand_batch<'a>(
    metrics: &'a AHashMap<MetricId, MetricSnapshot>,
) -> Vec<ScalarRecord<'a>> {
    let mut records = Vec::with_capacity(metrics.len() * 4);
    for (id, snapshot) in metrics {
        expand_metric(id, snapshot, &mut records);
    }
    records
}

fn push_all<'a, const N: usize>(
    records: &mut Vec<ScalarRecord<'a>>,
    id: &'a MetricId,
    values: &[(&'static str, MetricValue); N],
) {
    for (suffix, value) in *values {
        records.push(ScalarRecord { id, suffix, value });
    }
}
