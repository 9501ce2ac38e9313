/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::MetricValue;

/// Point-in-time statistics of one metric, as computed by the caller's
/// metrics registry. This crate only reads the values, it never updates or
/// aggregates them.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MetricSnapshot {
    Counter(CounterSnapshot),
    Meter(MeterSnapshot),
    Histogram(HistogramSnapshot),
    Timer(TimerSnapshot),
    Gauge(GaugeSnapshot),
}

// The scalar_values() methods are the per-kind expansion tables. They are
// fixed-size arrays so the suffix set and its emission order are locked at
// compile time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: u64,
}

impl CounterSnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 1] {
        [("count", MetricValue::Unsigned(self.count))]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterSnapshot {
    pub count: u64,
    pub mean_rate: f64,
    pub one_minute_rate: f64,
    pub five_minute_rate: f64,
    pub fifteen_minute_rate: f64,
}

impl MeterSnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 5] {
        [
            ("count", MetricValue::Unsigned(self.count)),
            ("meanRate", MetricValue::Double(self.mean_rate)),
            ("oneMinuteRate", MetricValue::Double(self.one_minute_rate)),
            ("fiveMinuteRate", MetricValue::Double(self.five_minute_rate)),
            (
                "fifteenMinuteRate",
                MetricValue::Double(self.fifteen_minute_rate),
            ),
        ]
    }
}

/// Distribution statistics shared by histograms and timers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummarySnapshot {
    pub mean: f64,
    pub median: f64,
    pub pct_95: f64,
    pub pct_98: f64,
    pub pct_99: f64,
}

impl SummarySnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 5] {
        [
            ("mean", MetricValue::Double(self.mean)),
            ("median", MetricValue::Double(self.median)),
            ("95percentile", MetricValue::Double(self.pct_95)),
            ("98percentile", MetricValue::Double(self.pct_98)),
            ("99percentile", MetricValue::Double(self.pct_99)),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramSnapshot {
    pub count: u64,
    pub summary: SummarySnapshot,
}

impl HistogramSnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 6] {
        let [mean, median, pct_95, pct_98, pct_99] = self.summary.scalar_values();
        [
            ("count", MetricValue::Unsigned(self.count)),
            mean,
            median,
            pct_95,
            pct_98,
            pct_99,
        ]
    }
}

/// A timer is a meter over its event rate plus a distribution over the
/// observed durations. Duration values are forwarded in whatever unit the
/// registry recorded them in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerSnapshot {
    pub rate: MeterSnapshot,
    pub duration: SummarySnapshot,
}

impl TimerSnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 10] {
        let [count, mean_rate, one_minute, five_minute, fifteen_minute] =
            self.rate.scalar_values();
        let [mean, median, pct_95, pct_98, pct_99] = self.duration.scalar_values();
        [
            count,
            mean_rate,
            one_minute,
            five_minute,
            fifteen_minute,
            mean,
            median,
            pct_95,
            pct_98,
            pct_99,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeSnapshot {
    pub value: MetricValue,
}

impl GaugeSnapshot {
    pub(crate) fn scalar_values(&self) -> [(&'static str, MetricValue); 1] {
        [("value", self.value)]
    }
}
