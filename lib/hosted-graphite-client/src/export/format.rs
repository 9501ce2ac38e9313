/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::encode::ScalarRecord;
use crate::types::MetricId;

/// Append one plaintext line, `<path> <value> <epoch-seconds>\n`.
///
/// The dotted path is `<instance>.<domain>.<type>.[<scope>.]<name>[.<suffix>]`
/// with every space replaced by `-`. The value and timestamp fields are never
/// rewritten.
pub(super) fn serialize_record(
    instance: &str,
    time: &DateTime<Utc>,
    record: &ScalarRecord<'_>,
    buf: &mut Vec<u8>,
) {
    push_sanitized(buf, instance);
    buf.push(b'.');
    push_metric_path(buf, record.id);
    if !record.suffix.is_empty() {
        buf.push(b'.');
        push_sanitized(buf, record.suffix);
    }
    buf.push(b' ');
    let _ = write!(buf, "{}", record.value);
    buf.push(b' ');
    let mut ts_buffer = itoa::Buffer::new();
    buf.extend_from_slice(ts_buffer.format(time.timestamp()).as_bytes());
    buf.push(b'\n');
}

pub(super) fn serialize_payload(
    instance: &str,
    time: &DateTime<Utc>,
    records: &[ScalarRecord<'_>],
    buf: &mut Vec<u8>,
) {
    for record in records {
        serialize_record(instance, time, record, buf);
    }
}

fn push_metric_path(buf: &mut Vec<u8>, id: &MetricId) {
    push_sanitized(buf, id.domain());
    buf.push(b'.');
    push_sanitized(buf, id.r#type());
    buf.push(b'.');
    if let Some(scope) = id.scope()
        && !scope.is_empty()
    {
        push_sanitized(buf, scope);
        buf.push(b'.');
    }
    push_sanitized(buf, id.name());
}

fn push_sanitized(buf: &mut Vec<u8>, s: &str) {
    for c in s.bytes() {
        buf.push(if c == b' ' { b'-' } else { c });
    }
}
