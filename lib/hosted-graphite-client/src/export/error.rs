/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseLineError {
    #[error("line not long enough")]
    NotLongEnough,
    #[error("no delimiter '{0}' found")]
    NoDelimiterFound(char),
    #[error("invalid http version")]
    InvalidVersion,
    #[error("invalid status code")]
    InvalidStatusCode,
    #[error("invalid utf-8 encoding: {0}")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("invalid content-length value")]
    InvalidContentLength,
}

/// Failure of the HTTP exchange itself. A reporting call returns this only
/// when no usable response was obtained; a non-202 response is not an error.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to resolve peer address: {0:?}")]
    Resolve(io::Error),
    #[error("peer address resolved to nothing")]
    NoResolvedAddress,
    #[error("failed to connect to peer: {0:?}")]
    Connect(io::Error),
    #[error("failed to write request: {0:?}")]
    WriteFailed(io::Error),
    #[error("failed to read response: {0:?}")]
    ReadFailed(io::Error),
    #[error("connection closed by peer before a full response")]
    RemoteClosed,
    #[error("response header too large (max {0} bytes)")]
    TooLargeHeader(usize),
    #[error("invalid response line: {0}")]
    InvalidResponseLine(#[from] ResponseLineError),
    #[error("request timed out")]
    TimedOut,
}
