/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use atoi::FromRadix10;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use super::{ResponseLineError, TransportError};

// responses are only read for the status code and error detail, a small cap
// on the buffered body is enough
const RSP_BODY_MAX_SIZE: usize = 4096;

pub(super) struct HttpStatusLine<'a> {
    pub(super) code: u16,
    pub(super) reason: &'a str,
}

impl<'a> HttpStatusLine<'a> {
    pub(super) fn parse(buf: &'a [u8]) -> Result<HttpStatusLine<'a>, ResponseLineError> {
        const MINIMAL_LENGTH: usize = 13; // HTTP/1.x XYZ\n

        if buf.len() < MINIMAL_LENGTH {
            return Err(ResponseLineError::NotLongEnough);
        }

        let Some(p) = memchr::memchr(b' ', buf) else {
            return Err(ResponseLineError::NoDelimiterFound(' '));
        };
        match &buf[0..p] {
            b"HTTP/1.0" | b"HTTP/1.1" => {}
            _ => return Err(ResponseLineError::InvalidVersion),
        }

        let left = &buf[p + 1..];
        let (code, len) = u16::from_radix_10(left);
        if len < 3 {
            return Err(ResponseLineError::InvalidStatusCode);
        }

        if left.len() < len + 1 {
            return Err(ResponseLineError::NotLongEnough);
        }
        let reason = std::str::from_utf8(&left[len + 1..])?.trim();

        Ok(HttpStatusLine { code, reason })
    }
}

pub(super) struct HttpHeaderLine<'a> {
    pub(super) name: &'a str,
    pub(super) value: &'a str,
}

impl<'a> HttpHeaderLine<'a> {
    pub(super) fn parse(buf: &'a [u8]) -> Result<HttpHeaderLine<'a>, ResponseLineError> {
        let line = std::str::from_utf8(buf)?;
        let Some(p) = memchr::memchr(b':', line.as_bytes()) else {
            return Err(ResponseLineError::NoDelimiterFound(':'));
        };

        let name = line[0..p].trim();
        let value = line[p + 1..].trim();

        Ok(HttpHeaderLine { name, value })
    }
}

pub(super) struct ResponseHead {
    pub(super) code: u16,
    pub(super) reason: String,
    pub(super) content_length: Option<u64>,
}

async fn read_head_line<R>(
    reader: &mut R,
    max_len: usize,
    buf: &mut Vec<u8>,
) -> Result<(), TransportError>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let nr = reader
        .take(max_len as u64)
        .read_until(b'\n', buf)
        .await
        .map_err(TransportError::ReadFailed)?;
    if nr == 0 {
        return Err(TransportError::RemoteClosed);
    }
    if buf.last() != Some(&b'\n') {
        return if nr < max_len {
            Err(TransportError::RemoteClosed)
        } else {
            Err(TransportError::TooLargeHeader(max_len))
        };
    }
    Ok(())
}

pub(super) async fn read_response_head<R>(
    reader: &mut R,
    max_head_size: usize,
) -> Result<ResponseHead, TransportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line_buf = Vec::<u8>::with_capacity(1024);
    let mut header_size: usize = 0;

    read_head_line(reader, max_head_size, &mut line_buf).await?;
    header_size += line_buf.len();

    let status = HttpStatusLine::parse(line_buf.as_slice())
        .map_err(TransportError::InvalidResponseLine)?;
    let mut head = ResponseHead {
        code: status.code,
        reason: status.reason.to_string(),
        content_length: None,
    };

    loop {
        if header_size >= max_head_size {
            return Err(TransportError::TooLargeHeader(max_head_size));
        }
        read_head_line(reader, max_head_size - header_size, &mut line_buf).await?;
        header_size += line_buf.len();

        if line_buf.as_slice() == b"\n" || line_buf.as_slice() == b"\r\n" {
            // header end line
            break;
        }

        let header =
            HttpHeaderLine::parse(line_buf.as_slice()).map_err(TransportError::InvalidResponseLine)?;
        if header.name.eq_ignore_ascii_case("content-length") {
            let len = u64::from_str(header.value)
                .map_err(|_| ResponseLineError::InvalidContentLength)?;
            head.content_length = Some(len);
        }
    }

    Ok(head)
}

pub(super) async fn read_response_body<R>(
    reader: &mut R,
    content_length: Option<u64>,
) -> std::io::Result<Vec<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let limit = match content_length {
        Some(len) => len.min(RSP_BODY_MAX_SIZE as u64),
        None => RSP_BODY_MAX_SIZE as u64,
    };
    let mut body = Vec::new();
    reader.take(limit).read_to_end(&mut body).await?;
    Ok(body)
}
