// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RESP framing: commands as arrays of bulk strings, replies as typed frames.

use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{Args, Reply};

/// Largest bulk string accepted from the server (512 MiB, the RESP limit)
pub const MAX_BULK_LEN: usize = 512 * 1024 * 1024;

/// Errors from reading or writing frames
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Timeout")]
    Timeout,

    #[error("Malformed reply: {0}")]
    Malformed(String),

    #[error("Bulk string too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}

/// Encode a command and its arguments as one RESP array
pub fn encode_command(command: &str, args: &Args) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + command.len() + args.iter().map(|a| a.len() + 16).sum::<usize>());
    buf.extend_from_slice(format!("*{}\r\n", args.len() + 1).as_bytes());
    push_bulk(&mut buf, command.as_bytes());
    for arg in args.iter() {
        push_bulk(&mut buf, arg);
    }
    buf
}

/// Encode a reply frame, as a server would send it
pub fn encode_reply(reply: &Reply) -> Vec<u8> {
    let mut buf = Vec::new();
    push_reply(&mut buf, reply);
    buf
}

fn push_reply(buf: &mut Vec<u8>, reply: &Reply) {
    match reply {
        Reply::Nil => buf.extend_from_slice(b"$-1\r\n"),
        Reply::Status(s) => buf.extend_from_slice(format!("+{s}\r\n").as_bytes()),
        Reply::Error(s) => buf.extend_from_slice(format!("-{s}\r\n").as_bytes()),
        Reply::Integer(n) => buf.extend_from_slice(format!(":{n}\r\n").as_bytes()),
        Reply::Bulk(data) => push_bulk(buf, data),
        Reply::Array(items) => {
            buf.extend_from_slice(format!("*{}\r\n", items.len()).as_bytes());
            for item in items {
                push_reply(buf, item);
            }
        }
    }
}

fn push_bulk(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(format!("${}\r\n", data.len()).as_bytes());
    buf.extend_from_slice(data);
    buf.extend_from_slice(b"\r\n");
}

/// Write one command. Buffered writers are not flushed; pipelined callers
/// queue several commands and flush once.
pub async fn write_command<W: AsyncWrite + Unpin>(
    writer: &mut W,
    command: &str,
    args: &Args,
) -> Result<(), ProtocolError> {
    writer.write_all(&encode_command(command, args)).await?;
    Ok(())
}

/// Read one reply with a timeout
pub async fn read_reply_timeout<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Reply, ProtocolError> {
    tokio::time::timeout(timeout, read_reply(reader)).await.map_err(|_| ProtocolError::Timeout)?
}

/// Read one complete reply frame, including nested arrays
pub async fn read_reply<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Reply, ProtocolError> {
    // Arrays still waiting for elements: (expected length, collected elements)
    let mut pending: Vec<(usize, Vec<Reply>)> = Vec::new();

    loop {
        let line = read_line(reader).await?;
        let (&prefix, rest) =
            line.split_first().ok_or_else(|| ProtocolError::Malformed("empty line".to_string()))?;

        let mut value = match prefix {
            b'+' => Reply::Status(text(rest)?),
            b'-' => Reply::Error(text(rest)?),
            b':' => Reply::Integer(parse_len(rest)?),
            b'$' => match parse_len(rest)? {
                n if n < 0 => Reply::Nil,
                n => Reply::Bulk(read_bulk(reader, n as usize).await?),
            },
            b'*' => match parse_len(rest)? {
                n if n < 0 => Reply::Nil,
                0 => Reply::Array(Vec::new()),
                n => {
                    pending.push((n as usize, Vec::with_capacity((n as usize).min(1024))));
                    continue;
                }
            },
            other => {
                return Err(ProtocolError::Malformed(format!(
                    "unexpected type byte {:?}",
                    other as char
                )))
            }
        };

        // Attach the finished value to its parent, closing every array it completes
        loop {
            let complete = match pending.last_mut() {
                None => return Ok(value),
                Some((expected, items)) => {
                    items.push(value);
                    items.len() == *expected
                }
            };
            if !complete {
                break;
            }
            match pending.pop() {
                Some((_, items)) => value = Reply::Array(items),
                None => return Err(ProtocolError::Malformed("unbalanced array".to_string())),
            }
        }
    }
}

/// Read a CRLF-terminated line, without the terminator
async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Vec<u8>, ProtocolError> {
    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line).await?;
    if n == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }
    if !line.ends_with(b"\r\n") {
        return Err(ProtocolError::Malformed("line not terminated by CRLF".to_string()));
    }
    line.truncate(line.len() - 2);
    Ok(line)
}

async fn read_bulk<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    len: usize,
) -> Result<Vec<u8>, ProtocolError> {
    if len > MAX_BULK_LEN {
        return Err(ProtocolError::TooLarge { size: len, max: MAX_BULK_LEN });
    }
    let mut buf = vec![0u8; len + 2];
    reader.read_exact(&mut buf).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => ProtocolError::ConnectionClosed,
        _ => ProtocolError::Io(e),
    })?;
    if !buf.ends_with(b"\r\n") {
        return Err(ProtocolError::Malformed("bulk string not terminated by CRLF".to_string()));
    }
    buf.truncate(len);
    Ok(buf)
}

fn text(bytes: &[u8]) -> Result<String, ProtocolError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

fn parse_len(bytes: &[u8]) -> Result<i64, ProtocolError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| ProtocolError::Malformed(format!("invalid integer {:?}", String::from_utf8_lossy(bytes))))
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
