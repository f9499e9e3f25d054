// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain TCP transport.
//!
//! Every `acquire` opens a fresh connection; there is no reuse, health
//! checking or reconnect. Reads are bounded by the configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use fts_wire::{read_reply_timeout, write_command, Args, Reply};
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::transport::{Connection, ConnectionPool, TransportError};

/// Connects to one server address
#[derive(Debug, Clone)]
pub struct TcpPool {
    address: String,
    read_timeout: Duration,
}

impl TcpPool {
    pub fn new(address: impl Into<String>, read_timeout: Duration) -> Self {
        Self { address: address.into(), read_timeout }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl ConnectionPool for TcpPool {
    type Conn = TcpConnection;

    async fn acquire(&self) -> Result<TcpConnection, TransportError> {
        let stream = TcpStream::connect(&self.address).await.map_err(|source| {
            TransportError::Connect { address: self.address.clone(), source }
        })?;
        if let Err(e) = stream.set_nodelay(true) {
            tracing::debug!(address = %self.address, error = %e, "failed to set TCP_NODELAY");
        }
        tracing::debug!(address = %self.address, "connected");

        let (read, write) = stream.into_split();
        Ok(TcpConnection {
            reader: BufReader::new(read),
            writer: BufWriter::new(write),
            read_timeout: self.read_timeout,
            closed: false,
        })
    }
}

pub struct TcpConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    read_timeout: Duration,
    closed: bool,
}

impl TcpConnection {
    fn ensure_open(&self) -> Result<(), TransportError> {
        if self.closed {
            Err(TransportError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Connection for TcpConnection {
    async fn send(&mut self, command: &str, args: &Args) -> Result<(), TransportError> {
        self.ensure_open()?;
        write_command(&mut self.writer, command, args).await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), TransportError> {
        self.ensure_open()?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn receive(&mut self) -> Result<Reply, TransportError> {
        self.ensure_open()?;
        Ok(read_reply_timeout(&mut self.reader, self.read_timeout).await?)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // Unflushed commands are dropped with the buffer
        self.writer.get_mut().shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tcp_tests.rs"]
mod tests;
