// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate cursors.
//!
//! The first batch comes back from [`Client::aggregate`]; the returned
//! [`CursorSession`] then reads the rest with `FT.CURSOR READ` until the
//! server reports cursor id zero.

use fts_adapters::ConnectionPool;
use fts_core::AggregateRow;
use fts_wire::{build, command, decode};

use crate::client::Client;
use crate::error::Error;

/// Result of [`Client::aggregate`]: the first batch plus the session that
/// reads the remaining batches
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub total: u64,
    pub rows: Vec<AggregateRow>,
    pub cursor: CursorSession,
}

/// Server-side cursor handle. Reads advance it in place; id zero means
/// there is nothing left to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSession {
    index: String,
    cursor_id: u64,
    count: Option<u64>,
}

impl CursorSession {
    pub fn new(index: impl Into<String>, cursor_id: u64, count: Option<u64>) -> Self {
        Self { index: index.into(), cursor_id, count }
    }

    pub fn cursor_id(&self) -> u64 {
        self.cursor_id
    }

    pub fn has_more(&self) -> bool {
        self.cursor_id != 0
    }

    /// Read the next batch. An exhausted session returns no rows without
    /// contacting the server; any failure exhausts the session.
    pub async fn read<P: ConnectionPool>(
        &mut self,
        client: &Client<P>,
    ) -> Result<Vec<AggregateRow>, Error> {
        if !self.has_more() {
            return Ok(Vec::new());
        }

        let args = build::cursor_read_args(&self.index, self.cursor_id, self.count);
        let page = match client.execute(command::CURSOR, args).await {
            Ok(reply) => decode::aggregate(reply, true).map_err(Error::from),
            Err(e) => Err(e),
        };

        match page {
            Ok(page) => {
                tracing::debug!(
                    index = %self.index,
                    cursor = self.cursor_id,
                    next = page.cursor_id,
                    rows = page.rows.len(),
                    "cursor read"
                );
                self.cursor_id = page.cursor_id;
                Ok(page.rows)
            }
            Err(e) => {
                tracing::warn!(
                    index = %self.index,
                    cursor = self.cursor_id,
                    error = %e,
                    "cursor read failed"
                );
                self.cursor_id = 0;
                Err(e)
            }
        }
    }

    /// Release the server-side cursor early. The session is exhausted
    /// afterwards whether or not the server accepted the request.
    pub async fn close<P: ConnectionPool>(&mut self, client: &Client<P>) -> Result<(), Error> {
        if !self.has_more() {
            return Ok(());
        }
        let args = build::cursor_del_args(&self.index, self.cursor_id);
        self.cursor_id = 0;
        decode::ok(client.execute(command::CURSOR, args).await?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
