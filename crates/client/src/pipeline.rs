// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk indexing over one pipelined connection.
//!
//! All add commands are sent first, then flushed once, then exactly one
//! reply is read per sent command, in send order. Outcomes are collected
//! per document in a [`MultiError`] aligned with the input.

use fts_adapters::{Connection, ConnectionPool};
use fts_core::{Document, IndexingOptions, MultiError};
use fts_wire::{build, command, Reply};

use crate::client::{release, Client};
use crate::error::Error;

impl<P: ConnectionPool> Client<P> {
    /// Index documents with default options
    pub async fn index(&self, docs: &[Document]) -> Result<(), Error> {
        self.index_options(&IndexingOptions::default(), docs).await
    }

    /// Index documents with the given options.
    ///
    /// - A send failure at position i aborts the batch: slot i holds the
    ///   failure, later slots are skipped and the connection is closed
    ///   without reading the replies already queued.
    /// - A flush failure fails the whole batch with a single error.
    /// - A receive failure or error reply at position i is recorded in slot
    ///   i and the remaining replies are still read.
    pub async fn index_options(
        &self,
        opts: &IndexingOptions,
        docs: &[Document],
    ) -> Result<(), Error> {
        if docs.is_empty() {
            return Ok(());
        }

        let mut conn = self.pool.acquire().await?;
        let mut errors = MultiError::new(docs.len());

        for (i, doc) in docs.iter().enumerate() {
            let args = build::add_args(&self.index, doc, opts);
            if let Err(e) = conn.send(command::ADD, &args).await {
                tracing::warn!(
                    index = %self.index,
                    position = i,
                    id = %doc.id,
                    error = %e,
                    "send failed, aborting batch"
                );
                errors.set(i, e.into());
                errors.skip_from(i + 1);
                release(&mut conn).await;
                return Err(Error::Batch(errors));
            }
        }

        if let Err(e) = conn.flush().await {
            release(&mut conn).await;
            return Err(e.into());
        }

        for (i, doc) in docs.iter().enumerate() {
            match conn.receive().await {
                Ok(Reply::Error(msg)) => {
                    tracing::debug!(position = i, id = %doc.id, error = %msg, "document rejected");
                    errors.set(i, Error::Server(msg));
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(position = i, id = %doc.id, error = %e, "reply lost");
                    errors.set(i, e.into());
                }
            }
        }
        release(&mut conn).await;

        tracing::debug!(
            index = %self.index,
            docs = docs.len(),
            failed = errors.failure_count(),
            "bulk index finished"
        );
        errors.into_result().map_err(Error::Batch)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
