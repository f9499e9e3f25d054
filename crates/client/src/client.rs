// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_adapters::{Connection, ConnectionPool, TcpPool};
use fts_core::{AggregateQuery, Document, IndexInfo, Query, Schema, SearchResult};
use fts_wire::{build, command, decode, Args, Reply};

use crate::config::ClientConfig;
use crate::cursor::{Aggregation, CursorSession};
use crate::error::{server_reply, Error};

/// Client bound to one index
#[derive(Debug, Clone)]
pub struct Client<P> {
    pub(crate) index: String,
    pub(crate) pool: P,
}

impl Client<TcpPool> {
    /// Client for the configured address and index, over plain TCP
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.index, TcpPool::new(&config.address, config.read_timeout()))
    }
}

impl<P: ConnectionPool> Client<P> {
    pub fn new(index: impl Into<String>, pool: P) -> Self {
        Self { index: index.into(), pool }
    }

    pub fn index_name(&self) -> &str {
        &self.index
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Send one command on a fresh connection and return its reply.
    /// Explicit error replies become [`Error::Server`].
    pub(crate) async fn execute(&self, command: &'static str, args: Args) -> Result<Reply, Error> {
        let mut conn = self.pool.acquire().await?;
        let result = conn.call(command, &args).await;
        release(&mut conn).await;

        let reply = result?;
        tracing::debug!(
            index = %self.index,
            command,
            reply = %reply.to_text_lossy(),
            "command completed"
        );
        server_reply(reply)
    }

    /// Create the index with the given schema
    pub async fn create_index(&self, schema: &Schema) -> Result<(), Error> {
        let args = build::create_args(&self.index, schema)?;
        decode::ok(self.execute(command::CREATE, args).await?)?;
        tracing::info!(index = %self.index, fields = schema.fields.len(), "index created");
        Ok(())
    }

    /// Drop the index and its documents
    pub async fn drop_index(&self) -> Result<(), Error> {
        decode::ok(self.execute(command::DROP, build::index_args(&self.index)).await?)?;
        tracing::info!(index = %self.index, "index dropped");
        Ok(())
    }

    pub async fn search(&self, query: &Query) -> Result<SearchResult, Error> {
        let reply = self.execute(command::SEARCH, build::search_args(&self.index, query)).await?;
        Ok(decode::search(reply, &query.flags)?)
    }

    /// The server's execution plan for a query
    pub async fn explain(&self, query: &Query) -> Result<String, Error> {
        let reply = self.execute(command::EXPLAIN, build::explain_args(&self.index, query)).await?;
        Ok(decode::text(reply)?)
    }

    /// Run an aggregation. When the query asks for a cursor, the returned
    /// session reads the remaining rows; otherwise it is already exhausted.
    pub async fn aggregate(&self, query: &AggregateQuery) -> Result<Aggregation, Error> {
        let with_cursor = query.cursor.is_some();
        let reply = self.execute(command::AGGREGATE, build::aggregate_args(&self.index, query)).await?;
        let page = decode::aggregate(reply, with_cursor)?;
        let count = query.cursor.and_then(|c| c.count);
        Ok(Aggregation {
            total: page.total,
            rows: page.rows,
            cursor: CursorSession::new(&self.index, page.cursor_id, count),
        })
    }

    /// Fetch one document; `None` when it does not exist
    pub async fn get(&self, id: &str) -> Result<Option<Document>, Error> {
        let reply = self.execute(command::GET, build::get_args(&self.index, id)).await?;
        Ok(decode::document(id, reply)?)
    }

    /// Fetch several documents in one round trip.
    ///
    /// The result is aligned with `ids`, one entry per id: `Ok(None)` for a
    /// missing document, `Err` for a position the server failed or that did
    /// not decode. A failed position never hides its neighbours.
    pub async fn multi_get<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<Result<Option<Document>, Error>>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let reply = self.execute(command::MGET, build::mget_args(&self.index, ids)).await?;

        let docs = decode::documents(ids, reply)?;
        let failed = docs.iter().filter(|d| d.is_err()).count();
        if failed > 0 {
            tracing::debug!(index = %self.index, ids = ids.len(), failed, "multi-get partially failed");
        }
        Ok(docs.into_iter().map(|doc| doc.map_err(Error::from)).collect())
    }

    /// Delete a document from the index. With `delete_document` the stored
    /// document is removed as well. Returns whether anything was deleted.
    pub async fn delete_document(&self, id: &str, delete_document: bool) -> Result<bool, Error> {
        let args = build::del_args(&self.index, id, delete_document);
        let reply = self.execute(command::DEL, args).await?;
        Ok(decode::integer(reply)? > 0)
    }

    pub async fn info(&self) -> Result<IndexInfo, Error> {
        let reply = self.execute(command::INFO, build::index_args(&self.index)).await?;
        Ok(decode::index_info(reply)?)
    }

    /// Point `alias` at this index
    pub async fn alias_add(&self, alias: &str) -> Result<(), Error> {
        let args = build::alias_args(alias, Some(&self.index));
        let reply = self.execute(command::ALIAS_ADD, args).await?;
        Ok(decode::ok(reply)?)
    }

    /// Repoint an existing `alias` at this index
    pub async fn alias_update(&self, alias: &str) -> Result<(), Error> {
        let args = build::alias_args(alias, Some(&self.index));
        let reply = self.execute(command::ALIAS_UPDATE, args).await?;
        Ok(decode::ok(reply)?)
    }

    pub async fn alias_del(&self, alias: &str) -> Result<(), Error> {
        let reply = self.execute(command::ALIAS_DEL, build::alias_args(alias, None)).await?;
        Ok(decode::ok(reply)?)
    }

    /// Add terms to a dictionary; returns how many were new
    pub async fn dict_add<S: AsRef<str>>(&self, dict: &str, terms: &[S]) -> Result<i64, Error> {
        let args = build::dict_args(command::DICT_ADD, dict, terms)?;
        Ok(decode::integer(self.execute(command::DICT_ADD, args).await?)?)
    }

    /// Remove terms from a dictionary; returns how many were present
    pub async fn dict_del<S: AsRef<str>>(&self, dict: &str, terms: &[S]) -> Result<i64, Error> {
        let args = build::dict_args(command::DICT_DEL, dict, terms)?;
        Ok(decode::integer(self.execute(command::DICT_DEL, args).await?)?)
    }

    pub async fn dict_dump(&self, dict: &str) -> Result<Vec<String>, Error> {
        let reply = self.execute(command::DICT_DUMP, build::dict_dump_args(dict)).await?;
        Ok(decode::terms(reply)?)
    }
}

/// Close a connection at the end of a call. Failures are logged, not
/// returned: the call's own outcome is already decided.
pub(crate) async fn release<C: Connection>(conn: &mut C) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close connection");
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
