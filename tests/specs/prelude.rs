// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness: a small in-memory server speaking the `FT.*` dialect.
//!
//! It keeps just enough state (indexes, documents, dictionaries, aliases,
//! cursors) for the client to be exercised end to end over TCP.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use parking_lot::Mutex;
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};
use tokio::net::{TcpListener, TcpStream};

pub use fts_adapters::TcpPool;
pub use fts_client::{Client, CursorSession, Error};
pub use fts_core::{
    AggregateQuery, CursorOptions, Document, Field, FieldValue, GroupBy, IndexingOptions, Query,
    QueryFlags, Reducer, Schema, Slot, TextFieldOptions,
};
pub use fts_wire::Reply;
pub use similar_asserts::assert_eq;

use fts_wire::{encode_reply, read_reply, ProtocolError};

const DEFAULT_CURSOR_COUNT: usize = 1000;

#[derive(Default)]
struct StoredDoc {
    score: String,
    payload: Option<Vec<u8>>,
    fields: IndexMap<String, String>,
}

#[derive(Default)]
struct Index {
    /// Field descriptions as `FT.INFO` reports them
    fields: Vec<Vec<String>>,
    docs: IndexMap<String, StoredDoc>,
}

struct Cursor {
    index: String,
    rows: VecDeque<Reply>,
    total: usize,
    count: usize,
}

#[derive(Default)]
struct ServerState {
    indexes: HashMap<String, Index>,
    aliases: HashMap<String, String>,
    dicts: HashMap<String, BTreeSet<String>>,
    cursors: HashMap<u64, Cursor>,
    next_cursor: u64,
    commands: Vec<Vec<String>>,
    connections: usize,
}

/// In-process server bound to an ephemeral localhost port
pub struct MockServer {
    address: String,
    state: Arc<Mutex<ServerState>>,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        let state = Arc::new(Mutex::new(ServerState { next_cursor: 100, ..Default::default() }));

        let accept_state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                accept_state.lock().connections += 1;
                tokio::spawn(serve(stream, Arc::clone(&accept_state)));
            }
        });
        Self { address, state }
    }

    pub fn client(&self, index: &str) -> Client<TcpPool> {
        Client::new(index, TcpPool::new(&self.address, Duration::from_secs(5)))
    }

    /// Every command received so far, verb first
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.state.lock().commands.clone()
    }

    pub fn connections(&self) -> usize {
        self.state.lock().connections
    }

    pub fn open_cursors(&self) -> usize {
        self.state.lock().cursors.len()
    }
}

async fn serve(stream: TcpStream, state: Arc<Mutex<ServerState>>) {
    let (read, write) = stream.into_split();
    let mut reader = BufReader::new(read);
    let mut writer = BufWriter::new(write);
    loop {
        let frame = match read_reply(&mut reader).await {
            Ok(frame) => frame,
            Err(ProtocolError::ConnectionClosed) => return,
            Err(e) => {
                eprintln!("mock server read failed: {e}");
                return;
            }
        };
        let reply = state.lock().handle(frame);
        if writer.write_all(&encode_reply(&reply)).await.is_err() || writer.flush().await.is_err() {
            return;
        }
    }
}

fn err(msg: &str) -> Reply {
    Reply::Error(msg.to_string())
}

fn bulk(s: &str) -> Reply {
    Reply::bulk(s)
}

fn pairs<'a>(fields: impl IntoIterator<Item = (&'a String, &'a String)>) -> Reply {
    Reply::array(fields.into_iter().flat_map(|(k, v)| [bulk(k), bulk(v)]))
}

/// Position of the first keyword from `start` on, case-insensitive
fn find(args: &[String], start: usize, keyword: &str) -> Option<usize> {
    (start..args.len()).find(|&i| args[i].eq_ignore_ascii_case(keyword))
}

fn number_after(args: &[String], start: usize, keyword: &str) -> Option<usize> {
    find(args, start, keyword).and_then(|i| args.get(i + 1)).and_then(|s| s.parse().ok())
}

impl ServerState {
    fn handle(&mut self, frame: Reply) -> Reply {
        let Reply::Array(items) = frame else {
            return err("ERR expected command array");
        };
        let args: Vec<String> = items.iter().map(|r| r.to_text_lossy().into_owned()).collect();
        self.commands.push(args.clone());

        let (verb, rest) = match args.split_first() {
            Some((verb, rest)) if !rest.is_empty() => (verb.to_ascii_uppercase(), rest),
            _ => return err("ERR wrong number of arguments"),
        };
        match verb.as_str() {
            "FT.CREATE" => self.create(rest),
            "FT.DROP" => {
                let name = self.resolve(&rest[0]);
                match self.indexes.remove(&name) {
                    Some(_) => Reply::ok(),
                    None => err("Unknown Index name"),
                }
            }
            "FT.INFO" => self.with_index(rest, |name, idx| info(name, idx)),
            "FT.ADD" => self.with_index(rest, |_, idx| add(idx, rest, &items[1..])),
            "FT.GET" if rest.len() == 2 => self.with_index(rest, |_, idx| get(idx, &rest[1])),
            "FT.MGET" => self.with_index(rest, |_, idx| Reply::array(rest[1..].iter().map(|id| get(idx, id)))),
            "FT.DEL" if rest.len() >= 2 => self.with_index(rest, |_, idx| {
                Reply::Integer(i64::from(idx.docs.shift_remove(&rest[1]).is_some()))
            }),
            "FT.SEARCH" | "FT.EXPLAIN" if rest.len() < 2 => err("ERR wrong number of arguments"),
            "FT.SEARCH" => self.with_index(rest, |_, idx| search(idx, rest)),
            "FT.EXPLAIN" => Reply::bulk(format!("UNION {{\n  {}\n}}\n", rest[1])),
            "FT.AGGREGATE" => self.aggregate(rest),
            "FT.CURSOR" => self.cursor(rest),
            "FT.DICTADD" | "FT.DICTDEL" if rest.len() < 2 => err("ERR wrong number of arguments"),
            "FT.DICTADD" => {
                let dict = self.dicts.entry(rest[0].clone()).or_default();
                Reply::Integer(rest[1..].iter().filter(|t| dict.insert((*t).clone())).count() as i64)
            }
            "FT.DICTDEL" => {
                let dict = self.dicts.entry(rest[0].clone()).or_default();
                Reply::Integer(rest[1..].iter().filter(|t| dict.remove(*t)).count() as i64)
            }
            "FT.DICTDUMP" => Reply::array(self.dicts.get(&rest[0]).into_iter().flatten().map(|t| bulk(t))),
            "FT.ALIASADD" | "FT.ALIASUPDATE" if rest.len() != 2 => err("ERR wrong number of arguments"),
            "FT.ALIASADD" if self.aliases.contains_key(&rest[0]) => err("Alias already exists"),
            "FT.ALIASADD" | "FT.ALIASUPDATE" if !self.indexes.contains_key(&rest[1]) => err("Unknown index name"),
            "FT.ALIASADD" | "FT.ALIASUPDATE" => {
                self.aliases.insert(rest[0].clone(), rest[1].clone());
                Reply::ok()
            }
            "FT.ALIASDEL" => match self.aliases.remove(&rest[0]) {
                Some(_) => Reply::ok(),
                None => err("Alias does not exist"),
            },
            _ => err("ERR unknown command"),
        }
    }

    fn resolve(&self, name: &str) -> String {
        self.aliases.get(name).cloned().unwrap_or_else(|| name.to_string())
    }

    fn with_index(&mut self, rest: &[String], f: impl FnOnce(&str, &mut Index) -> Reply) -> Reply {
        let name = self.resolve(&rest[0]);
        match self.indexes.get_mut(&name) {
            Some(index) => f(&name, index),
            None => err("Unknown Index name"),
        }
    }

    fn create(&mut self, rest: &[String]) -> Reply {
        if self.indexes.contains_key(&rest[0]) {
            return err("Index already exists");
        }
        let Some(schema) = find(rest, 1, "SCHEMA") else {
            return err("No schema found");
        };
        let mut index = Index::default();
        let mut i = schema + 1;
        while i + 1 < rest.len() {
            let mut field = vec![rest[i].clone(), "type".to_string(), rest[i + 1].clone()];
            i += 2;
            while let Some(token) = rest.get(i) {
                match token.to_ascii_uppercase().as_str() {
                    "WEIGHT" | "SEPARATOR" => {
                        field.extend(rest[i..(i + 2).min(rest.len())].iter().cloned());
                        i += 2;
                    }
                    "SORTABLE" | "NOSTEM" | "NOINDEX" => {
                        field.push(token.clone());
                        i += 1;
                    }
                    _ => break,
                }
            }
            index.fields.push(field);
        }
        self.indexes.insert(rest[0].clone(), index);
        Reply::ok()
    }

    fn aggregate(&mut self, rest: &[String]) -> Reply {
        let name = self.resolve(&rest[0]);
        let Some(index) = self.indexes.get(&name) else {
            return err("Unknown Index name");
        };
        let rows: VecDeque<Reply> = index
            .docs
            .values()
            .filter(|doc| matches(doc, rest.get(1).map_or("*", String::as_str)))
            .map(|doc| pairs(&doc.fields))
            .collect();
        let total = rows.len();

        let Some(at) = find(rest, 2, "WITHCURSOR") else {
            return page(total, rows);
        };
        let count = number_after(rest, at, "COUNT").unwrap_or(DEFAULT_CURSOR_COUNT);
        let id = self.next_cursor;
        self.next_cursor += 1;
        self.cursors.insert(id, Cursor { index: name, rows, total, count });
        self.read_cursor(id, count)
    }

    fn cursor(&mut self, rest: &[String]) -> Reply {
        let (Some(sub), Some(id)) = (rest.first(), rest.get(2).and_then(|s| s.parse::<u64>().ok())) else {
            return err("ERR wrong number of arguments");
        };
        let known = self.cursors.get(&id).is_some_and(|c| c.index == self.resolve(&rest[1]));
        if !known {
            return err("Cursor not found");
        }
        match sub.to_ascii_uppercase().as_str() {
            "READ" => {
                let count = match number_after(rest, 3, "COUNT") {
                    Some(n) => n,
                    None => self.cursors.get(&id).map_or(DEFAULT_CURSOR_COUNT, |c| c.count),
                };
                self.read_cursor(id, count)
            }
            "DEL" => {
                self.cursors.remove(&id);
                Reply::ok()
            }
            _ => err("ERR unknown cursor subcommand"),
        }
    }

    fn read_cursor(&mut self, id: u64, count: usize) -> Reply {
        let Some(cursor) = self.cursors.get_mut(&id) else {
            return err("Cursor not found");
        };
        let batch: VecDeque<Reply> = cursor.rows.drain(..count.min(cursor.rows.len())).collect();
        let total = cursor.total;
        let next = if cursor.rows.is_empty() {
            self.cursors.remove(&id);
            0
        } else {
            id
        };
        Reply::array([page(total, batch), Reply::Integer(next as i64)])
    }
}

fn page(total: usize, rows: VecDeque<Reply>) -> Reply {
    Reply::array(std::iter::once(Reply::Integer(total as i64)).chain(rows))
}

fn matches(doc: &StoredDoc, query: &str) -> bool {
    query == "*" || doc.fields.values().any(|v| v.to_lowercase().contains(&query.to_lowercase()))
}

fn get(index: &Index, id: &str) -> Reply {
    index.docs.get(id).map_or(Reply::Nil, |doc| pairs(&doc.fields))
}

/// `FT.ADD idx id score [NOSAVE] [LANGUAGE l] [REPLACE [PARTIAL] [IF c]] [PAYLOAD p] FIELDS k v..`
fn add(index: &mut Index, rest: &[String], raw: &[Reply]) -> Reply {
    let (Some(id), Some(score)) = (rest.get(1), rest.get(2)) else {
        return err("ERR wrong number of arguments");
    };
    let Some(fields_at) = find(rest, 3, "FIELDS") else {
        return err("ERR no FIELDS");
    };
    let options = &rest[3..fields_at];
    let has = |k: &str| options.iter().any(|o| o.eq_ignore_ascii_case(k));
    if index.docs.contains_key(id) && !has("REPLACE") {
        return err("Document already exists");
    }
    if (rest.len() - fields_at - 1) % 2 != 0 {
        return err("ERR odd field list");
    }

    let payload = find(rest, 3, "PAYLOAD").filter(|&i| i < fields_at).and_then(|i| match &raw[i + 1] {
        Reply::Bulk(bytes) => Some(bytes.clone()),
        _ => None,
    });
    let doc = index.docs.entry(id.clone()).or_default();
    if !has("PARTIAL") {
        doc.fields.clear();
    }
    doc.score = score.clone();
    if payload.is_some() {
        doc.payload = payload;
    }
    for kv in rest[fields_at + 1..].chunks(2) {
        doc.fields.insert(kv[0].clone(), kv[1].clone());
    }
    Reply::ok()
}

/// `FT.SEARCH idx query [LIMIT o n] [flags..]`; other clauses are ignored
fn search(index: &Index, rest: &[String]) -> Reply {
    let flag = |k: &str| rest[2..].iter().any(|a| a.eq_ignore_ascii_case(k));
    let (offset, num) = match find(rest, 2, "LIMIT") {
        Some(i) => (
            rest.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(0),
            rest.get(i + 2).and_then(|s| s.parse().ok()).unwrap_or(10),
        ),
        None => (0usize, 10usize),
    };

    let hits: Vec<(&String, &StoredDoc)> = index.docs.iter().filter(|(_, doc)| matches(doc, &rest[1])).collect();
    let mut items = vec![Reply::Integer(hits.len() as i64)];
    for (id, doc) in hits.into_iter().skip(offset).take(num) {
        items.push(bulk(id));
        if flag("WITHSCORES") {
            items.push(bulk(&doc.score));
        }
        if flag("WITHPAYLOADS") {
            items.push(doc.payload.clone().map_or(Reply::Nil, Reply::Bulk));
        }
        if !flag("NOCONTENT") {
            items.push(pairs(&doc.fields));
        }
    }
    Reply::Array(items)
}

fn info(name: &str, index: &Index) -> Reply {
    Reply::array([
        bulk("index_name"),
        bulk(name),
        bulk("index_options"),
        Reply::Array(vec![]),
        bulk("fields"),
        Reply::array(index.fields.iter().map(|f| Reply::bulk_array(f.iter().map(String::as_str)))),
        bulk("num_docs"),
        bulk(&index.docs.len().to_string()),
        bulk("max_doc_id"),
        bulk(&index.docs.len().to_string()),
        bulk("num_terms"),
        Reply::Integer(0),
        bulk("inverted_sz_mb"),
        bulk("0.000123"),
        bulk("gc_stats"),
        Reply::array([bulk("bytes_collected"), Reply::Integer(0)]),
    ])
}
