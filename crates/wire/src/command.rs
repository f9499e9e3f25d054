// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command verbs understood by the search server.

pub const ADD: &str = "FT.ADD";
pub const GET: &str = "FT.GET";
pub const MGET: &str = "FT.MGET";
pub const DEL: &str = "FT.DEL";
pub const SEARCH: &str = "FT.SEARCH";
pub const EXPLAIN: &str = "FT.EXPLAIN";
pub const AGGREGATE: &str = "FT.AGGREGATE";
pub const CURSOR: &str = "FT.CURSOR";
pub const CREATE: &str = "FT.CREATE";
pub const DROP: &str = "FT.DROP";
pub const INFO: &str = "FT.INFO";
pub const ALIAS_ADD: &str = "FT.ALIASADD";
pub const ALIAS_DEL: &str = "FT.ALIASDEL";
pub const ALIAS_UPDATE: &str = "FT.ALIASUPDATE";
pub const DICT_ADD: &str = "FT.DICTADD";
pub const DICT_DEL: &str = "FT.DICTDEL";
pub const DICT_DUMP: &str = "FT.DICTDUMP";
