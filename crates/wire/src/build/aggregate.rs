// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{AggregateQuery, GroupBy, Stage};

use crate::Args;

/// Arguments of `FT.AGGREGATE`: index, query, stages in append order, then
/// the cursor clause when one was requested
pub fn aggregate_args(index: &str, q: &AggregateQuery) -> Args {
    let mut args = Args::new();
    args.push(index).push(&q.query.raw);
    if q.query.flags.verbatim {
        args.push("VERBATIM");
    }

    for stage in &q.stages {
        push_stage(&mut args, stage);
    }

    if let Some(cursor) = &q.cursor {
        args.push("WITHCURSOR");
        if let Some(count) = cursor.count {
            args.push("COUNT").push(count);
        }
        if let Some(idle) = cursor.max_idle {
            // Saturate instead of wrapping
            args.push("MAXIDLE").push(u64::try_from(idle.as_millis()).unwrap_or(u64::MAX));
        }
    }
    args
}

fn push_stage(args: &mut Args, stage: &Stage) {
    match stage {
        Stage::Load(fields) => {
            args.push_counted("LOAD", fields);
        }
        Stage::GroupBy(group) => push_group_by(args, group),
        Stage::SortBy { keys, max } => {
            args.push("SORTBY").push(keys.len() * 2);
            for key in keys {
                args.push(&key.field).push(key.order);
            }
            if let Some(max) = max {
                args.push("MAX").push(*max);
            }
        }
        Stage::Apply { expression, alias } => {
            args.push("APPLY").push(expression).push("AS").push(alias);
        }
        Stage::Filter(expression) => {
            args.push("FILTER").push(expression);
        }
        // Explicit stages always carry their window, even the default one
        Stage::Limit(paging) => {
            args.push("LIMIT").push(paging.offset).push(paging.num);
        }
    }
}

fn push_group_by(args: &mut Args, group: &GroupBy) {
    args.push_counted("GROUPBY", &group.fields);
    for reducer in &group.reducers {
        args.push("REDUCE").push(reducer.function).push(reducer.args.len()).extend(&reducer.args);
        if let Some(alias) = &reducer.alias {
            args.push("AS").push(alias);
        }
    }
}

/// Arguments of `FT.CURSOR READ`. The pipeline is not resent.
pub fn cursor_read_args(index: &str, cursor_id: u64, count: Option<u64>) -> Args {
    let mut args = Args::new();
    args.push("READ").push(index).push(cursor_id);
    if let Some(count) = count {
        args.push("COUNT").push(count);
    }
    args
}

/// Arguments of `FT.CURSOR DEL`
pub fn cursor_del_args(index: &str, cursor_id: u64) -> Args {
    let mut args = Args::new();
    args.push("DEL").push(index).push(cursor_id);
    args
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
