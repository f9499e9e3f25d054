// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation pipelines.
//!
//! The server applies stages in the order they were appended, so
//! `AggregateQuery` keeps them in a plain `Vec` and never reorders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::query::{Paging, Query, SortingKey};

/// Reducer functions available inside a group-by stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReducerFn {
    Count,
    CountDistinct,
    CountDistinctish,
    Sum,
    Min,
    Max,
    Avg,
    StdDev,
    Quantile,
    ToList,
    FirstValue,
    RandomSample,
}

crate::keywords! {
    ReducerFn {
        Count => "COUNT",
        CountDistinct => "COUNT_DISTINCT",
        CountDistinctish => "COUNT_DISTINCTISH",
        Sum => "SUM",
        Min => "MIN",
        Max => "MAX",
        Avg => "AVG",
        StdDev => "STDDEV",
        Quantile => "QUANTILE",
        ToList => "TOLIST",
        FirstValue => "FIRST_VALUE",
        RandomSample => "RANDOM_SAMPLE",
    }
}

/// One reducer application: function, its arguments and an optional output name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reducer {
    pub function: ReducerFn,
    pub args: Vec<String>,
    pub alias: Option<String>,
}

impl Reducer {
    pub fn new<I, S>(function: ReducerFn, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { function, args: args.into_iter().map(Into::into).collect(), alias: None }
    }

    pub fn count() -> Self {
        Self::new(ReducerFn::Count, Vec::<String>::new())
    }

    pub fn count_distinct(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::CountDistinct, [property.into()])
    }

    pub fn sum(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::Sum, [property.into()])
    }

    pub fn min(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::Min, [property.into()])
    }

    pub fn max(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::Max, [property.into()])
    }

    pub fn avg(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::Avg, [property.into()])
    }

    pub fn to_list(property: impl Into<String>) -> Self {
        Self::new(ReducerFn::ToList, [property.into()])
    }

    pub fn quantile(property: impl Into<String>, quantile: f64) -> Self {
        Self::new(ReducerFn::Quantile, [property.into(), quantile.to_string()])
    }

    /// Name the reducer output (`AS alias`)
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Group rows by a set of properties and reduce each group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub fields: Vec<String>,
    pub reducers: Vec<Reducer>,
}

impl GroupBy {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { fields: fields.into_iter().map(Into::into).collect(), reducers: Vec::new() }
    }

    pub fn reduce(mut self, reducer: Reducer) -> Self {
        self.reducers.push(reducer);
        self
    }
}

/// A single pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Load(Vec<String>),
    GroupBy(GroupBy),
    SortBy { keys: Vec<SortingKey>, max: Option<u64> },
    Apply { expression: String, alias: String },
    Filter(String),
    Limit(Paging),
}

/// Server-side cursor settings for an aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorOptions {
    /// Rows per read
    pub count: Option<u64>,
    /// How long the server keeps an idle cursor alive
    pub max_idle: Option<Duration>,
}

impl CursorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn max_idle(mut self, max_idle: Duration) -> Self {
        self.max_idle = Some(max_idle);
        self
    }
}

/// An aggregation: a base query plus an ordered pipeline of stages
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateQuery {
    pub query: Query,
    pub stages: Vec<Stage>,
    pub cursor: Option<CursorOptions>,
}

impl AggregateQuery {
    pub fn new(query: Query) -> Self {
        Self { query, stages: Vec::new(), cursor: None }
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn load<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stage(Stage::Load(fields.into_iter().map(Into::into).collect()))
    }

    pub fn group_by(self, group: GroupBy) -> Self {
        self.stage(Stage::GroupBy(group))
    }

    pub fn sort_by(self, keys: Vec<SortingKey>, max: Option<u64>) -> Self {
        self.stage(Stage::SortBy { keys, max })
    }

    pub fn apply(self, expression: impl Into<String>, alias: impl Into<String>) -> Self {
        self.stage(Stage::Apply { expression: expression.into(), alias: alias.into() })
    }

    pub fn filter(self, expression: impl Into<String>) -> Self {
        self.stage(Stage::Filter(expression.into()))
    }

    pub fn limit(self, offset: u64, num: u64) -> Self {
        self.stage(Stage::Limit(Paging::new(offset, num)))
    }

    pub fn with_cursor(mut self, cursor: CursorOptions) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
