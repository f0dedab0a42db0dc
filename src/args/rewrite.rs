//! Task alias rewriting
//!
//! Replaces short task names with the build tool's actual tokens, e.g.
//! `compile` → `classes` for gradle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::flags::takes_value;

/// Replacement for one alias
///
/// A string is split on whitespace, a list is used as is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TaskAlias {
    Single(String),
    Multiple(Vec<String>),
}

impl TaskAlias {
    pub fn tokens(&self) -> Vec<String> {
        match self {
            TaskAlias::Single(value) => value.split_whitespace().map(str::to_string).collect(),
            TaskAlias::Multiple(values) => values.clone(),
        }
    }
}

impl From<&str> for TaskAlias {
    fn from(value: &str) -> Self {
        TaskAlias::Single(value.to_string())
    }
}

/// Alias token → replacement
pub type AliasTable = HashMap<String, TaskAlias>;

/// Rewrite task arguments through `table`
///
/// Identity when `enabled` is false. Flags and the values of
/// tool-selection flags pass through untouched. Tokens starting with `-`
/// are never looked up, so alias keys such as `-fast` have no effect.
pub fn rewrite(args: &[String], table: &AliasTable, enabled: bool) -> Vec<String> {
    if !enabled || table.is_empty() {
        return args.to_vec();
    }

    let mut out = Vec::with_capacity(args.len());
    let mut value_follows = false;

    for arg in args {
        if value_follows {
            value_follows = false;
            out.push(arg.clone());
            continue;
        }
        if arg.starts_with('-') {
            value_follows = takes_value(arg);
            out.push(arg.clone());
            continue;
        }
        match table.get(arg) {
            Some(alias) => out.extend(alias.tokens()),
            None => out.push(arg.clone()),
        }
    }

    out
}
