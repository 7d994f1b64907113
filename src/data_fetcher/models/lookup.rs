//! Shared envelope of the mlb.com JSON lookup services.

use serde::{Deserialize, Serialize};

/// The lookup services return a bare object instead of a one-element array
/// when a query matches a single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(rows) => rows,
            OneOrMany::One(row) => vec![row],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResults<T> {
    /// Generation timestamp, `YYYY-MM-DDTHH:MM:SS`
    pub created: String,
    #[serde(rename = "totalSize", default)]
    pub total_size: Option<String>,
    /// Absent when the query matched nothing
    #[serde(default = "OneOrMany::default")]
    pub row: OneOrMany<T>,
}

impl<T> QueryResults<T> {
    pub fn into_rows(self) -> Vec<T> {
        self.row.into()
    }
}
