//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract the UI state persists through.
//! - Keep SQL and JSON encoding details away from the services.
//!
//! # Invariants
//! - Stored layout values are JSON arrays of item snapshots.
//! - Layout loads trust persisted data for ordering only.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_repo;
pub mod layout_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for key-value persistence and the encodings stored in it.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A value could not be serialized for storage.
    Encode(serde_json::Error),
    /// A stored value has an unexpected shape.
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode value: {err}"),
            Self::Decode { key, source } => {
                write!(f, "malformed value stored under `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
