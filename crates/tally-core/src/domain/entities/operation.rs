//! Store operations and their outcomes.
//!
//! A [`StoreOp`] is one step of a store script. The textual form is what the
//! CLI accepts on its command line:
//!
//! ```text
//! put:KEY=VALUE,NEXT
//! get:KEY
//! delete:KEY        (or del:KEY)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::value_objects::{Lookup, Record};

/// A single operation against a snapshot store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Put { key: String, record: Record },
    Get { key: String },
    Delete { key: String },
}

impl StoreOp {
    pub fn put(key: impl Into<String>, record: Record) -> Self {
        Self::Put {
            key: key.into(),
            record,
        }
    }

    pub fn get(key: impl Into<String>) -> Self {
        Self::Get { key: key.into() }
    }

    pub fn delete(key: impl Into<String>) -> Self {
        Self::Delete { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Put { key, .. } | Self::Get { key } | Self::Delete { key } => key,
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Put { key, record } => write!(f, "put:{key}={},{}", record.value, record.next),
            Self::Get { key } => write!(f, "get:{key}"),
            Self::Delete { key } => write!(f, "delete:{key}"),
        }
    }
}

impl FromStr for StoreOp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DomainError::InvalidOp {
            input: s.to_owned(),
            reason,
        };

        let (verb, rest) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected VERB:ARGS".into()))?;

        let op = match verb.to_ascii_lowercase().as_str() {
            "put" => {
                // Keys may contain '='; records never do.
                let (key, record) = rest
                    .rsplit_once('=')
                    .ok_or_else(|| invalid("put needs KEY=VALUE,NEXT".into()))?;
                let record = record
                    .parse::<Record>()
                    .map_err(|e| invalid(e.to_string()))?;
                Self::put(key, record)
            }
            "get" => Self::get(rest),
            "delete" | "del" => Self::delete(rest),
            other => return Err(invalid(format!("unknown verb '{other}'"))),
        };

        if op.key().is_empty() {
            return Err(invalid("key must not be empty".into()));
        }

        Ok(op)
    }
}

/// What happened when a [`StoreOp`] ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpOutcome {
    /// `put` inserted or overwrote `key`.
    Stored {
        key: String,
        record: Record,
        replaced: bool,
    },
    /// `get` read `key`. `record` is the zero record when `found` is false.
    Looked {
        key: String,
        record: Record,
        found: bool,
    },
    /// `delete` ran; `existed` tells whether anything was removed.
    Deleted { key: String, existed: bool },
}

impl OpOutcome {
    pub fn looked(key: impl Into<String>, lookup: Lookup) -> Self {
        let (record, found) = lookup.into_pair();
        Self::Looked {
            key: key.into(),
            record,
            found,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Stored { key, .. } | Self::Looked { key, .. } | Self::Deleted { key, .. } => key,
        }
    }
}

impl fmt::Display for OpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored {
                key,
                record,
                replaced,
            } => {
                let verb = if *replaced { "replaced" } else { "stored" };
                write!(f, "{key}: {verb} {record}")
            }
            Self::Looked { key, record, found } => write!(f, "{key}: {record} {found}"),
            Self::Deleted { key, existed } => {
                let verb = if *existed { "deleted" } else { "absent" };
                write!(f, "{key}: {verb}")
            }
        }
    }
}
