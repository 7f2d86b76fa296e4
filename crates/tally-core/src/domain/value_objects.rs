//! Domain value objects: Record, Lookup.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `Record` is the payload the snapshot store keeps under each key;
//! `Lookup` is the answer to "is this key there?", with absence as a
//! first-class variant instead of a zero-filled record.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Record ───────────────────────────────────────────────────────────────────

/// Two-field payload stored under a key.
///
/// `value` and `next` are opaque to the store. `next` is not a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub value: i64,
    pub next: i64,
}

impl Record {
    /// The zero record, `{0 0}`.
    pub const ZERO: Self = Self { value: 0, next: 0 };

    pub const fn new(value: i64, next: i64) -> Self {
        Self { value, next }
    }

    pub const fn is_zero(&self) -> bool {
        self.value == 0 && self.next == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.value, self.next)
    }
}

impl FromStr for Record {
    type Err = DomainError;

    /// Parses `VALUE,NEXT`, e.g. `5,8` or ` -1 , 2 `.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidRecord {
            input: s.to_owned(),
            reason: reason.to_owned(),
        };

        let (value, next) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected VALUE,NEXT"))?;

        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("value: {e}")))?;
        let next = next
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("next: {e}")))?;

        Ok(Self { value, next })
    }
}

impl From<(i64, i64)> for Record {
    fn from((value, next): (i64, i64)) -> Self {
        Self { value, next }
    }
}

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Outcome of reading a key from a snapshot store.
///
/// The variant is the authoritative presence signal. A stored zero record is
/// `Found(Record::ZERO)`, which is not the same as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Found(Record),
    NotFound,
}

impl Lookup {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub const fn record(&self) -> Option<&Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    pub const fn into_option(self) -> Option<Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// The stored record, or the zero record when absent.
    pub const fn unwrap_or_zero(self) -> Record {
        match self {
            Self::Found(record) => record,
            Self::NotFound => Record::ZERO,
        }
    }

    /// `(record, found)`: the zero record and `false` when absent.
    pub const fn into_pair(self) -> (Record, bool) {
        match self {
            Self::Found(record) => (record, true),
            Self::NotFound => (Record::ZERO, false),
        }
    }
}

impl From<Option<Record>> for Lookup {
    fn from(value: Option<Record>) -> Self {
        match value {
            Some(record) => Self::Found(record),
            None => Self::NotFound,
        }
    }
}

impl From<Lookup> for Option<Record> {
    fn from(value: Lookup) -> Self {
        value.into_option()
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (record, found) = self.into_pair();
        write!(f, "{record} {found}")
    }
}
