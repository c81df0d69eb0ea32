use thiserror::Error;

use crate::game_types::EntityKind;

#[derive(Error, Debug)]
pub enum Error {
    /// A non-deprecated static record is missing a field the loader needs.
    /// Fatal for the table being loaded: no partially-populated holder is
    /// ever handed to callers.
    #[error("malformed static data in {table}: {entity}: {detail}")]
    MalformedStaticData {
        table: String,
        entity: String,
        detail: String,
    },
    #[error("level {level} out of range for {name} (valid tiers are 1..={max})")]
    LevelOutOfRange { name: String, level: i64, max: u32 },
    #[error("stat tier {level} out of range (table holds {len} tiers)")]
    StatOutOfRange { level: usize, len: usize },
    #[error("{hero} has no free equipment slot (limit {limit})")]
    EquipmentSlotsFull { hero: String, limit: u32 },
    #[error("static table {0} could not be read")]
    TableUnavailable(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand used all over the static-data loader.
    pub(crate) fn malformed(
        table: &str,
        entity: &str,
        detail: impl Into<String>,
    ) -> Self {
        Error::MalformedStaticData {
            table: table.to_string(),
            entity: entity.to_string(),
            detail: detail.into(),
        }
    }

    /// True when the error came out of the fatal load-time path rather than
    /// a per-lookup range check.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedStaticData { .. }
                | Error::TableUnavailable(_)
                | Error::Csv(_)
                | Error::Json(_)
                | Error::Io(_)
        )
    }
}

/// Non-fatal issue reported while resolving ids against the catalog.
///
/// These are never raised as [`Error`]s: assembly and link parsing always
/// skip the offending item and keep going. They are logged through
/// `tracing` and, where a diagnostics callback is installed, handed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReference {
    /// An id had no record in the holder for its category.
    UnknownId { kind: EntityKind, id: u32 },
    /// A name had no record in the holder for its category.
    UnknownName { kind: EntityKind, name: String },
}

impl std::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnresolvedReference::UnknownId { kind, id } => {
                write!(f, "no {kind} record with id {id}")
            }
            UnresolvedReference::UnknownName { kind, name } => {
                write!(f, "no {kind} record named {name:?}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
