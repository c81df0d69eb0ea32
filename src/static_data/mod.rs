//! Static game-data ingestion: raw tabular dumps in, indexed [`Catalog`] out.
//!
//! The pipeline is raw CSV tables ([`table`]) -> per-category record builders
//! ([`loader`]) -> read-only indexed [`Holder`]s collected on a [`Catalog`].
//! Everything downstream (entities, army links, account assembly) resolves
//! records through the Holders and never touches raw table data again.

pub mod catalog;
pub mod holder;
pub mod level;
pub mod loader;
pub mod stat_table;
pub mod table;

pub use catalog::{Catalog, Fingerprint};
pub use holder::Holder;
pub use level::{LevelRecord, LevelTable};
pub use stat_table::UnitStat;
pub use table::{DirSource, RawTable, SourceWithCallback, TableSource};

use crate::game_types::{EntityId, EntityKind, Village};

/// Identity shared by every static record: who it is and where it lives.
///
/// Holders index on `id` and on `(name, village)`; both must therefore be
/// stable for the lifetime of the [`Catalog`] that owns the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub village: Village,
}

/// Implemented by every per-category static record so [`Holder`] and the
/// lookup layer can index them uniformly.
pub trait CatalogEntry {
    fn meta(&self) -> &EntityMeta;

    fn id(&self) -> EntityId {
        self.meta().id
    }

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn kind(&self) -> EntityKind {
        self.meta().kind
    }

    fn village(&self) -> Village {
        self.meta().village
    }
}
