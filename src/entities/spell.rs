//! Spells.

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_unlock_gated, impl_upgradeable,
};
use crate::game_types::{EntityId, EntityKind, Village};
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

/// A spell at a specific level.
pub type Spell = LeveledUnit<SpellRecord>;

#[derive(Debug, Clone, Builder)]
pub struct SpellRecord {
    meta: EntityMeta,
    levels: LevelTable,
    #[builder(default)]
    housing_space: u32,
}

impl SpellRecord {
    pub fn housing_space(&self) -> u32 {
        self.housing_space
    }

    /// Stand-in record for army-link indices the catalog does not know.
    pub fn placeholder(id: EntityId) -> Self {
        SpellRecord::builder()
            .meta(EntityMeta {
                id,
                kind: EntityKind::Spell,
                name: "Unknown".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::single_free_tier())
            .build()
    }
}

impl CatalogEntry for SpellRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for SpellRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_upgradeable!(SpellRecord);
impl_unlock_gated!(SpellRecord);
