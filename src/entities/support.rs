//! Companion categories: pets, guardians, and helpers.

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_combat_stats, impl_unlock_gated, impl_upgradeable,
};
use crate::game_types::{EntityId, EntityKind, Village};
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

/// A hero pet at a specific level.
pub type Pet = LeveledUnit<PetRecord>;

#[derive(Debug, Clone, Builder)]
pub struct PetRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

impl PetRecord {
    /// Stand-in record for army-link indices the catalog does not know.
    pub fn placeholder(id: EntityId) -> Self {
        PetRecord::builder()
            .meta(EntityMeta {
                id,
                kind: EntityKind::Pet,
                name: "Unknown".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::single_free_tier())
            .build()
    }
}

impl CatalogEntry for PetRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for PetRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(PetRecord);
impl_upgradeable!(PetRecord);
impl_unlock_gated!(PetRecord);

/// A base guardian at a specific level.
pub type Guardian = LeveledUnit<GuardianRecord>;

#[derive(Debug, Clone, Builder)]
pub struct GuardianRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

impl CatalogEntry for GuardianRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for GuardianRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(GuardianRecord);
impl_upgradeable!(GuardianRecord);
impl_unlock_gated!(GuardianRecord);

/// A builder-assist helper at a specific level.
pub type Helper = LeveledUnit<HelperRecord>;

#[derive(Debug, Clone, Builder)]
pub struct HelperRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

impl CatalogEntry for HelperRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for HelperRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_upgradeable!(HelperRecord);
impl_unlock_gated!(HelperRecord);
