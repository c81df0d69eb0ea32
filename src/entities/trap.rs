//! Traps.

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_combat_stats, impl_unlock_gated, impl_upgradeable,
};
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

/// A trap at a specific level.
pub type Trap = LeveledUnit<TrapRecord>;

#[derive(Debug, Clone, Builder)]
pub struct TrapRecord {
    meta: EntityMeta,
    levels: LevelTable,
    #[builder(default)]
    triggers_on_air: bool,
    #[builder(default)]
    triggers_on_ground: bool,
}

impl TrapRecord {
    pub fn triggers_on_air(&self) -> bool {
        self.triggers_on_air
    }

    pub fn triggers_on_ground(&self) -> bool {
        self.triggers_on_ground
    }
}

impl CatalogEntry for TrapRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for TrapRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(TrapRecord);
impl_upgradeable!(TrapRecord);
impl_unlock_gated!(TrapRecord);
