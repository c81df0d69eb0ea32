//! Buildings, their gear-up and supercharge extras, and the seasonal
//! defenses (module stacks) some of them host.

use std::ops::Deref;

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_combat_stats, impl_unlock_gated, impl_upgradeable,
};
use crate::game_types::{Resource, TimeSpan};
use crate::recognized::Recognized;
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

/// One-shot gear-up conversion offered by a few home-village defenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearUpInfo {
    pub cost: u64,
    pub resource: Recognized<Resource>,
    pub time: TimeSpan,
    /// Building level required before the gear-up is offered.
    pub required_level: u32,
}

#[derive(Debug, Clone, Builder)]
pub struct BuildingRecord {
    meta: EntityMeta,
    levels: LevelTable,
    gear_up: Option<GearUpInfo>,
    /// Extra tiers past max level, from the supercharge table.
    supercharge: Option<LevelTable>,
}

impl BuildingRecord {
    pub fn gear_up(&self) -> Option<&GearUpInfo> {
        self.gear_up.as_ref()
    }

    pub fn supercharge(&self) -> Option<&LevelTable> {
        self.supercharge.as_ref()
    }

    pub(crate) fn set_supercharge(&mut self, tiers: LevelTable) {
        self.supercharge = Some(tiers);
    }
}

impl CatalogEntry for BuildingRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for BuildingRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(BuildingRecord);
impl_upgradeable!(BuildingRecord);
impl_unlock_gated!(BuildingRecord);

/// A placed building at a specific level, plus the per-instance state a
/// static record cannot carry: whether it has been geared up and which
/// seasonal defenses it currently hosts.
#[derive(Debug, Clone)]
pub struct Building {
    unit: LeveledUnit<BuildingRecord>,
    geared: bool,
    seasonal_defenses: Vec<SeasonalDefense>,
}

impl Building {
    pub fn new(unit: LeveledUnit<BuildingRecord>) -> Self {
        Building {
            unit,
            geared: false,
            seasonal_defenses: Vec::new(),
        }
    }

    pub fn geared(&self) -> bool {
        self.geared
    }

    pub(crate) fn set_geared(&mut self, geared: bool) {
        self.geared = geared;
    }

    pub fn seasonal_defenses(&self) -> &[SeasonalDefense] {
        &self.seasonal_defenses
    }

    pub(crate) fn add_seasonal_defense(&mut self, defense: SeasonalDefense) {
        self.seasonal_defenses.push(defense);
    }

    pub fn unit(&self) -> &LeveledUnit<BuildingRecord> {
        &self.unit
    }
}

impl Deref for Building {
    type Target = LeveledUnit<BuildingRecord>;

    fn deref(&self) -> &Self::Target {
        &self.unit
    }
}

// =============================================================================
// Seasonal defenses
// =============================================================================

/// A seasonal-defense module at a specific level.
pub type SeasonalModule = LeveledUnit<SeasonalModuleRecord>;

#[derive(Debug, Clone, Builder)]
pub struct SeasonalModuleRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

impl CatalogEntry for SeasonalModuleRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for SeasonalModuleRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(SeasonalModuleRecord);
impl_upgradeable!(SeasonalModuleRecord);
impl_unlock_gated!(SeasonalModuleRecord);

/// A stack of modules mounted on a host building. The defense has no level
/// of its own; it is defined as the sum of its module levels.
#[derive(Debug, Clone, Default)]
pub struct SeasonalDefense {
    modules: Vec<SeasonalModule>,
}

impl SeasonalDefense {
    pub fn new(modules: Vec<SeasonalModule>) -> Self {
        SeasonalDefense { modules }
    }

    pub fn modules(&self) -> &[SeasonalModule] {
        &self.modules
    }

    /// Sum of the mounted module levels.
    pub fn defense_level(&self) -> u32 {
        self.modules.iter().map(LeveledUnit::level).sum()
    }
}
