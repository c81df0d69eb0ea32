//! Troops, including the boosted "super" forms.

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_combat_stats, impl_unlock_gated, impl_upgradeable,
};
use crate::game_types::{EntityId, EntityKind, TimeSpan, Village};
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

/// A troop at a specific level.
pub type Troop = LeveledUnit<TroopRecord>;

#[derive(Debug, Clone, Builder)]
pub struct TroopRecord {
    meta: EntityMeta,
    levels: LevelTable,
    #[builder(default)]
    housing_space: u32,
    #[builder(default)]
    is_flying: bool,
    #[builder(default)]
    attacks_air: bool,
    #[builder(default)]
    attacks_ground: bool,
    /// Marked in the troop table itself; the boost metadata arrives later
    /// from the super-troop table and lands in `super_info`.
    #[builder(default)]
    is_super: bool,
    super_info: Option<SuperTroopInfo>,
}

impl TroopRecord {
    pub fn housing_space(&self) -> u32 {
        self.housing_space
    }

    pub fn is_flying(&self) -> bool {
        self.is_flying
    }

    pub fn attacks_air(&self) -> bool {
        self.attacks_air
    }

    pub fn attacks_ground(&self) -> bool {
        self.attacks_ground
    }

    pub fn is_super(&self) -> bool {
        self.is_super
    }

    /// Boost metadata, present only on super troops whose base troop was
    /// found during the load.
    pub fn super_info(&self) -> Option<&SuperTroopInfo> {
        self.super_info.as_ref()
    }

    pub(crate) fn set_super_info(&mut self, info: SuperTroopInfo) {
        self.is_super = true;
        self.super_info = Some(info);
    }

    /// Stand-in record for army-link indices the catalog does not know.
    pub fn placeholder(id: EntityId) -> Self {
        TroopRecord::builder()
            .meta(EntityMeta {
                id,
                kind: EntityKind::Troop,
                name: "Unknown".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::single_free_tier())
            .build()
    }
}

impl CatalogEntry for TroopRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for TroopRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(TroopRecord);
impl_upgradeable!(TroopRecord);
impl_unlock_gated!(TroopRecord);

/// What makes a super troop super: the base troop it boosts from, the boost
/// economics, and the entry requirement on the base troop's level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperTroopInfo {
    /// Name of the original (base) troop this record is the boosted form of.
    pub original: String,
    /// Id of the original troop, resolved through the troop holder.
    pub original_id: EntityId,
    /// Level the original troop must have reached before boosting.
    pub min_original_level: u32,
    pub cooldown: TimeSpan,
    pub duration: TimeSpan,
}

impl Troop {
    pub fn speed(&self) -> Option<u32> {
        self.current().speed
    }
}
