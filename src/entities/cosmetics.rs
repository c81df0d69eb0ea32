//! Cosmetic and yard categories: decorations, obstacles, sceneries, hero
//! skins, and clan-capital house parts.
//!
//! None of these have combat stats, and only decorations have any kind of
//! price progression; they still ride on [`LeveledUnit`] (mostly at a fixed
//! level 1) so account assembly can treat every category uniformly.

use bon::Builder;

use crate::entities::leveled::{LevelSource, LeveledUnit};
use crate::game_types::Resource;
use crate::recognized::Recognized;
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable};

macro_rules! catalog_entry {
    ($record:ty) => {
        impl CatalogEntry for $record {
            fn meta(&self) -> &EntityMeta {
                &self.meta
            }
        }

        impl LevelSource for $record {
            fn levels(&self) -> &LevelTable {
                &self.levels
            }
        }
    };
}

/// A placed decoration.
pub type Decoration = LeveledUnit<DecorationRecord>;

#[derive(Debug, Clone, Builder)]
pub struct DecorationRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

catalog_entry!(DecorationRecord);

/// An obstacle on the map.
pub type Obstacle = LeveledUnit<ObstacleRecord>;

#[derive(Debug, Clone, Builder)]
pub struct ObstacleRecord {
    meta: EntityMeta,
    levels: LevelTable,
    clear_cost: u64,
    clear_resource: Recognized<Resource>,
    loot: Option<u32>,
}

impl ObstacleRecord {
    pub fn clear_cost(&self) -> u64 {
        self.clear_cost
    }

    pub fn clear_resource(&self) -> &Recognized<Resource> {
        &self.clear_resource
    }

    /// Gems (or similar) granted on clearing, for the few obstacles that
    /// drop anything.
    pub fn loot(&self) -> Option<u32> {
        self.loot
    }
}

catalog_entry!(ObstacleRecord);

/// A purchased scenery.
pub type Scenery = LeveledUnit<SceneryRecord>;

#[derive(Debug, Clone, Builder)]
pub struct SceneryRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

catalog_entry!(SceneryRecord);

/// A hero skin.
pub type Skin = LeveledUnit<SkinRecord>;

#[derive(Debug, Clone, Builder)]
pub struct SkinRecord {
    meta: EntityMeta,
    levels: LevelTable,
    hero: Option<String>,
}

impl SkinRecord {
    /// Name of the hero this skin dresses, when the table says.
    pub fn hero(&self) -> Option<&str> {
        self.hero.as_deref()
    }
}

catalog_entry!(SkinRecord);

/// A clan-capital house part.
pub type HousePart = LeveledUnit<HousePartRecord>;

#[derive(Debug, Clone, Builder)]
pub struct HousePartRecord {
    meta: EntityMeta,
    levels: LevelTable,
    part_type: Option<String>,
}

impl HousePartRecord {
    /// Which slot of the capital house this part fits (roof, walls, ...).
    pub fn part_type(&self) -> Option<&str> {
        self.part_type.as_deref()
    }
}

catalog_entry!(HousePartRecord);
