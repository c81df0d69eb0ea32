//! Typed game entities: one module per category, all composed from the
//! shared [`LeveledUnit`] behavior in [`leveled`].

pub mod building;
pub mod cosmetics;
pub mod hero;
pub mod leveled;
pub mod spell;
pub mod support;
pub mod trap;
pub mod troop;

pub use building::{
    Building, BuildingRecord, GearUpInfo, SeasonalDefense, SeasonalModule, SeasonalModuleRecord,
};
pub use cosmetics::{
    Decoration, DecorationRecord, HousePart, HousePartRecord, Obstacle, ObstacleRecord, Scenery,
    SceneryRecord, Skin, SkinRecord,
};
pub use hero::{Equipment, EquipmentRecord, Hero, HeroRecord, OreCosts};
pub use leveled::{CombatStats, LevelSource, LeveledUnit, UnlockGated, Upgradeable};
pub use spell::{Spell, SpellRecord};
pub use support::{Guardian, GuardianRecord, Helper, HelperRecord, Pet, PetRecord};
pub use trap::{Trap, TrapRecord};
pub use troop::{SuperTroopInfo, Troop, TroopRecord};
