//! Account-payload hydration: one raw per-account dump into a typed
//! [`AccountSnapshot`].
//!
//! Assembly is best-effort by design. Static data routinely lags the live
//! game, so an id the catalog does not know, a malformed item, or a section
//! of the wrong shape is `warn!`-logged and skipped; everything else in the
//! payload still hydrates. Callers always get a snapshot, never an error.

pub mod assemble;

pub use assemble::assemble;

use variantly::Variantly;

use crate::entities::building::Building;
use crate::entities::cosmetics::{Decoration, HousePart, Obstacle, Scenery, Skin};
use crate::entities::hero::{Equipment, Hero};
use crate::entities::spell::Spell;
use crate::entities::support::{Guardian, Helper, Pet};
use crate::entities::trap::Trap;
use crate::entities::troop::Troop;
use crate::game_types::TimeSpan;

/// Everything one account payload describes, hydrated against the catalog.
///
/// Each collection merges the home-village section with its builder-base
/// twin (the `2`-suffixed key); [`crate::entities::leveled::LeveledUnit::village`]
/// tells them apart. Units hydrate through the lenient level path, so a
/// payload newer than the static data clamps and flags staleness instead of
/// disappearing.
#[derive(Debug, Clone, Default)]
pub struct AccountSnapshot {
    pub buildings: Vec<Building>,
    pub traps: Vec<Trap>,
    pub decorations: Vec<Decoration>,
    pub obstacles: Vec<Obstacle>,
    pub troops: Vec<Troop>,
    pub spells: Vec<Spell>,
    pub heroes: Vec<Hero>,
    pub pets: Vec<Pet>,
    pub equipment: Vec<Equipment>,
    pub skins: Vec<Skin>,
    pub sceneries: Vec<Scenery>,
    pub house_parts: Vec<HousePart>,
    pub guardians: Vec<Guardian>,
    pub helpers: Vec<Helper>,
    /// One entry per in-progress upgrade, across every section.
    pub upgrades: Vec<OngoingUpgrade>,
    pub boosts: Boosts,
}

/// An upgrade currently running on one of the account's entities. The
/// target is hydrated at its current level; the upgrade is toward the next
/// tier.
#[derive(Debug, Clone)]
pub struct OngoingUpgrade {
    pub target: UpgradeTarget,
    pub remaining: TimeSpan,
    /// Remaining time on the builder-assist helper working this upgrade.
    pub helper_remaining: Option<TimeSpan>,
    /// True for the cut-price "goblin builder" upgrades.
    pub goblin: bool,
}

/// The entity an [`OngoingUpgrade`] is working on.
#[derive(Debug, Clone, Variantly)]
pub enum UpgradeTarget {
    Building(Building),
    Trap(Trap),
    Troop(Troop),
    Spell(Spell),
    Hero(Hero),
    Pet(Pet),
    Equipment(Equipment),
    Guardian(Guardian),
    Helper(Helper),
}

impl UpgradeTarget {
    /// Display name of the entity being upgraded.
    pub fn name(&self) -> &str {
        match self {
            UpgradeTarget::Building(building) => building.name(),
            UpgradeTarget::Trap(trap) => trap.name(),
            UpgradeTarget::Troop(troop) => troop.name(),
            UpgradeTarget::Spell(spell) => spell.name(),
            UpgradeTarget::Hero(hero) => hero.name(),
            UpgradeTarget::Pet(pet) => pet.name(),
            UpgradeTarget::Equipment(equipment) => equipment.name(),
            UpgradeTarget::Guardian(guardian) => guardian.name(),
            UpgradeTarget::Helper(helper) => helper.name(),
        }
    }
}

/// Account-wide boost timers, as remaining time. An absent key means that
/// boost is not running, so every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boosts {
    pub builder_boost: Option<TimeSpan>,
    pub lab_boost: Option<TimeSpan>,
    pub clock_tower_boost: Option<TimeSpan>,
    pub clock_tower_cooldown: Option<TimeSpan>,
    pub consumable_timer: Option<TimeSpan>,
    pub consumable_timer2: Option<TimeSpan>,
    pub helper_cooldown: Option<TimeSpan>,
}
