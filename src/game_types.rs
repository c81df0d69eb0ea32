//! Game concept types that describe Clash of Clans mechanics.
//!
//! These types represent entity identities, categories, villages, resources,
//! and durations that are useful across any tool working with Clash data --
//! not just this crate's loaders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::recognized::Recognized;

// =============================================================================
// Identity Types
// =============================================================================

/// A stable external identifier for a static game entity.
///
/// The numeric space is partitioned per [`EntityKind`]: every category owns a
/// disjoint range, so an id alone is enough to tell a troop from a spell.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The category whose id range contains this id, if any.
    pub fn kind(self) -> Option<EntityKind> {
        EntityKind::of(self)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        EntityId(v)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        EntityId(v as u32)
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        EntityId(v as u32)
    }
}

// =============================================================================
// Entity Categories
// =============================================================================

/// Width of each category's id range. Bases are spaced at least this far
/// apart, so `base <= id < base + RANGE_WIDTH` classifies unambiguously.
const RANGE_WIDTH: u32 = 1_000_000;

/// The static-data categories this crate models, each owning a disjoint
/// id range starting at [`EntityKind::base_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Building,
    Troop,
    Obstacle,
    Trap,
    Decoration,
    Spell,
    Hero,
    Skin,
    Pet,
    ClanCapitalHousePart,
    Scenery,
    Equipment,
    Guardian,
    Helper,
    SeasonalDefenseModule,
}

impl EntityKind {
    /// Every category, ordered by base id ascending.
    pub const ALL: [EntityKind; 15] = [
        EntityKind::Building,
        EntityKind::Troop,
        EntityKind::Obstacle,
        EntityKind::Trap,
        EntityKind::Decoration,
        EntityKind::Spell,
        EntityKind::Hero,
        EntityKind::Skin,
        EntityKind::Pet,
        EntityKind::ClanCapitalHousePart,
        EntityKind::Scenery,
        EntityKind::Equipment,
        EntityKind::Guardian,
        EntityKind::Helper,
        EntityKind::SeasonalDefenseModule,
    ];

    /// First id of this category's range.
    pub const fn base_id(self) -> u32 {
        match self {
            EntityKind::Building => 1_000_000,
            EntityKind::Troop => 4_000_000,
            EntityKind::Obstacle => 8_000_000,
            EntityKind::Trap => 12_000_000,
            EntityKind::Decoration => 18_000_000,
            EntityKind::Spell => 26_000_000,
            EntityKind::Hero => 28_000_000,
            EntityKind::Skin => 52_000_000,
            EntityKind::Pet => 73_000_000,
            EntityKind::ClanCapitalHousePart => 82_000_000,
            EntityKind::Scenery => 89_000_000,
            EntityKind::Equipment => 90_000_000,
            EntityKind::Guardian => 94_000_000,
            EntityKind::Helper => 95_000_000,
            EntityKind::SeasonalDefenseModule => 99_000_000,
        }
    }

    /// Id of the `ordinal`-th record of this category (0-based file order).
    pub fn id_for(self, ordinal: u32) -> EntityId {
        EntityId(self.base_id() + ordinal)
    }

    /// Position of `id` within this category's range, or `None` when the id
    /// belongs to a different category.
    pub fn index_of(self, id: EntityId) -> Option<u32> {
        if EntityKind::of(id) == Some(self) {
            Some(id.raw() - self.base_id())
        } else {
            None
        }
    }

    /// Classifies an id by the category range it falls into.
    pub fn of(id: EntityId) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                let base = kind.base_id();
                (base..base + RANGE_WIDTH).contains(&id.raw())
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Building => "building",
            EntityKind::Troop => "troop",
            EntityKind::Obstacle => "obstacle",
            EntityKind::Trap => "trap",
            EntityKind::Decoration => "decoration",
            EntityKind::Spell => "spell",
            EntityKind::Hero => "hero",
            EntityKind::Skin => "skin",
            EntityKind::Pet => "pet",
            EntityKind::ClanCapitalHousePart => "clan capital house part",
            EntityKind::Scenery => "scenery",
            EntityKind::Equipment => "equipment",
            EntityKind::Guardian => "guardian",
            EntityKind::Helper => "helper",
            EntityKind::SeasonalDefenseModule => "seasonal defense module",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Villages
// =============================================================================

/// Which base an entity belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Village {
    #[default]
    Home,
    BuilderBase,
    Capital,
}

impl Village {
    /// Parses the village tag the static tables use (`VillageType` column).
    /// An empty cell means the home village.
    pub fn from_name(name: &str) -> Recognized<Village> {
        match name {
            "" | "home" | "homeVillage" => Recognized::Known(Village::Home),
            "builderBase" | "builder_base" | "home2" => Recognized::Known(Village::BuilderBase),
            "clanCapital" | "capital" => Recognized::Known(Village::Capital),
            other => Recognized::Unknown(other.to_string()),
        }
    }

    /// Parses the numeric village index some tables use instead of a tag.
    pub fn from_index(index: u32) -> Recognized<Village, u32> {
        match index {
            0 => Recognized::Known(Village::Home),
            1 => Recognized::Known(Village::BuilderBase),
            2 => Recognized::Known(Village::Capital),
            other => Recognized::Unknown(other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Village::Home => "home",
            Village::BuilderBase => "builderBase",
            Village::Capital => "clanCapital",
        }
    }
}

impl fmt::Display for Village {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Resources
// =============================================================================

/// Currencies upgrades are paid in.
///
/// The static tables call the builder-base currencies `Gold2`/`Elixir2`;
/// those spellings map onto the builder variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Gold,
    Elixir,
    DarkElixir,
    BuilderGold,
    BuilderElixir,
    CapitalGold,
    ShinyOre,
    GlowyOre,
    StarryOre,
    Gems,
}

impl Resource {
    pub fn from_name(name: &str) -> Recognized<Resource> {
        match name {
            "Gold" => Recognized::Known(Resource::Gold),
            "Elixir" => Recognized::Known(Resource::Elixir),
            "DarkElixir" => Recognized::Known(Resource::DarkElixir),
            "Gold2" => Recognized::Known(Resource::BuilderGold),
            "Elixir2" => Recognized::Known(Resource::BuilderElixir),
            "CapitalGold" => Recognized::Known(Resource::CapitalGold),
            "ShinyOre" | "CommonOre" => Recognized::Known(Resource::ShinyOre),
            "GlowyOre" | "RareOre" => Recognized::Known(Resource::GlowyOre),
            "StarryOre" | "EpicOre" => Recognized::Known(Resource::StarryOre),
            "Diamonds" | "Gems" => Recognized::Known(Resource::Gems),
            other => Recognized::Unknown(other.to_string()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Gold => "Gold",
            Resource::Elixir => "Elixir",
            Resource::DarkElixir => "Dark Elixir",
            Resource::BuilderGold => "Builder Gold",
            Resource::BuilderElixir => "Builder Elixir",
            Resource::CapitalGold => "Capital Gold",
            Resource::ShinyOre => "Shiny Ore",
            Resource::GlowyOre => "Glowy Ore",
            Resource::StarryOre => "Starry Ore",
            Resource::Gems => "Gems",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Rarity
// =============================================================================

/// Hero equipment rarity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Epic,
}

impl Rarity {
    pub fn from_name(name: &str) -> Recognized<Rarity> {
        match name {
            "common" | "Common" => Recognized::Known(Rarity::Common),
            "epic" | "Epic" => Recognized::Known(Rarity::Epic),
            other => Recognized::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => f.write_str("Common"),
            Rarity::Epic => f.write_str("Epic"),
        }
    }
}

// =============================================================================
// Time
// =============================================================================

/// A duration in whole seconds.
///
/// Static tables mix units (upgrade times in hours plus a minutes column,
/// boost cooldowns in hours, API timers in seconds); everything is normalized
/// to seconds at the edge so arithmetic and comparisons stay unit-free.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeSpan(u64);

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan(0);

    pub fn from_secs(secs: u64) -> Self {
        TimeSpan(secs)
    }

    pub fn from_minutes(minutes: u64) -> Self {
        TimeSpan(minutes * 60)
    }

    pub fn from_hours(hours: u64) -> Self {
        TimeSpan(hours * 3_600)
    }

    pub fn from_days(days: u64) -> Self {
        TimeSpan(days * 86_400)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan(self.0 + rhs.0)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0 / 86_400;
        let hours = (self.0 % 86_400) / 3_600;
        let minutes = (self.0 % 3_600) / 60;
        let seconds = self.0 % 60;
        let mut wrote = false;
        for (value, unit) in [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")] {
            if value > 0 {
                if wrote {
                    f.write_str(" ")?;
                }
                write!(f, "{value}{unit}")?;
                wrote = true;
            }
        }
        if !wrote {
            f.write_str("0s")?;
        }
        Ok(())
    }
}
