//! The shared leveled-entity behavior every category is composed from.

use crate::Rc;
use crate::error::{Error, Result};
use crate::game_types::{EntityId, EntityKind, Resource, TimeSpan, Village};
use crate::recognized::Recognized;
use crate::static_data::level::{LevelRecord, LevelTable};
use crate::static_data::CatalogEntry;

/// A static record that carries a level table. Implemented by every
/// per-category record type; [`LeveledUnit`] is generic over it.
pub trait LevelSource: CatalogEntry {
    fn levels(&self) -> &LevelTable;
}

/// A static record bound to a live level: the only place level-resolved
/// values are read from.
///
/// Strict construction refuses any level outside the record's table. The
/// lenient path exists for hydrating live API data against a static snapshot
/// that may lag behind the game: it clamps to the nearest valid tier and
/// marks the instance stale instead of failing.
#[derive(Debug, Clone)]
pub struct LeveledUnit<R> {
    record: Rc<R>,
    level: u32,
    stale: bool,
}

impl<R: LevelSource> LeveledUnit<R> {
    /// Binds `record` to `level`, failing with [`Error::LevelOutOfRange`]
    /// when the level is zero, negative, or past the record's max tier.
    pub fn new(record: Rc<R>, level: i64) -> Result<Self> {
        let max = record.levels().max_level();
        if level < 1 || level > i64::from(max) {
            return Err(Error::LevelOutOfRange {
                name: record.name().to_string(),
                level,
                max,
            });
        }
        Ok(LeveledUnit {
            record,
            level: level as u32,
            stale: false,
        })
    }

    /// Lenient construction: clamps to `[1, max]` and sets the stale flag
    /// whenever clamping actually moved the level.
    pub fn new_clamped(record: Rc<R>, level: i64) -> Self {
        let max = i64::from(record.levels().max_level().max(1));
        let clamped = level.clamp(1, max);
        LeveledUnit {
            record,
            stale: clamped != level,
            level: clamped as u32,
        }
    }

    pub fn record(&self) -> &Rc<R> {
        &self.record
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// True when lenient construction had to clamp the requested level,
    /// meaning the static data is likely older than the live account.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn max_level(&self) -> u32 {
        self.record.levels().max_level()
    }

    pub fn is_max_level(&self) -> bool {
        self.level == self.max_level()
    }

    pub fn id(&self) -> EntityId {
        self.record.id()
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn kind(&self) -> EntityKind {
        self.record.kind()
    }

    /// Derived from the static record, never overridable by live data.
    pub fn village(&self) -> Village {
        self.record.village()
    }

    /// The current level's row. Construction guarantees the level is within
    /// the table.
    pub fn current(&self) -> &LevelRecord {
        &self.record.levels().rows()[(self.level - 1) as usize]
    }

    /// Highest level reachable with the given gating-building level, `None`
    /// when even tier 1 is out of reach.
    pub fn max_level_for(&self, gate: u32) -> Option<u32> {
        self.record.levels().max_level_for(gate)
    }

    pub(crate) fn next_row(&self) -> Option<&LevelRecord> {
        self.record.levels().row(self.level + 1)
    }
}

// =============================================================================
// Capability traits
// =============================================================================
//
// Not every category has every capability: decorations have no combat stats,
// obstacles are never upgraded. Each entity module opts its record into the
// capabilities its table actually carries via the impl macros below.

/// Per-level combat numbers for categories that fight.
pub trait CombatStats {
    fn dps(&self) -> Option<u32>;
    fn hitpoints(&self) -> Option<u32>;
}

/// Cost of moving to the next tier. All accessors answer `None` at max
/// level, where there is nothing left to buy.
pub trait Upgradeable {
    fn upgrade_cost(&self) -> Option<u64>;
    fn upgrade_resource(&self) -> Option<Recognized<Resource>>;
    fn upgrade_time(&self) -> Option<TimeSpan>;
}

/// Gating-building requirement of the current tier.
pub trait UnlockGated {
    fn required_building_level(&self) -> u32;
}

macro_rules! impl_combat_stats {
    ($($record:ty),+ $(,)?) => {$(
        impl $crate::entities::leveled::CombatStats
            for $crate::entities::leveled::LeveledUnit<$record>
        {
            fn dps(&self) -> Option<u32> {
                self.current().dps
            }

            fn hitpoints(&self) -> Option<u32> {
                self.current().hitpoints
            }
        }
    )+};
}

macro_rules! impl_upgradeable {
    ($($record:ty),+ $(,)?) => {$(
        impl $crate::entities::leveled::Upgradeable
            for $crate::entities::leveled::LeveledUnit<$record>
        {
            fn upgrade_cost(&self) -> Option<u64> {
                self.next_row().map(|row| row.upgrade_cost)
            }

            fn upgrade_resource(
                &self,
            ) -> Option<$crate::recognized::Recognized<$crate::game_types::Resource>> {
                self.next_row().map(|row| row.upgrade_resource.clone())
            }

            fn upgrade_time(&self) -> Option<$crate::game_types::TimeSpan> {
                self.next_row().map(|row| row.upgrade_time)
            }
        }
    )+};
}

macro_rules! impl_unlock_gated {
    ($($record:ty),+ $(,)?) => {$(
        impl $crate::entities::leveled::UnlockGated
            for $crate::entities::leveled::LeveledUnit<$record>
        {
            fn required_building_level(&self) -> u32 {
                self.current().required_building_level
            }
        }
    )+};
}

pub(crate) use {impl_combat_stats, impl_unlock_gated, impl_upgradeable};
