//! Per-level facts for one entity: the rows and the derived stat columns.

use bon::Builder;

use crate::game_types::{Resource, TimeSpan};
use crate::recognized::Recognized;
use crate::static_data::stat_table::UnitStat;

/// One unlock tier's numeric facts. Immutable once loaded.
///
/// `level` always means the tier's position in the entity's table (1-based,
/// no gaps), regardless of what raw numeric level the source file used;
/// [`LevelTable::from_rows`] renumbers on construction.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LevelRecord {
    #[builder(default)]
    pub level: u32,
    pub upgrade_cost: u64,
    pub upgrade_resource: Recognized<Resource>,
    pub upgrade_time: TimeSpan,
    /// Level of the gating building (lab, blacksmith, town hall) required to
    /// start this tier's upgrade. Zero means ungated.
    #[builder(default)]
    pub required_building_level: u32,
    pub dps: Option<u32>,
    pub hitpoints: Option<u32>,
    pub speed: Option<u32>,
    pub heal: Option<u32>,
}

/// The full ascending level table of one entity, with the universal per-level
/// columns pre-extracted as [`UnitStat`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelTable {
    rows: Vec<LevelRecord>,
    upgrade_cost: UnitStat<u64>,
    upgrade_time: UnitStat<TimeSpan>,
    required_building_level: UnitStat<u32>,
}

impl LevelTable {
    /// Builds the table, renumbering each row so `level` is its 1-based
    /// position in file order.
    pub fn from_rows(mut rows: Vec<LevelRecord>) -> Self {
        for (i, row) in rows.iter_mut().enumerate() {
            row.level = (i + 1) as u32;
        }
        let upgrade_cost = rows.iter().map(|r| r.upgrade_cost).collect();
        let upgrade_time = rows.iter().map(|r| r.upgrade_time).collect();
        let required_building_level = rows.iter().map(|r| r.required_building_level).collect();
        LevelTable {
            rows,
            upgrade_cost,
            upgrade_time,
            required_building_level,
        }
    }

    /// A one-tier free table, used for placeholder records and categories
    /// that have no real level progression.
    pub fn single_free_tier() -> Self {
        LevelTable::from_rows(vec![
            LevelRecord::builder()
                .upgrade_cost(0)
                .upgrade_resource(Recognized::Unknown(String::new()))
                .upgrade_time(TimeSpan::ZERO)
                .build(),
        ])
    }

    pub fn rows(&self) -> &[LevelRecord] {
        &self.rows
    }

    /// Row for the 1-indexed `level`, `None` outside `[1, max]`.
    pub fn row(&self, level: u32) -> Option<&LevelRecord> {
        if level == 0 {
            return None;
        }
        self.rows.get(level as usize - 1)
    }

    pub fn max_level(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn upgrade_cost(&self) -> &UnitStat<u64> {
        &self.upgrade_cost
    }

    pub fn upgrade_time(&self) -> &UnitStat<TimeSpan> {
        &self.upgrade_time
    }

    pub fn required_building_level(&self) -> &UnitStat<u32> {
        &self.required_building_level
    }

    /// Highest tier whose gating requirement is within `gate`, scanning the
    /// whole table since requirements are not assumed monotonic. `None` when
    /// even tier 1 is out of reach.
    pub fn max_level_for(&self, gate: u32) -> Option<u32> {
        self.rows
            .iter()
            .filter(|row| row.required_building_level <= gate)
            .map(|row| row.level)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cost: u64, requirement: u32) -> LevelRecord {
        LevelRecord::builder()
            .level(99)
            .upgrade_cost(cost)
            .upgrade_resource(Recognized::Known(Resource::Elixir))
            .upgrade_time(TimeSpan::from_hours(1))
            .required_building_level(requirement)
            .build()
    }

    #[test]
    fn from_rows_renumbers_sequentially() {
        let table = LevelTable::from_rows(vec![row(0, 1), row(50, 2), row(150, 3)]);
        let levels: Vec<u32> = table.rows().iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(table.max_level(), 3);
    }

    #[test]
    fn columns_line_up_with_rows() {
        let table = LevelTable::from_rows(vec![row(0, 1), row(50, 2)]);
        assert_eq!(table.upgrade_cost().get(1).copied().ok(), Some(0));
        assert_eq!(table.upgrade_cost().get(2).copied().ok(), Some(50));
        assert_eq!(table.required_building_level().get(2).copied().ok(), Some(2));
    }

    #[test]
    fn row_lookup_is_one_indexed() {
        let table = LevelTable::from_rows(vec![row(0, 1), row(50, 2)]);
        assert!(table.row(0).is_none());
        assert_eq!(table.row(1).map(|r| r.upgrade_cost), Some(0));
        assert!(table.row(3).is_none());
    }

    #[test]
    fn max_level_for_scans_requirements() {
        let table = LevelTable::from_rows(vec![row(0, 1), row(50, 3), row(150, 5)]);
        assert_eq!(table.max_level_for(0), None);
        assert_eq!(table.max_level_for(1), Some(1));
        assert_eq!(table.max_level_for(4), Some(2));
        assert_eq!(table.max_level_for(9), Some(3));
    }

    #[test]
    fn single_free_tier_is_level_one_only() {
        let table = LevelTable::single_free_tier();
        assert_eq!(table.max_level(), 1);
        assert_eq!(table.row(1).map(|r| r.upgrade_cost), Some(0));
    }
}
