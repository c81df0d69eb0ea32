//! Heroes and the equipment they carry.

use std::ops::Deref;

use bon::Builder;

use crate::entities::leveled::{
    LevelSource, LeveledUnit, impl_combat_stats, impl_unlock_gated, impl_upgradeable,
};
use crate::error::{Error, Result};
use crate::game_types::{EntityId, EntityKind, Rarity, Village};
use crate::recognized::Recognized;
use crate::static_data::{CatalogEntry, EntityMeta, LevelTable, UnitStat};

#[derive(Debug, Clone, Builder)]
pub struct HeroRecord {
    meta: EntityMeta,
    levels: LevelTable,
}

impl HeroRecord {
    /// Stand-in record for army-link indices the catalog does not know.
    pub fn placeholder(id: EntityId) -> Self {
        HeroRecord::builder()
            .meta(EntityMeta {
                id,
                kind: EntityKind::Hero,
                name: "Unknown".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::single_free_tier())
            .build()
    }
}

impl CatalogEntry for HeroRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for HeroRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_combat_stats!(HeroRecord);
impl_upgradeable!(HeroRecord);
impl_unlock_gated!(HeroRecord);

/// A hero at a specific level plus whatever equipment is attached.
///
/// Attachment never changes the hero's own level resolution; the leveled
/// behavior is reachable through `Deref`.
#[derive(Debug, Clone)]
pub struct Hero {
    unit: LeveledUnit<HeroRecord>,
    equipment: Vec<Equipment>,
}

impl Hero {
    /// Equipment slot limit per hero.
    pub const EQUIPMENT_SLOTS: usize = 2;

    pub fn new(unit: LeveledUnit<HeroRecord>) -> Self {
        Hero {
            unit,
            equipment: Vec::new(),
        }
    }

    /// Attaches one equipment piece, failing once both slots are taken.
    pub fn attach_equipment(&mut self, equipment: Equipment) -> Result<()> {
        if self.equipment.len() >= Self::EQUIPMENT_SLOTS {
            return Err(Error::EquipmentSlotsFull {
                hero: self.unit.name().to_string(),
                limit: Self::EQUIPMENT_SLOTS as u32,
            });
        }
        self.equipment.push(equipment);
        Ok(())
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn unit(&self) -> &LeveledUnit<HeroRecord> {
        &self.unit
    }
}

impl Deref for Hero {
    type Target = LeveledUnit<HeroRecord>;

    fn deref(&self) -> &Self::Target {
        &self.unit
    }
}

// =============================================================================
// Equipment
// =============================================================================

/// A piece of hero equipment at a specific level.
pub type Equipment = LeveledUnit<EquipmentRecord>;

/// Ore price of one equipment tier. Shiny is the workhorse cost every tier
/// pays; glowy and starry only apply at the milestone tiers the table says
/// they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OreCosts {
    pub shiny: u64,
    pub glowy: u64,
    pub starry: u64,
}

#[derive(Debug, Clone, Builder)]
pub struct EquipmentRecord {
    meta: EntityMeta,
    /// The universal cost column carries the shiny-ore price.
    levels: LevelTable,
    rarity: Recognized<Rarity>,
    #[builder(default)]
    glowy_ore: UnitStat<u64>,
    #[builder(default)]
    starry_ore: UnitStat<u64>,
}

impl EquipmentRecord {
    pub fn rarity(&self) -> &Recognized<Rarity> {
        &self.rarity
    }

    /// Full ore triple for the 1-indexed `level`.
    pub fn ore_costs(&self, level: u32) -> Result<OreCosts> {
        let shiny = *self.levels.upgrade_cost().get(level as usize)?;
        let glowy = *self.glowy_ore.get(level as usize)?;
        let starry = *self.starry_ore.get(level as usize)?;
        Ok(OreCosts {
            shiny,
            glowy,
            starry,
        })
    }

    /// Stand-in record for army-link indices the catalog does not know.
    pub fn placeholder(id: EntityId) -> Self {
        EquipmentRecord::builder()
            .meta(EntityMeta {
                id,
                kind: EntityKind::Equipment,
                name: "Unknown".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::single_free_tier())
            .rarity(Recognized::Unknown(String::new()))
            .glowy_ore(UnitStat::new(vec![0]))
            .starry_ore(UnitStat::new(vec![0]))
            .build()
    }
}

impl CatalogEntry for EquipmentRecord {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl LevelSource for EquipmentRecord {
    fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl_upgradeable!(EquipmentRecord);
impl_unlock_gated!(EquipmentRecord);

impl Equipment {
    pub fn rarity(&self) -> &Recognized<Rarity> {
        self.record().rarity()
    }

    /// Ore triple for moving to the next tier, `None` at max level.
    pub fn upgrade_ore_costs(&self) -> Option<OreCosts> {
        self.record().ore_costs(self.level() + 1).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rc;
    use crate::game_types::{Resource, TimeSpan};
    use crate::static_data::LevelRecord;

    fn hero() -> Hero {
        let rows = (1u64..=3)
            .map(|tier| {
                LevelRecord::builder()
                    .upgrade_cost(tier * 1_000)
                    .upgrade_resource(Recognized::Known(Resource::DarkElixir))
                    .upgrade_time(TimeSpan::from_hours(tier))
                    .required_building_level(tier as u32)
                    .build()
            })
            .collect();
        let record = HeroRecord::builder()
            .meta(EntityMeta {
                id: EntityId::from(28_000_000u32),
                kind: EntityKind::Hero,
                name: "Barbarian King".to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::from_rows(rows))
            .build();
        Hero::new(LeveledUnit::new(Rc::new(record), 2).unwrap())
    }

    fn equipment(name: &str) -> Equipment {
        let record = EquipmentRecord::builder()
            .meta(EntityMeta {
                id: EntityId::from(90_000_000u32),
                kind: EntityKind::Equipment,
                name: name.to_string(),
                village: Village::Home,
            })
            .levels(LevelTable::from_rows(vec![
                LevelRecord::builder()
                    .upgrade_cost(0)
                    .upgrade_resource(Recognized::Known(Resource::ShinyOre))
                    .upgrade_time(TimeSpan::ZERO)
                    .build(),
                LevelRecord::builder()
                    .upgrade_cost(120)
                    .upgrade_resource(Recognized::Known(Resource::ShinyOre))
                    .upgrade_time(TimeSpan::ZERO)
                    .build(),
            ]))
            .rarity(Recognized::Known(Rarity::Epic))
            .glowy_ore(UnitStat::new(vec![0, 20]))
            .starry_ore(UnitStat::new(vec![0, 0]))
            .build();
        LeveledUnit::new_clamped(Rc::new(record), 1)
    }

    #[test]
    fn two_slots_then_full() {
        let mut hero = hero();
        hero.attach_equipment(equipment("Barbarian Puppet")).unwrap();
        hero.attach_equipment(equipment("Rage Vial")).unwrap();
        let err = hero.attach_equipment(equipment("Earthquake Boots")).unwrap_err();
        assert!(matches!(err, Error::EquipmentSlotsFull { limit: 2, .. }));
        assert_eq!(hero.equipment().len(), 2);
    }

    #[test]
    fn attachment_leaves_level_resolution_alone() {
        let mut hero = hero();
        assert_eq!(hero.level(), 2);
        hero.attach_equipment(equipment("Rage Vial")).unwrap();
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.max_level(), 3);
    }

    #[test]
    fn ore_triple_per_level() {
        let eq = equipment("Rage Vial");
        assert_eq!(
            eq.record().ore_costs(2).unwrap(),
            OreCosts {
                shiny: 120,
                glowy: 20,
                starry: 0
            }
        );
        assert!(eq.record().ore_costs(3).is_err());
        assert_eq!(
            eq.upgrade_ore_costs(),
            Some(OreCosts {
                shiny: 120,
                glowy: 20,
                starry: 0
            })
        );
    }

    #[test]
    fn rarity_surfaces_through_the_unit() {
        assert_eq!(
            equipment("Rage Vial").rarity().known(),
            Some(&Rarity::Epic)
        );
    }
}
