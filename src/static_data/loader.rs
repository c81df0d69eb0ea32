//! Per-category record builders: parsed raw tables in, record vectors out.
//!
//! All builders share the same spine: walk entity groups in file order, drop
//! deprecated records, resolve a stable id, read the level rows, then let a
//! small per-category closure pick up whatever extra columns that category
//! surfaces. Missing required fields on a record that survived the
//! deprecation filter are fatal; the holders never see half-built records.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::entities::building::{BuildingRecord, GearUpInfo, SeasonalModuleRecord};
use crate::entities::cosmetics::{
    DecorationRecord, HousePartRecord, ObstacleRecord, SceneryRecord, SkinRecord,
};
use crate::entities::hero::{EquipmentRecord, HeroRecord};
use crate::entities::spell::SpellRecord;
use crate::entities::support::{GuardianRecord, HelperRecord, PetRecord};
use crate::entities::trap::TrapRecord;
use crate::entities::troop::{SuperTroopInfo, TroopRecord};
use crate::error::Result;
use crate::game_types::{EntityId, EntityKind, Rarity, Resource, TimeSpan, Village};
use crate::recognized::Recognized;
use crate::static_data::level::{LevelRecord, LevelTable};
use crate::static_data::stat_table::UnitStat;
use crate::static_data::table::{GroupRows, RawTable, RowView};
use crate::static_data::{CatalogEntry, EntityMeta};

// =============================================================================
// Id resolution
// =============================================================================

/// The authoritative name→id mapping (`ids.json`): one section per category,
/// each mapping a record's name to its published id.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct IdMap {
    sections: HashMap<String, HashMap<String, u32>>,
}

impl IdMap {
    pub fn parse(bytes: &[u8]) -> Result<IdMap> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn lookup(&self, kind: EntityKind, name: &str) -> Option<EntityId> {
        self.sections
            .get(section_key(kind))?
            .get(name)
            .copied()
            .map(EntityId::from)
    }
}

fn section_key(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Building => "buildings",
        EntityKind::Troop => "troops",
        EntityKind::Obstacle => "obstacles",
        EntityKind::Trap => "traps",
        EntityKind::Decoration => "decorations",
        EntityKind::Spell => "spells",
        EntityKind::Hero => "heroes",
        EntityKind::Skin => "skins",
        EntityKind::Pet => "pets",
        EntityKind::ClanCapitalHousePart => "house_parts",
        EntityKind::Scenery => "sceneries",
        EntityKind::Equipment => "equipment",
        EntityKind::Guardian => "guardians",
        EntityKind::Helper => "helpers",
        EntityKind::SeasonalDefenseModule => "seasonal_modules",
    }
}

/// Assigns stable ids in file order: the authoritative map wins, names it
/// does not know get `category base + ordinal`. The ordinal counts kept
/// records, so the fallback is deterministic for a given data version.
struct IdResolver<'a> {
    kind: EntityKind,
    ids: &'a IdMap,
    ordinal: u32,
}

impl<'a> IdResolver<'a> {
    fn new(kind: EntityKind, ids: &'a IdMap) -> Self {
        IdResolver {
            kind,
            ids,
            ordinal: 0,
        }
    }

    fn resolve(&mut self, name: &str) -> EntityId {
        let ordinal = self.ordinal;
        self.ordinal += 1;
        match self.ids.lookup(self.kind, name) {
            Some(id) => id,
            None => self.kind.id_for(ordinal),
        }
    }
}

// =============================================================================
// Shared row readers
// =============================================================================

fn hours(h: f64) -> TimeSpan {
    TimeSpan::from_secs((h * 3_600.0).round() as u64)
}

fn is_dropped(first: RowView<'_>) -> Result<bool> {
    Ok(first.flag("Deprecated")? || first.flag("DisableProduction")?)
}

fn village_of(first: RowView<'_>) -> Village {
    match Village::from_name(first.get("VillageType").unwrap_or("")) {
        Recognized::Known(village) => village,
        Recognized::Unknown(raw) => {
            warn!(village = %raw, "unrecognized village tag, treating as home");
            Village::Home
        }
    }
}

fn read_level_row(row: RowView<'_>, gate: &str) -> Result<LevelRecord> {
    Ok(LevelRecord::builder()
        .upgrade_cost(row.req_u64("UpgradeCost")?)
        .upgrade_resource(Resource::from_name(row.req_str("UpgradeResource")?))
        .upgrade_time(hours(row.req_f64("UpgradeTimeH")?))
        .required_building_level(row.req_u32(gate)?)
        .maybe_dps(row.opt_u32("DPS")?)
        .maybe_hitpoints(row.opt_u32("Hitpoints")?)
        .maybe_speed(row.opt_u32("Speed")?)
        .maybe_heal(row.opt_u32("Heal")?)
        .build())
}

fn read_level_rows(group: GroupRows<'_>, gate: &str) -> Result<Vec<LevelRecord>> {
    group.rows().map(|row| read_level_row(row, gate)).collect()
}

/// The shared spine for leveled categories. `make` receives the resolved
/// identity, the level table, and the entity's first row for whatever extra
/// columns the category surfaces.
fn build_leveled<R>(
    table: &RawTable,
    ids: &IdMap,
    kind: EntityKind,
    gate: &str,
    make: impl Fn(EntityMeta, LevelTable, RowView<'_>) -> Result<R>,
) -> Result<Vec<R>> {
    let mut resolver = IdResolver::new(kind, ids);
    let mut records = Vec::with_capacity(table.len());
    for group in table.groups() {
        let first = group.first();
        if is_dropped(first)? {
            debug!(kind = %kind, name = group.name(), "skipping deprecated record");
            continue;
        }
        let meta = EntityMeta {
            id: resolver.resolve(group.name()),
            kind,
            name: group.name().to_string(),
            village: village_of(first),
        };
        let levels = LevelTable::from_rows(read_level_rows(group, gate)?);
        records.push(make(meta, levels, first)?);
    }
    Ok(records)
}

/// The spine for single-tier categories (cosmetics and the like), where the
/// closure also decides what the one level row looks like.
fn build_flat<R>(
    table: &RawTable,
    ids: &IdMap,
    kind: EntityKind,
    make: impl Fn(EntityMeta, RowView<'_>) -> Result<R>,
) -> Result<Vec<R>> {
    let mut resolver = IdResolver::new(kind, ids);
    let mut records = Vec::with_capacity(table.len());
    for group in table.groups() {
        let first = group.first();
        if is_dropped(first)? {
            debug!(kind = %kind, name = group.name(), "skipping deprecated record");
            continue;
        }
        let meta = EntityMeta {
            id: resolver.resolve(group.name()),
            kind,
            name: group.name().to_string(),
            village: village_of(first),
        };
        records.push(make(meta, first)?);
    }
    Ok(records)
}

/// One purchase tier for categories that are bought once, never upgraded.
fn purchase_tier(first: RowView<'_>) -> Result<LevelTable> {
    Ok(LevelTable::from_rows(vec![
        LevelRecord::builder()
            .upgrade_cost(first.req_u64("BuyCost")?)
            .upgrade_resource(Resource::from_name(first.req_str("BuyResource")?))
            .upgrade_time(TimeSpan::ZERO)
            .build(),
    ]))
}

// =============================================================================
// Category builders
// =============================================================================

pub(crate) fn build_troops(table: &RawTable, ids: &IdMap) -> Result<Vec<TroopRecord>> {
    build_leveled(table, ids, EntityKind::Troop, "LaboratoryLevel", |meta, levels, first| {
        Ok(TroopRecord::builder()
            .meta(meta)
            .levels(levels)
            .housing_space(first.req_u32("HousingSpace")?)
            .is_flying(first.flag("IsFlying")?)
            .attacks_air(first.flag("AirTargets")?)
            .attacks_ground(first.flag("GroundTargets")?)
            .is_super(first.flag("EnabledBySuperLicence")?)
            .build())
    })
}

pub(crate) fn build_spells(table: &RawTable, ids: &IdMap) -> Result<Vec<SpellRecord>> {
    build_leveled(table, ids, EntityKind::Spell, "LaboratoryLevel", |meta, levels, first| {
        Ok(SpellRecord::builder()
            .meta(meta)
            .levels(levels)
            .housing_space(first.req_u32("HousingSpace")?)
            .build())
    })
}

pub(crate) fn build_heroes(table: &RawTable, ids: &IdMap) -> Result<Vec<HeroRecord>> {
    build_leveled(table, ids, EntityKind::Hero, "TownHallLevel", |meta, levels, _| {
        Ok(HeroRecord::builder().meta(meta).levels(levels).build())
    })
}

pub(crate) fn build_pets(table: &RawTable, ids: &IdMap) -> Result<Vec<PetRecord>> {
    build_leveled(table, ids, EntityKind::Pet, "LaboratoryLevel", |meta, levels, _| {
        Ok(PetRecord::builder().meta(meta).levels(levels).build())
    })
}

pub(crate) fn build_guardians(table: &RawTable, ids: &IdMap) -> Result<Vec<GuardianRecord>> {
    build_leveled(table, ids, EntityKind::Guardian, "TownHallLevel", |meta, levels, _| {
        Ok(GuardianRecord::builder().meta(meta).levels(levels).build())
    })
}

pub(crate) fn build_helpers(table: &RawTable, ids: &IdMap) -> Result<Vec<HelperRecord>> {
    build_leveled(table, ids, EntityKind::Helper, "TownHallLevel", |meta, levels, _| {
        Ok(HelperRecord::builder().meta(meta).levels(levels).build())
    })
}

pub(crate) fn build_seasonal_modules(
    table: &RawTable,
    ids: &IdMap,
) -> Result<Vec<SeasonalModuleRecord>> {
    build_leveled(
        table,
        ids,
        EntityKind::SeasonalDefenseModule,
        "TownHallLevel",
        |meta, levels, _| Ok(SeasonalModuleRecord::builder().meta(meta).levels(levels).build()),
    )
}

pub(crate) fn build_buildings(table: &RawTable, ids: &IdMap) -> Result<Vec<BuildingRecord>> {
    build_leveled(table, ids, EntityKind::Building, "TownHallLevel", |meta, levels, first| {
        Ok(BuildingRecord::builder()
            .meta(meta)
            .levels(levels)
            .maybe_gear_up(gear_up_of(first)?)
            .build())
    })
}

fn gear_up_of(first: RowView<'_>) -> Result<Option<GearUpInfo>> {
    // A building offers gear-up exactly when the cost column is filled; the
    // companion columns are then required.
    let Some(cost) = first.opt_u64("GearUpCost")? else {
        return Ok(None);
    };
    Ok(Some(GearUpInfo {
        cost,
        resource: Resource::from_name(first.req_str("GearUpResource")?),
        time: hours(first.req_f64("GearUpTimeH")?),
        required_level: first.req_u32("GearUpLevelRequirement")?,
    }))
}

pub(crate) fn build_traps(table: &RawTable, ids: &IdMap) -> Result<Vec<TrapRecord>> {
    build_leveled(table, ids, EntityKind::Trap, "TownHallLevel", |meta, levels, first| {
        Ok(TrapRecord::builder()
            .meta(meta)
            .levels(levels)
            .triggers_on_air(first.flag("AirTrigger")?)
            .triggers_on_ground(first.flag("GroundTrigger")?)
            .build())
    })
}

pub(crate) fn build_equipment(table: &RawTable, ids: &IdMap) -> Result<Vec<EquipmentRecord>> {
    let mut resolver = IdResolver::new(EntityKind::Equipment, ids);
    let mut records = Vec::with_capacity(table.len());
    for group in table.groups() {
        let first = group.first();
        if is_dropped(first)? {
            debug!(name = group.name(), "skipping deprecated equipment");
            continue;
        }

        // Shiny ore is the universal cost column; glowy and starry become
        // their own per-level columns since only milestone tiers charge them.
        let mut rows = Vec::with_capacity(group.len());
        let mut glowy = Vec::with_capacity(group.len());
        let mut starry = Vec::with_capacity(group.len());
        for row in group.rows() {
            rows.push(
                LevelRecord::builder()
                    .upgrade_cost(row.req_u64("ShinyOre")?)
                    .upgrade_resource(Recognized::Known(Resource::ShinyOre))
                    .upgrade_time(TimeSpan::ZERO)
                    .required_building_level(row.req_u32("BlacksmithLevel")?)
                    .maybe_dps(row.opt_u32("DPS")?)
                    .maybe_hitpoints(row.opt_u32("Hitpoints")?)
                    .build(),
            );
            glowy.push(row.opt_u64("GlowyOre")?.unwrap_or(0));
            starry.push(row.opt_u64("StarryOre")?.unwrap_or(0));
        }

        records.push(
            EquipmentRecord::builder()
                .meta(EntityMeta {
                    id: resolver.resolve(group.name()),
                    kind: EntityKind::Equipment,
                    name: group.name().to_string(),
                    village: village_of(first),
                })
                .levels(LevelTable::from_rows(rows))
                .rarity(Rarity::from_name(first.req_str("Rarity")?))
                .glowy_ore(UnitStat::new(glowy))
                .starry_ore(UnitStat::new(starry))
                .build(),
        );
    }
    Ok(records)
}

pub(crate) fn build_decorations(table: &RawTable, ids: &IdMap) -> Result<Vec<DecorationRecord>> {
    build_flat(table, ids, EntityKind::Decoration, |meta, first| {
        Ok(DecorationRecord::builder()
            .meta(meta)
            .levels(purchase_tier(first)?)
            .build())
    })
}

pub(crate) fn build_obstacles(table: &RawTable, ids: &IdMap) -> Result<Vec<ObstacleRecord>> {
    build_flat(table, ids, EntityKind::Obstacle, |meta, first| {
        Ok(ObstacleRecord::builder()
            .meta(meta)
            .levels(LevelTable::single_free_tier())
            .clear_cost(first.req_u64("ClearCost")?)
            .clear_resource(Resource::from_name(first.req_str("ClearResource")?))
            .maybe_loot(first.opt_u32("LootCount")?)
            .build())
    })
}

pub(crate) fn build_sceneries(table: &RawTable, ids: &IdMap) -> Result<Vec<SceneryRecord>> {
    build_flat(table, ids, EntityKind::Scenery, |meta, first| {
        Ok(SceneryRecord::builder()
            .meta(meta)
            .levels(purchase_tier(first)?)
            .build())
    })
}

pub(crate) fn build_skins(table: &RawTable, ids: &IdMap) -> Result<Vec<SkinRecord>> {
    build_flat(table, ids, EntityKind::Skin, |meta, first| {
        Ok(SkinRecord::builder()
            .meta(meta)
            .levels(purchase_tier(first)?)
            .maybe_hero(first.get("Character").map(str::to_string))
            .build())
    })
}

pub(crate) fn build_house_parts(table: &RawTable, ids: &IdMap) -> Result<Vec<HousePartRecord>> {
    build_flat(table, ids, EntityKind::ClanCapitalHousePart, |meta, first| {
        Ok(HousePartRecord::builder()
            .meta(meta)
            .levels(purchase_tier(first)?)
            .maybe_part_type(first.get("PartType").map(str::to_string))
            .build())
    })
}

// =============================================================================
// Cross-table bindings
// =============================================================================

/// Attaches super-troop boost metadata onto the boosted records. The table
/// is keyed by the base troop's name; rows referencing troops this dump does
/// not know are skipped with a warning, since the super table routinely runs
/// ahead of older troop dumps.
pub(crate) fn bind_super_troops(troops: &mut [TroopRecord], supers: &RawTable) -> Result<()> {
    for group in supers.groups() {
        let row = group.first();
        let base_name = group.name();
        let super_name = row.req_str("SuperTroop")?;
        let info_template = (
            row.req_u32("MinOriginalLevel")?,
            hours(row.req_f64("CooldownH")?),
            hours(row.req_f64("DurationH")?),
        );

        let Some(original_id) = troops
            .iter()
            .find(|t| t.name() == base_name && t.village() == Village::Home)
            .map(CatalogEntry::id)
        else {
            warn!(troop = base_name, "super-troop table references an unknown base troop, skipping");
            continue;
        };
        let Some(super_record) = troops.iter_mut().find(|t| t.name() == super_name) else {
            warn!(troop = super_name, "super-troop table references an unknown boosted troop, skipping");
            continue;
        };
        let (min_original_level, cooldown, duration) = info_template;
        super_record.set_super_info(SuperTroopInfo {
            original: base_name.to_string(),
            original_id,
            min_original_level,
            cooldown,
            duration,
        });
    }
    Ok(())
}

/// Attaches supercharge tiers onto their host buildings, keyed by building
/// name.
pub(crate) fn bind_supercharges(buildings: &mut [BuildingRecord], table: &RawTable) -> Result<()> {
    for group in table.groups() {
        let tiers = read_level_rows(group, "TownHallLevel")?;
        let Some(building) = buildings.iter_mut().find(|b| b.name() == group.name()) else {
            warn!(building = group.name(), "supercharge table references an unknown building, skipping");
            continue;
        };
        building.set_supercharge(LevelTable::from_rows(tiers));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::leveled::LevelSource;
    use crate::error::Error;

    fn table(name: &str, csv: &str) -> RawTable {
        RawTable::parse(name, csv.as_bytes()).unwrap()
    }

    fn ids(json: &str) -> IdMap {
        IdMap::parse(json.as_bytes()).unwrap()
    }

    const TROOPS: &str = "\
Name,VillageType,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace,DPS,Hitpoints,IsFlying,AirTargets,GroundTargets,EnabledBySuperLicence,Deprecated,DisableProduction
string,string,int,string,int,int,int,int,int,boolean,boolean,boolean,boolean,boolean
Barbarian,,0,Elixir,0,1,1,8,45,false,false,true,,,
,,50,,2,1,,11,54,,,,,,
,,150,,5,3,,14,65,,,,,,
Old Ghost,,0,Elixir,0,1,1,5,20,,,true,,TRUE,
Super Barbarian,,0,Elixir,0,1,5,180,1000,false,false,true,TRUE,,
";

    #[test]
    fn authoritative_ids_win_and_fallback_fills_in() {
        let map = ids(r#"{"troops": {"Barbarian": 4000008}}"#);
        let troops = build_troops(&table("troops.csv", TROOPS), &map).unwrap();
        assert_eq!(troops.len(), 2);
        assert_eq!(troops[0].id().raw(), 4_000_008);
        // Super Barbarian is the second kept record: ordinal 1.
        assert_eq!(troops[1].id().raw(), EntityKind::Troop.base_id() + 1);
    }

    #[test]
    fn deprecated_records_are_dropped_without_consuming_ordinals() {
        let troops = build_troops(&table("troops.csv", TROOPS), &IdMap::default()).unwrap();
        let names: Vec<&str> = troops.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Barbarian", "Super Barbarian"]);
        assert_eq!(troops[1].id().raw(), EntityKind::Troop.base_id() + 1);
    }

    #[test]
    fn level_rows_become_an_ascending_table() {
        let troops = build_troops(&table("troops.csv", TROOPS), &IdMap::default()).unwrap();
        let barbarian = &troops[0];
        assert_eq!(barbarian.levels().max_level(), 3);
        let costs: Vec<u64> = barbarian.levels().rows().iter().map(|r| r.upgrade_cost).collect();
        assert_eq!(costs, vec![0, 50, 150]);
        // Forward-filled resource and per-level combat stats.
        assert_eq!(barbarian.levels().rows()[2].dps, Some(14));
        assert_eq!(barbarian.housing_space(), 1);
        assert!(barbarian.attacks_ground());
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let csv = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace
string,int,string,int,int,int
Barbarian,0,Elixir,0,1,
";
        let err = build_troops(&table("troops.csv", csv), &IdMap::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedStaticData { .. }));
        assert!(err.to_string().contains("HousingSpace"));
    }

    #[test]
    fn missing_required_field_on_deprecated_record_is_ignored() {
        let csv = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace,Deprecated
string,int,string,int,int,int,boolean
Relic,,,,,,TRUE
Barbarian,0,Elixir,0,1,1,
";
        let troops = build_troops(&table("troops.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(troops.len(), 1);
        assert_eq!(troops[0].name(), "Barbarian");
    }

    #[test]
    fn super_binding_attaches_boost_and_back_reference() {
        let mut troops = build_troops(&table("troops.csv", TROOPS), &IdMap::default()).unwrap();
        let supers = table(
            "supers.csv",
            "\
Name,SuperTroop,MinOriginalLevel,CooldownH,DurationH
string,string,int,int,int
Barbarian,Super Barbarian,8,24,72
Yeti,Super Yeti,9,24,72
",
        );
        bind_super_troops(&mut troops, &supers).unwrap();

        let sup = troops.iter().find(|t| t.name() == "Super Barbarian").unwrap();
        let info = sup.super_info().unwrap();
        assert_eq!(info.original, "Barbarian");
        assert_eq!(info.original_id, troops[0].id());
        assert_eq!(info.min_original_level, 8);
        assert_eq!(info.cooldown, TimeSpan::from_hours(24));
        assert_eq!(info.duration, TimeSpan::from_hours(72));
        // The unknown Yeti row was skipped without failing the load.
        assert!(troops[0].super_info().is_none());
    }

    #[test]
    fn equipment_surfaces_rarity_and_ore_columns() {
        let csv = "\
Name,Rarity,ShinyOre,GlowyOre,StarryOre,BlacksmithLevel
string,string,int,int,int,int
Rage Vial,common,0,0,0,1
,,120,20,0,1
";
        let equipment = build_equipment(&table("equipment.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(equipment.len(), 1);
        let vial = &equipment[0];
        assert_eq!(vial.rarity().known(), Some(&Rarity::Common));
        assert_eq!(
            vial.ore_costs(2).unwrap(),
            crate::entities::hero::OreCosts {
                shiny: 120,
                glowy: 20,
                starry: 0
            }
        );
    }

    #[test]
    fn buildings_pick_up_gear_up_and_supercharges() {
        let csv = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,TownHallLevel,Hitpoints,GearUpCost,GearUpResource,GearUpTimeH,GearUpLevelRequirement
string,int,string,int,int,int,int,string,int,int
Cannon,250,Gold,0,1,420,1000000,Gold2,24,7
,1000,,1,2,470,,,,
Mortar,8000,Gold,8,3,400,,,,
";
        let mut buildings =
            build_buildings(&table("buildings.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(buildings.len(), 2);
        let cannon = &buildings[0];
        let gear = cannon.gear_up().unwrap();
        assert_eq!(gear.cost, 1_000_000);
        assert_eq!(gear.required_level, 7);
        assert!(buildings[1].gear_up().is_none());

        let charges = table(
            "supercharges.csv",
            "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,TownHallLevel
string,int,string,int,int
Cannon,9000000,Gold,72,17
,10000000,,96,17
",
        );
        bind_supercharges(&mut buildings, &charges).unwrap();
        let tiers = buildings[0].supercharge().unwrap();
        assert_eq!(tiers.max_level(), 2);
        assert_eq!(tiers.rows()[1].upgrade_cost, 10_000_000);
        assert!(buildings[1].supercharge().is_none());
    }

    #[test]
    fn obstacles_keep_clear_economics() {
        let csv = "\
Name,ClearCost,ClearResource,LootCount,VillageType
string,int,string,int,string
Tree,400,Elixir,,
Gem Box,0,Elixir,25,
";
        let obstacles = build_obstacles(&table("obstacles.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(obstacles[0].clear_cost(), 400);
        assert_eq!(obstacles[0].loot(), None);
        assert_eq!(obstacles[1].loot(), Some(25));
        assert_eq!(obstacles[1].id().raw(), EntityKind::Obstacle.base_id() + 1);
    }

    #[test]
    fn skins_track_their_hero() {
        let csv = "\
Name,Character,BuyCost,BuyResource
string,string,int,string
Gladiator King,Barbarian King,1500,Diamonds
";
        let skins = build_skins(&table("skins.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(skins[0].hero(), Some("Barbarian King"));
        assert_eq!(skins[0].levels().max_level(), 1);
    }

    #[test]
    fn builder_base_village_tag_is_honored() {
        let csv = "\
Name,VillageType,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace
string,string,int,string,int,int,int
Raged Barbarian,builderBase,0,Elixir2,0,1,1
";
        let troops = build_troops(&table("troops.csv", csv), &IdMap::default()).unwrap();
        assert_eq!(troops[0].village(), Village::BuilderBase);
    }
}
