//! The REST player payload and its hydration against the catalog.
//!
//! The API reports units by display name and village, not by static id, and
//! omits fields freely, so every field here is defaulted. Levels are
//! 1-based on the wire (unlike the 0-based raw account dumps) and hydrate
//! through the lenient path: a payload newer than the static snapshot clamps
//! and flags staleness instead of failing.

use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entities::hero::{Equipment, Hero};
use crate::entities::leveled::{LevelSource, LeveledUnit};
use crate::entities::spell::Spell;
use crate::entities::support::Pet;
use crate::entities::troop::Troop;
use crate::error::UnresolvedReference;
use crate::game_types::{EntityKind, Village};
use crate::recognized::Recognized;
use crate::static_data::{Catalog, Holder};

/// A player as the REST API reports one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub exp_level: u32,
    pub trophies: u32,
    pub town_hall_level: u32,
    pub town_hall_weapon_level: Option<u32>,
    pub builder_hall_level: u32,
    /// Troops as listed by the API, which files hero pets under troops too;
    /// [`Player::hydrate`] separates them.
    pub troops: Vec<PlayerItemLevel>,
    pub spells: Vec<PlayerItemLevel>,
    pub heroes: Vec<PlayerItemLevel>,
    pub hero_equipment: Vec<PlayerItemLevel>,
}

/// One unit entry of a player payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerItemLevel {
    pub name: String,
    pub level: i64,
    pub max_level: u32,
    pub village: String,
    pub super_troop_is_active: bool,
}

/// A player's units resolved into leveled entities.
#[derive(Debug, Clone, Default)]
pub struct HydratedPlayer {
    pub troops: Vec<Troop>,
    pub pets: Vec<Pet>,
    pub spells: Vec<Spell>,
    pub heroes: Vec<Hero>,
    pub equipment: Vec<Equipment>,
}

impl Player {
    /// Resolves every unit list against the catalog, skipping (with a
    /// `warn!`) entries the static build does not know.
    pub fn hydrate(&self, catalog: &Catalog) -> HydratedPlayer {
        let (pets, troops): (Vec<_>, Vec<_>) = self.troops.iter().partition_map(|item| {
            if catalog.pets.find_by_name(&item.name, Village::Home).is_some() {
                Either::Left(item)
            } else {
                Either::Right(item)
            }
        });

        HydratedPlayer {
            troops: resolve(troops, &catalog.troops, EntityKind::Troop),
            pets: resolve(pets, &catalog.pets, EntityKind::Pet),
            spells: resolve(&self.spells, &catalog.spells, EntityKind::Spell),
            heroes: resolve(&self.heroes, &catalog.heroes, EntityKind::Hero)
                .into_iter()
                .map(Hero::new)
                .collect(),
            equipment: resolve(&self.hero_equipment, &catalog.equipment, EntityKind::Equipment),
        }
    }
}

fn resolve<'a, R: LevelSource>(
    items: impl IntoIterator<Item = &'a PlayerItemLevel>,
    holder: &Holder<R>,
    kind: EntityKind,
) -> Vec<LeveledUnit<R>> {
    items
        .into_iter()
        .filter_map(|item| {
            let village = match Village::from_name(&item.village) {
                Recognized::Known(village) => village,
                Recognized::Unknown(raw) => {
                    warn!(village = %raw, name = %item.name, "unknown village tag, assuming home");
                    Village::Home
                }
            };
            let Some(record) = holder.find_by_name(&item.name, village) else {
                let issue = UnresolvedReference::UnknownName {
                    kind,
                    name: item.name.clone(),
                };
                warn!(%issue, "skipping a unit the static data does not know");
                return None;
            };
            Some(LeveledUnit::new_clamped(record, item.level))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entities::hero::{EquipmentRecord, HeroRecord};
    use crate::entities::support::PetRecord;
    use crate::entities::troop::TroopRecord;
    use crate::game_types::{Rarity, Resource, TimeSpan};
    use crate::static_data::{EntityMeta, LevelRecord, LevelTable};

    fn tiers(count: u64) -> LevelTable {
        LevelTable::from_rows(
            (1..=count)
                .map(|tier| {
                    LevelRecord::builder()
                        .upgrade_cost(tier * 100)
                        .upgrade_resource(Recognized::Known(Resource::Elixir))
                        .upgrade_time(TimeSpan::from_hours(tier))
                        .required_building_level(tier as u32)
                        .build()
                })
                .collect(),
        )
    }

    fn meta(kind: EntityKind, index: u32, name: &str, village: Village) -> EntityMeta {
        EntityMeta {
            id: kind.id_for(index),
            kind,
            name: name.to_string(),
            village,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            troops: Holder::new(vec![
                TroopRecord::builder()
                    .meta(meta(EntityKind::Troop, 0, "Barbarian", Village::Home))
                    .levels(tiers(9))
                    .build(),
                TroopRecord::builder()
                    .meta(meta(
                        EntityKind::Troop,
                        50,
                        "Raged Barbarian",
                        Village::BuilderBase,
                    ))
                    .levels(tiers(20))
                    .build(),
            ]),
            pets: Holder::new(vec![
                PetRecord::builder()
                    .meta(meta(EntityKind::Pet, 0, "L.A.S.S.I", Village::Home))
                    .levels(tiers(10))
                    .build(),
            ]),
            heroes: Holder::new(vec![
                HeroRecord::builder()
                    .meta(meta(EntityKind::Hero, 0, "Barbarian King", Village::Home))
                    .levels(tiers(95))
                    .build(),
            ]),
            equipment: Holder::new(vec![
                EquipmentRecord::builder()
                    .meta(meta(EntityKind::Equipment, 0, "Rage Vial", Village::Home))
                    .levels(tiers(18))
                    .rarity(Recognized::Known(Rarity::Common))
                    .build(),
            ]),
            ..Catalog::default()
        }
    }

    fn item(name: &str, level: i64, village: &str) -> serde_json::Value {
        json!({ "name": name, "level": level, "maxLevel": 99, "village": village })
    }

    #[test]
    fn sparse_payloads_deserialize_with_defaults() {
        let player: Player = serde_json::from_value(json!({
            "tag": "#ABC123",
            "townHallLevel": 12,
        }))
        .unwrap();
        assert_eq!(player.tag, "#ABC123");
        assert_eq!(player.town_hall_level, 12);
        assert_eq!(player.town_hall_weapon_level, None);
        assert!(player.troops.is_empty());
        assert!(player.name.is_empty());
    }

    #[test]
    fn pets_listed_under_troops_split_out() {
        let player: Player = serde_json::from_value(json!({
            "troops": [
                item("Barbarian", 5, "home"),
                item("L.A.S.S.I", 7, "home"),
            ],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        assert_eq!(hydrated.troops.len(), 1);
        assert_eq!(hydrated.troops[0].name(), "Barbarian");
        assert_eq!(hydrated.pets.len(), 1);
        assert_eq!(hydrated.pets[0].name(), "L.A.S.S.I");
        assert_eq!(hydrated.pets[0].level(), 7);
    }

    #[test]
    fn api_levels_are_already_one_based() {
        let player: Player = serde_json::from_value(json!({
            "troops": [item("Barbarian", 3, "home")],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        assert_eq!(hydrated.troops[0].level(), 3);
        assert!(!hydrated.troops[0].is_stale());
    }

    #[test]
    fn unknown_names_skip_only_their_entry() {
        let player: Player = serde_json::from_value(json!({
            "troops": [
                item("Totally New Troop", 1, "home"),
                item("Barbarian", 2, "home"),
            ],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        assert_eq!(hydrated.troops.len(), 1);
        assert_eq!(hydrated.troops[0].name(), "Barbarian");
    }

    #[test]
    fn builder_base_units_resolve_in_their_village() {
        let player: Player = serde_json::from_value(json!({
            "troops": [
                item("Raged Barbarian", 16, "builderBase"),
                item("Raged Barbarian", 16, "home"),
            ],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        // The home-village twin of a builder-base-only name does not exist.
        assert_eq!(hydrated.troops.len(), 1);
        assert_eq!(hydrated.troops[0].village(), Village::BuilderBase);
    }

    #[test]
    fn heroes_and_equipment_hydrate_into_wrappers() {
        let player: Player = serde_json::from_value(json!({
            "heroes": [item("Barbarian King", 40, "home")],
            "heroEquipment": [item("Rage Vial", 12, "home")],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        assert_eq!(hydrated.heroes.len(), 1);
        assert_eq!(hydrated.heroes[0].level(), 40);
        assert!(hydrated.heroes[0].equipment().is_empty());
        assert_eq!(hydrated.equipment.len(), 1);
        assert_eq!(hydrated.equipment[0].rarity().known(), Some(&Rarity::Common));
    }

    #[test]
    fn stale_static_data_clamps_api_levels() {
        let player: Player = serde_json::from_value(json!({
            "troops": [item("Barbarian", 12, "home")],
        }))
        .unwrap();
        let hydrated = player.hydrate(&catalog());
        assert_eq!(hydrated.troops[0].level(), 9);
        assert!(hydrated.troops[0].is_stale());
    }
}
