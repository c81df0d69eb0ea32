//! The tolerant payload walk behind [`assemble`].

use serde_json::{Map, Value};
use tracing::warn;

use crate::account::{AccountSnapshot, Boosts, OngoingUpgrade, UpgradeTarget};
use crate::entities::building::{Building, SeasonalDefense};
use crate::entities::hero::Hero;
use crate::entities::leveled::{LevelSource, LeveledUnit};
use crate::error::UnresolvedReference;
use crate::game_types::{EntityId, EntityKind, TimeSpan};
use crate::static_data::{Catalog, Holder};

/// Hydrates one raw account payload against the catalog.
///
/// Never fails: structural problems cost the affected section or item, not
/// the snapshot. A payload that is not an object at all yields an empty
/// snapshot.
pub fn assemble(payload: &Value, catalog: &Catalog) -> AccountSnapshot {
    if !payload.is_object() {
        warn!("account payload is not a JSON object, nothing will hydrate");
    }

    let mut snapshot = AccountSnapshot {
        boosts: boosts(payload),
        ..AccountSnapshot::default()
    };
    let mut upgrades = Vec::new();

    hydrate_items(
        payload,
        "buildings",
        EntityKind::Building,
        &catalog.buildings,
        |item, unit| {
            let mut building = Building::new(unit);
            building.set_geared(geared(item));
            for defense in seasonal_defenses(item, catalog) {
                building.add_seasonal_defense(defense);
            }
            if let Some(upgrade) =
                ongoing_upgrade(item, || UpgradeTarget::Building(building.clone()))
            {
                upgrades.push(upgrade);
            }
            snapshot.buildings.push(building);
        },
    );
    hydrate_items(payload, "traps", EntityKind::Trap, &catalog.traps, |item, unit| {
        if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Trap(unit.clone())) {
            upgrades.push(upgrade);
        }
        snapshot.traps.push(unit);
    });
    hydrate_items(
        payload,
        "decos",
        EntityKind::Decoration,
        &catalog.decorations,
        |_, unit| snapshot.decorations.push(unit),
    );
    hydrate_items(
        payload,
        "obstacles",
        EntityKind::Obstacle,
        &catalog.obstacles,
        |_, unit| snapshot.obstacles.push(unit),
    );
    hydrate_items(payload, "units", EntityKind::Troop, &catalog.troops, |item, unit| {
        if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Troop(unit.clone())) {
            upgrades.push(upgrade);
        }
        snapshot.troops.push(unit);
    });
    hydrate_items(payload, "spells", EntityKind::Spell, &catalog.spells, |item, unit| {
        if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Spell(unit.clone())) {
            upgrades.push(upgrade);
        }
        snapshot.spells.push(unit);
    });
    hydrate_items(payload, "heroes", EntityKind::Hero, &catalog.heroes, |item, unit| {
        let hero = Hero::new(unit);
        if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Hero(hero.clone())) {
            upgrades.push(upgrade);
        }
        snapshot.heroes.push(hero);
    });
    hydrate_items(payload, "pets", EntityKind::Pet, &catalog.pets, |item, unit| {
        if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Pet(unit.clone())) {
            upgrades.push(upgrade);
        }
        snapshot.pets.push(unit);
    });
    hydrate_items(
        payload,
        "equipment",
        EntityKind::Equipment,
        &catalog.equipment,
        |item, unit| {
            if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Equipment(unit.clone()))
            {
                upgrades.push(upgrade);
            }
            snapshot.equipment.push(unit);
        },
    );
    hydrate_items(payload, "skins", EntityKind::Skin, &catalog.skins, |_, unit| {
        snapshot.skins.push(unit)
    });
    hydrate_items(
        payload,
        "sceneries",
        EntityKind::Scenery,
        &catalog.sceneries,
        |_, unit| snapshot.sceneries.push(unit),
    );
    hydrate_items(
        payload,
        "house_parts",
        EntityKind::ClanCapitalHousePart,
        &catalog.house_parts,
        |_, unit| snapshot.house_parts.push(unit),
    );
    hydrate_items(
        payload,
        "guardians",
        EntityKind::Guardian,
        &catalog.guardians,
        |item, unit| {
            if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Guardian(unit.clone()))
            {
                upgrades.push(upgrade);
            }
            snapshot.guardians.push(unit);
        },
    );
    hydrate_items(
        payload,
        "helpers",
        EntityKind::Helper,
        &catalog.helpers,
        |item, unit| {
            if let Some(upgrade) = ongoing_upgrade(item, || UpgradeTarget::Helper(unit.clone())) {
                upgrades.push(upgrade);
            }
            snapshot.helpers.push(unit);
        },
    );

    snapshot.upgrades = upgrades;
    snapshot
}

/// Walks a section and its builder-base twin (`name` plus `name2`) in
/// payload order, feeding every item that hydrates to `on_item`.
fn hydrate_items<'v, R: LevelSource>(
    payload: &'v Value,
    name: &'static str,
    kind: EntityKind,
    holder: &Holder<R>,
    mut on_item: impl FnMut(&'v Map<String, Value>, LeveledUnit<R>),
) {
    let twin = format!("{name}2");
    for key in [name, twin.as_str()] {
        let Some(section) = payload.get(key) else {
            continue;
        };
        let Some(items) = section.as_array() else {
            warn!(section = key, "section is not a list, skipping it");
            continue;
        };
        for item in items {
            if let Some((object, unit)) = hydrate_item(item, kind, holder, key) {
                on_item(object, unit);
            }
        }
    }
}

/// Resolves one `{ "data": id, "lvl": n, ... }` item, shifting the raw
/// 0-based `lvl` to a 1-based tier through the lenient level path.
fn hydrate_item<'v, R: LevelSource>(
    item: &'v Value,
    kind: EntityKind,
    holder: &Holder<R>,
    section: &str,
) -> Option<(&'v Map<String, Value>, LeveledUnit<R>)> {
    let Some(object) = item.as_object() else {
        warn!(section, "item is not an object, skipping it");
        return None;
    };
    let Some(id) = object.get("data").and_then(Value::as_u64) else {
        warn!(section, "item carries no static id, skipping it");
        return None;
    };
    let id = EntityId::from(id);
    let Some(record) = holder.find_by_id(id) else {
        let issue = UnresolvedReference::UnknownId { kind, id: id.raw() };
        warn!(%issue, section, "skipping an item the static data does not know");
        return None;
    };
    let level = object.get("lvl").and_then(Value::as_i64).unwrap_or(0) + 1;
    Some((object, LeveledUnit::new_clamped(record, level)))
}

/// The game encodes gearing both as a flag and as a completion count.
fn geared(item: &Map<String, Value>) -> bool {
    match item.get("gearing") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(count)) => count.as_u64().is_some_and(|n| n > 0),
        _ => false,
    }
}

/// Mounted seasonal defenses from a building item's `modules` entry: one
/// defense per inner module list, with any bare module objects pooled into a
/// final defense of their own.
fn seasonal_defenses(item: &Map<String, Value>, catalog: &Catalog) -> Vec<SeasonalDefense> {
    let Some(raw) = item.get("modules") else {
        return Vec::new();
    };
    let Some(entries) = raw.as_array() else {
        warn!("building modules are not a list, skipping them");
        return Vec::new();
    };

    let mut defenses = Vec::new();
    let mut loose = Vec::new();
    for entry in entries {
        if let Value::Array(modules) = entry {
            let mounted: Vec<_> = modules
                .iter()
                .filter_map(|module| {
                    hydrate_item(
                        module,
                        EntityKind::SeasonalDefenseModule,
                        &catalog.seasonal_modules,
                        "modules",
                    )
                    .map(|(_, unit)| unit)
                })
                .collect();
            if !mounted.is_empty() {
                defenses.push(SeasonalDefense::new(mounted));
            }
        } else if let Some((_, unit)) = hydrate_item(
            entry,
            EntityKind::SeasonalDefenseModule,
            &catalog.seasonal_modules,
            "modules",
        ) {
            loose.push(unit);
        }
    }
    if !loose.is_empty() {
        defenses.push(SeasonalDefense::new(loose));
    }
    defenses
}

/// An upgrade entry for any item carrying a `timer`, with the target built
/// lazily so timer-less items cost nothing.
fn ongoing_upgrade(
    item: &Map<String, Value>,
    target: impl FnOnce() -> UpgradeTarget,
) -> Option<OngoingUpgrade> {
    let remaining = item.get("timer").and_then(Value::as_u64)?;
    Some(OngoingUpgrade {
        target: target(),
        remaining: TimeSpan::from_secs(remaining),
        helper_remaining: item
            .get("helper_timer")
            .and_then(Value::as_u64)
            .map(TimeSpan::from_secs),
        goblin: item.get("goblin").and_then(Value::as_bool).unwrap_or(false),
    })
}

fn boosts(payload: &Value) -> Boosts {
    let secs = |key: &str| {
        payload
            .get(key)
            .and_then(Value::as_u64)
            .map(TimeSpan::from_secs)
    };
    Boosts {
        builder_boost: secs("builder_boost"),
        lab_boost: secs("lab_boost"),
        clock_tower_boost: secs("clock_tower_boost"),
        clock_tower_cooldown: secs("clock_tower_cooldown"),
        consumable_timer: secs("consumable_timer"),
        consumable_timer2: secs("consumable_timer2"),
        helper_cooldown: secs("helper_cooldown"),
    }
}
