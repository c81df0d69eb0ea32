//! End-to-end army-link decoding against a catalog loaded from disk.

use clashdata::army::{LinkIssue, parse_army_link, parse_army_link_with};
use clashdata::entities::LeveledUnit;
use clashdata::error::UnresolvedReference;
use clashdata::game_types::EntityKind;
use clashdata::static_data::Catalog;
use tempfile::TempDir;

const TROOPS: &str = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace
string,int,string,int,int,int
Barbarian,0,Elixir,0,1,1
,50,,2,1
Archer,0,Elixir,0,1,1
,100,,3,1
";

const SPELLS: &str = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel,HousingSpace
string,int,string,int,int,int
Lightning Spell,0,Elixir,0,1,1
,50000,,24,1
";

const HEROES: &str = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,TownHallLevel
string,int,string,int,int
Barbarian King,0,DarkElixir,0,7
,6000,,12,7
";

const PETS: &str = "\
Name,UpgradeCost,UpgradeResource,UpgradeTimeH,LaboratoryLevel
string,int,string,int,int
L.A.S.S.I,0,DarkElixir,0,1
,115000,,72,1
";

const EQUIPMENT: &str = "\
Name,Rarity,ShinyOre,GlowyOre,StarryOre,BlacksmithLevel
string,string,int,int,int,int
Barbarian Puppet,common,0,0,0,1
,,120,0,0,1
Rage Vial,common,0,0,0,1
,,120,0,0,1
";

fn catalog() -> (TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in [
        ("troops.csv", TROOPS),
        ("spells.csv", SPELLS),
        ("heroes.csv", HEROES),
        ("pets.csv", PETS),
        ("equipment.csv", EQUIPMENT),
    ] {
        std::fs::write(dir.path().join(name), body).unwrap();
    }
    let catalog = Catalog::load_dir(dir.path()).unwrap();
    (dir, catalog)
}

#[test]
fn full_link_round_trip() {
    let (_dir, catalog) = catalog();
    let army = parse_army_link("h0p0e0_1-u2x0s1x0", &catalog);

    assert_eq!(army.heroes.len(), 1);
    let loadout = &army.heroes[0];
    assert_eq!(loadout.hero.name(), "Barbarian King");
    assert_eq!(loadout.pet.as_ref().map(LeveledUnit::name), Some("L.A.S.S.I"));
    let equipment: Vec<&str> = loadout
        .hero
        .equipment()
        .iter()
        .map(LeveledUnit::name)
        .collect();
    assert_eq!(equipment, vec!["Barbarian Puppet", "Rage Vial"]);

    assert_eq!(army.troops.len(), 1);
    assert_eq!(army.troops[0].quantity, 2);
    assert_eq!(army.troops[0].unit.name(), "Barbarian");

    assert_eq!(army.spells.len(), 1);
    assert_eq!(army.spells[0].quantity, 1);
    assert_eq!(army.spells[0].unit.name(), "Lightning Spell");

    assert!(army.castle_troops.is_empty());
    assert!(army.castle_spells.is_empty());
}

#[test]
fn quantity_segments_keep_order_and_counts() {
    let (_dir, catalog) = catalog();
    let army = parse_army_link("u5x0-3x1", &catalog);
    let pairs: Vec<(u32, &str)> = army
        .troops
        .iter()
        .map(|entry| (entry.quantity, entry.unit.name()))
        .collect();
    assert_eq!(pairs, vec![(5, "Barbarian"), (3, "Archer")]);
    assert!(army.troops.iter().all(|entry| entry.unit.level() == 1));
}

#[test]
fn share_url_and_bare_payload_agree() {
    let (_dir, catalog) = catalog();
    let bare = parse_army_link("u2x0s1x0", &catalog);
    let url = parse_army_link(
        "https://link.clashofclans.com/en?action=CopyArmy&army=u2x0s1x0",
        &catalog,
    );
    assert_eq!(bare.troops.len(), url.troops.len());
    assert_eq!(bare.spells.len(), url.spells.len());
}

#[test]
fn unknown_indices_fall_back_to_placeholders() {
    let (_dir, catalog) = catalog();
    let mut issues = Vec::new();
    let army = parse_army_link_with("u4x9-2x0", &catalog, |issue| issues.push(issue));

    assert_eq!(army.troops.len(), 2);
    assert_eq!(army.troops[0].unit.name(), "Unknown");
    assert_eq!(army.troops[0].quantity, 4);
    assert_eq!(army.troops[1].unit.name(), "Barbarian");
    assert_eq!(
        issues,
        vec![LinkIssue::Unresolved(UnresolvedReference::UnknownId {
            kind: EntityKind::Troop,
            id: EntityKind::Troop.base_id() + 9,
        })]
    );
}

#[test]
fn garbage_tokens_never_take_down_the_link() {
    let (_dir, catalog) = catalog();
    let mut issues = Vec::new();
    let army = parse_army_link_with("u5x0-77-3x1", &catalog, |issue| issues.push(issue));
    assert_eq!(army.troops.len(), 2);
    assert_eq!(
        issues,
        vec![LinkIssue::DroppedToken {
            segment: 'u',
            token: "77"
        }]
    );
}
