//! The link grammar itself.
//!
//! A link is a run of tagged segments: `h` hero loadouts, `i` castle troops,
//! `d` castle spells, `u` troops, `s` spells, in any order, none required.
//! Quantity segments hold `-`-separated `<qty>x<index>` pairs; hero segments
//! hold `-`-separated `<hero>(m<mode>)?(p<pet>)?(e<eq>(_<eq>)?)?` entries.
//! Tag letters never occur inside segment bodies, which is what lets
//! segments concatenate without separators.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::Rc;
use crate::army::{ArmyComposition, ArmyEntry, HeroLoadout, LinkIssue};
use crate::entities::hero::{EquipmentRecord, Hero, HeroRecord};
use crate::entities::leveled::{LevelSource, LeveledUnit};
use crate::entities::spell::SpellRecord;
use crate::entities::support::PetRecord;
use crate::entities::troop::TroopRecord;
use crate::error::UnresolvedReference;
use crate::game_types::{EntityId, EntityKind};
use crate::static_data::{Catalog, Holder};

static SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"h(?P<heroes>[0-9mpe_\-]+)|i(?P<castle_troops>[0-9x\-]+)|d(?P<castle_spells>[0-9x\-]+)|u(?P<troops>[0-9x\-]+)|s(?P<spells>[0-9x\-]+)",
    )
    .unwrap()
});

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)x([0-9]+)$").unwrap());

static HERO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<hero>[0-9]+)(?:m(?P<mode>[0-9]+))?(?:p(?P<pet>[0-9]+))?(?:e(?P<eq1>[0-9]+)(?:_(?P<eq2>[0-9]+))?)?$",
    )
    .unwrap()
});

/// Parses an army link (bare payload or full share URL) against the catalog.
pub fn parse_army_link(link: &str, catalog: &Catalog) -> ArmyComposition {
    parse_army_link_with(link, catalog, |_| {})
}

/// Like [`parse_army_link`], reporting every dropped token and placeholder
/// substitution to `on_issue`.
pub fn parse_army_link_with<'a>(
    link: &'a str,
    catalog: &Catalog,
    mut on_issue: impl FnMut(LinkIssue<'a>),
) -> ArmyComposition {
    let payload = army_payload(link);
    let mut composition = ArmyComposition::default();

    for segment in SEGMENTS.captures_iter(payload) {
        if let Some(body) = segment.name("heroes") {
            parse_heroes(body.as_str(), catalog, &mut composition.heroes, &mut on_issue);
        } else if let Some(body) = segment.name("troops") {
            parse_quantities(
                body.as_str(),
                'u',
                EntityKind::Troop,
                &catalog.troops,
                TroopRecord::placeholder,
                &mut composition.troops,
                &mut on_issue,
            );
        } else if let Some(body) = segment.name("spells") {
            parse_quantities(
                body.as_str(),
                's',
                EntityKind::Spell,
                &catalog.spells,
                SpellRecord::placeholder,
                &mut composition.spells,
                &mut on_issue,
            );
        } else if let Some(body) = segment.name("castle_troops") {
            parse_quantities(
                body.as_str(),
                'i',
                EntityKind::Troop,
                &catalog.troops,
                TroopRecord::placeholder,
                &mut composition.castle_troops,
                &mut on_issue,
            );
        } else if let Some(body) = segment.name("castle_spells") {
            parse_quantities(
                body.as_str(),
                'd',
                EntityKind::Spell,
                &catalog.spells,
                SpellRecord::placeholder,
                &mut composition.castle_spells,
                &mut on_issue,
            );
        }
    }
    composition
}

/// Extracts the `army=` value from a share URL; a string without one is
/// treated as a bare payload.
fn army_payload(link: &str) -> &str {
    match link.split_once("army=") {
        Some((_, value)) => value.split(['&', '#']).next().unwrap_or(value),
        None => link,
    }
}

fn parse_quantities<'a, R: LevelSource>(
    body: &'a str,
    segment: char,
    kind: EntityKind,
    holder: &Holder<R>,
    placeholder: impl Fn(EntityId) -> R,
    out: &mut Vec<ArmyEntry<LeveledUnit<R>>>,
    on_issue: &mut impl FnMut(LinkIssue<'a>),
) {
    for token in body.split('-') {
        let parsed = QUANTITY.captures(token).and_then(|caps| {
            let quantity: u32 = caps[1].parse().ok()?;
            let index: u32 = caps[2].parse().ok()?;
            Some((quantity, index))
        });
        let Some((quantity, index)) = parsed else {
            // Trailing separators leave empty tokens; those are expected
            // and not worth reporting.
            if !token.is_empty() {
                debug!(segment = %segment, token, "dropping malformed link token");
                on_issue(LinkIssue::DroppedToken { segment, token });
            }
            continue;
        };
        let unit = resolve(kind, index, holder, &placeholder, on_issue);
        out.push(ArmyEntry { unit, quantity });
    }
}

fn parse_heroes<'a>(
    body: &'a str,
    catalog: &Catalog,
    out: &mut Vec<HeroLoadout>,
    on_issue: &mut impl FnMut(LinkIssue<'a>),
) {
    for token in body.split('-') {
        // Full-match or nothing: partially-matching garbage is dropped, and
        // the `m` mode suffix is consumed but carries nothing we keep.
        let entry = HERO.captures(token).and_then(|caps| {
            let index: u32 = caps["hero"].parse().ok()?;
            let pet = caps.name("pet").and_then(|m| m.as_str().parse::<u32>().ok());
            let eq1 = caps.name("eq1").and_then(|m| m.as_str().parse::<u32>().ok());
            let eq2 = caps.name("eq2").and_then(|m| m.as_str().parse::<u32>().ok());
            Some((index, pet, eq1, eq2))
        });
        let Some((index, pet_index, eq1, eq2)) = entry else {
            if !token.is_empty() {
                debug!(token, "dropping malformed hero token");
                on_issue(LinkIssue::DroppedToken { segment: 'h', token });
            }
            continue;
        };

        let mut hero = Hero::new(resolve(
            EntityKind::Hero,
            index,
            &catalog.heroes,
            &HeroRecord::placeholder,
            on_issue,
        ));
        for slot in [eq1, eq2].into_iter().flatten() {
            let equipment = resolve(
                EntityKind::Equipment,
                slot,
                &catalog.equipment,
                &EquipmentRecord::placeholder,
                on_issue,
            );
            // The suffix grammar caps at two pieces, matching the slot limit.
            let _ = hero.attach_equipment(equipment);
        }
        let pet = pet_index.map(|index| {
            resolve(
                EntityKind::Pet,
                index,
                &catalog.pets,
                &PetRecord::placeholder,
                on_issue,
            )
        });
        out.push(HeroLoadout { hero, pet });
    }
}

/// Offsets `index` into its category's id range and looks it up, producing
/// the category placeholder instead of failing when the catalog has no such
/// record.
fn resolve<'a, R: LevelSource>(
    kind: EntityKind,
    index: u32,
    holder: &Holder<R>,
    placeholder: &impl Fn(EntityId) -> R,
    on_issue: &mut impl FnMut(LinkIssue<'a>),
) -> LeveledUnit<R> {
    let id = kind.id_for(index);
    match holder.find_by_id(id) {
        Some(record) => LeveledUnit::new_clamped(record, 1),
        None => {
            let issue = UnresolvedReference::UnknownId { kind, id: id.raw() };
            debug!(%issue, "substituting the category placeholder");
            on_issue(LinkIssue::Unresolved(issue));
            LeveledUnit::new_clamped(Rc::new(placeholder(id)), 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::leveled::CombatStats;
    use crate::game_types::{Resource, TimeSpan, Village};
    use crate::recognized::Recognized;
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
                        .dps(tier as u32 * 10)
                        .build()
                })
                .collect(),
        )
    }

    fn meta(kind: EntityKind, index: u32, name: &str) -> EntityMeta {
        EntityMeta {
            id: kind.id_for(index),
            kind,
            name: name.to_string(),
            village: Village::Home,
        }
    }

    fn catalog() -> Catalog {
        let troops = vec![
            TroopRecord::builder()
                .meta(meta(EntityKind::Troop, 0, "Barbarian"))
                .levels(tiers(3))
                .build(),
            TroopRecord::builder()
                .meta(meta(EntityKind::Troop, 1, "Archer"))
                .levels(tiers(3))
                .build(),
        ];
        let spells = vec![
            SpellRecord::builder()
                .meta(meta(EntityKind::Spell, 0, "Lightning Spell"))
                .levels(tiers(2))
                .build(),
        ];
        let heroes = vec![
            HeroRecord::builder()
                .meta(meta(EntityKind::Hero, 0, "Barbarian King"))
                .levels(tiers(5))
                .build(),
        ];
        let pets = vec![
            PetRecord::builder()
                .meta(meta(EntityKind::Pet, 0, "L.A.S.S.I"))
                .levels(tiers(2))
                .build(),
        ];
        let equipment = vec![
            EquipmentRecord::builder()
                .meta(meta(EntityKind::Equipment, 0, "Barbarian Puppet"))
                .levels(tiers(2))
                .rarity(Recognized::Known(crate::game_types::Rarity::Common))
                .build(),
            EquipmentRecord::builder()
                .meta(meta(EntityKind::Equipment, 1, "Rage Vial"))
                .levels(tiers(2))
                .rarity(Recognized::Known(crate::game_types::Rarity::Common))
                .build(),
        ];
        Catalog {
            troops: Holder::new(troops),
            spells: Holder::new(spells),
            heroes: Holder::new(heroes),
            pets: Holder::new(pets),
            equipment: Holder::new(equipment),
            ..Catalog::default()
        }
    }

    #[test]
    fn quantity_pairs_keep_file_order() {
        let army = parse_army_link("u5x0-3x1", &catalog());
        let pairs: Vec<(u32, &str)> = army
            .troops
            .iter()
            .map(|entry| (entry.quantity, entry.unit.name()))
            .collect();
        assert_eq!(pairs, vec![(5, "Barbarian"), (3, "Archer")]);
    }

    #[test]
    fn every_produced_unit_is_level_one() {
        let army = parse_army_link("u5x0s1x0", &catalog());
        assert!(army.troops.iter().all(|e| e.unit.level() == 1));
        assert!(army.spells.iter().all(|e| e.unit.level() == 1));
    }

    #[test]
    fn segments_come_in_any_order_or_not_at_all() {
        let forward = parse_army_link("u2x0s1x0", &catalog());
        let reversed = parse_army_link("s1x0u2x0", &catalog());
        assert_eq!(forward.troops.len(), reversed.troops.len());
        assert_eq!(forward.spells.len(), reversed.spells.len());
        assert!(forward.heroes.is_empty());
        assert!(parse_army_link("", &catalog()).is_empty());
    }

    #[test]
    fn castle_segments_are_separate_collections() {
        let army = parse_army_link("i1x0d1x0", &catalog());
        assert_eq!(army.castle_troops.len(), 1);
        assert_eq!(army.castle_spells.len(), 1);
        assert!(army.troops.is_empty());
        assert!(army.spells.is_empty());
    }

    #[test]
    fn hero_entry_with_pet_and_both_equipment_slots() {
        let army = parse_army_link("h0p0e0_1", &catalog());
        assert_eq!(army.heroes.len(), 1);
        let loadout = &army.heroes[0];
        assert_eq!(loadout.hero.name(), "Barbarian King");
        assert_eq!(
            loadout.pet.as_ref().map(|p| p.name()),
            Some("L.A.S.S.I")
        );
        let names: Vec<&str> = loadout.hero.equipment().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Barbarian Puppet", "Rage Vial"]);
    }

    #[test]
    fn single_equipment_slot_is_valid() {
        let army = parse_army_link("h0e1", &catalog());
        assert_eq!(army.heroes[0].hero.equipment().len(), 1);
        assert!(army.heroes[0].pet.is_none());
    }

    #[test]
    fn mode_suffix_is_parsed_and_ignored() {
        let army = parse_army_link("h0m2p0", &catalog());
        assert_eq!(army.heroes.len(), 1);
        assert!(army.heroes[0].pet.is_some());
    }

    #[test]
    fn unknown_index_substitutes_the_placeholder() {
        let mut issues = Vec::new();
        let army = parse_army_link_with("u3x9", &catalog(), |issue| issues.push(issue));
        assert_eq!(army.troops.len(), 1);
        assert_eq!(army.troops[0].unit.name(), "Unknown");
        assert_eq!(army.troops[0].quantity, 3);
        assert_eq!(
            issues,
            vec![LinkIssue::Unresolved(UnresolvedReference::UnknownId {
                kind: EntityKind::Troop,
                id: EntityKind::Troop.base_id() + 9,
            })]
        );
        // Placeholder stats are a single free tier.
        assert_eq!(army.troops[0].unit.dps(), None);
    }

    #[test]
    fn malformed_tokens_are_skipped_and_reported() {
        let mut issues = Vec::new();
        let army = parse_army_link_with("u5x0-17-3x1", &catalog(), |issue| issues.push(issue));
        assert_eq!(army.troops.len(), 2);
        assert_eq!(
            issues,
            vec![LinkIssue::DroppedToken {
                segment: 'u',
                token: "17"
            }]
        );
    }

    #[test]
    fn foreign_characters_end_the_segment() {
        // 'b' is outside the segment body class, so the segment stops at
        // "5x0-" and the rest of the string matches nothing.
        let mut issues = Vec::new();
        let army = parse_army_link_with("u5x0-banana-3x1", &catalog(), |issue| issues.push(issue));
        assert_eq!(army.troops.len(), 1);
        assert_eq!(army.troops[0].quantity, 5);
        assert!(issues.is_empty());
    }

    #[test]
    fn share_urls_are_accepted() {
        let url = "https://link.clashofclans.com/en?action=CopyArmy&army=u5x0-3x1&tag=123";
        let army = parse_army_link(url, &catalog());
        assert_eq!(army.troops.len(), 2);
        assert_eq!(army.troops[0].quantity, 5);
    }
}
