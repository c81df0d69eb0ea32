//! Army share-link parsing: the compact string the game client exports
//! (`h0p0e0_1-u2x0s1x0`, or a full share URL carrying it in `army=`) into a
//! typed composition.
//!
//! Parsing is infallible and permissive on purpose: a malformed token or an
//! index the catalog does not know never invalidates the rest of the link.
//! Dropped tokens and placeholder substitutions are logged and, via
//! [`parse_army_link_with`], surfaced to an optional diagnostics callback.

pub mod parser;

pub use parser::{parse_army_link, parse_army_link_with};

use crate::entities::hero::Hero;
use crate::entities::spell::Spell;
use crate::entities::support::Pet;
use crate::entities::troop::Troop;
use crate::error::UnresolvedReference;

/// A quantity of one unit, as listed in a link segment.
#[derive(Debug, Clone)]
pub struct ArmyEntry<T> {
    pub unit: T,
    pub quantity: u32,
}

/// One hero slot: the hero plus its optional pet. Equipment rides on the
/// [`Hero`] itself.
#[derive(Debug, Clone)]
pub struct HeroLoadout {
    pub hero: Hero,
    pub pet: Option<Pet>,
}

/// Everything a share link describes. Segments absent from the link leave
/// their collection empty. All units are level 1: the format carries no
/// level information.
#[derive(Debug, Clone, Default)]
pub struct ArmyComposition {
    pub heroes: Vec<HeroLoadout>,
    pub troops: Vec<ArmyEntry<Troop>>,
    pub spells: Vec<ArmyEntry<Spell>>,
    /// Clan-castle troops (`i` segment).
    pub castle_troops: Vec<ArmyEntry<Troop>>,
    /// Clan-castle spells (`d` segment).
    pub castle_spells: Vec<ArmyEntry<Spell>>,
}

impl ArmyComposition {
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
            && self.troops.is_empty()
            && self.spells.is_empty()
            && self.castle_troops.is_empty()
            && self.castle_spells.is_empty()
    }
}

/// A non-fatal problem found while parsing a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue<'a> {
    /// A token failed the segment grammar and was skipped.
    DroppedToken { segment: char, token: &'a str },
    /// An index had no record in the catalog; a placeholder was substituted.
    Unresolved(UnresolvedReference),
}
