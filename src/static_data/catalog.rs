//! The loaded static-data set: one holder per category plus the data-version
//! fingerprint.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entities::building::{BuildingRecord, SeasonalModuleRecord};
use crate::entities::cosmetics::{
    DecorationRecord, HousePartRecord, ObstacleRecord, SceneryRecord, SkinRecord,
};
use crate::entities::hero::{EquipmentRecord, HeroRecord};
use crate::entities::spell::SpellRecord;
use crate::entities::support::{GuardianRecord, HelperRecord, PetRecord};
use crate::entities::trap::TrapRecord;
use crate::entities::troop::TroopRecord;
use crate::error::Result;
use crate::static_data::holder::Holder;
use crate::static_data::loader::{self, IdMap};
use crate::static_data::table::{DirSource, RawTable, TableSource};

/// Identifies the static-data build a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub sha: String,
    pub version: String,
}

/// Every category's records, loaded once and read-only afterwards.
///
/// A catalog is safe to share across threads behind the `arc` feature since
/// nothing is mutated after `load` returns. Refreshing static data means
/// loading a brand-new catalog and swapping the shared handle; there is
/// deliberately no way to mutate holders in place, so readers can never see
/// a half-updated table.
#[derive(Debug, Default)]
pub struct Catalog {
    pub fingerprint: Option<Fingerprint>,
    pub troops: Holder<TroopRecord>,
    pub spells: Holder<SpellRecord>,
    pub heroes: Holder<HeroRecord>,
    pub pets: Holder<PetRecord>,
    pub equipment: Holder<EquipmentRecord>,
    pub buildings: Holder<BuildingRecord>,
    pub traps: Holder<TrapRecord>,
    pub decorations: Holder<DecorationRecord>,
    pub obstacles: Holder<ObstacleRecord>,
    pub sceneries: Holder<SceneryRecord>,
    pub skins: Holder<SkinRecord>,
    pub house_parts: Holder<HousePartRecord>,
    pub guardians: Holder<GuardianRecord>,
    pub helpers: Holder<HelperRecord>,
    pub seasonal_modules: Holder<SeasonalModuleRecord>,
}

impl Catalog {
    /// Loads every category from `source`. A missing table leaves that
    /// category empty with a warning (older dumps predate some categories);
    /// a malformed table fails the whole load.
    pub fn load(source: &impl TableSource) -> Result<Catalog> {
        let ids = match source.read("ids.json")? {
            Some(bytes) => IdMap::parse(&bytes)?,
            None => {
                warn!("no ids.json in this dump, every id will be base + ordinal");
                IdMap::default()
            }
        };
        let fingerprint: Option<Fingerprint> = match source.read("fingerprint.json")? {
            Some(bytes) => Some(serde_json::from_slice(bytes.as_ref())?),
            None => None,
        };
        if let Some(fp) = &fingerprint {
            debug!(version = %fp.version, sha = %fp.sha, "loading static data");
        }

        let mut troops = load_category(source, "troops.csv", &ids, loader::build_troops)?;
        if let Some(supers) = read_table(source, "supers.csv")? {
            loader::bind_super_troops(&mut troops, &supers)?;
        }
        let mut buildings = load_category(source, "buildings.csv", &ids, loader::build_buildings)?;
        if let Some(charges) = read_table(source, "supercharges.csv")? {
            loader::bind_supercharges(&mut buildings, &charges)?;
        }

        Ok(Catalog {
            fingerprint,
            troops: Holder::new(troops),
            spells: Holder::new(load_category(source, "spells.csv", &ids, loader::build_spells)?),
            heroes: Holder::new(load_category(source, "heroes.csv", &ids, loader::build_heroes)?),
            pets: Holder::new(load_category(source, "pets.csv", &ids, loader::build_pets)?),
            equipment: Holder::new(load_category(
                source,
                "equipment.csv",
                &ids,
                loader::build_equipment,
            )?),
            buildings: Holder::new(buildings),
            traps: Holder::new(load_category(source, "traps.csv", &ids, loader::build_traps)?),
            decorations: Holder::new(load_category(
                source,
                "decorations.csv",
                &ids,
                loader::build_decorations,
            )?),
            obstacles: Holder::new(load_category(
                source,
                "obstacles.csv",
                &ids,
                loader::build_obstacles,
            )?),
            sceneries: Holder::new(load_category(
                source,
                "sceneries.csv",
                &ids,
                loader::build_sceneries,
            )?),
            skins: Holder::new(load_category(source, "skins.csv", &ids, loader::build_skins)?),
            house_parts: Holder::new(load_category(
                source,
                "house_parts.csv",
                &ids,
                loader::build_house_parts,
            )?),
            guardians: Holder::new(load_category(
                source,
                "guardians.csv",
                &ids,
                loader::build_guardians,
            )?),
            helpers: Holder::new(load_category(
                source,
                "helpers.csv",
                &ids,
                loader::build_helpers,
            )?),
            seasonal_modules: Holder::new(load_category(
                source,
                "seasonal_modules.csv",
                &ids,
                loader::build_seasonal_modules,
            )?),
        })
    }

    /// Loads from a directory of data files.
    pub fn load_dir(path: impl AsRef<Path>) -> Result<Catalog> {
        Catalog::load(&DirSource::new(path.as_ref()))
    }
}

fn read_table(source: &impl TableSource, name: &str) -> Result<Option<RawTable>> {
    match source.read(name)? {
        Some(bytes) => Ok(Some(RawTable::parse(name, &bytes)?)),
        None => Ok(None),
    }
}

fn load_category<R>(
    source: &impl TableSource,
    name: &str,
    ids: &IdMap,
    build: impl Fn(&RawTable, &IdMap) -> Result<Vec<R>>,
) -> Result<Vec<R>> {
    match read_table(source, name)? {
        Some(table) => build(&table, ids),
        None => {
            warn!(table = name, "table missing from dump, category will be empty");
            Ok(Vec::new())
        }
    }
}
