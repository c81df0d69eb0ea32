//! Read-only indexed containers of one category's static records.

use std::collections::HashMap;

use tracing::warn;

use crate::Rc;
use crate::game_types::{EntityId, Village};
use crate::static_data::CatalogEntry;

/// One category's records, indexed by id and by `(name, village)`.
///
/// Built once by the loader and never mutated afterwards, so it can be read
/// from any number of threads without locking (with the `arc` feature the
/// `Rc` alias is `Arc`). Absent ids and names are `None`, never an error:
/// absence is routine when hydrating accounts against an older data dump.
#[derive(Debug)]
pub struct Holder<R> {
    records: Vec<Rc<R>>,
    by_id: HashMap<EntityId, Rc<R>>,
    by_name: HashMap<Village, HashMap<String, Rc<R>>>,
}

impl<R: CatalogEntry> Holder<R> {
    /// Indexes `records` in order. A record whose id is already taken is
    /// dropped entirely (first record wins) so that id and name lookups can
    /// never disagree with [`Holder::all`].
    pub fn new(records: Vec<R>) -> Self {
        let mut kept: Vec<Rc<R>> = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_name: HashMap<Village, HashMap<String, Rc<R>>> = HashMap::new();

        for record in records {
            let record = Rc::new(record);
            if by_id.contains_key(&record.id()) {
                warn!(
                    id = %record.id(),
                    name = record.name(),
                    "duplicate id in static data, keeping the first record"
                );
                continue;
            }
            by_id.insert(record.id(), record.clone());

            let names = by_name.entry(record.village()).or_default();
            if names.contains_key(record.name()) {
                warn!(
                    name = record.name(),
                    village = %record.village(),
                    "duplicate name in static data, name lookup keeps the first record"
                );
            } else {
                names.insert(record.name().to_string(), record.clone());
            }
            kept.push(record);
        }

        Holder {
            records: kept,
            by_id,
            by_name,
        }
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Rc<R>> {
        self.by_id.get(&id).cloned()
    }

    pub fn find_by_name(&self, name: &str, village: Village) -> Option<Rc<R>> {
        self.by_name.get(&village)?.get(name).cloned()
    }

    /// Every record, in load order.
    pub fn all(&self) -> &[Rc<R>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for Holder<R> {
    fn default() -> Self {
        Holder {
            records: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<R: CatalogEntry> From<Vec<R>> for Holder<R> {
    fn from(records: Vec<R>) -> Self {
        Holder::new(records)
    }
}
