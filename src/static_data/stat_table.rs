//! 1-indexed per-level stat columns.

use crate::error::{Error, Result};

/// An ordered column of per-level values for one entity, indexed by unlock
/// tier starting at 1.
///
/// Indexing outside `[1, len]` is a hard error, never a clamp or a default:
/// silently returning wrong stats is worse than a loud failure, and the
/// lenient paths that do want clamping live on the leveled-entity layer, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitStat<T> {
    values: Vec<T>,
}

impl<T> UnitStat<T> {
    pub fn new(values: Vec<T>) -> Self {
        UnitStat { values }
    }

    /// Value at the 1-indexed `level`.
    pub fn get(&self, level: usize) -> Result<&T> {
        if level >= 1 && level <= self.values.len() {
            Ok(&self.values[level - 1])
        } else {
            Err(Error::StatOutOfRange {
                level,
                len: self.values.len(),
            })
        }
    }

    /// Number of unlock tiers in this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_level(&self) -> u32 {
        self.values.len() as u32
    }

    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> FromIterator<T> for UnitStat<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        UnitStat {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a UnitStat<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
