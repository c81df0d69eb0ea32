//! Raw table access: the data-file source abstraction and the CSV dialect
//! the static dumps are written in.
//!
//! Dialect: row 1 is column names, row 2 is declared column types (kept for
//! humans, ignored here). Data rows group by entity: a non-empty `Name` cell
//! starts a new entity, following rows with an empty `Name` are its higher
//! tiers. Empty cells mean "unchanged since the previous tier" and are
//! forward-filled per column within the entity, never across entities.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Source of raw static-data files, keyed by file name (`troops.csv`,
/// `ids.json`, ...). `Ok(None)` means the dump does not carry that file,
/// which loaders treat as an empty category rather than a failure.
pub trait TableSource {
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>>;
}

/// Reads data files from a directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSource { root: root.into() }
    }
}

impl TableSource for DirSource {
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>> {
        match fs::read(self.root.join(name)) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Adapts a closure into a [`TableSource`], for callers that keep their data
/// files somewhere unusual (archives, embedded assets, tests).
pub struct SourceWithCallback<F> {
    callback: F,
}

impl<F> SourceWithCallback<F>
where
    F: Fn(&str) -> Result<Option<Cow<'static, [u8]>>>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> TableSource for SourceWithCallback<F>
where
    F: Fn(&str) -> Result<Option<Cow<'static, [u8]>>>,
{
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>> {
        (self.callback)(name)
    }
}

// =============================================================================
// CSV dialect
// =============================================================================

/// One parsed category table: shared column index plus entity row groups,
/// forward-fill already applied.
#[derive(Debug, Clone)]
pub struct RawTable {
    name: String,
    columns: HashMap<String, usize>,
    groups: Vec<EntityGroup>,
}

#[derive(Debug, Clone)]
struct EntityGroup {
    name: String,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn parse(name: impl Into<String>, bytes: &[u8]) -> Result<RawTable> {
        let name = name.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(Error::malformed(&name, "-", "missing column-name header row")),
        };
        let mut columns = HashMap::with_capacity(header.len());
        for (i, column) in header.iter().enumerate() {
            // First occurrence wins on duplicate column names.
            columns.entry(column.to_string()).or_insert(i);
        }
        let name_idx = *columns
            .get("Name")
            .ok_or_else(|| Error::malformed(&name, "-", "table has no `Name` column"))?;

        if records.next().transpose()?.is_none() {
            return Err(Error::malformed(&name, "-", "missing column-type header row"));
        }

        let width = columns.len().max(header.len());
        let mut groups: Vec<EntityGroup> = Vec::new();
        for record in records {
            let record = record?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(width, String::new());

            if !cells[name_idx].is_empty() {
                groups.push(EntityGroup {
                    name: cells[name_idx].clone(),
                    rows: vec![cells],
                });
                continue;
            }
            let Some(group) = groups.last_mut() else {
                return Err(Error::malformed(
                    &name,
                    "-",
                    "continuation row before any named row",
                ));
            };
            // Forward-fill from the previous tier of the same entity.
            if let Some(previous) = group.rows.last() {
                for (cell, filled) in cells.iter_mut().zip(previous) {
                    if cell.is_empty() {
                        cell.clone_from(filled);
                    }
                }
            }
            group.rows.push(cells);
        }

        Ok(RawTable {
            name,
            columns,
            groups,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Entity groups in file order.
    pub fn groups(&self) -> impl Iterator<Item = GroupRows<'_>> {
        self.groups.iter().map(|group| GroupRows { table: self, group })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One entity's rows (first row plus its higher tiers).
#[derive(Clone, Copy)]
pub struct GroupRows<'a> {
    table: &'a RawTable,
    group: &'a EntityGroup,
}

impl<'a> GroupRows<'a> {
    pub fn name(self) -> &'a str {
        &self.group.name
    }

    /// The entity's defining row. Groups always have at least one row.
    pub fn first(self) -> RowView<'a> {
        self.row_view(&self.group.rows[0])
    }

    pub fn rows(self) -> impl Iterator<Item = RowView<'a>> {
        self.group.rows.iter().map(move |cells| self.row_view(cells))
    }

    pub fn len(self) -> usize {
        self.group.rows.len()
    }

    fn row_view(self, cells: &'a [String]) -> RowView<'a> {
        RowView {
            table: &self.table.name,
            entity: &self.group.name,
            columns: &self.table.columns,
            cells,
        }
    }
}

/// Typed access to one row's cells. Required getters turn an absent column
/// or empty cell into a fatal malformed-data error carrying the table and
/// entity names; optional getters only reject values that fail to parse.
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    table: &'a str,
    entity: &'a str,
    columns: &'a HashMap<String, usize>,
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    /// Raw cell text, `None` when the column is absent or the cell is empty
    /// (after forward-fill).
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = *self.columns.get(column)?;
        let cell = self.cells.get(idx)?.as_str();
        if cell.is_empty() { None } else { Some(cell) }
    }

    pub fn req_str(&self, column: &str) -> Result<&'a str> {
        self.get(column).ok_or_else(|| {
            Error::malformed(
                self.table,
                self.entity,
                format!("missing required column `{column}`"),
            )
        })
    }

    pub fn req_u32(&self, column: &str) -> Result<u32> {
        self.parse(column, self.req_str(column)?)
    }

    pub fn req_u64(&self, column: &str) -> Result<u64> {
        self.parse(column, self.req_str(column)?)
    }

    pub fn req_f64(&self, column: &str) -> Result<f64> {
        self.parse(column, self.req_str(column)?)
    }

    pub fn opt_u32(&self, column: &str) -> Result<Option<u32>> {
        self.get(column).map(|v| self.parse(column, v)).transpose()
    }

    pub fn opt_u64(&self, column: &str) -> Result<Option<u64>> {
        self.get(column).map(|v| self.parse(column, v)).transpose()
    }

    pub fn opt_f64(&self, column: &str) -> Result<Option<f64>> {
        self.get(column).map(|v| self.parse(column, v)).transpose()
    }

    /// Boolean flag column; absent or empty means `false`.
    pub fn flag(&self, column: &str) -> Result<bool> {
        match self.get(column) {
            None => Ok(false),
            Some("true") | Some("TRUE") | Some("True") | Some("1") => Ok(true),
            Some("false") | Some("FALSE") | Some("False") | Some("0") => Ok(false),
            Some(other) => Err(Error::malformed(
                self.table,
                self.entity,
                format!("column `{column}`: `{other}` is not a boolean"),
            )),
        }
    }

    fn parse<T: FromStr>(&self, column: &str, value: &str) -> Result<T> {
        value.parse().map_err(|_| {
            Error::malformed(
                self.table,
                self.entity,
                format!("column `{column}`: cannot parse `{value}` as a number"),
            )
        })
    }
}
