//! Declared-column serialisation for persisted entities.
//!
//! Each entity lists its table columns explicitly through [`Record::columns`]
//! instead of reflecting over schema metadata at runtime. [`Record::as_dict`]
//! turns that list into a JSON object and hides every column whose name
//! contains `_id`, so foreign keys never leak into the generic view.
//! Entities with relationships override `as_dict` to nest related records.

use serde_json::{Map, Value};

/// Plain key-value view of an entity, as produced by [`Record::as_dict`].
pub type RecordMap = Map<String, Value>;

/// Substring marking a column as a foreign key for [`Record::as_dict`].
pub const FOREIGN_KEY_MARKER: &str = "_id";

/// An entity backed by a row of a relational table.
pub trait Record {
    /// Table the entity is persisted in.
    const TABLE: &'static str;

    /// Ordered `(column, value)` pairs for every column of the table.
    fn columns(&self) -> Vec<(&'static str, Value)>;

    /// Column values keyed by column name, excluding foreign-key columns.
    fn as_dict(&self) -> RecordMap {
        base_dict(self.columns())
    }
}

/// Build the generic mapping from declared columns.
///
/// Shared by the default [`Record::as_dict`] and by overrides that extend it.
pub fn base_dict(columns: Vec<(&'static str, Value)>) -> RecordMap {
    columns
        .into_iter()
        .filter(|(name, _)| !name.contains(FOREIGN_KEY_MARKER))
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}
