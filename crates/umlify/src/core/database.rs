//! Core database trait for the structural model
//!
//! A database owns every record produced by one extraction run, keyed by
//! declared type name and iterated in first-appearance order.

/// Core trait for structural model storage
///
/// Each record is owned exclusively by the database. Inserting a record
/// under a name that is already present replaces the previous record.
pub trait Database: Send + Sync {
    /// The record type stored per declared name
    type Record: Clone + Send + Sync;

    /// Insert a record, returning the record it replaced (if any)
    fn insert_record(&mut self, name: &str, record: Self::Record) -> Option<Self::Record>;

    /// Iterate over all records in insertion order
    fn records(&self) -> impl Iterator<Item = (&str, &Self::Record)>;

    /// Get the number of records
    fn record_count(&self) -> usize;
}
