//! The in-memory calibration table keyed by board temperature.

use crate::vector::CalibrationVector;

/// Insertion-ordered mapping from temperature key to calibration vector.
///
/// Keys are unique; inserting an equal key overwrites the stored vector in
/// place without moving the entry (last-write-wins, stable position). The
/// downsampler selects over this insertion order, which is sampling order;
/// entries are sorted by key only when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationTable {
    entries: Vec<(f64, CalibrationVector)>,
}

impl CalibrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite the vector for `key`.
    pub fn insert(&mut self, key: f64, vector: CalibrationVector) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = vector,
            None => self.entries.push((key, vector)),
        }
    }

    pub fn get(&self, key: f64) -> Option<&CalibrationVector> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, vector)| vector)
    }

    pub fn contains_key(&self, key: f64) -> bool {
        self.get(key).is_some()
    }

    /// The entry at `index` in insertion order.
    pub fn entry_at(&self, index: usize) -> Option<(f64, &CalibrationVector)> {
        self.entries.get(index).map(|(k, vector)| (*k, vector))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &CalibrationVector)> + '_ {
        self.entries.iter().map(|(k, vector)| (*k, vector))
    }

    /// Entries sorted by key ascending (serialization order).
    pub fn iter_sorted(&self) -> impl Iterator<Item = (f64, &CalibrationVector)> + '_ {
        let mut sorted: Vec<&(f64, CalibrationVector)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        sorted.into_iter().map(|(k, vector)| (*k, vector))
    }
}
