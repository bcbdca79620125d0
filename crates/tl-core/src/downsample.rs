//! Even reduction of the table to a requested entry count.

use tl_common::CalibrationTable;

/// Reduce `table` to at most `max_values` entries spread evenly across
/// its insertion order.
///
/// For `i` in `[0, N)` the entry at index `ceil(i * len / N)` is kept.
/// Selection deliberately operates on insertion (sampling) order, not on
/// sorted keys; sorting happens only at serialization. `max_values <= 0`
/// or `max_values >= len` returns the table unchanged.
pub fn downsample(table: &CalibrationTable, max_values: i64) -> CalibrationTable {
    let len = table.len();
    if max_values <= 0 || max_values as usize >= len {
        return table.clone();
    }

    let requested = max_values as usize;
    let mut reduced = CalibrationTable::new();
    for i in 0..requested {
        let index = ((i as f64) * (len as f64) / (requested as f64)).ceil() as usize;
        if let Some((key, vector)) = table.entry_at(index) {
            reduced.insert(key, *vector);
        }
    }
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_common::CalibrationVector;

    fn table_of(keys: &[f64]) -> CalibrationTable {
        let mut table = CalibrationTable::new();
        for (i, key) in keys.iter().enumerate() {
            table.insert(*key, CalibrationVector::from_raw([i as f64; 8]));
        }
        table
    }

    #[test]
    fn five_entries_to_two_keeps_indices_zero_and_three() {
        let table = table_of(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let reduced = downsample(&table, 2);

        let keys: Vec<f64> = reduced.keys().collect();
        assert_eq!(keys, vec![10.0, 40.0]);
    }

    #[test]
    fn selection_uses_insertion_order_not_key_order() {
        // Same keys, sampled in descending order: the stride picks
        // different temperatures than it would from a sorted table.
        let table = table_of(&[50.0, 40.0, 30.0, 20.0, 10.0]);
        let reduced = downsample(&table, 2);

        let keys: Vec<f64> = reduced.keys().collect();
        assert_eq!(keys, vec![50.0, 20.0]);
    }

    #[test]
    fn one_entry_requested_keeps_the_first_inserted() {
        let table = table_of(&[30.0, 10.0, 20.0]);
        let reduced = downsample(&table, 1);

        let keys: Vec<f64> = reduced.keys().collect();
        assert_eq!(keys, vec![30.0]);
    }

    #[test]
    fn non_positive_cap_is_identity() {
        let table = table_of(&[10.0, 20.0, 30.0]);
        assert_eq!(downsample(&table, 0), table);
        assert_eq!(downsample(&table, -1), table);
    }

    #[test]
    fn cap_at_or_above_len_is_identity() {
        let table = table_of(&[10.0, 20.0, 30.0]);
        assert_eq!(downsample(&table, 3), table);
        assert_eq!(downsample(&table, 100), table);
    }

    #[test]
    fn empty_table_stays_empty() {
        let table = CalibrationTable::new();
        assert!(downsample(&table, 5).is_empty());
    }

    #[test]
    fn vectors_travel_with_their_keys() {
        let table = table_of(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let reduced = downsample(&table, 2);

        assert_eq!(reduced.get(10.0), table.get(10.0));
        assert_eq!(reduced.get(40.0), table.get(40.0));
    }
}
