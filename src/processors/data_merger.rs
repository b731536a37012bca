use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{MergedDataset, MergedRow, PositionRecord, TimestampKey, WeatherRecord};

/// Records that can be indexed by timestamp key
pub trait Keyed {
    fn key(&self) -> TimestampKey;
}

impl Keyed for WeatherRecord {
    fn key(&self) -> TimestampKey {
        self.key
    }
}

impl Keyed for PositionRecord {
    fn key(&self) -> TimestampKey {
        self.key
    }
}

/// Result of a merge, with the number of duplicate keys dropped per series
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub dataset: MergedDataset,
    pub weather_duplicates: usize,
    pub position_duplicates: usize,
}

pub struct DataMerger;

impl DataMerger {
    pub fn new() -> Self {
        Self
    }

    /// Outer-join weather and position records on their timestamp key
    pub fn merge(&self, weather: &[WeatherRecord], positions: &[PositionRecord]) -> MergeOutcome {
        let (weather_index, weather_duplicates) = self.index_first(weather);
        let (position_index, position_duplicates) = self.index_first(positions);

        let keys: BTreeSet<TimestampKey> = weather_index
            .keys()
            .chain(position_index.keys())
            .copied()
            .collect();

        let rows = keys
            .into_iter()
            .map(|key| {
                let row = MergedRow::from_parts(
                    weather_index.get(&key).copied(),
                    position_index.get(&key).copied(),
                );
                (key, row)
            })
            .collect();

        MergeOutcome {
            dataset: MergedDataset::from_rows(rows),
            weather_duplicates,
            position_duplicates,
        }
    }

    /// Index records by key; the first record for a key wins
    pub fn index_first<'a, T: Keyed>(
        &self,
        records: &'a [T],
    ) -> (BTreeMap<TimestampKey, &'a T>, usize) {
        let mut index = BTreeMap::new();
        let mut duplicates = 0;

        for record in records {
            match index.entry(record.key()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }

        (index, duplicates)
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}
