use crate::prelude::in_operating_window;
use crate::wire::snapshot::HistoryEntry;
use std::collections::VecDeque;

/// Hours of history retained per station.
pub const HISTORY_CAPACITY: usize = 24;

/// Rolling per-station window of (hour, passengers) samples, oldest first.
/// One fixed-capacity ring per station, aligned with profile-table order.
pub struct HistoryStore {
    rings: Vec<VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new(station_count: usize) -> Self {
        Self {
            rings: vec![VecDeque::with_capacity(HISTORY_CAPACITY); station_count],
        }
    }

    /// Record one sample, evicting the oldest entry once the ring is full.
    pub fn append(&mut self, station: usize, hour: u8, passengers: u32) {
        if let Some(ring) = self.rings.get_mut(station) {
            if ring.len() >= HISTORY_CAPACITY {
                ring.pop_front();
            }
            ring.push_back(HistoryEntry { hour, passengers });
        }
    }

    /// Entries for one station restricted to the operating window,
    /// in append order.
    pub fn snapshot(&self, station: usize) -> Vec<HistoryEntry> {
        self.rings
            .get(station)
            .map(|ring| {
                ring.iter()
                    .filter(|entry| in_operating_window(entry.hour))
                    .copied()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        for ring in &mut self.rings {
            ring.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(VecDeque::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_evicts_oldest_past_capacity() {
        let mut store = HistoryStore::new(1);
        for round in 0..25u32 {
            store.append(0, 6 + (round % 18) as u8, round);
        }
        let entries = store.snapshot(0);
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        // The very first append (passengers == 0) was evicted.
        assert_eq!(entries[0].passengers, 1);
        assert_eq!(entries[HISTORY_CAPACITY - 1].passengers, 24);
    }

    #[test]
    fn snapshot_filters_hours_outside_the_window() {
        let mut store = HistoryStore::new(1);
        store.append(0, 3, 100);
        store.append(0, 6, 200);
        store.append(0, 23, 300);
        let entries = store.snapshot(0);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hour, 6);
        assert_eq!(entries[1].hour, 23);
    }

    #[test]
    fn clear_empties_every_station_ring() {
        let mut store = HistoryStore::new(2);
        store.append(0, 7, 10);
        store.append(1, 7, 20);
        store.clear();
        assert!(store.is_empty());
        assert!(store.snapshot(1).is_empty());
    }

    #[test]
    fn unknown_station_yields_no_entries() {
        let store = HistoryStore::new(1);
        assert!(store.snapshot(5).is_empty());
    }
}
