use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One retained history sample for a station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub hour: u8,
    pub passengers: u32,
}

/// Per-station slice of a tick snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationSnapshot {
    pub name: String,
    pub passengers: u32,
    /// Window-filtered history, chronological, at most 24 entries.
    pub history: Vec<HistoryEntry>,
}

/// Complete payload broadcast to a viewer once per simulated hour.
/// Transient: composed, serialized, and discarded every tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickSnapshot {
    /// ISO 8601 calendar date of the simulated day.
    pub date: NaiveDate,
    pub hour: u8,
    pub stations: Vec<StationSnapshot>,
    #[serde(rename = "totalLine")]
    pub total_line: u32,
    pub alerts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TickSnapshot {
        TickSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            hour: 8,
            stations: vec![StationSnapshot {
                name: "La Cisterna".to_string(),
                passengers: 41_000,
                history: vec![HistoryEntry {
                    hour: 7,
                    passengers: 38_500,
                }],
            }],
            total_line: 41_000,
            alerts: vec!["High congestion at La Cisterna: 41000 passengers".to_string()],
        }
    }

    #[test]
    fn snapshot_serializes_with_protocol_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["hour"], 8);
        assert_eq!(value["totalLine"], 41_000);
        assert_eq!(value["stations"][0]["name"], "La Cisterna");
        assert_eq!(value["stations"][0]["history"][0]["hour"], 7);
        assert_eq!(value["alerts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: TickSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
