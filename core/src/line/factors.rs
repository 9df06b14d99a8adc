use serde::{Deserialize, Serialize};

/// Baseline traffic weights observed on the reference line, one per hour
/// of day. Shared by every station; the per-station factors shape on top.
const BASE_FACTORS: [f64; 24] = [
    0.01, 0.01, 0.01, 0.01, 0.01, 0.05, // 00:00 - 05:00
    0.10, 0.30, 0.50, 0.30, 0.20, 0.15, // 06:00 - 11:00
    0.20, 0.20, 0.15, 0.20, 0.30, 0.50, // 12:00 - 17:00
    0.40, 0.30, 0.20, 0.10, 0.05, 0.02, // 18:00 - 23:00
];

/// Diurnal traffic shape: 24 fixed weights, one per hour of day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyFactors(pub [f64; 24]);

impl HourlyFactors {
    pub fn weight(&self, hour: u8) -> f64 {
        self.0[(hour % 24) as usize]
    }

    /// Sum of all 24 weights, used to scale a daily flow down to one hour.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for HourlyFactors {
    fn default() -> Self {
        Self(BASE_FACTORS)
    }
}
