use crate::line::{HourlyFactors, LineDescriptor, StationProfile};
use rand::Rng;

/// Extra multiplier applied when the hour is in a station's peak set.
pub const PEAK_BOOST: f64 = 1.5;

/// Uniform jitter band applied to every expected count, ±15%.
pub const JITTER_MIN: f64 = 0.85;
pub const JITTER_MAX: f64 = 1.15;

/// Expected passengers for one station at `hour`, before jitter.
///
/// Adjustments compose multiplicatively in a fixed order: base hourly
/// weight, morning factor for hours 6-9, evening factor for hours 16-19,
/// then the peak-hour boost. The result is the station's daily flow scaled
/// by the adjusted weight over the sum of all 24 base weights.
pub fn expected_count(hour: u8, profile: &StationProfile, factors: &HourlyFactors) -> f64 {
    let mut weight = factors.weight(hour);
    if (6..=9).contains(&hour) {
        weight *= profile.morning_factor;
    }
    if (16..=19).contains(&hour) {
        weight *= profile.evening_factor;
    }
    if profile.peak_hours.contains(&hour) {
        weight *= PEAK_BOOST;
    }
    profile.daily_flow * weight / factors.total()
}

/// Synthesize one hour of passenger counts, one entry per station in
/// profile-table order. Pure apart from the injected random source, so a
/// seeded generator reproduces the same counts.
pub fn generate<R: Rng>(hour: u8, line: &LineDescriptor, rng: &mut R) -> Vec<u32> {
    line.stations
        .iter()
        .map(|profile| {
            let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
            (expected_count(hour, profile, &line.factors) * jitter).round() as u32
        })
        .collect()
}
