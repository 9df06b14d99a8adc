use crate::line::factors::HourlyFactors;
use crate::prelude::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Static traffic profile for one station; immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationProfile {
    pub name: String,
    /// Average passengers over a full day, before any hourly shaping.
    pub daily_flow: f64,
    /// Station-level congestion threshold, passengers per hour.
    pub alert_threshold: u32,
    pub morning_factor: f64,
    pub evening_factor: f64,
    /// Hours of day (0-23) that get this station's extra peak boost.
    pub peak_hours: Vec<u8>,
}

impl StationProfile {
    pub fn new(
        name: &str,
        daily_flow: f64,
        alert_threshold: u32,
        morning_factor: f64,
        evening_factor: f64,
        peak_hours: &[u8],
    ) -> Self {
        Self {
            name: name.to_string(),
            daily_flow,
            alert_threshold,
            morning_factor,
            evening_factor,
            peak_hours: peak_hours.to_vec(),
        }
    }

    fn validate(&self) -> SimResult<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::InvalidProfile {
                name: "<unnamed>".to_string(),
                reason: "station name is empty".to_string(),
            });
        }
        if self.daily_flow <= 0.0 {
            return Err(SimError::InvalidProfile {
                name: self.name.clone(),
                reason: format!("daily flow {} is not positive", self.daily_flow),
            });
        }
        if let Some(&hour) = self.peak_hours.iter().find(|&&hour| hour > 23) {
            return Err(SimError::InvalidProfile {
                name: self.name.clone(),
                reason: format!("peak hour {} is out of range", hour),
            });
        }
        Ok(())
    }
}

/// The complete static configuration of one simulated line: its stations in
/// presentation order plus the shared diurnal weight table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDescriptor {
    pub name: String,
    pub stations: Vec<StationProfile>,
    #[serde(default)]
    pub factors: HourlyFactors,
}

impl LineDescriptor {
    pub fn validate(&self) -> SimResult<()> {
        if self.stations.is_empty() {
            return Err(SimError::InvalidLine("no stations configured".to_string()));
        }
        for station in &self.stations {
            station.validate()?;
        }
        Ok(())
    }
}

impl Default for LineDescriptor {
    fn default() -> Self {
        line_4a()
    }
}

/// The reference line: the six stations of Línea 4A with their observed
/// daily flows, alert thresholds, and rush-hour characteristics.
fn line_4a() -> LineDescriptor {
    LineDescriptor {
        name: "Línea 4A".to_string(),
        stations: vec![
            StationProfile::new("La Cisterna", 1_000_000.0, 70_000, 1.2, 1.3, &[7, 8, 17, 18]),
            StationProfile::new("San Ramón", 400_000.0, 30_000, 1.5, 1.1, &[6, 7, 18, 19]),
            StationProfile::new("Santa Rosa", 800_000.0, 60_000, 1.3, 1.4, &[7, 8, 17, 18]),
            StationProfile::new("La Granja", 400_000.0, 30_000, 1.4, 1.2, &[7, 8, 18, 19]),
            StationProfile::new("Santa Julia", 400_000.0, 30_000, 1.2, 1.5, &[8, 9, 17, 18]),
            StationProfile::new(
                "Vicuña Mackenna",
                1_400_000.0,
                100_000,
                1.1,
                1.6,
                &[8, 9, 18, 19],
            ),
        ],
        factors: HourlyFactors::default(),
    }
}
