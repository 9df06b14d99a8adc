use crate::line::LineDescriptor;

/// Passengers per hour across the whole line that trigger the general alert.
pub const LINE_ALERT_THRESHOLD: u32 = 800_000;

/// Evaluate one tick's counts against the configured thresholds.
///
/// Station messages come first, in profile-table order; the line-level
/// message, if any, is appended last. Thresholds are exclusive: a count
/// exactly at the threshold raises nothing.
pub fn evaluate(line: &LineDescriptor, counts: &[u32], total: u32) -> Vec<String> {
    let mut alerts = Vec::new();
    for (profile, &passengers) in line.stations.iter().zip(counts) {
        if passengers > profile.alert_threshold {
            alerts.push(format!(
                "High congestion at {}: {} passengers",
                profile.name, passengers
            ));
        }
    }
    if total > LINE_ALERT_THRESHOLD {
        alerts.push(format!(
            "General alert: more than 800,000 passengers on the line ({} passengers)",
            total
        ));
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::{HourlyFactors, StationProfile};

    fn two_station_line() -> LineDescriptor {
        LineDescriptor {
            name: "Test".to_string(),
            stations: vec![
                StationProfile::new("Alpha", 100_000.0, 5_000, 1.0, 1.0, &[]),
                StationProfile::new("Beta", 100_000.0, 8_000, 1.0, 1.0, &[]),
            ],
            factors: HourlyFactors::default(),
        }
    }

    #[test]
    fn count_at_threshold_raises_nothing() {
        let line = two_station_line();
        assert!(evaluate(&line, &[5_000, 8_000], 13_000).is_empty());
    }

    #[test]
    fn count_above_threshold_raises_one_station_alert() {
        let line = two_station_line();
        let alerts = evaluate(&line, &[5_001, 8_000], 13_001);
        assert_eq!(alerts, vec!["High congestion at Alpha: 5001 passengers"]);
    }

    #[test]
    fn line_alert_appends_after_station_alerts() {
        let line = two_station_line();
        let alerts = evaluate(&line, &[799_000, 1_500], 800_500);
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].starts_with("High congestion at Alpha"));
        assert_eq!(
            alerts[1],
            "General alert: more than 800,000 passengers on the line (800500 passengers)"
        );
    }

    #[test]
    fn line_total_at_threshold_raises_nothing() {
        let line = two_station_line();
        assert!(evaluate(&line, &[4_000, 4_000], LINE_ALERT_THRESHOLD).is_empty());
    }
}
