use crate::line::LineDescriptor;
use crate::prelude::{in_operating_window, OPEN_HOUR};
use crate::simulation::history::HistoryStore;
use crate::simulation::{alerts, generator};
use crate::wire::snapshot::{StationSnapshot, TickSnapshot};
use chrono::NaiveDate;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// First simulated calendar day, matching the reference feed.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid epoch date")
}

/// Mutable simulation state. The owning clock is its only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub hour: u8,
    pub date: NaiveDate,
    pub running: bool,
}

impl SimulationState {
    fn initial() -> Self {
        Self {
            hour: OPEN_HOUR,
            date: epoch_date(),
            running: false,
        }
    }
}

/// Controllable tick engine for one simulated line.
///
/// While running, each `advance` moves the simulated hour forward and, inside
/// the operating window, runs generator -> history -> alerts and composes the
/// snapshot to broadcast. `start` restarts from scratch even when already
/// running; `stop` resets and is idempotent. Ticks outside the window advance
/// the hour silently.
pub struct SimulationClock {
    line: LineDescriptor,
    state: SimulationState,
    history: HistoryStore,
    rng: StdRng,
}

impl SimulationClock {
    /// A seeded clock replays the exact same day; pass `None` for entropy.
    pub fn new(line: LineDescriptor, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let history = HistoryStore::new(line.stations.len());
        Self {
            line,
            state: SimulationState::initial(),
            history,
            rng,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Reset to the opening hour and emit the first snapshot synchronously,
    /// so a viewer never waits a full period for its first frame.
    pub fn start(&mut self) -> TickSnapshot {
        self.reset();
        self.state.running = true;
        self.tick()
    }

    /// Halt and reset. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.reset();
    }

    /// Advance one simulated hour. Returns a snapshot only for hours inside
    /// the operating window; rollover past midnight advances the date and
    /// drops the previous day's history.
    pub fn advance(&mut self) -> Option<TickSnapshot> {
        if !self.state.running {
            return None;
        }
        self.state.hour = (self.state.hour + 1) % 24;
        if self.state.hour == 0 {
            self.state.date = self.state.date.succ_opt().unwrap_or(self.state.date);
            self.history.clear();
        }
        if !in_operating_window(self.state.hour) {
            return None;
        }
        Some(self.tick())
    }

    fn reset(&mut self) {
        self.state = SimulationState::initial();
        self.history.clear();
    }

    fn tick(&mut self) -> TickSnapshot {
        let hour = self.state.hour;
        let counts = generator::generate(hour, &self.line, &mut self.rng);
        for (station, &passengers) in counts.iter().enumerate() {
            self.history.append(station, hour, passengers);
        }
        let total_line: u32 = counts.iter().sum();
        let alerts = alerts::evaluate(&self.line, &counts, total_line);
        let stations = self
            .line
            .stations
            .iter()
            .zip(&counts)
            .enumerate()
            .map(|(station, (profile, &passengers))| StationSnapshot {
                name: profile.name.clone(),
                passengers,
                history: self.history.snapshot(station),
            })
            .collect();
        debug!(
            "tick {} {:02}:00 total {} alerts {}",
            self.state.date,
            hour,
            total_line,
            alerts.len()
        );
        TickSnapshot {
            date: self.state.date,
            hour,
            stations,
            total_line,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_clock() -> SimulationClock {
        SimulationClock::new(LineDescriptor::default(), Some(11))
    }

    #[test]
    fn start_emits_an_immediate_opening_snapshot() {
        let mut clock = seeded_clock();
        let snapshot = clock.start();
        assert!(clock.is_running());
        assert_eq!(snapshot.hour, OPEN_HOUR);
        assert_eq!(snapshot.date, epoch_date());
        assert_eq!(snapshot.stations.len(), 6);
        let sum: u32 = snapshot.stations.iter().map(|s| s.passengers).sum();
        assert_eq!(snapshot.total_line, sum);
        assert!(snapshot.stations.iter().all(|s| s.history.len() == 1));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = seeded_clock();
        clock.stop();
        assert_eq!(*clock.state(), SimulationState::initial());
        clock.start();
        clock.stop();
        clock.stop();
        assert_eq!(*clock.state(), SimulationState::initial());
        assert!(clock.history.is_empty());
    }

    #[test]
    fn advance_without_start_is_inert() {
        let mut clock = seeded_clock();
        assert!(clock.advance().is_none());
        assert_eq!(clock.state().hour, OPEN_HOUR);
    }

    #[test]
    fn start_while_running_restarts_from_scratch() {
        let mut clock = seeded_clock();
        clock.start();
        for _ in 0..5 {
            clock.advance();
        }
        let snapshot = clock.start();
        assert_eq!(snapshot.hour, OPEN_HOUR);
        assert_eq!(snapshot.date, epoch_date());
        assert!(snapshot.stations.iter().all(|s| s.history.len() == 1));
    }

    #[test]
    fn hours_accumulate_history_in_order() {
        let mut clock = seeded_clock();
        clock.start();
        let snapshot = clock.advance().expect("hour 7 snapshot");
        assert_eq!(snapshot.hour, 7);
        let history = &snapshot.stations[0].history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].hour, 6);
        assert_eq!(history[1].hour, 7);
    }

    #[test]
    fn overnight_hours_are_skipped_and_the_date_rolls_over() {
        let mut clock = seeded_clock();
        clock.start();
        // 7:00 through 23:00 broadcast.
        for expected_hour in 7..=23u8 {
            let snapshot = clock.advance().expect("daytime snapshot");
            assert_eq!(snapshot.hour, expected_hour);
        }
        // 0:00 through 5:00 are silent.
        for _ in 0..6 {
            assert!(clock.advance().is_none());
        }
        let snapshot = clock.advance().expect("next-day opening snapshot");
        assert_eq!(snapshot.hour, OPEN_HOUR);
        assert_eq!(snapshot.date, epoch_date().succ_opt().unwrap());
        // Rollover cleared the previous day before repopulating.
        assert!(snapshot.stations.iter().all(|s| s.history.len() == 1));
    }
}
