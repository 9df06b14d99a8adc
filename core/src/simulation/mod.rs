pub mod alerts;
pub mod clock;
pub mod generator;
pub mod history;

pub use clock::{SimulationClock, SimulationState};
pub use history::HistoryStore;
