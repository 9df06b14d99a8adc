//! Simulation core for the metro line telemetry streamer.
//!
//! The modules cover the full tick cycle of the passenger-flow simulator:
//! static station profiles, the synthetic generator, the rolling history
//! window, congestion alerts, and the clock that drives them once per
//! simulated hour. Everything here is synchronous and free of I/O; the
//! driver crate owns the transport.

pub mod line;
pub mod prelude;
pub mod simulation;
pub mod telemetry;
pub mod wire;

pub use prelude::{SimError, SimResult};
