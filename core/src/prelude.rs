use thiserror::Error;

/// First hour of the operating window; also the hour every restart begins at.
pub const OPEN_HOUR: u8 = 6;

/// Last hour of the operating window.
pub const CLOSE_HOUR: u8 = 23;

/// Whether a simulated hour falls inside the visible operating window.
pub fn in_operating_window(hour: u8) -> bool {
    (OPEN_HOUR..=CLOSE_HOUR).contains(&hour)
}

/// Common error type for line configuration and simulation setup.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid line: {0}")]
    InvalidLine(String),
    #[error("invalid station profile {name}: {reason}")]
    InvalidProfile { name: String, reason: String },
}

pub type SimResult<T> = Result<T, SimError>;
