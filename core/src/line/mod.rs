pub mod factors;
pub mod profile;

pub use factors::HourlyFactors;
pub use profile::{LineDescriptor, StationProfile};
