//! Scan reduction: dense laser scans down to 12 directional sectors.

mod sectors;

pub use sectors::{Sector, SectorReading, SectorReducer};
