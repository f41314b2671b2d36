pub mod aggregator;
pub mod performance;
pub mod synergy;

pub use aggregator::aggregate;
pub use performance::{PerformanceMap, PerformanceRecord};
pub use synergy::SynergyMatrix;
