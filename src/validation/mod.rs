pub mod confidence;
pub mod plausibility;
pub mod region;

pub use region::RegionClassifier;
