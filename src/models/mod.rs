pub mod data;
pub mod rules;

pub use data::{AddressComponents, AddressMatch, Region};
pub use rules::{RegionInfo, RegionRules};
