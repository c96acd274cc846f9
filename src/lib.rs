pub mod models;
pub mod nlp;
pub mod processing;
pub mod validation;
pub mod ml;
pub mod utils;
pub mod address_extractor;

pub use address_extractor::AddressExtractor;
