pub mod tagger;

pub use tagger::{HeuristicPlaceTagger, PlaceEntity, PlaceTagger, Token};
