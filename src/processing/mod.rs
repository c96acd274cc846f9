pub mod extractors;
pub mod formatter;
pub mod segmenter;

pub use extractors::ComponentExtractor;
pub use segmenter::BlockSegmenter;
