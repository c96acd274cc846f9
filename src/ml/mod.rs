pub mod dataset;
pub mod evaluation;
pub mod generator;

pub use dataset::{DatasetRecord, SpanAnnotation};
pub use evaluation::{EvaluationReport, ExtractorEvaluator, FieldScore};
pub use generator::AddressGenerator;
