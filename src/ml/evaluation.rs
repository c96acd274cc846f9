// Scores the rule-based extractor against a labeled dataset with
// precision/recall/F1, overall and per field.

use std::collections::BTreeMap;

use log::debug;

use super::dataset::DatasetRecord;
use crate::address_extractor::AddressExtractor;
use crate::utils::AddressError;

/// Counts for one field across a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldScore {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl FieldScore {
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    fn add(&mut self, other: FieldScore) {
        self.true_positives += other.true_positives;
        self.false_positives += other.false_positives;
        self.false_negatives += other.false_negatives;
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvaluationReport {
    pub overall: FieldScore,
    pub per_field: BTreeMap<String, FieldScore>,
}

/// Extractor output fields the scorer knows how to compare.
const SCORED_FIELDS: &[&str] = &["postal_code", "building", "street", "area", "city", "state"];

pub struct ExtractorEvaluator;

impl ExtractorEvaluator {
    /// Runs the extractor over every record and compares component values
    /// against the annotations. Annotation keys with no extractor
    /// counterpart (room numbers, landmarks) are left unscored.
    pub fn evaluate(
        extractor: &AddressExtractor,
        records: &[DatasetRecord],
    ) -> Result<EvaluationReport, AddressError> {
        let mut report = EvaluationReport::default();

        for record in records {
            let components = extractor.extract_components(&record.text)?;

            for &field in SCORED_FIELDS {
                let expected = record
                    .annotations
                    .iter()
                    .find(|(key, _)| canonical_field(key.as_str()) == Some(field))
                    .map(|(_, value)| value.as_str());
                let predicted = components.get(field);

                let outcome = match (expected, predicted) {
                    (Some(want), Some(got)) if values_match(want, got) => FieldScore {
                        true_positives: 1,
                        ..Default::default()
                    },
                    (Some(_), Some(got)) => {
                        debug!("Field {} mismatch: predicted {:?}", field, got);
                        FieldScore {
                            false_positives: 1,
                            false_negatives: 1,
                            ..Default::default()
                        }
                    }
                    (None, Some(_)) => FieldScore {
                        false_positives: 1,
                        ..Default::default()
                    },
                    (Some(_), None) => FieldScore {
                        false_negatives: 1,
                        ..Default::default()
                    },
                    (None, None) => FieldScore::default(),
                };

                report.overall.add(outcome);
                report
                    .per_field
                    .entry(field.to_string())
                    .or_default()
                    .add(outcome);
            }
        }

        Ok(report)
    }
}

/// Maps a dataset annotation key onto the extractor's component name.
fn canonical_field(key: &str) -> Option<&'static str> {
    match key {
        "pincode" => Some("postal_code"),
        "building_name" => Some("building"),
        "street" => Some("street"),
        "area" => Some("area"),
        "city" => Some("city"),
        "state" => Some("state"),
        _ => None,
    }
}

/// Lenient value comparison: case and punctuation are ignored, and either
/// side may be a substring of the other ("Mumbai-400001" vs "400001").
fn values_match(expected: &str, predicted: &str) -> bool {
    let a = normalize(expected);
    let b = normalize(predicted);
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
