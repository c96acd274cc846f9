// Labeled-dataset plumbing: JSON records, character-span conversion for
// span-based NER trainers, and train/test splitting.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::AddressError;

/// One labeled sample: free text plus field-name → value annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub text: String,
    pub annotations: BTreeMap<String, String>,
}

/// A character span of the record text, labeled with an uppercased field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanAnnotation {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl SpanAnnotation {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, other: &SpanAnnotation) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub fn save_records(records: &[DatasetRecord], path: &Path) -> Result<(), AddressError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<DatasetRecord>, AddressError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Splits records into (train, test) at the given ratio, preserving order.
pub fn split_records(
    records: Vec<DatasetRecord>,
    train_ratio: f64,
) -> (Vec<DatasetRecord>, Vec<DatasetRecord>) {
    let split_idx = (records.len() as f64 * train_ratio) as usize;
    let mut train = records;
    let test = train.split_off(split_idx.min(train.len()));
    (train, test)
}

/// Locates each annotation value in the record text and returns
/// non-overlapping labeled spans. Overlaps are resolved longest-first, the
/// way span-based trainers expect their input filtered.
pub fn record_spans(record: &DatasetRecord) -> Vec<SpanAnnotation> {
    let mut spans = Vec::new();
    for (label, value) in &record.annotations {
        if value.is_empty() {
            continue;
        }
        if let Some(start) = record.text.find(value.as_str()) {
            spans.push(SpanAnnotation {
                start,
                end: start + value.len(),
                label: label.to_uppercase(),
            });
        }
    }
    filter_overlapping(spans)
}

fn filter_overlapping(mut spans: Vec<SpanAnnotation>) -> Vec<SpanAnnotation> {
    spans.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));
    let mut kept: Vec<SpanAnnotation> = Vec::new();
    for span in spans {
        if !kept.iter().any(|existing| existing.overlaps(&span)) {
            kept.push(span);
        }
    }
    kept.sort_by_key(|span| span.start);
    kept
}
