use log::{error, warn};

use crate::models::{AddressComponents, AddressMatch};
use crate::nlp::{HeuristicPlaceTagger, PlaceTagger};
use crate::processing::{formatter, BlockSegmenter, ComponentExtractor};
use crate::utils::AddressError;
use crate::validation::{confidence, RegionClassifier};

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// Orchestrates the extraction pipeline: segmentation, component extraction,
/// scoring, region classification and deduplication. The public entry points
/// absorb all internal failures; callers see empty or degraded results and
/// log lines, never an error.
pub struct AddressExtractor {
    tagger: Box<dyn PlaceTagger>,
    classifier: RegionClassifier,
}

impl AddressExtractor {
    pub fn new() -> Self {
        Self::with_tagger(Box::new(HeuristicPlaceTagger::new()))
    }

    /// Builds an extractor around a caller-supplied place tagger.
    pub fn with_tagger(tagger: Box<dyn PlaceTagger>) -> Self {
        AddressExtractor {
            tagger,
            classifier: RegionClassifier::new(),
        }
    }

    pub fn extract_addresses(&self, text: &str) -> Vec<AddressMatch> {
        self.extract_addresses_with_confidence(text, DEFAULT_MIN_CONFIDENCE)
    }

    pub fn extract_addresses_with_confidence(
        &self,
        text: &str,
        min_confidence: f64,
    ) -> Vec<AddressMatch> {
        match self.try_extract(text, min_confidence) {
            Ok(matches) => matches,
            Err(e) => {
                error!("Address extraction failed: {}", e);
                Vec::new()
            }
        }
    }

    fn try_extract(
        &self,
        text: &str,
        min_confidence: f64,
    ) -> Result<Vec<AddressMatch>, AddressError> {
        let mut matches = Vec::new();

        for block in BlockSegmenter::segment(text) {
            let components = match ComponentExtractor::extract(&block, self.tagger.as_ref()) {
                Ok(components) => components,
                Err(e) => {
                    warn!("Error processing block '{}': {}", preview(&block), e);
                    continue;
                }
            };
            // An empty set means no address was found in this block.
            if components.is_empty() {
                continue;
            }

            let score = confidence::score(&components, &block);
            if score >= min_confidence {
                let region = self.classifier.classify(&block, &components);
                matches.push(AddressMatch {
                    raw_text: block,
                    components,
                    confidence_score: score,
                    region,
                });
            }
        }

        Ok(Self::deduplicate(matches))
    }

    /// Keeps the first match per case- and whitespace-insensitive raw text,
    /// preserving discovery order.
    fn deduplicate(matches: Vec<AddressMatch>) -> Vec<AddressMatch> {
        let mut seen = std::collections::HashSet::new();
        matches
            .into_iter()
            .filter(|m| {
                let key = m
                    .raw_text
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");
                seen.insert(key)
            })
            .collect()
    }

    /// Renders one match as a single line. Falls back to the raw block text
    /// if rendering produces nothing usable.
    pub fn format_address(&self, address_match: &AddressMatch) -> String {
        let formatted = formatter::render(&address_match.components);
        if formatted.is_empty() {
            error!(
                "Could not format address '{}', returning raw text",
                preview(&address_match.raw_text)
            );
            return address_match.raw_text.clone();
        }
        formatted
    }

    /// Runs component extraction over a whole text as one block. Used by the
    /// dataset evaluator; the pipeline proper goes through `extract_addresses`.
    pub fn extract_components(&self, text: &str) -> Result<AddressComponents, AddressError> {
        ComponentExtractor::extract(&BlockSegmenter::clean_block(text), self.tagger.as_ref())
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(50)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    &text[..end]
}
