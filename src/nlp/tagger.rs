// Place-entity tagging for the city fallback rule. The extraction core only
// needs two capabilities from a language pipeline: tokenization and place
// spans. Modelling them as a trait keeps the pipeline swappable and lets
// tests run against a stub instead of a real model.

use std::collections::HashSet;

use crate::models::rules::{MAJOR_CITIES, STATE_ALIASES};
use crate::models::RegionRules;
use crate::utils::AddressError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A span of text tagged as a place name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntity {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

pub trait PlaceTagger {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Place-name spans in document order.
    fn place_entities(&self, text: &str) -> Result<Vec<PlaceEntity>, AddressError>;
}

/// Words that commonly introduce a place name in running text.
const PLACE_CUES: &[&str] = &["in", "at", "near", "to", "of", "from"];

/// Dictionary- and capitalization-based tagger. Gazetteer hits (known city
/// and state names) are reported first, then capitalized token runs that
/// follow a place cue word. No model download, no I/O.
pub struct HeuristicPlaceTagger {
    gazetteer: HashSet<String>,
}

impl HeuristicPlaceTagger {
    pub fn new() -> Self {
        let mut gazetteer = HashSet::new();
        for city in MAJOR_CITIES {
            gazetteer.insert(city.to_lowercase());
        }
        for (canonical, variants) in STATE_ALIASES {
            gazetteer.insert(canonical.to_lowercase());
            for variant in *variants {
                // Two-letter abbreviations are too ambiguous as bare tokens.
                if variant.chars().count() > 3 {
                    gazetteer.insert(variant.to_lowercase());
                }
            }
        }
        for info in &RegionRules::new().regions {
            for city in &info.cities {
                gazetteer.insert(city.to_lowercase());
            }
            for state in &info.states {
                gazetteer.insert(state.to_lowercase());
            }
        }
        HeuristicPlaceTagger { gazetteer }
    }

    fn is_capitalized(token: &Token) -> bool {
        token.text.chars().next().is_some_and(|c| c.is_uppercase())
    }

    fn gazetteer_entities(&self, tokens: &[Token]) -> Vec<PlaceEntity> {
        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            // Prefer two-token names ("New Delhi", "Navi Mumbai").
            if i + 1 < tokens.len() {
                let bigram = format!("{} {}", tokens[i].text, tokens[i + 1].text);
                if self.gazetteer.contains(&bigram.to_lowercase()) {
                    entities.push(PlaceEntity {
                        text: bigram,
                        start: tokens[i].start,
                        end: tokens[i + 1].end,
                    });
                    i += 2;
                    continue;
                }
            }
            if self.gazetteer.contains(&tokens[i].text.to_lowercase()) {
                entities.push(PlaceEntity {
                    text: tokens[i].text.clone(),
                    start: tokens[i].start,
                    end: tokens[i].end,
                });
            }
            i += 1;
        }
        entities
    }

    fn cued_entities(&self, text: &str, tokens: &[Token]) -> Vec<PlaceEntity> {
        // Tokens are adjacent when only whitespace separates them; commas and
        // other punctuation end a capitalized run.
        let adjacent = |a: &Token, b: &Token| {
            text[a.end..b.start].chars().all(char::is_whitespace)
        };
        let mut entities = Vec::new();
        let mut i = 1;
        while i < tokens.len() {
            let cue = tokens[i - 1].text.to_lowercase();
            if PLACE_CUES.contains(&cue.as_str()) && Self::is_capitalized(&tokens[i]) {
                let mut j = i;
                while j + 1 < tokens.len()
                    && Self::is_capitalized(&tokens[j + 1])
                    && adjacent(&tokens[j], &tokens[j + 1])
                {
                    j += 1;
                }
                let text = tokens[i..=j]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                entities.push(PlaceEntity {
                    text,
                    start: tokens[i].start,
                    end: tokens[j].end,
                });
                i = j + 1;
            }
            i += 1;
        }
        entities
    }
}

impl Default for HeuristicPlaceTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceTagger for HeuristicPlaceTagger {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;
        for (idx, ch) in text.char_indices() {
            if ch.is_alphanumeric() || (ch == '-' && !current.is_empty()) {
                if current.is_empty() {
                    start = idx;
                }
                current.push(ch);
            } else if !current.is_empty() {
                let token = current.trim_end_matches('-').to_string();
                if !token.is_empty() {
                    tokens.push(Token {
                        end: start + token.len(),
                        text: token,
                        start,
                    });
                }
                current.clear();
            }
        }
        if !current.is_empty() {
            let token = current.trim_end_matches('-').to_string();
            if !token.is_empty() {
                tokens.push(Token {
                    end: start + token.len(),
                    text: token,
                    start,
                });
            }
        }
        tokens
    }

    fn place_entities(&self, text: &str) -> Result<Vec<PlaceEntity>, AddressError> {
        let tokens = self.tokenize(text);
        let mut entities = self.gazetteer_entities(&tokens);
        for candidate in self.cued_entities(text, &tokens) {
            let overlaps = entities
                .iter()
                .any(|e| candidate.start < e.end && e.start < candidate.end);
            if !overlaps {
                entities.push(candidate);
            }
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_offsets() {
        let tagger = HeuristicPlaceTagger::new();
        let tokens = tagger.tokenize("Flat 5, Mumbai");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Flat", "5", "Mumbai"]);
        assert_eq!(tokens[2].start, 8);
        assert_eq!(tokens[2].end, 14);
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_names() {
        let tagger = HeuristicPlaceTagger::new();
        let tokens = tagger.tokenize("Bandra-Kurla Complex");
        assert_eq!(tokens[0].text, "Bandra-Kurla");
    }

    #[test]
    fn test_gazetteer_hit_comes_before_cued_candidate() {
        let tagger = HeuristicPlaceTagger::new();
        let entities = tagger
            .place_entities("office near City Mall, Gurugram, Haryana")
            .unwrap();
        assert_eq!(entities[0].text, "Haryana");
        assert!(entities.iter().any(|e| e.text.starts_with("City Mall")));
    }

    #[test]
    fn test_two_token_gazetteer_name() {
        let tagger = HeuristicPlaceTagger::new();
        let entities = tagger.place_entities("shifted to Navi Mumbai last year").unwrap();
        assert_eq!(entities[0].text, "Navi Mumbai");
    }

    #[test]
    fn test_cued_capitalized_run() {
        let tagger = HeuristicPlaceTagger::new();
        let entities = tagger.place_entities("the parties reside in India").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "India");
    }

    #[test]
    fn test_no_entities_in_plain_prose() {
        let tagger = HeuristicPlaceTagger::new();
        let entities = tagger
            .place_entities("this decision shall be final and binding")
            .unwrap();
        assert!(entities.is_empty());
    }
}
