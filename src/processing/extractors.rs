// Field-specific extraction over one normalized text block. Each field has
// an ordered pattern list; rules are tried in declared order and the first
// capture wins. The rule order is part of the extraction semantics.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::rules::STATE_ALIASES;
use crate::models::AddressComponents;
use crate::nlp::PlaceTagger;
use crate::utils::AddressError;
use crate::validation::plausibility;

lazy_static! {
    // Looser than a strict 6-digit PIN: also accepts the common "400 001"
    // split form, and with it arbitrary 3+3 digit runs.
    static ref POSTAL_CODE_PATTERN: Regex = Regex::new(r"\b\d{3}\s*\d{3}\b").unwrap();

    static ref BUILDING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b([A-Za-z0-9\s\.\-]+(?:Tower|Chambers|Plaza|Bhavan|Centre|Complex|Towers|Society|Apartment|Edge|Building|House|Mall|Park|Villa|Heights|Exchange|Stock)s?)\b").unwrap(),
        Regex::new(r"(?i)\b(P\.?\s*J\.?\s*Towers)\b").unwrap(),
        Regex::new(r"(?i)\b([\w\s]+\s+Stock\s+Exchange)\b").unwrap(),
    ];

    static ref STREET_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b([\w\s\.\-]+(?:Street|Road|Lane|Avenue|Boulevard|Highway|Marg|Path|Way|Expressway|Cross|Main|Circle|Block|Towers)s?)\b").unwrap(),
        Regex::new(r"(?i)\b(\d+\s*(?:First|Second|Third|Fourth|Fifth|Sixth|Seventh|Eighth|Ninth|Tenth)\s*Street)\b").unwrap(),
        Regex::new(r"(?i)\b(Dalal\s+Street)\b").unwrap(),
        Regex::new(r"(?i)\b(Lyons\s+Range)\b").unwrap(),
    ];

    static ref AREA_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b([A-Za-z\s()\-]+(?:Area|Block|Sector|Phase|Colony|Nagar|Extension|Enclave|Complex|East|West|North|South|[EWNS])\b(?:\s*[()][EWNS][()])?)").unwrap(),
        Regex::new(r"(?i)\b(Bandra-Kurla\s+Complex)\b").unwrap(),
        Regex::new(r"(?i)\b(Dept\.?\s*of\s*Corporate\s*Services)\b").unwrap(),
    ];

    static ref CITY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(Mumbai|Delhi|Bangalore|Hyderabad|Chennai|Kolkata|Pune|Ahmedabad|Surat|Jaipur|Bandra|Washington|New York)\b").unwrap(),
        Regex::new(r"(?i)\b(U\.?S\.?A\.?)\b").unwrap(),
        Regex::new(r"(?i)\b(Bandra-Kurla)\b").unwrap(),
    ];

    // Alias matching is case-sensitive: "UP" must not fire on the word "up".
    static ref STATE_PATTERNS: Vec<(Regex, &'static str)> = STATE_ALIASES
        .iter()
        .flat_map(|(canonical, variants)| {
            variants.iter().map(move |variant| (alias_regex(variant), *canonical))
        })
        .collect();

    static ref AREA_DIRECTION: Regex = Regex::new(r"\(\s*([EWNS])\s*\)").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref TRAILING_COMMAS: Regex = Regex::new(r",+$").unwrap();
}

/// `\b` cannot sit next to a non-word character, so variants like "U.P." get
/// their boundary assertions only on alphanumeric edges.
fn alias_regex(variant: &str) -> Regex {
    let lead = if variant.starts_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    let trail = if variant.ends_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("{}{}{}", lead, regex::escape(variant), trail)).unwrap()
}

pub struct ComponentExtractor;

impl ComponentExtractor {
    /// Extracts typed fields from one block. Returns an empty component set
    /// when no plausible address is found; never panics.
    pub fn extract(
        block: &str,
        tagger: &dyn PlaceTagger,
    ) -> Result<AddressComponents, AddressError> {
        let text = normalize(block);
        let mut components = AddressComponents {
            postal_code: Self::extract_postal_code(&text),
            building: Self::extract_building(&text),
            street: Self::extract_street(&text),
            area: Self::extract_area(&text),
            ..Default::default()
        };
        components.city = Self::extract_city(&text);
        if components.city.is_none() {
            components.city = Self::city_from_entities(&text, &components, tagger)?;
        }
        components.state = Self::extract_state(&text);

        Self::clean(&mut components);

        if plausibility::is_likely_address(&components) {
            Ok(components)
        } else {
            Ok(AddressComponents::default())
        }
    }

    pub fn extract_postal_code(text: &str) -> Option<String> {
        POSTAL_CODE_PATTERN
            .find(text)
            .map(|m| m.as_str().replace(' ', ""))
    }

    pub fn extract_building(text: &str) -> Option<String> {
        first_capture(&BUILDING_PATTERNS, text)
    }

    pub fn extract_street(text: &str) -> Option<String> {
        first_capture(&STREET_PATTERNS, text)
    }

    pub fn extract_area(text: &str) -> Option<String> {
        first_capture(&AREA_PATTERNS, text).map(|area| {
            // "(E)" style direction suffixes get a separating space.
            AREA_DIRECTION.replace_all(&area, " ($1)").into_owned()
        })
    }

    pub fn extract_city(text: &str) -> Option<String> {
        first_capture(&CITY_PATTERNS, text)
    }

    pub fn extract_state(text: &str) -> Option<String> {
        STATE_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, canonical)| (*canonical).to_string())
    }

    /// Fallback for the city field: first tagged place whose text is not
    /// already contained in another extracted component.
    fn city_from_entities(
        text: &str,
        components: &AddressComponents,
        tagger: &dyn PlaceTagger,
    ) -> Result<Option<String>, AddressError> {
        for entity in tagger.place_entities(text)? {
            let lower = entity.text.to_lowercase();
            let already_covered = components
                .iter()
                .any(|(_, value)| value.to_lowercase().contains(&lower));
            if !already_covered {
                return Ok(Some(entity.text));
            }
        }
        Ok(None)
    }

    fn clean(components: &mut AddressComponents) {
        for field in [
            &mut components.postal_code,
            &mut components.building,
            &mut components.street,
            &mut components.area,
            &mut components.city,
            &mut components.state,
        ] {
            if let Some(value) = field.take() {
                let collapsed = WHITESPACE_RUN.replace_all(value.trim(), " ");
                let stripped = TRAILING_COMMAS.replace(&collapsed, "");
                let cleaned = stripped.trim();
                if !cleaned.is_empty() {
                    *field = Some(cleaned.to_string());
                }
            }
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::HeuristicPlaceTagger;

    #[test]
    fn test_postal_code_accepts_split_pin() {
        assert_eq!(
            ComponentExtractor::extract_postal_code("Mumbai - 400 001"),
            Some("400001".to_string())
        );
        assert_eq!(
            ComponentExtractor::extract_postal_code("Gurugram 122002."),
            Some("122002".to_string())
        );
        assert_eq!(ComponentExtractor::extract_postal_code("Room 31"), None);
    }

    #[test]
    fn test_building_type_word_capture() {
        assert_eq!(
            ComponentExtractor::extract_building("Flat No. 302, Emerald Towers, MG Road"),
            Some("Emerald Towers".to_string())
        );
        assert_eq!(
            ComponentExtractor::extract_building("Annexe Building, Mahapalika Marg"),
            Some("Annexe Building".to_string())
        );
    }

    #[test]
    fn test_building_stock_exchange_literal() {
        assert_eq!(
            ComponentExtractor::extract_building("Bombay Stock Exchange"),
            Some("Bombay Stock Exchange".to_string())
        );
    }

    #[test]
    fn test_street_suffix_and_literals() {
        assert_eq!(
            ComponentExtractor::extract_street("Annexe Building, Mahapalika Marg, Mumbai"),
            Some("Mahapalika Marg".to_string())
        );
        assert_eq!(
            ComponentExtractor::extract_street("listed on Lyons Range"),
            Some("Lyons Range".to_string())
        );
    }

    #[test]
    fn test_area_type_word_capture() {
        assert_eq!(
            ComponentExtractor::extract_area("Sai Colony, Mumbai"),
            Some("Sai Colony".to_string())
        );
        assert_eq!(
            ComponentExtractor::extract_area("Andheri East, Mumbai"),
            Some("Andheri East".to_string())
        );
    }

    #[test]
    fn test_city_literal_alternation() {
        assert_eq!(
            ComponentExtractor::extract_city("somewhere in Kolkata today"),
            Some("Kolkata".to_string())
        );
        assert_eq!(ComponentExtractor::extract_city("somewhere in Gurugram"), None);
    }

    #[test]
    fn test_state_alias_matching_is_case_sensitive() {
        assert_eq!(
            ComponentExtractor::extract_state("Sector 50, Gurugram, Haryana"),
            Some("Haryana".to_string())
        );
        // "up" as an ordinary word must not read as Uttar Pradesh.
        assert_eq!(ComponentExtractor::extract_state("picked up the goods"), None);
        // Aliases inside longer words do not count.
        assert_eq!(ComponentExtractor::extract_state("Mahapalika Marg"), None);
    }

    #[test]
    fn test_extract_full_address_block() {
        let tagger = HeuristicPlaceTagger::new();
        let block = "Room No. 311, 3rd Floor, Annexe Building, Mahapalika Marg, Mumbai - 400 001";
        let components = ComponentExtractor::extract(block, &tagger).unwrap();
        assert_eq!(components.postal_code.as_deref(), Some("400001"));
        assert_eq!(components.building.as_deref(), Some("Annexe Building"));
        assert_eq!(components.street.as_deref(), Some("Mahapalika Marg"));
        assert_eq!(components.city.as_deref(), Some("Mumbai"));
    }

    #[test]
    fn test_extract_rejects_legal_boilerplate() {
        let tagger = HeuristicPlaceTagger::new();
        let block = "This decision shall be final and shall not be questioned by the \
                     parties where the main dates fixed for hearing of a case are involved.";
        let components = ComponentExtractor::extract(block, &tagger).unwrap();
        assert!(components.is_empty());
    }

    #[test]
    fn test_extract_rejects_india_as_city() {
        let tagger = HeuristicPlaceTagger::new();
        let block = "Flat 5, Shanti Street, in India";
        let components = ComponentExtractor::extract(block, &tagger).unwrap();
        assert!(components.is_empty());
    }

    #[test]
    fn test_city_fallback_skips_entities_inside_other_fields() {
        struct StubTagger;
        impl crate::nlp::PlaceTagger for StubTagger {
            fn tokenize(&self, _text: &str) -> Vec<crate::nlp::Token> {
                Vec::new()
            }
            fn place_entities(
                &self,
                _text: &str,
            ) -> Result<Vec<crate::nlp::PlaceEntity>, AddressError> {
                Ok(vec![
                    crate::nlp::PlaceEntity {
                        text: "Emerald".to_string(),
                        start: 0,
                        end: 7,
                    },
                    crate::nlp::PlaceEntity {
                        text: "Kanpur".to_string(),
                        start: 10,
                        end: 16,
                    },
                ])
            }
        }

        let block = "Emerald Towers, Station Road, Kanpur";
        let components = ComponentExtractor::extract(block, &StubTagger).unwrap();
        // "Emerald" sits inside the building value, so the fallback moves on.
        assert_eq!(components.city.as_deref(), Some("Kanpur"));
    }
}
