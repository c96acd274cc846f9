// Rejects component sets that are too sparse, carry contract boilerplate, or
// have an implausible overall length. Applied before a component set can
// become a match.

use crate::models::rules::{SUSPICIOUS_PHRASES, VALID_CITIES};
use crate::models::AddressComponents;

pub fn is_likely_address(components: &AddressComponents) -> bool {
    // Both anchor fields are required.
    if components.city.is_none() || components.street.is_none() {
        return false;
    }

    let full_text = components
        .iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if SUSPICIOUS_PHRASES
        .iter()
        .any(|phrase| full_text.contains(phrase))
    {
        return false;
    }

    if full_text.len() < 10 || full_text.len() > 300 {
        return false;
    }

    if let Some(city) = &components.city {
        let city = city.to_lowercase();
        if city == "india" {
            return false;
        }
        if !VALID_CITIES.contains(&city.as_str()) && city.chars().count() < 2 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_components() -> AddressComponents {
        AddressComponents {
            street: Some("Mahapalika Marg".to_string()),
            city: Some("Mumbai".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_city_and_street() {
        assert!(is_likely_address(&base_components()));
    }

    #[test]
    fn test_requires_both_anchor_fields() {
        let mut components = base_components();
        components.street = None;
        assert!(!is_likely_address(&components));

        let mut components = base_components();
        components.city = None;
        assert!(!is_likely_address(&components));
    }

    #[test]
    fn test_rejects_boilerplate_phrases() {
        let mut components = base_components();
        components.street = Some("road where the main dates are listed".to_string());
        assert!(!is_likely_address(&components));
    }

    #[test]
    fn test_rejects_implausible_lengths() {
        let mut components = base_components();
        components.street = Some("St".to_string());
        components.city = Some("Goa".to_string());
        // "st goa" is under the 10-character floor.
        assert!(!is_likely_address(&components));

        let mut components = base_components();
        components.street = Some("x".repeat(301));
        assert!(!is_likely_address(&components));
    }

    #[test]
    fn test_rejects_india_as_city() {
        let mut components = base_components();
        components.city = Some("India".to_string());
        assert!(!is_likely_address(&components));
    }

    #[test]
    fn test_accepts_unlisted_city_of_plausible_length() {
        let mut components = base_components();
        components.city = Some("Gurugram".to_string());
        assert!(is_likely_address(&components));
    }
}
