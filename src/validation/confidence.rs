// Deterministic additive confidence score. The weights sum to 1.2, so the
// final clamp to 1.0 is reachable and required.

use crate::models::AddressComponents;

pub fn score(components: &AddressComponents, block: &str) -> f64 {
    let mut score: f64 = 0.0;

    if components.postal_code.is_some() {
        score += 0.3;
    }
    if components.building.is_some() || components.street.is_some() {
        score += 0.3;
    }
    if components.city.is_some() {
        score += 0.2;
    }
    if components.area.is_some() {
        score += 0.1;
    }

    if block.split_whitespace().count() >= 4 {
        score += 0.1;
    }
    if components.len() >= 3 {
        score += 0.2;
    }
    if block.chars().any(|c| c.is_ascii_digit()) {
        score += 0.1;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_components_and_text_score_zero() {
        assert_eq!(score(&AddressComponents::default(), ""), 0.0);
    }

    #[test]
    fn test_full_components_clamp_to_one() {
        let components = AddressComponents {
            postal_code: Some("400001".to_string()),
            building: Some("Annexe Building".to_string()),
            street: Some("Mahapalika Marg".to_string()),
            area: Some("Fort".to_string()),
            city: Some("Mumbai".to_string()),
            ..Default::default()
        };
        let block = "Annexe Building, Mahapalika Marg, Fort, Mumbai 400001";
        assert_eq!(score(&components, block), 1.0);
    }

    #[test]
    fn test_partial_components() {
        let components = AddressComponents {
            street: Some("MG Road".to_string()),
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        // street 0.3 + city 0.2; three words, two components, no digits
        let value = score(&components, "MG Road Pune");
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let components = AddressComponents {
            postal_code: Some("400001".to_string()),
            city: Some("Mumbai".to_string()),
            ..Default::default()
        };
        let value = score(&components, "Mumbai 400001 near the old fort gate");
        assert!((0.0..=1.0).contains(&value));
    }
}
