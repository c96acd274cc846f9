// Renders a component set as a single human-readable line.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::AddressComponents;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref DOUBLE_COMMA: Regex = Regex::new(r",\s*,").unwrap();
}

/// Building, street and area in order, then a combined "city - postal_code"
/// segment, all joined by ", ". Returns an empty string for an empty
/// component set.
pub fn render(components: &AddressComponents) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(building) = &components.building {
        parts.push(building.clone());
    }
    if let Some(street) = &components.street {
        parts.push(street.clone());
    }
    if let Some(area) = &components.area {
        parts.push(area.clone());
    }

    let location: Vec<&str> = [components.city.as_deref(), components.postal_code.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !location.is_empty() {
        parts.push(location.join(" - "));
    }

    let joined = parts.join(", ");
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    let normalized = DOUBLE_COMMA.replace_all(&collapsed, ",");
    normalized
        .trim_matches(|c: char| c == ' ' || c == ',')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_components() -> AddressComponents {
        AddressComponents {
            postal_code: Some("400001".to_string()),
            building: Some("Annexe Building".to_string()),
            street: Some("Mahapalika Marg".to_string()),
            area: Some("Fort".to_string()),
            city: Some("Mumbai".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_full_set() {
        assert_eq!(
            render(&full_components()),
            "Annexe Building, Mahapalika Marg, Fort, Mumbai - 400001"
        );
    }

    #[test]
    fn test_render_city_without_postal_code() {
        let components = AddressComponents {
            street: Some("MG Road".to_string()),
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&components), "MG Road, Pune");
    }

    #[test]
    fn test_render_postal_code_without_city() {
        let components = AddressComponents {
            street: Some("MG Road".to_string()),
            postal_code: Some("411001".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&components), "MG Road, 411001");
    }

    #[test]
    fn test_render_empty_set_is_empty() {
        assert_eq!(render(&AddressComponents::default()), "");
    }

    #[test]
    fn test_render_is_idempotent_on_same_input() {
        let components = full_components();
        assert_eq!(render(&components), render(&components));
    }
}
