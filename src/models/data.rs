use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse geographic grouping of an extracted address. Not an administrative
/// unit; used only for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthIndia,
    SouthIndia,
    WestIndia,
    EastIndia,
    Unknown,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthIndia => "north_india",
            Region::SouthIndia => "south_india",
            Region::WestIndia => "west_india",
            Region::EastIndia => "east_india",
            Region::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named fields of a parsed address. A field is either present with a
/// non-empty value or absent; cleaning drops values that collapse to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AddressComponents {
    /// Present fields in declaration order, as (field name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("postal_code", &self.postal_code),
            ("building", &self.building),
            ("street", &self.street),
            ("area", &self.area),
            ("city", &self.city),
            ("state", &self.state),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }
}

/// One extracted address. Immutable once constructed; instances live only
/// for the duration of an extraction call and any caller-side rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AddressMatch {
    pub raw_text: String,
    pub components: AddressComponents,
    pub confidence_score: f64,
    pub region: Region,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_iter_order_and_len() {
        let components = AddressComponents {
            postal_code: Some("400001".to_string()),
            street: Some("Mahapalika Marg".to_string()),
            city: Some("Mumbai".to_string()),
            ..Default::default()
        };
        let names: Vec<&str> = components.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["postal_code", "street", "city"]);
        assert_eq!(components.len(), 3);
        assert!(!components.is_empty());
    }

    #[test]
    fn test_components_get() {
        let components = AddressComponents {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(components.get("city"), Some("Pune"));
        assert_eq!(components.get("street"), None);
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::NorthIndia.to_string(), "north_india");
        assert_eq!(Region::Unknown.to_string(), "unknown");
    }
}
