// Maps an extracted component set (or regional vocabulary in the block text)
// to one of four macro-regions. First hit wins; table order breaks ties.

use crate::models::{AddressComponents, Region, RegionRules};

pub struct RegionClassifier {
    rules: RegionRules,
}

impl RegionClassifier {
    pub fn new() -> Self {
        RegionClassifier {
            rules: RegionRules::new(),
        }
    }

    pub fn classify(&self, block: &str, components: &AddressComponents) -> Region {
        if let Some(state) = &components.state {
            let state_lower = state.to_lowercase();
            for info in &self.rules.regions {
                if info
                    .states
                    .iter()
                    .any(|s| state_lower.contains(&s.to_lowercase()))
                {
                    return info.region;
                }
            }
        }

        if let Some(city) = &components.city {
            let city_lower = city.to_lowercase();
            for info in &self.rules.regions {
                if info
                    .cities
                    .iter()
                    .any(|c| city_lower.contains(&c.to_lowercase()))
                {
                    return info.region;
                }
            }
        }

        // Regional vocabulary in the raw block text is the weakest signal.
        let text_lower = block.to_lowercase();
        for info in &self.rules.regions {
            if info.terms.iter().any(|term| text_lower.contains(term)) {
                return info.region;
            }
        }

        Region::Unknown
    }
}

impl Default for RegionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
