use crate::models::data::Region;

/// Canonical state name plus the spelling and abbreviation variants that are
/// accepted when matching a state in running text. Matching is case-sensitive
/// so that short abbreviations ("UP", "MH") do not collide with ordinary words.
pub const STATE_ALIASES: &[(&str, &[&str])] = &[
    ("Maharashtra", &["Maharashtra", "MH", "Maha"]),
    ("Delhi", &["Delhi", "New Delhi", "NCR", "DL", "National Capital Territory"]),
    ("Karnataka", &["Karnataka", "KA", "Kar"]),
    ("Tamil Nadu", &["Tamil Nadu", "Tamilnadu", "TN"]),
    ("West Bengal", &["West Bengal", "WB", "Bengal"]),
    ("Uttar Pradesh", &["Uttar Pradesh", "UP", "U.P.", "Purvanchal"]),
    ("Gujarat", &["Gujarat", "GJ"]),
    ("Rajasthan", &["Rajasthan", "RJ"]),
    ("Madhya Pradesh", &["Madhya Pradesh", "MP", "M.P."]),
    ("Andhra Pradesh", &["Andhra Pradesh", "AP"]),
    ("Telangana", &["Telangana", "TG", "TS"]),
    ("Bihar", &["Bihar", "BR"]),
    ("Punjab", &["Punjab", "PB"]),
    ("Haryana", &["Haryana", "HR"]),
    ("Odisha", &["Odisha", "Orissa", "OD"]),
    ("Kerala", &["Kerala", "KL"]),
    ("Jharkhand", &["Jharkhand", "JH"]),
    ("Assam", &["Assam", "AS"]),
    ("Chhattisgarh", &["Chhattisgarh", "CG", "C.G."]),
    ("Goa", &["Goa", "GA"]),
];

/// Major cities recognised by the literal city rule and the place tagger
/// gazetteer.
pub const MAJOR_CITIES: &[&str] = &[
    "Mumbai", "Pune", "Delhi", "Bangalore", "Chennai", "Hyderabad", "Kolkata",
    "Ahmedabad", "Jaipur", "Lucknow", "Surat", "Bhopal", "Indore", "Nagpur",
    "Visakhapatnam", "Patna", "Chandigarh", "Coimbatore", "Thane", "Vadodara",
    "Ludhiana", "Agra", "Nashik",
];

/// City values accepted by the plausibility check even when shorter than the
/// generic length floor.
pub const VALID_CITIES: &[&str] = &[
    "mumbai", "delhi", "bangalore", "hyderabad", "chennai", "kolkata", "pune",
    "ahmedabad", "surat", "jaipur", "bandra", "u.s.a.", "washington",
    "new york", "bandra-kurla", "east", "west",
];

/// Legal-boilerplate fragments that mark a component set as a false positive.
/// The corpus this extractor was tuned on is dominated by contract text, and
/// these phrases are its most common contaminants.
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "shall be final",
    "are involved",
    "difference is in",
    "dates fixed for",
    "hearing of a case",
    "where the main",
    "not be questioned",
];

pub struct RegionInfo {
    pub region: Region,
    pub states: Vec<&'static str>,
    pub cities: Vec<&'static str>,
    pub terms: Vec<&'static str>,
}

/// Region lookup tables. Declaration order is load-bearing: classification
/// stops at the first region that matches, north through east.
pub struct RegionRules {
    pub regions: Vec<RegionInfo>,
}

impl RegionRules {
    pub fn new() -> Self {
        let mut regions = Vec::new();

        regions.push(RegionInfo {
            region: Region::NorthIndia,
            states: vec![
                "Delhi", "Haryana", "Punjab", "Uttar Pradesh", "Uttarakhand",
                "Himachal Pradesh", "Jammu and Kashmir", "Leh", "Ladakh",
            ],
            cities: vec![
                "Delhi", "New Delhi", "Gurgaon", "Noida", "Chandigarh", "Lucknow",
                "Kanpur", "Varanasi", "Prayagraj", "Dehradun", "Shimla", "Srinagar",
                "Jammu", "Leh", "Agra", "Meerut", "Ludhiana", "Amritsar",
            ],
            terms: vec![
                "chowk", "bazaar", "gali", "mohalla", "nagar", "vihar", "kunj",
                "puram",
            ],
        });

        regions.push(RegionInfo {
            region: Region::SouthIndia,
            states: vec![
                "Karnataka", "Tamil Nadu", "Kerala", "Andhra Pradesh", "Telangana",
                "Puducherry",
            ],
            cities: vec![
                "Bangalore", "Chennai", "Hyderabad", "Kochi", "Thiruvananthapuram",
                "Mysuru", "Coimbatore", "Madurai", "Visakhapatnam", "Vijayawada",
                "Mangalore", "Kozhikode", "Thrissur", "Warangal",
            ],
            terms: vec![
                "main", "cross", "circle", "nilaya", "halli", "nagar", "colony",
                "layout",
            ],
        });

        regions.push(RegionInfo {
            region: Region::WestIndia,
            states: vec!["Maharashtra", "Gujarat", "Goa", "Rajasthan"],
            cities: vec![
                "Mumbai", "Pune", "Ahmedabad", "Vadodara", "Panaji", "Jaipur",
                "Nagpur", "Nashik", "Surat", "Rajkot", "Margao", "Jodhpur",
                "Udaipur", "Thane", "Navi Mumbai", "Borivali",
            ],
            terms: vec![
                "society", "pada", "wadi", "chawl", "villa", "apartment",
                "heights", "towers",
            ],
        });

        regions.push(RegionInfo {
            region: Region::EastIndia,
            states: vec![
                "West Bengal", "Odisha", "Bihar", "Assam", "Sikkim", "Meghalaya",
                "Tripura", "Manipur", "Nagaland", "Arunachal Pradesh", "Mizoram",
            ],
            cities: vec![
                "Kolkata", "Bhubaneswar", "Patna", "Guwahati", "Gangtok",
                "Shillong", "Agartala", "Imphal", "Kohima", "Itanagar", "Aizawl",
                "Cuttack", "Siliguri",
            ],
            terms: vec![
                "para", "sarani", "bagan", "ghat", "tola", "chowk", "path", "lane",
            ],
        });

        RegionRules { regions }
    }
}

impl Default for RegionRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rules_order() {
        let rules = RegionRules::new();
        let order: Vec<Region> = rules.regions.iter().map(|info| info.region).collect();
        assert_eq!(
            order,
            vec![
                Region::NorthIndia,
                Region::SouthIndia,
                Region::WestIndia,
                Region::EastIndia
            ]
        );
    }

    #[test]
    fn test_state_alias_table_has_canonical_variant() {
        for (canonical, variants) in STATE_ALIASES {
            assert!(
                variants.contains(canonical),
                "{} missing its own canonical spelling",
                canonical
            );
        }
    }
}
