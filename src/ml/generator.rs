// Synthetic labeled-address generator. Produces Indian-style addresses with
// randomized components, separators and surrounding document context, each
// paired with its field annotations.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::dataset::DatasetRecord;

const PREFIX_TYPES: &[&str] = &["Flat", "Shop", "Plot", "Unit", "Office", "Room", "House"];

const BUILDING_TYPES: &[&str] = &[
    "Apartments",
    "Towers",
    "Heights",
    "Complex",
    "Residency",
    "Plaza",
    "Manor",
    "Building",
    "Society",
    "Enclave",
    "Paradise",
    "Arcade",
    "Hub",
    "Empire",
];

const LANDMARK_RELATIONS: &[&str] = &[
    "near",
    "opposite",
    "behind",
    "next to",
    "adjacent to",
    "in front of",
];

const LANDMARK_PLACES: &[&str] = &[
    "Railway Station",
    "Metro Station",
    "Bus Stop",
    "Hospital",
    "Mall",
    "Park",
    "Temple",
    "School",
    "Market",
    "Police Station",
    "Bank",
    "Restaurant",
];

const AREA_TYPES: &[&str] = &[
    "Sector",
    "Colony",
    "Nagar",
    "Layout",
    "Extension",
    "Phase",
    "Block",
    "Area",
    "Industrial Area",
    "Business Park",
    "Township",
];

const STREET_TYPES: &[&str] = &[
    "Road",
    "Street",
    "Lane",
    "Marg",
    "Path",
    "Avenue",
    "Boulevard",
];

const FIRST_NAMES: &[&str] = &[
    "Aditya", "Priya", "Rahul", "Ananya", "Vikram", "Sneha", "Arjun", "Kavita", "Rohan", "Meera",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Reddy", "Iyer", "Khan", "Gupta", "Nair", "Joshi", "Chatterjee", "Mehta",
];

const COMPANIES: &[&str] = &[
    "Trinity Infotech",
    "Lotus Exports",
    "Apex Industries",
    "Sunrise Traders",
    "Pinnacle Group",
    "Galaxy Enterprises",
];

const DESIGNATIONS: &[&str] = &[
    "Senior Manager",
    "Consultant",
    "Director",
    "Accountant",
    "Software Engineer",
];

// City, state and a pincode prefix consistent with the city.
const CITY_STATES: &[(&str, &str, u32)] = &[
    ("Mumbai", "Maharashtra", 400),
    ("Pune", "Maharashtra", 411),
    ("Delhi", "Delhi", 110),
    ("Bangalore", "Karnataka", 560),
    ("Chennai", "Tamil Nadu", 600),
    ("Hyderabad", "Telangana", 500),
    ("Kolkata", "West Bengal", 700),
    ("Ahmedabad", "Gujarat", 380),
    ("Jaipur", "Rajasthan", 302),
    ("Lucknow", "Uttar Pradesh", 226),
    ("Patna", "Bihar", 800),
    ("Kochi", "Kerala", 682),
];

const CONTEXTS: &[&str] = &[
    "Delivery Address: {address}",
    "Please deliver to: {address}",
    "My new address is {address}",
    "The meeting will be held at {address}",
    "Our office has moved to {address}",
    "The event venue is {address}",
    "For correspondence: {address}",
    "Please update my address to {address}",
    "The pickup location is {address}",
    "{name}'s residence: {address}",
    "The property is located at {address}",
    "Send all documents to {address}",
    "Current residence: {address}",
    "Billing Address: {address}",
    "Site Location: {address}",
    "Letterhead: {name}\n{designation}\n{institute}\n{address}\n{contact_info}",
];

// Joins between address parts; ", " is listed more than once to weight it.
const SEPARATORS: &[&str] = &[", ", " ", ", ", " - ", ", "];

pub struct AddressGenerator {
    rng: StdRng,
}

impl AddressGenerator {
    pub fn new() -> Self {
        AddressGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded generator for reproducible datasets.
    pub fn seeded(seed: u64) -> Self {
        AddressGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<DatasetRecord> {
        (0..count).map(|_| self.generate_record()).collect()
    }

    pub fn generate_record(&mut self) -> DatasetRecord {
        let (city, state, pin_prefix) = self.pick(CITY_STATES);

        let has_unit = self.rng.random_bool(0.9);
        let has_building = self.rng.random_bool(0.95);
        let has_landmark = self.rng.random_bool(0.7);
        let has_street = self.rng.random_bool(0.9);
        let has_area = self.rng.random_bool(0.8);
        let include_india = self.rng.random_bool(0.5);

        let mut annotations = BTreeMap::new();
        let mut parts: Vec<String> = Vec::new();
        let mut push = |annotations: &mut BTreeMap<String, String>,
                        parts: &mut Vec<String>,
                        key: &str,
                        value: String| {
            annotations.insert(key.to_string(), value.clone());
            parts.push(value);
        };

        if has_unit {
            let unit = self.unit_number();
            push(&mut annotations, &mut parts, "room_no", unit);
        }
        if has_building {
            let building = self.building_name();
            push(&mut annotations, &mut parts, "building_name", building);
        }
        if has_landmark {
            let landmark = self.landmark();
            push(&mut annotations, &mut parts, "landmark", landmark);
        }
        if has_street {
            let street = self.street();
            push(&mut annotations, &mut parts, "street", street);
        }
        if has_area {
            let area = self.area(city);
            push(&mut annotations, &mut parts, "area", area);
        }

        push(&mut annotations, &mut parts, "city", city.to_string());
        push(&mut annotations, &mut parts, "state", state.to_string());
        let pincode = self.pincode(city, pin_prefix);
        push(&mut annotations, &mut parts, "pincode", pincode);

        if include_india {
            parts.push("India".to_string());
        }

        let mut address = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                address.push_str(self.pick(SEPARATORS));
            }
            address.push_str(part);
        }

        let name = format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
        let contact = format!(
            "Email: {}@example.com, Phone: +91-{}",
            name.to_lowercase().replace(' ', "."),
            self.rng.random_range(7_000_000_000u64..10_000_000_000u64)
        );
        let text = self
            .pick(CONTEXTS)
            .replace("{address}", &address)
            .replace("{name}", &name)
            .replace("{designation}", self.pick(DESIGNATIONS))
            .replace("{institute}", self.pick(COMPANIES))
            .replace("{contact_info}", &contact);

        DatasetRecord { text, annotations }
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        // Slices here are compile-time constants, never empty.
        *items.choose(&mut self.rng).unwrap()
    }

    fn unit_number(&mut self) -> String {
        let n = self.rng.random_range(1..1000);
        match self.rng.random_range(0..5) {
            0 => format!("{} No. {}", self.pick(PREFIX_TYPES), n),
            1 => format!("{} {}", self.pick(PREFIX_TYPES), n),
            2 => format!("#{}", n),
            3 => format!("{}/{}", n, self.rng.random_range(1..101)),
            _ => format!("{}-{}", self.pick(PREFIX_TYPES), n),
        }
    }

    fn building_name(&mut self) -> String {
        match self.rng.random_range(0..4) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(BUILDING_TYPES)),
            1 => format!("{} {}", self.pick(FIRST_NAMES), self.pick(BUILDING_TYPES)),
            2 => {
                let honorific = self.pick(&["The", "Sri", "Shree"]);
                format!(
                    "{} {} {}",
                    honorific,
                    self.pick(LAST_NAMES),
                    self.pick(BUILDING_TYPES)
                )
            }
            _ => format!("{} {}", self.pick(COMPANIES), self.pick(BUILDING_TYPES)),
        }
    }

    fn landmark(&mut self) -> String {
        format!(
            "{} {}",
            self.pick(LANDMARK_RELATIONS),
            self.pick(LANDMARK_PLACES)
        )
    }

    fn street(&mut self) -> String {
        match self.rng.random_range(0..4) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(STREET_TYPES)),
            1 => format!(
                "{}th {}",
                self.rng.random_range(1..101),
                self.pick(STREET_TYPES)
            ),
            2 => format!("Main {}", self.pick(STREET_TYPES)),
            _ => format!(
                "Cross {} {}",
                self.pick(STREET_TYPES),
                self.rng.random_range(1..21)
            ),
        }
    }

    fn area(&mut self, city: &str) -> String {
        if self.rng.random_bool(0.5) {
            format!("{} {}", self.pick(AREA_TYPES), self.rng.random_range(1..101))
        } else {
            format!("{}-{}", city, self.pick(&["E", "W", "N", "S"]))
        }
    }

    fn pincode(&mut self, city: &str, pin_prefix: u32) -> String {
        let pin = format!("{}{:03}", pin_prefix, self.rng.random_range(0..1000));
        match self.rng.random_range(0..6) {
            0 => pin,
            1 => format!("{}-{}", city, pin),
            2 => format!("{} {}", city, pin),
            3 => format!("PIN: {}", pin),
            4 => format!("Pincode: {}", pin),
            _ => format!("{}-{}", city, self.rng.random_range(1..100)),
        }
    }
}

impl Default for AddressGenerator {
    fn default() -> Self {
        Self::new()
    }
}
