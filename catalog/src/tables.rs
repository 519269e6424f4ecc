use crate::models::{CertificationTier, Neighborhood};
use common::{Error, Result};
use std::ops::{Range, RangeInclusive};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub service_type: String,
    pub titles: Vec<String>,
}

impl ServiceCategory {
    pub fn new(service_type: &str, titles: &[&str]) -> Self {
        Self {
            service_type: service_type.to_string(),
            titles: to_strings(titles),
        }
    }
}

/// Static inputs for catalog generation.
///
/// Everything the generator samples from lives here so tests can swap in
/// small tables without touching generation logic.
#[derive(Debug, Clone)]
pub struct CatalogTables {
    pub neighborhoods: Vec<Neighborhood>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub business_prefixes: Vec<String>,
    pub business_suffixes: Vec<String>,
    pub tiers: Vec<CertificationTier>,
    pub categories: Vec<ServiceCategory>,
    pub slot_durations: Vec<u32>,
    /// Half-open, like the price slider it feeds.
    pub base_price: Range<u32>,
    pub slot_hours: RangeInclusive<u8>,
    pub slots_per_provider: RangeInclusive<usize>,
    pub avatar_base_url: String,
}

impl CatalogTables {
    pub fn with_avatar_base_url(mut self, avatar_base_url: &str) -> Self {
        self.avatar_base_url = avatar_base_url.to_string();
        self
    }

    /// Fails fast on any table the generator would have to sample from empty.
    pub fn validate(&self) -> Result<()> {
        let empty = [
            ("neighborhoods", self.neighborhoods.is_empty()),
            ("first_names", self.first_names.is_empty()),
            ("last_names", self.last_names.is_empty()),
            ("business_prefixes", self.business_prefixes.is_empty()),
            ("business_suffixes", self.business_suffixes.is_empty()),
            ("tiers", self.tiers.is_empty()),
            ("categories", self.categories.is_empty()),
            ("slot_durations", self.slot_durations.is_empty()),
            ("base_price", self.base_price.is_empty()),
            ("slot_hours", self.slot_hours.is_empty()),
            ("slots_per_provider", self.slots_per_provider.is_empty()),
        ];
        if let Some((name, _)) = empty.iter().find(|(_, is_empty)| *is_empty) {
            return Err(Error::EmptyTable(name.to_string()));
        }

        if let Some(category) = self.categories.iter().find(|c| c.titles.is_empty()) {
            return Err(Error::EmptyTable(format!(
                "categories[{}].titles",
                category.service_type
            )));
        }

        if *self.slot_hours.end() > 23 {
            return Err(Error::InvalidInput(format!(
                "slot hours must stay within 0..=23, got {:?}",
                self.slot_hours
            )));
        }

        // Two minute marks per hour bound the number of distinct slot times.
        let distinct_times = self.slot_hours.clone().count() * 2;
        if *self.slots_per_provider.end() > distinct_times {
            return Err(Error::InvalidInput(format!(
                "cannot draw {} unique slot times from {} candidates",
                self.slots_per_provider.end(),
                distinct_times
            )));
        }

        Ok(())
    }
}

impl Default for CatalogTables {
    fn default() -> Self {
        Self {
            neighborhoods: vec![
                Neighborhood::new("Yorkville", 43.6709, -79.3957),
                Neighborhood::new("The Annex", 43.6626, -79.4),
                Neighborhood::new("Rosedale", 43.6766, -79.3782),
                Neighborhood::new("Queen West", 43.6466, -79.4015),
                Neighborhood::new("Leslieville", 43.6578, -79.329),
                Neighborhood::new("Liberty Village", 43.6371, -79.4181),
                Neighborhood::new("Distillery District", 43.6503, -79.3595),
                Neighborhood::new("Kensington Market", 43.6547, -79.4025),
                Neighborhood::new("Bloor West Village", 43.6497, -79.4837),
                Neighborhood::new("Riverdale", 43.6658, -79.3528),
                Neighborhood::new("Cabbagetown", 43.6669, -79.3672),
                Neighborhood::new("High Park", 43.6465, -79.4634),
                Neighborhood::new("Junction", 43.6676, -79.4659),
                Neighborhood::new("Beaches", 43.6682, -79.2902),
                Neighborhood::new("Forest Hill", 43.6906, -79.4156),
            ],
            first_names: to_strings(&[
                "Emma", "Sophia", "Luna", "Maya", "Aria", "Kai", "Zen", "Nova", "River", "Sage",
                "Aurora", "Willow", "Sky", "Rain", "Crystal", "Jasper", "Amber", "Rose", "Lotus",
                "Star",
            ]),
            last_names: to_strings(&[
                "Peace", "Harmony", "Light", "Spirit", "Moon", "Sun", "Waters", "Earth", "Wind",
                "Heart", "Soul", "Grace", "Love", "Joy", "Hope", "Faith", "Truth", "Wisdom",
                "Dream", "Song",
            ]),
            business_prefixes: to_strings(&[
                "Zen", "Sacred", "Healing", "Peaceful", "Tranquil", "Divine", "Serene", "Mystic",
                "Spiritual", "Harmonious", "Celestial", "Pure", "Natural", "Mindful", "Conscious",
            ]),
            business_suffixes: to_strings(&[
                "Healing Center",
                "Wellness Studio",
                "Reiki Space",
                "Energy Center",
                "Holistic Hub",
                "Healing Room",
                "Wellness Sanctuary",
                "Spirit Studio",
                "Energy Sanctuary",
                "Healing Sanctuary",
            ]),
            tiers: CertificationTier::ALL.to_vec(),
            categories: vec![
                ServiceCategory::new(
                    "Energy Healing",
                    &[
                        "Reiki Healing Session",
                        "Chakra Balancing",
                        "Energy Cleansing",
                        "Pranic Healing",
                        "Quantum Touch Session",
                    ],
                ),
                ServiceCategory::new(
                    "Spiritual Coaching",
                    &[
                        "Life Path Guidance",
                        "Spiritual Mentoring",
                        "Soul Purpose Session",
                        "Mindfulness Coaching",
                        "Spiritual Development",
                    ],
                ),
                ServiceCategory::new(
                    "Meditation",
                    &[
                        "Guided Meditation",
                        "Sound Bath Session",
                        "Breathwork Journey",
                        "Mindfulness Training",
                        "Group Meditation",
                    ],
                ),
                ServiceCategory::new(
                    "Tarot Reading",
                    &[
                        "Tarot Card Reading",
                        "Oracle Card Session",
                        "Psychic Reading",
                        "Intuitive Guidance",
                        "Destiny Reading",
                    ],
                ),
                ServiceCategory::new(
                    "Crystal Healing",
                    &[
                        "Crystal Therapy",
                        "Gemstone Healing",
                        "Crystal Grid Session",
                        "Stone Medicine",
                        "Crystal Attunement",
                    ],
                ),
                ServiceCategory::new(
                    "Sound Therapy",
                    &[
                        "Sound Healing",
                        "Singing Bowl Session",
                        "Vibrational Therapy",
                        "Gong Bath",
                        "Voice Healing",
                    ],
                ),
            ],
            slot_durations: vec![30, 45, 60, 75, 90],
            base_price: 70..150,
            slot_hours: 7..=21,
            slots_per_provider: 2..=4,
            avatar_base_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=".to_string(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
