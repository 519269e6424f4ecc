use super::TimeSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Neighborhood {
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            coordinates: Coordinates { lat, lng },
        }
    }
}

/// Display-only trust classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationTier {
    Gold,
    Silver,
    Blue,
    Unverified,
}

impl CertificationTier {
    pub const ALL: [CertificationTier; 4] = [
        CertificationTier::Gold,
        CertificationTier::Silver,
        CertificationTier::Blue,
        CertificationTier::Unverified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationTier::Gold => "gold",
            CertificationTier::Silver => "silver",
            CertificationTier::Blue => "blue",
            CertificationTier::Unverified => "unverified",
        }
    }
}

impl fmt::Display for CertificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub business_name: String,
    pub provider_name: String,
    pub provider_image_ref: String,
    pub rating: f64,
    pub base_price: u32,
    pub location: String,
    pub coordinates: Coordinates,
    pub certification_tier: CertificationTier,
    pub time_slots: Vec<TimeSlot>,
}
