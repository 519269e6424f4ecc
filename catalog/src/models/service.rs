use super::{CertificationTier, Coordinates, Provider, SlotTime, TimeSlot};
use serde::{Deserialize, Serialize};

/// One bookable pairing of a provider and one of its time slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub provider_id: String,
    pub title: String,
    pub service_type: String,
    pub provider_name: String,
    pub business_name: String,
    pub provider_image_ref: String,
    pub rating: f64,
    pub price: u32,
    pub location: String,
    pub distance: f64,
    pub coordinates: Coordinates,
    pub certification_tier: CertificationTier,
    pub start_time: SlotTime,
    pub duration_minutes: u32,
}

impl Service {
    /// Copies the provider-level fields; `title`, `service_type` and `distance`
    /// are sampled per service by the generator.
    pub fn for_slot(
        provider: &Provider,
        slot: &TimeSlot,
        service_type: &str,
        title: &str,
        distance: f64,
    ) -> Self {
        Self {
            id: format!("{}-{}", provider.id, slot.time.compact()),
            provider_id: provider.id.clone(),
            title: title.to_string(),
            service_type: service_type.to_string(),
            provider_name: provider.provider_name.clone(),
            business_name: provider.business_name.clone(),
            provider_image_ref: provider.provider_image_ref.clone(),
            rating: provider.rating,
            price: provider.base_price,
            location: provider.location.clone(),
            distance,
            coordinates: provider.coordinates,
            certification_tier: provider.certification_tier,
            start_time: slot.time,
            duration_minutes: slot.duration_minutes,
        }
    }

    /// Hyphenated lower-case form of `service_type`, as used by filter values.
    pub fn service_type_slug(&self) -> String {
        self.service_type.to_lowercase().replace(' ', "-")
    }
}
