use catalog::{CertificationTier, Coordinates, Service};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `luna-light` -> `Luna Light`.
pub fn provider_name_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Luna Light` -> `luna-light`.
pub fn slug_for(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub user_image: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Recent,
    Highest,
    Lowest,
}

impl ReviewSort {
    /// Unknown names sort by recency.
    pub fn parse(value: &str) -> Self {
        match value {
            "highest" => ReviewSort::Highest,
            "lowest" => ReviewSort::Lowest,
            _ => ReviewSort::Recent,
        }
    }
}

/// Stable: reviews that compare equal keep their relative order.
pub fn sort_reviews(reviews: &mut [Review], sort: ReviewSort) {
    match sort {
        ReviewSort::Recent => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
        ReviewSort::Highest => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSort::Lowest => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarCount {
    pub stars: u8,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub average: f64,
    /// Five buckets, 5 stars first.
    pub distribution: Vec<StarCount>,
}

impl ReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total = reviews.len();
        let average = if total == 0 {
            0.0
        } else {
            reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / total as f64
        };

        let distribution = (1..=5u8)
            .rev()
            .map(|stars| {
                let count = reviews.iter().filter(|r| r.rating == stars).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                StarCount {
                    stars,
                    count,
                    percentage,
                }
            })
            .collect();

        Self {
            total,
            average,
            distribution,
        }
    }
}

/// Reviews shown on every generated provider's profile.
pub fn sample_reviews(avatar_base_url: &str) -> Vec<Review> {
    let review = |id: &str, user_name: &str, seed: &str, rating: u8, comment: &str, date: (i32, u32, u32)| Review {
        id: id.to_string(),
        user_name: user_name.to_string(),
        user_image: format!("{}{}", avatar_base_url, seed),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    };

    vec![
        review(
            "1",
            "Emily Chen",
            "emily",
            5,
            "Life-changing experience! An incredible gift for healing.",
            (2024, 3, 15),
        ),
        review(
            "2",
            "Michael Smith",
            "michael",
            4,
            "Deeply transformative session. Highly recommended!",
            (2024, 3, 10),
        ),
        review(
            "3",
            "Sofia Rodriguez",
            "sofia",
            5,
            "Professional, insightful, and truly gifted healer.",
            (2024, 3, 5),
        ),
    ]
}

/// Services of the provider addressed by `key`, either a provider id or a
/// slug of the provider's name. A slug shared by several providers resolves
/// to the first one in catalog order.
pub fn provider_services(services: &[Service], key: &str) -> Vec<Service> {
    let provider_id = services
        .iter()
        .find(|s| s.provider_id == key)
        .or_else(|| {
            let name = provider_name_from_slug(key);
            services.iter().find(|s| s.provider_name == name)
        })
        .map(|s| s.provider_id.clone());

    match provider_id {
        Some(id) => services.iter().filter(|s| s.provider_id == id).cloned().collect(),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub id: String,
    pub slug: String,
    pub provider_name: String,
    pub business_name: String,
    pub provider_image_ref: String,
    pub rating: f64,
    pub location: String,
    pub coordinates: Coordinates,
    pub certification_tier: CertificationTier,
    pub services: Vec<Service>,
    pub reviews: Vec<Review>,
    pub review_stats: ReviewStats,
}

impl ProviderProfile {
    /// `None` when `services` is empty. All services must belong to one provider.
    pub fn new(services: Vec<Service>, mut reviews: Vec<Review>, sort: ReviewSort) -> Option<Self> {
        let first = services.first()?.clone();
        sort_reviews(&mut reviews, sort);
        let review_stats = ReviewStats::from_reviews(&reviews);

        Some(Self {
            id: first.provider_id,
            slug: slug_for(&first.provider_name),
            provider_name: first.provider_name,
            business_name: first.business_name,
            provider_image_ref: first.provider_image_ref,
            rating: first.rating,
            location: first.location,
            coordinates: first.coordinates,
            certification_tier: first.certification_tier,
            services,
            reviews,
            review_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogGenerator, CatalogTables};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn review(id: &str, rating: u8, day: u32) -> Review {
        Review {
            id: id.to_string(),
            user_name: "Guest".to_string(),
            user_image: String::new(),
            rating,
            comment: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[test]
    fn test_slug_round_trip() {
        assert_eq!(provider_name_from_slug("luna-light"), "Luna Light");
        assert_eq!(provider_name_from_slug("sage"), "Sage");
        assert_eq!(slug_for("Luna Light"), "luna-light");
        assert_eq!(provider_name_from_slug(&slug_for("River Song")), "River Song");
    }

    #[test]
    fn test_sort_reviews() {
        let mut reviews = vec![review("a", 4, 10), review("b", 5, 15), review("c", 3, 5)];

        sort_reviews(&mut reviews, ReviewSort::Recent);
        assert_eq!(reviews.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b", "a", "c"]);

        sort_reviews(&mut reviews, ReviewSort::Highest);
        assert_eq!(reviews[0].id, "b");

        sort_reviews(&mut reviews, ReviewSort::Lowest);
        assert_eq!(reviews[0].id, "c");

        assert_eq!(ReviewSort::parse("oldest"), ReviewSort::Recent);
        assert_eq!(ReviewSort::parse("lowest"), ReviewSort::Lowest);
    }

    #[test]
    fn test_sort_keeps_ties_in_input_order() {
        let mut reviews = sample_reviews("");

        sort_reviews(&mut reviews, ReviewSort::Highest);
        let names: Vec<&str> = reviews.iter().map(|r| r.user_name.as_str()).collect();
        assert_eq!(names, vec!["Emily Chen", "Sofia Rodriguez", "Michael Smith"]);

        sort_reviews(&mut reviews, ReviewSort::Lowest);
        let names: Vec<&str> = reviews.iter().map(|r| r.user_name.as_str()).collect();
        assert_eq!(names, vec!["Michael Smith", "Emily Chen", "Sofia Rodriguez"]);
    }

    #[test]
    fn test_review_stats() {
        let stats = ReviewStats::from_reviews(&sample_reviews("https://a.test/"));

        assert_eq!(stats.total, 3);
        assert!((stats.average - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.distribution.len(), 5);
        assert_eq!(stats.distribution[0].stars, 5);
        assert_eq!(stats.distribution[0].count, 2);
        assert_eq!(stats.distribution[1].count, 1);
        assert!((stats.distribution[0].percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.distribution[4].count, 0);
    }

    #[test]
    fn test_review_stats_empty() {
        let stats = ReviewStats::from_reviews(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average, 0.0);
        assert!(stats.distribution.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn test_provider_lookup_by_id_and_slug() {
        let generator = CatalogGenerator::new(CatalogTables::default()).unwrap();
        let services = generator.generate_catalog(&mut StdRng::seed_from_u64(8), 10);

        let by_id = provider_services(&services, "provider-4");
        assert!(!by_id.is_empty());
        assert!(by_id.iter().all(|s| s.provider_id == "provider-4"));

        let slug = slug_for(&by_id[0].provider_name);
        let by_slug = provider_services(&services, &slug);
        assert!(!by_slug.is_empty());
        assert!(by_slug.iter().all(|s| s.provider_name == by_id[0].provider_name));

        assert!(provider_services(&services, "provider-999").is_empty());
    }

    #[test]
    fn test_profile_from_services() {
        let generator = CatalogGenerator::new(CatalogTables::default()).unwrap();
        let services = generator.generate_catalog(&mut StdRng::seed_from_u64(8), 10);
        let own = provider_services(&services, "provider-2");

        let profile = ProviderProfile::new(own.clone(), sample_reviews(""), ReviewSort::Highest).unwrap();
        assert_eq!(profile.id, "provider-2");
        assert_eq!(profile.services.len(), own.len());
        assert_eq!(profile.reviews[0].rating, 5);
        assert_eq!(profile.review_stats.total, 3);

        assert!(ProviderProfile::new(Vec::new(), Vec::new(), ReviewSort::Recent).is_none());
    }
}
