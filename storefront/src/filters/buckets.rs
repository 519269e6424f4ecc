use serde::Serialize;
use std::ops::Range;

/// Named hour window: start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBucket {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::EarlyMorning,
        TimeBucket::Morning,
        TimeBucket::Afternoon,
        TimeBucket::Evening,
    ];

    /// `None` for "any" and for values that are not a bucket; both mean no time filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "early-morning" => Some(TimeBucket::EarlyMorning),
            "morning" => Some(TimeBucket::Morning),
            "afternoon" => Some(TimeBucket::Afternoon),
            "evening" => Some(TimeBucket::Evening),
            _ => None,
        }
    }

    pub fn hours(&self) -> Range<u8> {
        match self {
            TimeBucket::EarlyMorning => 6..9,
            TimeBucket::Morning => 9..12,
            TimeBucket::Afternoon => 12..17,
            TimeBucket::Evening => 17..21,
        }
    }

    pub fn contains_hour(&self, hour: u8) -> bool {
        self.hours().contains(&hour)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::EarlyMorning => "early-morning",
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::EarlyMorning => "Early Morning (6AM-9AM)",
            TimeBucket::Morning => "Morning (9AM-12PM)",
            TimeBucket::Afternoon => "Afternoon (12PM-5PM)",
            TimeBucket::Evening => "Evening (5PM-9PM)",
        }
    }
}

/// Initial time selection of the filter bar for a wall-clock hour.
/// Early morning is never preselected.
pub fn default_time_filter(hour: u32) -> &'static str {
    match hour {
        9..=11 => TimeBucket::Morning.as_str(),
        12..=16 => TimeBucket::Afternoon.as_str(),
        17..=20 => TimeBucket::Evening.as_str(),
        _ => "any",
    }
}

/// Price band; a price on a boundary belongs to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBucket {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101-150")]
    UpTo150,
    #[serde(rename = "151-plus")]
    Above150,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::UpTo50,
        PriceBucket::UpTo100,
        PriceBucket::UpTo150,
        PriceBucket::Above150,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0-50" => Some(PriceBucket::UpTo50),
            "51-100" => Some(PriceBucket::UpTo100),
            "101-150" => Some(PriceBucket::UpTo150),
            "151-plus" => Some(PriceBucket::Above150),
            _ => None,
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceBucket::UpTo50 => price <= 50,
            PriceBucket::UpTo100 => price > 50 && price <= 100,
            PriceBucket::UpTo150 => price > 100 && price <= 150,
            PriceBucket::Above150 => price > 150,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::UpTo50 => "0-50",
            PriceBucket::UpTo100 => "51-100",
            PriceBucket::UpTo150 => "101-150",
            PriceBucket::Above150 => "151-plus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::UpTo50 => "$0 - $50",
            PriceBucket::UpTo100 => "$51 - $100",
            PriceBucket::UpTo150 => "$101 - $150",
            PriceBucket::Above150 => "$151+",
        }
    }
}
