use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::geo::Coordinates;

/// A text-search hit from the places directory.
#[derive(Debug, Clone, Default)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub types: Vec<String>,
    pub location: Option<Coordinates>,
    pub photo_reference: Option<String>,
}

/// Extra fields the directory returns for a single place lookup.
#[derive(Debug, Clone, Default)]
pub struct PlaceDetailsRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Option<Coordinates>,
    pub opening_hours: Vec<String>,
    pub open_now: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub description: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub opening_hours: Vec<String>,
    pub is_open: Option<bool>,
}

impl Attraction {
    /// Merges a search hit with its details; details win where present.
    pub fn merge(
        summary: PlaceSummary,
        details: Option<PlaceDetailsRecord>,
        photo_url: Option<String>,
    ) -> Self {
        let details = details.unwrap_or_default();
        let description = if summary.types.is_empty() {
            "Tourist attraction".to_string()
        } else {
            summary
                .types
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            id: summary.place_id,
            name: details.name.unwrap_or(summary.name),
            location: details.address.or(summary.address),
            description,
            rating: details.rating.or(summary.rating).unwrap_or(0.0),
            photo_url,
            website: details.website,
            phone: details.phone,
            coordinates: details.location.or(summary.location),
            opening_hours: details.opening_hours,
            is_open: details.open_now,
        }
    }
}

/// AI-written visitor information for a place. The field docs double as the
/// schema descriptions the model fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInsights {
    /// 2-3 sentence engaging description.
    pub description: String,
    /// Estimated entry fee in INR, 0 if free.
    pub entry_fee: f64,
    /// Typical opening hours, e.g. "9 AM - 6 PM".
    pub timing: String,
    /// Best time to visit, e.g. "Oct - Mar".
    pub best_season: String,
    /// Top highlights of the place.
    pub highlights: Vec<String>,
    /// Practical travel tips.
    pub tips: Vec<String>,
}

impl PlaceInsights {
    pub fn fallback() -> Self {
        Self {
            description: "A popular tourist destination".to_string(),
            entry_fee: 0.0,
            timing: "Open daily".to_string(),
            best_season: "Year-round".to_string(),
            highlights: Vec::new(),
            tips: Vec::new(),
        }
    }
}
