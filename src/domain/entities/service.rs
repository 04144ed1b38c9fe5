use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geo::{Coordinates, Distance};
use crate::domain::errors::DomainError;

/// Class of emergency service a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Police,
    Hospital,
    Fire,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [Self::Police, Self::Hospital, Self::Fire];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::Hospital => "hospital",
            Self::Fire => "fire",
        }
    }

    /// Place type understood by the upstream places directory.
    pub fn provider_type(&self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::Hospital => "hospital",
            Self::Fire => "fire_station",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "police" => Ok(Self::Police),
            "hospital" => Ok(Self::Hospital),
            "fire" => Ok(Self::Fire),
            other => Err(DomainError::invalid_category(other)),
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub category: ServiceCategory,
}

/// A service location with its distance from the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RankedService {
    #[serde(flatten)]
    pub service: ServiceLocation,
    pub distance: Distance,
}

impl RankedService {
    pub fn new(origin: &Coordinates, service: ServiceLocation) -> Self {
        let distance = origin.distance_to(&service.location);
        Self { service, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_known_tokens() {
        assert_eq!("police".parse::<ServiceCategory>().unwrap(), ServiceCategory::Police);
        assert_eq!("hospital".parse::<ServiceCategory>().unwrap(), ServiceCategory::Hospital);
        assert_eq!("fire".parse::<ServiceCategory>().unwrap(), ServiceCategory::Fire);
    }

    #[test]
    fn test_category_rejects_unknown_token() {
        let err = "volcano".parse::<ServiceCategory>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(ref t) if t == "volcano"));
        assert!("Police".parse::<ServiceCategory>().is_err());
        assert!("fire_station".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_category_provider_vocabulary() {
        let types: Vec<_> = ServiceCategory::ALL.iter().map(|c| c.provider_type()).collect();
        assert_eq!(types, vec!["police", "hospital", "fire_station"]);
    }

    #[test]
    fn test_ranked_service_serializes_flat() {
        let origin = Coordinates::new(19.0760, 72.8777).unwrap();
        let ranked = RankedService::new(
            &origin,
            ServiceLocation {
                id: "abc".into(),
                name: "Colaba Police Station".into(),
                address: "Colaba".into(),
                location: origin,
                phone: None,
                category: ServiceCategory::Police,
            },
        );

        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["location"]["lat"], 19.0760);
        assert_eq!(json["category"], "police");
        assert_eq!(json["distance"], "0 m");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_phone_serialized_when_known() {
        let service = ServiceLocation {
            id: "kem".into(),
            name: "KEM Hospital".into(),
            address: "Parel".into(),
            location: Coordinates::new(19.0025, 72.8417).unwrap(),
            phone: Some("022 2410 7000".into()),
            category: ServiceCategory::Hospital,
        };

        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["phone"], "022 2410 7000");
    }
}
