use serde::{Deserialize, Serialize};

/// Live load of a station, as reported by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveLoad {
    Free,
    Normal,
    Busy,
}

impl LiveLoad {
    pub const ALL: [LiveLoad; 3] = [LiveLoad::Free, LiveLoad::Normal, LiveLoad::Busy];

    /// Wire value expected by the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveLoad::Free => "free",
            LiveLoad::Normal => "normal",
            LiveLoad::Busy => "busy",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            LiveLoad::Free => "Free",
            LiveLoad::Normal => "Normal",
            LiveLoad::Busy => "Busy",
        }
    }
}

/// Fuel availability at the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelAvailability {
    Available,
    Limited,
    Unavailable,
}

impl FuelAvailability {
    pub const ALL: [FuelAvailability; 3] = [
        FuelAvailability::Available,
        FuelAvailability::Limited,
        FuelAvailability::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelAvailability::Available => "available",
            FuelAvailability::Limited => "limited",
            FuelAvailability::Unavailable => "unavailable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelAvailability::Available => "Available",
            FuelAvailability::Limited => "Limited",
            FuelAvailability::Unavailable => "Unavailable",
        }
    }
}

/// Payload of `POST /update-station-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationStatusUpdate {
    pub is_open: bool,
    pub live_load: LiveLoad,
    pub fuel_availability: FuelAvailability,
}

impl StationStatusUpdate {
    /// Ordered form fields, named exactly as the server reads them.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if self.is_open {
            pairs.push(("is_open".to_string(), "on".to_string()));
        }
        pairs.push(("live_load".to_string(), self.live_load.as_str().to_string()));
        pairs.push((
            "fuel_availability".to_string(),
            self.fuel_availability.as_str().to_string(),
        ));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(LiveLoad::Free.as_str(), "free");
        assert_eq!(LiveLoad::Busy.as_str(), "busy");
        assert_eq!(FuelAvailability::Limited.as_str(), "limited");
        assert_eq!(
            serde_json::to_string(&LiveLoad::Normal).unwrap(),
            r#""normal""#
        );
        assert_eq!(
            serde_json::from_str::<FuelAvailability>(r#""unavailable""#).unwrap(),
            FuelAvailability::Unavailable
        );
    }

    #[test]
    fn test_wire_values_match_server_vocabulary() {
        // The server enums only accept these exact strings.
        for load in LiveLoad::ALL {
            assert!(["free", "normal", "busy"].contains(&load.as_str()));
        }
        for fuel in FuelAvailability::ALL {
            assert!(["available", "limited", "unavailable"].contains(&fuel.as_str()));
        }
    }

    #[test]
    fn test_form_pairs_when_open() {
        let update = StationStatusUpdate {
            is_open: true,
            live_load: LiveLoad::Busy,
            fuel_availability: FuelAvailability::Available,
        };
        assert_eq!(
            update.form_pairs(),
            vec![
                ("is_open".to_string(), "on".to_string()),
                ("live_load".to_string(), "busy".to_string()),
                ("fuel_availability".to_string(), "available".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_pairs_omit_unchecked_checkbox() {
        // Browsers omit an unchecked checkbox from the submitted fields.
        let update = StationStatusUpdate {
            is_open: false,
            live_load: LiveLoad::Free,
            fuel_availability: FuelAvailability::Unavailable,
        };
        let pairs = update.form_pairs();
        assert!(pairs.iter().all(|(name, _)| name != "is_open"));
        assert_eq!(pairs.len(), 2);
    }
}
