//! Wire types returned by the weather-and-activities service
//!
//! Field names follow the service's camelCase JSON (`windSpeed`, `bestTime`).
//! Nothing here is computed locally except [`WeatherSnapshot::feels_like`].

use serde::{Deserialize, Serialize};

/// Offset added to the reported temperature for the "feels like" readout.
pub const FEELS_LIKE_OFFSET: f64 = 2.0;

/// Current conditions for one city
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Open set of tags ("Sunny", "Cloudy", "Rainy", "Snowy", ...)
    pub condition: String,
    /// Percent
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
    /// km
    pub visibility: f64,
    pub description: String,
}

impl WeatherSnapshot {
    /// Derived "feels like" value shown next to the other readings.
    pub fn feels_like(&self) -> f64 {
        self.temperature + FEELS_LIKE_OFFSET
    }
}

/// One suggested activity for the current weather
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecommendation {
    pub name: String,
    pub description: String,
    pub category: String,
    pub rating: f64,
    pub duration: String,
    pub best_time: String,
}

/// The paired response to one submission.
///
/// Weather and activities always travel together so the view can never hold
/// one without the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub weather: WeatherSnapshot,
    #[serde(default)]
    pub activities: Vec<ActivityRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_decodes_camel_case_fields() {
        let body = json!({
            "weather": {
                "city": "Paris",
                "temperature": 18,
                "condition": "Cloudy",
                "humidity": 72,
                "windSpeed": 14,
                "visibility": 10,
                "description": "Mild and comfortable weather for various activities"
            },
            "activities": [{
                "name": "Café Hopping",
                "description": "Visit local coffee shops",
                "category": "Food & Drink",
                "rating": 4.4,
                "duration": "2-3 hours",
                "bestTime": "Afternoon"
            }]
        });

        let bundle: Bundle = serde_json::from_value(body).unwrap();

        assert_eq!(bundle.weather.city, "Paris");
        assert_eq!(bundle.weather.temperature, 18.0);
        assert_eq!(bundle.weather.wind_speed, 14.0);
        assert_eq!(bundle.activities.len(), 1);
        assert_eq!(bundle.activities[0].best_time, "Afternoon");
    }

    #[test]
    fn test_missing_activities_decode_as_empty() {
        let body = json!({
            "weather": {
                "city": "Oslo",
                "temperature": -3,
                "condition": "Snowy",
                "humidity": 90,
                "windSpeed": 20,
                "visibility": 4,
                "description": "Bundle up!"
            }
        });

        let bundle: Bundle = serde_json::from_value(body).unwrap();
        assert!(bundle.activities.is_empty());
    }

    #[test]
    fn test_feels_like_adds_two_degrees() {
        let weather = WeatherSnapshot {
            city: "Lisbon".into(),
            temperature: 21.5,
            condition: "Sunny".into(),
            humidity: 40.0,
            wind_speed: 8.0,
            visibility: 10.0,
            description: "Pleasant".into(),
        };

        assert_eq!(weather.feels_like(), 23.5);
    }
}
