//! Weather summary presentation.
//!
//! The dashboard does not fetch the weather. An external collaborator gets
//! the current conditions for a city (for example from the Open-Meteo API)
//! and the dashboard presents them. Conditions are identified by their
//! [WMO weather interpretation code](https://open-meteo.com/en/docs).
use serde::{Deserialize, Serialize};

/// Current weather conditions for a city.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Report {
    pub city: String,
    pub country: String,
    /// Celsius degrees.
    pub temperature: f64,
    /// Kilometers per hour.
    pub wind_speed: f64,
    /// WMO weather code.
    pub code: u8,
}

impl Report {
    /// The summary line, for example
    /// `Madrid, Spain: 21°C, Partly cloudy, Wind: 12 km/h`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}, {}: {}°C, {}, Wind: {} km/h",
            self.city,
            self.country,
            round(self.temperature),
            condition(self.code),
            round(self.wind_speed)
        )
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        icon(self.code)
    }
}

/// The name of the condition, or `Unknown` for codes without one.
#[must_use]
pub fn condition(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Foggy (Rime)",
        51 | 53 | 55 => "Drizzle",
        61 | 63 => "Rain",
        65 => "Heavy rain",
        71 | 73 => "Snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Rain showers",
        81 => "Heavy rain showers",
        82 => "Violent rain showers",
        85 => "Snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// The icon of a condition. Codes are grouped by family, so codes without
/// a name still get the icon of their range.
#[must_use]
pub fn icon(code: u8) -> &'static str {
    match code {
        0 => "\u{2600}\u{fe0f}",
        1 | 2 => "\u{26c5}",
        3 => "\u{2601}\u{fe0f}",
        45 | 48 => "\u{1f32b}\u{fe0f}",
        51..=55 | 61..=65 | 80..=82 => "\u{1f327}\u{fe0f}",
        71..=77 => "\u{2744}\u{fe0f}",
        85 | 86 => "\u{1f328}\u{fe0f}",
        95..=99 => "\u{26c8}\u{fe0f}",
        _ => "\u{1f324}\u{fe0f}",
    }
}

/// Nearest integer, halves rounded up: `-2.5` is `-2`.
#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
