//! Condition-to-icon classification.
//!
//! The provider's `shortForecast` is free text ("Slight Chance Rain
//! Showers"), so icons are picked by ordered substring matching against a
//! fixed keyword table. The first key contained in the condition wins.

/// Keyword → icon id, checked in declaration order.
const ICON_RULES: &[(&str, &str)] = &[
    ("Clear", "wi-day-sunny"),
    ("Sunny", "wi-day-sunny"),
    ("Mostly Sunny", "wi-day-sunny-overcast"),
    ("Partly Cloudy", "wi-day-cloudy"),
    ("Mostly Cloudy", "wi-cloudy"),
    ("Cloudy", "wi-cloudy"),
    ("Overcast", "wi-cloudy"),
    ("Rain", "wi-day-rain"),
    ("Showers", "wi-day-showers"),
    ("Thunderstorm", "wi-day-thunderstorm"),
    ("Snow", "wi-day-snow"),
    ("Sleet", "wi-sleet"),
    ("Fog", "wi-fog"),
];

/// Icon id used when no keyword matches.
pub const UNKNOWN_ICON: &str = "wi-na";

/// Map a free-text condition to a display icon id. Always returns a value.
pub fn icon_for(condition: &str) -> &'static str {
    for &(keyword, icon) in ICON_RULES {
        if condition.contains(keyword) {
            return icon;
        }
    }
    UNKNOWN_ICON
}
