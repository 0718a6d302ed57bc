//! Weather snapshot shown on the home screen. There is no weather feed
//! yet, so the app shows a fixed sample.

use shared::WeatherData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Rain,
    Cloud,
    Sun,
}

impl WeatherIcon {
    pub fn for_condition(condition: &str) -> WeatherIcon {
        let condition = condition.to_lowercase();
        if condition.contains("rain") {
            WeatherIcon::Rain
        } else if condition.contains("cloud") {
            WeatherIcon::Cloud
        } else {
            WeatherIcon::Sun
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::Sun => "☀",
        }
    }
}

/// Short Bangla word for an English condition description
pub fn condition_bangla(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    if condition.contains("rain") {
        "বৃষ্টি"
    } else if condition.contains("cloud") {
        "মেঘলা"
    } else if condition.contains("sun") {
        "রোদ"
    } else {
        "পরিষ্কার"
    }
}

/// The fixed sample conditions
pub fn sample_weather() -> WeatherData {
    WeatherData {
        temperature: 28.0,
        humidity: 75.0,
        condition: "Partly Cloudy".to_string(),
        condition_bangla: "আংশিক মেঘলা".to_string(),
        rainfall: 0.0,
        wind_speed: 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_bangla() {
        assert_eq!(condition_bangla("Light Rain"), "বৃষ্টি");
        assert_eq!(condition_bangla("Partly Cloudy"), "মেঘলা");
        assert_eq!(condition_bangla("Sunny"), "রোদ");
        assert_eq!(condition_bangla("Clear"), "পরিষ্কার");
        // rain wins over cloud
        assert_eq!(condition_bangla("Rain clouds"), "বৃষ্টি");
    }

    #[test]
    fn test_icon_for_condition() {
        assert_eq!(WeatherIcon::for_condition("RAIN"), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::for_condition("Partly Cloudy"), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::for_condition("Clear"), WeatherIcon::Sun);
    }

    #[test]
    fn test_sample_weather() {
        let weather = sample_weather();
        assert_eq!(weather.temperature, 28.0);
        assert_eq!(weather.humidity, 75.0);
        assert_eq!(weather.condition_bangla, "আংশিক মেঘলা");
        assert_eq!(WeatherIcon::for_condition(&weather.condition), WeatherIcon::Cloud);
    }
}
