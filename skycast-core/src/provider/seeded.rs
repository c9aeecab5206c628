//! Deterministic forecasts derived from the city name.
//!
//! Every numeric field comes from a [`SeededStream`] built from the raw city
//! string, drawn in this order:
//!
//! 1. base temperature, humidity, wind, current condition
//! 2. for each of the five days: swing, low offset, humidity offset,
//!    wind offset, condition
//! 3. region
//! 4. feels-like
//!
//! Changing that order changes every forecast, so tests pin it.

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use super::{FORECAST_DAYS, ForecastProvider, ProviderId, weekday_label};
use crate::{
    City, CurrentConditions, ForecastDay, ForecastResult, WeatherReport, stream::SeededStream,
};

pub const CONDITIONS: [&str; 10] = [
    "Clear skies",
    "Partly cloudy",
    "Overcast",
    "Light rain",
    "Thunderstorms",
    "Coastal breeze",
    "Foggy morning",
    "Snow flurries",
    "Drizzle",
    "Sunny breaks",
];

pub const REGIONS: [&str; 8] = [
    "Coastal Plain",
    "Highlands",
    "River Valley",
    "Lake District",
    "Canyon Ridge",
    "Bayfront",
    "Prairie Belt",
    "Forest Edge",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SeededProvider;

impl ForecastProvider for SeededProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Seeded
    }

    fn report(&self, city: &City, now: DateTime<Local>) -> WeatherReport {
        WeatherReport::Seeded(generate_forecast_at(city.raw(), now))
    }
}

/// Seeded forecast for `city` as of the current wall-clock time.
///
/// `city` must already be validated as non-blank.
pub fn generate_forecast(city: &str) -> ForecastResult {
    generate_forecast_at(city, Local::now())
}

/// Like [`generate_forecast`] with an explicit clock.
///
/// Seeds from `city` as given (whitespace included) and echoes it trimmed.
pub fn generate_forecast_at(city: &str, now: DateTime<Local>) -> ForecastResult {
    let mut stream = SeededStream::from_input(city);
    debug!(city, seed = stream.state(), "generating seeded forecast");

    let temperature = stream.scaled(35.0) + 40;
    let humidity = stream.scaled(50.0) + 30;
    let wind = stream.scaled(20.0) + 2;
    let condition = stream.pick(&CONDITIONS).to_string();

    let forecast = (1..=FORECAST_DAYS as i64)
        .map(|days_ahead| {
            let high = temperature + stream.scaled(12.0);
            let low = temperature - stream.scaled(8.0);
            let day_humidity = (humidity + stream.scaled(10.0) - 5).clamp(0, 100);
            let day_wind = (wind + stream.scaled(6.0) - 3).max(1);

            ForecastDay {
                label: weekday_label(now, days_ahead),
                condition: stream.pick(&CONDITIONS).to_string(),
                high,
                low,
                humidity: day_humidity,
                wind: day_wind,
            }
        })
        .collect();

    let region = stream.pick(&REGIONS).to_string();
    let feels_like = (f64::from(temperature) - 2.0 + stream.next_f64() * 6.0).round() as i32;

    ForecastResult {
        city: city.trim().to_string(),
        region,
        generated_at: now.with_timezone(&Utc),
        current: CurrentConditions {
            temperature,
            feels_like,
            humidity: humidity.clamp(0, 100),
            wind,
            condition,
        },
        forecast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn monday_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// Numeric projection used to compare runs without the clock fields.
    fn numbers(r: &ForecastResult) -> Vec<i32> {
        let mut out = vec![
            r.current.temperature,
            r.current.feels_like,
            r.current.humidity,
            r.current.wind,
        ];
        for day in &r.forecast {
            out.extend([day.high, day.low, day.humidity, day.wind]);
        }
        out
    }

    const CITIES: [&str; 24] = [
        "Seattle", "Paris", "Tokyo", "Lagos", "Lima", "Oslo", "Cairo", "Denver", "Mumbai",
        "Sydney", "Toronto", "Reykjavik", "Nairobi", "Santiago", "Hanoi", "Berlin", "Madrid",
        "Boston", "Austin", "Dublin", "Perth", "Quito", "Kyiv", "Accra",
    ];

    #[test]
    fn seattle_snapshot() {
        let r = generate_forecast_at("Seattle", monday_noon());

        assert_eq!(r.city, "Seattle");
        assert_eq!(r.region, "Prairie Belt");
        assert_eq!(
            r.current,
            CurrentConditions {
                temperature: 51,
                feels_like: 54,
                humidity: 57,
                wind: 22,
                condition: "Light rain".into(),
            }
        );

        let days: Vec<(&str, &str, i32, i32, i32, i32)> = r
            .forecast
            .iter()
            .map(|d| (d.label.as_str(), d.condition.as_str(), d.high, d.low, d.humidity, d.wind))
            .collect();
        assert_eq!(
            days,
            [
                ("Tue", "Coastal breeze", 59, 46, 56, 22),
                ("Wed", "Drizzle", 54, 45, 58, 23),
                ("Thu", "Snow flurries", 55, 49, 60, 24),
                ("Fri", "Clear skies", 54, 50, 59, 23),
                ("Sat", "Sunny breaks", 52, 51, 61, 21),
            ]
        );
    }

    #[test]
    fn paris_snapshot() {
        let r = generate_forecast_at("Paris", monday_noon());
        assert_eq!(r.region, "Bayfront");
        assert_eq!(r.current.condition, "Foggy morning");
        assert_eq!(
            numbers(&r),
            [63, 64, 33, 7, 74, 58, 36, 9, 65, 62, 35, 9, 69, 58, 35, 8, 70, 58, 34, 9, 70, 55, 31, 10]
        );
    }

    #[test]
    fn numbers_do_not_depend_on_the_clock() {
        let earlier = generate_forecast_at("Seattle", monday_noon());
        let later = generate_forecast("Seattle");
        assert_eq!(numbers(&earlier), numbers(&later));
        assert_eq!(earlier.region, later.region);
    }

    #[test]
    fn case_insensitive() {
        let now = monday_noon();
        let upper = generate_forecast_at("Paris", now);
        let lower = generate_forecast_at("paris", now);

        assert_eq!(upper.current, lower.current);
        assert_eq!(upper.forecast, lower.forecast);
        assert_eq!(upper.region, lower.region);
    }

    #[test]
    fn seeds_untrimmed_but_echoes_trimmed() {
        let now = monday_noon();
        let padded = generate_forecast_at("  Paris ", now);
        let plain = generate_forecast_at("Paris", now);

        assert_eq!(padded.city, "Paris");
        assert_ne!(numbers(&padded), numbers(&plain));
    }

    #[test]
    fn ranges_hold_for_many_inputs() {
        let now = monday_noon();
        let inputs = CITIES
            .iter()
            .map(|c| c.to_string())
            .chain((0..500).map(|n| format!("city-{n}")));

        for city in inputs {
            let r = generate_forecast_at(&city, now);
            let c = &r.current;
            assert!((40..=75).contains(&c.temperature), "{city}: {c:?}");
            assert!((0..=100).contains(&c.humidity), "{city}: {c:?}");
            assert!(c.wind >= 2, "{city}: {c:?}");
            assert!((c.temperature - 2..=c.temperature + 4).contains(&c.feels_like));
            assert!(CONDITIONS.contains(&c.condition.as_str()));
            assert!(REGIONS.contains(&r.region.as_str()));

            assert_eq!(r.forecast.len(), FORECAST_DAYS);
            for day in &r.forecast {
                assert!((0..=100).contains(&day.humidity), "{city}: {day:?}");
                assert!(day.wind >= 1, "{city}: {day:?}");
                assert!(day.high >= c.temperature && day.low <= c.temperature);
                assert!(CONDITIONS.contains(&day.condition.as_str()));
            }
        }
    }

    #[test]
    fn different_cities_differ() {
        let now = monday_noon();
        let outputs: Vec<Vec<i32>> =
            CITIES.iter().map(|c| numbers(&generate_forecast_at(c, now))).collect();

        assert!(outputs.iter().any(|o| o != &outputs[0]));
    }

    #[test]
    fn serializes_with_camel_case_and_five_days() {
        let json = serde_json::to_value(generate_forecast_at("Seattle", monday_noon())).unwrap();

        assert_eq!(json["city"], "Seattle");
        assert!(json["generatedAt"].is_string());
        assert_eq!(json["current"]["feelsLike"], 54);
        assert_eq!(json["forecast"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn provider_wraps_seeded_report() {
        let city = City::try_from(" Seattle").unwrap();
        let report = SeededProvider.report(&city, monday_noon());

        match report {
            WeatherReport::Seeded(r) => {
                assert_eq!(r.city, "Seattle");
                assert_eq!(numbers(&r), numbers(&generate_forecast_at(" Seattle", monday_noon())));
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }
}
