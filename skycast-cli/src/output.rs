use std::fmt::Write;

use skycast_core::{ForecastResult, SimulatedWeather, WeatherReport};

pub fn render(report: &WeatherReport) -> String {
    match report {
        WeatherReport::Seeded(r) => render_seeded(r),
        WeatherReport::Simulated(r) => render_simulated(r),
    }
}

fn render_seeded(r: &ForecastResult) -> String {
    let c = &r.current;
    let mut out = format!("{} ({})\n", r.city, r.region);
    let _ = writeln!(
        out,
        "Now: {}°F (feels like {}°F), {}, humidity {}%, wind {} mph",
        c.temperature, c.feels_like, c.condition, c.humidity, c.wind
    );
    for day in &r.forecast {
        let _ = writeln!(
            out,
            "  {:<4} {:<15} {:>3}° / {:>3}°  humidity {:>3}%  wind {:>2} mph",
            day.label, day.condition, day.high, day.low, day.humidity, day.wind
        );
    }
    out
}

fn render_simulated(r: &SimulatedWeather) -> String {
    let mut out = format!("{}\n", r.city);
    let _ = writeln!(
        out,
        "Now: {}°F, {}, humidity {}%, wind {} mph",
        r.temperature, r.condition, r.humidity, r.wind_speed
    );
    for day in &r.forecast {
        let _ = writeln!(out, "  {:<4} {:<15} {:>3}°", day.day, day.condition, day.temperature);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use skycast_core::{SimulatedDay, provider::seeded::generate_forecast_at};

    #[test]
    fn seeded_report_lists_every_day() {
        let now = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let text = render(&WeatherReport::Seeded(generate_forecast_at("Seattle", now)));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Seattle (Prairie Belt)");
        assert_eq!(lines[1], "Now: 51°F (feels like 54°F), Light rain, humidity 57%, wind 22 mph");
        assert_eq!(lines.len(), 7);
        assert!(lines[2].trim_start().starts_with("Tue"));
        assert!(lines[6].contains("Sunny breaks"));
    }

    #[test]
    fn simulated_report_shows_temperature_per_day() {
        let weather = SimulatedWeather {
            city: "Oslo".into(),
            temperature: 40,
            condition: "Fog".into(),
            humidity: 70,
            wind_speed: 12,
            forecast: vec![SimulatedDay {
                day: "Tue".into(),
                temperature: 35,
                condition: "Snow".into(),
            }],
        };
        let text = render(&WeatherReport::Simulated(weather));

        assert!(text.starts_with("Oslo\nNow: 40°F, Fog, humidity 70%, wind 12 mph\n"));
        assert!(text.contains("Tue"));
        assert!(text.contains(" 35°"));
    }
}
