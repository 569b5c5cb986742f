use weather_core::model::{Units, WeatherReport};

/// Shown for any field the provider left out of the report.
const PLACEHOLDER: &str = "N/A";

/// Render a report into the fixed human-readable template.
///
/// Each field defaults independently, so a partially-populated report
/// still prints every line.
pub fn format_report(report: &WeatherReport, units: Units) -> String {
    let name = report.name.as_deref().unwrap_or("Unknown location");

    let condition = report.primary_condition();
    let main_condition = condition
        .and_then(|c| c.main.as_deref())
        .unwrap_or(PLACEHOLDER);
    let description = condition
        .and_then(|c| c.description.as_deref())
        .unwrap_or(PLACEHOLDER);

    let metrics = report.main.as_ref();
    let temp = number_or_placeholder(metrics.and_then(|m| m.temp));
    let feels_like = number_or_placeholder(metrics.and_then(|m| m.feels_like));
    let humidity = number_or_placeholder(metrics.and_then(|m| m.humidity));
    let wind_speed = number_or_placeholder(report.wind.as_ref().and_then(|w| w.speed));

    format!(
        "Weather in {name}:\n\
         \x20 Main: {main_condition}\n\
         \x20 Description: {description}\n\
         \x20 Temperature: {temp}{deg}\n\
         \x20 Feels Like: {feels_like}{deg}\n\
         \x20 Humidity: {humidity}%\n\
         \x20 Wind Speed: {wind_speed} {wind}",
        deg = units.temperature_suffix(),
        wind = units.wind_speed_suffix(),
    )
}

fn number_or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}
