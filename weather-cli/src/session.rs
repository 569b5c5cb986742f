//! Interactive query loop: one automatic lookup for the caller's own
//! location, then manual city lookups until the user declines to continue.

use std::io::Write;

use anyhow::Result;
use inquire::Text;
use weather_core::{LocationQuery, OwmClient, Units, locate};

use crate::render;

// Fixed presentation defaults; the client contract allows overriding
// them, but the interactive session does not expose that.
const UNITS: Units = Units::Metric;
const LANG: &str = "en";

pub async fn run(client: &OwmClient) -> Result<()> {
    auto_report(client).await;

    loop {
        let answer =
            match Text::new("Do you want to search weather for another city? (yes/no):").prompt() {
                Ok(answer) => answer,
                // EOF or an interrupted prompt reads as "stop".
                Err(_) => break,
            };
        if !wants_another(&answer) {
            break;
        }

        clear_screen();

        let Ok(city) = Text::new("Enter city name:").prompt() else {
            break;
        };
        let Ok(country) = Text::new("Enter country (optional):").prompt() else {
            break;
        };
        let Ok(state) = Text::new("Enter state code (optional, only for USA):").prompt() else {
            break;
        };

        let Some(city) = non_empty(&city) else {
            println!("City name cannot be empty. Please try again.");
            continue;
        };

        let query = LocationQuery::new(city)
            .with_state(non_empty(&state))
            .with_country(non_empty(&country));

        let Some(candidate) = client.resolve_coordinates(&query).await else {
            println!("City not found. Please try again.");
            continue;
        };
        tracing::debug!(
            "resolved '{}' to ({}, {})",
            query.query_string(),
            candidate.lat,
            candidate.lon
        );

        let Some(report) = client
            .fetch_weather(candidate.lat, candidate.lon, UNITS, LANG)
            .await
        else {
            println!("Could not fetch weather data for the specified city.");
            continue;
        };

        println!("{}", render::format_report(&report, UNITS));
    }

    Ok(())
}

/// Locate the caller by IP and print their local weather.
///
/// Every failure here is non-fatal: print one line and fall through to
/// the manual loop.
async fn auto_report(client: &OwmClient) {
    let Some(coords) = locate::current_location().await else {
        println!("Could not determine current location.");
        return;
    };

    let Some(report) = client
        .fetch_weather(coords.lat, coords.lon, UNITS, LANG)
        .await
    else {
        println!("Could not fetch weather data for current location.");
        return;
    };

    println!("Current location weather:");
    println!("{}", render::format_report(&report, UNITS));
}

/// Only an exact (trimmed, case-insensitive) "yes" keeps the loop going.
fn wants_another(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clear_screen() {
    if cfg!(windows) {
        let _ = std::process::Command::new("cmd").args(["/C", "cls"]).status();
    } else {
        print!("\x1B[2J\x1B[1;1H");
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_continues() {
        assert!(wants_another("yes"));
        assert!(wants_another("YES"));
        assert!(wants_another("  Yes  "));

        assert!(!wants_another("no"));
        assert!(!wants_another("y"));
        assert!(!wants_another("yes please"));
        assert!(!wants_another(""));
    }

    #[test]
    fn non_empty_trims_and_drops_blank_input() {
        assert_eq!(non_empty("  London  "), Some("London".to_string()));
        assert_eq!(non_empty("London"), Some("London".to_string()));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
    }
}
