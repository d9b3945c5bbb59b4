use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub name: String,
    pub symbol: String,
    pub quotes: Quotes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: Quote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub percent_change_24h: f64,
}

/// First geocoding match for a city name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<Coordinates>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    /// Local time of the observation, e.g. `2024-05-01T14:15`.
    pub time: Option<String>,
}

impl CurrentWeather {
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        let time = self.time.as_deref()?;
        NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M").ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    pub title: String,
    pub completed: bool,
}

/// Which todos to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    Pending,
}

impl Completion {
    /// Map a `y`/`n` answer (case-insensitive, surrounding whitespace ignored).
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "y" => Some(Completion::Done),
            "n" => Some(Completion::Pending),
            _ => None,
        }
    }

    /// Value of the `completed` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Completion::Done => "true",
            Completion::Pending => "false",
        }
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_from_answer() {
        assert_eq!(Completion::from_answer(" Y "), Some(Completion::Done));
        assert_eq!(Completion::from_answer("n"), Some(Completion::Pending));
        assert_eq!(Completion::from_answer("yes"), None);
        assert_eq!(Completion::Pending.as_query(), "false");
    }

    #[test]
    fn ticker_reads_nested_usd_quote() {
        let body = r#"{
            "id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC",
            "quotes": {"USD": {"price": 64123.456, "percent_change_24h": -1.5}}
        }"#;
        let ticker: Ticker = serde_json::from_str(body).expect("ticker should parse");

        assert_eq!(ticker.symbol, "BTC");
        assert_eq!(ticker.quotes.usd.price, 64123.456);
    }

    #[test]
    fn geocoding_without_results_key() {
        let parsed: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).expect("parse");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn observed_at_parses_minute_precision() {
        let current = CurrentWeather {
            temperature: 21.4,
            windspeed: 9.0,
            time: Some("2024-05-01T14:15".into()),
        };
        let at = current.observed_at().expect("time should parse");
        assert_eq!(at.format("%H:%M").to_string(), "14:15");

        let missing = CurrentWeather { time: None, ..current };
        assert!(missing.observed_at().is_none());
    }
}
