use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::{Config, Endpoints},
    error::{QueryError, Result, truncate_body},
    model::{
        Completion, Coordinates, CurrentWeather, ForecastResponse, GeocodingResponse, Post,
        Ticker, Todo, User,
    },
};

/// Performs every GET the menu needs against the configured endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: Endpoints,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("apiquery/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoints: config.endpoints.clone(), http })
    }

    pub async fn user(&self, id: &str) -> Result<User> {
        let url = format!("{}/users/{id}", self.endpoints.users_base);
        self.get_json(&url, &[], "user").await
    }

    pub async fn posts_by_user(&self, user_id: &str) -> Result<Vec<Post>> {
        let url = format!("{}/posts", self.endpoints.users_base);
        self.get_json(&url, &[("userId", user_id)], "posts").await
    }

    /// The coin id is a single path segment; `/` and `.` in it are escaped, not followed.
    pub async fn ticker(&self, coin_id: &str) -> Result<Ticker> {
        let base = &self.endpoints.crypto_base;
        let mut url =
            Url::parse(base).map_err(|e| QueryError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| QueryError::InvalidUrl(format!("{base}: cannot append a path")))?
            .pop_if_empty()
            .push("tickers")
            .push(coin_id);

        self.get_json(url.as_str(), &[], "ticker").await
    }

    /// Resolve a city name to its first geocoding match.
    ///
    /// A non-200 answer or an empty result list both mean "no match" and yield `Ok(None)`;
    /// only transport and decode failures are errors.
    pub async fn coordinates(&self, city: &str) -> Result<Option<Coordinates>> {
        let url = format!("{}/search", self.endpoints.geocoding_base);
        let query = [("name", city), ("count", "1"), ("language", "en"), ("format", "json")];

        let parsed: GeocodingResponse = match self.get_json(&url, &query, "geocoding").await {
            Ok(parsed) => parsed,
            Err(QueryError::Status { status, .. }) => {
                tracing::debug!(%status, city, "geocoding lookup rejected");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let first = parsed.results.and_then(|results| results.into_iter().next());
        if first.is_none() {
            tracing::debug!(city, "geocoding returned no results");
        }
        Ok(first)
    }

    pub async fn current_weather(&self, coords: &Coordinates) -> Result<CurrentWeather> {
        let url = format!("{}/forecast", self.endpoints.forecast_base);
        let latitude = coords.latitude.to_string();
        let longitude = coords.longitude.to_string();
        let query = [
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current_weather", "true"),
        ];

        let parsed: ForecastResponse = self.get_json(&url, &query, "forecast").await?;
        Ok(parsed.current_weather)
    }

    pub async fn todos(&self, completion: Completion) -> Result<Vec<Todo>> {
        let url = format!("{}/todos", self.endpoints.users_base);
        self.get_json(&url, &[("completed", completion.as_query())], "todos").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        what: &'static str,
    ) -> Result<T> {
        tracing::debug!(url, ?query, "GET");

        let res = self.http.get(url).query(query).send().await.map_err(|e| {
            tracing::debug!(url, error = %e, "request failed");
            QueryError::Connection(e)
        })?;

        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            tracing::debug!(url, %status, body = %truncate_body(&body), "unexpected status");
            return Err(QueryError::Status { status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(url, error = %source, "response did not match expected shape");
            QueryError::Decode { what, source }
        })
    }
}
