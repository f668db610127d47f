//! HTTP client for the restaurant menu endpoint.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    date::DATE_FORMAT,
    i18n::Language,
    menu::{Menu, Sandwich},
};

/// Base URL of the public endpoint
pub const DEFAULT_API_URL: &str = "https://hydra.ugent.be/api/2.0";

/// Identifies this tool to the endpoint operators
const USER_AGENT: &str = concat!("ugent-food (v", env!("CARGO_PKG_VERSION"), ")");

/// Upper bound for a single request, connect to last byte
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint has no menu for this day (404)
    #[error("No menu found for {}.", .0.format(DATE_FORMAT))]
    NoMenuFound(NaiveDate),
    /// Any other non-success status
    #[error("API request failed with status {0}.")]
    Status(u16),
    /// Transport, timeout or body decoding failure
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the menu and sandwich endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url`, without trailing slash
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the menu for `date` in `language`
    ///
    /// # Returns
    /// * `Ok(Menu)` on a success status
    /// * `Err(ApiError::NoMenuFound)` when the endpoint answers 404
    /// * `Err(ApiError::Status)` for every other non-success status
    pub async fn fetch_menu(&self, date: NaiveDate, language: Language) -> Result<Menu, ApiError> {
        let url = menu_url(&self.base_url, date, language);

        match self.get_json(&url).await {
            Err(ApiError::Status(404)) => Err(ApiError::NoMenuFound(date)),
            other => other,
        }
    }

    /// Fetches the list of sandwiches, which does not depend on the day
    pub async fn fetch_sandwiches(&self) -> Result<Vec<Sandwich>, ApiError> {
        let url = format!("{}/resto/sandwiches.json", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", url);

        let now = Instant::now();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        log::debug!("{} answered {} in {:.2?}", url, status, now.elapsed());

        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                log::warn!("Unexpected status {} from {}", status, url);
            }
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(resp.json::<T>().await?)
    }
}

/// `<base>/resto/menu/{language}/{year}/{month}/{day}.json`, date parts unpadded
fn menu_url(base_url: &str, date: NaiveDate, language: Language) -> String {
    format!(
        "{}/resto/menu/{}/{}/{}/{}.json",
        base_url,
        language.code(),
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_url_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(
            menu_url(DEFAULT_API_URL, date, Language::Dutch),
            "https://hydra.ugent.be/api/2.0/resto/menu/nl/2026/3/5.json"
        );
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("ugent-food (v"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn not_found_message_names_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
        assert_eq!(
            ApiError::NoMenuFound(date).to_string(),
            "No menu found for 26/10/2026."
        );
        assert_eq!(ApiError::Status(500).to_string(), "API request failed with status 500.");
    }
}
