//! HTTP client fetching raw word-list text.

use async_trait::async_trait;
use bsv_bip39::{is_valid_name, separator_for, Wordlist, WordlistError, WordlistSource};
use tracing::debug;

use crate::error::HttpSourceError;
use crate::types::HttpSourceConfig;

/// Word-list source backed by plain HTTP GETs.
#[derive(Debug, Clone)]
pub struct HttpWordlistSource {
    /// Source configuration.
    config: HttpSourceConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl HttpWordlistSource {
    /// Create a new source with the given configuration.
    pub fn new(config: HttpSourceConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// URL the list called `name` is fetched from.
    ///
    /// Only `[a-z0-9_]` names are accepted so a name can never resolve
    /// outside `base_url`.
    pub fn url_for(&self, name: &str) -> Result<String, HttpSourceError> {
        if !is_valid_name(name) {
            return Err(HttpSourceError::InvalidName(name.to_string()));
        }
        Ok(format!(
            "{}/{}.{}",
            self.config.base_url.trim_end_matches('/'),
            name,
            self.config.file_extension
        ))
    }

    /// Fetch the raw one-word-per-line text of a list.
    pub async fn fetch_raw(&self, name: &str) -> Result<String, HttpSourceError> {
        let url = self.url_for(name)?;
        debug!(name, %url, "fetching word list");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(HttpSourceError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(HttpSourceError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl WordlistSource for HttpWordlistSource {
    async fn load(&self, name: &str) -> Result<Wordlist, WordlistError> {
        let raw = self
            .fetch_raw(name)
            .await
            .map_err(|e| e.into_wordlist_error(name))?;
        Ok(Wordlist::parse(name, separator_for(name), &raw))
    }
}
