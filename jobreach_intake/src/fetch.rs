//! Job-posting retrieval through the WebScrapingAPI gateway.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::Context;
use regex::Regex;
use reqwest::Client;
use tracing::info;

use crate::IntakeError;

const DEFAULT_GATEWAY_URL: &str = "https://api.webscrapingapi.com/v2";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[allow(clippy::unwrap_used)]
static TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script.*?</script>|<style.*?</style>|<[^>]+>").unwrap()
});
#[allow(clippy::unwrap_used)]
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
#[allow(clippy::unwrap_used)]
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Strip markup and collapse whitespace into readable plain text.
#[must_use]
pub fn clean_text(html: &str) -> String {
    let without_tags = TAGS.replace_all(html, "\n");
    let collapsed = BLANK_RUNS.replace_all(&without_tags, "\n");
    let normalized = SPACE_RUNS.replace_all(&collapsed, " ");
    normalized
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetches a job posting's page through a scraping gateway and reduces it
/// to plain text.
pub struct JobPostingFetcher {
    client: Client,
    api_key: String,
    gateway_url: String,
}

impl JobPostingFetcher {
    pub fn new(api_key: String) -> Result<Self, IntakeError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")
            .map_err(IntakeError::Extraction)?;
        Ok(Self {
            client,
            api_key,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_gateway_url(mut self, gateway_url: String) -> Self {
        self.gateway_url = gateway_url;
        self
    }

    /// Fetch the posting at `target_url` and return cleaned plain text.
    pub async fn fetch_job_text(&self, target_url: &str) -> Result<String, IntakeError> {
        info!("Fetching job posting from {target_url}");
        let response = self
            .client
            .get(&self.gateway_url)
            .query(&[("api_key", self.api_key.as_str()), ("url", target_url)])
            .send()
            .await
            .context("request to scraping gateway failed")
            .map_err(IntakeError::Extraction)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::Extraction(anyhow::anyhow!(
                "scraping gateway returned HTTP {status}"
            )));
        }

        let html = response
            .text()
            .await
            .context("could not read gateway response")
            .map_err(IntakeError::Extraction)?;

        let text = clean_text(&html);
        if text.is_empty() {
            return Err(IntakeError::Extraction(anyhow::anyhow!(
                "page yielded no readable text"
            )));
        }
        Ok(text)
    }
}
