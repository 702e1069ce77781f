//! Blocking access to the remote dataset host.

use std::io::Read;
use std::time::Duration;

use tracing::debug;

use crate::consts::{DATASET_BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::error::{MilankoError, Result};
use crate::params::ParameterSet;
use crate::resource;
use crate::stats::{self, TemperatureSample};

/// Client for the static file host serving chart images and statistics.
///
/// Requests block; callers are expected to run on a worker thread.
pub struct DataClient {
    agent: ureq::Agent,
    base_url: String,
}

impl DataClient {
    pub fn new() -> Self {
        Self::with_base_url(DATASET_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the statistics file for `params` and extract the row for `year`.
    pub fn year_stats(&self, params: &ParameterSet, year: u32) -> Result<TemperatureSample> {
        let url = resource::stats_url(&self.base_url, params);
        debug!(%url, year, "fetching year statistics");
        let text = self.get(&url)?.into_string()?;
        stats::find_year_row(&text, year, &url)
    }

    /// Fetch the raw bytes behind `url` (chart images).
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!(%url, "fetching resource bytes");
        let mut bytes = Vec::new();
        self.get(url)?.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        match self.agent.get(url).call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, _)) => Err(MilankoError::Http {
                resource: url.to_string(),
                status,
            }),
            Err(err) => Err(MilankoError::Transport(err.to_string())),
        }
    }
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}
