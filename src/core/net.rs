// src/core/net.rs

// Blocking HTTPS GET for the listing page. One request per run, no retry.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::options::ScrapeOptions;
use crate::error::{Error, Result};

pub fn http_get(opts: &ScrapeOptions) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()
        .map_err(|e| Error::UpstreamFailure(format!("HTTP client setup failed: {e}")))?;

    info!(url = %opts.url, "GET");
    let resp = client
        .get(&opts.url)
        .send()
        .map_err(|e| Error::UpstreamFailure(format!("request to {} failed: {e}", opts.url)))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::UpstreamFailure(format!("HTTP {} for {}", status, opts.url)));
    }

    let body = resp
        .text()
        .map_err(|e| Error::UpstreamFailure(format!("reading body of {} failed: {e}", opts.url)))?;
    debug!(bytes = body.len(), "page received");
    Ok(body)
}
