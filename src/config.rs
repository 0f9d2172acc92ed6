//! Deployment-time settings for the dashboard.
//!
//! The defaults match the local development stack: the edge service accepts
//! orders on port 8090 and the order service lists them on port 8094.
//! Each value can be overridden through an `OMS_*` environment variable.

use std::time::Duration;
use tracing::warn;

pub const DEFAULT_SUBMIT_URL: &str = "http://localhost:8090/orders";
pub const DEFAULT_RETRIEVE_URL: &str = "http://localhost:8094/orders";
pub const DEFAULT_CUSTOMER_ID: &str = "OMS-Cust-001";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Endpoint receiving `POST` order submissions.
    pub submit_url: String,
    /// Endpoint listing all orders known to the backend.
    pub retrieve_url: String,
    /// Customer identity attached to orders placed from a session.
    pub customer_id: String,
    /// Bound applied to every network call.
    pub request_timeout: Duration,
    /// Bound on establishing the TCP connection. A call that times out here
    /// means the service is unreachable.
    pub connect_timeout: Duration,
    /// Period of the orders auto-refresh timer.
    pub refresh_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
            retrieve_url: DEFAULT_RETRIEVE_URL.to_string(),
            customer_id: DEFAULT_CUSTOMER_ID.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            refresh_interval: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Builds a config from the defaults, applying any `OMS_*` overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("OMS_SUBMIT_URL") {
            config.submit_url = url;
        }
        if let Some(url) = lookup("OMS_RETRIEVE_URL") {
            config.retrieve_url = url;
        }
        if let Some(id) = lookup("OMS_CUSTOMER_ID") {
            config.customer_id = id;
        }
        if let Some(secs) = secs_var(&lookup, "OMS_TIMEOUT_SECS") {
            config.request_timeout = secs;
        }
        if let Some(secs) = secs_var(&lookup, "OMS_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout = secs;
        }
        if let Some(secs) = secs_var(&lookup, "OMS_REFRESH_SECS") {
            config.refresh_interval = secs;
        }
        config
    }

    pub fn with_submit_url(mut self, url: impl Into<String>) -> Self {
        self.submit_url = url.into();
        self
    }

    pub fn with_retrieve_url(mut self, url: impl Into<String>) -> Self {
        self.retrieve_url = url.into();
        self
    }

    pub fn with_customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = id.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Connect bound actually handed to the HTTP client.
    ///
    /// Always strictly below `request_timeout`, otherwise the overall timeout
    /// fires first and a hanging connect is reported as a plain timeout.
    pub fn effective_connect_timeout(&self) -> Duration {
        self.connect_timeout.min(self.request_timeout / 2)
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

fn secs_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(key, value = %raw, "Ignoring invalid duration override");
            None
        }
    }
}
