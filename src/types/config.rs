use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Configuration for a publishing client
///
/// Immutable after construction; each client instance owns its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsConfig {
    /// Region the topic lives in
    pub region: String,

    /// Custom service endpoint, e.g. a localstack URL. When set, account
    /// resolution short-circuits to the `AWS_ACCOUNT_ID` environment override
    /// and the identity transport is never consulted.
    pub endpoint_url: Option<Url>,

    /// Whether transports should use encrypted connections
    pub use_ssl: bool,

    /// Simulate publishing: log the intended call, skip the network
    pub dry_run: bool,

    /// Level at which successful publishes are logged
    pub log_level: LogLevel,

    /// Additional provider-specific options, passed through to transport
    /// adapters uninterpreted
    pub client_options: HashMap<String, serde_json::Value>,
}

impl SnsConfig {
    /// Create a configuration for the given region with defaults:
    /// no endpoint override, SSL on, dry-run off, debug-level success logs
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
            use_ssl: true,
            dry_run: false,
            log_level: LogLevel::default(),
            client_options: HashMap::new(),
        }
    }

    /// Set a custom service endpoint
    pub fn with_endpoint_url(mut self, endpoint_url: Url) -> Self {
        self.endpoint_url = Some(endpoint_url);
        self
    }

    /// Enable or disable encrypted transport
    pub fn with_use_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the level for success logs
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Add a provider-specific option
    pub fn with_client_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.client_options.insert(key.into(), value);
        self
    }
}

/// Log level for successful publish records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Log successes at debug level (the default)
    #[default]
    Debug,
    /// Log successes at info level
    Info,
    /// Log successes at warn level
    Warn,
    /// Log successes at error level
    Error,
}
