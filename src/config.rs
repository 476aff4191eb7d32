use std::time::Duration;

/// Default submission endpoint (https://postmarkapp.com/developer/api/email-api)
pub const DEFAULT_ENDPOINT: &str = "https://api.postmarkapp.com/email";

/// Default timeout for the blocking HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration, supplied by the caller at builder construction.
///
/// `from_address`/`from_name` seed the sender of every message composed with
/// this config; both can be overridden per message. An empty `api_key` or
/// `from_address` is allowed here and rejected at send time.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub from_address: String,
    pub from_name: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: &str, from_address: &str) -> Self {
        Config {
            api_key: api_key.to_string(),
            from_address: from_address.to_string(),
            from_name: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_name(mut self, name: &str) -> Self {
        self.from_name = Some(name.to_string());
        self
    }

    /// Override the submission URL (self-hosted relays, test servers).
    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
