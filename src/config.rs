use std::env;
use std::time::Duration;

use jenga_rs::JengaConfig;


/// CLI settings read from the environment.
///
/// Merchant credentials are loaded separately (see `Credentials::from_env`);
/// these only pick where and what to query.
#[derive(Debug, Clone)]
pub struct Config {
    // Overrides the UAT host when set (JENGA_API_HOST).
    pub api_host: Option<String>,

    // Country the balance lookup is made for (JENGA_COUNTRY_CODE).
    pub country_code: String,

    // Per-request HTTP timeout.
    pub request_timeout_s: u64,
}


impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            country_code: "KE".to_string(),
            request_timeout_s: 30,
        }
    }
}


impl Config {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = env::var("JENGA_API_HOST") {
            if !host.is_empty() {
                cfg.api_host = Some(host);
            }
        }
        if let Ok(country) = env::var("JENGA_COUNTRY_CODE") {
            if !country.is_empty() {
                cfg.country_code = country;
            }
        }
        cfg
    }

    pub fn jenga_config(&self) -> JengaConfig {
        let base = match &self.api_host {
            Some(host) => JengaConfig::new(host.as_str()),
            None => JengaConfig::sandbox(),
        };
        base.with_timeout(Duration::from_secs(self.request_timeout_s))
    }
}
