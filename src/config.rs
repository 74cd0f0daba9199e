use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub submit_max_retries: u32,
    pub submit_retry_base_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("FLUENTWAVE_API_BASE_URL")
                .unwrap_or_else(|_| "https://fluentwave-backend-beta.onrender.com/api".to_string()),
            request_timeout_secs: env::var("FLUENTWAVE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            submit_max_retries: env::var("FLUENTWAVE_SUBMIT_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            submit_retry_base_delay_ms: env::var("FLUENTWAVE_SUBMIT_RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn submit_retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.submit_retry_base_delay_ms)
    }

    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080/api".to_string(),
            request_timeout_secs: 5,
            submit_max_retries: 2,
            submit_retry_base_delay_ms: 1,
        }
    }
}
