use crate::infrastructure::http::DEFAULT_ENDPOINT_PATH;
use crate::interfaces::widget::DEFAULT_CONTAINER;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about = "Start a PayPal payment for an event ticket", long_about = None)]
pub struct Config {
    /// Ticket to pay for. Prompted for when omitted.
    #[arg(long)]
    pub ticket_id: Option<String>,

    /// Selector of the container the payment button is rendered into
    #[arg(long, env = "CHECKOUT_CONTAINER", default_value = DEFAULT_CONTAINER)]
    pub container: String,

    #[command(flatten)]
    pub backend: BackendConfig,

    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct BackendConfig {
    /// Base URL of the ticketing backend
    #[arg(long, env = "CHECKOUT_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Path of the payment initiation endpoint
    #[arg(long, env = "CHECKOUT_ENDPOINT_PATH", default_value = DEFAULT_ENDPOINT_PATH)]
    pub endpoint_path: String,

    /// Request timeout in seconds
    #[arg(long, env = "CHECKOUT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Auth token sent as `Authorization: Token <token>`
    #[arg(long, env = "CHECKOUT_TOKEN", conflicts_with = "token_file")]
    pub token: Option<String>,

    /// JSON key-value file the token is read from
    #[arg(long, env = "CHECKOUT_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Key of the token inside the token file
    #[arg(long, env = "CHECKOUT_TOKEN_KEY", default_value = "token")]
    pub token_key: String,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CHECKOUT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["ticket-checkout"]).unwrap();

        assert_eq!(config.ticket_id, None);
        assert_eq!(config.container, "#paypal-button-container");
        assert_eq!(config.backend.endpoint_path, "/api/initiate-paypal-payment/");
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
        assert_eq!(config.auth.token_key, "token");
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn test_token_and_token_file_conflict() {
        let result = Config::try_parse_from([
            "ticket-checkout",
            "--token",
            "abc",
            "--token-file",
            "storage.json",
        ]);
        assert!(result.is_err());
    }
}
