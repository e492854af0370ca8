use crate::config::{LogFormat, TelemetryConfig};
use crate::error::{CheckoutError, Result};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Logs are written to stderr; stdout is reserved for the approval URL.
pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into())
        .add_directive(directive("hyper=warn")?)
        .add_directive(directive("reqwest=warn")?);

    let registry = Registry::default().with(filter);
    let ansi = std::io::stderr().is_terminal();

    let installed = match config.log_format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.map_err(|e| CheckoutError::TelemetryError(e.to_string()))
}

fn directive(text: &str) -> Result<tracing_subscriber::filter::Directive> {
    text.parse()
        .map_err(|e| CheckoutError::TelemetryError(format!("{text}: {e}")))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_parse_errors_are_reported() {
        assert!(directive("hyper=warn").is_ok());
        assert!(matches!(
            directive("hyper=[").unwrap_err(),
            CheckoutError::TelemetryError(_)
        ));
    }
}
