use clap::Parser;
use dotenvy::dotenv;
use miette::{IntoDiagnostic, Result};
use std::process::ExitCode;
use std::sync::Arc;
use ticket_checkout::application::button::CheckoutButton;
use ticket_checkout::application::initiator::PaymentInitiator;
use ticket_checkout::config::Config;
use ticket_checkout::domain::button::ButtonOutcome;
use ticket_checkout::domain::ports::{TokenProviderBox, UserInteractionRef};
use ticket_checkout::infrastructure::http::HttpPaymentGateway;
use ticket_checkout::infrastructure::token::{FileTokenStore, StaticTokenProvider};
use ticket_checkout::interfaces::terminal::{PrintNavigator, TerminalInteraction};
use ticket_checkout::interfaces::widget::{ButtonHost, WidgetEvent};
use ticket_checkout::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let config = Config::parse();
    init_tracing(&config.telemetry).into_diagnostic()?;

    let tokens: TokenProviderBox = match &config.auth.token_file {
        Some(path) => Box::new(FileTokenStore::new(path.clone(), config.auth.token_key.clone())),
        None => Box::new(StaticTokenProvider::new(config.auth.token.clone())),
    };
    let gateway = HttpPaymentGateway::new(
        &config.backend.base_url,
        &config.backend.endpoint_path,
        tokens,
        config.backend.timeout(),
    )
    .into_diagnostic()?;

    let ui: UserInteractionRef = Arc::new(TerminalInteraction::stdio(config.ticket_id.clone()));
    let initiator = PaymentInitiator::new(Box::new(gateway), ui.clone());
    let button = CheckoutButton::new(initiator, ui, Box::new(PrintNavigator::stdout()));

    let mut host = ButtonHost::new();
    host.render(&config.container, Box::new(button)).into_diagnostic()?;

    // One click per run; a failed attempt needs a fresh start, like a page reload.
    let outcome = host
        .dispatch(&config.container, WidgetEvent::Click)
        .await
        .into_diagnostic()?;

    Ok(match outcome {
        Some(ButtonOutcome::Redirected(_)) => ExitCode::SUCCESS,
        Some(ButtonOutcome::Aborted) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    })
}
