use std::sync::Arc;
use std::time::Duration;
use ticket_checkout::application::button::CheckoutButton;
use ticket_checkout::application::initiator::PaymentInitiator;
use ticket_checkout::infrastructure::http::{DEFAULT_ENDPOINT_PATH, HttpPaymentGateway};
use ticket_checkout::infrastructure::in_memory::{
    InMemoryTokenStore, RecordingNavigator, ScriptedInteraction,
};

pub const TOKEN: &str = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b";

pub struct Harness {
    pub button: CheckoutButton,
    pub tokens: InMemoryTokenStore,
    pub ui: Arc<ScriptedInteraction>,
    pub navigator: RecordingNavigator,
}

/// Wires a checkout button against `base_url` with the token already stored.
pub async fn harness(base_url: &str, answers: Vec<Option<&str>>) -> Harness {
    let tokens = InMemoryTokenStore::new("token");
    tokens.set("token", TOKEN).await;

    let gateway = HttpPaymentGateway::new(
        base_url,
        DEFAULT_ENDPOINT_PATH,
        Box::new(tokens.clone()),
        Duration::from_secs(5),
    )
    .unwrap();
    let ui = Arc::new(ScriptedInteraction::with_answers(answers));
    let navigator = RecordingNavigator::new();
    let initiator = PaymentInitiator::new(Box::new(gateway), ui.clone());
    let button = CheckoutButton::new(initiator, ui.clone(), Box::new(navigator.clone()));

    Harness {
        button,
        tokens,
        ui,
        navigator,
    }
}
