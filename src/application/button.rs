use super::initiator::PaymentInitiator;
use crate::domain::button::{ApprovalData, ButtonOutcome};
use crate::domain::ports::{NavigatorBox, PaymentButton, UserInteractionRef};
use crate::domain::ticket::TicketId;
use async_trait::async_trait;
use std::sync::Mutex;

pub const TICKET_PROMPT: &str = "Enter your ticket ID";
pub const WIDGET_FAILURE: &str = "An error occurred with PayPal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Initiating,
    /// Terminal: the page has been handed to the payment provider.
    AwaitingRedirect,
}

/// Lifecycle adapter registered with the payment button widget.
///
/// A click prompts for a ticket, initiates the payment and navigates to the
/// approval URL. Only one click is processed at a time, and once a redirect
/// has been issued further clicks are ignored.
pub struct CheckoutButton {
    initiator: PaymentInitiator,
    ui: UserInteractionRef,
    navigator: NavigatorBox,
    state: Mutex<ButtonState>,
}

impl CheckoutButton {
    pub fn new(initiator: PaymentInitiator, ui: UserInteractionRef, navigator: NavigatorBox) -> Self {
        Self {
            initiator,
            ui,
            navigator,
            state: Mutex::new(ButtonState::Idle),
        }
    }

    pub fn state(&self) -> ButtonState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_state(&self, next: ButtonState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = next;
    }

    fn begin(&self) -> Result<InFlight<'_>, ButtonOutcome> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            ButtonState::AwaitingRedirect => Err(ButtonOutcome::AlreadyRedirected),
            ButtonState::Initiating => Err(ButtonOutcome::Busy),
            ButtonState::Idle => {
                *state = ButtonState::Initiating;
                Ok(InFlight {
                    button: self,
                    committed: false,
                })
            }
        }
    }
}

/// Returns the button to `Idle` unless the attempt ended in a redirect,
/// including when the `create_order` future is dropped midway.
struct InFlight<'a> {
    button: &'a CheckoutButton,
    committed: bool,
}

impl InFlight<'_> {
    fn commit(mut self) {
        self.committed = true;
        self.button.set_state(ButtonState::AwaitingRedirect);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.button.set_state(ButtonState::Idle);
        }
    }
}

#[async_trait]
impl PaymentButton for CheckoutButton {
    async fn create_order(&self) -> ButtonOutcome {
        let in_flight = match self.begin() {
            Ok(guard) => guard,
            Err(outcome) => {
                tracing::debug!(?outcome, "ignoring click");
                return outcome;
            }
        };

        let Some(ticket_id) = TicketId::from_answer(self.ui.ask_text(TICKET_PROMPT).await) else {
            tracing::debug!("no ticket id entered, aborting");
            return ButtonOutcome::Aborted;
        };

        let Some(approval_url) = self.initiator.initiate(&ticket_id).await else {
            return ButtonOutcome::Failed;
        };

        if let Err(e) = self.navigator.navigate(&approval_url).await {
            self.on_error(&e.to_string()).await;
            return ButtonOutcome::Failed;
        }

        in_flight.commit();
        tracing::info!(url = %approval_url, "redirected to approval page");
        ButtonOutcome::Redirected(approval_url)
    }

    async fn on_approve(&self, data: ApprovalData) {
        // Confirmation happens server-side through the provider callback.
        tracing::debug!(order_id = ?data.order_id, payer_id = ?data.payer_id, "approval received");
    }

    async fn on_error(&self, error: &str) {
        tracing::error!(error, "payment widget error");
        self.ui.notify(WIDGET_FAILURE).await;
    }
}
