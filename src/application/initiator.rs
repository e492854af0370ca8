use crate::domain::payment::{ApprovalUrl, InitiatePaymentRequest, InitiationOutcome};
use crate::domain::ports::{PaymentGatewayBox, UserInteractionRef};
use crate::domain::ticket::TicketId;

pub const REJECTED_PREFIX: &str = "Payment initiation failed: ";
pub const GENERIC_FAILURE: &str = "Error initiating payment";

/// Starts a payment for a ticket and reports failures to the user.
///
/// Every failure is terminal for the attempt and is surfaced exactly once
/// through [`UserInteraction::notify`](crate::domain::ports::UserInteraction::notify),
/// so callers only need to know whether there is somewhere to go next.
pub struct PaymentInitiator {
    gateway: PaymentGatewayBox,
    ui: UserInteractionRef,
}

impl PaymentInitiator {
    pub fn new(gateway: PaymentGatewayBox, ui: UserInteractionRef) -> Self {
        Self { gateway, ui }
    }

    /// Issues one initiation request and returns the approval URL on success.
    pub async fn initiate(&self, ticket_id: &TicketId) -> Option<ApprovalUrl> {
        let request = InitiatePaymentRequest::new(ticket_id.clone());

        match self.gateway.initiate(&request).await {
            Ok(InitiationOutcome::Approved {
                approval_url,
                payment_id,
            }) => {
                tracing::info!(
                    ticket_id = %ticket_id,
                    payment_id = payment_id.as_deref().unwrap_or("-"),
                    "payment initiated"
                );
                Some(approval_url)
            }
            Ok(InitiationOutcome::Rejected(message)) => {
                tracing::warn!(ticket_id = %ticket_id, error = %message, "payment initiation rejected");
                self.ui.notify(&format!("{REJECTED_PREFIX}{message}")).await;
                None
            }
            Err(e) => {
                self.ui.notify(GENERIC_FAILURE).await;
                tracing::error!(ticket_id = %ticket_id, error = %e, "error initiating payment");
                None
            }
        }
    }
}
