use super::button::{ApprovalData, ButtonOutcome};
use super::payment::{ApprovalUrl, InitiatePaymentRequest, InitiationOutcome};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Blocking user dialogs: a text prompt and a notification.
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Returns `None` when the user cancels.
    async fn ask_text(&self, prompt: &str) -> Option<String>;
    async fn notify(&self, message: &str);
}

/// Source of the auth token attached to initiation requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<Option<String>>;
}

/// Transport that asks the backend to start a payment.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initiate(&self, request: &InitiatePaymentRequest) -> Result<InitiationOutcome>;
}

/// Full-page navigation to the payment provider.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &ApprovalUrl) -> Result<()>;
}

/// Lifecycle hooks a payment button widget invokes.
#[async_trait]
pub trait PaymentButton: Send + Sync {
    async fn create_order(&self) -> ButtonOutcome;
    async fn on_approve(&self, data: ApprovalData);
    async fn on_error(&self, error: &str);
}

pub type UserInteractionRef = Arc<dyn UserInteraction>;
pub type TokenProviderBox = Box<dyn TokenProvider>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type NavigatorBox = Box<dyn Navigator>;
pub type PaymentButtonBox = Box<dyn PaymentButton>;
