use crate::domain::button::{ApprovalData, ButtonOutcome};
use crate::domain::ports::PaymentButtonBox;
use crate::error::{CheckoutError, Result};
use std::collections::HashMap;

pub const DEFAULT_CONTAINER: &str = "#paypal-button-container";

/// Something the payment widget reports to a rendered button.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Click,
    Approve(ApprovalData),
    Error(String),
}

/// Holds rendered payment buttons by container selector and routes widget
/// events to their lifecycle hooks.
#[derive(Default)]
pub struct ButtonHost {
    buttons: HashMap<String, PaymentButtonBox>,
}

impl ButtonHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `button` into the container matching `selector`.
    pub fn render(&mut self, selector: &str, button: PaymentButtonBox) -> Result<()> {
        if selector.trim().is_empty() {
            return Err(CheckoutError::WidgetError("empty container selector".to_string()));
        }
        if self.buttons.contains_key(selector) {
            return Err(CheckoutError::WidgetError(format!(
                "a button is already rendered in {selector}"
            )));
        }
        tracing::debug!(selector, "payment button rendered");
        self.buttons.insert(selector.to_string(), button);
        Ok(())
    }

    /// Delivers an event. Only a click produces an outcome.
    pub async fn dispatch(&self, selector: &str, event: WidgetEvent) -> Result<Option<ButtonOutcome>> {
        let button = self
            .buttons
            .get(selector)
            .ok_or_else(|| CheckoutError::WidgetError(format!("no button rendered in {selector}")))?;

        match event {
            WidgetEvent::Click => Ok(Some(button.create_order().await)),
            WidgetEvent::Approve(data) => {
                button.on_approve(data).await;
                Ok(None)
            }
            WidgetEvent::Error(error) => {
                button.on_error(&error).await;
                Ok(None)
            }
        }
    }
}
