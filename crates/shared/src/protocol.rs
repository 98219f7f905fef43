use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{non_blank, Order};

/// What the shot stepper asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ShotAdjustment {
    Increment,
    Decrement,
    /// Absolute stepper value; clamped by the screen, never rejected.
    SetTo(i64),
}

/// Drink options picked by the user. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_iced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_size: Option<String>,
}

impl DrinkSelection {
    pub fn iced(is_iced: bool) -> Self {
        Self {
            is_iced: Some(is_iced),
            ..Self::default()
        }
    }

    pub fn named(drink_name: impl Into<String>) -> Self {
        Self {
            drink_name: Some(drink_name.into()),
            ..Self::default()
        }
    }

    pub fn sized(drink_size: impl Into<String>) -> Self {
        Self {
            drink_size: Some(drink_size.into()),
            ..Self::default()
        }
    }

    pub fn with_iced(mut self, is_iced: bool) -> Self {
        self.is_iced = Some(is_iced);
        self
    }

    pub fn with_name(mut self, drink_name: impl Into<String>) -> Self {
        self.drink_name = Some(drink_name.into());
        self
    }

    pub fn with_size(mut self, drink_size: impl Into<String>) -> Self {
        self.drink_size = Some(drink_size.into());
        self
    }

    /// True when applying the selection would change nothing.
    pub fn is_empty(&self) -> bool {
        self.is_iced.is_none()
            && self.drink_name.as_deref().and_then(non_blank).is_none()
            && self.drink_size.as_deref().and_then(non_blank).is_none()
    }

    /// Writes the present, non-blank fields into `order`. Returns whether anything was set.
    pub fn apply_to(&self, order: &mut Order) -> bool {
        let mut applied = false;
        if let Some(is_iced) = self.is_iced {
            order.is_iced = is_iced;
            applied = true;
        }
        if let Some(name) = self.drink_name.as_deref().and_then(non_blank) {
            order.drink_name = name.to_string();
            applied = true;
        }
        if let Some(size) = self.drink_size.as_deref().and_then(non_blank) {
            order.drink_size = size.to_string();
            applied = true;
        }
        applied
    }
}

/// The three entry points a host can trigger on an order screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ScreenAction {
    OrderButtonTapped,
    ModifyShots(ShotAdjustment),
    ChangeDrinkOptions(DrinkSelection),
}

impl ScreenAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OrderButtonTapped => "order_button_tapped",
            Self::ModifyShots(_) => "modify_shots",
            Self::ChangeDrinkOptions(_) => "change_drink_options",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub confirmation_number: u64,
    pub order: Order,
    pub summary: String,
    pub placed_at: DateTime<Utc>,
}
