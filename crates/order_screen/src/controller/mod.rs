//! Controller layer: owns the order, applies screen actions and re-renders after each one.

pub mod orchestration;

use chrono::Utc;
use shared::{
    domain::Order,
    protocol::{DrinkSelection, OrderConfirmation, ShotAdjustment},
};
use tracing::{debug, info, warn};

use crate::{
    display::OrderDisplay,
    summary::{render_summary, shot_count_label},
};

pub struct OrderScreenController<D: OrderDisplay> {
    order: Order,
    display: D,
    max_shots: Option<u32>,
    orders_placed: u64,
}

impl<D: OrderDisplay> OrderScreenController<D> {
    /// Opens the screen on a default order and renders it.
    pub fn new(display: D) -> Self {
        Self::with_order(Order::default(), display)
    }

    pub fn with_order(order: Order, display: D) -> Self {
        let mut controller = Self {
            order,
            display,
            max_shots: None,
            orders_placed: 0,
        };
        controller.render();
        controller
    }

    /// Caps the shot stepper. A current count above the cap is pulled down to it.
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = Some(max_shots);
        if self.order.shot_count > max_shots {
            self.order.shot_count = max_shots;
            self.render();
        }
        self
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn max_shots(&self) -> Option<u32> {
        self.max_shots
    }

    pub fn summary(&self) -> String {
        render_summary(&self.order)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Writes the current order to the display without changing it.
    pub fn show_order(&mut self) {
        let summary = render_summary(&self.order);
        self.display.show_order(&self.order, &summary);
    }

    /// Steps the shot count. Never goes below zero or above the cap.
    pub fn modify_shots(&mut self, adjustment: ShotAdjustment) -> u32 {
        let ceiling = self.max_shots.unwrap_or(u32::MAX);
        let current = self.order.shot_count;
        let next = match adjustment {
            ShotAdjustment::Increment => current.saturating_add(1).min(ceiling),
            ShotAdjustment::Decrement => current.saturating_sub(1),
            ShotAdjustment::SetTo(value) => value.clamp(0, i64::from(ceiling)) as u32,
        };

        if adjustment == ShotAdjustment::Increment && next == current {
            debug!(shot_count = current, ceiling, "shot count already at ceiling");
        }
        self.order.shot_count = next;
        self.render();
        next
    }

    /// Applies the fields present in `selection`; everything else is left alone.
    pub fn change_drink_options(&mut self, selection: DrinkSelection) {
        if !selection.apply_to(&mut self.order) {
            warn!("drink selection carried no options; order unchanged");
        }
        self.render();
    }

    /// Acknowledges the current order. Nothing is sent or stored.
    pub fn order_button_tapped(&mut self) -> OrderConfirmation {
        self.orders_placed += 1;
        let summary = render_summary(&self.order);
        let confirmation = OrderConfirmation {
            confirmation_number: self.orders_placed,
            order: self.order.clone(),
            summary,
            placed_at: Utc::now(),
        };

        info!(
            confirmation_number = confirmation.confirmation_number,
            drink = %self.order.drink_name,
            size = %self.order.drink_size,
            shots = self.order.shot_count,
            iced = self.order.is_iced,
            "order placed"
        );
        self.display.show_summary(&confirmation.summary);
        self.display.show_confirmation(&confirmation);
        confirmation
    }

    fn render(&mut self) {
        let label = shot_count_label(&self.order);
        let summary = render_summary(&self.order);
        debug!(shot_count = %label, "rendering order screen");
        self.display.show_shot_count(&label);
        self.display.show_summary(&summary);
    }
}
