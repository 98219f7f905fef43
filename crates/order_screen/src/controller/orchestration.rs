//! Routes host actions to the matching controller entry point.

use shared::protocol::{OrderConfirmation, ScreenAction};

use crate::{controller::OrderScreenController, display::OrderDisplay};

/// Returns the confirmation when the action placed the order.
pub fn dispatch_action<D: OrderDisplay>(
    controller: &mut OrderScreenController<D>,
    action: ScreenAction,
) -> Option<OrderConfirmation> {
    tracing::debug!(action = action.name(), "dispatching screen action");

    match action {
        ScreenAction::OrderButtonTapped => Some(controller.order_button_tapped()),
        ScreenAction::ModifyShots(adjustment) => {
            controller.modify_shots(adjustment);
            None
        }
        ScreenAction::ChangeDrinkOptions(selection) => {
            controller.change_drink_options(selection);
            None
        }
    }
}
