//! Pure derivations from an [`Order`] to the text the display surfaces show.

use shared::domain::Order;

/// Multi-line summary of the whole order. Same order in, same text out.
pub fn render_summary(order: &Order) -> String {
    format!(
        "Drink: {}\nSize: {}\nTemperature: {}\nShots: {}",
        order.drink_name,
        order.drink_size,
        order.temperature(),
        shots_phrase(order.shot_count),
    )
}

/// Text for the shot count indicator.
pub fn shot_count_label(order: &Order) -> String {
    order.shot_count.to_string()
}

pub fn shots_phrase(shot_count: u32) -> String {
    if shot_count == 1 {
        "1 shot".to_string()
    } else {
        format!("{shot_count} shots")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_summary_for_default_order() {
        assert_eq!(
            render_summary(&Order::default()),
            "Drink: Coffee\nSize: Medium\nTemperature: hot\nShots: 1 shot"
        );
    }

    #[test]
    fn golden_summary_for_iced_latte() {
        let order = Order::new(3, true, "Latte", "Large");
        assert_eq!(
            render_summary(&order),
            "Drink: Latte\nSize: Large\nTemperature: iced\nShots: 3 shots"
        );
    }

    #[test]
    fn pluralizes_zero_shots() {
        assert_eq!(shots_phrase(0), "0 shots");
        assert_eq!(shots_phrase(1), "1 shot");
        assert_eq!(shots_phrase(2), "2 shots");
    }

    #[test]
    fn label_is_the_decimal_count() {
        assert_eq!(shot_count_label(&Order::new(7, false, "Americano", "Small")), "7");
    }
}
