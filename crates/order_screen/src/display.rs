//! Display surfaces the screen writes to. The screen never reads them back.

use shared::{domain::Order, protocol::OrderConfirmation};

pub trait OrderDisplay {
    fn show_shot_count(&mut self, label: &str);
    fn show_summary(&mut self, summary: &str);
    fn show_confirmation(&mut self, confirmation: &OrderConfirmation);

    /// Explicit request to see the whole order. Defaults to rewriting the summary.
    fn show_order(&mut self, _order: &Order, summary: &str) {
        self.show_summary(summary);
    }
}

/// Keeps every write in memory. Useful for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub shot_count_writes: Vec<String>,
    pub summary_writes: Vec<String>,
    pub confirmations: Vec<OrderConfirmation>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shot_count(&self) -> Option<&str> {
        self.shot_count_writes.last().map(String::as_str)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary_writes.last().map(String::as_str)
    }

    pub fn last_confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmations.last()
    }
}

impl OrderDisplay for RecordingDisplay {
    fn show_shot_count(&mut self, label: &str) {
        self.shot_count_writes.push(label.to_string());
    }

    fn show_summary(&mut self, summary: &str) {
        self.summary_writes.push(summary.to_string());
    }

    fn show_confirmation(&mut self, confirmation: &OrderConfirmation) {
        self.confirmations.push(confirmation.clone());
    }
}

impl<D: OrderDisplay + ?Sized> OrderDisplay for &mut D {
    fn show_shot_count(&mut self, label: &str) {
        (**self).show_shot_count(label);
    }

    fn show_summary(&mut self, summary: &str) {
        (**self).show_summary(summary);
    }

    fn show_confirmation(&mut self, confirmation: &OrderConfirmation) {
        (**self).show_confirmation(confirmation);
    }

    fn show_order(&mut self, order: &Order, summary: &str) {
        (**self).show_order(order, summary);
    }
}
