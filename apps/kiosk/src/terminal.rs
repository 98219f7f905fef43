//! Stdout rendition of the order screen's display surfaces.

use std::io::Write;

use order_screen::OrderDisplay;
use serde::Serialize;
use shared::{domain::Order, protocol::OrderConfirmation};

#[derive(Serialize)]
struct OrderLine<'a> {
    order: &'a Order,
    summary: &'a str,
}

pub struct TerminalDisplay<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::error!(%err, "failed to write to terminal");
        }
    }
}

impl<W: Write> OrderDisplay for TerminalDisplay<W> {
    fn show_shot_count(&mut self, label: &str) {
        if !self.json {
            self.emit(&format!("[shots: {label}]"));
        }
    }

    fn show_summary(&mut self, summary: &str) {
        if !self.json {
            self.emit(summary);
        }
    }

    fn show_order(&mut self, order: &Order, summary: &str) {
        if !self.json {
            self.emit(summary);
            return;
        }
        match serde_json::to_string(&OrderLine { order, summary }) {
            Ok(line) => self.emit(&line),
            Err(err) => tracing::error!(%err, "failed to serialize order"),
        }
    }

    fn show_confirmation(&mut self, confirmation: &OrderConfirmation) {
        if self.json {
            match serde_json::to_string(confirmation) {
                Ok(line) => self.emit(&line),
                Err(err) => tracing::error!(%err, "failed to serialize confirmation"),
            }
            return;
        }
        self.emit(&format!(
            "Order #{} placed at {}",
            confirmation.confirmation_number,
            confirmation.placed_at.format("%H:%M:%S"),
        ));
    }
}
