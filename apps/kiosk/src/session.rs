//! Reads kiosk commands line by line and feeds them to the order screen.

use std::io::{BufRead, Write};

use anyhow::Context;
use order_screen::{dispatch_action, OrderDisplay, OrderScreenController};
use shared::{error::ErrorReport, protocol::OrderConfirmation};

use crate::commands::{parse_command, KioskCommand, HELP};

#[derive(Debug, Default)]
pub struct SessionReport {
    pub actions: usize,
    pub rejected: usize,
    pub confirmations: Vec<OrderConfirmation>,
}

/// Runs until `quit` or end of input. Bad lines are reported on `notices` and skipped.
pub fn run_session<R, D, N>(
    input: R,
    controller: &mut OrderScreenController<D>,
    notices: &mut N,
    json: bool,
) -> anyhow::Result<SessionReport>
where
    R: BufRead,
    D: OrderDisplay,
    N: Write,
{
    let mut report = SessionReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                report.rejected += 1;
                tracing::warn!(line = index + 1, %err, "rejected kiosk input");
                if json {
                    writeln!(notices, "{}", serde_json::to_string(&ErrorReport::from(&err))?)?;
                } else {
                    writeln!(notices, "line {}: {err} (type 'help' for commands)", index + 1)?;
                }
                continue;
            }
        };

        match command {
            KioskCommand::Action(action) => {
                report.actions += 1;
                if let Some(confirmation) = dispatch_action(controller, action) {
                    report.confirmations.push(confirmation);
                }
            }
            KioskCommand::Show => controller.show_order(),
            KioskCommand::Help => writeln!(notices, "{HELP}")?,
            KioskCommand::Quit => break,
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::TerminalDisplay;
    use order_screen::RecordingDisplay;
    use shared::domain::Order;

    type Outcome = (SessionReport, OrderScreenController<RecordingDisplay>, String);

    fn run(script: &str, json: bool) -> Outcome {
        let mut screen = OrderScreenController::new(RecordingDisplay::new());
        let mut notices = Vec::new();
        let report =
            run_session(script.as_bytes(), &mut screen, &mut notices, json).expect("session");
        (report, screen, String::from_utf8(notices).expect("utf8"))
    }

    #[test]
    fn runs_a_full_order() {
        let (report, screen, notices) = run("+\n+\nname Latte\niced\norder\n", false);

        assert_eq!(report.actions, 5);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.confirmations.len(), 1);
        assert_eq!(screen.order(), &Order::new(3, true, "Latte", "Medium"));
        assert!(notices.is_empty());
    }

    #[test]
    fn stops_at_quit() {
        let (report, screen, _) = run("+\nquit\n+\n", false);

        assert_eq!(report.actions, 1);
        assert_eq!(screen.order().shot_count, 2);
    }

    #[test]
    fn reports_bad_lines_and_keeps_going() {
        let (report, screen, notices) = run("brew\n-\n", false);

        assert_eq!(report.rejected, 1);
        assert_eq!(screen.order().shot_count, 0);
        assert!(notices.contains("line 1: unknown command 'brew'"));
    }

    #[test]
    fn json_mode_reports_errors_as_json() {
        let (_, _, notices) = run("shots lots\n", true);

        let value: serde_json::Value = serde_json::from_str(notices.trim()).expect("json");
        assert_eq!(value["code"], "invalid_shot_count");
    }

    #[test]
    fn show_rewrites_the_summary() {
        let (_, screen, _) = run("show\n", false);

        assert_eq!(screen.display().summary_writes.len(), 2);
    }

    #[test]
    fn show_prints_the_order_as_json_in_json_mode() {
        let mut screen = OrderScreenController::with_order(
            Order::new(2, true, "Latte", "Small"),
            TerminalDisplay::new(Vec::new(), true),
        );
        let mut notices = Vec::new();

        let report = run_session("show\n".as_bytes(), &mut screen, &mut notices, true)
            .expect("session");

        assert_eq!(report.rejected, 0);
        assert!(notices.is_empty());
        let out = String::from_utf8(screen.into_display().into_inner()).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(value["order"]["drink_name"], "Latte");
        assert_eq!(value["order"]["shot_count"], 2);
        assert_eq!(
            value["summary"],
            "Drink: Latte\nSize: Small\nTemperature: iced\nShots: 2 shots"
        );
    }
}
