//! Line commands typed at the kiosk, mapped onto screen actions.

use shared::{
    domain::non_blank,
    error::OrderError,
    protocol::{DrinkSelection, ScreenAction, ShotAdjustment},
};

pub const HELP: &str = "\
commands:
  + | more          add a shot
  - | less          remove a shot
  shots <n>         set the shot count
  iced | hot        choose the temperature
  name <drink>      choose the drink
  size <size>       choose the size
  order             place the order
  show              print the current summary
  help              this text
  quit | exit       leave the kiosk
  {json}            a raw screen action, e.g. {\"type\":\"order_button_tapped\"}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskCommand {
    Action(ScreenAction),
    Show,
    Help,
    Quit,
}

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<KioskCommand>, OrderError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.starts_with('{') {
        let action: ScreenAction = serde_json::from_str(line)?;
        return Ok(Some(KioskCommand::Action(action)));
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "+" | "more" => shots(ShotAdjustment::Increment),
        "-" | "less" => shots(ShotAdjustment::Decrement),
        "shots" => {
            let count = rest
                .parse::<i64>()
                .map_err(|_| OrderError::InvalidShotCount(rest.to_string()))?;
            shots(ShotAdjustment::SetTo(count))
        }
        "iced" => options(DrinkSelection::iced(true)),
        "hot" => options(DrinkSelection::iced(false)),
        "name" => options(DrinkSelection::named(required_text("name", rest)?)),
        "size" => options(DrinkSelection::sized(required_text("size", rest)?)),
        "order" => KioskCommand::Action(ScreenAction::OrderButtonTapped),
        "show" => KioskCommand::Show,
        "help" | "?" => KioskCommand::Help,
        "quit" | "exit" => KioskCommand::Quit,
        _ => return Err(OrderError::UnknownCommand(keyword.to_string())),
    };
    Ok(Some(command))
}

fn shots(adjustment: ShotAdjustment) -> KioskCommand {
    KioskCommand::Action(ScreenAction::ModifyShots(adjustment))
}

fn options(selection: DrinkSelection) -> KioskCommand {
    KioskCommand::Action(ScreenAction::ChangeDrinkOptions(selection))
}

fn required_text<'a>(what: &str, value: &'a str) -> Result<&'a str, OrderError> {
    non_blank(value).ok_or_else(|| OrderError::Validation(format!("{what} needs a value")))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
