use super::{parse_command, KioskCommand};
use shared::{
    error::{ErrorCode, OrderError},
    protocol::{DrinkSelection, ScreenAction, ShotAdjustment},
};

fn action(line: &str) -> ScreenAction {
    match parse_command(line).expect("parse").expect("command") {
        KioskCommand::Action(action) => action,
        other => panic!("expected an action, got {other:?}"),
    }
}

#[test]
fn skips_blank_lines_and_comments() {
    assert_eq!(parse_command("   ").expect("blank"), None);
    assert_eq!(parse_command("# morning rush").expect("comment"), None);
}

#[test]
fn maps_stepper_keywords() {
    assert_eq!(action("+"), ScreenAction::ModifyShots(ShotAdjustment::Increment));
    assert_eq!(action("LESS"), ScreenAction::ModifyShots(ShotAdjustment::Decrement));
    assert_eq!(action("shots 4"), ScreenAction::ModifyShots(ShotAdjustment::SetTo(4)));
    assert_eq!(action("shots -1"), ScreenAction::ModifyShots(ShotAdjustment::SetTo(-1)));
}

#[test]
fn maps_option_keywords() {
    assert_eq!(
        action("iced"),
        ScreenAction::ChangeDrinkOptions(DrinkSelection::iced(true))
    );
    assert_eq!(
        action("name   Flat White "),
        ScreenAction::ChangeDrinkOptions(DrinkSelection::named("Flat White"))
    );
    assert_eq!(
        action("size Large"),
        ScreenAction::ChangeDrinkOptions(DrinkSelection::sized("Large"))
    );
    assert_eq!(action("order"), ScreenAction::OrderButtonTapped);
}

#[test]
fn accepts_json_actions() {
    assert_eq!(
        action(r#"{"type":"modify_shots","payload":{"kind":"decrement"}}"#),
        ScreenAction::ModifyShots(ShotAdjustment::Decrement)
    );
}

#[test]
fn session_commands() {
    assert_eq!(parse_command("show").expect("show"), Some(KioskCommand::Show));
    assert_eq!(parse_command("?").expect("help"), Some(KioskCommand::Help));
    assert_eq!(parse_command("exit").expect("quit"), Some(KioskCommand::Quit));
}

#[test]
fn rejects_bad_input_with_codes() {
    let cases = [
        ("brew", ErrorCode::UnknownCommand),
        ("shots many", ErrorCode::InvalidShotCount),
        ("name  ", ErrorCode::Validation),
        ("{\"type\":\"refund\"}", ErrorCode::MalformedAction),
    ];
    for (line, code) in cases {
        let err: OrderError = parse_command(line).expect_err(line);
        assert_eq!(err.code(), code, "line={line}");
    }
}
