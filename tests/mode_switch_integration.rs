use cellarform::{
    core::{
        msg::{mode::ModeMsg, Msg},
        state::Mode,
    },
    domain::{form::FormKind, validation::FieldName},
    test_helpers::FormTestHelper,
};
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

fn helper() -> FormTestHelper {
    FormTestHelper::with_defaults(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default())
}

#[test]
fn test_keybindings_open_forms_when_idle() {
    let mut h = helper();
    h.press(KeyCode::Char('a'));
    assert_eq!(h.state().mode.kind(), Some(FormKind::Add));

    h.press(KeyCode::Esc).press(KeyCode::Char('e'));
    assert_eq!(h.state().mode.kind(), Some(FormKind::Edit));
    assert_eq!(h.draft().map(|d| d.rack), Some("Garage".to_owned()));
}

#[test]
fn test_mode_keys_are_typed_while_form_is_open() {
    let mut h = helper();
    h.press(KeyCode::Char('a')).type_text("rea");

    assert_eq!(h.state().mode.kind(), Some(FormKind::Add));
    assert_eq!(h.draft().map(|d| d.rack), Some("rea".to_owned()));
}

#[test]
fn test_reentering_same_mode_keeps_form() {
    let mut h = helper();
    h.open_add().type_text("Cellar").focus(FieldName::Shelf);
    let before = h.form().cloned();

    h.open_add();
    assert_eq!(h.form().cloned(), before);
}

#[test]
fn test_switching_mode_remounts_fresh_form() {
    let mut h = helper();
    h.open_edit().type_text(" 2");
    assert_eq!(h.draft().map(|d| d.rack), Some("Garage 2".to_owned()));

    h.open_add();
    assert_eq!(h.state().mode.kind(), Some(FormKind::Add));
    assert_eq!(h.draft().map(|d| d.rack), Some(String::new()));

    h.open_edit();
    assert_eq!(h.draft().map(|d| d.rack), Some("Garage".to_owned()));
}

#[test]
fn test_reset_unmounts() {
    let mut h = helper();
    h.open_add().send_message(Msg::Mode(ModeMsg::Reset));
    assert_eq!(h.state().mode, Mode::None);

    // reset key while idle is a no-op
    h.press(KeyCode::Char('r'));
    assert_eq!(h.state().mode, Mode::None);
    assert!(h.submissions().is_empty());
}

#[test]
fn test_escape_cancels_without_completion() {
    let mut h = helper();
    h.open_edit().press(KeyCode::Esc);

    assert_eq!(h.state().mode, Mode::None);
    assert!(h.submissions().is_empty());
}

#[test]
fn test_quit_binding() {
    let mut h = helper();
    h.press(KeyCode::Char('q'));
    assert!(h.state().system.should_quit);
}
