//! Schedule lookup through the engine and through key presses on the App.

mod common;

use campus_portal::app::View;
use campus_portal::schedule::{
    group_by_weekday, list_courses, list_periods, list_shifts, select_schedule, SelectionState,
    SelectionStep,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{class, sample_schedule, test_app};

fn press(app: &mut campus_portal::app::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut campus_portal::app::App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

// =============================================================================
// Engine
// =============================================================================

#[test]
fn test_courses_are_sorted_and_unique() {
    let entries = sample_schedule();
    assert_eq!(list_courses(&entries, ""), vec!["CS", "Law"]);
    assert_eq!(list_courses(&entries, "la"), vec!["Law"]);
    assert!(list_courses(&entries, "medicina").is_empty());
}

#[test]
fn test_periods_sort_numerically_with_text_first() {
    let entries = vec![
        class("X", "Noite", "10", "Segunda"),
        class("X", "Noite", "2", "Segunda"),
        class("X", "Noite", "1", "Segunda"),
        class("X", "Noite", "Noturno", "Segunda"),
    ];
    assert_eq!(
        list_periods(&entries, Some("X"), Some("Noite")),
        vec!["Noturno", "1", "2", "10"]
    );
}

#[test]
fn test_select_schedule_is_idempotent() {
    let entries = sample_schedule();
    let first = select_schedule(&entries, Some("CS"), Some("Evening"), Some("1"));
    let owned: Vec<_> = first.iter().map(|e| (*e).clone()).collect();
    let second = select_schedule(&owned, Some("CS"), Some("Evening"), Some("1"));
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), first.len());
}

#[test]
fn test_group_by_weekday_orders_days_and_puts_unknown_last() {
    let entries = vec![
        class("X", "N", "1", "Quarta"),
        class("X", "N", "1", "Feriado"),
        class("X", "N", "1", "Segunda"),
        class("X", "N", "1", "Sexta"),
        class("X", "N", "1", "EAD"),
    ];
    let refs: Vec<_> = entries.iter().collect();
    let days: Vec<&str> = group_by_weekday(&refs).iter().map(|d| d.weekday).collect();
    assert_eq!(days, vec!["Segunda", "Quarta", "Sexta", "Feriado", "EAD"]);
}

#[test]
fn test_two_shift_course_waits_for_shift() {
    let entries = sample_schedule();
    let mut selection = SelectionState::new();
    selection.choose_course(&entries, "CS");

    assert_eq!(selection.step(), SelectionStep::CourseChosen);
    assert_eq!(selection.shift(), None);
    assert_eq!(list_shifts(&entries, selection.course()), vec!["Evening", "Morning"]);
}

#[test]
fn test_single_shift_course_skips_to_period() {
    let entries = sample_schedule();
    let mut selection = SelectionState::new();
    selection.choose_course(&entries, "Law");

    assert_eq!(selection.shift(), Some("Morning"));
    assert_eq!(selection.step(), SelectionStep::CourseAndShiftChosen);
    assert_eq!(
        list_periods(&entries, selection.course(), selection.shift()),
        vec!["2", "10"]
    );
}

// =============================================================================
// Key-driven flow
// =============================================================================

#[test]
fn test_search_and_pick_course_with_keys() {
    let mut app = test_app();
    app.navigate_to(View::Schedule);

    type_text(&mut app, "la");
    assert_eq!(app.selection.search(), "la");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.selection.course(), Some("Law"));
    assert_eq!(app.selection.step(), SelectionStep::CourseAndShiftChosen);

    // Periods are ["2", "10"]; pick "10"
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection.period(), Some("10"));
    assert_eq!(app.selection.step(), SelectionStep::FullySpecified);
}

#[test]
fn test_esc_walks_back_then_clears_search_then_goes_home() {
    let mut app = test_app();
    app.navigate_to(View::Schedule);

    type_text(&mut app, "cs");
    press(&mut app, KeyCode::Enter); // CS
    press(&mut app, KeyCode::Enter); // Evening
    assert_eq!(app.selection.shift(), Some("Evening"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.selection.step(), SelectionStep::CourseChosen);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.selection.step(), SelectionStep::NoCourse);
    assert_eq!(app.selection.search(), "cs");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.selection.search(), "");
    assert_eq!(app.view, View::Schedule);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view, View::Home);
}

#[test]
fn test_clear_resets_everything() {
    let mut app = test_app();
    app.navigate_to(View::Schedule);
    type_text(&mut app, "law");
    press(&mut app, KeyCode::Enter);
    assert!(app.selection.is_dirty());

    app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert_eq!(app.selection.step(), SelectionStep::NoCourse);
    assert_eq!(app.selection.search(), "");
    assert!(!app.selection.is_dirty());
    assert_eq!(app.schedule_cursor, 0);
}

#[test]
fn test_timetable_cursor_is_clamped_to_classes() {
    let mut app = test_app();
    app.navigate_to(View::Schedule);
    type_text(&mut app, "law");
    press(&mut app, KeyCode::Enter); // Law, Morning auto-selected
    press(&mut app, KeyCode::Enter); // period "2"

    // Two classes in Law/Morning/2
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.schedule_cursor, 1);
}

#[test]
fn test_home_card_opens_schedule() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view, View::Schedule);
    assert!(app.is_text_entry());
}
