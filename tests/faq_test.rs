//! FAQ grouping, the accordion and link opening.

mod common;

use campus_portal::app::View;
use campus_portal::faq::{display_order, group_by_category, Accordion};
use campus_portal::links::{detect_urls, first_url};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{sample_faq, test_app, TestAppBuilder};

fn press(app: &mut campus_portal::app::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_categories_in_first_seen_order() {
    let faq = sample_faq();
    let groups = group_by_category(&faq);

    let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["Secretaria", "Biblioteca"]);
    assert_eq!(groups[0].items.len(), 2);
    assert_eq!(display_order(&groups), vec![0, 2, 1]);
}

#[test]
fn test_empty_faq_has_no_groups() {
    assert!(group_by_category(&[]).is_empty());
}

#[test]
fn test_toggle_twice_closes() {
    let mut accordion = Accordion::new();
    accordion.toggle(2);
    assert!(accordion.is_open(2));
    accordion.toggle(2);
    assert_eq!(accordion.open_index(), None);
}

#[test]
fn test_opening_another_question_closes_the_first() {
    let mut accordion = Accordion::new();
    accordion.toggle(0);
    accordion.toggle(1);
    assert!(!accordion.is_open(0));
    assert!(accordion.is_open(1));
}

#[test]
fn test_cursor_toggles_in_display_order() {
    let mut app = test_app();
    app.navigate_to(View::Faq);

    // Second row on screen is "Onde fica?", index 2 in the source
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.accordion.open_index(), Some(2));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.accordion.open_index(), None);
}

#[test]
fn test_esc_closes_answer_before_leaving() {
    let mut app = test_app();
    app.navigate_to(View::Faq);
    press(&mut app, KeyCode::Enter);
    assert!(app.accordion.open_index().is_some());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.accordion.open_index(), None);
    assert_eq!(app.view, View::Faq);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view, View::Home);
}

#[test]
fn test_o_queues_first_link_of_open_answer() {
    let mut app = test_app();
    app.navigate_to(View::Faq);

    // Nothing open: nothing queued
    press(&mut app, KeyCode::Char('o'));
    assert!(app.take_link_requests().is_empty());

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(
        app.take_link_requests(),
        vec!["https://portal.example.edu/declaracao".to_string()]
    );
}

#[test]
fn test_answer_without_link_queues_nothing() {
    let mut app = TestAppBuilder::new()
        .with_data(campus_portal::startup::PortalData {
            faq: sample_faq(),
            ..Default::default()
        })
        .build();
    app.navigate_to(View::Faq);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down); // "Qual o horário?"
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('o'));
    assert!(app.take_link_requests().is_empty());
}

#[test]
fn test_link_detection_excludes_trailing_punctuation() {
    let links = detect_urls("Veja https://a.edu/x, ou www.b.edu.");
    let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.edu/x", "https://www.b.edu"]);
    assert_eq!(first_url("sem link"), None);
}
