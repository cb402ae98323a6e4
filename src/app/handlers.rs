//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::schedule::SelectionStep;

use super::{App, View};

impl App {
    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Any key press likely changes state
        self.mark_dirty();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::Char('q') if !self.is_text_entry() => {
                self.quit();
                return;
            }
            _ => {}
        }

        // Nothing else reacts while the splash is up
        if self.splash_visible {
            return;
        }

        match key.code {
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => self.activate(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Char('l') if ctrl => {
                if self.view == View::Schedule {
                    self.reset_selection();
                }
            }
            KeyCode::Char(c) if self.is_text_entry() && !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.type_search_char(c);
            }
            KeyCode::Char('w') if !ctrl => self.open_contact(),
            KeyCode::Char('o') if !ctrl && self.view == View::Faq => self.open_faq_link(),
            _ => {}
        }
    }

    /// Backspace edits the search; with an empty search it steps back.
    fn handle_backspace(&mut self) {
        if self.view != View::Schedule {
            return;
        }
        if self.selection.step() == SelectionStep::NoCourse {
            if self.selection.pop_search_char() {
                self.schedule_cursor = 0;
            }
        } else {
            self.schedule_back();
        }
    }

    /// Request exit; the main loop stops after this frame.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ready_app() -> App {
        let mut app = App::new("https://wa.me/554130524900");
        app.splash_visible = false;
        app.loading = false;
        app.data.schedule = vec![ScheduleEntry {
            course: "Direito".to_string(),
            shift: "Noturno".to_string(),
            period: "1".to_string(),
            weekday: "Segunda".to_string(),
            ..Default::default()
        }];
        app
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new("x");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_search() {
        let mut app = ready_app();
        app.navigate_to(View::Schedule);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.selection.search(), "q");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.search(), "");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_splash_swallows_navigation() {
        let mut app = App::new("x");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Home);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = ready_app();
        let mut key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.view, View::Home);
    }

    #[test]
    fn test_backspace_steps_back_after_course() {
        let mut app = ready_app();
        app.navigate_to(View::Schedule);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.step(), SelectionStep::CourseAndShiftChosen);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.step(), SelectionStep::CourseChosen);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.step(), SelectionStep::NoCourse);
    }

    #[test]
    fn test_ctrl_l_resets_selection() {
        let mut app = ready_app();
        app.navigate_to(View::Schedule);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.step(), SelectionStep::FullySpecified);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(app.selection.step(), SelectionStep::NoCourse);
        assert!(!app.selection.is_dirty());
    }

    #[test]
    fn test_w_queues_contact_link() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(
            app.take_link_requests(),
            vec!["https://wa.me/554130524900".to_string()]
        );
    }
}
