//! Common test utilities for integration tests.
//!
//! Fixtures for the three collections, sheet payloads in the JSON shape the
//! sheet service returns, and a builder for apps that are past the splash.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, sample_data};
//!
//! let app = TestAppBuilder::new().with_data(sample_data()).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use campus_portal::app::{App, AppMessage};
use campus_portal::models::{EventEntry, FaqEntry, ScheduleEntry};
use campus_portal::startup::{LoadResult, PortalData};

pub const CONTACT_URL: &str = "https://wa.me/554130524900";

/// One class row.
pub fn class(course: &str, shift: &str, period: &str, weekday: &str) -> ScheduleEntry {
    ScheduleEntry {
        course: course.to_string(),
        shift: shift.to_string(),
        period: period.to_string(),
        weekday: weekday.to_string(),
        subject: format!("{} {}", course, weekday),
        instructor: Some("Prof. Silva".to_string()),
        time_slot: "19:00 - 22:30".to_string(),
        room: "Sala 101".to_string(),
    }
}

/// "CS" offered in two shifts, "Law" in one.
pub fn sample_schedule() -> Vec<ScheduleEntry> {
    vec![
        class("CS", "Morning", "1", "Monday"),
        class("CS", "Evening", "2", "Segunda"),
        class("CS", "Evening", "1", "Quarta"),
        class("CS", "Evening", "1", "Segunda"),
        class("Law", "Morning", "10", "Sexta"),
        class("Law", "Morning", "2", "Terça"),
        ScheduleEntry {
            instructor: None,
            ..class("Law", "Morning", "2", "Segunda")
        },
    ]
}

pub fn sample_events() -> Vec<EventEntry> {
    vec![
        EventEntry {
            title: "Semana Acadêmica".to_string(),
            description: "Palestras, oficinas e apresentações de trabalhos durante toda a semana."
                .to_string(),
            date: "10/03/2025".to_string(),
            time: "19:00".to_string(),
            location: "Auditório".to_string(),
        },
        EventEntry {
            title: "Feira de Estágios".to_string(),
            description: String::new(),
            date: "22/04/2025".to_string(),
            time: "14:00".to_string(),
            location: "Hall".to_string(),
        },
    ]
}

pub fn sample_faq() -> Vec<FaqEntry> {
    let faq = |category: &str, question: &str, answer: &str| FaqEntry {
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    };
    vec![
        faq("Secretaria", "Como pedir declaração?", "Acesse https://portal.example.edu/declaracao."),
        faq("Biblioteca", "Qual o horário?", "Das 8h às 22h."),
        faq("Secretaria", "Onde fica?", "Bloco A, térreo."),
    ]
}

pub fn sample_data() -> PortalData {
    PortalData {
        schedule: sample_schedule(),
        events: sample_events(),
        faq: sample_faq(),
    }
}

/// Builder for apps that have already received their data.
pub struct TestAppBuilder {
    data: PortalData,
    today: Option<usize>,
    splash: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            data: PortalData::default(),
            today: Some(0),
            splash: false,
        }
    }

    pub fn with_data(mut self, data: PortalData) -> Self {
        self.data = data;
        self
    }

    pub fn with_today(mut self, today: Option<usize>) -> Self {
        self.today = today;
        self
    }

    /// Keep the splash up (no `SplashElapsed` delivered).
    pub fn with_splash(mut self) -> Self {
        self.splash = true;
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(CONTACT_URL).with_today(self.today);
        app.hyperlinks = false;
        app.handle_message(AppMessage::DataLoaded(LoadResult::new(self.data)));
        if !self.splash {
            app.handle_message(AppMessage::SplashElapsed);
        }
        app
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// App with the sample data, past the splash.
pub fn test_app() -> App {
    TestAppBuilder::new().with_data(sample_data()).build()
}
