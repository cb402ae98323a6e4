//! Startup sequence: concurrent load, splash timing and partial failure.

mod common;

use std::sync::Arc;
use std::time::Duration;

use campus_portal::app::{App, AppMessage};
use campus_portal::error::FetchError;
use campus_portal::startup::{run_initial_load, Collection};
use campus_portal::traits::DataSource;
use tokio::sync::mpsc;
use tokio::time::Instant;

use common::{sample_events, sample_faq, sample_schedule, StaticDataSource, CONTACT_URL};

#[tokio::test(start_paused = true)]
async fn test_splash_lasts_fetch_time_plus_delay() {
    let source: Arc<dyn DataSource> = Arc::new(
        StaticDataSource::new()
            .with_schedule(sample_schedule())
            .with_delay(Duration::from_millis(800)),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();

    tokio::spawn(run_initial_load(source, Duration::from_secs(2), tx));

    match rx.recv().await {
        Some(AppMessage::DataLoaded(result)) => {
            assert!(result.is_complete());
            assert_eq!(result.data.schedule.len(), sample_schedule().len());
        }
        other => panic!("expected DataLoaded, got {:?}", other),
    }
    // Fetches run concurrently: one delay, not three
    let loaded_at = start.elapsed();
    assert!(loaded_at >= Duration::from_millis(800));
    assert!(loaded_at < Duration::from_millis(2400));

    assert!(matches!(rx.recv().await, Some(AppMessage::SplashElapsed)));
    assert!(start.elapsed() >= loaded_at + Duration::from_secs(2));

    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_collection_stays_empty() {
    let source: Arc<dyn DataSource> = Arc::new(
        StaticDataSource::new()
            .with_schedule(sample_schedule())
            .with_events_error(FetchError::Timeout {
                url: "http://sheets.test/Eventos".to_string(),
                message: "15s".to_string(),
            })
            .with_faq(sample_faq()),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(run_initial_load(source, Duration::from_millis(100), tx));

    let mut app = App::new(CONTACT_URL);
    while let Some(msg) = rx.recv().await {
        app.handle_message(msg);
    }

    assert!(!app.loading);
    assert!(!app.splash_visible);
    assert_eq!(app.data.schedule.len(), sample_schedule().len());
    assert!(app.data.events.is_empty());
    assert_eq!(app.data.faq.len(), sample_faq().len());
    assert_eq!(app.load_failures.len(), 1);
    assert_eq!(app.load_failures[0].collection, Collection::Events);
}

#[tokio::test(start_paused = true)]
async fn test_every_collection_failing_still_dismisses_splash() {
    let refused = |sheet: &str| FetchError::Connection {
        url: format!("http://sheets.test/{}", sheet),
        message: "refused".to_string(),
    };
    let source: Arc<dyn DataSource> = Arc::new(
        StaticDataSource::new()
            .with_schedule_error(refused("Ensalamento"))
            .with_events_error(refused("Eventos"))
            .with_faq_error(refused("FAQ")),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(run_initial_load(source, Duration::from_secs(2), tx));

    let mut app = App::new(CONTACT_URL);
    while let Some(msg) = rx.recv().await {
        app.handle_message(msg);
    }

    assert!(!app.splash_visible);
    assert_eq!(app.load_failures.len(), 3);
    assert!(app.data.schedule.is_empty());
}

#[tokio::test]
async fn test_app_stays_on_splash_until_elapsed() {
    let mut app = App::new(CONTACT_URL);
    assert!(app.splash_visible);
    assert!(app.loading);

    app.handle_message(AppMessage::DataLoaded(
        campus_portal::startup::LoadResult::new(campus_portal::startup::PortalData {
            events: sample_events(),
            ..Default::default()
        }),
    ));
    assert!(!app.loading);
    assert!(app.splash_visible);

    app.handle_message(AppMessage::SplashElapsed);
    assert!(!app.splash_visible);
    assert_eq!(app.data.events.len(), 2);
}
