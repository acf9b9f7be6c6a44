use rstandup::config::Config;
use rstandup::core::driver::{Driver, DriverEvent, SNOOZE_MINUTES};
use rstandup::errors::AppError;
use rstandup::models::Notification;

mod common;
use common::{FailingNotifier, RecordingNotifier, office_config, tuesday, wednesday};

fn office_driver(now: chrono::NaiveDateTime) -> Driver<RecordingNotifier> {
    Driver::new(office_config(), true, RecordingNotifier::default(), now)
}

#[test]
fn test_driver_fires_reminder_and_work_start_at_nine() {
    let mut driver = office_driver(tuesday(8, 59));
    assert_eq!(driver.next_reminder(), Some(tuesday(9, 0)));

    assert!(driver.tick(tuesday(8, 59)).is_empty());

    let events = driver.tick(tuesday(9, 0));
    assert_eq!(
        events,
        vec![
            DriverEvent::Reminder(tuesday(9, 0)),
            DriverEvent::WorkStart(tuesday(9, 0).date()),
        ]
    );
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));
    assert_eq!(
        driver.notifier().received,
        vec![Notification::stand_up(true), Notification::work_start(true)]
    );

    // same minute again: nothing new
    assert!(driver.tick(tuesday(9, 0)).is_empty());
}

#[test]
fn test_driver_fires_work_end_once() {
    let mut driver = office_driver(tuesday(17, 0));
    assert_eq!(driver.next_reminder(), None);

    let events = driver.tick(tuesday(17, 30));
    assert_eq!(events, vec![DriverEvent::WorkEnd(tuesday(0, 0).date())]);
    assert!(driver.tick(tuesday(17, 30)).is_empty());
    assert_eq!(
        driver.markers().last_work_end_fired,
        Some(tuesday(0, 0).date())
    );
}

#[test]
fn test_snooze_defers_until_it_fires() {
    let mut driver = office_driver(tuesday(10, 0));
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));

    let snoozed = driver.snooze();
    assert_eq!(snoozed, Some(tuesday(11, SNOOZE_MINUTES as u32)));

    // ticks before the snoozed instant keep the offset
    assert!(driver.tick(tuesday(11, 0)).is_empty());
    assert!(driver.tick(tuesday(11, 5)).is_empty());
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 10)));

    let events = driver.tick(tuesday(11, 10));
    assert_eq!(events, vec![DriverEvent::Reminder(tuesday(11, 10))]);

    // full recomputation drops the offset: 13:00 snaps to lunch end
    assert_eq!(driver.next_reminder(), Some(tuesday(13, 30)));
}

#[test]
fn test_snooze_without_reminder_is_noop() {
    let mut driver = office_driver(tuesday(18, 0));
    assert_eq!(driver.snooze(), None);
}

#[test]
fn test_decision_shows_snoozed_reminder() {
    let mut driver = office_driver(tuesday(10, 0));
    driver.snooze();
    let decision = driver.decision(tuesday(10, 1));
    assert_eq!(decision.next_reminder, Some(tuesday(11, 10)));
    assert!(decision.is_active);
}

#[test]
fn test_invalid_settings_keep_previous_configuration() {
    let mut driver = office_driver(tuesday(10, 0));
    let before = driver.config().clone();

    let settings = Config {
        start_time: "nine".to_string(),
        ..Config::default()
    };

    let err = driver.apply_settings(&settings, tuesday(10, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfiguration(_)));
    assert_eq!(driver.config(), &before);
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));
}

#[test]
fn test_valid_settings_replace_configuration() {
    let mut driver = office_driver(tuesday(9, 10));

    let settings = Config {
        interval_minutes: 60,
        sound_enabled: false,
        ..Config::default()
    };

    driver
        .apply_settings(&settings, tuesday(9, 10))
        .expect("valid settings");
    assert_eq!(driver.config().interval_minutes(), 60);
    assert!(!driver.sound_enabled());
    assert_eq!(driver.next_reminder(), Some(tuesday(10, 0)));
}

#[test]
fn test_pause_and_resume() {
    let mut driver = office_driver(tuesday(8, 0));

    driver.set_enabled(false, tuesday(8, 0));
    assert_eq!(driver.next_reminder(), None);
    assert!(driver.tick(tuesday(9, 0)).is_empty());

    driver.set_enabled(true, tuesday(9, 30));
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));
}

#[test]
fn test_day_rollover_rearms_reminders() {
    let mut driver = office_driver(tuesday(18, 0));
    assert_eq!(driver.next_reminder(), None);

    assert!(driver.tick(tuesday(23, 59)).is_empty());
    assert_eq!(driver.next_reminder(), None);

    driver.tick(wednesday(8, 0));
    assert_eq!(driver.next_reminder(), Some(wednesday(9, 0)));
}

#[test]
fn test_stale_reminder_is_dropped_silently() {
    let mut driver = office_driver(tuesday(10, 0));
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));

    // host slept through the rest of Tuesday
    let events = driver.tick(wednesday(8, 0));
    assert!(events.is_empty());
    assert!(driver.notifier().received.is_empty());
    assert_eq!(driver.next_reminder(), Some(wednesday(9, 0)));
}

#[test]
fn test_notifier_failure_does_not_stop_the_tick() {
    let mut driver = Driver::new(office_config(), false, FailingNotifier, tuesday(8, 59));

    let events = driver.tick(tuesday(9, 0));
    assert_eq!(events.len(), 2);
    assert_eq!(
        driver.markers().last_work_start_fired,
        Some(tuesday(0, 0).date())
    );
    assert_eq!(driver.next_reminder(), Some(tuesday(11, 0)));
}
