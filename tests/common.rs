#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rstandup::core::notifier::Notifier;
use rstandup::errors::{AppError, AppResult};
use rstandup::models::{Configuration, Notification, WorkDays};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsu() -> Command {
    cargo_bin_cmd!("rstandup")
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstandup.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write raw content to a fresh test config path
pub fn write_test_config(name: &str, content: &str) -> String {
    let path = setup_test_config(name);
    fs::write(&path, content).expect("write test config");
    path
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    date(y, mo, d).and_hms_opt(h, mi, s).expect("valid datetime")
}

/// 2025-09-02 is a Tuesday
pub fn tuesday(h: u32, m: u32) -> NaiveDateTime {
    at(2025, 9, 2, h, m, 0)
}

pub fn wednesday(h: u32, m: u32) -> NaiveDateTime {
    at(2025, 9, 3, h, m, 0)
}

pub fn saturday(h: u32, m: u32) -> NaiveDateTime {
    at(2025, 9, 6, h, m, 0)
}

/// Mon-Fri, 09:00 / 11:30 / 13:30 / 17:30, every 120 minutes
pub fn office_config() -> Configuration {
    Configuration::new(
        true,
        WorkDays::weekdays(),
        hm(9, 0),
        hm(11, 30),
        hm(13, 30),
        hm(17, 30),
        120,
    )
    .expect("valid configuration")
}

pub fn config_with(
    start: NaiveTime,
    lunch_start: NaiveTime,
    lunch_end: NaiveTime,
    end: NaiveTime,
    interval: u32,
) -> Configuration {
    Configuration::new(
        true,
        WorkDays::weekdays(),
        start,
        lunch_start,
        lunch_end,
        end,
        interval,
    )
    .expect("valid configuration")
}

/// Notifier that keeps every notification it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub received: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) -> AppResult<()> {
        self.received.push(notification.clone());
        Ok(())
    }
}

/// Notifier that always fails
#[derive(Debug, Default)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&mut self, _notification: &Notification) -> AppResult<()> {
        Err(AppError::Notify("presenter unavailable".into()))
    }
}
