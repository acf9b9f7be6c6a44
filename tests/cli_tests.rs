use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rsu, setup_test_config, write_test_config};

#[test]
fn test_init_creates_config_file() {
    let cfg_path = setup_test_config("cli_init");

    rsu()
        .args(["--config", &cfg_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&cfg_path).exists());
    let content = fs::read_to_string(&cfg_path).expect("read config");
    assert!(content.contains("start_time: 09:00") || content.contains("start_time: '09:00'"));

    // second init leaves the file alone
    rsu()
        .args(["--config", &cfg_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_status_json_before_lunch_snaps_to_lunch_end() {
    let cfg_path = setup_test_config("cli_status_json");

    rsu()
        .args([
            "--config",
            &cfg_path,
            "status",
            "--at",
            "2025-09-02 11:05",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"next_reminder\": \"2025-09-02T13:30:00\""))
        .stdout(contains("\"is_work_day\": true"))
        .stdout(contains("\"is_active\": true"));
}

#[test]
fn test_status_on_saturday() {
    let cfg_path = setup_test_config("cli_status_weekend");

    rsu()
        .args(["--config", &cfg_path, "status", "--at", "2025-09-06 10:00"])
        .assert()
        .success()
        .stdout(contains("Weekend"))
        .stdout(contains("Enjoy your weekend!"));
}

#[test]
fn test_status_rejects_bad_instant() {
    let cfg_path = setup_test_config("cli_status_bad_at");

    rsu()
        .args(["--config", &cfg_path, "status", "--at", "soon"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));
}

#[test]
fn test_status_fails_on_invalid_configuration() {
    let cfg_path = write_test_config("cli_status_invalid", "start_time: \"nine\"\n");

    rsu()
        .args(["--config", &cfg_path, "status", "--at", "2025-09-02 10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}

#[test]
fn test_schedule_json_lists_default_entries() {
    let cfg_path = setup_test_config("cli_schedule_json");

    rsu()
        .args(["--config", &cfg_path, "schedule", "--json"])
        .assert()
        .success()
        .stdout(contains("\"time\": \"09:00\""))
        .stdout(contains("\"time\": \"15:30\""))
        .stdout(contains("Stand Up Break"))
        .stdout(contains("Back to Work"))
        .stdout(contains("\"time\": \"11:00\"").not());
}

#[test]
fn test_schedule_table_marks_current_entry() {
    let cfg_path = setup_test_config("cli_schedule_table");

    rsu()
        .args(["--config", &cfg_path, "schedule", "--at", "2025-09-02 12:00"])
        .assert()
        .success()
        .stdout(contains("Daily schedule (every 120 min)"))
        .stdout(contains("▶"))
        .stdout(contains("Lunch Time"));
}

#[test]
fn test_config_set_updates_schedule() {
    let cfg_path = setup_test_config("cli_config_set");

    rsu()
        .args([
            "--config",
            &cfg_path,
            "config",
            "--set",
            "interval_minutes=60",
            "--set",
            "lunch_start=12:00",
            "--set",
            "lunch_end=13:00",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    rsu()
        .args(["--config", &cfg_path, "schedule", "--json"])
        .assert()
        .success()
        .stdout(contains("\"time\": \"10:00\""))
        .stdout(contains("\"time\": \"14:00\""));
}

#[test]
fn test_config_set_invalid_keeps_file() {
    let cfg_path = setup_test_config("cli_config_set_invalid");

    rsu()
        .args(["--config", &cfg_path, "--test", "init"])
        .assert()
        .success();
    let before = fs::read_to_string(&cfg_path).expect("read config");

    rsu()
        .args(["--config", &cfg_path, "config", "--set", "start_time=25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));

    assert_eq!(fs::read_to_string(&cfg_path).expect("read config"), before);
}

#[test]
fn test_config_set_refuses_unreadable_file() {
    let broken = "work_days: [1, 3]\nlunch_start: \"12:15\"\ninterval_minutes: ninety\n";
    let cfg_path = write_test_config("cli_config_set_unreadable", broken);

    rsu()
        .args([
            "--config",
            &cfg_path,
            "config",
            "--set",
            "interval_minutes=90",
        ])
        .assert()
        .failure()
        .stdout(contains("Configuration saved").not());

    assert_eq!(fs::read_to_string(&cfg_path).expect("read config"), broken);
}

#[test]
fn test_config_check_warns_without_work_days() {
    let cfg_path = setup_test_config("cli_config_no_work_days");

    rsu()
        .args(["--config", &cfg_path, "config", "--set", "work_days="])
        .assert()
        .success();

    rsu()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("No work days selected"));
}

#[test]
fn test_config_check_and_migrate() {
    let cfg_path = write_test_config(
        "cli_config_migrate",
        "remindersEnabled: true\nstartTime: \"08:00\"\n",
    );

    rsu()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("lunch_start")));

    rsu()
        .args(["--config", &cfg_path, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Renamed 'startTime'"));

    rsu()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("All configuration fields present"));
}

#[test]
fn test_config_print_shows_file() {
    let cfg_path = write_test_config("cli_config_print", "interval_minutes: 45\n");

    rsu()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("interval_minutes: 45"));
}

#[test]
fn test_watch_stops_after_max_ticks() {
    let cfg_path = setup_test_config("cli_watch");

    rsu()
        .args([
            "--config",
            &cfg_path,
            "--test",
            "watch",
            "--tick-ms",
            "1",
            "--max-ticks",
            "3",
        ])
        .assert()
        .success()
        .stdout(contains("Watching your workday"))
        .stdout(contains("Stopped watching"));
}
