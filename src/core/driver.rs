//! Tick-driven owner of the schedule session state.
//!
//! The driver holds the active `Configuration`, the `DayMarkers` and the
//! currently armed reminder. It calls the engine once per tick and turns the
//! results into notifications.

use crate::config::Config;
use crate::core::engine::{Engine, evaluate_day_boundary, next_reminder};
use crate::core::notifier::Notifier;
use crate::errors::AppResult;
use crate::models::{Boundary, Configuration, DayMarkers, Notification, ScheduleDecision};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};

pub const SNOOZE_MINUTES: i64 = 10;

/// Side effect applied during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    Reminder(NaiveDateTime),
    WorkStart(NaiveDate),
    WorkEnd(NaiveDate),
}

pub struct Driver<N: Notifier> {
    config: Configuration,
    sound_enabled: bool,
    markers: DayMarkers,
    next_reminder: Option<NaiveDateTime>,
    computed_on: NaiveDate,
    notifier: N,
}

impl<N: Notifier> Driver<N> {
    pub fn new(config: Configuration, sound_enabled: bool, notifier: N, now: NaiveDateTime) -> Self {
        let mut driver = Self {
            config,
            sound_enabled,
            markers: DayMarkers::default(),
            next_reminder: None,
            computed_on: now.date(),
            notifier,
        };
        driver.recompute(now);
        driver
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn markers(&self) -> DayMarkers {
        self.markers
    }

    /// Armed reminder, including any snooze offset.
    pub fn next_reminder(&self) -> Option<NaiveDateTime> {
        self.next_reminder
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Full recomputation from the engine. Discards any snooze offset.
    pub fn recompute(&mut self, now: NaiveDateTime) {
        self.next_reminder = next_reminder(&self.config, now);
        self.computed_on = now.date();
        debug!("next reminder recomputed: {:?}", self.next_reminder);
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<DriverEvent> {
        let mut events = Vec::new();

        let armed = self.next_reminder;
        match armed {
            // leftover from an earlier day (e.g. the host slept)
            Some(due) if due.date() < now.date() => {
                debug!("dropping stale reminder {}", due);
                self.recompute(now);
            }
            None if now.date() != self.computed_on => self.recompute(now),
            _ => {}
        }

        if let Some(due) = self.next_reminder
            && now >= due
        {
            info!("stand-up reminder due at {}", due);
            self.deliver(&Notification::stand_up(self.sound_enabled));
            events.push(DriverEvent::Reminder(due));
            self.recompute(now);
        }

        for which in [Boundary::Start, Boundary::End] {
            let outcome = evaluate_day_boundary(&self.config, self.markers, now, which);
            self.markers = outcome.markers;

            if outcome.fires {
                info!("{} boundary reached on {}", which.as_str(), now.date());
                let (notification, event) = match which {
                    Boundary::Start => (
                        Notification::work_start(self.sound_enabled),
                        DriverEvent::WorkStart(now.date()),
                    ),
                    Boundary::End => (
                        Notification::work_end(self.sound_enabled),
                        DriverEvent::WorkEnd(now.date()),
                    ),
                };
                self.deliver(&notification);
                events.push(event);
            }
        }

        events
    }

    /// Push the armed reminder back by `SNOOZE_MINUTES`. The offset lives
    /// until the next recomputation.
    pub fn snooze(&mut self) -> Option<NaiveDateTime> {
        self.next_reminder = self
            .next_reminder
            .map(|t| t + Duration::minutes(SNOOZE_MINUTES));
        debug!("snoozed, next reminder now {:?}", self.next_reminder);
        self.next_reminder
    }

    /// Replace the configuration from saved settings.
    ///
    /// Invalid settings leave the current configuration untouched.
    pub fn apply_settings(&mut self, settings: &Config, now: NaiveDateTime) -> AppResult<()> {
        let config = settings.schedule()?;
        self.config = config;
        self.sound_enabled = settings.sound_enabled;
        self.recompute(now);
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool, now: NaiveDateTime) {
        self.config.enabled = enabled;
        self.recompute(now);
    }

    /// Engine decision with the driver's armed reminder substituted, so a
    /// snoozed reminder is what gets displayed.
    pub fn decision(&self, now: NaiveDateTime) -> ScheduleDecision {
        let mut decision = Engine::evaluate(&self.config, now);
        decision.next_reminder = self.next_reminder;
        decision
    }

    fn deliver(&mut self, notification: &Notification) {
        if let Err(e) = self.notifier.notify(notification) {
            warn!("failed to deliver '{}': {}", notification.title, e);
        }
    }
}
