//! The core `dashboard` module contains the widget logic, which is
//! independent of the host that shows it.
//!
//! ```text
//! Host                      Domain layer
//!
//!  periodic tick ----\
//!                     |> Dashboard -> engines -> DisplaySink / Notifier
//!  user commands ----/       |
//!                            v
//!                          Store (preferences)
//! ```
//!
//! # Widgets
//!
//! Widget | Engine | Cadence | Persisted
//! ---|---|---|---
//! Wall clock and date | [`formatter`] | clock interval, aligned to whole periods | format, dark mode, theme
//! Alarm | [`alarm::Alarm`] | checked on every clock tick | target time, active flag
//! Stopwatch | [`stopwatch::Stopwatch`] | stopwatch interval, fixed delay, only while running | no
//! Countdown | [`countdown::Countdown`] | countdown interval, fixed rate, only while running | no
//! Weather | [`weather`] | none, shown when a report is supplied | no
//!
//! # Ticks
//!
//! The engines never schedule themselves. The host calls [`Dashboard::tick`]
//! with the current timestamp at the finest cadence and the dashboard decides
//! which engines are due (see [`cadence`]). The stopwatch and the wall clock
//! derive their values from the timestamp, so late ticks do not make them
//! drift. The countdown consumes one second per due tick and catches up the
//! missed ones.
//!
//! The wall clock resolves its UTC offset for every timestamp. Without a
//! configured offset it follows the host time zone, daylight saving changes
//! included.
//!
//! # Commands
//!
//! User actions are sent with [`Dashboard::handle`]. Each command changes the
//! state of one engine and renders the result before returning, so the next
//! tick always sees the new state. Invalid input is returned as an
//! [`Error`](crate::core::error::Error) and leaves the state untouched.
//!
//! # Preferences
//!
//! Clock and alarm preferences are loaded when the dashboard is built and
//! saved after every change, including a snooze. A saved alarm that was
//! ringing comes back armed.
pub mod alarm;
pub mod cadence;
pub mod command;
pub mod countdown;
pub mod display;
pub mod error;
pub mod formatter;
pub mod services;
pub mod settings;
pub mod stopwatch;
pub mod store;
pub mod weather;

use std::sync::Arc;

use clock_dashboard_clock::conv::{
    convert_from_timestamp_to_clock_reading, convert_from_timestamp_to_date, utc_offset_from_minutes, ConstantOffset,
    HostOffset, OffsetSource,
};
use clock_dashboard_configuration::Configuration;
use clock_dashboard_primitives::{DurationSinceUnixEpoch, HourMinute};
use tracing::debug;

use self::alarm::{Alarm, Ring};
use self::cadence::Cadence;
use self::command::Command;
use self::countdown::{Countdown, Thresholds, Tick, Zone};
use self::display::{DisplaySink, Notification, Notifier, Tag, Widget};
use self::error::Error;
use self::formatter::{format_clock, format_countdown, format_date, format_duration};
use self::settings::{ClockSettings, SettingsStore};
use self::stopwatch::Stopwatch;
use self::store::Store;
use self::weather::Report;

pub const ALARM_RINGING_TEXT: &str = "Alarm is ringing!";
pub const ALARM_NOTIFICATION_TITLE: &str = "Time Alert!";
pub const COUNTDOWN_NOTIFICATION_TITLE: &str = "Timer Complete!";
pub const COUNTDOWN_NOTIFICATION_BODY: &str = "Your countdown timer has finished.";

/// The composition root of the widgets.
pub struct Dashboard {
    offset_source: Arc<dyn OffsetSource>,
    settings: SettingsStore,
    clock_settings: ClockSettings,
    alarm: Alarm,
    stopwatch: Stopwatch,
    countdown: Countdown,
    clock_cadence: Cadence,
    stopwatch_cadence: Cadence,
    countdown_cadence: Cadence,
    display: Arc<dyn DisplaySink>,
    notifier: Arc<dyn Notifier>,
}

impl Dashboard {
    /// It builds the dashboard, restores the stored preferences and renders
    /// the initial state of every widget. The wall clock is rendered on the
    /// first tick.
    ///
    /// The wall clock uses the configured UTC offset, or the offset of the
    /// host time zone at each instant when there is none.
    #[must_use]
    pub fn new(
        config: &Configuration,
        store: Arc<dyn Store>,
        display: Arc<dyn DisplaySink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let offset_source: Arc<dyn OffsetSource> =
            match config.clock.utc_offset_minutes.and_then(utc_offset_from_minutes) {
                Some(offset) => Arc::new(ConstantOffset(offset)),
                None => Arc::new(HostOffset),
            };

        Self::with_offset_source(config, offset_source, store, display, notifier)
    }

    /// Same as [`Dashboard::new`] with the source of the wall clock UTC
    /// offset given by the caller. The `[clock]` offset option is ignored.
    #[must_use]
    pub fn with_offset_source(
        config: &Configuration,
        offset_source: Arc<dyn OffsetSource>,
        store: Arc<dyn Store>,
        display: Arc<dyn DisplaySink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let settings = SettingsStore::new(store, ClockSettings::from(&config.clock));
        let clock_settings = settings.load_clock_settings();

        let mut alarm = Alarm::new(config.alarm.snooze_minutes);
        alarm.restore(&settings.load_alarm_settings());

        let countdown = Countdown::new(Thresholds {
            warning_secs: config.countdown.warning_threshold_secs,
            danger_secs: config.countdown.danger_threshold_secs,
        });

        let mut clock_cadence = Cadence::aligned(config.scheduler.clock_interval());
        clock_cadence.schedule_at(DurationSinceUnixEpoch::ZERO);

        let dashboard = Self {
            offset_source,
            settings,
            clock_settings,
            alarm,
            stopwatch: Stopwatch::new(),
            countdown,
            clock_cadence,
            stopwatch_cadence: Cadence::fixed_delay(config.scheduler.stopwatch_interval()),
            countdown_cadence: Cadence::fixed_rate(config.scheduler.countdown_interval()),
            display,
            notifier,
        };

        debug!("dashboard built");

        dashboard.render_preferences();
        dashboard.render_alarm();
        dashboard.render_stopwatch();
        dashboard.render_countdown();

        dashboard
    }

    #[must_use]
    pub fn clock_settings(&self) -> ClockSettings {
        self.clock_settings
    }

    #[must_use]
    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    #[must_use]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// It advances every engine that is due at `now`.
    pub fn tick(&mut self, now: DurationSinceUnixEpoch) {
        if self.clock_cadence.fire(now) {
            self.render_clock(now);
            self.check_alarm(now);
        }

        if self.stopwatch_cadence.fire(now) {
            self.stopwatch.tick(now);
            self.render_stopwatch();
        }

        if self.countdown_cadence.fire(now) {
            self.count_down();
        }
    }

    /// It applies a user command.
    ///
    /// # Errors
    ///
    /// Will return the engine error when the command input is not valid:
    ///
    /// - `Error::InvalidDuration` or `Error::CountdownInProgress` when
    ///   starting a countdown.
    /// - `Error::MissingTime` or `Error::MalformedTime` when setting the
    ///   alarm.
    pub fn handle(&mut self, command: Command, now: DurationSinceUnixEpoch) -> Result<(), Error> {
        debug!("command: {command:?}");

        match command {
            Command::StartStopwatch => {
                self.stopwatch.start(now);
                self.sync_stopwatch_cadence(now);
            }
            Command::StopStopwatch => {
                self.stopwatch.stop(now);
                self.sync_stopwatch_cadence(now);
            }
            Command::ToggleStopwatch => {
                self.stopwatch.toggle(now);
                self.sync_stopwatch_cadence(now);
            }
            Command::Lap => {
                self.stopwatch.tick(now);
                if let Some(lap) = self.stopwatch.add_lap() {
                    self.display.render(Widget::Lap, &lap.display(), None);
                }
            }
            Command::ResetStopwatch => {
                self.stopwatch.reset();
                self.stopwatch_cadence.disarm();
                self.render_stopwatch();
                self.display.render(Widget::Lap, "", None);
            }
            Command::StartCountdown { minutes, seconds } => {
                self.countdown.configure(minutes, seconds)?;
                self.countdown_cadence.anchor(now);
                self.render_countdown();
            }
            Command::PauseCountdown => {
                self.countdown.pause();
                self.sync_countdown_cadence(now);
            }
            Command::ResumeCountdown => {
                self.countdown.resume();
                self.sync_countdown_cadence(now);
            }
            Command::TogglePauseCountdown => {
                self.countdown.toggle_pause();
                self.sync_countdown_cadence(now);
            }
            Command::ResetCountdown => {
                self.countdown.reset();
                self.countdown_cadence.disarm();
                self.render_countdown();
            }
            Command::SetAlarm(time) => {
                self.alarm.set(time.as_deref())?;
                self.alarm_changed();
            }
            Command::CancelAlarm => {
                self.alarm.cancel();
                self.alarm_changed();
            }
            Command::Snooze => {
                let minute = self.current_minute(now);
                if self.alarm.snooze(minute).is_some() {
                    self.alarm_changed();
                }
            }
            Command::SetTheme(theme) => {
                self.clock_settings.set_theme(theme);
                self.clock_settings_changed(now);
            }
            Command::ToggleFormat => {
                self.clock_settings.toggle_format();
                self.clock_settings_changed(now);
            }
            Command::ToggleDarkMode => {
                self.clock_settings.toggle_dark_mode();
                self.clock_settings_changed(now);
            }
            Command::Shortcut(shortcut) => {
                self.clock_settings.apply(shortcut);
                self.clock_settings_changed(now);
            }
            Command::ShowWeather(report) => self.show_weather(&report),
        }

        Ok(())
    }

    /// It shows the weather conditions supplied by the host.
    pub fn show_weather(&self, report: &Report) {
        self.display
            .render(Widget::Weather, &format!("{} {}", report.icon(), report.summary()), None);
    }

    /// Starting arms the stopwatch frames and stopping disarms them.
    fn sync_stopwatch_cadence(&mut self, now: DurationSinceUnixEpoch) {
        if self.stopwatch.is_running() {
            if !self.stopwatch_cadence.is_armed() {
                self.stopwatch_cadence.anchor(now);
            }
        } else {
            self.stopwatch_cadence.disarm();
        }
        self.render_stopwatch();
    }

    /// Pausing stops the countdown ticks and resuming starts a new period.
    fn sync_countdown_cadence(&mut self, now: DurationSinceUnixEpoch) {
        if self.countdown.is_running() {
            if !self.countdown_cadence.is_armed() {
                self.countdown_cadence.anchor(now);
            }
        } else {
            self.countdown_cadence.disarm();
        }
        self.render_countdown();
    }

    fn count_down(&mut self) {
        match self.countdown.tick() {
            Tick::Ignored => self.countdown_cadence.disarm(),
            Tick::Counting(_) => self.render_countdown(),
            Tick::Finished => {
                self.countdown_cadence.disarm();
                self.render_countdown();
                self.notifier
                    .notify(&Notification::new(COUNTDOWN_NOTIFICATION_TITLE, COUNTDOWN_NOTIFICATION_BODY));
            }
        }
    }

    fn check_alarm(&mut self, now: DurationSinceUnixEpoch) {
        let minute = self.current_minute(now);
        if let Some(Ring { target }) = self.alarm.tick(minute) {
            self.render_alarm();
            self.notifier.notify(&Notification::new(
                ALARM_NOTIFICATION_TITLE,
                format!("Your alarm at {target} is ringing!"),
            ));
        }
    }

    fn alarm_changed(&self) {
        self.settings.save_alarm_settings(&self.alarm.settings());
        self.render_alarm();
    }

    fn clock_settings_changed(&self, now: DurationSinceUnixEpoch) {
        self.settings.save_clock_settings(&self.clock_settings);
        self.render_preferences();
        self.render_clock(now);
    }

    fn current_minute(&self, now: DurationSinceUnixEpoch) -> HourMinute {
        convert_from_timestamp_to_clock_reading(now, &self.offset_source.offset_at(now)).hour_minute()
    }

    fn render_clock(&self, now: DurationSinceUnixEpoch) {
        let utc_offset = self.offset_source.offset_at(now);
        let reading = convert_from_timestamp_to_clock_reading(now, &utc_offset);
        let (time, meridiem) = format_clock(&reading, self.clock_settings.use_24_hour);

        self.display.render(Widget::Clock, &time, None);
        self.display.render(Widget::Meridiem, meridiem, None);
        self.display.render(
            Widget::Date,
            &format_date(&convert_from_timestamp_to_date(now, &utc_offset)),
            None,
        );
    }

    fn render_alarm(&self) {
        match (self.alarm.is_ringing(), self.alarm.target()) {
            (true, _) => self.display.render(Widget::Alarm, ALARM_RINGING_TEXT, Some(Tag::Ringing)),
            (false, Some(target)) if self.alarm.is_active() => {
                self.display
                    .render(Widget::Alarm, &format!("Alarm set for {target}"), Some(Tag::Active));
            }
            _ => self.display.render(Widget::Alarm, "", None),
        }
    }

    fn render_stopwatch(&self) {
        let tag = self.stopwatch.is_running().then_some(Tag::Active);
        self.display
            .render(Widget::Stopwatch, &format_duration(self.stopwatch.elapsed()), tag);
    }

    fn render_countdown(&self) {
        let tag = self.countdown.zones().most_urgent().map(|zone| match zone {
            Zone::Warning => Tag::Warning,
            Zone::Danger => Tag::Danger,
        });
        self.display
            .render(Widget::Countdown, &format_countdown(self.countdown.remaining_seconds()), tag);
    }

    fn render_preferences(&self) {
        let settings = &self.clock_settings;
        let text = format!(
            "{} / {} / {}",
            if settings.use_24_hour { "24H" } else { "12H" },
            if settings.dark_mode { "dark" } else { "light" },
            settings.theme
        );
        self.display.render(Widget::Preferences, &text, None);
    }
}
