use std::fs;
use std::time::Duration;

use clock_dashboard::core::command::Command;
use clock_dashboard::core::display::Widget;
use clock_dashboard::core::settings::{ClockSettings, Shortcut};
use clock_dashboard_primitives::Theme;
use clock_dashboard_test_helpers::configuration;

use crate::common::clock::stop_at;
use crate::dashboard::Environment;

#[test]
fn the_clock_should_show_the_time_and_the_date() {
    stop_at(15, 4, 5);
    let mut env = Environment::new(&configuration::ephemeral());

    env.tick();

    assert_eq!(env.display.last(Widget::Clock), Some(("03:04:05".to_owned(), None)));
    assert_eq!(env.display.last(Widget::Meridiem), Some(("PM".to_owned(), None)));
    assert_eq!(
        env.display.last(Widget::Date),
        Some(("Sunday, January 5, 2025".to_owned(), None))
    );
}

#[test]
fn the_clock_should_use_the_configured_defaults() {
    stop_at(15, 4, 5);
    let mut env = Environment::new(&configuration::ephemeral_with_24_hour_clock());

    env.tick();

    assert_eq!(env.display.last(Widget::Clock), Some(("15:04:05".to_owned(), None)));
    assert_eq!(env.display.last(Widget::Meridiem), Some((String::new(), None)));
}

#[test]
fn the_clock_preferences_should_be_restored_after_a_restart() {
    let config = configuration::ephemeral();
    stop_at(15, 4, 5);

    {
        let mut env = Environment::new(&config);
        env.handle(Command::ToggleFormat);
        env.handle(Command::Shortcut(Shortcut::ToggleDarkMode));
        env.handle(Command::SetTheme(Theme::GradientForest));
    }

    let mut env = Environment::new(&config);
    env.tick();

    assert_eq!(
        env.dashboard.clock_settings(),
        ClockSettings {
            use_24_hour: true,
            dark_mode: false,
            theme: Theme::GradientForest
        }
    );
    assert_eq!(env.display.last(Widget::Clock), Some(("15:04:05".to_owned(), None)));
}

#[test]
fn a_corrupt_settings_file_should_be_replaced_by_the_defaults() {
    let config = configuration::ephemeral();
    fs::write(&config.storage.path, "{ this is not json").unwrap();
    stop_at(8, 0, 0);

    let mut env = Environment::new(&config);

    assert_eq!(env.dashboard.clock_settings(), ClockSettings::from(&config.clock));

    // and it can be saved again
    env.handle(Command::ToggleDarkMode);
    let restored = Environment::new(&config);

    assert!(!restored.dashboard.clock_settings().dark_mode);
}

#[test]
fn the_clock_should_be_rendered_on_every_whole_second() {
    stop_at(8, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.run_for(Duration::from_secs(5), Duration::from_millis(10));

    assert_eq!(
        env.display.texts(Widget::Clock),
        vec!["08:00:00", "08:00:01", "08:00:02", "08:00:03", "08:00:04", "08:00:05"]
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    );
}

#[test]
fn no_second_should_be_skipped_when_the_host_ticks_off_the_second() {
    stop_at(8, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.run_for(Duration::from_secs(120), Duration::from_millis(17));

    let seconds: Vec<String> = env.display.texts(Widget::Clock);

    // the last tick lands at 08:02:00.003
    assert_eq!(seconds.len(), 121);
    assert_eq!(seconds.first().map(String::as_str), Some("08:00:00"));
    assert_eq!(seconds.last().map(String::as_str), Some("08:02:00"));
    assert!(seconds.windows(2).all(|pair| pair[0] != pair[1]));
}
