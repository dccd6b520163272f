use std::time::Duration;

use clock_dashboard::core::command::Command;
use clock_dashboard::core::display::{Tag, Widget};
use clock_dashboard_test_helpers::configuration;

use crate::common::clock::{advance, stop_at};
use crate::dashboard::Environment;

fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn seconds(value: u64) -> Duration {
    Duration::from_secs(value)
}

#[test]
fn the_stopwatch_should_show_the_elapsed_time_at_every_stopwatch_tick() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartStopwatch);
    env.run_for(millis(2_500), millis(10));

    assert_eq!(
        env.display.last(Widget::Stopwatch),
        Some(("00:00:02.50".to_owned(), Some(Tag::Active)))
    );
    // initial render, start and one per tick
    assert_eq!(env.display.texts(Widget::Stopwatch).len(), 2 + 250);
}

#[test]
fn the_stopwatch_should_not_drift_when_the_host_stalls() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartStopwatch);
    advance(millis(3_707));
    env.tick();

    assert_eq!(
        env.display.last(Widget::Stopwatch),
        Some(("00:00:03.70".to_owned(), Some(Tag::Active)))
    );
}

#[test]
fn the_time_between_stop_and_start_should_not_be_counted() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::ToggleStopwatch);
    env.run_for(seconds(1), millis(10));
    env.handle(Command::ToggleStopwatch);

    env.run_for(seconds(60), seconds(1));

    env.handle(Command::ToggleStopwatch);
    env.run_for(seconds(1), millis(10));
    env.handle(Command::Lap);

    assert_eq!(env.display.texts(Widget::Lap), vec!["Lap 1  00:00:02.00".to_owned()]);
}

#[test]
fn the_countdown_should_finish_exactly_once() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartCountdown { minutes: 1, seconds: 30 });
    assert_eq!(env.display.last(Widget::Countdown), Some(("01:30".to_owned(), None)));

    env.run_for(seconds(95), millis(10));

    assert_eq!(env.dashboard.countdown().remaining_seconds(), 0);
    assert_eq!(env.notifier.titles(), vec!["Timer Complete!".to_owned()]);
    assert_eq!(env.display.last(Widget::Countdown), Some(("00:00".to_owned(), None)));
}

#[test]
fn the_countdown_should_enter_the_warning_and_danger_zones() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartCountdown { minutes: 0, seconds: 40 });

    env.run_for(seconds(10), seconds(1));
    assert_eq!(
        env.display.last(Widget::Countdown),
        Some(("00:30".to_owned(), Some(Tag::Warning)))
    );

    env.run_for(seconds(20), seconds(1));
    assert_eq!(
        env.display.last(Widget::Countdown),
        Some(("00:10".to_owned(), Some(Tag::Danger)))
    );
}

#[test]
fn a_paused_countdown_should_keep_its_remaining_time() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartCountdown { minutes: 0, seconds: 10 });
    env.run_for(seconds(3), millis(10));
    env.handle(Command::PauseCountdown);

    env.run_for(seconds(20), millis(100));
    assert_eq!(env.dashboard.countdown().remaining_seconds(), 7);
    assert!(env.notifier.titles().is_empty());

    env.handle(Command::ResumeCountdown);
    env.run_for(seconds(8), millis(10));

    assert_eq!(env.notifier.titles(), vec!["Timer Complete!".to_owned()]);
}

#[test]
fn a_countdown_can_be_started_again_once_finished() {
    stop_at(10, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.handle(Command::StartCountdown { minutes: 0, seconds: 1 });
    env.run_for(seconds(2), millis(10));

    env.handle(Command::StartCountdown { minutes: 0, seconds: 1 });
    env.run_for(seconds(2), millis(10));

    assert_eq!(env.notifier.titles().len(), 2);
}
