use std::time::Duration;

use clock_dashboard::core::command::Command;
use clock_dashboard::core::display::{Notification, Tag, Widget};
use clock_dashboard_test_helpers::configuration;

use crate::common::clock::stop_at;
use crate::dashboard::Environment;

fn seconds(value: u64) -> Duration {
    Duration::from_secs(value)
}

#[test]
fn the_alarm_should_ring_once_and_ring_again_after_snoozing() {
    stop_at(6, 59, 0);
    let mut env = Environment::new(&configuration::ephemeral());

    env.handle(Command::SetAlarm(Some("07:00".to_owned())));
    env.run_for(seconds(120), seconds(1));

    assert_eq!(
        env.notifier.all(),
        vec![Notification::new("Time Alert!", "Your alarm at 07:00 is ringing!")]
    );
    assert_eq!(
        env.display.last(Widget::Alarm),
        Some(("Alarm is ringing!".to_owned(), Some(Tag::Ringing)))
    );

    // 07:01
    env.handle(Command::Snooze);
    assert_eq!(
        env.display.last(Widget::Alarm),
        Some(("Alarm set for 07:06".to_owned(), Some(Tag::Active)))
    );

    env.run_for(seconds(6 * 60), seconds(1));

    assert_eq!(
        env.notifier.all().last(),
        Some(&Notification::new("Time Alert!", "Your alarm at 07:06 is ringing!"))
    );
    assert_eq!(env.notifier.all().len(), 2);
}

#[test]
fn snoozing_should_wrap_around_midnight() {
    stop_at(23, 58, 10);
    let mut env = Environment::new(&configuration::ephemeral());

    env.handle(Command::SetAlarm(Some("23:58".to_owned())));
    env.tick();
    env.handle(Command::Snooze);

    assert_eq!(
        env.display.last(Widget::Alarm),
        Some(("Alarm set for 00:03".to_owned(), Some(Tag::Active)))
    );
}

#[test]
fn snoozing_an_alarm_that_is_not_ringing_should_change_nothing() {
    stop_at(6, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral());
    env.handle(Command::SetAlarm(Some("07:00".to_owned())));

    env.handle(Command::Snooze);

    assert_eq!(
        env.display.last(Widget::Alarm),
        Some(("Alarm set for 07:00".to_owned(), Some(Tag::Active)))
    );
}

#[test]
fn an_active_alarm_should_be_restored_armed_after_a_restart() {
    let config = configuration::ephemeral();
    stop_at(6, 0, 0);

    {
        let mut env = Environment::new(&config);
        env.handle(Command::SetAlarm(Some("06:30".to_owned())));
    }

    let mut env = Environment::new(&config);

    assert_eq!(
        env.display.last(Widget::Alarm),
        Some(("Alarm set for 06:30".to_owned(), Some(Tag::Active)))
    );

    env.run_for(seconds(31 * 60), seconds(1));

    assert_eq!(env.notifier.titles(), vec!["Time Alert!".to_owned()]);
}

#[test]
fn a_cancelled_alarm_should_stay_cancelled_after_a_restart() {
    let config = configuration::ephemeral();
    stop_at(6, 0, 0);

    {
        let mut env = Environment::new(&config);
        env.handle(Command::SetAlarm(Some("06:30".to_owned())));
        env.handle(Command::CancelAlarm);
    }

    let env = Environment::new(&config);

    assert!(!env.dashboard.alarm().is_active());
    assert_eq!(env.display.last(Widget::Alarm), Some((String::new(), None)));
}
