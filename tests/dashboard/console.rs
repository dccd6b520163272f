use std::time::Duration;

use clock_dashboard::console::command::run_line;
use clock_dashboard::core::display::Widget;
use clock_dashboard_clock::clock::Time;
use clock_dashboard_test_helpers::configuration;

use crate::common::clock::stop_at;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::dashboard::Environment;
use crate::CurrentClock;

#[test]
fn console_lines_should_drive_the_dashboard() {
    INIT.call_once(|| {
        tracing_stderr_init(tracing::level_filters::LevelFilter::ERROR);
    });

    stop_at(12, 0, 0);
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    for line in ["timer 0 3", "alarm 12:01", "theme color-light", "f", "not a command", "timer 0 0"] {
        run_line(line, &mut env.dashboard, CurrentClock::now());
    }

    env.run_for(Duration::from_secs(61), Duration::from_secs(1));

    assert_eq!(
        env.notifier.titles(),
        vec!["Timer Complete!".to_owned(), "Time Alert!".to_owned()]
    );
    assert_eq!(
        env.display.last(Widget::Preferences),
        Some(("24H / dark / color-light".to_owned(), None))
    );
}
