use std::time::Duration;

use chrono::FixedOffset;
use clock_dashboard_clock::clock::stopped::Stopped as _;
use clock_dashboard_clock::clock::Time;
use clock_dashboard_clock::conv::convert_from_timestamp_to_clock_reading;
use clock_dashboard_primitives::ClockReading;

use crate::CurrentClock;

#[test]
fn it_should_use_stopped_time_for_testing() {
    assert_eq!(CurrentClock::dbg_clock_type(), "Stopped".to_owned());

    let time = CurrentClock::now();
    std::thread::sleep(Duration::from_millis(50));
    let time_2 = CurrentClock::now();

    assert_eq!(time, time_2);
}

#[test]
fn it_should_read_the_wall_clock_from_the_stopped_time() {
    CurrentClock::local_set(&Duration::from_secs((7 * 60 + 59) * 60 + 59));
    CurrentClock::local_add(&Duration::from_secs(1)).unwrap();

    let reading = convert_from_timestamp_to_clock_reading(CurrentClock::now(), &FixedOffset::east_opt(0).unwrap());

    assert_eq!(reading, ClockReading::new(8, 0, 0));
}
