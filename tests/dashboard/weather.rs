use clock_dashboard::console::command::run_line;
use clock_dashboard::core::display::Widget;
use clock_dashboard::core::weather::Report;
use clock_dashboard_clock::clock::Time;
use clock_dashboard_test_helpers::configuration;

use crate::dashboard::Environment;
use crate::CurrentClock;

#[test]
fn a_supplied_weather_report_should_be_shown_with_its_icon() {
    let env = Environment::new(&configuration::ephemeral_with_memory_store());

    env.dashboard.show_weather(&Report {
        city: "Oslo".to_owned(),
        country: "Norway".to_owned(),
        temperature: -3.5,
        wind_speed: 20.2,
        code: 73,
    });

    assert_eq!(
        env.display.last(Widget::Weather),
        Some(("\u{2744}\u{fe0f} Oslo, Norway: -3°C, Snow, Wind: 20 km/h".to_owned(), None))
    );
}

#[test]
fn a_weather_report_typed_on_the_console_should_be_shown() {
    let mut env = Environment::new(&configuration::ephemeral_with_memory_store());

    run_line(
        r#"weather {"city": "Cape Town", "country": "South Africa", "temperature": 17.5, "wind_speed": 31, "code": 1}"#,
        &mut env.dashboard,
        CurrentClock::now(),
    );

    let (text, _) = env.display.last(Widget::Weather).unwrap();
    assert!(text.ends_with("Cape Town, South Africa: 18°C, Mainly clear, Wind: 31 km/h"));
}
