//! Console commands.
//!
//! One command per line. Words are separated by whitespace and commands are
//! case-insensitive, except the alarm time, the theme name and the weather
//! report.
//!
//! Command | Action
//! ---|---
//! `start`, `stop`, `toggle` | Start, stop or start/stop the stopwatch.
//! `lap` | Record a lap.
//! `reset` | Reset the stopwatch and clear the laps.
//! `timer <min> [sec]` | Start a countdown.
//! `pause`, `resume`, `toggle-pause` | Pause or resume the countdown.
//! `timer-reset` | Reset the countdown.
//! `alarm [HH:MM]` | Set the alarm.
//! `cancel` | Cancel the alarm.
//! `snooze` | Snooze a ringing alarm.
//! `theme <name>` | Change the background theme, for example `theme color-dark`.
//! `format` | Toggle the 12/24-hour format.
//! `dark` | Toggle dark mode.
//! `t`, `f` | Shortcuts for `dark` and `format`.
//! `weather <report>` | Show a weather report given as JSON, for example `weather {"city":"Madrid","country":"Spain","temperature":21.4,"wind_speed":11.6,"code":2}`.
//! `help` | Show this list.
use std::num::ParseIntError;
use std::str::FromStr;

use clock_dashboard_primitives::theme::UnknownThemeError;
use clock_dashboard_primitives::{DurationSinceUnixEpoch, Theme};
use tracing::{info, warn};

use crate::core::command::Command;
use crate::core::settings::Shortcut;
use crate::core::weather::Report;
use crate::core::Dashboard;

pub const HELP: &str = "\
start | stop | toggle | lap | reset             stopwatch
timer <min> [sec] | pause | resume | toggle-pause | timer-reset   countdown
alarm [HH:MM] | cancel | snooze                 alarm
theme <name> | format | dark | t | f            preferences
weather <report as JSON>                        weather";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("Missing {argument} for the {command} command")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Too many arguments for the {command} command")]
    TooManyArguments { command: &'static str },

    #[error("Invalid number {value:?}: {source}")]
    InvalidNumber { value: String, source: ParseIntError },

    #[error(transparent)]
    UnknownTheme(#[from] UnknownThemeError),

    #[error("Invalid weather report: {0}")]
    InvalidReport(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();

        let Some(name) = words.next() else {
            return Err(ParseError::Empty);
        };

        let arguments: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "start" => Command::StartStopwatch,
            "stop" => Command::StopStopwatch,
            "toggle" => Command::ToggleStopwatch,
            "lap" => Command::Lap,
            "reset" => Command::ResetStopwatch,
            "timer" => return parse_timer(&arguments),
            "pause" => Command::PauseCountdown,
            "resume" => Command::ResumeCountdown,
            "toggle-pause" => Command::TogglePauseCountdown,
            "timer-reset" => Command::ResetCountdown,
            "alarm" => {
                at_most("alarm", &arguments, 1)?;
                return Ok(Command::SetAlarm(arguments.first().map(|time| (*time).to_owned())));
            }
            "cancel" => Command::CancelAlarm,
            "snooze" => Command::Snooze,
            "theme" => {
                at_most("theme", &arguments, 1)?;
                let theme = arguments.first().ok_or(ParseError::MissingArgument {
                    command: "theme",
                    argument: "name",
                })?;
                return Ok(Command::SetTheme(theme.parse::<Theme>()?));
            }
            "format" => Command::ToggleFormat,
            "dark" => Command::ToggleDarkMode,
            "weather" => return parse_weather(line),
            _ => match shortcut(name) {
                Some(shortcut) => Command::Shortcut(shortcut),
                None => return Err(ParseError::UnknownCommand(name.to_owned())),
            },
        };

        if !arguments.is_empty() {
            return Err(ParseError::TooManyArguments {
                command: command_name(&command),
            });
        }

        Ok(command)
    }
}

fn parse_timer(arguments: &[&str]) -> Result<Command, ParseError> {
    at_most("timer", arguments, 2)?;

    let minutes = arguments.first().ok_or(ParseError::MissingArgument {
        command: "timer",
        argument: "minutes",
    })?;

    Ok(Command::StartCountdown {
        minutes: parse_number(minutes)?,
        seconds: arguments.get(1).map_or(Ok(0), |seconds| parse_number(seconds))?,
    })
}

/// The report is the rest of the line, so it may contain spaces.
fn parse_weather(line: &str) -> Result<Command, ParseError> {
    let report = line
        .trim()
        .split_once(char::is_whitespace)
        .map(|(_, report)| report.trim())
        .ok_or(ParseError::MissingArgument {
            command: "weather",
            argument: "report",
        })?;

    serde_json::from_str::<Report>(report)
        .map(Command::ShowWeather)
        .map_err(|err| ParseError::InvalidReport(err.to_string()))
}

fn parse_number(value: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|source| ParseError::InvalidNumber {
        value: value.to_owned(),
        source,
    })
}

fn at_most(command: &'static str, arguments: &[&str], max: usize) -> Result<(), ParseError> {
    if arguments.len() > max {
        return Err(ParseError::TooManyArguments { command });
    }
    Ok(())
}

fn shortcut(name: &str) -> Option<Shortcut> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Shortcut::from_key(key),
        _ => None,
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::StartStopwatch => "start",
        Command::StopStopwatch => "stop",
        Command::ToggleStopwatch => "toggle",
        Command::Lap => "lap",
        Command::ResetStopwatch => "reset",
        Command::StartCountdown { .. } => "timer",
        Command::PauseCountdown => "pause",
        Command::ResumeCountdown => "resume",
        Command::TogglePauseCountdown => "toggle-pause",
        Command::ResetCountdown => "timer-reset",
        Command::SetAlarm(_) => "alarm",
        Command::CancelAlarm => "cancel",
        Command::Snooze => "snooze",
        Command::SetTheme(_) => "theme",
        Command::ToggleFormat => "format",
        Command::ToggleDarkMode => "dark",
        Command::Shortcut(Shortcut::ToggleDarkMode) => "t",
        Command::Shortcut(Shortcut::ToggleFormat) => "f",
        Command::ShowWeather(_) => "weather",
    }
}

/// It parses a console line and applies it to the dashboard. Parse errors
/// and rejected commands are logged; they never stop the console.
pub fn run_line(line: &str, dashboard: &mut Dashboard, now: DurationSinceUnixEpoch) {
    if line.trim().eq_ignore_ascii_case("help") {
        info!("Commands:\n{HELP}");
        return;
    }

    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(ParseError::Empty) => return,
        Err(err) => {
            warn!("{err}. Type `help` for the list of commands");
            return;
        }
    };

    if let Err(err) = dashboard.handle(command, now) {
        warn!("{err}");
    }
}
