//! Output collaborators of the dashboard.
//!
//! The dashboard never draws anything. It hands formatted strings to a
//! [`DisplaySink`] and alerts to a [`Notifier`]. A browser page, a terminal
//! or a test recorder can sit behind them.
#[cfg(test)]
use mockall::automock;

/// The places where the dashboard shows something.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
pub enum Widget {
    #[display("clock")]
    Clock,
    /// `AM`, `PM` or empty with the 24-hour convention.
    #[display("meridiem")]
    Meridiem,
    #[display("date")]
    Date,
    /// Alarm status line.
    #[display("alarm")]
    Alarm,
    #[display("stopwatch")]
    Stopwatch,
    /// Lap list. Each lap is rendered as a new entry; an empty text clears it.
    #[display("lap")]
    Lap,
    #[display("countdown")]
    Countdown,
    #[display("weather")]
    Weather,
    /// Clock preferences: format, dark mode and theme.
    #[display("preferences")]
    Preferences,
}

/// Semantic tag attached to a rendered text.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
pub enum Tag {
    #[display("warning")]
    Warning,
    #[display("danger")]
    Danger,
    #[display("ringing")]
    Ringing,
    #[display("active")]
    Active,
}

#[cfg_attr(test, automock)]
pub trait DisplaySink: Sync + Send {
    /// It replaces the text shown by `widget`.
    fn render(&self, widget: Widget, text: &str, tag: Option<Tag>);
}

/// An alert for the user, for example when the alarm rings.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg_attr(test, automock)]
pub trait Notifier: Sync + Send {
    fn notify(&self, notification: &Notification);
}
