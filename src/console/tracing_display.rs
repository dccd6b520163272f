//! Display sink and notifier that emit `tracing` events.
//!
//! The wall clock and the stopwatch are rendered many times per second, so
//! they are logged at the `debug` and `trace` levels. Everything else is
//! logged at `info`.
use tracing::{debug, info, trace, warn};

use crate::core::display::{DisplaySink, Notification, Notifier, Tag, Widget};

pub const DISPLAY_LOG_TARGET: &str = "DISPLAY";
pub const NOTIFICATION_LOG_TARGET: &str = "NOTIFICATION";

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDisplay;

impl DisplaySink for TracingDisplay {
    fn render(&self, widget: Widget, text: &str, tag: Option<Tag>) {
        let tag = tag.map(|tag| tag.to_string()).unwrap_or_default();

        match widget {
            Widget::Stopwatch => trace!(target: DISPLAY_LOG_TARGET, %widget, %tag, "{text}"),
            Widget::Clock | Widget::Meridiem | Widget::Date => debug!(target: DISPLAY_LOG_TARGET, %widget, %tag, "{text}"),
            _ => info!(target: DISPLAY_LOG_TARGET, %widget, %tag, "{text}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        warn!(target: NOTIFICATION_LOG_TARGET, title = %notification.title, "{}", notification.body);
    }
}
